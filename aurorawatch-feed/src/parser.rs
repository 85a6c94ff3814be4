//! Decoding of the alerting-site activity XML document into [SiteActivity].
use roxmltree::{Document, Node};

use crate::{
    entities::{ActivitySample, SiteActivity},
    errors::FeedError,
};

/// Parses an alerting-site activity document.
///
/// The root element carries a `site_id` attribute (`namespace:source:CODE`)
/// and contains an `updated/datetime` node plus zero or more `activity`
/// elements in chronological order.
pub fn parse_site_activity(xml: &str) -> Result<SiteActivity, FeedError> {
    let doc = Document::parse(xml.trim())?;
    let root = doc.root_element();

    let site_code = root
        .attribute("site_id")
        .filter(|sid| !sid.is_empty())
        .and_then(|sid| sid.split(':').last())
        .map(str::to_string);

    let updated = root
        .children()
        .find(|n| n.has_tag_name("updated"))
        .and_then(|updated| child_text(&updated, "datetime"));

    let samples = root
        .children()
        .filter(|n| n.has_tag_name("activity"))
        .map(parse_activity)
        .collect();

    Ok(SiteActivity {
        site_code,
        updated,
        samples,
    })
}

fn parse_activity(node: Node) -> ActivitySample {
    let status = node
        .attribute("status_id")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .unwrap_or_else(|| String::from("unknown"));

    // The raw value text is kept as-is; numeric parsing happens when the
    // sample is selected, see ActivitySample::numeric_value.
    let value = node
        .children()
        .find(|n| n.has_tag_name("value"))
        .and_then(|n| n.text())
        .filter(|raw| !raw.is_empty())
        .map(str::to_string);

    ActivitySample {
        status,
        datetime: child_text(&node, "datetime"),
        value,
    }
}

fn child_text(node: &Node, name: &str) -> Option<String> {
    node.children()
        .find(|n| n.has_tag_name(name))
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::parse_site_activity;
    use crate::errors::FeedError;

    const EXAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<site_activity api_version="0.2.5" project_id="project:AWN" site_id="site:AWN:SUM">
  <updated><datetime>2024-01-01T00:00:00Z</datetime></updated>
  <activity status_id="Green"><datetime>2024-01-01T00:00:00Z</datetime><value>12.5</value></activity>
  <activity status_id="Amber"><datetime>2024-01-01T00:05:00Z</datetime><value>75</value></activity>
</site_activity>"#;

    #[test]
    fn should_decode_a_complete_document() {
        let activity = parse_site_activity(EXAMPLE_FEED).unwrap();

        assert_eq!(activity.site_code.as_deref(), Some("SUM"));
        assert_eq!(activity.updated.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(activity.samples.len(), 2);

        let latest = activity.latest().unwrap();
        assert_eq!(latest.status, "amber");
        assert_eq!(latest.datetime.as_deref(), Some("2024-01-01T00:05:00Z"));
        assert_eq!(latest.numeric_value().unwrap(), Some(75.0));
    }

    #[rstest]
    #[case::namespaced("site:AWN:SUM", Some("SUM"))]
    #[case::bare_code("SUM", Some("SUM"))]
    #[case::empty("", None)]
    fn should_derive_the_site_code_from_site_id(
        #[case] site_id: &str,
        #[case] expected: Option<&str>,
    ) {
        let xml = format!(r#"<site_activity site_id="{site_id}"></site_activity>"#);

        let activity = parse_site_activity(&xml).unwrap();

        assert_eq!(activity.site_code.as_deref(), expected);
    }

    #[test]
    fn should_leave_the_site_code_empty_when_the_attribute_is_absent() {
        let activity = parse_site_activity("<site_activity></site_activity>").unwrap();

        assert!(activity.site_code.is_none());
        assert!(activity.updated.is_none());
        assert!(activity.samples.is_empty());
    }

    #[rstest]
    #[case::upper_case("Amber", "amber")]
    #[case::padded(" Red ", "red")]
    #[case::empty("", "unknown")]
    fn should_normalize_the_status_id(#[case] status_id: &str, #[case] expected: &str) {
        let xml = format!(
            r#"<site_activity><activity status_id="{status_id}"><value>1</value></activity></site_activity>"#
        );

        let activity = parse_site_activity(&xml).unwrap();

        assert_eq!(activity.latest().unwrap().status, expected);
    }

    #[test]
    fn should_default_the_status_to_unknown_when_the_attribute_is_absent() {
        let xml = "<site_activity><activity><value>1</value></activity></site_activity>";

        let activity = parse_site_activity(xml).unwrap();

        assert_eq!(activity.latest().unwrap().status, "unknown");
    }

    #[test]
    fn should_keep_an_empty_value_element_as_none() {
        let xml = r#"<site_activity><activity status_id="Green"><value></value></activity></site_activity>"#;

        let activity = parse_site_activity(xml).unwrap();

        assert_eq!(activity.latest().unwrap().value, None);
    }

    #[test]
    fn should_yield_a_parse_error_for_malformed_xml() {
        let res = parse_site_activity("<site_activity");

        assert!(matches!(res.unwrap_err(), FeedError::ParseError(_)));
    }
}
