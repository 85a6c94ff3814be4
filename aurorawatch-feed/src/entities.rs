use reqwest::Client as HttpClient;

use crate::errors::FeedError;

/// Reqwest backed implementation of a [crate::StatusFeed]. Built through
/// [crate::builder::HttpStatusFeedBuilder].
pub struct HttpStatusFeed {
    /// The underlying HTTP client, carrying the configured request timeout
    pub(crate) http_client: HttpClient,
    /// Full URL of the alerting-site activity XML document
    pub(crate) endpoint: String,
    /// User-Agent header value, embedding the configured contact email
    pub(crate) user_agent: String,
}

/// Decoded alerting-site activity document.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteActivity {
    /// Short site code, e.g. "SUM". Derived from the last `:`-delimited
    /// segment of the root `site_id` attribute; `None` when the attribute
    /// is absent or empty.
    pub site_code: Option<String>,
    /// Feed-level last-updated timestamp, as received from the feed.
    pub updated: Option<String>,
    /// Activity samples in document order. The feed lists them
    /// chronologically, oldest first.
    pub samples: Vec<ActivitySample>,
}

impl SiteActivity {
    /// The most recent sample. The feed's own chronological ordering is
    /// trusted: the last element in document order is taken as the latest,
    /// without re-sorting by timestamp.
    pub fn latest(&self) -> Option<&ActivitySample> {
        self.samples.last()
    }
}

/// One `<activity>` record of the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySample {
    /// Severity level (green/yellow/amber/red), trimmed and lower-cased;
    /// "unknown" when the feed carried no usable `status_id`.
    pub status: String,
    /// Timestamp of the sample, as received.
    pub datetime: Option<String>,
    /// Raw text of the `<value>` element. Kept verbatim so a malformed
    /// value only fails once the sample is actually selected.
    pub value: Option<String>,
}

impl ActivitySample {
    /// Numeric activity value of this sample. `Ok(None)` when the feed
    /// carried no value, an error when the text is not a number.
    pub fn numeric_value(&self) -> Result<Option<f64>, FeedError> {
        match self.value.as_deref() {
            Some(raw) => {
                let parsed = raw
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| FeedError::ValueError(raw.to_string()))?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::{ActivitySample, SiteActivity};
    use crate::errors::FeedError;

    fn sample(status: &str, value: Option<&str>) -> ActivitySample {
        ActivitySample {
            status: status.to_string(),
            datetime: Some("2024-01-01T00:05:00Z".to_string()),
            value: value.map(str::to_string),
        }
    }

    #[rstest]
    #[case::plain("75", Some(75.0))]
    #[case::fractional("123.45", Some(123.45))]
    #[case::padded(" 42.0 ", Some(42.0))]
    fn should_parse_numeric_values(#[case] raw: &str, #[case] expected: Option<f64>) {
        let sample = sample("green", Some(raw));

        assert_eq!(sample.numeric_value().unwrap(), expected);
    }

    #[test]
    fn should_yield_none_when_value_is_absent() {
        let sample = sample("green", None);

        assert_eq!(sample.numeric_value().unwrap(), None);
    }

    #[test]
    fn should_yield_a_value_error_for_non_numeric_text() {
        let sample = sample("green", Some("not-a-number"));

        let res = sample.numeric_value();

        assert!(matches!(res.unwrap_err(), FeedError::ValueError(raw) if raw == "not-a-number"));
    }

    #[test]
    fn latest_is_the_last_sample_in_document_order() {
        let activity = SiteActivity {
            site_code: Some("SUM".to_string()),
            updated: None,
            samples: vec![sample("green", Some("10")), sample("amber", Some("75"))],
        };

        assert_eq!(activity.latest().unwrap().status, "amber");
    }

    #[test]
    fn latest_is_none_for_an_empty_feed() {
        let activity = SiteActivity {
            site_code: None,
            updated: None,
            samples: vec![],
        };

        assert!(activity.latest().is_none());
    }
}
