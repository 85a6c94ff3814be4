// Sample output, consumed by a Home Assistant command_line sensor:
//{
//     "state": 75.0,
//     "status": "amber",
//     "data_datetime": "2024-01-01T00:05:00Z",
//     "updated": "2024-01-01T00:00:00Z",
//     "alerting_site": "SUM",
//     "polled_at": "2024-01-01T00:06:12.345678Z",
//     "url": "https://aurorawatch.lancs.ac.uk",
//     "icon": "mdi:flare"
// }

use aurorawatch_feed::{entities::SiteActivity, errors::FeedError};
use chrono::{SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Human-facing reference URL, emitted verbatim with every payload.
pub const REFERENCE_URL: &str = "https://aurorawatch.lancs.ac.uk";

pub const ALERT_ICON: &str = "mdi:flare";
pub const QUIET_ICON: &str = "mdi:weather-sunny";

/// The payload emitted on stdout, one JSON line per run.
#[derive(Debug, Serialize)]
pub struct Reading {
    pub state: StateValue,
    pub status: String,
    pub data_datetime: Option<String>,
    pub updated: Option<String>,
    pub alerting_site: Option<String>,
    pub polled_at: String,
    pub url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
}

/// Latest numeric activity value, or the "unknown" sentinel when the feed
/// carried none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateValue {
    Number(f64),
    Unknown,
}

impl Serialize for StateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StateValue::Number(value) => serializer.serialize_f64(*value),
            StateValue::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

impl Reading {
    /// Safe fallback payload, stamped with the current instant. Built before
    /// any network activity so a valid payload exists whatever happens next.
    pub fn unknown() -> Self {
        Reading {
            state: StateValue::Unknown,
            status: String::from("unknown"),
            data_datetime: None,
            updated: None,
            alerting_site: None,
            polled_at: current_utc_timestamp(),
            url: REFERENCE_URL,
            icon: None,
        }
    }

    /// Merges a fully-validated observation into this reading. `polled_at`
    /// keeps the instant stamped at construction time.
    pub fn apply(&mut self, observation: FeedObservation) {
        self.alerting_site = observation.alerting_site;
        self.updated = observation.updated;

        if let Some(sample) = observation.sample {
            self.icon = Some(icon_for(&sample.status));
            self.status = sample.status;
            self.data_datetime = sample.datetime;
            self.state = match sample.value {
                Some(value) => StateValue::Number(value),
                None => StateValue::Unknown,
            };
        }
    }

    /// Serializes the reading as the single JSON line expected by the
    /// command_line sensor integration.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).expect("reading is always serializable")
    }
}

/// Validated extraction result of one fetched activity document.
///
/// Constructed through [TryFrom], so that a malformed numeric value fails the
/// whole extraction before any field of the default payload is overwritten.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedObservation {
    pub alerting_site: Option<String>,
    pub updated: Option<String>,
    pub sample: Option<ActivityObservation>,
}

/// The fields of the latest activity sample, numeric value already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityObservation {
    pub status: String,
    pub datetime: Option<String>,
    pub value: Option<f64>,
}

impl TryFrom<&SiteActivity> for FeedObservation {
    type Error = FeedError;

    fn try_from(activity: &SiteActivity) -> Result<Self, Self::Error> {
        let sample = activity
            .latest()
            .map(|sample| {
                Ok::<_, FeedError>(ActivityObservation {
                    status: sample.status.clone(),
                    datetime: sample.datetime.clone(),
                    value: sample.numeric_value()?,
                })
            })
            .transpose()?;

        Ok(FeedObservation {
            alerting_site: activity.site_code.clone(),
            updated: activity.updated.clone(),
            sample,
        })
    }
}

/// The sensor icon matching a status level. Amber and red are the alerting
/// levels; everything else, "unknown" included, maps to the quiet icon.
pub fn icon_for(status: &str) -> &'static str {
    if matches!(status, "amber" | "red") {
        ALERT_ICON
    } else {
        QUIET_ICON
    }
}

/// ISO-8601 timestamp of the current instant, UTC, with a literal `Z` suffix.
pub fn current_utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
