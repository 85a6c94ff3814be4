use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub feed: FeedSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedSettings {
    pub endpoint: String,
    pub contact_email: String,
    pub timeout_seconds: u64,
}

const DEFAULT_FEED_ENDPOINT: &str =
    "https://aurorawatch-api.lancs.ac.uk/0.2.5/status/alerting-site-activity.xml";
const DEFAULT_CONTACT_EMAIL: &str = "user@example.com";
const DEFAULT_FEED_TIMEOUT_SECONDS: u64 = 20;

impl AppSettings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_builder = Config::builder()
            .set_default("feed.endpoint", DEFAULT_FEED_ENDPOINT)?
            .set_default("feed.contact_email", DEFAULT_CONTACT_EMAIL)?
            .set_default("feed.timeout_seconds", DEFAULT_FEED_TIMEOUT_SECONDS)?
            .add_source(
                Environment::with_prefix("aw")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config_builder.try_deserialize()
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            feed: FeedSettings {
                endpoint: DEFAULT_FEED_ENDPOINT.to_string(),
                contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
                timeout_seconds: DEFAULT_FEED_TIMEOUT_SECONDS,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::AppSettings;

    #[test]
    fn defaults_match_the_feed_constants() {
        let settings = AppSettings::default();

        assert_eq!(
            settings.feed.endpoint,
            "https://aurorawatch-api.lancs.ac.uk/0.2.5/status/alerting-site-activity.xml"
        );
        assert_eq!(settings.feed.contact_email, "user@example.com");
        assert_eq!(settings.feed.timeout_seconds, 20);
    }
}
