//! Builder used to construct the HTTP status feed client.
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{entities::HttpStatusFeed, errors::FeedError};

const DEFAULT_ENDPOINT: &str =
    "https://aurorawatch-api.lancs.ac.uk/0.2.5/status/alerting-site-activity.xml";
const DEFAULT_CONTACT_EMAIL: &str = "user@example.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Default)]
pub struct HttpStatusFeedBuilder {
    endpoint: Option<String>,
    contact_email: Option<String>,
    timeout: Option<Duration>,
}

impl HttpStatusFeedBuilder {
    /// Setter for the feed endpoint URL.
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Setter for the contact email embedded in the User-Agent header,
    /// as requested by the AuroraWatch UK API usage policy.
    pub fn with_contact_email(mut self, contact_email: String) -> Self {
        self.contact_email = Some(contact_email);
        self
    }

    /// Setter for the overall request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Function that tries to build the feed client.
    pub fn build(&self) -> Result<HttpStatusFeed, FeedError> {
        let http_client = HttpClient::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;

        let contact_email = self.contact_email.as_deref().unwrap_or(DEFAULT_CONTACT_EMAIL);

        Ok(HttpStatusFeed {
            http_client,
            endpoint: self
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            user_agent: format!("Home Assistant AuroraWatchUK ({contact_email})"),
        })
    }
}
