use reqwest::header::{ACCEPT, USER_AGENT};

use entities::{HttpStatusFeed, SiteActivity};
use errors::FeedError;

pub mod builder;
pub mod entities;
pub mod errors;
pub mod parser;

/// Accept header preferring XML, as expected by the AuroraWatch UK API.
const ACCEPT_XML: &str = "application/xml,text/xml;q=0.9,*/*;q=0.8";

/// Trait representing the capabilities offered by an alerting-site status feed
#[allow(async_fn_in_trait)]
pub trait StatusFeed {
    async fn fetch_activity(&self) -> Result<SiteActivity, FeedError>;
}

/// HTTP implementation of the AuroraWatch UK alerting-site activity feed.
///
/// ## Example
/// ```no_run
/// use aurorawatch_feed::builder::HttpStatusFeedBuilder;
/// use aurorawatch_feed::StatusFeed;
///
/// # async fn run() {
/// let feed = HttpStatusFeedBuilder::default().build().unwrap();
///
/// let activity = feed.fetch_activity().await.unwrap();
///
/// println!("latest sample: {:?}", activity.latest());
/// # }
/// ```
impl StatusFeed for HttpStatusFeed {
    /// Function that performs one GET of the activity document and decodes
    /// it. Yields an error on network trouble, non-2xx responses, malformed
    /// XML, or an unexpected document shape — no retry is attempted.
    async fn fetch_activity(&self) -> Result<SiteActivity, FeedError> {
        let body = self
            .http_client
            .get(&self.endpoint)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, ACCEPT_XML)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parser::parse_site_activity(&body)
    }
}
