use std::time::Duration;

use aurorawatch_feed::builder::HttpStatusFeedBuilder;
use aurorawatch_sensor::{entities::Reading, poller::Poller, settings::AppSettings, telemetry};

#[tokio::main]
async fn main() {
    telemetry::init();

    let settings = AppSettings::new().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "invalid settings, using compiled defaults");
        AppSettings::default()
    });

    let reading = match HttpStatusFeedBuilder::default()
        .with_endpoint(settings.feed.endpoint)
        .with_contact_email(settings.feed.contact_email)
        .with_timeout(Duration::from_secs(settings.feed.timeout_seconds))
        .build()
    {
        Ok(feed) => Poller::new(feed).poll().await,
        Err(err) => {
            tracing::warn!(error = %err, "unable to build the feed client, emitting the fallback payload");
            Reading::unknown()
        }
    };

    // One JSON line on stdout, exit 0: failure is only visible in the
    // payload's field values.
    println!("{}", reading.to_json_line());
}
