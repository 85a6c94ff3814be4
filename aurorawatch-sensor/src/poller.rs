use aurorawatch_feed::StatusFeed;

use crate::entities::{FeedObservation, Reading};

/// One-shot poller around a [StatusFeed].
///
/// `poll` never fails: the default payload is built before any network
/// activity, and any fetch, parse, or extraction error falls back to it.
pub struct Poller<F> {
    feed: F,
}

impl<F: StatusFeed> Poller<F> {
    pub fn new(feed: F) -> Self {
        Poller { feed }
    }

    /// Fetches the feed once and produces the reading for this run.
    ///
    /// On any failure the pre-built default payload is returned unchanged;
    /// partial progress is discarded, so the output is either a complete
    /// observation or the all-unknown fallback.
    pub async fn poll(&self) -> Reading {
        let mut reading = Reading::unknown();

        let observation = match self.feed.fetch_activity().await {
            Ok(activity) => FeedObservation::try_from(&activity),
            Err(err) => Err(err),
        };

        match observation {
            Ok(observation) => reading.apply(observation),
            Err(err) => {
                tracing::warn!(error = %err, "feed poll failed, emitting the fallback payload")
            }
        }

        reading
    }
}
