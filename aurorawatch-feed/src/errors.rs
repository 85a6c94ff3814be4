/// Enum that represents the errors potentially returned while fetching or
/// decoding the activity feed
#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("Init error")]
    InitError(#[source] reqwest::Error),
    #[error("Fetch error")]
    FetchError(#[source] reqwest::Error),
    #[error("Xml parse error")]
    ParseError(#[from] roxmltree::Error),
    #[error("Invalid numeric value: {0}")]
    ValueError(String),
}

// Converts from reqwest::Error to our custom errors
impl From<reqwest::Error> for FeedError {
    fn from(http_error: reqwest::Error) -> Self {
        if http_error.is_builder() {
            FeedError::InitError(http_error)
        } else {
            FeedError::FetchError(http_error)
        }
    }
}
