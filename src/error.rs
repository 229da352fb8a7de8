use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TarsierError {
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out after {}s", .timeout.as_secs())]
    FetchTimeout { url: String, timeout: Duration },

    #[error("tarsier was not able to parse the article in the provided website url")]
    NoArticleFound,

    #[error("did not find any links on the url")]
    NoLinksFound,
}

impl TarsierError {
    /// Outcomes reported to the user as a message rather than a failure (exit 0).
    pub fn is_informational(&self) -> bool {
        matches!(self, TarsierError::NoArticleFound | TarsierError::NoLinksFound)
    }
}

pub type Result<T> = std::result::Result<T, TarsierError>;
