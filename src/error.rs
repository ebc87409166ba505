use thiserror::Error;
use url::Url;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can end a lookup session early.
///
/// None of these are retried: a failed fetch or a page that no longer looks
/// the way we expect ends the run with exit code 1.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or unusable command line input.
    #[error("{0}")]
    Usage(String),

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: Url,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("song not found")]
    EmptyResult,

    /// A result href could not be parsed. The search page markup changed.
    #[error("malformed result link {href:?}: {source}")]
    MalformedLink {
        href: String,
        #[source]
        source: url::ParseError,
    },

    #[error("no lyrics found on {url}")]
    LyricsNotFound { url: Url },

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
