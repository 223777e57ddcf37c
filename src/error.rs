use thiserror::Error;

/// Errors raised while identifying an episode or reading Addic7ed pages.
#[derive(Debug, Error)]
pub enum SubsError {
    #[error("Unable to determine episode data from '{filename}'")]
    Parse { filename: String },

    #[error("No subtitles found")]
    NoResults,

    #[error("Unable to connect to Addic7ed: {0}")]
    Connection(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Exceeded daily limit for subtitle downloads")]
    QuotaExceeded,

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SubsError>;
