use thiserror::Error;

#[derive(Debug, Error)]
pub enum MusicBrainzError {
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse url: {0}")]
    Url(#[from] url::ParseError),
}
