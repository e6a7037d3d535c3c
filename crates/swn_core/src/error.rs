use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Transport or status failure talking to an upstream provider.
    /// The request URL is stripped before the error is stored.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The provider answered, but its envelope reported a failure.
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Unauthorized")]
    Unauthorized,
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Http(error.without_url())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
