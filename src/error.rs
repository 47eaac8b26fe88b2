use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request to backend failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Could not deserialize backend response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed place id '{0}'")]
    InvalidPlaceId(String),

    #[error("Could not read config '{path}': {source}")]
    ConfigIo {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, Error>;
