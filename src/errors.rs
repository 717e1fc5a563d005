//! Error types for ssoquery

use thiserror::Error;

use crate::table::ParseError;

/// Main error type for ssoquery
#[derive(Error, Debug)]
pub enum SsoError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid angle: {0}")]
    Angle(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Time out after {0:.1} seconds")]
    Timeout(f64),

    #[error("Service answered with HTTP status {0}")]
    Status(u16),

    #[error("Service error: {0}")]
    Service(String),

    #[error("No results: {0}")]
    NoResults(String),

    #[error("Invalid argument: {0}")]
    Argument(String),
}

pub type Result<T> = std::result::Result<T, SsoError>;
