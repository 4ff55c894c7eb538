use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Configuration(String),
}
