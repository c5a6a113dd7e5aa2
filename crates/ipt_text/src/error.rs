use thiserror::Error;

/// Errors raised by the text utilities.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
