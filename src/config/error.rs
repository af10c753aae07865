//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Session idle timeout must be between 1 second and 1 day")]
    InvalidSessionTimeout,

    #[error("Report title must not be empty")]
    EmptyReportTitle,

    #[error("Report file stem must be a plain file name")]
    InvalidFileStem,

    #[error("Label width must be between 10 and 200")]
    InvalidLabelWidth,

    #[error("Maximum answer length must be positive")]
    InvalidMaxAnswerLength,

    #[error("Invalid PDF timeout")]
    InvalidPdfTimeout,
}
