//! Error types for aws-costs
//!
//! All errors derive from `thiserror` for convenient error handling and
//! automatic `From` implementations. Every failure is terminal for the run;
//! the binary maps each variant to a process exit code via
//! [`AwsCostsError::exit_code`].

use thiserror::Error;

use crate::exitcode;

/// Main error type for aws-costs operations
#[derive(Error, Debug)]
pub enum AwsCostsError {
    /// Date string did not match the required format or calendar
    #[error("Date format must be YYYY-MM-DD")]
    InvalidDate,

    /// Semantically invalid date range
    #[error("Invalid date range. {0}")]
    InvalidRange(String),

    /// Missing or malformed AWS credentials
    #[error(
        "AWS credentials are not set or are invalid. Please set the \
         AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY environment variables."
    )]
    Credentials,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The Cost Explorer API returned an error response
    #[error("Cost Explorer API error: {0}")]
    Api(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON decoding error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AwsCostsError {
    /// Process exit code for this failure.
    ///
    /// Credential and remote-call failures use 500, the convention this tool
    /// has always shipped with. Date and range problems are usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidDate | Self::InvalidRange(_) | Self::Config(_) => exitcode::USAGE,
            Self::Credentials | Self::Api(_) | Self::Network(_) | Self::Json(_) => {
                exitcode::FAILURE
            }
            Self::Io(_) => exitcode::SOFTWARE,
        }
    }
}

/// Convenience type alias for Results in aws-costs
pub type Result<T> = std::result::Result<T, AwsCostsError>;
