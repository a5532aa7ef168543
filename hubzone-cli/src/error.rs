//! CLI error handling with user-friendly messages.

use std::fmt;
use std::process;

use hubzone::loader::LoadError;
use hubzone::service::ServiceError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Failed to load the dataset
    Dataset(LoadError),
    /// Lookup operation failed
    Lookup(ServiceError),
    /// Operation was cancelled before completing
    Cancelled,
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Dataset(LoadError::NotFound(_)) => {
                eprintln!();
                eprintln!("Pass the dataset file with --dataset <path>. Both plain JSON");
                eprintln!("and gzip-compressed (.json.gz) datasets are supported.");
            }
            CliError::Lookup(ServiceError::InvalidCoordinates { .. }) => {
                eprintln!();
                eprintln!("Latitude must be between -90 and 90, longitude between -180 and 180.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Dataset(e) => write!(f, "Failed to load dataset: {}", e),
            CliError::Lookup(e) => write!(f, "{}", e),
            CliError::Cancelled => write!(f, "Operation cancelled"),
        }
    }
}

impl From<LoadError> for CliError {
    fn from(e: LoadError) -> Self {
        CliError::Dataset(e)
    }
}

impl From<ServiceError> for CliError {
    fn from(e: ServiceError) -> Self {
        CliError::Lookup(e)
    }
}
