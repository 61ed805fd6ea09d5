use thiserror::Error;

pub use crate::features::signup::validation::ValidationErrors;

/// Problems found in a page configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {message}")]
    Parse { message: String },

    #[error("Configuration error: {field} = {value}")]
    InvalidValue { field: String, value: String },

    #[error("Configuration error: {field} must not be empty")]
    Empty { field: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Parse {
            message: error.to_string(),
        }
    }
}
