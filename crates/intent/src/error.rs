//! Error taxonomy for plan compilation
//!
//! Every failure is detected before any intent is emitted: validation is
//! front-loaded and fails closed. Each variant names the environment and,
//! where relevant, the exact document field that triggered it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or compiling a plan
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested environment is not in the enumerated known set
    #[error("unknown environment '{name}' (known environments: {known})")]
    UnknownEnvironment { name: String, known: String },

    /// The backing configuration document could not be located
    #[error("no configuration document for environment '{environment}' at {}", .path.display())]
    SourceNotFound {
        environment: String,
        path: PathBuf,
    },

    /// The document exists but does not parse into the expected shape
    #[error("malformed configuration for environment '{environment}': {detail}")]
    MalformedDocument {
        environment: String,
        detail: String,
    },

    /// A field required by a downstream intent is absent or empty
    #[error("environment '{environment}' is missing required field '{field}'")]
    MissingRequiredField {
        environment: String,
        field: String,
    },

    /// A resource sizing value is not a positive integer
    #[error("invalid sizing for environment '{environment}': '{field}' must be positive (got {value})")]
    InvalidSizing {
        environment: String,
        field: String,
        value: i64,
    },
}

impl ConfigError {
    /// Convenience constructor for missing-field errors
    pub fn missing_field(environment: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            environment: environment.into(),
            field: field.into(),
        }
    }

    /// Convenience constructor for malformed-document errors
    pub fn malformed(environment: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedDocument {
            environment: environment.into(),
            detail: detail.into(),
        }
    }
}
