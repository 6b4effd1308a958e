//! Error types for configuration loading.
//!
//! # Responsibilities
//! - Distinguish fatal errors (bad arguments, missing file) from aggregated
//!   validation failures
//! - Carry every accumulated validation message in one `Invalid` value
//!
//! # Design Decisions
//! - Two tiers: `InvalidArgument`/`FileMissing`/`Read` fail immediately;
//!   `Invalid` is raised once after the full parse + validation pass so the
//!   caller sees the complete picture in a single failure
//! - `NumberFormat` is only produced by `Configuration::int`; the `bool`
//!   accessor swallows parse failures instead (see settings module)

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the rule builder, loader, and typed accessors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A caller-supplied argument was empty or blank.
    #[error("invalid argument `{name}`: {message}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the argument was rejected.
        message: String,
    },

    /// The composed configuration file does not exist on disk.
    ///
    /// Raised before any field validation runs; never aggregated.
    #[error(
        "cannot initialize configuration due to missing configuration file. \
         The expected configuration file for the machine is {} and it does not exist",
        .path.display()
    )]
    FileMissing {
        /// The fully composed path that was probed.
        path: PathBuf,
    },

    /// The configuration file exists but could not be read.
    #[error("failed to read configuration file {}: {source}", .path.display())]
    Read {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// One or more validation problems were accumulated across the whole
    /// parse + validation pass.
    #[error(
        "{service} configuration contains invalid configuration value(s).\n{}",
        .errors.join(",\n")
    )]
    Invalid {
        /// Service the configuration belongs to.
        service: String,
        /// Every accumulated message, in parse/declaration order.
        errors: Vec<String>,
    },

    /// A stored value could not be parsed as an integer by
    /// `Configuration::int`.
    #[error("Expected a number. key={key}, value={value}")]
    NumberFormat {
        /// The configuration key that was looked up.
        key: String,
        /// The non-numeric stored value.
        value: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        ConfigError::InvalidArgument {
            name,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_joins_all_messages() {
        let err = ConfigError::Invalid {
            service: "Billing".to_string(),
            errors: vec![
                "Missing configuration value for key=A".to_string(),
                "Expected a number. key=B, value=x".to_string(),
            ],
        };
        let text = err.to_string();
        assert!(text.starts_with("Billing configuration contains invalid"));
        assert!(text.contains("key=A"));
        assert!(text.contains("key=B, value=x"));
    }

    #[test]
    fn test_file_missing_names_path() {
        let err = ConfigError::FileMissing {
            path: PathBuf::from("/tmp/HOST.svc.ini"),
        };
        assert!(err.to_string().contains("HOST.svc.ini"));
    }
}
