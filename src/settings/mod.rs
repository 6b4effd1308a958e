//! The validated, immutable configuration and its typed accessors.
//!
//! # Responsibilities
//! - Read-only access to the validated settings map
//! - Typed accessors that never panic
//! - Password-redacted rendering for logs and the `confcheck` CLI
//!
//! # Design Decisions
//! - Constructed only by the loader's success path; no public constructor
//! - `value_safe` and `bool` swallow their failure modes; `int` does not
//!   propagate a lookup miss but does propagate a parse failure. The
//!   asymmetry is deliberate and load-bearing for existing callers
//! - Any key containing the substring `password` (case-insensitive) is
//!   omitted from `Display` and `snapshot()`

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ConfigError;
use crate::rules::field::FieldKey;
use crate::support::strings;

/// Immutable typed view over a validated settings file.
///
/// Safe for concurrent read-only access once built; there is no interior
/// mutability.
#[derive(Debug, Clone)]
pub struct Configuration {
    settings: BTreeMap<String, String>,
    source: String,
    service_name: String,
    user_name: String,
    configuration_folder: PathBuf,
    config_file_path: PathBuf,
}

impl Configuration {
    pub(crate) fn new(
        settings: BTreeMap<String, String>,
        source: String,
        service_name: String,
        user_name: String,
        configuration_folder: PathBuf,
        config_file_path: PathBuf,
    ) -> Self {
        Self {
            settings,
            source,
            service_name,
            user_name,
            configuration_folder,
            config_file_path,
        }
    }

    /// The mapped value, or `default` when the key is absent or maps to an
    /// empty string. Never fails.
    pub fn value_safe(&self, key: &str, default: &str) -> String {
        match self.settings.get(key) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => default.to_string(),
        }
    }

    /// Shorthand for [`value_safe`](Self::value_safe) with an empty default.
    pub fn get(&self, key: &str) -> String {
        self.value_safe(key, "")
    }

    /// Lookup through an enumerated field identifier.
    pub fn get_key(&self, key: &impl FieldKey) -> String {
        self.get(&key.key())
    }

    /// The value parsed as an integer. A missing or empty value yields
    /// `default`; a non-blank value that is not an integer is an error.
    pub fn int(&self, key: &str, default: i64) -> Result<i64, ConfigError> {
        let value = self.value_safe(key, "");
        if value.is_empty() {
            return Ok(default);
        }
        value.parse().map_err(|_| ConfigError::NumberFormat {
            key: key.to_string(),
            value,
        })
    }

    /// [`int`](Self::int) through an enumerated field identifier.
    pub fn int_key(&self, key: &impl FieldKey, default: i64) -> Result<i64, ConfigError> {
        self.int(&key.key(), default)
    }

    /// The value parsed as a boolean, strictly `true`/`false`
    /// (case-insensitive). Missing, empty, or unparseable values yield
    /// `default`; this accessor never fails.
    pub fn bool(&self, key: &str, default: bool) -> bool {
        let value = self.value_safe(key, "");
        strings::parse_bool_strict(&value).unwrap_or(default)
    }

    /// [`bool`](Self::bool) through an enumerated field identifier.
    pub fn bool_key(&self, key: &impl FieldKey, default: bool) -> bool {
        self.bool(&key.key(), default)
    }

    /// The full validated settings map.
    pub fn settings(&self) -> &BTreeMap<String, String> {
        &self.settings
    }

    /// Canonical host identity the configuration was loaded on.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn configuration_folder(&self) -> &Path {
        &self.configuration_folder
    }

    /// Full path of the file the configuration was loaded from.
    pub fn config_filename(&self) -> &Path {
        &self.config_file_path
    }

    /// Serializable, password-redacted view for diagnostics.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            service_name: &self.service_name,
            source: &self.source,
            user_name: &self.user_name,
            configuration_folder: &self.configuration_folder,
            config_file_path: &self.config_file_path,
            settings: self
                .settings
                .iter()
                .filter(|(key, _)| !is_redacted(key))
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect(),
        }
    }
}

impl fmt::Display for Configuration {
    /// One `key=value` line per setting, password keys omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.settings {
            if is_redacted(key) {
                continue;
            }
            writeln!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// Password-redacted, serializable view of a loaded configuration.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub service_name: &'a str,
    pub source: &'a str,
    pub user_name: &'a str,
    pub configuration_folder: &'a Path,
    pub config_file_path: &'a Path,
    pub settings: BTreeMap<&'a str, &'a str>,
}

/// Whether a key is withheld from rendered output.
pub(crate) fn is_redacted(key: &str) -> bool {
    key.to_lowercase().contains("password")
}
