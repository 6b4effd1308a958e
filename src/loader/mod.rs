//! Configuration loading.
//!
//! # Data Flow
//! ```text
//! create_configuration(service, folder, override, rules, host)
//!     → read_settings_for(host, folder, override)
//!         → config_name_for(host, override)    compose <MACHINE>.<name>.ini
//!         → existence check                     missing file is fatal
//!         → fs::read_to_string                  handle released before validation
//!         → parser::parse                       settings + duplicate warnings
//!     → validation::validate                    per-rule errors, in order
//!     → pooled errors? ConfigError::Invalid : Configuration
//! ```
//!
//! # Design Decisions
//! - The existence check precedes all field validation; a missing file
//!   reports a structured error event and fails immediately
//! - Duplicate-key and field errors are pooled into one `Invalid` failure so
//!   the operator sees the complete picture at once
//! - `read_settings` is the rule-free entry point: duplicates stay warnings
//!   there, so inspection tooling can still show a file that `build()` would
//!   reject

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::error::ConfigError;
use crate::host::{HostIdentity, SystemHost};
use crate::rules::field::FieldRule;
use crate::settings::{self, Configuration};

pub(crate) mod parser;
pub(crate) mod validation;

/// Compose the host-qualified config filename using the given identity:
/// `<machine>.<override|process.ini>`. A blank override falls back to the
/// per-process default.
pub fn config_name_for(host: &dyn HostIdentity, override_name: Option<&str>) -> String {
    let filename = match override_name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => format!("{}.ini", host.process_name()),
    };
    format!("{}.{}", host.machine_name(), filename)
}

/// Compose the config filename for the running machine and process.
pub fn config_name(override_name: Option<&str>) -> String {
    config_name_for(&SystemHost, override_name)
}

/// Check whether the composed config file exists in `folder`, without
/// loading anything.
pub fn does_config_exist(
    folder: impl AsRef<Path>,
    override_name: Option<&str>,
) -> Result<bool, ConfigError> {
    does_config_exist_for(&SystemHost, folder, override_name)
}

/// [`does_config_exist`] with an explicit host identity.
pub fn does_config_exist_for(
    host: &dyn HostIdentity,
    folder: impl AsRef<Path>,
    override_name: Option<&str>,
) -> Result<bool, ConfigError> {
    let folder = folder.as_ref();
    if folder.as_os_str().is_empty() {
        return Err(ConfigError::invalid_argument(
            "folder",
            "must provide the folder to check for the configuration",
        ));
    }
    // Same predicate the loader applies; a directory wearing the config
    // filename is not a config.
    Ok(folder.join(config_name_for(host, override_name)).is_file())
}

/// Parse-level view of a config file: the settings map plus the non-fatal
/// warnings (duplicate keys) accumulated while parsing.
///
/// Unlike `RulesBuilder::build`, obtaining one of these never fails on
/// duplicates; only a missing or unreadable file is an error.
#[derive(Debug)]
pub struct LoadedSettings {
    path: PathBuf,
    settings: BTreeMap<String, String>,
    warnings: Vec<String>,
}

impl LoadedSettings {
    /// Full path of the parsed file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every parsed `key=value` pair, first occurrence winning.
    pub fn settings(&self) -> &BTreeMap<String, String> {
        &self.settings
    }

    /// Duplicate-key messages accumulated during the parse.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// The settings with password keys omitted, for display.
    pub fn redacted_settings(&self) -> BTreeMap<&str, &str> {
        self.settings
            .iter()
            .filter(|(key, _)| !settings::is_redacted(key))
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

/// Read and parse the composed config file without applying any field rules.
pub fn read_settings(
    folder: impl AsRef<Path>,
    override_name: Option<&str>,
) -> Result<LoadedSettings, ConfigError> {
    read_settings_for(&SystemHost, folder, override_name)
}

/// [`read_settings`] with an explicit host identity.
pub fn read_settings_for(
    host: &dyn HostIdentity,
    folder: impl AsRef<Path>,
    override_name: Option<&str>,
) -> Result<LoadedSettings, ConfigError> {
    let path = folder.as_ref().join(config_name_for(host, override_name));

    if !path.is_file() {
        return Err(ConfigError::FileMissing { path });
    }

    // Read releases the handle before anything else happens.
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;

    let parsed = parser::parse(&content);
    Ok(LoadedSettings {
        path,
        settings: parsed.settings,
        warnings: parsed.errors,
    })
}

/// Locate, parse, and validate the configuration file for `service_name`.
///
/// Called only by `RulesBuilder::build`; the success path is the sole way a
/// [`Configuration`] comes into existence.
pub(crate) fn create_configuration(
    service_name: &str,
    folder: &Path,
    override_name: Option<&str>,
    fields: &[FieldRule],
    host: &dyn HostIdentity,
) -> Result<Configuration, ConfigError> {
    let loaded = match read_settings_for(host, folder, override_name) {
        Ok(loaded) => loaded,
        Err(err) => {
            if let ConfigError::FileMissing { path } = &err {
                // Best-effort structured report before failing, the way the
                // service event log was used.
                error!(
                    service = service_name,
                    path = %path.display(),
                    "configuration file missing"
                );
            }
            return Err(err);
        }
    };

    let mut errors = loaded.warnings;
    errors.extend(validation::validate(fields, &loaded.settings));

    if !errors.is_empty() {
        error!(
            service = service_name,
            error_count = errors.len(),
            "configuration validation failed"
        );
        return Err(ConfigError::Invalid {
            service: service_name.to_string(),
            errors,
        });
    }

    debug!(
        service = service_name,
        path = %loaded.path.display(),
        keys = loaded.settings.len(),
        "configuration loaded"
    );

    Ok(Configuration::new(
        loaded.settings,
        host.source(),
        service_name.to_string(),
        host.user_name(),
        folder.to_path_buf(),
        loaded.path,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FixedHost;
    use tempfile::tempdir;

    #[test]
    fn test_config_name_defaults_to_process() {
        let host = FixedHost::new("HOST01", "billing", "svc");
        assert_eq!(config_name_for(&host, None), "HOST01.billing.ini");
    }

    #[test]
    fn test_config_name_override() {
        let host = FixedHost::new("HOST01", "billing", "svc");
        assert_eq!(
            config_name_for(&host, Some("Custom.ini")),
            "HOST01.Custom.ini"
        );
        // blank override falls back to the process default
        assert_eq!(config_name_for(&host, Some("  ")), "HOST01.billing.ini");
    }

    #[test]
    fn test_does_config_exist_rejects_blank_folder() {
        let err = does_config_exist("", None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidArgument { name, .. } if name == "folder"));
    }

    #[test]
    fn test_does_config_exist_ignores_directory_with_config_name() {
        let host = FixedHost::new("HOST01", "billing", "svc");
        let dir = tempdir().unwrap();
        let name = config_name_for(&host, None);

        // a directory wearing the config filename is not a config file
        fs::create_dir(dir.path().join(&name)).unwrap();
        assert!(!does_config_exist_for(&host, dir.path(), None).unwrap());

        fs::remove_dir(dir.path().join(&name)).unwrap();
        fs::write(dir.path().join(&name), "A=1\n").unwrap();
        assert!(does_config_exist_for(&host, dir.path(), None).unwrap());
    }

    #[test]
    fn test_read_settings_keeps_duplicates_as_warnings() {
        let host = FixedHost::new("HOST01", "billing", "svc");
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(config_name_for(&host, None)),
            "A=1\nA=2\nB=3\n",
        )
        .unwrap();

        let loaded = read_settings_for(&host, dir.path(), None).unwrap();
        assert_eq!(loaded.settings()["A"], "1");
        assert_eq!(loaded.settings()["B"], "3");
        assert_eq!(loaded.warnings().len(), 1);
        assert!(loaded.warnings()[0].contains("Duplicate keys=A"));
    }

    #[test]
    fn test_read_settings_missing_file() {
        let host = FixedHost::new("HOST01", "billing", "svc");
        let dir = tempdir().unwrap();
        let err = read_settings_for(&host, dir.path(), None).unwrap_err();
        assert!(matches!(err, ConfigError::FileMissing { .. }));
    }

    #[test]
    fn test_redacted_settings_omits_password_keys() {
        let host = FixedHost::new("HOST01", "billing", "svc");
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(config_name_for(&host, None)),
            "Svc.Endpoint=https://example.com\nSvc.DbPassword=hunter2\n",
        )
        .unwrap();

        let loaded = read_settings_for(&host, dir.path(), None).unwrap();
        let redacted = loaded.redacted_settings();
        assert_eq!(redacted.get("Svc.Endpoint"), Some(&"https://example.com"));
        assert!(!redacted.contains_key("Svc.DbPassword"));
    }
}
