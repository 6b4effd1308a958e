//! Rule builder with a terminal `build()`.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::host::{HostIdentity, SystemHost};
use crate::loader;
use crate::rules::field::{Condition, FieldKey, FieldRule, FieldType};
use crate::settings::Configuration;

/// Declares the keys expected in a configuration file, then loads and
/// validates the file in one `build()` call.
///
/// ```no_run
/// use hostconf::{Condition, FieldType, RulesBuilder};
///
/// let config = RulesBuilder::new("Billing")?
///     .configuration_folder("/etc/billing")?
///     .field("Billing.SmtpHost", Condition::Required, FieldType::Text)?
///     .field("Billing.RetryCount", Condition::Optional, FieldType::Number)?
///     .build()?;
/// # Ok::<(), hostconf::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct RulesBuilder {
    service_name: String,
    configuration_folder: Option<PathBuf>,
    configuration_name: Option<String>,
    fields: Vec<FieldRule>,
    host: Box<dyn HostIdentity>,
}

impl RulesBuilder {
    /// Start a builder for the named service.
    ///
    /// The configuration folder defaults to a `config` directory next to the
    /// running executable when that location can be resolved.
    pub fn new(service_name: impl Into<String>) -> Result<Self, ConfigError> {
        let service_name = service_name.into();
        if service_name.trim().is_empty() {
            return Err(ConfigError::invalid_argument(
                "service_name",
                "must provide the service name of the configuration",
            ));
        }

        Ok(Self {
            service_name,
            configuration_folder: default_configuration_folder(),
            configuration_name: None,
            fields: Vec::new(),
            host: Box::new(SystemHost),
        })
    }

    /// Override the folder the configuration file is looked up in.
    pub fn configuration_folder(
        mut self,
        folder: impl AsRef<Path>,
    ) -> Result<Self, ConfigError> {
        let folder = folder.as_ref();
        if folder.as_os_str().is_empty() {
            return Err(ConfigError::invalid_argument(
                "configuration_folder",
                "must provide the folder where the configuration exists",
            ));
        }
        self.configuration_folder = Some(folder.to_path_buf());
        Ok(self)
    }

    /// Override the per-process part of the filename (default
    /// `<processName>.ini`). The machine-name prefix is always applied.
    pub fn configuration_name(mut self, name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::invalid_argument(
                "configuration_name",
                "must provide the file where the configuration exists",
            ));
        }
        self.configuration_name = Some(name);
        Ok(self)
    }

    /// Declare an expected key by its literal file name.
    pub fn field(
        mut self,
        name: impl Into<String>,
        condition: Condition,
        field_type: FieldType,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::invalid_argument(
                "field_name",
                "field name must not be empty",
            ));
        }
        self.fields.push(FieldRule::new(name, condition, field_type));
        Ok(self)
    }

    /// Declare an expected key through its enumerated identifier; the file
    /// key is the composed `"<group>.<member>"` string.
    pub fn key_field(
        self,
        key: &impl FieldKey,
        condition: Condition,
        field_type: FieldType,
    ) -> Result<Self, ConfigError> {
        self.field(key.key(), condition, field_type)
    }

    /// Replace the host identity provider (defaults to [`SystemHost`]).
    pub fn host(mut self, host: impl HostIdentity + 'static) -> Self {
        self.host = Box::new(host);
        self
    }

    /// Load the file, run every declared rule, and return the validated
    /// configuration or the pooled validation failure.
    pub fn build(self) -> Result<Configuration, ConfigError> {
        let folder = self.configuration_folder.ok_or_else(|| {
            ConfigError::invalid_argument(
                "configuration_folder",
                "must provide the folder where the configuration exists",
            )
        })?;

        loader::create_configuration(
            &self.service_name,
            &folder,
            self.configuration_name.as_deref(),
            &self.fields,
            self.host.as_ref(),
        )
    }
}

/// Default lookup folder: `config` next to the running executable.
fn default_configuration_folder() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    Some(exe.parent()?.join("config"))
}
