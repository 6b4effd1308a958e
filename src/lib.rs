//! Host-qualified configuration loader.
//!
//! # Architecture Overview
//!
//! ```text
//!   caller declares rules                      disk
//!   ┌───────────────┐               ┌──────────────────────┐
//!   │ RulesBuilder  │               │ <MACHINE>.<name>.ini │
//!   │  .field(..)   │               └──────────┬───────────┘
//!   └──────┬────────┘                          │
//!          │ build()                           ▼
//!          │                       ┌──────────────────────┐
//!          └──────────────────────▶│        loader        │
//!                                  │  resolve filename    │
//!                                  │  parse key=value     │
//!                                  │  validate per rule   │
//!                                  └──────────┬───────────┘
//!                           all errors pooled │ success
//!                                  ▼          ▼
//!                     ConfigError::Invalid    Configuration
//!                                             (immutable, typed accessors)
//! ```
//!
//! Settings files are flat `key=value` text, one pair per line, with `;`
//! introducing a trailing comment. The filename is qualified by the host so
//! one folder can hold configs for a whole fleet:
//! `<MACHINE_NAME>.<processName|override>.ini`.
//!
//! # Design Decisions
//! - Validation never stops at the first problem: duplicate keys and every
//!   field violation are pooled and reported as one `ConfigError::Invalid`
//! - A missing config file is structurally fatal and short-circuits
//!   validation entirely
//! - [`Configuration`] is immutable once built, so it can be shared freely
//!   across threads without locking
//! - Machine/process/user identity is injected via [`HostIdentity`] so tests
//!   never depend on the real environment

pub mod error;
pub mod host;
pub mod loader;
pub mod rules;
pub mod settings;
pub mod support;

pub use error::ConfigError;
pub use host::{FixedHost, HostIdentity, SystemHost};
pub use loader::{
    config_name, config_name_for, does_config_exist, does_config_exist_for, read_settings,
    read_settings_for, LoadedSettings,
};
pub use rules::{Condition, FieldKey, FieldRule, FieldType, RulesBuilder};
pub use settings::Configuration;
