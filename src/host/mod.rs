//! Host identity resolution.
//!
//! # Responsibilities
//! - Resolve the machine name, process name, and user name used to compose
//!   config filenames and `Configuration` metadata
//! - Keep the real environment behind a trait so loading is deterministic
//!   under test
//!
//! # Design Decisions
//! - `source()` is the canonical host identity: the machine name uppercased
//! - `SystemHost` reads environment variables rather than shelling out;
//!   every lookup has a fallback so identity resolution itself cannot fail

use std::env;
use std::fmt;

/// Provider of the identity values the loader qualifies filenames with.
pub trait HostIdentity: fmt::Debug {
    /// Name of the machine running the process.
    fn machine_name(&self) -> String;

    /// Name of the current process (no extension).
    fn process_name(&self) -> String;

    /// Name of the user the process runs as.
    fn user_name(&self) -> String;

    /// Canonical host identity recorded on the loaded `Configuration`.
    fn source(&self) -> String {
        self.machine_name().to_uppercase()
    }
}

/// Identity provider backed by the real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl HostIdentity for SystemHost {
    fn machine_name(&self) -> String {
        env::var("HOSTNAME")
            .or_else(|_| env::var("COMPUTERNAME"))
            .unwrap_or_else(|_| "localhost".to_string())
    }

    fn process_name(&self) -> String {
        env::current_exe()
            .ok()
            .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "process".to_string())
    }

    fn user_name(&self) -> String {
        env::var("USER")
            .or_else(|_| env::var("LOGNAME"))
            .or_else(|_| env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string())
    }
}

/// Identity provider with fixed values, for tests and embedded callers.
#[derive(Debug, Clone)]
pub struct FixedHost {
    machine: String,
    process: String,
    user: String,
}

impl FixedHost {
    pub fn new(
        machine: impl Into<String>,
        process: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            machine: machine.into(),
            process: process.into(),
            user: user.into(),
        }
    }
}

impl HostIdentity for FixedHost {
    fn machine_name(&self) -> String {
        self.machine.clone()
    }

    fn process_name(&self) -> String {
        self.process.clone()
    }

    fn user_name(&self) -> String {
        self.user.clone()
    }
}
