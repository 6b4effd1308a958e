//! Shared fixtures for configuration loading tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use hostconf::{config_name_for, FixedHost};

pub const SERVICE_NAME: &str = "Fake Service Test";

/// Deterministic identity used by every integration test.
pub fn test_host() -> FixedHost {
    FixedHost::new("TESTHOST", "faketest", "fake-user")
}

/// A scratch folder holding one config file plus a real text file for
/// File-type rules to point at.
pub struct Fixture {
    pub dir: TempDir,
    pub text_file: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create scratch dir");
        let text_file = dir.path().join("TestFile.txt");
        fs::write(&text_file, "First line\nSecond line\nThird line\n")
            .expect("write text file");
        Self { dir, text_file }
    }

    pub fn folder(&self) -> &Path {
        self.dir.path()
    }

    /// Write lines into the host-qualified config file named by `config_name`.
    pub fn write_config(&self, config_name: &str, lines: &[String]) {
        let filename = config_name_for(&test_host(), Some(config_name));
        fs::write(self.dir.path().join(filename), lines.join("\n"))
            .expect("write config file");
    }

    /// The standard six-field config file the rule set in
    /// `build_configuration` expects.
    pub fn write_standard_config(
        &self,
        config_name: &str,
        text: &str,
        file: &str,
        folder: &str,
        email: &str,
        int_value: &str,
        bool_value: &str,
    ) {
        let lines = vec![
            "; a test note".to_string(),
            format!("FakeService.FakeText={text}"),
            format!("FakeService.FakeFile={file}"),
            format!("FakeService.FakeFolder={folder}"),
            format!("FakeService.FakeEmail={email}"),
            format!("FakeService.FakeInt={int_value}"),
            format!("FakeService.FakeBoolean={bool_value}"),
        ];
        self.write_config(config_name, &lines);
    }
}
