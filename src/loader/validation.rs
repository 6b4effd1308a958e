//! Per-field-type validation pipeline.
//!
//! # Responsibilities
//! - Apply every declared rule against the parsed settings
//! - Accumulate one message per violation; never stop at the first
//!
//! # Design Decisions
//! - Rules run in declaration order and errors report in that order
//! - A lookup miss is treated as a blank value, not an error in itself
//! - A blank Optional value skips the type check entirely
//! - Folder rules can accumulate several independent errors (existence,
//!   readability, writability)

use std::collections::BTreeMap;
use std::path::Path;

use tracing::warn;

use crate::rules::field::{Condition, FieldRule, FieldType};
use crate::support::{email, fs, strings};

/// Run every rule against the parsed settings, returning all accumulated
/// error messages. An empty vec means the settings passed.
pub(crate) fn validate(fields: &[FieldRule], settings: &BTreeMap<String, String>) -> Vec<String> {
    let mut errors = Vec::new();

    for field in fields {
        let name = field.name();
        let value = settings.get(name).map(String::as_str).unwrap_or("");

        if value.trim().is_empty() {
            if field.condition() == Condition::Required {
                let error = format!("Missing configuration value for key={name}");
                warn!(key = name, "missing required configuration value");
                errors.push(error);
            }
            continue;
        }

        match field.field_type() {
            FieldType::Email => {
                if !email::validate_address(value) {
                    errors.push(format!(
                        "Email format is invalid for configuration key={name}, value={value}"
                    ));
                }
            }
            FieldType::File => {
                if !settings.contains_key(name) {
                    warn!(key = name, "missing configuration value for file key");
                    continue;
                }
                if !Path::new(value).is_file() {
                    errors.push(format!(
                        "File does not exist. Invalid configuration value for key={name}, value={value}"
                    ));
                }
            }
            FieldType::Folder => {
                if !settings.contains_key(name) {
                    warn!(key = name, "missing configuration value for folder key");
                    continue;
                }
                let path = Path::new(value);
                if !path.is_dir() {
                    errors.push(format!(
                        "Directory does not exist. Invalid configuration value for key={name}, value={value}"
                    ));
                    continue;
                }
                if !fs::dir_readable(path) {
                    errors.push(format!(
                        "Unable to read directory. Configuration value for key={name}, value={value}"
                    ));
                }
                if !fs::dir_writable(path) {
                    errors.push(format!(
                        "Unable to write directory. Configuration value for key={name}, value={value}"
                    ));
                }
            }
            FieldType::Boolean => {
                if !strings::is_bool(value) {
                    errors.push(format!("Expected a boolean. key={name}, value={value}"));
                }
            }
            FieldType::Number => {
                if !strings::is_number(value) {
                    errors.push(format!("Expected a number. key={name}, value={value}"));
                }
            }
            FieldType::Text | FieldType::WebService => {}
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn settings(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn rule(name: &str, condition: Condition, field_type: FieldType) -> FieldRule {
        FieldRule::new(name.to_string(), condition, field_type)
    }

    #[test]
    fn test_required_missing_value() {
        let fields = vec![rule("Svc.Key", Condition::Required, FieldType::Text)];
        let errors = validate(&fields, &settings(&[]));
        assert_eq!(errors, vec!["Missing configuration value for key=Svc.Key"]);
    }

    #[test]
    fn test_optional_missing_value_skipped() {
        let fields = vec![rule("Svc.Key", Condition::Optional, FieldType::Number)];
        assert!(validate(&fields, &settings(&[])).is_empty());
    }

    #[test]
    fn test_number_and_boolean_checks() {
        let fields = vec![
            rule("Svc.N", Condition::Required, FieldType::Number),
            rule("Svc.B", Condition::Required, FieldType::Boolean),
        ];
        let errors = validate(&fields, &settings(&[("Svc.N", "abc"), ("Svc.B", "maybe")]));
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("Expected a number. key=Svc.N, value=abc"));
        assert!(errors[1].contains("Expected a boolean. key=Svc.B, value=maybe"));
    }

    #[test]
    fn test_boolean_accepts_all_six_literals() {
        for literal in ["true", "FALSE", "yes", "No", "1", "0"] {
            let fields = vec![rule("Svc.B", Condition::Required, FieldType::Boolean)];
            assert!(
                validate(&fields, &settings(&[("Svc.B", literal)])).is_empty(),
                "literal {literal} should validate"
            );
        }
    }

    #[test]
    fn test_email_single_and_list() {
        let fields = vec![rule("Svc.Mail", Condition::Required, FieldType::Email)];
        assert!(validate(
            &fields,
            &settings(&[("Svc.Mail", "a@example.com,b@example.com")])
        )
        .is_empty());

        let errors = validate(&fields, &settings(&[("Svc.Mail", "improper.address")]));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Email format is invalid"));
        assert!(errors[0].contains("key=Svc.Mail"));
    }

    #[test]
    fn test_file_must_exist() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("present.txt");
        std::fs::write(&file, "x").unwrap();

        let fields = vec![rule("Svc.File", Condition::Required, FieldType::File)];
        assert!(validate(
            &fields,
            &settings(&[("Svc.File", file.to_str().unwrap())])
        )
        .is_empty());

        let errors = validate(&fields, &settings(&[("Svc.File", "/no/such/file.txt")]));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("File does not exist"));
    }

    #[test]
    fn test_folder_existence_and_permissions() {
        let dir = tempdir().unwrap();
        let fields = vec![rule("Svc.Dir", Condition::Required, FieldType::Folder)];
        assert!(validate(
            &fields,
            &settings(&[("Svc.Dir", dir.path().to_str().unwrap())])
        )
        .is_empty());

        let errors = validate(&fields, &settings(&[("Svc.Dir", "/no/such/dir")]));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_folder_read_and_write_errors_fire_independently() {
        use std::fs::{set_permissions, Permissions};
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let locked = dir.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        let fields = vec![rule("Svc.Dir", Condition::Required, FieldType::Folder)];
        let value = settings(&[("Svc.Dir", locked.to_str().unwrap())]);

        // read-only: only the write error fires
        set_permissions(&locked, Permissions::from_mode(0o555)).unwrap();
        if crate::support::fs::dir_writable(&locked) {
            // privileged process, permission bits carry no signal here
            set_permissions(&locked, Permissions::from_mode(0o755)).unwrap();
            return;
        }
        let errors = validate(&fields, &value);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Unable to write directory"));
        assert!(errors[0].contains("key=Svc.Dir"));

        // no access at all: both errors fire for the one folder
        set_permissions(&locked, Permissions::from_mode(0o000)).unwrap();
        let errors = validate(&fields, &value);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("Unable to read directory"));
        assert!(errors[1].contains("Unable to write directory"));

        // restore so the scratch dir can be cleaned up
        set_permissions(&locked, Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_errors_report_in_declaration_order() {
        let fields = vec![
            rule("Svc.B", Condition::Required, FieldType::Boolean),
            rule("Svc.A", Condition::Required, FieldType::Text),
        ];
        let errors = validate(&fields, &settings(&[("Svc.B", "maybe")]));
        assert!(errors[0].contains("key=Svc.B"));
        assert!(errors[1].contains("key=Svc.A"));
    }
}
