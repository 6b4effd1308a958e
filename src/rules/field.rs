//! Field rule definitions.

/// Whether a configuration key must be present with a non-blank value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Absent or blank values are skipped without error.
    Optional,
    /// Absent or blank values are a validation error.
    Required,
}

/// Value type a configuration key is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Free text; no validation beyond the required/blank check.
    Text,
    /// Must parse as an integer.
    Number,
    /// Must be one of `true/false/yes/no/1/0` (case-insensitive).
    Boolean,
    /// Must name an existing directory with read and write permission.
    Folder,
    /// Must name an existing file.
    File,
    /// Must be a syntactically valid mailbox, or a comma-separated list of
    /// them.
    Email,
    /// Endpoint reference; no validation beyond the required/blank check.
    WebService,
}

/// Declaration of one expected configuration key.
///
/// Rules are created by `RulesBuilder::field`, immutable afterwards, and held
/// in declaration order.
#[derive(Debug, Clone)]
pub struct FieldRule {
    name: String,
    condition: Condition,
    field_type: FieldType,
}

impl FieldRule {
    pub(crate) fn new(name: String, condition: Condition, field_type: FieldType) -> Self {
        Self {
            name,
            condition,
            field_type,
        }
    }

    /// The key as it appears in the configuration file.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }
}

/// Closed set of field identifiers for one service, each mapping to its
/// composed `"<group>.<member>"` configuration key.
///
/// The same composition is used at rule declaration, in the file, and at
/// lookup; callers typically implement this on an enum:
///
/// ```
/// use hostconf::FieldKey;
///
/// enum Billing {
///     SmtpHost,
///     RetryCount,
/// }
///
/// impl FieldKey for Billing {
///     fn group(&self) -> &'static str {
///         "Billing"
///     }
///
///     fn member(&self) -> &'static str {
///         match self {
///             Billing::SmtpHost => "SmtpHost",
///             Billing::RetryCount => "RetryCount",
///         }
///     }
/// }
///
/// assert_eq!(Billing::RetryCount.key(), "Billing.RetryCount");
/// ```
pub trait FieldKey {
    /// Group name, the prefix of every composed key.
    fn group(&self) -> &'static str;

    /// Member name within the group.
    fn member(&self) -> &'static str;

    /// The composed configuration key.
    fn key(&self) -> String {
        format!("{}.{}", self.group(), self.member())
    }
}
