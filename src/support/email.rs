//! Email address syntax validation.
//!
//! # Design Decisions
//! - Syntax-only: one `@`, non-empty local part, dotted domain, no
//!   whitespace. Deliverability is out of scope
//! - `validate_address` accepts a comma-separated list; every entry must
//!   individually validate

/// Whether a single mailbox is syntactically plausible.
pub fn is_valid_email(address: &str) -> bool {
    let address = address.trim();
    if address.is_empty() || address.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain must be dotted, with no empty labels.
    domain.contains('.') && !domain.split('.').any(str::is_empty)
}

/// Validate a configuration value holding one address or a comma-separated
/// list of addresses.
pub fn validate_address(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    value.split(',').all(is_valid_email)
}
