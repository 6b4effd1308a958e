//! Boolean and number literal parsing.

/// Lenient boolean parse: `true/yes/1` and `false/no/0`, case-insensitive,
/// surrounding whitespace ignored. Anything else is `None`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Whether the value satisfies the six-literal boolean predicate used during
/// field validation.
pub fn is_bool(value: &str) -> bool {
    parse_bool(value).is_some()
}

/// Strict boolean parse: only the literals `true` and `false`,
/// case-insensitive. This is the parse the `Configuration::bool` accessor
/// uses, deliberately narrower than [`parse_bool`].
pub fn parse_bool_strict(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Whether the value parses as an integer.
pub fn is_number(value: &str) -> bool {
    value.trim().parse::<i64>().is_ok()
}
