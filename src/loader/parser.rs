//! Line-oriented `key=value` parsing.
//!
//! # Responsibilities
//! - Strip `;` trailing comments
//! - Keep only lines that split into exactly two parts on `=`
//! - Accumulate duplicate-key errors without ever aborting the parse
//!
//! # Design Decisions
//! - Malformed lines (zero, one, or more than one `=`) are silently ignored;
//!   only duplicates are worth telling the operator about
//! - First occurrence of a duplicated key wins

use std::collections::BTreeMap;

use tracing::warn;

/// Outcome of parsing one file: the settings map plus any accumulated
/// duplicate-key errors. Parsing always completes.
#[derive(Debug, Default)]
pub(crate) struct ParsedFile {
    pub settings: BTreeMap<String, String>,
    pub errors: Vec<String>,
}

/// Parse the whole file content into a flat key→value map.
pub(crate) fn parse(content: &str) -> ParsedFile {
    let mut parsed = ParsedFile::default();

    for line in content.lines() {
        let mut to_parse = line.trim();
        if let Some((head, _)) = to_parse.split_once(';') {
            to_parse = head;
        }

        let parts: Vec<&str> = to_parse.split('=').collect();
        if parts.len() != 2 {
            continue;
        }

        let key = parts[0].trim();
        let value = parts[1].trim();

        if parsed.settings.contains_key(key) {
            let error = format!(
                "Duplicate keys={key}. Please verify that only 1 line has a key={key}"
            );
            warn!(key, "duplicate configuration key");
            parsed.errors.push(error);
            continue;
        }

        parsed.settings.insert(key.to_string(), value.to_string());
    }

    parsed
}
