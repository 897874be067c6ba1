//! Record line format
//!
//! One record per line, fields joined by `|`, terminated by `\n`. The first
//! field of every line is the record's key rendered as text. A line whose
//! first character is `*` is logically deleted; the rest of its bytes are
//! left untouched so no other line's offset ever shifts.

use std::str::FromStr;

/// Field separator within a record line
pub const DELIMITER: char = '|';

/// Marker byte overwriting a line's first character on logical deletion
pub const TOMBSTONE: char = '*';

/// Separator for composite keys built from several sub-keys
pub const KEY_SEPARATOR: char = '_';

/// Whether a line has been logically deleted
pub fn is_tombstoned(line: &str) -> bool {
    line.starts_with(TOMBSTONE)
}

/// The key field of a record line: everything up to the first delimiter,
/// or the whole line if it has no delimiter.
pub fn key_field(line: &str) -> &str {
    match line.find(DELIMITER) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse the key field of a record line as `K`.
///
/// Returns `None` when the field does not parse — callers decide the policy
/// (the rebuild scan skips such lines and keeps going).
pub fn parse_key<K: FromStr>(line: &str) -> Option<K> {
    key_field(line).parse().ok()
}

/// Build a deterministic composite key by joining sub-keys with `_`
/// (e.g. `"20260830_CARD"` for a date + specialty-code pair).
pub fn composite_key(parts: &[&str]) -> String {
    parts.join(&KEY_SEPARATOR.to_string())
}

/// Strip a trailing `\n` (and a preceding `\r`) in place, leaving every
/// other byte of the record untouched.
pub fn strip_newline(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
