//! `.env` text parsing.
//!
//! Responsibilities:
//! - Turn `.env` formatted text into an [`EnvMap`].
//! - Render an [`EnvMap`] back into text that parses to the same map.
//!
//! Does NOT handle:
//! - Reading files (see `loader::envfile`).
//! - Touching the process environment.
//!
//! Invariants:
//! - Parsing never fails. Blank lines, `#` comments, lines without `=` and
//!   lines without a usable key are skipped.
//! - The first `=` splits key from value; later `=` belong to the value.
//! - A leading `export` word is dropped from keys only when more key text follows it.
//! - One matched pair of outer quotes is stripped from values, never more.
//! - Skipped lines are logged by line number only, never by content.

use std::collections::BTreeMap;

/// Parsed key/value pairs. Keys are unique; the last assignment wins.
pub type EnvMap = BTreeMap<String, String>;

const EXPORT_PREFIX: &str = "export";

/// Parse `.env` formatted text into a map.
///
/// ```
/// let values = eggviron::parse_env_str("export TOKEN = 'abc=def'\n# comment\n");
/// assert_eq!(values["TOKEN"], "abc=def");
/// ```
pub fn parse_env_str(text: &str) -> EnvMap {
    let mut values = EnvMap::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line_number = idx + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key_part, value_part)) = line.split_once('=') else {
            tracing::trace!(line = line_number, "Skipping line without '='");
            continue;
        };

        let key = strip_export(key_part.trim());
        if !is_valid_key(key) {
            tracing::trace!(line = line_number, "Skipping line without a usable key");
            continue;
        }

        let value = strip_matched_quotes(value_part.trim());
        values.insert(key.to_string(), value.to_string());
    }

    values
}

/// Render a map as `KEY=VALUE` lines.
///
/// For maps produced by [`parse_env_str`], parsing the output gives back the
/// same map. Values whose outer characters would be trimmed or quote-stripped
/// on the way back in are wrapped in one pair of double quotes. Keys starting
/// with `#` get an `export ` prefix so the line does not read as a comment.
pub fn render(values: &EnvMap) -> String {
    let mut out = String::new();
    for (key, value) in values {
        if key.starts_with('#') {
            out.push_str(EXPORT_PREFIX);
            out.push(' ');
        }
        out.push_str(key);
        out.push('=');
        if needs_quoting(value) {
            out.push('"');
            out.push_str(value);
            out.push('"');
        } else {
            out.push_str(value);
        }
        out.push('\n');
    }
    out
}

/// Drop a leading `export` word (any case) when it is followed by whitespace
/// and more key text. `export` alone and `exportFOO` are literal keys.
fn strip_export(key: &str) -> &str {
    let Some(prefix) = key.get(..EXPORT_PREFIX.len()) else {
        return key;
    };
    if !prefix.eq_ignore_ascii_case(EXPORT_PREFIX) {
        return key;
    }

    let rest = &key[EXPORT_PREFIX.len()..];
    if rest.starts_with(char::is_whitespace) {
        rest.trim_start()
    } else {
        key
    }
}

/// Keys must be non-empty and free of whitespace.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(char::is_whitespace)
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Strip one outer pair of matching quotes. Unmatched quotes are kept.
fn strip_matched_quotes(value: &str) -> &str {
    let mut chars = value.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if is_quote(first) && first == last => {
            &value[first.len_utf8()..value.len() - last.len_utf8()]
        }
        _ => value,
    }
}

fn needs_quoting(value: &str) -> bool {
    value.trim() != value
        || value.starts_with(is_quote)
        || value.ends_with(is_quote)
}
