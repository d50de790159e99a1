//! Reading and writing `key=value` properties text.
//!
//! Follows the common properties conventions: `#` and `!` start comment
//! lines, keys end at the first unescaped `=`, `:` or whitespace, a trailing
//! backslash continues the logical line, and `\t`, `\n`, `\r`, `\f` and
//! `\uXXXX` escapes are decoded.

use std::collections::BTreeMap;

/// Parse properties text into key/value pairs in file order.
///
/// Later duplicates are kept; callers that build a map get last-wins
/// semantics.
///
/// # Example
///
/// ```
/// use lexicon_files::parse_properties;
///
/// let entries = parse_properties("# players\nalice = fr\nbob: de\n");
/// assert_eq!(
///     entries,
///     vec![
///         ("alice".to_string(), "fr".to_string()),
///         ("bob".to_string(), "de".to_string()),
///     ]
/// );
/// ```
pub fn parse_properties(content: &str) -> Vec<(String, String)> {
    logical_lines(content)
        .iter()
        .map(String::as_str)
        .map(split_entry)
        .collect()
}

/// Render entries as properties text, one `key=value` line each, sorted by key.
pub fn write_properties(entries: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for (key, value) in entries {
        out.push_str(&escape(key, true));
        out.push('=');
        out.push_str(&escape(value, false));
        out.push('\n');
    }
    out
}

/// Join continuation lines and drop blank and comment lines.
fn logical_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Option<String> = None;

    for raw in content.lines() {
        let trimmed = raw.trim_start();
        let continuing = current.is_some();
        if !continuing && (trimmed.is_empty() || trimmed.starts_with(['#', '!'])) {
            continue;
        }

        let (body, continues) = strip_continuation(trimmed);
        let mut line = current.take().unwrap_or_default();
        line.push_str(body);
        if continues {
            current = Some(line);
        } else {
            lines.push(line);
        }
    }

    if let Some(line) = current {
        lines.push(line);
    }
    lines
}

/// Remove a trailing continuation backslash, if the line has one.
///
/// A line continues when it ends in an odd number of backslashes.
fn strip_continuation(line: &str) -> (&str, bool) {
    let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
    if trailing % 2 == 1 {
        (&line[..line.len() - 1], true)
    } else {
        (line, false)
    }
}

/// Split a logical line into an unescaped key and value.
fn split_entry(line: &str) -> (String, String) {
    let mut key_end = line.len();
    let mut escaped = false;

    for (index, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' | '\x0c' => {
                key_end = index;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start_matches([' ', '\t', '\x0c']);
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start_matches([' ', '\t', '\x0c']);
    }

    (unescape(key), unescape(rest))
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push('u');
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (index, c) in text.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' if is_key => {
                out.push('\\');
                out.push(c);
            }
            ' ' if is_key || index == 0 => out.push_str("\\ "),
            _ => out.push(c),
        }
    }
    out
}
