//! Miette diagnostic wrapper for language file parse errors.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for language file parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(lexicon::syntax))]
pub struct LexiconDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl LexiconDiagnostic {
    /// Create a diagnostic from a 1-based line and column in `content`.
    ///
    /// YAML parsers count columns in characters, JSON parsers in bytes.
    pub fn from_parse_error(
        path: &Path,
        content: &str,
        line: usize,
        column: usize,
        message: String,
    ) -> Self {
        let columns_in_chars = extension(path).is_some_and(|ext| is_yaml(&ext));
        let offset = byte_offset(content, line, column, columns_in_chars);
        LexiconDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help: help_for(path),
        }
    }
}

/// Convert line:column to a byte offset clamped to the content length.
///
/// Sum of (line_length + 1) for lines before the error line, plus column.
fn byte_offset(content: &str, line: usize, column: usize, columns_in_chars: bool) -> usize {
    let line_start = content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum::<usize>();
    let column = column.saturating_sub(1);

    let offset = if columns_in_chars {
        let rest = content.get(line_start..).unwrap_or_default();
        line_start
            + rest
                .char_indices()
                .nth(column)
                .map_or(rest.len(), |(index, _)| index)
    } else {
        line_start + column
    };

    // Clamp offset to content length to avoid miette panic on out-of-bounds
    offset.min(content.len())
}

fn extension(path: &Path) -> Option<String> {
    Some(path.extension()?.to_str()?.to_ascii_lowercase())
}

fn is_yaml(ext: &str) -> bool {
    matches!(ext, "yml" | "yaml")
}

fn help_for(path: &Path) -> Option<String> {
    match extension(path)?.as_str() {
        "json" => Some("language files must be a JSON object of message keys".into()),
        "yml" | "yaml" => Some("language files must be a YAML mapping of message keys".into()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_points_into_line() {
        let content = "{\n  \"a\": 1,\n  oops\n}";
        assert_eq!(byte_offset(content, 3, 3, false), 14);
        assert_eq!(&content[14..18], "oops");
    }

    #[test]
    fn test_offset_is_clamped() {
        assert_eq!(byte_offset("ab", 9, 9, false), 2);
        assert_eq!(byte_offset("", 0, 0, false), 0);
        assert_eq!(byte_offset("ab", 9, 9, true), 2);
    }

    #[test]
    fn test_yaml_columns_count_characters() {
        let content = "greeting: hi\ntitle: \"ééééé\" x: y\n";
        let offset = byte_offset(content, 2, 16, true);
        assert!(content[offset..].starts_with("x: y"));

        let diagnostic =
            LexiconDiagnostic::from_parse_error(Path::new("fr.yml"), content, 2, 16, "bad".into());
        assert_eq!(diagnostic.span.offset(), offset);
    }

    #[test]
    fn test_help_depends_on_extension() {
        assert!(help_for(Path::new("en.yml")).is_some());
        assert!(help_for(Path::new("en.txt")).is_none());
    }
}
