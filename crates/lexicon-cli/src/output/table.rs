//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;

/// Coverage data for a single language.
#[derive(Debug, Serialize)]
pub struct LanguageCoverage {
    /// Language code (e.g., "es", "fr").
    pub language: String,
    /// Number of default language keys the language defines.
    pub translated: usize,
    /// Number of keys in the default language.
    pub total: usize,
    /// Keys the language does not define.
    pub missing: Vec<String>,
}

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Coverage", "Missing"]);

    for lang in coverage {
        table.add_row(vec![
            lang.language.clone(),
            format!("{}/{}", lang.translated, lang.total),
            lang.missing.len().to_string(),
        ]);
    }

    table
}

/// Format loaded languages with their message counts.
pub fn format_language_table(languages: &[(String, usize)]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Messages"]);

    for (language, count) in languages {
        table.add_row(vec![language.clone(), count.to_string()]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_rows() {
        let table = format_coverage_table(&[LanguageCoverage {
            language: "fr".into(),
            translated: 3,
            total: 4,
            missing: vec!["bye".into()],
        }]);
        let rendered = table.to_string();
        assert!(rendered.contains("fr"));
        assert!(rendered.contains("3/4"));
    }
}
