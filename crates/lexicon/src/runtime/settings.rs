use bon::Builder;

use crate::parser::PlaceholderSyntax;

/// Language used when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Construction-time configuration for a [`Localization`](crate::Localization).
///
/// # Example
///
/// ```
/// use lexicon::Settings;
///
/// let settings = Settings::builder()
///     .default_language("de")
///     .console_language("en".to_string())
///     .build();
/// assert_eq!(settings.default_language(), "de");
/// assert_eq!(settings.console_language(), "en");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct Settings {
    /// Fallback language for receivers without a preference and for missing keys.
    #[builder(default = DEFAULT_LANGUAGE.to_string())]
    default_language: String,

    /// Language for console messages. Defaults to the default language.
    console_language: Option<String>,

    /// Placeholder tokens used when rendering arguments.
    #[builder(default)]
    syntax: PlaceholderSyntax,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::builder().build()
    }
}

impl Settings {
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// The console language, falling back to the default language.
    pub fn console_language(&self) -> &str {
        self.console_language
            .as_deref()
            .unwrap_or(&self.default_language)
    }

    pub fn syntax(&self) -> &PlaceholderSyntax {
        &self.syntax
    }
}
