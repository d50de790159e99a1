use bon::Builder;
use serde::{Deserialize, Serialize};

/// The tokens that make up an argument placeholder.
///
/// A placeholder is `open`, then either the `all` marker or a run of ASCII
/// digits optionally followed by the `rest` marker, then `close`. Tokens are
/// matched ASCII case-insensitively. An empty token never matches, so an
/// empty marker disables its alternative.
///
/// # Example
///
/// ```
/// use lexicon::PlaceholderSyntax;
///
/// let syntax = PlaceholderSyntax::builder()
///     .open("{arg")
///     .close("}")
///     .build();
/// assert_eq!(syntax.open(), "{arg");
/// assert_eq!(syntax.all_marker(), "*");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(default)]
pub struct PlaceholderSyntax {
    #[builder(default = "${".to_string())]
    open: String,

    #[builder(default = "}".to_string())]
    close: String,

    /// Marker after the digits that selects "this argument and the rest".
    #[builder(default = "+".to_string())]
    rest_marker: String,

    /// Marker that selects every argument.
    #[builder(default = "*".to_string())]
    all_marker: String,
}

impl Default for PlaceholderSyntax {
    fn default() -> Self {
        PlaceholderSyntax::builder().build()
    }
}

impl PlaceholderSyntax {
    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }

    pub fn rest_marker(&self) -> &str {
        &self.rest_marker
    }

    pub fn all_marker(&self) -> &str {
        &self.all_marker
    }
}
