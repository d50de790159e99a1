//! JSON and YAML documents and their flattening into message maps.

use std::collections::HashMap;
use std::path::Path;

use lexicon::LoadError;
use serde_json::{Map, Value};

/// Document format of a language file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// File extensions accepted for this format, lowercase and without the dot.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            FileFormat::Json => &["json"],
            FileFormat::Yaml => &["yml", "yaml"],
        }
    }

    /// Whether `path` has one of this format's extensions (ASCII case-insensitive).
    pub fn accepts(self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions()
                    .iter()
                    .any(|accepted| ext.eq_ignore_ascii_case(accepted))
            })
    }

    /// Parse `content` read from `path` into a document tree.
    ///
    /// Blank content parses as an empty mapping.
    pub fn parse(self, path: &Path, content: &str) -> Result<Value, LoadError> {
        if content.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        match self {
            FileFormat::Json => {
                serde_json::from_str(content).map_err(|error| json_error(path, &error))
            }
            FileFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|error| yaml_error(path, &error))
            }
        }
    }
}

pub(crate) fn json_error(path: &Path, error: &serde_json::Error) -> LoadError {
    LoadError::Parse {
        path: path.to_path_buf(),
        line: error.line(),
        column: error.column(),
        message: error.to_string(),
    }
}

pub(crate) fn yaml_error(path: &Path, error: &serde_yaml::Error) -> LoadError {
    let (line, column) = error
        .location()
        .map_or((0, 0), |location| (location.line(), location.column()));
    LoadError::Parse {
        path: path.to_path_buf(),
        line,
        column,
        message: error.to_string(),
    }
}

/// Flatten a document into dot-separated message keys.
///
/// The top level must be a mapping (or null, which yields no messages).
/// Strings are kept as-is, numbers and booleans use their textual form,
/// sequences are joined with newlines and nulls are skipped.
///
/// # Example
///
/// ```
/// use lexicon_files::flatten_document;
/// use serde_json::json;
///
/// let document = json!({ "menu": { "title": "Main", "items": ["Play", "Quit"] } });
/// let messages = flatten_document(&document).unwrap();
/// assert_eq!(messages["menu.title"], "Main");
/// assert_eq!(messages["menu.items"], "Play\nQuit");
/// ```
pub fn flatten_document(document: &Value) -> Option<HashMap<String, String>> {
    let mut result = HashMap::new();
    match document {
        Value::Object(map) => flatten_map(map, None, &mut result),
        Value::Null => {}
        Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_) => return None,
    }
    Some(result)
}

fn flatten_map(map: &Map<String, Value>, prefix: Option<&str>, result: &mut HashMap<String, String>) {
    for (key, value) in map {
        let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}.{key}"));
        match value {
            Value::Object(nested) => flatten_map(nested, Some(&full_key), result),
            Value::Null => {}
            Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_) => {
                result.insert(full_key, scalar_text(value));
            }
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(scalar_text)
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Null => String::new(),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => value.to_string(),
    }
}
