//! Persisting receiver language preferences in a single file.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::fs;
use std::hash::Hash;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use lexicon::{LoadError, ReceiverDataLoader};
use tracing::debug;

use crate::document::{json_error, yaml_error};
use crate::properties::{parse_properties, write_properties};

/// Storage format of a receiver data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceiverFormat {
    /// `receiver=language` lines.
    Properties,
    /// A JSON object of receiver to language.
    Json,
    /// A YAML mapping of receiver to language.
    Yaml,
}

/// Loads and saves the receiver to language mapping as one file.
///
/// Receiver ids are written with [`Display`] and read back with [`FromStr`].
/// Entries are saved sorted by their textual id. Loading a file that does
/// not exist is an error.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// use lexicon::ReceiverDataLoader;
/// use lexicon_files::ReceiverFileLoader;
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut loader = ReceiverFileLoader::properties(dir.path().join("players.properties"));
///
/// let data = HashMap::from([(7_u64, "fr".to_string())]);
/// loader.save(&data).unwrap();
/// assert_eq!(loader.load().unwrap(), data);
/// ```
#[derive(Debug, Clone)]
pub struct ReceiverFileLoader {
    path: PathBuf,
    format: ReceiverFormat,
}

impl ReceiverFileLoader {
    pub fn new(path: impl Into<PathBuf>, format: ReceiverFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn properties(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ReceiverFormat::Properties)
    }

    pub fn json(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ReceiverFormat::Json)
    }

    pub fn yaml(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ReceiverFormat::Yaml)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ReceiverFormat {
        self.format
    }

    /// Raw `(receiver, language)` text pairs in file order.
    fn read_entries(&self) -> Result<Vec<(String, String)>, LoadError> {
        let content = fs::read_to_string(&self.path).map_err(|e| LoadError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries: BTreeMap<String, String> = match self.format {
            ReceiverFormat::Properties => return Ok(parse_properties(&content)),
            ReceiverFormat::Json => {
                serde_json::from_str(&content).map_err(|error| json_error(&self.path, &error))?
            }
            ReceiverFormat::Yaml => {
                serde_yaml::from_str(&content).map_err(|error| yaml_error(&self.path, &error))?
            }
        };
        Ok(entries.into_iter().collect())
    }

    fn render(&self, entries: &BTreeMap<String, String>) -> Result<String, LoadError> {
        let rendered = match self.format {
            ReceiverFormat::Properties => Ok(write_properties(entries)),
            ReceiverFormat::Json => serde_json::to_string_pretty(entries)
                .map(|text| text + "\n")
                .map_err(io::Error::other),
            ReceiverFormat::Yaml => serde_yaml::to_string(entries).map_err(io::Error::other),
        };
        rendered.map_err(|e| LoadError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl<R> ReceiverDataLoader<R> for ReceiverFileLoader
where
    R: FromStr + Display + Eq + Hash,
    R::Err: Display,
{
    fn load(&mut self) -> Result<HashMap<R, String>, LoadError> {
        let entries = self.read_entries()?;
        debug!(path = %self.path.display(), entries = entries.len(), "read receiver data");

        entries
            .into_iter()
            .map(|(key, language)| match key.parse::<R>() {
                Ok(receiver) => Ok((receiver, language)),
                Err(error) => Err(LoadError::InvalidReceiver {
                    path: self.path.clone(),
                    key,
                    message: error.to_string(),
                }),
            })
            .collect()
    }

    fn save(&mut self, data: &HashMap<R, String>) -> Result<(), LoadError> {
        let entries: BTreeMap<String, String> = data
            .iter()
            .map(|(receiver, language)| (receiver.to_string(), language.clone()))
            .collect();
        let content = self.render(&entries)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| LoadError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        fs::write(&self.path, content).map_err(|e| LoadError::Write {
            path: self.path.clone(),
            source: e,
        })?;
        debug!(path = %self.path.display(), entries = entries.len(), "saved receiver data");
        Ok(())
    }
}
