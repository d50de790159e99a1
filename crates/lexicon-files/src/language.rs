//! Loading catalogs from a directory of language files.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use lexicon::{Catalog, LanguageLoader, LoadError};
use tracing::debug;

use crate::document::{FileFormat, flatten_document};

/// Loads one catalog per file from a language directory.
///
/// Every file with an extension of the loader's format becomes a catalog
/// whose language id is the file stem, so `lang/fr.json` defines `fr`.
/// Nested mappings are flattened into dot-separated keys.
///
/// Bundled default files are written into the directory before it is
/// scanned, creating the directory if needed. An existing file is never
/// overwritten, so edits made by server operators survive restarts.
///
/// # Example
///
/// ```
/// use lexicon::CatalogStore;
/// use lexicon_files::LanguageFileLoader;
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut loader = LanguageFileLoader::json(dir.path().join("lang"))
///     .with_default("en.json", r#"{ "menu": { "title": "Main menu" } }"#);
///
/// let mut store = CatalogStore::<String>::new("en");
/// store.load_languages(&mut loader).unwrap();
/// assert_eq!(store.lookup("en", "menu.title").map(String::as_str), Some("Main menu"));
/// ```
#[derive(Debug, Clone)]
pub struct LanguageFileLoader {
    directory: PathBuf,
    format: FileFormat,
    defaults: Vec<(String, String)>,
}

impl LanguageFileLoader {
    pub fn new(directory: impl Into<PathBuf>, format: FileFormat) -> Self {
        Self {
            directory: directory.into(),
            format,
            defaults: Vec::new(),
        }
    }

    /// A loader for `.json` files.
    pub fn json(directory: impl Into<PathBuf>) -> Self {
        Self::new(directory, FileFormat::Json)
    }

    /// A loader for `.yml` and `.yaml` files.
    pub fn yaml(directory: impl Into<PathBuf>) -> Self {
        Self::new(directory, FileFormat::Yaml)
    }

    /// Bundle a default file, written as `file_name` when it does not exist.
    #[must_use]
    pub fn with_default(mut self, file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.defaults.push((file_name.into(), contents.into()));
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    /// Read a single language file into a catalog named after its stem.
    pub fn load_file<M: From<String>>(&self, path: &Path) -> Result<Catalog<M>, LoadError> {
        let language = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let document = self.format.parse(path, &content)?;
        let flattened = flatten_document(&document).ok_or_else(|| LoadError::NotAMapping {
            path: path.to_path_buf(),
        })?;
        let messages = flattened
            .into_iter()
            .map(|(key, text)| (key, M::from(text)))
            .collect();

        let catalog = Catalog::new(language, messages)?;
        debug!(
            path = %path.display(),
            language,
            messages = catalog.len(),
            "loaded language file"
        );
        Ok(catalog)
    }

    /// Write bundled defaults that are not present in the directory yet.
    fn install_defaults(&self) -> Result<(), LoadError> {
        if self.defaults.is_empty() {
            return Ok(());
        }

        fs::create_dir_all(&self.directory).map_err(|e| LoadError::Write {
            path: self.directory.clone(),
            source: e,
        })?;

        for (file_name, contents) in &self.defaults {
            let path = self.directory.join(file_name);
            if path.exists() {
                debug!(path = %path.display(), "keeping existing language file");
                continue;
            }
            fs::write(&path, contents).map_err(|e| LoadError::Write {
                path: path.clone(),
                source: e,
            })?;
            debug!(path = %path.display(), "installed default language file");
        }
        Ok(())
    }

    /// Paths of every file in the directory this loader accepts, sorted.
    fn language_files(&self) -> Result<Vec<PathBuf>, LoadError> {
        if !self.directory.is_dir() {
            return Err(LoadError::NotADirectory {
                path: self.directory.clone(),
            });
        }

        let io_error = |e| LoadError::Io {
            path: self.directory.clone(),
            source: e,
        };
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.directory).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.is_file() && self.format.accepts(&path) {
                paths.push(path);
            } else {
                debug!(path = %path.display(), "skipping non-language file");
            }
        }
        paths.sort();
        Ok(paths)
    }
}

impl<M: From<String>> LanguageLoader<M> for LanguageFileLoader {
    fn load(&mut self) -> Result<HashMap<String, Catalog<M>>, LoadError> {
        self.install_defaults()?;

        let mut catalogs = HashMap::new();
        for path in self.language_files()? {
            let catalog = self.load_file::<M>(&path)?;
            catalogs.insert(catalog.id().to_string(), catalog);
        }
        Ok(catalogs)
    }
}
