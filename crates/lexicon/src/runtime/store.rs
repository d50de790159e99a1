//! Storage for loaded language catalogs.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::runtime::error::{CatalogError, LoadError};
use crate::runtime::loader::LanguageLoader;
use crate::runtime::settings::DEFAULT_LANGUAGE;
use crate::types::Catalog;

/// All loaded catalogs, keyed by language id, plus the default and console
/// language configuration.
///
/// Loading merges: a catalog with an id that is already present replaces the
/// old catalog entirely, keys are never merged within one language.
///
/// # Example
///
/// ```
/// use lexicon::{Catalog, CatalogStore, messages};
///
/// let mut store = CatalogStore::<String>::new("en");
/// let mut loader = vec![
///     Catalog::new("en", messages! { "hi" => "Hello" }).unwrap(),
///     Catalog::new("fr", messages! { "hi" => "Bonjour" }).unwrap(),
/// ];
/// assert_eq!(store.load_languages(&mut loader).unwrap(), 2);
/// assert_eq!(store.lookup("fr", "hi").map(String::as_str), Some("Bonjour"));
/// ```
#[derive(Debug, Clone)]
pub struct CatalogStore<M> {
    default_language: String,
    console_language: String,
    catalogs: HashMap<String, Catalog<M>>,
}

impl<M> Default for CatalogStore<M> {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl<M> CatalogStore<M> {
    /// Create an empty store. The console language starts as the default language.
    pub fn new(default_language: impl Into<String>) -> Self {
        let default_language = default_language.into();
        Self {
            console_language: default_language.clone(),
            default_language,
            catalogs: HashMap::new(),
        }
    }

    // =========================================================================
    // Language Configuration
    // =========================================================================

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn console_language(&self) -> &str {
        &self.console_language
    }

    /// Change the console language.
    ///
    /// The language does not need to be loaded yet; a missing catalog is only
    /// noticed at resolution time.
    pub fn set_console_language(&mut self, language: impl Into<String>) {
        self.console_language = language.into();
    }

    // =========================================================================
    // Catalog Access
    // =========================================================================

    /// Read-only view of every loaded catalog.
    pub fn languages(&self) -> &HashMap<String, Catalog<M>> {
        &self.catalogs
    }

    /// Loaded language ids in sorted order.
    pub fn language_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.catalogs.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn catalog(&self, language: &str) -> Option<&Catalog<M>> {
        self.catalogs.get(language)
    }

    pub fn catalog_mut(&mut self, language: &str) -> Option<&mut Catalog<M>> {
        self.catalogs.get_mut(language)
    }

    pub fn default_catalog(&self) -> Option<&Catalog<M>> {
        self.catalogs.get(&self.default_language)
    }

    /// Look up `key` in `language`, falling back to the default language.
    ///
    /// The fallback is a single step: there is no chain of languages. If no
    /// catalog is loaded for `language` the result is `None` without
    /// consulting the default language.
    pub fn lookup(&self, language: &str, key: &str) -> Option<&M> {
        let catalog = self.catalogs.get(language)?;
        catalog
            .get(key)
            .or_else(|| self.default_catalog().and_then(|default| default.get(key)))
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Insert a catalog, replacing any catalog with the same id.
    pub fn put_catalog(&mut self, catalog: Catalog<M>) -> Option<Catalog<M>> {
        self.catalogs.insert(catalog.id().to_string(), catalog)
    }

    /// Set a single message, creating the language's catalog if needed.
    ///
    /// Returns the message previously stored under `key`.
    pub fn put_message(
        &mut self,
        language: &str,
        key: impl Into<String>,
        message: M,
    ) -> Result<Option<M>, CatalogError> {
        if let Some(catalog) = self.catalogs.get_mut(language) {
            return Ok(catalog.set_message(key, message));
        }

        let mut catalog = Catalog::empty(language)?;
        catalog.set_message(key, message);
        self.catalogs.insert(language.to_string(), catalog);
        Ok(None)
    }

    pub fn remove_catalog(&mut self, language: &str) -> Option<Catalog<M>> {
        self.catalogs.remove(language)
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Merge the loader's catalogs into the store.
    ///
    /// Catalogs are stored under their own id; the keys of the loader's map
    /// are ignored. Returns the number of catalogs held after the merge.
    /// Loader errors are returned unchanged and leave the store untouched.
    pub fn load_languages(
        &mut self,
        loader: &mut impl LanguageLoader<M>,
    ) -> Result<usize, LoadError> {
        let loaded = loader.load()?;
        debug!(loaded = loaded.len(), "merging language catalogs");
        self.catalogs.extend(keyed_by_id(loaded));
        Ok(self.catalogs.len())
    }

    /// Replace every catalog with the loader's output.
    ///
    /// The current catalogs are kept if the loader fails.
    pub fn reload_languages(
        &mut self,
        loader: &mut impl LanguageLoader<M>,
    ) -> Result<usize, LoadError> {
        let loaded = loader.load()?;
        debug!(loaded = loaded.len(), "replacing language catalogs");
        self.catalogs = keyed_by_id(loaded).collect();
        Ok(self.catalogs.len())
    }
}

fn keyed_by_id<M>(
    loaded: HashMap<String, Catalog<M>>,
) -> impl Iterator<Item = (String, Catalog<M>)> {
    loaded.into_iter().map(|(key, catalog)| {
        if key != catalog.id() {
            warn!(key = %key, id = catalog.id(), "loader key differs from catalog id");
        }
        (catalog.id().to_string(), catalog)
    })
}
