//! Loader traits for catalogs and receiver language data.
//!
//! File-backed implementations live in the `lexicon-files` crate. In-memory
//! implementations are provided here for embedded catalogs and tests.

use std::collections::HashMap;
use std::hash::Hash;

use crate::runtime::error::LoadError;
use crate::types::Catalog;

/// Produces a full set of language catalogs keyed by language id.
pub trait LanguageLoader<M> {
    fn load(&mut self) -> Result<HashMap<String, Catalog<M>>, LoadError>;
}

/// Loads and persists the receiver → language id mapping.
pub trait ReceiverDataLoader<R> {
    fn load(&mut self) -> Result<HashMap<R, String>, LoadError>;

    /// Persist the complete mapping. There is no incremental save.
    fn save(&mut self, data: &HashMap<R, String>) -> Result<(), LoadError>;
}

/// A list of catalogs loads as a map keyed by each catalog's id.
///
/// Later catalogs replace earlier ones with the same id.
impl<M: Clone> LanguageLoader<M> for Vec<Catalog<M>> {
    fn load(&mut self) -> Result<HashMap<String, Catalog<M>>, LoadError> {
        Ok(self
            .iter()
            .map(|catalog| (catalog.id().to_string(), catalog.clone()))
            .collect())
    }
}

/// An in-memory receiver store: `load` copies the map, `save` replaces it.
impl<R: Clone + Eq + Hash> ReceiverDataLoader<R> for HashMap<R, String> {
    fn load(&mut self) -> Result<HashMap<R, String>, LoadError> {
        Ok(self.clone())
    }

    fn save(&mut self, data: &HashMap<R, String>) -> Result<(), LoadError> {
        self.clone_from(data);
        Ok(())
    }
}
