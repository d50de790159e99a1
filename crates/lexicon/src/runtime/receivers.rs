//! Receiver language preferences.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::runtime::error::LoadError;
use crate::runtime::loader::ReceiverDataLoader;

/// Maps receiver identities to their preferred language id.
///
/// A receiver without an entry uses the default language. Entries are only
/// created by [`set_language`](Self::set_language) or by loading.
#[derive(Debug, Clone)]
pub struct ReceiverRegistry<R> {
    languages: HashMap<R, String>,
}

impl<R> Default for ReceiverRegistry<R> {
    fn default() -> Self {
        Self {
            languages: HashMap::new(),
        }
    }
}

impl<R: Eq + Hash> ReceiverRegistry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The receiver's stored language, without any fallback.
    pub fn language(&self, receiver: &R) -> Option<&str> {
        self.languages.get(receiver).map(String::as_str)
    }

    /// Store a language preference, returning the previous one.
    pub fn set_language(&mut self, receiver: R, language: impl Into<String>) -> Option<String> {
        self.languages.insert(receiver, language.into())
    }

    /// Forget a receiver's preference, returning it if it was set.
    pub fn remove_language(&mut self, receiver: &R) -> Option<String> {
        self.languages.remove(receiver)
    }

    /// Read-only view of every stored preference.
    pub fn receiver_data(&self) -> &HashMap<R, String> {
        &self.languages
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Merge the loader's preferences into the registry, returning its new size.
    pub fn load_receiver_data(
        &mut self,
        loader: &mut impl ReceiverDataLoader<R>,
    ) -> Result<usize, LoadError> {
        let loaded = loader.load()?;
        debug!(loaded = loaded.len(), "merging receiver languages");
        self.languages.extend(loaded);
        Ok(self.languages.len())
    }

    /// Hand the complete mapping to the loader for persistence.
    pub fn save_receiver_data(
        &self,
        loader: &mut impl ReceiverDataLoader<R>,
    ) -> Result<(), LoadError> {
        debug!(receivers = self.languages.len(), "saving receiver languages");
        loader.save(&self.languages)
    }
}
