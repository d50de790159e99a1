use std::collections::HashMap;

use crate::runtime::CatalogError;

/// The messages of a single language, keyed by message key.
///
/// The message payload `M` is opaque to the catalog: plain text, a rich-text
/// tree or anything else a platform adapter renders. The language id is fixed
/// at construction; messages change only through the explicit setters.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use lexicon::Catalog;
///
/// let mut catalog = Catalog::new("en", HashMap::new()).unwrap();
/// catalog.set_message("greeting", "Hello!".to_string());
/// assert_eq!(catalog.get("greeting").map(String::as_str), Some("Hello!"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog<M> {
    id: String,
    messages: HashMap<String, M>,
}

impl<M> Catalog<M> {
    /// Create a catalog for `id` holding `messages`.
    ///
    /// Returns [`CatalogError::EmptyId`] if the id is empty.
    pub fn new(id: impl Into<String>, messages: HashMap<String, M>) -> Result<Self, CatalogError> {
        let id = id.into();
        if id.is_empty() {
            return Err(CatalogError::EmptyId);
        }
        Ok(Self { id, messages })
    }

    /// Create a catalog for `id` with no messages.
    pub fn empty(id: impl Into<String>) -> Result<Self, CatalogError> {
        Self::new(id, HashMap::new())
    }

    /// The language id, e.g. `"en"`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Look up a message by key.
    pub fn get(&self, key: &str) -> Option<&M> {
        self.messages.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Read-only view of every message in this catalog.
    pub fn messages(&self) -> &HashMap<String, M> {
        &self.messages
    }

    /// Message keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.messages.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Insert or replace a single message, returning the previous one.
    pub fn set_message(&mut self, key: impl Into<String>, message: M) -> Option<M> {
        self.messages.insert(key.into(), message)
    }

    /// Replace every message of this catalog.
    pub fn set_messages(&mut self, messages: HashMap<String, M>) {
        self.messages = messages;
    }

    /// Remove a message, returning it if it was present.
    pub fn remove_message(&mut self, key: &str) -> Option<M> {
        self.messages.remove(key)
    }

    /// Consume the catalog, returning its id and messages.
    pub fn into_parts(self) -> (String, HashMap<String, M>) {
        (self.id, self.messages)
    }
}
