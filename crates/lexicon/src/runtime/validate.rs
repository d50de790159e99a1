//! Consistency checks between a translation and the default language.

use crate::parser::{PlaceholderSyntax, parse_template};
use crate::runtime::error::LoadWarning;
use crate::runtime::store::CatalogStore;

/// Compare the `target` language against the `source` language.
///
/// Reports keys that only the translation defines and keys whose highest
/// placeholder position differs between the two. Returns no warnings if
/// either language is not loaded. Warnings are sorted by key.
///
/// # Example
///
/// ```
/// use lexicon::{Catalog, CatalogStore, PlaceholderSyntax, messages, validate_catalogs};
///
/// let mut store = CatalogStore::<String>::new("en");
/// store.put_catalog(Catalog::new("en", messages! { "hi" => "Hi ${1}" }).unwrap());
/// store.put_catalog(Catalog::new("fr", messages! { "hi" => "Salut", "extra" => "!" }).unwrap());
///
/// let warnings = validate_catalogs(&store, "en", "fr", &PlaceholderSyntax::default());
/// assert_eq!(warnings.len(), 2);
/// ```
pub fn validate_catalogs<M: AsRef<str>>(
    store: &CatalogStore<M>,
    source_language: &str,
    target_language: &str,
    syntax: &PlaceholderSyntax,
) -> Vec<LoadWarning> {
    let mut warnings = Vec::new();

    let Some(source) = store.catalog(source_language) else {
        return warnings;
    };
    let Some(target) = store.catalog(target_language) else {
        return warnings;
    };

    for key in target.keys() {
        let Some(translated) = target.get(key) else {
            continue;
        };
        match source.get(key) {
            Some(original) => {
                let source_arity = parse_template(original.as_ref(), syntax).arity();
                let translation_arity = parse_template(translated.as_ref(), syntax).arity();
                if source_arity != translation_arity {
                    warnings.push(LoadWarning::ArityMismatch {
                        key: key.to_string(),
                        language: target_language.to_string(),
                        source_language: source_language.to_string(),
                        source_arity,
                        translation_arity,
                    });
                }
            }
            None => warnings.push(LoadWarning::UnknownKey {
                key: key.to_string(),
                language: target_language.to_string(),
                source_language: source_language.to_string(),
            }),
        }
    }

    warnings
}

/// Keys of the `source` language that the `target` language does not define,
/// in sorted order.
///
/// A language without a catalog is missing every key. Returns an empty list
/// if the source language is not loaded.
pub fn coverage<M>(
    store: &CatalogStore<M>,
    source_language: &str,
    target_language: &str,
) -> Vec<String> {
    let Some(source) = store.catalog(source_language) else {
        return Vec::new();
    };
    let target = store.catalog(target_language);

    source
        .keys()
        .into_iter()
        .filter(|key| !target.is_some_and(|catalog| catalog.contains_key(key)))
        .map(str::to_string)
        .collect()
}
