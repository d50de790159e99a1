//! File-backed loaders for `lexicon`.
//!
//! [`LanguageFileLoader`] reads one catalog per file from a directory of
//! JSON or YAML documents. [`ReceiverFileLoader`] persists receiver language
//! preferences as a properties, JSON or YAML map.

mod document;
mod language;
mod properties;
mod receiver;

pub use document::{FileFormat, flatten_document};
pub use language::LanguageFileLoader;
pub use properties::{parse_properties, write_properties};
pub use receiver::{ReceiverFileLoader, ReceiverFormat};
