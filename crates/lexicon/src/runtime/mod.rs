//! Message resolution, rendering and dispatch.
//!
//! This module holds the catalog store, the receiver language registry, the
//! placeholder renderer and the [`Localization`] type that ties them together
//! with the loader and sink collaborators supplied by platform adapters.

mod error;
mod loader;
mod receivers;
mod renderer;
mod resolver;
mod settings;
mod sink;
mod store;
mod validate;

pub use error::{
    CatalogError, DispatchError, LoadError, LoadWarning, SinkError, compute_suggestions,
};
pub use loader::{LanguageLoader, ReceiverDataLoader};
pub use receivers::ReceiverRegistry;
pub use renderer::{Argument, Renderer, Substitute};
pub use resolver::{Delivery, Localization};
pub use settings::{DEFAULT_LANGUAGE, Settings};
pub use sink::{ConsoleLog, MemoryConsole, MemorySink, MessageSink, StdoutConsole, TracingConsole};
pub use store::CatalogStore;
pub use validate::{coverage, validate_catalogs};
