pub mod parser;
pub mod runtime;
pub mod types;

pub use runtime::{
    Argument, CatalogError, CatalogStore, ConsoleLog, DEFAULT_LANGUAGE, Delivery, DispatchError,
    LanguageLoader, LoadError, LoadWarning, Localization, MemoryConsole, MemorySink, MessageSink,
    ReceiverDataLoader, ReceiverRegistry, Renderer, Settings, SinkError, StdoutConsole, Substitute,
    TracingConsole, compute_suggestions, coverage, validate_catalogs,
};
pub use parser::{Placeholder, PlaceholderSyntax, Segment, Template, parse_template};
pub use types::{Catalog, ConsoleLogLevel, Target};

/// Creates a `HashMap<String, M>` of catalog messages from key-value pairs.
///
/// Values are converted via `Into`, so string literals can be used directly
/// when the message type is `String`.
///
/// # Example
///
/// ```
/// use lexicon::{Catalog, messages};
///
/// let catalog = Catalog::<String>::new("en", messages! {
///     "greeting" => "Hello ${1}!",
///     "farewell" => "Bye.",
/// }).unwrap();
/// assert_eq!(catalog.len(), 2);
/// ```
#[macro_export]
macro_rules! messages {
    {} => {
        ::std::collections::HashMap::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::into($value));
            )+
            map
        }
    };
}
