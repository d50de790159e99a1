mod catalog;
mod level;
mod target;

pub use catalog::Catalog;
pub use level::ConsoleLogLevel;
pub use target::Target;
