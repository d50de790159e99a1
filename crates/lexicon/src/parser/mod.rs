//! Placeholder parsing for message templates.
//!
//! Messages carry argument placeholders such as `${1}`, `${2+}` and `${*}`.
//! This module splits message text into literal runs and placeholders using a
//! configurable [`PlaceholderSyntax`].

pub mod ast;
mod syntax;
mod template;

pub use ast::*;
pub use syntax::PlaceholderSyntax;
pub use template::parse_template;
