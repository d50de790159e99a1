//! Argument substitution for resolved messages.

use crate::parser::{Placeholder, PlaceholderSyntax, Segment, parse_template};

/// A message payload whose text runs can be rewritten.
///
/// Plain strings have a single text run. Rich-text payloads implement this by
/// rewriting each text node and keeping their structure.
pub trait Substitute: Clone {
    /// Return a copy with every text run passed through `rewrite`.
    fn substitute(&self, rewrite: &mut dyn FnMut(&str) -> String) -> Self;
}

impl Substitute for String {
    fn substitute(&self, rewrite: &mut dyn FnMut(&str) -> String) -> Self {
        rewrite(self)
    }
}

/// A value usable as a placeholder argument.
///
/// `None` stands for a null argument and renders as empty text.
pub trait Argument {
    fn as_text(&self) -> Option<&str>;
}

impl Argument for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Argument for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: Argument + ?Sized> Argument for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: Argument> Argument for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(Argument::as_text)
    }
}

/// Substitutes arguments into message placeholders.
///
/// | Placeholder | Replacement                                     |
/// |-------------|-------------------------------------------------|
/// | `${N}`      | argument N (1-based)                            |
/// | `${N+}`     | arguments N through the last, space-separated   |
/// | `${*}`      | every argument, space-separated                 |
///
/// Positions outside the argument list, null arguments and unreadable
/// positions become empty text. Rendering is stateless.
///
/// # Example
///
/// ```
/// use lexicon::Renderer;
///
/// let renderer = Renderer::default();
/// let message = "Hello ${1}, you have ${2+} items: ${*}".to_string();
/// let rendered = renderer.render(&message, Some(&["Alice", "5", "apples"][..]));
/// assert_eq!(rendered, "Hello Alice, you have 5 apples items: Alice 5 apples");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Renderer {
    syntax: PlaceholderSyntax,
}

impl Renderer {
    pub fn new(syntax: PlaceholderSyntax) -> Self {
        Self { syntax }
    }

    pub fn syntax(&self) -> &PlaceholderSyntax {
        &self.syntax
    }

    /// Render `message` with `args`.
    ///
    /// With `None` the message is returned untouched. With an empty slice
    /// every placeholder is cleared.
    pub fn render<M: Substitute, A: Argument>(&self, message: &M, args: Option<&[A]>) -> M {
        let Some(args) = args else {
            return message.clone();
        };
        message.substitute(&mut |text| self.render_text(text, args))
    }

    /// Substitute `args` into a single run of text.
    pub fn render_text<A: Argument>(&self, text: &str, args: &[A]) -> String {
        let template = parse_template(text, &self.syntax);
        let mut rendered = String::with_capacity(text.len());
        for segment in &template.segments {
            match segment {
                Segment::Literal(literal) => rendered.push_str(literal),
                Segment::Placeholder(placeholder) => {
                    rendered.push_str(&expand(*placeholder, args));
                }
            }
        }
        rendered
    }
}

/// Replacement text for a single placeholder.
fn expand<A: Argument>(placeholder: Placeholder, args: &[A]) -> String {
    match placeholder {
        Placeholder::All => join(args),
        Placeholder::Argument(position) => argument_index(position, args.len())
            .and_then(|index| args[index].as_text())
            .unwrap_or_default()
            .to_string(),
        Placeholder::Rest(position) => argument_index(position, args.len())
            .map(|index| join(&args[index..]))
            .unwrap_or_default(),
    }
}

/// Convert a 1-based position into an index into `len` arguments.
fn argument_index(position: Option<usize>, len: usize) -> Option<usize> {
    position?.checked_sub(1).filter(|&index| index < len)
}

fn join<A: Argument>(args: &[A]) -> String {
    args.iter()
        .map(|arg| arg.as_text().unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}
