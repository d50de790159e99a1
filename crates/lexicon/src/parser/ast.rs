//! Parsed representation of a message template.

/// A message split into literal text and placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    pub segments: Vec<Segment>,
}

/// A piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, emitted unchanged.
    Literal(String),
    /// An argument placeholder.
    Placeholder(Placeholder),
}

/// An argument placeholder.
///
/// Positions are 1-based as written in the message. A position of `None`
/// means the digits could not be read as a number (e.g. overflow); such a
/// placeholder always renders as empty text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `${N}`: the argument at position N.
    Argument(Option<usize>),
    /// `${N+}`: arguments N through the last, space-separated.
    Rest(Option<usize>),
    /// `${*}`: every argument, space-separated.
    All,
}

impl Template {
    /// A template holding only literal text.
    pub fn literal(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            segments: vec![Segment::Literal(text)],
        }
    }

    /// Placeholders in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(placeholder) => Some(*placeholder),
            Segment::Literal(_) => None,
        })
    }

    pub fn has_placeholders(&self) -> bool {
        self.placeholders().next().is_some()
    }

    /// Highest argument position referenced by a positional placeholder.
    ///
    /// `${*}` and unreadable positions do not count.
    pub fn arity(&self) -> usize {
        self.placeholders()
            .filter_map(|placeholder| match placeholder {
                Placeholder::Argument(position) | Placeholder::Rest(position) => position,
                Placeholder::All => None,
            })
            .max()
            .unwrap_or(0)
    }
}
