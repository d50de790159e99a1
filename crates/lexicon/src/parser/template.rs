//! Template parser using winnow.
//!
//! Splits message text into literal runs and placeholders. Any text that is
//! not a well-formed placeholder is literal, so parsing never fails.

use winnow::combinator::{alt, fail, opt, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::ast::{Placeholder, Segment, Template};
use super::syntax::PlaceholderSyntax;

/// Parse message text into a [`Template`] using `syntax`.
///
/// # Example
///
/// ```
/// use lexicon::{Placeholder, PlaceholderSyntax, Segment, parse_template};
///
/// let template = parse_template("Hi ${1}!", &PlaceholderSyntax::default());
/// assert_eq!(
///     template.segments,
///     vec![
///         Segment::Literal("Hi ".to_string()),
///         Segment::Placeholder(Placeholder::Argument(Some(1))),
///         Segment::Literal("!".to_string()),
///     ]
/// );
/// ```
pub fn parse_template(input: &str, syntax: &PlaceholderSyntax) -> Template {
    let mut remaining = input;
    match template(syntax, &mut remaining) {
        Ok(template) if remaining.is_empty() => template,
        _ => Template::literal(input),
    }
}

/// Parse a complete template into segments.
fn template(syntax: &PlaceholderSyntax, input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> =
        repeat(0.., |input: &mut &str| segment(syntax, input)).parse_next(input)?;

    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other @ Segment::Placeholder(_) => result.push(other),
        }
    }

    result
}

/// Parse a single segment (placeholder or literal character).
fn segment(syntax: &PlaceholderSyntax, input: &mut &str) -> ModalResult<Segment> {
    alt((
        |input: &mut &str| placeholder(syntax, input).map(Segment::Placeholder),
        any.map(|c: char| Segment::Literal(c.to_string())),
    ))
    .parse_next(input)
}

/// Parse a placeholder: open (all | digits rest?) close
fn placeholder(syntax: &PlaceholderSyntax, input: &mut &str) -> ModalResult<Placeholder> {
    token(syntax.open(), input)?;
    let placeholder = alt((
        |input: &mut &str| token(syntax.all_marker(), input).map(|_| Placeholder::All),
        |input: &mut &str| indexed(syntax, input),
    ))
    .parse_next(input)?;
    token(syntax.close(), input)?;
    Ok(placeholder)
}

/// Parse the digits of a positional placeholder and an optional rest marker.
fn indexed(syntax: &PlaceholderSyntax, input: &mut &str) -> ModalResult<Placeholder> {
    let digits: &str = take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    let position = digits.parse::<usize>().ok();
    let rest: Option<()> =
        opt(|input: &mut &str| token(syntax.rest_marker(), input).map(|_| ())).parse_next(input)?;

    Ok(match rest {
        Some(()) => Placeholder::Rest(position),
        None => Placeholder::Argument(position),
    })
}

/// Match `expected` ASCII case-insensitively. Empty tokens never match.
fn token<'i>(expected: &str, input: &mut &'i str) -> ModalResult<&'i str> {
    let matches = !expected.is_empty()
        && input
            .get(..expected.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(expected));
    if !matches {
        return fail(input);
    }

    let (head, tail) = input.split_at(expected.len());
    *input = tail;
    Ok(head)
}
