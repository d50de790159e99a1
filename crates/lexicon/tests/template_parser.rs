//! Integration tests for placeholder parsing.

use lexicon::{Placeholder, PlaceholderSyntax, Segment, Template, parse_template};

fn parse(input: &str) -> Template {
    parse_template(input, &PlaceholderSyntax::default())
}

fn literal(text: &str) -> Segment {
    Segment::Literal(text.into())
}

fn arg(position: usize) -> Segment {
    Segment::Placeholder(Placeholder::Argument(Some(position)))
}

// =============================================================================
// Literals
// =============================================================================

#[test]
fn test_pure_literal() {
    let t = parse("Hello, world!");
    assert_eq!(t.segments, vec![literal("Hello, world!")]);
    assert!(!t.has_placeholders());
}

#[test]
fn test_empty_string() {
    let t = parse("");
    assert_eq!(t.segments, vec![]);
    assert_eq!(t.arity(), 0);
}

#[test]
fn test_unterminated_placeholder_is_literal() {
    let t = parse("Hello ${1");
    assert_eq!(t.segments, vec![literal("Hello ${1")]);
}

#[test]
fn test_placeholder_without_digits_is_literal() {
    let t = parse("${} ${name} ${-1}");
    assert_eq!(t.segments, vec![literal("${} ${name} ${-1}")]);
}

#[test]
fn test_lone_dollar_and_braces() {
    let t = parse("costs $5 {or} }");
    assert_eq!(t.segments, vec![literal("costs $5 {or} }")]);
}

// =============================================================================
// Placeholders
// =============================================================================

#[test]
fn test_positional_placeholder() {
    let t = parse("Hello ${1}!");
    assert_eq!(t.segments, vec![literal("Hello "), arg(1), literal("!")]);
}

#[test]
fn test_multi_digit_position() {
    let t = parse("${12}");
    assert_eq!(t.segments, vec![arg(12)]);
    assert_eq!(t.arity(), 12);
}

#[test]
fn test_rest_placeholder() {
    let t = parse("say ${2+}");
    assert_eq!(
        t.segments,
        vec![literal("say "), Segment::Placeholder(Placeholder::Rest(Some(2)))]
    );
}

#[test]
fn test_all_placeholder() {
    let t = parse("[${*}]");
    assert_eq!(
        t.segments,
        vec![
            literal("["),
            Segment::Placeholder(Placeholder::All),
            literal("]")
        ]
    );
}

#[test]
fn test_adjacent_placeholders() {
    let t = parse("${1}${2}");
    assert_eq!(t.segments, vec![arg(1), arg(2)]);
}

#[test]
fn test_overflowing_position_is_unreadable() {
    let t = parse("${99999999999999999999999}");
    assert_eq!(
        t.segments,
        vec![Segment::Placeholder(Placeholder::Argument(None))]
    );
    assert_eq!(t.arity(), 0);
}

#[test]
fn test_broken_placeholder_before_valid_one() {
    let t = parse("${x ${1}");
    assert_eq!(t.segments, vec![literal("${x "), arg(1)]);
}

#[test]
fn test_placeholders_iterator_order() {
    let t = parse("${2} and ${*} and ${1+}");
    let placeholders: Vec<_> = t.placeholders().collect();
    assert_eq!(
        placeholders,
        vec![
            Placeholder::Argument(Some(2)),
            Placeholder::All,
            Placeholder::Rest(Some(1)),
        ]
    );
    assert_eq!(t.arity(), 2);
}

// =============================================================================
// Custom syntax
// =============================================================================

#[test]
fn test_custom_syntax() {
    let syntax = PlaceholderSyntax::builder()
        .open("%")
        .close("%")
        .rest_marker("..")
        .all_marker("all")
        .build();

    let t = parse_template("%1% / %2..% / %all%", &syntax);
    assert_eq!(
        t.segments,
        vec![
            arg(1),
            literal(" / "),
            Segment::Placeholder(Placeholder::Rest(Some(2))),
            literal(" / "),
            Segment::Placeholder(Placeholder::All),
        ]
    );
}

#[test]
fn test_tokens_match_case_insensitively() {
    let syntax = PlaceholderSyntax::builder()
        .open("{arg")
        .close("}")
        .all_marker("ALL")
        .build();

    let t = parse_template("{ARG1} {Arg2} {arg:all}", &syntax);
    assert_eq!(t.segments, vec![arg(1), literal(" "), arg(2), literal(" {arg:all}")]);

    let t = parse_template("{argall}", &syntax);
    assert_eq!(t.segments, vec![Segment::Placeholder(Placeholder::All)]);
}

#[test]
fn test_default_syntax_ignored_under_custom_syntax() {
    let syntax = PlaceholderSyntax::builder().open("<").close(">").build();
    let t = parse_template("${1} <1>", &syntax);
    assert_eq!(t.segments, vec![literal("${1} "), arg(1)]);
}

#[test]
fn test_empty_marker_disables_alternative() {
    let syntax = PlaceholderSyntax::builder().all_marker("").rest_marker("").build();
    let t = parse_template("${*} ${1+} ${1}", &syntax);
    assert_eq!(t.segments, vec![literal("${*} ${1+} "), arg(1)]);
}

#[test]
fn test_syntax_deserializes_with_defaults() {
    let syntax: PlaceholderSyntax = serde_json::from_str(r#"{ "open": "{{" }"#).unwrap();
    assert_eq!(syntax.open(), "{{");
    assert_eq!(syntax.close(), "}");
    assert_eq!(syntax.rest_marker(), "+");
    assert_eq!(syntax.all_marker(), "*");
}
