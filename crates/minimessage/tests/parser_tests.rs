//! Comprehensive tests for the markup parser.

use minimessage::{
    Color, ColorParseError, Decoration, MarkupError, ParseOptions, ParseWarning, ParsedMarkup,
    Style, parse,
};

fn color(token: &str) -> Color {
    Color::parse(token).unwrap()
}

// ============================================================================
// Basic Parsing
// ============================================================================

#[test]
fn parse_plain_text() {
    let root = parse("Hello World").unwrap();
    assert!(root.content.is_empty());
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].content, "Hello World");
    assert_eq!(root.children[0].style, Style::default());
}

#[test]
fn parse_empty_string() {
    let root = parse("").unwrap();
    assert!(root.children.is_empty());
    assert!(root.is_empty());
}

#[test]
fn parse_whitespace_only() {
    let root = parse("   ").unwrap();
    assert_eq!(root.plain_text(), "   ");
}

#[test]
fn parse_plain_unicode() {
    let root = parse("héllo wörld 日本語").unwrap();
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].content, "héllo wörld 日本語");
}

// ============================================================================
// Colors
// ============================================================================

#[test]
fn parse_bare_color() {
    let root = parse("<red>Hi</red>").unwrap();
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].content, "Hi");
    assert_eq!(root.children[0].style.color, Some(color("red")));
}

#[test]
fn parse_color_aliases() {
    let root = parse("<#ffffff>Foo</#ffffff> <color:#ffffff>Bar</color:#ffffff> <c:#ffffff>Baz</c:#ffffff>")
        .unwrap();
    let white = Some(color("white"));
    let styled: Vec<_> = root
        .children
        .iter()
        .filter(|n| n.style.color == white)
        .map(|n| n.content.as_str())
        .collect();
    assert_eq!(styled, vec!["Foo", "Bar", "Baz"]);
}

#[test]
fn parse_named_color_forms() {
    let root = parse("<gray>Foo</gray> <colour:gray>Bar</colour> <c:gray>Baz</c>").unwrap();
    let gray = Some(color("gray"));
    assert_eq!(root.children[0].style.color, gray);
    assert_eq!(root.children[2].style.color, gray);
    assert_eq!(root.children[4].style.color, gray);
    assert_eq!(root.children[1].style.color, None);
}

#[test]
fn parse_color_name_case_insensitive() {
    let root = parse("<c:DARK_RED>x").unwrap();
    assert_eq!(root.children[0].style.color, Some(color("dark_red")));
}

#[test]
fn inner_color_overrides_outer() {
    let root = parse("<red>a<blue>b</blue>c").unwrap();
    let colors: Vec<_> = root.children.iter().map(|n| n.style.color).collect();
    assert_eq!(
        colors,
        vec![Some(color("red")), Some(color("blue")), Some(color("red"))]
    );
}

// ============================================================================
// Decorations
// ============================================================================

#[test]
fn parse_decoration_aliases() {
    let cases = [
        ("bold", Decoration::Bold),
        ("b", Decoration::Bold),
        ("italic", Decoration::Italic),
        ("i", Decoration::Italic),
        ("em", Decoration::Italic),
        ("underlined", Decoration::Underlined),
        ("underline", Decoration::Underlined),
        ("u", Decoration::Underlined),
        ("strikethrough", Decoration::Strikethrough),
        ("st", Decoration::Strikethrough),
        ("obfuscated", Decoration::Obfuscated),
        ("obfuscate", Decoration::Obfuscated),
        ("obf", Decoration::Obfuscated),
    ];

    for (name, decoration) in cases {
        let input = format!("<{name}>Foo</{name}>");
        let root = parse(&input).unwrap();
        assert_eq!(root.children.len(), 1, "input: {}", input);
        assert_eq!(
            root.children[0].style.decoration(decoration),
            Some(true),
            "input: {}",
            input
        );
    }
}

#[test]
fn tag_names_are_case_sensitive() {
    let root = parse("<BOLD>x").unwrap();
    assert_eq!(root.plain_text(), "<BOLD>x");
    assert!(root.children[0].style.is_empty());
}

#[test]
fn negated_decoration() {
    let root = parse("<bold>a<!bold>b</bold>c").unwrap();
    let bold: Vec<_> = root.children.iter().map(|n| n.style.text.bold).collect();
    assert_eq!(bold, vec![Some(true), Some(false), Some(true)]);
}

#[test]
fn decoration_with_false_argument() {
    let root = parse("<italic:false>x").unwrap();
    assert_eq!(root.children[0].style.text.italic, Some(false));
}

#[test]
fn decoration_with_bad_argument() {
    assert!(matches!(
        parse("<bold:sometimes>x"),
        Err(MarkupError::InvalidFlag { .. })
    ));
}

// ============================================================================
// Nesting
// ============================================================================

#[test]
fn nested_tags_restore_parent() {
    let root = parse("<bold><italic>x</italic>y").unwrap();
    assert_eq!(root.children.len(), 2);

    let x = &root.children[0];
    assert_eq!(x.content, "x");
    assert_eq!(x.style.text.bold, Some(true));
    assert_eq!(x.style.text.italic, Some(true));

    let y = &root.children[1];
    assert_eq!(y.content, "y");
    assert_eq!(y.style.text.bold, Some(true));
    assert_eq!(y.style.text.italic, None);
}

#[test]
fn close_by_alias() {
    let root = parse("<b>x</bold>y").unwrap();
    assert_eq!(root.children[1].style, Style::default());
}

#[test]
fn close_outer_closes_inner() {
    let root = parse("<red><bold>x</red>y").unwrap();
    assert_eq!(root.children.len(), 2);
    assert!(root.children[1].style.is_empty());
}

#[test]
fn bare_color_close_matches_any_color() {
    let root = parse("<color:red>x</blue>y").unwrap();
    assert!(root.children[1].style.color.is_none());
}

#[test]
fn unclosed_tags_run_to_end() {
    let root = parse("<red>Hello <bold>World").unwrap();
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[1].style.color, Some(color("red")));
    assert_eq!(root.children[1].style.text.bold, Some(true));
}

#[test]
fn emitted_styles_are_not_mutated_later() {
    let root = parse("<red>a</red><bold>b</bold>").unwrap();
    assert_eq!(root.children[0].style.text.bold, None);
    assert_eq!(root.children[1].style.color, None);
}

#[test]
fn adjacent_runs_with_same_style_merge() {
    let root = parse("<bold>a</bold><bold>b</bold>").unwrap();
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].content, "ab");
}

// ============================================================================
// Graceful Degradation
// ============================================================================

#[test]
fn unknown_tag_kept_as_text() {
    let root = parse("<foo>").unwrap();
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].content, "<foo>");
}

#[test]
fn unknown_tag_with_args_kept_verbatim() {
    let root = parse("Hi <hover:show_text:'x'>there</hover>").unwrap();
    assert_eq!(root.plain_text(), "Hi <hover:show_text:'x'>there</hover>");
}

#[test]
fn unknown_tag_inherits_style() {
    let root = parse("<bold><foo>").unwrap();
    assert_eq!(root.children[0].content, "<foo>");
    assert_eq!(root.children[0].style.text.bold, Some(true));
}

#[test]
fn stray_brackets_are_text() {
    let root = parse("1 < 2 <red>and</red> 3 > 2").unwrap();
    assert_eq!(root.plain_text(), "1 < 2 and 3 > 2");
    assert_eq!(root.children[1].content, "and");
}

#[test]
fn empty_brackets_are_text() {
    let root = parse("a<>b").unwrap();
    assert_eq!(root.plain_text(), "a<>b");
}

#[test]
fn unterminated_tag_is_text_with_warning() {
    let parsed = ParsedMarkup::parse("Hello <bold").unwrap();
    assert_eq!(parsed.text(), "Hello <bold");
    assert_eq!(parsed.warnings(), &[ParseWarning::UnterminatedTag(6)]);
}

#[test]
fn unmatched_close_is_ignored_with_warning() {
    let parsed = ParsedMarkup::parse("x</italic>y").unwrap();
    assert_eq!(parsed.text(), "xy");
    assert_eq!(parsed.warnings().len(), 1);
}

#[test]
fn many_unmatched_closes_never_underflow() {
    let parsed = ParsedMarkup::parse("</b></b></></red>text").unwrap();
    assert_eq!(parsed.text(), "text");
    assert_eq!(parsed.warnings().len(), 4);
    assert!(parsed.leaves()[0].style.is_empty());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn malformed_hex_is_error() {
    assert_eq!(
        parse("<#zzzzzz>Bad"),
        Err(MarkupError::InvalidColor(ColorParseError::InvalidHex(
            "#zzzzzz".to_string()
        )))
    );
}

#[test]
fn short_hex_is_error() {
    assert!(matches!(
        parse("<#fff>x"),
        Err(MarkupError::InvalidColor(ColorParseError::InvalidHex(_)))
    ));
}

#[test]
fn unknown_color_argument_is_error() {
    assert_eq!(
        parse("<color:blurple>x"),
        Err(MarkupError::InvalidColor(ColorParseError::UnknownName(
            "blurple".to_string()
        )))
    );
}

#[test]
fn missing_color_argument_is_error() {
    assert_eq!(
        parse("<c>x"),
        Err(MarkupError::MissingColor("c".to_string()))
    );
}

#[test]
fn error_messages() {
    let err = parse("<gradient:red>x").unwrap_err();
    assert_eq!(
        err.to_string(),
        "gradient requires at least 2 color stops, found 1"
    );

    let err = parse("<#12>x").unwrap_err();
    assert_eq!(err.to_string(), "invalid color: invalid hex color: #12");
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn strict_mode_rejects_unterminated_tag() {
    let options = ParseOptions::new().strict(true);
    assert_eq!(
        ParsedMarkup::parse_with("<bold>x <red", &options),
        Err(MarkupError::Strict(ParseWarning::UnterminatedTag(8)))
    );
}

#[test]
fn strict_mode_accepts_clean_input() {
    let options = ParseOptions::new().strict(true);
    let parsed = ParsedMarkup::parse_with("<bold>x</bold> <foo>", &options).unwrap();
    assert_eq!(parsed.text(), "x <foo>");
}

#[test]
fn base_style_is_inherited() {
    let base = Style::new().with_color(color("gray"));
    let options = ParseOptions::new().base_style(base);
    let parsed = ParsedMarkup::parse_with("a<bold>b", &options).unwrap();
    let leaves = parsed.leaves();
    assert_eq!(leaves[0].style.color, Some(color("gray")));
    assert_eq!(leaves[1].style.color, Some(color("gray")));
    assert_eq!(leaves[1].style.text.bold, Some(true));
}
