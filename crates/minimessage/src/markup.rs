//! ParsedMarkup result type and parse options.

use crate::error::{MarkupError, ParseWarning};
use crate::node::TextNode;
use crate::style::Style;

/// Options controlling a parse.
///
/// # Examples
///
/// ```
/// use minimessage::{Decoration, ParseOptions, ParsedMarkup, Style};
///
/// let options = ParseOptions::new()
///     .base_style(Style::new().with_decoration(Decoration::Italic, false))
///     .strict(true);
///
/// let parsed = ParsedMarkup::parse_with("<bold>Hi", &options).unwrap();
/// let leaf = &parsed.root().children[0];
/// assert_eq!(leaf.style.text.italic, Some(false));
/// assert_eq!(leaf.style.text.bold, Some(true));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    /// Style that seeds the style stack; untagged text gets exactly this.
    pub base_style: Style,
    /// Turn every [`ParseWarning`] into a [`MarkupError::Strict`].
    pub strict: bool,
}

impl ParseOptions {
    /// Default options: empty base style, lenient.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base style.
    pub fn base_style(mut self, style: Style) -> Self {
        self.base_style = style;
        self
    }

    /// Enable or disable strict parsing.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// The result of parsing markup.
///
/// Holds the root of the text tree and any warnings raised while
/// recovering from malformed input.
///
/// # Examples
///
/// ```
/// use minimessage::ParsedMarkup;
///
/// let parsed = ParsedMarkup::parse("<red>Hello</red> <foo>").unwrap();
/// assert_eq!(parsed.text(), "Hello <foo>");
/// assert!(parsed.warnings().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedMarkup {
    root: TextNode,
    warnings: Vec<ParseWarning>,
}

impl ParsedMarkup {
    /// Create a ParsedMarkup from a finished tree.
    pub fn new(root: TextNode, warnings: Vec<ParseWarning>) -> Self {
        Self { root, warnings }
    }

    /// Parse markup with default options.
    pub fn parse(input: &str) -> Result<Self, MarkupError> {
        crate::parser::parse(input)
    }

    /// Parse markup with the given options.
    pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Self, MarkupError> {
        crate::parser::parse_with(input, options)
    }

    /// The root node.
    pub fn root(&self) -> &TextNode {
        &self.root
    }

    /// Take the root node.
    pub fn into_root(self) -> TextNode {
        self.root
    }

    /// Warnings collected while parsing.
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// All text with styling dropped.
    pub fn text(&self) -> String {
        self.root.plain_text()
    }

    /// Leaf nodes in document order.
    pub fn leaves(&self) -> Vec<&TextNode> {
        self.root.leaves()
    }
}
