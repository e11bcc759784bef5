//! MiniMessage-style markup parser for styled chat text.
//!
//! This crate parses inline angle-bracket markup like
//! `<bold>Hello</bold> <gradient:gold:red>World` into a tree of styled text
//! nodes.
//!
//! # Overview
//!
//! - `<color:red>`, `<colour:red>`, `<c:red>` - Set the text color
//! - `<red>`, `<#ff5555>` - Bare color shorthand
//! - `<gradient:white:gold:red>` - Color each character along a gradient
//! - `<bold>`/`<b>`, `<italic>`/`<i>`/`<em>`, `<underlined>`/`<u>`,
//!   `<strikethrough>`/`<st>`, `<obfuscated>`/`<obf>` - Decorations
//! - `<!bold>`, `<bold:false>` - Explicitly turn a decoration off
//! - `</bold>` - Close the innermost matching tag, `</>` - close the innermost tag
//!
//! Unknown tags are kept verbatim as text, so `<hover:show_text:hi>` comes
//! out as literal text rather than failing. Only a recognized tag with an
//! unusable color argument makes the whole parse fail.
//!
//! # Usage
//!
//! ```
//! use minimessage::{Color, parse};
//!
//! let root = parse("<red>Hi</red> there").unwrap();
//! assert_eq!(root.plain_text(), "Hi there");
//! assert_eq!(root.children[0].style.color, Some(Color::parse("red").unwrap()));
//! ```

pub mod color;
pub mod error;
pub mod gradient;
pub mod markup;
pub mod node;
pub mod parser;
pub mod style;

// Re-export main types at crate root
pub use color::{Color, NamedColor};
pub use error::{ColorParseError, MarkupError, ParseWarning};
pub use gradient::{Gradient, lerp_color};
pub use markup::{ParseOptions, ParsedMarkup};
pub use node::TextNode;
pub use style::{Decoration, Style, TextStyle};

/// Parse markup into a tree, discarding warnings.
///
/// Use [`ParsedMarkup::parse`] to inspect warnings, or
/// [`ParsedMarkup::parse_with`] to pass [`ParseOptions`].
pub fn parse(input: &str) -> Result<TextNode, MarkupError> {
    parser::parse(input).map(ParsedMarkup::into_root)
}
