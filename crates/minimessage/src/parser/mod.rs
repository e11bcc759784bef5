//! Parser for markup.
//!
//! This module contains the lexer, tag resolution, the style stack, and the
//! main markup parser.

mod lexer;
mod markup;
mod stack;
mod tag;

pub use lexer::{Lexer, Token};
pub use markup::{parse, parse_with};
pub use stack::{Frame, StackUnderflow, StyleStack};
pub use tag::{Tag, TagKind, split_args};
