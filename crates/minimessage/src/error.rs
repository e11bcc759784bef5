//! Error types for markup parsing.

use thiserror::Error;

/// Errors that abort a markup parse.
///
/// Only tags that are well-formed but carry an unusable argument end up
/// here. Everything else is recovered locally and, at most, reported as a
/// [`ParseWarning`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarkupError {
    /// A color argument (or bare color tag) could not be resolved.
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorParseError),

    /// A color tag without a color argument, e.g. `<color>`.
    #[error("tag <{0}> requires a color argument")]
    MissingColor(String),

    /// A gradient with fewer than two color stops.
    #[error("gradient requires at least 2 color stops, found {found}")]
    GradientStops { found: usize },

    /// A decoration argument other than `true` or `false`.
    #[error("invalid value for <{tag}>: {value}")]
    InvalidFlag { tag: String, value: String },

    /// A warning promoted to an error by strict parsing.
    #[error(transparent)]
    Strict(#[from] ParseWarning),
}

/// Recoverable conditions noticed while parsing.
///
/// The parser keeps going after each of these; they are collected on the
/// [`ParsedMarkup`](crate::ParsedMarkup) result.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseWarning {
    /// A `<` with no closing `>` before end of input.
    #[error("unterminated tag starting at position {0}")]
    UnterminatedTag(usize),

    /// A closing tag with no matching open tag.
    #[error("unmatched close tag </{name}> at position {position}")]
    UnmatchedClose { name: String, position: usize },
}

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}
