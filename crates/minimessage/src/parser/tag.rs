//! Tag resolution.
//!
//! Maps a tag name and its arguments to the effect it has on the style.
//! Tag names are case-sensitive; see [`Decoration::from_tag_name`] for the
//! decoration aliases.

use crate::color::{Color, NamedColor};
use crate::error::MarkupError;
use crate::gradient::Gradient;
use crate::style::{Decoration, Style};

/// What an opening tag does.
#[derive(Clone, Debug, PartialEq)]
pub enum Tag {
    /// `<color:red>`, `<c:#ff0000>`, or the bare `<red>` / `<#ff0000>`.
    Color(Color),
    /// `<gradient:red:blue>`.
    Gradient(Gradient),
    /// `<bold>`, `<!bold>`, `<bold:false>`, ...
    Decoration(Decoration, bool),
}

/// The family a tag belongs to, used to match closing tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKind {
    Color,
    Gradient,
    Decoration(Decoration),
}

impl Tag {
    /// Resolve an opening tag.
    ///
    /// Returns `Ok(None)` for names that mean nothing here; the caller
    /// keeps those as literal text. Errors are reserved for recognized tags
    /// whose arguments are unusable.
    ///
    /// # Examples
    ///
    /// ```
    /// use minimessage::parser::Tag;
    ///
    /// assert!(matches!(Tag::resolve("b", None), Ok(Some(Tag::Decoration(_, true)))));
    /// assert!(matches!(Tag::resolve("c", Some("gold")), Ok(Some(Tag::Color(_)))));
    /// assert_eq!(Tag::resolve("hover", Some("show_text")), Ok(None));
    /// assert!(Tag::resolve("#zzzzzz", None).is_err());
    /// ```
    pub fn resolve(name: &str, args: Option<&str>) -> Result<Option<Tag>, MarkupError> {
        let (negated, base) = match name.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, name),
        };

        if let Some(decoration) = Decoration::from_tag_name(base) {
            let value = match args {
                None | Some("true") => !negated,
                Some("false") => negated,
                Some(other) => {
                    return Err(MarkupError::InvalidFlag {
                        tag: name.to_string(),
                        value: other.to_string(),
                    });
                }
            };
            return Ok(Some(Tag::Decoration(decoration, value)));
        }

        if negated {
            return Ok(None);
        }

        match name {
            "color" | "colour" | "c" => {
                let token = split_args(args)
                    .first()
                    .copied()
                    .filter(|token| !token.is_empty())
                    .ok_or_else(|| MarkupError::MissingColor(name.to_string()))?;
                Ok(Some(Tag::Color(Color::parse(token)?)))
            }
            "gradient" => {
                let stops = split_args(args)
                    .into_iter()
                    .map(Color::parse)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Some(Tag::Gradient(Gradient::new(stops)?)))
            }
            _ if name.starts_with('#') => Ok(Some(Tag::Color(Color::from_hex(name)?))),
            _ => Ok(Color::from_name(name).ok().map(Tag::Color)),
        }
    }

    /// The family this tag belongs to.
    pub fn kind(&self) -> TagKind {
        match self {
            Tag::Color(_) => TagKind::Color,
            Tag::Gradient(_) => TagKind::Gradient,
            Tag::Decoration(decoration, _) => TagKind::Decoration(*decoration),
        }
    }

    /// Derive the style for content inside this tag.
    ///
    /// Gradients leave the style alone; their color is applied per
    /// character when the gradient is closed.
    pub fn apply(&self, style: &Style) -> Style {
        match self {
            Tag::Color(color) => style.with_color(*color),
            Tag::Gradient(_) => style.clone(),
            Tag::Decoration(decoration, value) => style.with_decoration(*decoration, *value),
        }
    }
}

impl TagKind {
    /// The family named by a closing tag, if any.
    pub fn from_name(name: &str) -> Option<TagKind> {
        let name = name.strip_prefix('!').unwrap_or(name);

        if let Some(decoration) = Decoration::from_tag_name(name) {
            return Some(TagKind::Decoration(decoration));
        }

        match name {
            "color" | "colour" | "c" => Some(TagKind::Color),
            "gradient" => Some(TagKind::Gradient),
            _ if name.starts_with('#') || NamedColor::is_known(name) => Some(TagKind::Color),
            _ => None,
        }
    }
}

/// Split colon-joined tag arguments.
pub fn split_args(args: Option<&str>) -> Vec<&str> {
    match args {
        Some(args) => args.split(':').collect(),
        None => Vec::new(),
    }
}
