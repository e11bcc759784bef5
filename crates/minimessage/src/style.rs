//! Style types for markup.
//!
//! A [`Style`] combines an optional color with tri-state text decorations.
//! `None` always means "inherit from the enclosing style", never "off".

use crate::color::Color;

/// A boolean text decoration that a tag can toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decoration {
    Bold,
    Italic,
    Underlined,
    Strikethrough,
    Obfuscated,
}

impl Decoration {
    /// All decorations, in a stable order.
    pub const ALL: [Decoration; 5] = [
        Decoration::Bold,
        Decoration::Italic,
        Decoration::Underlined,
        Decoration::Strikethrough,
        Decoration::Obfuscated,
    ];

    /// Look up a decoration by tag name or alias.
    ///
    /// Tag names are case-sensitive.
    pub fn from_tag_name(name: &str) -> Option<Self> {
        match name {
            "bold" | "b" => Some(Decoration::Bold),
            "italic" | "i" | "em" => Some(Decoration::Italic),
            "underlined" | "underline" | "u" => Some(Decoration::Underlined),
            "strikethrough" | "st" => Some(Decoration::Strikethrough),
            "obfuscated" | "obfuscate" | "obf" => Some(Decoration::Obfuscated),
            _ => None,
        }
    }

    /// The canonical tag name.
    pub fn tag_name(&self) -> &'static str {
        match self {
            Decoration::Bold => "bold",
            Decoration::Italic => "italic",
            Decoration::Underlined => "underlined",
            Decoration::Strikethrough => "strikethrough",
            Decoration::Obfuscated => "obfuscated",
        }
    }
}

/// Tri-state text decorations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextStyle {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underlined: Option<bool>,
    pub strikethrough: Option<bool>,
    pub obfuscated: Option<bool>,
}

impl TextStyle {
    /// Returns true if every decoration is unset.
    pub fn is_empty(&self) -> bool {
        Decoration::ALL.iter().all(|d| self.get(*d).is_none())
    }

    /// The state of a single decoration.
    pub fn get(&self, decoration: Decoration) -> Option<bool> {
        match decoration {
            Decoration::Bold => self.bold,
            Decoration::Italic => self.italic,
            Decoration::Underlined => self.underlined,
            Decoration::Strikethrough => self.strikethrough,
            Decoration::Obfuscated => self.obfuscated,
        }
    }

    fn slot(&mut self, decoration: Decoration) -> &mut Option<bool> {
        match decoration {
            Decoration::Bold => &mut self.bold,
            Decoration::Italic => &mut self.italic,
            Decoration::Underlined => &mut self.underlined,
            Decoration::Strikethrough => &mut self.strikethrough,
            Decoration::Obfuscated => &mut self.obfuscated,
        }
    }

    /// Merge another TextStyle on top of this one.
    ///
    /// Set values in `other` win; unset values inherit from `self`.
    pub fn apply(&self, other: &TextStyle) -> TextStyle {
        TextStyle {
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            underlined: other.underlined.or(self.underlined),
            strikethrough: other.strikethrough.or(self.strikethrough),
            obfuscated: other.obfuscated.or(self.obfuscated),
        }
    }
}

/// Complete style: color plus decorations.
///
/// Styles are values. Deriving a new style never touches the one it was
/// derived from, so a style attached to an emitted node stays fixed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// Text color; `None` inherits.
    pub color: Option<Color>,
    /// Decorations.
    pub text: TextStyle,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no style properties are set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.text.is_empty()
    }

    /// A copy of this style with the color replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use minimessage::{Color, Style};
    ///
    /// let base = Style::new();
    /// let red = base.with_color(Color::parse("red").unwrap());
    /// assert!(base.color.is_none());
    /// assert!(red.color.is_some());
    /// ```
    pub fn with_color(&self, color: Color) -> Style {
        Style {
            color: Some(color),
            text: self.text.clone(),
        }
    }

    /// A copy of this style with one decoration set.
    pub fn with_decoration(&self, decoration: Decoration, value: bool) -> Style {
        let mut style = self.clone();
        *style.text.slot(decoration) = Some(value);
        style
    }

    /// The state of a single decoration.
    pub fn decoration(&self, decoration: Decoration) -> Option<bool> {
        self.text.get(decoration)
    }

    /// Apply another style on top of this one.
    ///
    /// Set values in `other` override values in `self`.
    pub fn apply(&self, other: &Style) -> Style {
        Style {
            color: other.color.or(self.color),
            text: self.text.apply(&other.text),
        }
    }
}
