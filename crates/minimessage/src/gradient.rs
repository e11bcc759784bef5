//! Multi-stop color gradients.
//!
//! A gradient colors each character of a span individually. Character `i`
//! of `n` sits at position `i / n`, so the last character stops one step
//! short of the final color stop.

use unicode_segmentation::UnicodeSegmentation;

use crate::color::Color;
use crate::error::MarkupError;
use crate::node::TextNode;
use crate::style::Style;

/// Linearly interpolate across color stops.
///
/// `t` is clamped to `0.0..=1.0` (NaN counts as `0.0`). It is scaled by
/// the number of segments; the integer part picks the segment and the
/// fractional part is the weight given to the segment's later stop.
///
/// Returns `None` for an empty stop list. A single stop is returned as-is.
///
/// # Examples
///
/// ```
/// use minimessage::{Color, lerp_color};
///
/// let black = Color::from_rgb8(0, 0, 0);
/// let white = Color::from_rgb8(255, 255, 255);
/// assert_eq!(lerp_color(0.5, &[black, white]), Some(Color::new(0.5, 0.5, 0.5)));
/// ```
pub fn lerp_color(t: f64, stops: &[Color]) -> Option<Color> {
    let (first, last) = (stops.first()?, stops.last()?);
    if stops.len() == 1 {
        return Some(*first);
    }

    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    if t == 1.0 {
        return Some(*last);
    }

    let scaled = t * (stops.len() - 1) as f64;
    let index = scaled.floor() as usize;
    let weight = scaled - scaled.floor();

    let from = stops.get(index)?;
    let to = stops.get(index + 1)?;

    Some(Color::new(
        lerp_channel(weight, to.r, from.r),
        lerp_channel(weight, to.g, from.g),
        lerp_channel(weight, to.b, from.b),
    ))
}

fn lerp_channel(t: f64, next: f64, last: f64) -> f64 {
    next * t + last * (1.0 - t)
}

/// A validated gradient with at least two stops.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    stops: Vec<Color>,
}

/// A piece of gradient content waiting for expansion.
#[derive(Clone, Debug)]
pub(crate) enum GradientItem {
    /// Text to be colored, with the style it was written in.
    Run(String, Style),
    /// An already-built node (e.g. a nested gradient), kept as-is.
    Node(TextNode),
}

impl Gradient {
    /// Create a gradient from its color stops.
    pub fn new(stops: Vec<Color>) -> Result<Self, MarkupError> {
        if stops.len() < 2 {
            return Err(MarkupError::GradientStops { found: stops.len() });
        }
        Ok(Self { stops })
    }

    /// The color stops, in order.
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// The interpolated color at position `t`.
    pub fn at(&self, t: f64) -> Color {
        lerp_color(t, &self.stops).unwrap_or(self.stops[0])
    }

    /// The color for character `index` of `len`, snapped to 8 bits per
    /// channel.
    pub fn color_at(&self, index: usize, len: usize) -> Color {
        self.at(index as f64 / len as f64).quantize()
    }

    /// Color `content` character by character.
    ///
    /// Returns a node with no content of its own, carrying `style`, with
    /// one leaf per character. Each leaf gets `style` with its color
    /// replaced by the gradient color.
    ///
    /// # Examples
    ///
    /// ```
    /// use minimessage::{Color, Gradient, Style};
    ///
    /// let gradient = Gradient::new(vec![
    ///     Color::parse("white").unwrap(),
    ///     Color::parse("black").unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// let node = gradient.apply("Foo", &Style::new());
    /// assert_eq!(node.children.len(), 3);
    /// assert_eq!(node.children[0].style.color.unwrap().to_hex(), "#ffffff");
    /// ```
    pub fn apply(&self, content: &str, style: &Style) -> TextNode {
        self.expand(vec![GradientItem::Run(content.to_string(), style.clone())], style)
    }

    /// Expand collected content into a gradient sub-tree.
    ///
    /// Positions are counted across every run, so styled pieces inside the
    /// gradient continue the same color ramp.
    pub(crate) fn expand(&self, items: Vec<GradientItem>, style: &Style) -> TextNode {
        let total: usize = items
            .iter()
            .map(|item| match item {
                GradientItem::Run(text, _) => text.graphemes(true).count(),
                GradientItem::Node(_) => 0,
            })
            .sum();

        let mut children = Vec::with_capacity(total);
        let mut index = 0;

        for item in items {
            match item {
                GradientItem::Run(text, run_style) => {
                    for grapheme in text.graphemes(true) {
                        let color = self.color_at(index, total);
                        children.push(TextNode::leaf(grapheme, run_style.with_color(color)));
                        index += 1;
                    }
                }
                GradientItem::Node(node) => children.push(node),
            }
        }

        TextNode::composite(style.clone(), children)
    }
}
