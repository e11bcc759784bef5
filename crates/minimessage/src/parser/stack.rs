//! The per-parse style stack.

use crate::style::Style;

use super::tag::TagKind;

/// An entry on the style stack.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// The tag family that opened this frame; `None` for the seed.
    pub kind: Option<TagKind>,
    /// Style for content inside this frame.
    pub style: Style,
}

/// Stack of active styles.
///
/// Seeded with a base frame that can never be popped, so the stack is
/// never empty and a stray close tag cannot unwind past the base style.
#[derive(Clone, Debug)]
pub struct StyleStack {
    frames: Vec<Frame>,
}

/// Returned when popping would remove the seed frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackUnderflow;

impl StyleStack {
    /// Create a stack seeded with `base`.
    pub fn new(base: Style) -> Self {
        Self {
            frames: vec![Frame {
                kind: None,
                style: base,
            }],
        }
    }

    /// The style currently in effect.
    pub fn current(&self) -> &Style {
        // The seed frame is never popped.
        &self.frames[self.frames.len() - 1].style
    }

    /// Push a frame for a newly opened tag.
    pub fn push(&mut self, kind: TagKind, style: Style) {
        self.frames.push(Frame {
            kind: Some(kind),
            style,
        });
    }

    /// Pop the innermost opened frame.
    pub fn pop(&mut self) -> Result<Frame, StackUnderflow> {
        if self.frames.len() <= 1 {
            return Err(StackUnderflow);
        }
        self.frames.pop().ok_or(StackUnderflow)
    }

    /// Number of frames opened by tags (the seed is not counted).
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    /// Number of frames above the innermost frame of `kind`, counting that
    /// frame itself. `None` if no open frame has that kind.
    pub fn pops_to(&self, kind: TagKind) -> Option<usize> {
        self.frames
            .iter()
            .rev()
            .take(self.depth())
            .position(|frame| frame.kind == Some(kind))
            .map(|index| index + 1)
    }
}
