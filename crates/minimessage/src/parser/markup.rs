//! Main markup parser.
//!
//! Drives the lexer, keeps the style stack, and assembles the output tree.

use crate::error::{MarkupError, ParseWarning};
use crate::gradient::{Gradient, GradientItem};
use crate::markup::{ParseOptions, ParsedMarkup};
use crate::node::TextNode;
use crate::style::Style;

use super::lexer::{Lexer, Token};
use super::stack::{Frame, StyleStack};
use super::tag::{Tag, TagKind};

/// Parses markup with default options.
///
/// # Examples
///
/// ```
/// use minimessage::parser::parse;
///
/// let parsed = parse("<bold>Hello</bold> World").unwrap();
/// assert_eq!(parsed.text(), "Hello World");
/// assert_eq!(parsed.root().children.len(), 2);
/// ```
pub fn parse(input: &str) -> Result<ParsedMarkup, MarkupError> {
    parse_with(input, &ParseOptions::default())
}

/// Parses markup with the given options.
pub fn parse_with(input: &str, options: &ParseOptions) -> Result<ParsedMarkup, MarkupError> {
    let mut parser = Parser::new(options);
    for token in Lexer::new(input) {
        parser.process_token(token)?;
    }

    Ok(parser.finish())
}

/// Content collected while a gradient is open.
struct GradientSink {
    gradient: Gradient,
    /// Style underneath the gradient colors.
    style: Style,
    items: Vec<GradientItem>,
}

impl GradientSink {
    fn push_run(&mut self, text: &str, style: Style) {
        match self.items.last_mut() {
            Some(GradientItem::Run(prev, prev_style)) if *prev_style == style => {
                prev.push_str(text);
            }
            _ => self.items.push(GradientItem::Run(text.to_string(), style)),
        }
    }
}

/// The main parser state.
struct Parser<'o> {
    options: &'o ParseOptions,
    stack: StyleStack,
    /// Top-level output nodes.
    output: Vec<TextNode>,
    /// Open gradients, innermost last.
    gradients: Vec<GradientSink>,
    warnings: Vec<ParseWarning>,
}

impl<'o> Parser<'o> {
    fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            stack: StyleStack::new(options.base_style.clone()),
            output: Vec::new(),
            gradients: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Process a single token.
    fn process_token(&mut self, token: Token<'_>) -> Result<(), MarkupError> {
        match token {
            Token::Text(text) => self.push_text(text),
            Token::OpenTag { name, args, raw } => match Tag::resolve(name, args)? {
                Some(tag) => self.open_tag(tag),
                None => {
                    log::debug!("unrecognized tag {} kept as text", raw);
                    self.push_text(raw);
                }
            },
            Token::CloseTag {
                name,
                raw,
                position,
            } => self.close_tag(name, raw, position)?,
            Token::Unterminated { raw, position } => {
                self.warn(ParseWarning::UnterminatedTag(position))?;
                self.push_text(raw);
            }
        }
        Ok(())
    }

    /// Attach text to the style currently in effect.
    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        let style = self.stack.current().clone();
        match self.gradients.last_mut() {
            Some(sink) => sink.push_run(text, style),
            None => match self.output.last_mut() {
                Some(last) if last.is_leaf() && last.style == style => {
                    last.content.push_str(text);
                }
                _ => self.output.push(TextNode::leaf(text, style)),
            },
        }
    }

    /// Append a finished sub-tree.
    fn push_node(&mut self, node: TextNode) {
        match self.gradients.last_mut() {
            Some(sink) => sink.items.push(GradientItem::Node(node)),
            None => self.output.push(node),
        }
    }

    /// Process an opening tag.
    fn open_tag(&mut self, tag: Tag) {
        let kind = tag.kind();
        let style = tag.apply(self.stack.current());
        log::trace!("open {:?} at depth {}", kind, self.stack.depth());

        if let Tag::Gradient(gradient) = tag {
            self.gradients.push(GradientSink {
                gradient,
                style: style.clone(),
                items: Vec::new(),
            });
        }
        self.stack.push(kind, style);
    }

    /// Process a closing tag.
    fn close_tag(
        &mut self,
        name: Option<&str>,
        raw: &str,
        position: usize,
    ) -> Result<(), MarkupError> {
        let Some(name) = name else {
            // `</>` closes the innermost tag.
            return match self.stack.pop() {
                Ok(frame) => {
                    self.close_frame(frame);
                    Ok(())
                }
                Err(_) => self.warn(ParseWarning::UnmatchedClose {
                    name: String::new(),
                    position,
                }),
            };
        };

        let Some(kind) = TagKind::from_name(name) else {
            log::debug!("unrecognized close tag {} kept as text", raw);
            self.push_text(raw);
            return Ok(());
        };

        match self.stack.pops_to(kind) {
            Some(count) => {
                for _ in 0..count {
                    if let Ok(frame) = self.stack.pop() {
                        self.close_frame(frame);
                    }
                }
                Ok(())
            }
            None => self.warn(ParseWarning::UnmatchedClose {
                name: name.to_string(),
                position,
            }),
        }
    }

    /// Finish whatever a popped frame was collecting.
    fn close_frame(&mut self, frame: Frame) {
        log::trace!("close {:?} at depth {}", frame.kind, self.stack.depth());
        if frame.kind != Some(TagKind::Gradient) {
            return;
        }

        if let Some(sink) = self.gradients.pop() {
            let node = sink.gradient.expand(sink.items, &sink.style);
            if !node.is_empty() {
                self.push_node(node);
            }
        }
    }

    /// Record a recoverable problem, or fail in strict mode.
    fn warn(&mut self, warning: ParseWarning) -> Result<(), MarkupError> {
        log::warn!("{}", warning);
        if self.options.strict {
            return Err(warning.into());
        }
        self.warnings.push(warning);
        Ok(())
    }

    /// Close any remaining open tags and build the result.
    fn finish(mut self) -> ParsedMarkup {
        while let Ok(frame) = self.stack.pop() {
            self.close_frame(frame);
        }

        let root = TextNode::composite(Style::default(), self.output);
        ParsedMarkup::new(root, self.warnings)
    }
}
