//! Lexer for markup.
//!
//! Converts input text into a stream of tokens in a single left-to-right
//! pass. A tag runs from `<` to the next `>`. If another `<` shows up
//! first, the earlier `<` was plain text and scanning restarts there, so
//! stray angle brackets in prose survive as text.
//!
//! Known limitation: there is no escape syntax. Plain text that happens to
//! look like a recognized tag (`a <b> c`) is treated as that tag.

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Plain text content.
    Text(&'a str),
    /// Opening tag: `<name>` or `<name:args>`.
    OpenTag {
        /// Everything before the first `:`.
        name: &'a str,
        /// Everything after the first `:`, still colon-joined.
        args: Option<&'a str>,
        /// The full tag including brackets.
        raw: &'a str,
    },
    /// Closing tag: `None` for `</>`, `Some("bold")` for `</bold>`.
    ///
    /// Arguments on a closing tag (`</color:red>`) are ignored.
    CloseTag {
        name: Option<&'a str>,
        raw: &'a str,
        position: usize,
    },
    /// A `<` that was never closed. `raw` runs to end of input.
    Unterminated { raw: &'a str, position: usize },
}

/// Lexer for markup text.
///
/// # Examples
///
/// ```
/// use minimessage::parser::Lexer;
///
/// let lexer = Lexer::new("<bold>Hello</bold>");
/// let tokens: Vec<_> = lexer.collect();
/// assert_eq!(tokens.len(), 3);
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consume text up to the next `<` or end of input.
    fn consume_text(&mut self) -> &'a str {
        let start = self.pos;
        let len = self.remaining().find('<').unwrap_or(self.remaining().len());
        self.pos += len;
        &self.input[start..self.pos]
    }

    /// Consume a tag starting at the current `<`.
    fn consume_tag(&mut self) -> Token<'a> {
        let tag_start = self.pos;
        let after = &self.input[tag_start + 1..];

        match after.find(['<', '>']) {
            None => {
                self.pos = self.input.len();
                Token::Unterminated {
                    raw: &self.input[tag_start..],
                    position: tag_start,
                }
            }
            Some(offset) if after.as_bytes()[offset] == b'<' => {
                // `<` inside a tag body: everything so far is text.
                self.pos = tag_start + 1 + offset;
                Token::Text(&self.input[tag_start..self.pos])
            }
            Some(offset) => {
                let body = &after[..offset];
                self.pos = tag_start + 1 + offset + 1;
                let raw = &self.input[tag_start..self.pos];
                Self::classify(body, raw, tag_start)
            }
        }
    }

    fn classify(body: &'a str, raw: &'a str, position: usize) -> Token<'a> {
        if body.is_empty() {
            return Token::Text(raw);
        }

        if let Some(rest) = body.strip_prefix('/') {
            let name = rest.split(':').next().unwrap_or(rest);
            return Token::CloseTag {
                name: (!name.is_empty()).then_some(name),
                raw,
                position,
            };
        }

        match body.split_once(':') {
            Some((name, args)) => Token::OpenTag {
                name,
                args: Some(args),
                raw,
            },
            None => Token::OpenTag {
                name: body,
                args: None,
                raw,
            },
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        if self.remaining().starts_with('<') {
            Some(self.consume_tag())
        } else {
            Some(Token::Text(self.consume_text()))
        }
    }
}
