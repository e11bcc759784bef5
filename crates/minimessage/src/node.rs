//! Text component tree produced by the parser.

use crate::style::Style;

/// A node in a styled text tree.
///
/// Each node has its own content, a fully resolved style, and an ordered
/// list of children. The parser produces one root node (empty content)
/// whose children are text leaves and gradient sub-trees in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextNode {
    /// Text carried by this node itself.
    pub content: String,
    /// Style of this node's content.
    pub style: Style,
    /// Child nodes, in document order.
    pub children: Vec<TextNode>,
}

impl TextNode {
    /// Create a leaf node.
    pub fn leaf(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
            children: Vec::new(),
        }
    }

    /// Create a node with no content of its own.
    pub fn composite(style: Style, children: Vec<TextNode>) -> Self {
        Self {
            content: String::new(),
            style,
            children,
        }
    }

    /// Append a child.
    pub fn push(&mut self, child: TextNode) {
        self.children.push(child);
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns true if neither this node nor any descendant carries text.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.children.iter().all(TextNode::is_empty)
    }

    /// All text in the tree, in document order, with styling dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use minimessage::parse;
    ///
    /// let root = parse("<bold>Hello</bold> <gradient:red:blue>World").unwrap();
    /// assert_eq!(root.plain_text(), "Hello World");
    /// ```
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        out.push_str(&self.content);
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Leaf nodes below this one, depth-first in document order.
    pub fn leaves(&self) -> Vec<&TextNode> {
        let mut out = Vec::new();
        for child in &self.children {
            child.collect_leaves(&mut out);
        }
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a TextNode>) {
        if self.is_leaf() {
            out.push(self);
        } else {
            for child in &self.children {
                child.collect_leaves(out);
            }
        }
    }
}
