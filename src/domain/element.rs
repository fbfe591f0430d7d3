//! Immutable element tree: the artifact produced by the builder.

use std::fmt;

use termtree::Tree;

use crate::domain::builder::ElementBuilder;
use crate::domain::error::{DomainError, TreeResult};

/// Number of spaces per nesting level in rendered output.
pub const INDENT_WIDTH: usize = 2;

/// Characters that would corrupt the rendered tag lines if they
/// appeared inside an element name.
const MARKUP_CHARS: &[char] = &['<', '>', '&', '/', '"', '\''];

/// Validates a tag name for use as an element name.
///
/// Names must be non-empty and free of whitespace and markup characters,
/// otherwise the rendered open/close tags would be malformed.
pub(crate) fn validate_name(name: &str) -> TreeResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::EmptyName);
    }
    if name.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidName {
            name: name.to_string(),
            reason: "contains whitespace".to_string(),
        });
    }
    if name.contains(MARKUP_CHARS) {
        return Err(DomainError::InvalidName {
            name: name.to_string(),
            reason: "contains markup characters".to_string(),
        });
    }
    Ok(())
}

/// Escapes a text payload for inclusion in rendered output.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// A named tree element with optional text and an ordered list of children.
///
/// Elements are immutable once built and exclusively own their children.
/// There is no public constructor: all construction goes through
/// [`ElementBuilder`], either directly or via [`Element::builder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Entry point hinting that elements are built, not constructed.
    pub fn builder(root_name: impl Into<String>) -> TreeResult<ElementBuilder> {
        ElementBuilder::new(root_name)
    }

    pub(crate) fn from_parts(name: String, text: String, children: Vec<Element>) -> Self {
        Self {
            name,
            text,
            children,
        }
    }

    pub(crate) fn into_parts(self) -> (String, String, Vec<Element>) {
        (self.name, self.text, self.children)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text payload. Empty means "no text".
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Renders the element tree as indented tag lines.
    ///
    /// Emits `<name>` at the element's level, the text payload (if
    /// non-empty) one level deeper, the children in insertion order one
    /// level deeper, then `</name>` back at the element's level. Every
    /// line is newline-terminated and indented by [`INDENT_WIDTH`] spaces
    /// per level. Rendering is deterministic and has no side effects.
    pub fn render(&self) -> String {
        self.render_indented(0)
    }

    /// Renders with the whole tree shifted right by `indent` levels.
    pub fn render_indented(&self, indent: usize) -> String {
        let mut out = String::new();
        self.render_into(&mut out, indent);
        out
    }

    fn render_into(&self, out: &mut String, level: usize) {
        let pad = " ".repeat(level * INDENT_WIDTH);
        out.push_str(&pad);
        out.push('<');
        out.push_str(&self.name);
        out.push_str(">\n");

        if !self.text.is_empty() {
            out.push_str(&" ".repeat((level + 1) * INDENT_WIDTH));
            out.push_str(&escape_text(&self.text));
            out.push('\n');
        }
        for child in &self.children {
            child.render_into(out, level + 1);
        }

        out.push_str(&pad);
        out.push_str("</");
        out.push_str(&self.name);
        out.push_str(">\n");
    }

    /// Depth of the tree rooted at this element. A lone element has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Element::depth)
            .max()
            .unwrap_or(0)
    }

    /// Root-to-leaf name paths, in child insertion order.
    pub fn branches(&self) -> Vec<Vec<String>> {
        let mut branches = Vec::new();
        let mut path = Vec::new();
        self.collect_branches(&mut path, &mut branches);
        branches
    }

    fn collect_branches(&self, path: &mut Vec<String>, branches: &mut Vec<Vec<String>>) {
        path.push(self.name.clone());
        if self.children.is_empty() {
            branches.push(path.clone());
        } else {
            for child in &self.children {
                child.collect_branches(path, branches);
            }
        }
        path.pop();
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Compact terminal tree view, as an alternative to the full tag rendering.
pub trait TreeDisplay {
    fn to_tree(&self) -> Tree<String>;
}

impl TreeDisplay for Element {
    fn to_tree(&self) -> Tree<String> {
        let mut leaves: Vec<Tree<String>> = Vec::new();
        if !self.text.is_empty() {
            leaves.push(Tree::new(format!("{:?}", self.text)));
        }
        leaves.extend(self.children.iter().map(TreeDisplay::to_tree));
        Tree::new(self.name.clone()).with_leaves(leaves)
    }
}
