//! Staged construction of element trees.

use std::collections::HashMap;

use generational_arena::Index;
use tracing::{debug, trace};

use crate::domain::arena::{ElementArena, NodeData};
use crate::domain::element::{validate_name, Element};
use crate::domain::error::{DomainError, TreeResult};

/// Fluent builder that stages an element tree and materializes it on demand.
///
/// The builder owns a private, mutable staging arena; the only way to obtain
/// an [`Element`] is through [`build`](Self::build). Building copies the
/// staged state, so the builder stays usable afterwards and previously
/// built elements are never affected by later mutation.
///
/// Exactly one root per builder; the root name is fixed at construction.
pub struct ElementBuilder {
    arena: ElementArena,
    root: Index,
}

impl ElementBuilder {
    /// Creates a builder whose root element has the given name and no text.
    ///
    /// Fails if the name is empty or contains characters that would
    /// corrupt the rendered tag lines.
    pub fn new(root_name: impl Into<String>) -> TreeResult<Self> {
        let root_name = root_name.into();
        validate_name(&root_name)?;
        let mut arena = ElementArena::new();
        let root = arena.insert_node(
            NodeData {
                name: root_name,
                text: String::new(),
            },
            None,
        );
        Ok(Self { arena, root })
    }

    /// Appends a child element to the root, preserving insertion order.
    ///
    /// Returns the builder so calls can be chained; a chained sequence and
    /// the same calls as separate statements stage identical trees.
    pub fn add_child(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Self {
        let data = NodeData {
            name: name.into(),
            text: text.into(),
        };
        trace!(name = %data.name, "staging child");
        self.arena.insert_node(data, Some(self.root));
        self
    }

    /// Grafts an already built element under the root as its last child.
    ///
    /// The subtree keeps its internal structure; its nodes are re-staged
    /// iteratively so deep trees do not recurse.
    pub fn add_subtree(&mut self, subtree: Element) -> &mut Self {
        let mut stack = vec![(subtree, self.root)];
        while let Some((element, parent_idx)) = stack.pop() {
            let (name, text, children) = element.into_parts();
            trace!(name = %name, "staging subtree node");
            let idx = self.arena.insert_node(NodeData { name, text }, Some(parent_idx));
            for child in children.into_iter().rev() {
                stack.push((child, idx));
            }
        }
        self
    }

    /// Number of direct children currently staged under the root.
    pub fn child_count(&self) -> usize {
        self.arena
            .get_node(self.root)
            .map_or(0, |node| node.children.len())
    }

    /// Materializes the staged tree into an immutable [`Element`].
    ///
    /// Copy semantics: the staged state is read, not consumed, and the
    /// builder accepts further mutation afterwards without affecting the
    /// returned element.
    pub fn build(&self) -> TreeResult<Element> {
        debug!(nodes = self.arena.len(), "materializing element tree");

        // Post-order guarantees children are materialized before their parent.
        let mut built: HashMap<Index, Element> = HashMap::new();
        for (idx, node) in self.arena.iter_postorder() {
            let mut children = Vec::with_capacity(node.children.len());
            for child_idx in &node.children {
                let child = built.remove(child_idx).ok_or_else(|| {
                    DomainError::Internal(
                        "staged child missing during materialization".to_string(),
                    )
                })?;
                children.push(child);
            }
            built.insert(
                idx,
                Element::from_parts(node.data.name.clone(), node.data.text.clone(), children),
            );
        }

        built.remove(&self.root).ok_or_else(|| {
            DomainError::Internal("staged root missing during materialization".to_string())
        })
    }

    /// Convenience for [`build`](Self::build) followed by [`Element::render`].
    pub fn render(&self) -> TreeResult<String> {
        Ok(self.build()?.render())
    }
}
