//! Arena-backed staging storage for in-progress element trees.

use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

/// Data payload staged for one element.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Tag name of the element
    pub name: String,
    /// Text payload, empty means none
    pub text: String,
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Staged node with parent/child wiring.
#[derive(Debug)]
pub struct StagedNode {
    /// Element data for this node
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes, in insertion order
    pub children: Vec<Index>,
}

/// Arena-based tree structure for the builder's mutable staging state.
///
/// Uses a generational arena for memory-safe node references and O(1)
/// lookups while the tree is under construction. The builder is the sole
/// production consumer; the public artifact type never exposes indices.
#[derive(Debug)]
pub struct ElementArena {
    /// Arena storage for all staged nodes
    arena: Arena<StagedNode>,
    /// Index of the root node, None while empty
    root: Option<Index>,
}

impl Default for ElementArena {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let node = StagedNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&StagedNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Number of staged nodes, root included.
    #[instrument(level = "trace", skip(self))]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order traversal, children left to right.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> PreOrderIter {
        PreOrderIter::new(self)
    }

    /// Post-order traversal, leaves before their parents.
    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self) -> PostOrderIter {
        PostOrderIter::new(self)
    }
}

pub struct PreOrderIter<'a> {
    arena: &'a ElementArena,
    stack: Vec<Index>,
}

impl<'a> PreOrderIter<'a> {
    fn new(arena: &'a ElementArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = (Index, &'a StagedNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIter<'a> {
    arena: &'a ElementArena,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIter<'a> {
    fn new(arena: &'a ElementArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push((root, false));
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = (Index, &'a StagedNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(name: &str) -> NodeData {
        NodeData {
            name: name.to_string(),
            text: String::new(),
        }
    }

    #[test]
    fn insert_without_parent_sets_root() {
        let mut arena = ElementArena::new();
        assert!(arena.is_empty());

        let root = arena.insert_node(data("root"), None);

        assert_eq!(arena.root(), Some(root));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn insert_with_parent_appends_to_children_in_order() {
        let mut arena = ElementArena::new();
        let root = arena.insert_node(data("root"), None);
        let a = arena.insert_node(data("a"), Some(root));
        let b = arena.insert_node(data("b"), Some(root));

        let root_node = arena.get_node(root).unwrap();
        assert_eq!(root_node.children, vec![a, b]);
        assert_eq!(arena.get_node(a).unwrap().parent, Some(root));
        assert_eq!(arena.get_node(b).unwrap().parent, Some(root));
    }

    #[test]
    fn preorder_visits_parent_before_children_left_to_right() {
        let mut arena = ElementArena::new();
        let root = arena.insert_node(data("root"), None);
        let a = arena.insert_node(data("a"), Some(root));
        arena.insert_node(data("a1"), Some(a));
        arena.insert_node(data("b"), Some(root));

        let names: Vec<&str> = arena.iter().map(|(_, n)| n.data.name.as_str()).collect();
        assert_eq!(names, vec!["root", "a", "a1", "b"]);
    }

    #[test]
    fn postorder_visits_leaves_before_parents() {
        let mut arena = ElementArena::new();
        let root = arena.insert_node(data("root"), None);
        let a = arena.insert_node(data("a"), Some(root));
        arena.insert_node(data("a1"), Some(a));
        arena.insert_node(data("b"), Some(root));

        let names: Vec<&str> = arena
            .iter_postorder()
            .map(|(_, n)| n.data.name.as_str())
            .collect();
        assert_eq!(names, vec!["a1", "a", "b", "root"]);
    }

    #[test]
    fn node_data_displays_its_name() {
        assert_eq!(data("li").to_string(), "li");
    }
}
