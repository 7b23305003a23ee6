use std::io::{self, Write};

use generational_arena::Arena;
use tracing::{debug, instrument, warn};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{Node, NodeId, NodeKind};

/// Indentation character written once per depth level by [`TreeArena::display`].
pub const MARKER: char = '*';

/// Arena-based storage for leaves and composites.
///
/// The arena owns every node; composites refer to their children by [`NodeId`].
/// A node may be listed under several composites (or several times under one),
/// nothing checks for sharing or cycles. Traversals only terminate on acyclic
/// structures.
#[derive(Debug)]
pub struct TreeArena {
    arena: Arena<Node>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// Creates an unnamed leaf.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_leaf(&mut self) -> NodeId {
        NodeId(self.arena.insert(Node::leaf()))
    }

    /// Creates an unnamed composite with no children.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_composite(&mut self) -> NodeId {
        NodeId(self.arena.insert(Node::composite()))
    }

    pub fn leaf(&mut self, name: impl Into<String>) -> NodeId {
        let id = self.insert_leaf();
        self.rename(id, name);
        id
    }

    pub fn composite(&mut self, name: impl Into<String>) -> NodeId {
        let id = self.insert_composite();
        self.rename(id, name);
        id
    }

    // only for freshly inserted ids
    fn rename(&mut self, id: NodeId, name: impl Into<String>) {
        if let Some(node) = self.arena.get_mut(id.0) {
            node.set_name(name);
        }
    }

    /// Drops `id` from storage. Composites still listing it skip it from now on.
    #[instrument(level = "debug", skip(self))]
    pub fn discard(&mut self, id: NodeId) -> Option<Node> {
        self.arena.remove(id.0)
    }

    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id.0)
    }

    fn node(&self, id: NodeId) -> DomainResult<&Node> {
        self.arena.get(id.0).ok_or(DomainError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> DomainResult<&mut Node> {
        self.arena.get_mut(id.0).ok_or(DomainError::UnknownNode(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id.0)
    }

    /// Number of nodes stored, attached or not.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn name(&self, id: NodeId) -> DomainResult<&str> {
        Ok(self.node(id)?.name())
    }

    #[instrument(level = "trace", skip(self, name))]
    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) -> DomainResult<()> {
        self.node_mut(id)?.set_name(name);
        Ok(())
    }

    pub fn kind(&self, id: NodeId) -> DomainResult<&NodeKind> {
        Ok(self.node(id)?.kind())
    }

    pub fn is_leaf(&self, id: NodeId) -> DomainResult<bool> {
        Ok(self.node(id)?.is_leaf())
    }

    pub fn children(&self, id: NodeId) -> DomainResult<&[NodeId]> {
        Ok(self.node(id)?.children())
    }

    /// Appends `child` to the children of `parent`.
    ///
    /// # Errors
    /// * [`DomainError::StructuralViolation`] if `parent` is a leaf.
    /// * [`DomainError::UnknownNode`] if either handle is not in this arena.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, parent: NodeId, child: NodeId) -> DomainResult<()> {
        if !self.is_leaf(parent)? && !self.contains(child) {
            return Err(DomainError::UnknownNode(child));
        }
        self.node_mut(parent)?.add(child).inspect_err(|e| {
            warn!("rejected add of {} to {}: {}", child, parent, e);
        })?;
        debug!("added {} to {}", child, parent);
        Ok(())
    }

    /// Removes every occurrence of `child` from the children of `parent`.
    ///
    /// A child that is not listed (or not in the arena at all) is a no-op.
    ///
    /// # Errors
    /// * [`DomainError::StructuralViolation`] if `parent` is a leaf.
    /// * [`DomainError::UnknownNode`] if `parent` is not in this arena.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, parent: NodeId, child: NodeId) -> DomainResult<()> {
        let removed = self.node_mut(parent)?.remove(child).inspect_err(|e| {
            warn!("rejected remove of {} from {}: {}", child, parent, e);
        })?;
        debug!("removed {} occurrence(s) of {} from {}", removed, child, parent);
        Ok(())
    }

    /// Depth-first, pre-order walk starting at `root`.
    ///
    /// Yields `(level, id, node)` where `level` is 0 for `root`. Children that
    /// are no longer in the arena are skipped.
    pub fn iter_preorder(&self, root: NodeId) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self, root)
    }

    /// Number of nodes reachable from `root`, counting repeated entries each time.
    #[instrument(level = "debug", skip(self))]
    pub fn node_count(&self, root: NodeId) -> usize {
        self.iter_preorder(root).count()
    }

    /// Number of levels below and including `root`; 0 for an unknown root.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self, root: NodeId) -> usize {
        self.iter_preorder(root)
            .map(|(level, _, _)| level + 1)
            .max()
            .unwrap_or(0)
    }

    /// Names of all leaves under `root`, in display order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_names(&self, root: NodeId) -> Vec<String> {
        self.iter_preorder(root)
            .filter(|(_, _, node)| node.is_leaf())
            .map(|(_, _, node)| node.name().to_string())
            .collect()
    }

    /// Writes one line per node reachable from `root`: `depth + level` markers
    /// followed by the node name.
    #[instrument(level = "debug", skip(self, out))]
    pub fn write_display<W: Write>(
        &self,
        root: NodeId,
        depth: usize,
        out: &mut W,
    ) -> DomainResult<()> {
        self.node(root)?;
        for (level, _, node) in self.iter_preorder(root) {
            let markers: String = std::iter::repeat(MARKER).take(depth + level).collect();
            writeln!(out, "{}{}", markers, node.name())?;
        }
        Ok(())
    }

    /// [`write_display`](Self::write_display) to standard output.
    pub fn display(&self, root: NodeId, depth: usize) -> DomainResult<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_display(root, depth, &mut out)?;
        out.flush()?;
        Ok(())
    }
}

pub struct PreOrderIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<(usize, NodeId)>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(arena: &'a TreeArena, root: NodeId) -> Self {
        Self {
            arena,
            stack: vec![(0, root)],
        }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (usize, NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((level, current)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children().iter().rev() {
                    self.stack.push((level + 1, child));
                }
                return Some((level, current, node));
            }
        }
        None
    }
}
