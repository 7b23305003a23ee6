use std::fmt;

use generational_arena::Index;

use crate::domain::error::{DomainError, DomainResult, Operation};

/// Stable identity of a node inside a [`TreeArena`](crate::domain::TreeArena).
///
/// Two handles are equal only if they refer to the same arena slot and generation,
/// so nodes sharing a name stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) Index);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "#{}v{}", slot, generation)
    }
}

/// The two kinds of tree element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Terminal element, never holds children.
    Leaf,
    /// Container with an ordered child sequence; duplicates allowed.
    Composite(Vec<NodeId>),
}

/// Tree element stored in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    kind: NodeKind,
}

impl Node {
    pub fn leaf() -> Self {
        Self {
            name: String::new(),
            kind: NodeKind::Leaf,
        }
    }

    pub fn composite() -> Self {
        Self {
            name: String::new(),
            kind: NodeKind::Composite(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf)
    }

    /// Children in insertion order; always empty for a leaf.
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Leaf => &[],
            NodeKind::Composite(children) => children,
        }
    }

    /// Appends `child` to the end of the child sequence.
    pub fn add(&mut self, child: NodeId) -> DomainResult<()> {
        if self.is_leaf() {
            return Err(self.violation(Operation::Add));
        }
        if let NodeKind::Composite(children) = &mut self.kind {
            children.push(child);
        }
        Ok(())
    }

    /// Drops every occurrence of `child`, keeping the order of the rest.
    ///
    /// Returns the number of entries removed; zero when `child` was absent.
    pub fn remove(&mut self, child: NodeId) -> DomainResult<usize> {
        if self.is_leaf() {
            return Err(self.violation(Operation::Remove));
        }
        let mut removed = 0;
        if let NodeKind::Composite(children) = &mut self.kind {
            let before = children.len();
            children.retain(|&c| c != child);
            removed = before - children.len();
        }
        Ok(removed)
    }

    fn violation(&self, operation: Operation) -> DomainError {
        DomainError::StructuralViolation {
            name: self.name.clone(),
            operation,
        }
    }
}
