//! Domain-level errors (no external dependencies)

use std::fmt;

use thiserror::Error;

use crate::domain::node::NodeId;

/// Child-list operation rejected by a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Remove,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "host"),
            Operation::Remove => write!(f, "remove"),
        }
    }
}

/// Domain errors represent misuse of the tree structure.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("leaf '{name}' cannot {operation} children")]
    StructuralViolation { name: String, operation: Operation },

    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("failed to write display output: {0}")]
    Io(#[from] std::io::Error),
}

impl DomainError {
    pub fn is_structural_violation(&self) -> bool {
        matches!(self, DomainError::StructuralViolation { .. })
    }
}

/// Result type for tree operations.
pub type DomainResult<T> = Result<T, DomainError>;
