//! Domain layer: leaves, composites and the arena that owns them
//!
//! This layer is independent of external concerns (no CLI, no config loading).

pub mod arena;
pub mod error;
pub mod node;

pub use arena::{PreOrderIterator, TreeArena, MARKER};
pub use error::{DomainError, DomainResult, Operation};
pub use node::{Node, NodeId, NodeKind};
