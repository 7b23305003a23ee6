//! comptree: leaves and composites behind one add/remove/display interface.
//!
//! Nodes live in a [`domain::TreeArena`] and are addressed by [`domain::NodeId`],
//! so removal works by identity rather than by name.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;

pub use domain::{DomainError, DomainResult, Node, NodeId, NodeKind, TreeArena};
