//! Application layer: use-cases assembled from domain operations

pub mod error;
pub mod organization;

pub use error::{ApplicationError, ApplicationResult};
pub use organization::Organization;
