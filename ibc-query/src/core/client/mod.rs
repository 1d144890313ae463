//! Queries over the client records of the registry.

mod query;
mod types;

pub use query::*;
pub use types::*;
