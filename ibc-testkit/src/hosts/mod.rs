//! Models the host chain the registry runs on.

mod block;

pub use block::*;
