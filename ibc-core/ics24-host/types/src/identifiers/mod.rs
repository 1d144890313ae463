//! Defines identifier types

mod chain_id;
mod client_id;
mod client_type;

pub use chain_id::ChainId;
pub use client_id::ClientId;
pub use client_type::ClientType;
