//! This crate functions as an intermediary layer between the storage of host
//! chains and the light client strategies, providing the traits a host
//! implements to keep client records and the trait a consensus-specific
//! verifier implements to take part in client state transitions.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::disallowed_methods, clippy::disallowed_types))]
#![deny(
    warnings,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

#[cfg(feature = "std")]
extern crate std;

pub mod client_message;
pub mod client_state;
pub mod consensus_state;
pub mod light_client;

mod context;
pub use context::*;

/// Trait preludes for the ICS-02 client implementation.
pub mod prelude {
    pub use crate::client_message::*;
    pub use crate::client_state::*;
    pub use crate::consensus_state::*;
    pub use crate::context::*;
    pub use crate::light_client::*;
}

pub mod types {
    #[doc(inline)]
    pub use ibc_lc_client_types::*;
}
