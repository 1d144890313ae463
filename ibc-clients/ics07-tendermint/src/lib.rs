//! ICS 07: Tendermint light client strategy of the registry, along with
//! re-exporting the necessary types from `ibc-lc-tendermint-types` crate.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::disallowed_methods, clippy::disallowed_types))]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod client;
pub mod verifier;

pub use client::*;

/// Re-exports Tendermint light client data structures from the
/// `ibc-lc-tendermint-types` crate.
pub mod types {
    #[doc(inline)]
    pub use ibc_lc_tendermint_types::*;
}
