//! ICS-02: Client Semantics implementation of the light-client registry,
//! along with re-exporting data structures from `ibc-lc-client-types` crate.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::disallowed_methods, clippy::disallowed_types,))]
#![deny(
    warnings,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

#[cfg(feature = "std")]
extern crate std;

pub mod handler;

/// Re-exports ICS-02 traits from `ibc-lc-client-context` for custom
/// light client implementation.
pub mod context {
    #[doc(inline)]
    pub use ibc_lc_client_context::*;
}

/// Re-exports ICS-02 data structures from the `ibc-lc-client-types` crate.
pub mod types {
    #[doc(inline)]
    pub use ibc_lc_client_types::*;
}
