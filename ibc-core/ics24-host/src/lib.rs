//! ICS-24: Host defines the minimal set of interfaces that a state machine
//! hosting the light-client registry must implement.
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

mod context;
pub use context::*;

/// Re-exports ICS-24 data structures from its corresponding crate.
pub mod types {
    #[doc(inline)]
    pub use ibc_lc_host_types::*;
}
