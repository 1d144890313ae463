//! Contains the primitive types and the prelude shared by the IBC light-client
//! registry crates.
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

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod prelude;

mod types;
pub use types::*;
