//! Exposes the light-client registry entry points. These entry points are
//! responsible for processing incoming client messages, performing
//! validation, and execution logics by invoking the appropriate ICS-02
//! handler.
//!
//! A message that fails validation leaves the context untouched. Failures
//! during execution can only stem from the host store itself; the host is
//! then expected to roll back all state modifications made to the context
//! (e.g. [`ExecutionContext`](ibc_lc_host::ExecutionContext)) while
//! processing the message.
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

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod entrypoint;

/// Re-export handler types from `ibc-lc-handler-types` crate.
pub mod types {
    #[doc(inline)]
    pub use ibc_lc_handler_types::*;
}
