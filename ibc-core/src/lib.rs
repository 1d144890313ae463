//! Re-exports data structures and implementations of all the modules of the
//! IBC light-client registry.
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

/// Re-exports handler entrypoints from the `ibc-lc-handler` crate for
/// added convenience.
pub mod entrypoint {
    #[doc(inline)]
    pub use ibc_lc_handler::entrypoint::*;
}

/// Re-exports primitive types from the `ibc-lc-primitives` crate
pub mod primitives {
    #[doc(inline)]
    pub use ibc_lc_primitives::*;
}

/// Re-exports ICS-02 implementation from the `ibc-lc-client` crate
pub mod client {
    #[doc(inline)]
    pub use ibc_lc_client::*;
}

/// Re-exports ICS-23 data structures from the `ibc-lc-commitment-types` crate
pub mod commitment_types {
    #[doc(inline)]
    pub use ibc_lc_commitment_types::*;
}

/// Re-exports ICS-24 implementation from the `ibc-lc-host` crate
pub mod host {
    #[doc(inline)]
    pub use ibc_lc_host::*;
}

/// Re-exports ICS-25 implementation from the `ibc-lc-handler` crate
pub mod handler {
    #[doc(inline)]
    pub use ibc_lc_handler::*;
}
