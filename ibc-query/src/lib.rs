//! Contains a set of utility traits and implementations for querying the
//! client records kept by the IBC light-client registry.
//!
//! The query functions are available if the host implements the following
//! _context_ traits:
//! - [`QueryContext`](crate::core::context::QueryContext), for listing the
//!   records of one committed state;
//! - [`HistoricalContext`](crate::core::context::HistoricalContext), for
//!   picking the committed state a query is answered from.
//!
//! Queries never mutate the store.
//!
//! Example
//! ```rust,ignore
//! use ibc_lc_query::core::client::{query_client_state, QueryClientStateRequest};
//!
//! let response = query_client_state(
//!     &ctx,
//!     &QueryClientStateRequest {
//!         client_id: "07-tendermint-0".parse()?,
//!         query_height: None,
//!     },
//! )?;
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

pub mod core;
pub mod error;
