//! Query functions and the host traits they rely on.

pub mod client;
pub mod context;
