pub mod client;
pub mod context;
