pub mod clients;
pub mod core;
