mod client_state;
mod consensus_state;
