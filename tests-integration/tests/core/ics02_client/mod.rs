mod misbehaviour;
mod scenario;
mod update_client;
