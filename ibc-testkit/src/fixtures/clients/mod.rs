pub mod tendermint;
