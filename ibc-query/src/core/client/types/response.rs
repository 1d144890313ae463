//! Contains all the response domain types of the client queries. Every
//! response carries the height of the committed state it was read from.

use ibc_lc_core::client::types::{Height, Status};
use ibc_lc_core::host::types::identifiers::{ClientId, ClientType};
use ibc_lc_core::primitives::prelude::*;

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryClientStateResponse<C> {
    pub client_state: C,
    /// The consensus type tag recorded for the client.
    pub client_type: ClientType,
    /// The height at which the client state was retrieved.
    pub query_height: Height,
}

/// Defines the response type for querying all client states.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryClientStatesResponse<C> {
    pub client_states: Vec<IdentifiedClientState<C>>,
    pub query_height: Height,
}

/// A client state together with its identifier.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentifiedClientState<C> {
    pub client_id: ClientId,
    pub client_state: C,
}

impl<C> IdentifiedClientState<C> {
    pub fn new(client_id: ClientId, client_state: C) -> Self {
        Self {
            client_id,
            client_state,
        }
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryConsensusStateResponse<S> {
    pub consensus_state: S,
    /// The height of the consensus state.
    pub consensus_height: Height,
    pub query_height: Height,
}

/// Defines the response type for querying all consensus states of a client.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryConsensusStatesResponse<S> {
    pub consensus_states: Vec<ConsensusStateWithHeight<S>>,
    pub query_height: Height,
}

/// A consensus state together with the height it is stored at.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsensusStateWithHeight<S> {
    pub height: Height,
    pub consensus_state: S,
}

impl<S> ConsensusStateWithHeight<S> {
    pub fn new(height: Height, consensus_state: S) -> Self {
        Self {
            height,
            consensus_state,
        }
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryConsensusStateHeightsResponse {
    pub consensus_state_heights: Vec<Height>,
    pub query_height: Height,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryClientStatusResponse {
    pub status: Status,
    pub query_height: Height,
}
