//! Contains all the request domain types of the client queries.

use ibc_lc_core::client::types::Height;
use ibc_lc_core::host::types::identifiers::ClientId;

/// Defines the request type for querying the client state of a client.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryClientStateRequest {
    /// The client identifier.
    pub client_id: ClientId,
    /// The height at which to query the client state. If not provided, the
    /// latest height should be used.
    pub query_height: Option<Height>,
}

/// Defines the request type for querying all client states.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryClientStatesRequest {
    pub query_height: Option<Height>,
}

/// Defines the request type for querying the consensus state of a
/// client.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryConsensusStateRequest {
    /// The client identifier.
    pub client_id: ClientId,
    /// The consensus state height to be queried. If not provided, the latest
    /// height
    pub consensus_height: Option<Height>,
    /// The height at which to query the consensus state. If not provided, the
    /// latest height should be used.
    pub query_height: Option<Height>,
}

/// Defines the request type for querying all consensus states of a client.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryConsensusStatesRequest {
    pub client_id: ClientId,
    pub query_height: Option<Height>,
}

/// Defines the request type for querying the heights of the consensus states
/// of a client.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryConsensusStateHeightsRequest {
    pub client_id: ClientId,
    pub query_height: Option<Height>,
}

/// Defines the request type for querying the status of a client.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryClientStatusRequest {
    pub client_id: ClientId,
    pub query_height: Option<Height>,
}
