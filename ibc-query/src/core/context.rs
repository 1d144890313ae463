//! Required traits for the [`query functions`](crate::core::client).

use ibc_lc_core::client::types::Height;
use ibc_lc_core::handler::types::error::ContextError;
use ibc_lc_core::host::types::identifiers::ClientId;
use ibc_lc_core::host::{ClientStateRef, ConsensusStateRef, ValidationContext};
use ibc_lc_core::primitives::prelude::*;

/// Context to be implemented by the host to list the records of one
/// committed state.
pub trait QueryContext: ValidationContext {
    /// Returns the list of all clients, ordered by identifier.
    fn client_states(&self) -> Result<Vec<(ClientId, ClientStateRef<Self>)>, ContextError>;

    /// Returns the list of all consensus states for the given client,
    /// ordered by height.
    fn consensus_states(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<(Height, ConsensusStateRef<Self>)>, ContextError>;

    /// Returns the list of all heights at which consensus states for the given client are.
    fn consensus_state_heights(&self, client_id: &ClientId) -> Result<Vec<Height>, ContextError>;
}

/// Context to be implemented by the host to serve queries from the states it
/// committed at past heights.
pub trait HistoricalContext {
    type Snapshot: QueryContext;

    /// Height of the latest committed state.
    fn latest_query_height(&self) -> Height;

    /// Returns the state committed at `height`, or `None` if it was pruned or
    /// is not produced yet.
    fn snapshot_at(&self, height: &Height) -> Option<Self::Snapshot>;
}
