use ibc_lc_core::client::context::ExtClientValidationContext;
use ibc_lc_core::client::types::Height;
use ibc_lc_core::handler::types::error::ContextError;
use ibc_lc_core::host::types::identifiers::ClientId;
use ibc_lc_core::primitives::prelude::*;
use ibc_lc_query::core::context::{HistoricalContext, QueryContext};

use crate::context::MockContext;
use crate::testapp::ibc::clients::{AnyClientState, AnyConsensusState};

impl QueryContext for MockContext {
    fn client_states(&self) -> Result<Vec<(ClientId, AnyClientState)>, ContextError> {
        Ok(self
            .ibc_store
            .lock()
            .client_states
            .iter()
            .map(|(client_id, client_state)| (client_id.clone(), client_state.clone()))
            .collect())
    }

    fn consensus_states(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<(Height, AnyConsensusState)>, ContextError> {
        Ok(self.ibc_store.lock().consensus_states_of(client_id))
    }

    fn consensus_state_heights(&self, client_id: &ClientId) -> Result<Vec<Height>, ContextError> {
        ExtClientValidationContext::consensus_state_heights(self, client_id)
    }
}

impl HistoricalContext for MockContext {
    type Snapshot = MockContext;

    fn latest_query_height(&self) -> Height {
        self.latest_height()
    }

    fn snapshot_at(&self, height: &Height) -> Option<MockContext> {
        self.committed_at(height)
    }
}
