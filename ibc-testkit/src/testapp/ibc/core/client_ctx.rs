use ibc_lc_core::client::context::{
    ClientExecutionContext, ClientValidationContext, ExtClientValidationContext,
};
use ibc_lc_core::client::types::Height;
use ibc_lc_core::handler::types::error::ContextError;
use ibc_lc_core::host::types::error::HostError;
use ibc_lc_core::host::types::identifiers::{ClientId, ClientType};
use ibc_lc_core::host::types::path::{ClientConsensusStatePath, ClientStatePath, ClientTypePath};
use ibc_lc_core::host::ValidationContext;
use ibc_lc_core::primitives::prelude::*;
use ibc_lc_core::primitives::Timestamp;

use crate::context::MockContext;
use crate::testapp::ibc::clients::{AnyClientState, AnyConsensusState};

fn consensus_height(path: &ClientConsensusStatePath) -> Result<Height, ContextError> {
    Height::new(path.revision_number, path.revision_height).map_err(|_| {
        HostError::invalid_data(format!("consensus state path `{path}` has a zero height")).into()
    })
}

impl ClientValidationContext for MockContext {
    type ClientStateRef = AnyClientState;
    type ConsensusStateRef = AnyConsensusState;

    fn client_type(&self, client_id: &ClientId) -> Result<Option<ClientType>, ContextError> {
        Ok(self.ibc_store.lock().client_types.get(client_id).cloned())
    }

    fn client_state(&self, client_id: &ClientId) -> Result<Option<AnyClientState>, ContextError> {
        Ok(self.ibc_store.lock().client_states.get(client_id).cloned())
    }

    fn consensus_state(
        &self,
        client_cons_state_path: &ClientConsensusStatePath,
    ) -> Result<Option<AnyConsensusState>, ContextError> {
        let height = consensus_height(client_cons_state_path)?;

        Ok(self
            .ibc_store
            .lock()
            .consensus_states
            .get(&(client_cons_state_path.client_id.clone(), height))
            .cloned())
    }

    fn consensus_state_at_or_below(
        &self,
        client_id: &ClientId,
        height: &Height,
    ) -> Result<Option<(Height, AnyConsensusState)>, ContextError> {
        Ok(self
            .ibc_store
            .lock()
            .consensus_state_at_or_below(client_id, height))
    }

    fn client_update_meta(
        &self,
        client_id: &ClientId,
        height: &Height,
    ) -> Result<Option<(Timestamp, Height)>, ContextError> {
        Ok(self
            .ibc_store
            .lock()
            .update_meta
            .get(&(client_id.clone(), *height))
            .copied())
    }
}

impl ExtClientValidationContext for MockContext {
    fn host_timestamp(&self) -> Result<Timestamp, ContextError> {
        ValidationContext::host_timestamp(self)
    }

    fn host_height(&self) -> Result<Height, ContextError> {
        ValidationContext::host_height(self)
    }

    fn consensus_state_heights(&self, client_id: &ClientId) -> Result<Vec<Height>, ContextError> {
        Ok(self.ibc_store.lock().consensus_state_heights(client_id))
    }

    fn next_consensus_state(
        &self,
        client_id: &ClientId,
        height: &Height,
    ) -> Result<Option<AnyConsensusState>, ContextError> {
        Ok(self.ibc_store.lock().next_consensus_state(client_id, height))
    }

    fn prev_consensus_state(
        &self,
        client_id: &ClientId,
        height: &Height,
    ) -> Result<Option<AnyConsensusState>, ContextError> {
        Ok(self.ibc_store.lock().prev_consensus_state(client_id, height))
    }
}

impl ClientExecutionContext for MockContext {
    fn store_client_state(
        &mut self,
        client_state_path: ClientStatePath,
        client_state: AnyClientState,
    ) -> Result<(), ContextError> {
        self.ibc_store
            .lock()
            .client_states
            .insert(client_state_path.0, client_state);

        Ok(())
    }

    fn store_client_type(
        &mut self,
        client_type_path: ClientTypePath,
        client_type: ClientType,
    ) -> Result<(), ContextError> {
        self.ibc_store
            .lock()
            .client_types
            .insert(client_type_path.0, client_type);

        Ok(())
    }

    fn store_consensus_state(
        &mut self,
        consensus_state_path: ClientConsensusStatePath,
        consensus_state: AnyConsensusState,
    ) -> Result<(), ContextError> {
        if self.failing_consensus_store {
            return Err(HostError::failed_to_store(format!(
                "consensus state at `{consensus_state_path}`"
            ))
            .into());
        }

        let height = consensus_height(&consensus_state_path)?;

        self.ibc_store
            .lock()
            .consensus_states
            .insert((consensus_state_path.client_id, height), consensus_state);

        Ok(())
    }

    fn store_update_meta(
        &mut self,
        client_id: ClientId,
        height: Height,
        host_timestamp: Timestamp,
        host_height: Height,
    ) -> Result<(), ContextError> {
        self.ibc_store
            .lock()
            .update_meta
            .insert((client_id, height), (host_timestamp, host_height));

        Ok(())
    }
}
