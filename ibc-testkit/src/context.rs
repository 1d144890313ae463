use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};
use core::time::Duration;

use ibc_lc_core::client::context::{ClientExecutionContext, ClientValidationContext};
use ibc_lc_core::client::types::msgs::ClientMsgOutcome;
use ibc_lc_core::client::types::Height;
use ibc_lc_core::entrypoint::dispatch;
use ibc_lc_core::handler::types::error::ContextError;
use ibc_lc_core::handler::types::events::IbcEvent;
use ibc_lc_core::host::types::identifiers::{ChainId, ClientId, ClientType};
use ibc_lc_core::host::types::path::{ClientConsensusStatePath, ClientStatePath, ClientTypePath};
use ibc_lc_core::host::ClientMsgRef;
use ibc_lc_core::primitives::prelude::*;
use ibc_lc_core::primitives::Timestamp;
use ibc_lc_tendermint::TendermintClient;
use parking_lot::Mutex;
use tracing::debug;

use crate::fixtures::core::context::MockContextConfig;
use crate::hosts::HostBlock;
use crate::testapp::ibc::clients::mock::client::MockClient;
use crate::testapp::ibc::clients::{AnyClientState, AnyConsensusState};
use crate::testapp::ibc::core::types::MockIbcStore;

/// A context implementing the dependencies necessary for testing the client
/// registry: an in-memory client store, the host's block history and the
/// strategies the host supports.
#[derive(Debug)]
pub struct MockContext {
    /// Identifier of the host chain.
    pub host_chain_id: ChainId,

    /// Maximum size of the host block history, and of the committed states
    /// that can be queried.
    pub max_history_size: u64,

    /// The host blocks, ordered by height. Never empty.
    pub history: Vec<HostBlock>,

    /// Time between two consecutive host blocks.
    pub block_time: Duration,

    /// Strategy the host verifies Tendermint clients with.
    pub tendermint_client: TendermintClient,

    /// Strategy the host verifies mock clients with.
    pub mock_client: MockClient,

    /// The working client store.
    pub ibc_store: Arc<Mutex<MockIbcStore>>,

    /// The store as it was committed at the end of each retained host block.
    pub(crate) committed: BTreeMap<Height, MockIbcStore>,

    /// Rejects every event and log line when set.
    pub(crate) failing_sink: bool,

    /// Fails every consensus state write when set.
    pub(crate) failing_consensus_store: bool,

    /// Client types the host no longer has a strategy for.
    pub(crate) disabled_light_clients: Vec<ClientType>,

    /// Number of strategy lookups served, shared with staged copies.
    pub(crate) strategy_lookups: Arc<AtomicU64>,
}

/// Returns a MockContext with bare minimum initialization: no clients are
/// present, and the chain has Height(5). This should be used sparingly,
/// mostly for testing the creation of new domain objects.
impl Default for MockContext {
    fn default() -> Self {
        MockContextConfig::builder().build()
    }
}

/// A mock context can be cloned to stage a message against it. The clone
/// owns a deep copy of the store, so staged writes never leak into the
/// original.
impl Clone for MockContext {
    fn clone(&self) -> Self {
        let ibc_store = {
            let ibc_store = self.ibc_store.lock().clone();
            Arc::new(Mutex::new(ibc_store))
        };

        Self {
            host_chain_id: self.host_chain_id.clone(),
            max_history_size: self.max_history_size,
            history: self.history.clone(),
            block_time: self.block_time,
            tendermint_client: self.tendermint_client.clone(),
            mock_client: self.mock_client,
            ibc_store,
            committed: self.committed.clone(),
            failing_sink: self.failing_sink,
            failing_consensus_store: self.failing_consensus_store,
            disabled_light_clients: self.disabled_light_clients.clone(),
            strategy_lookups: self.strategy_lookups.clone(),
        }
    }
}

/// Implementation of internal interface for use in testing. The methods in this interface should
/// _not_ be accessible to any client handler.
impl MockContext {
    /// Makes the event sink and the logger reject everything the registry
    /// hands them.
    pub fn with_failing_sink(self) -> Self {
        Self {
            failing_sink: true,
            ..self
        }
    }

    /// Makes every consensus state write fail. Writes of a message that
    /// happen before the failing one are rolled back by [`Self::deliver`].
    pub fn with_failing_consensus_store(self) -> Self {
        Self {
            failing_consensus_store: true,
            ..self
        }
    }

    /// Removes the strategy for `client_type` from the host, leaving the
    /// clients already stored under it behind.
    pub fn without_light_client(mut self, client_type: ClientType) -> Self {
        self.disabled_light_clients.push(client_type);
        self
    }

    /// Associates a client record to this context, bypassing the registry.
    pub fn with_client_state(mut self, client_id: &ClientId, client_state: AnyClientState) -> Self {
        let client_state_path = ClientStatePath::new(client_id.clone());
        self.store_client_state(client_state_path, client_state)
            .expect("error writing to store");
        self.commit();
        self
    }

    /// Records the consensus type of a client, bypassing the registry.
    pub fn with_client_type(mut self, client_id: &ClientId, client_type: ClientType) -> Self {
        let client_type_path = ClientTypePath::new(client_id.clone());
        self.store_client_type(client_type_path, client_type)
            .expect("error writing to store");
        self.commit();
        self
    }

    /// Stores a trusted consensus state of a client, bypassing the registry.
    pub fn with_consensus_state(
        mut self,
        client_id: &ClientId,
        height: Height,
        consensus_state: AnyConsensusState,
    ) -> Self {
        let consensus_state_path = ClientConsensusStatePath::new(
            client_id.clone(),
            height.revision_number(),
            height.revision_height(),
        );
        self.store_consensus_state(consensus_state_path, consensus_state)
            .expect("error writing to store");
        self.commit();
        self
    }

    pub fn latest_block(&self) -> HostBlock {
        *self.history.last().expect("history cannot be empty")
    }

    pub fn latest_height(&self) -> Height {
        self.latest_block().height()
    }

    pub fn latest_timestamp(&self) -> Timestamp {
        self.latest_block().timestamp()
    }

    /// Accessor for a block of the local (host) chain from this context.
    /// Returns `None` if the block at the requested height does not exist.
    pub fn host_block(&self, target_height: &Height) -> Option<HostBlock> {
        self.history
            .iter()
            .find(|block| &block.height() == target_height)
            .copied()
    }

    /// Triggers the advancing of the host chain, by extending the history of
    /// blocks (or headers) and committing the current store at the new
    /// height.
    pub fn advance_block(&mut self) {
        self.advance_with_block_time(self.block_time)
    }

    /// Same as [`Self::advance_block`], but the new block is produced
    /// `block_time` after the latest one.
    pub fn advance_with_block_time(&mut self, block_time: Duration) {
        let next_block = self.latest_block().next(block_time);
        self.history.push(next_block);

        while self.history.len() as u64 > self.max_history_size {
            let pruned = self.history.remove(0);
            self.committed.remove(&pruned.height());
        }

        self.commit();
    }

    /// Advances the host chain until it reaches `target_height`.
    pub fn advance_block_up_to(mut self, target_height: Height) -> Self {
        let latest_height = self.latest_height();
        if target_height.revision_number() != latest_height.revision_number() {
            panic!("Cannot advance history of the chain to a different revision number!")
        } else if target_height.revision_height() < latest_height.revision_height() {
            panic!("Cannot rewind history of the chain to a smaller revision height!")
        } else {
            while self.latest_height() < target_height {
                self.advance_block()
            }
        }
        self
    }

    /// Records the working store as the state committed at the latest height.
    pub(crate) fn commit(&mut self) {
        let ibc_store = self.ibc_store.lock().clone();
        self.committed.insert(self.latest_height(), ibc_store);
    }

    /// A read-only view of the state committed at `height`, if it is still
    /// retained.
    pub(crate) fn committed_at(&self, height: &Height) -> Option<MockContext> {
        let ibc_store = self.committed.get(height)?.clone();

        Some(Self {
            history: self
                .history
                .iter()
                .take_while(|block| &block.height() <= height)
                .copied()
                .collect(),
            ibc_store: Arc::new(Mutex::new(ibc_store)),
            committed: BTreeMap::new(),
            ..self.clone()
        })
    }

    /// A datagram passes from the relayer to the registry (on host chain).
    ///
    /// The message is dispatched against a staged copy of the store. Only a
    /// successful dispatch replaces the working store, after which the host
    /// produces a new block. On failure the context stays untouched.
    pub fn deliver(&mut self, msg: ClientMsgRef<Self>) -> Result<ClientMsgOutcome, ContextError> {
        let mut staged = self.clone();

        let outcome = dispatch(&mut staged, msg).map_err(|e| {
            debug!("message rejected at host height {}: {e}", self.latest_height());
            e
        })?;

        self.ibc_store = staged.ibc_store;
        self.advance_block();

        Ok(outcome)
    }

    /// A copy of the working store.
    pub fn ibc_store(&self) -> MockIbcStore {
        self.ibc_store.lock().clone()
    }

    /// How many times a registry operation resolved a light client strategy
    /// on this context or on a copy staged from it.
    pub fn strategy_lookups(&self) -> u64 {
        self.strategy_lookups.load(Ordering::Relaxed)
    }

    pub fn events(&self) -> Vec<IbcEvent> {
        self.ibc_store.lock().events.clone()
    }

    pub fn logs(&self) -> Vec<String> {
        self.ibc_store.lock().logs.clone()
    }

    pub fn client_state_of(&self, client_id: &ClientId) -> Option<AnyClientState> {
        self.client_state(client_id).expect("reads never fail")
    }

    pub fn consensus_state_of(
        &self,
        client_id: &ClientId,
        height: Height,
    ) -> Option<AnyConsensusState> {
        self.consensus_state(&ClientConsensusStatePath::new(
            client_id.clone(),
            height.revision_number(),
            height.revision_height(),
        ))
        .expect("reads never fail")
    }
}
