//! Implementation of the in-memory client store backing the mock host.

use core::ops::Bound::{self, Excluded, Included, Unbounded};
use core::time::Duration;

use ibc_lc_core::client::types::Height;
use ibc_lc_core::handler::types::events::IbcEvent;
use ibc_lc_core::host::types::identifiers::{ClientId, ClientType};
use ibc_lc_core::primitives::prelude::*;
use ibc_lc_core::primitives::Timestamp;

use crate::testapp::ibc::clients::{AnyClientState, AnyConsensusState};

pub const DEFAULT_BLOCK_TIME_SECS: u64 = 3;

pub const DEFAULT_BLOCK_TIME: Duration = Duration::from_secs(DEFAULT_BLOCK_TIME_SECS);

/// An object that stores all the client records of the registry.
///
/// Consensus states and update metadata are keyed by `(ClientId, Height)`,
/// so the entries of one client are adjacent and ordered by height.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MockIbcStore {
    /// The client states, indexed by their id.
    pub client_states: BTreeMap<ClientId, AnyClientState>,

    /// The consensus type each client was created with.
    pub client_types: BTreeMap<ClientId, ClientType>,

    /// The trusted consensus states of every client.
    pub consensus_states: BTreeMap<(ClientId, Height), AnyConsensusState>,

    /// Tracks the host time and height at which each consensus state was
    /// processed.
    pub update_meta: BTreeMap<(ClientId, Height), (Timestamp, Height)>,

    /// Emitted IBC events in order
    pub events: Vec<IbcEvent>,

    /// Logs of the IBC module
    pub logs: Vec<String>,
}

impl MockIbcStore {
    /// Iterates over the consensus states of `client_id` within the given
    /// height bounds, in ascending height order.
    fn consensus_range<'a>(
        &'a self,
        client_id: &'a ClientId,
        lower: Bound<Height>,
        upper: Bound<Height>,
    ) -> impl DoubleEndedIterator<Item = (&'a Height, &'a AnyConsensusState)> + 'a {
        let key = |bound: Bound<Height>| match bound {
            Included(height) => Included((client_id.clone(), height)),
            Excluded(height) => Excluded((client_id.clone(), height)),
            Unbounded => Unbounded,
        };

        self.consensus_states
            .range((key(lower), key(upper)))
            .filter(move |((id, _), _)| id == client_id)
            .map(|((_, height), cs)| (height, cs))
    }

    /// The consensus state with the greatest height at or below `height`.
    pub fn consensus_state_at_or_below(
        &self,
        client_id: &ClientId,
        height: &Height,
    ) -> Option<(Height, AnyConsensusState)> {
        self.consensus_range(client_id, Unbounded, Included(*height))
            .next_back()
            .map(|(h, cs)| (*h, cs.clone()))
    }

    /// The consensus state with the lowest height above `height`.
    pub fn next_consensus_state(
        &self,
        client_id: &ClientId,
        height: &Height,
    ) -> Option<AnyConsensusState> {
        self.consensus_range(client_id, Excluded(*height), Unbounded)
            .next()
            .map(|(_, cs)| cs.clone())
    }

    /// The consensus state with the greatest height below `height`.
    pub fn prev_consensus_state(
        &self,
        client_id: &ClientId,
        height: &Height,
    ) -> Option<AnyConsensusState> {
        self.consensus_range(client_id, Unbounded, Excluded(*height))
            .next_back()
            .map(|(_, cs)| cs.clone())
    }

    /// All consensus states of `client_id`, ordered by height.
    pub fn consensus_states_of(&self, client_id: &ClientId) -> Vec<(Height, AnyConsensusState)> {
        self.consensus_range(client_id, Unbounded, Unbounded)
            .map(|(h, cs)| (*h, cs.clone()))
            .collect()
    }

    pub fn consensus_state_heights(&self, client_id: &ClientId) -> Vec<Height> {
        self.consensus_range(client_id, Unbounded, Unbounded)
            .map(|(h, _)| *h)
            .collect()
    }
}
