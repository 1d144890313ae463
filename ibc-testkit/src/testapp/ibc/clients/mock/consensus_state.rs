use ibc_lc_core::client::context::consensus_state::ConsensusState;
use ibc_lc_core::client::types::Height;
use ibc_lc_core::commitment_types::commitment::CommitmentRoot;
use ibc_lc_core::primitives::Timestamp;

use crate::testapp::ibc::clients::mock::header::MockHeader;

/// The mock consensus state type used within ibc-lc-testkit for testing
/// situations when a consensus state is required.
///
/// Only the height and time of the header it was derived from are kept, so
/// two headers for the same block always yield equal snapshots.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockConsensusState {
    pub height: Height,
    pub timestamp: Timestamp,
    root: CommitmentRoot,
}

impl MockConsensusState {
    pub fn new(header: MockHeader) -> Self {
        Self {
            height: header.height,
            timestamp: header.timestamp,
            root: CommitmentRoot::from_bytes(&[0]),
        }
    }
}

impl ConsensusState for MockConsensusState {
    fn root(&self) -> &CommitmentRoot {
        &self.root
    }

    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}
