//! Defines Tendermint's `ConsensusState` type

use ibc_lc_client_context::consensus_state::ConsensusState as ConsensusStateTrait;
use ibc_lc_client_types::Height;
use ibc_lc_commitment_types::commitment::CommitmentRoot;
use ibc_lc_host_types::identifiers::ChainId;
use ibc_lc_primitives::prelude::*;
use ibc_lc_primitives::Timestamp;
use tendermint::{Hash, Time};

use crate::error::TendermintClientError;
use crate::header::Header;

/// Defines the Tendermint light client's consensus state: the trusted
/// snapshot of the counterparty chain at one height.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsensusState {
    pub chain_id: ChainId,
    pub height: Height,
    pub timestamp: Timestamp,
    pub root: CommitmentRoot,
    pub next_validators_hash: Hash,
}

impl ConsensusState {
    pub fn new(
        chain_id: ChainId,
        height: Height,
        timestamp: Timestamp,
        root: CommitmentRoot,
        next_validators_hash: Hash,
    ) -> Self {
        Self {
            chain_id,
            height,
            timestamp,
            root,
            next_validators_hash,
        }
    }

    /// The snapshot time in the representation the Tendermint verifier uses.
    pub fn tm_time(&self) -> Result<Time, TendermintClientError> {
        self.timestamp
            .into_tm_time()
            .map_err(TendermintClientError::InvalidHeaderTimestamp)
    }
}

impl ConsensusStateTrait for ConsensusState {
    fn root(&self) -> &CommitmentRoot {
        &self.root
    }

    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl TryFrom<&Header> for ConsensusState {
    type Error = TendermintClientError;

    fn try_from(header: &Header) -> Result<Self, Self::Error> {
        let block_header = &header.signed_header().header;

        Ok(Self {
            chain_id: header.chain_id().clone(),
            height: header.height(),
            timestamp: header.timestamp()?,
            root: CommitmentRoot::from_bytes(block_header.app_hash.as_ref()),
            next_validators_hash: block_header.next_validators_hash,
        })
    }
}
