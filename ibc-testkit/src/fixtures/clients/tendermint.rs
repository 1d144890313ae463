use core::str::FromStr;
use core::time::Duration;

use ibc_lc_core::client::types::Height;
use ibc_lc_core::commitment_types::commitment::CommitmentRoot;
use ibc_lc_core::host::types::identifiers::{ChainId, ClientId};
use ibc_lc_core::primitives::prelude::*;
use ibc_lc_core::primitives::Timestamp;
use ibc_lc_tendermint::types::{
    ConsensusState as TmConsensusState, Header as TmHeader, Misbehaviour as TmMisbehaviour,
};
use tendermint_testgen::light_block::TmLightBlock;
use tendermint_testgen::{
    Generator, Header as TestgenHeader, LightBlock as TestgenLightBlock,
    Validator as TestgenValidator,
};
use typed_builder::TypedBuilder;

use crate::utils::year_2023;

/// Describes a counterparty Tendermint chain whose blocks are generated on
/// demand: block `h` is produced `(h - 1) * block_time` after the genesis
/// time and is signed by `validators`, which never change.
#[derive(TypedBuilder, Debug, Clone)]
pub struct TmBlockConfig {
    #[builder(default = ChainId::from_str("chainB-0").expect("Never fails"))]
    pub chain_id: ChainId,

    #[builder(default = vec![
        TestgenValidator::new("1").voting_power(50),
        TestgenValidator::new("2").voting_power(50),
    ])]
    pub validators: Vec<TestgenValidator>,

    /// Time of the block at height 1.
    #[builder(default = (year_2023() - Duration::from_secs(24 * 60 * 60)).expect("Never fails"))]
    pub genesis_timestamp: Timestamp,

    #[builder(default = Duration::from_secs(5))]
    pub block_time: Duration,
}

impl Default for TmBlockConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl TmBlockConfig {
    /// The height of block `revision_height` on this chain.
    pub fn height(&self, revision_height: u64) -> Height {
        Height::new(self.chain_id.revision_number(), revision_height).expect("Never fails")
    }

    /// The time the honest chain produced block `revision_height` at.
    pub fn timestamp_at(&self, revision_height: u64) -> Timestamp {
        let blocks = u32::try_from(revision_height.saturating_sub(1)).expect("no overflow");
        (self.genesis_timestamp + self.block_time * blocks).expect("Never fails")
    }

    /// Generates a signed block at `revision_height` with the given time.
    pub fn light_block(&self, revision_height: u64, timestamp: Timestamp) -> TmLightBlock {
        TestgenLightBlock::new_default_with_header(
            TestgenHeader::new(&self.validators)
                .height(revision_height)
                .chain_id(self.chain_id.as_str())
                .next_validators(&self.validators)
                .time(timestamp.into_tm_time().expect("Never fails")),
        )
        .validators(&self.validators)
        .next_validators(&self.validators)
        .generate()
        .expect("Never fails")
    }

    /// The snapshot a registry trusts for the honest block at
    /// `revision_height`, as handed to `CreateClient`.
    pub fn consensus_state(&self, revision_height: u64) -> TmConsensusState {
        let block = self.light_block(revision_height, self.timestamp_at(revision_height));
        let block_header = &block.signed_header.header;

        TmConsensusState::new(
            self.chain_id.clone(),
            self.height(revision_height),
            self.timestamp_at(revision_height),
            CommitmentRoot::from_bytes(block_header.app_hash.as_ref()),
            block_header.next_validators_hash,
        )
    }

    /// The honest header at `revision_height`, to be verified against the
    /// snapshot at `trusted_height`.
    pub fn header(&self, revision_height: u64, trusted_height: u64) -> TmHeader {
        self.header_at_time(
            revision_height,
            trusted_height,
            self.timestamp_at(revision_height),
        )
    }

    /// Same as [`Self::header`], but the block carries `timestamp`. A header
    /// whose time differs from the honest one commits to a forked block.
    pub fn header_at_time(
        &self,
        revision_height: u64,
        trusted_height: u64,
        timestamp: Timestamp,
    ) -> TmHeader {
        let block = self.light_block(revision_height, timestamp);
        let trusted_block =
            self.light_block(trusted_height, self.timestamp_at(trusted_height));

        TmHeader::new(
            block.signed_header,
            block.validators,
            self.height(trusted_height),
            trusted_block.next_validators,
        )
        .expect("Never fails")
    }

    /// Evidence of a fork at `revision_height`: the honest header along with
    /// one signed by the same validators a second later.
    pub fn misbehaviour(
        &self,
        client_id: &ClientId,
        revision_height: u64,
        trusted_height: u64,
    ) -> TmMisbehaviour {
        let forked_timestamp =
            (self.timestamp_at(revision_height) + Duration::from_secs(1)).expect("Never fails");

        TmMisbehaviour::new(
            client_id.clone(),
            self.header(revision_height, trusted_height),
            self.header_at_time(revision_height, trusted_height, forked_timestamp),
        )
    }
}
