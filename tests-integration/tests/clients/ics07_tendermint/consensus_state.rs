use ibc_lc_core::client::context::consensus_state::ConsensusState;
use ibc_lc_core::commitment_types::commitment::CommitmentRoot;
use ibc_lc_core::primitives::Timestamp;
use ibc_lc_tendermint::types::ConsensusState as TmConsensusState;
use ibc_lc_testkit::context::MockContext;
use ibc_lc_testkit::fixtures::clients::tendermint::TmBlockConfig;
use ibc_lc_testkit::fixtures::core::client::{
    msg_create_tm_client, msg_update_tm_client, tm_client_id,
};
use ibc_lc_testkit::testapp::ibc::clients::AnyConsensusState;
use rstest::*;

#[rstest]
#[test_log::test]
#[case(11)]
#[case(25)]
fn test_consensus_state_is_derived_from_the_header(#[case] revision_height: u64) {
    let config = TmBlockConfig::default();
    let client_id = tm_client_id(0);
    let mut ctx = MockContext::default();

    ctx.deliver(msg_create_tm_client(&client_id, config.consensus_state(10)))
        .unwrap();
    ctx.deliver(msg_update_tm_client(
        &client_id,
        config.header(revision_height, 10),
    ))
    .unwrap();

    let Some(AnyConsensusState::Tendermint(consensus_state)) =
        ctx.consensus_state_of(&client_id, config.height(revision_height))
    else {
        panic!("tendermint consensus state expected");
    };

    let block = config.light_block(revision_height, config.timestamp_at(revision_height));
    let block_header = &block.signed_header.header;

    assert_eq!(consensus_state.chain_id, config.chain_id);
    assert_eq!(consensus_state.height, config.height(revision_height));
    assert_eq!(
        consensus_state.timestamp(),
        config.timestamp_at(revision_height)
    );
    assert_eq!(
        consensus_state.root(),
        &CommitmentRoot::from_bytes(block_header.app_hash.as_ref())
    );
    assert_eq!(
        consensus_state.next_validators_hash,
        block_header.next_validators_hash
    );
}

#[test_log::test]
fn test_consensus_state_time_converts_back() {
    let consensus_state: TmConsensusState = TmBlockConfig::default().consensus_state(10);

    let tm_time = consensus_state.tm_time().unwrap();

    assert_eq!(
        Timestamp::try_from(tm_time).unwrap(),
        consensus_state.timestamp
    );
}
