use core::time::Duration;

use ibc_lc_core::client::context::client_state::ClientStateCommon;
use ibc_lc_core::client::types::error::ClientError;
use ibc_lc_core::client::types::events::ClientMisbehaviour as ClientMisbehaviourEvent;
use ibc_lc_core::client::types::msgs::{ClientMsgOutcome, MisbehaviourOutcome};
use ibc_lc_core::client::types::Height;
use ibc_lc_core::handler::types::error::ContextError;
use ibc_lc_core::handler::types::events::{IbcEvent, MessageEvent};
use ibc_lc_core::host::ClientMsgRef;
use ibc_lc_tendermint::types::{client_type as tm_client_type, Misbehaviour as TmMisbehaviour};
use ibc_lc_testkit::context::MockContext;
use ibc_lc_testkit::fixtures::clients::tendermint::TmBlockConfig;
use ibc_lc_testkit::fixtures::core::client::{
    mock_client_id, msg_create_mock_client, msg_create_tm_client, msg_mock_misbehaviour,
    msg_tm_misbehaviour, msg_update_mock_client, msg_update_tm_client, tm_client_id,
};
use ibc_lc_testkit::fixtures::Fixture;
use ibc_lc_testkit::testapp::ibc::clients::mock::client_state::{
    client_type as mock_client_type, MockClientState,
};
use ibc_lc_testkit::testapp::ibc::clients::mock::header::MockHeader;
use ibc_lc_testkit::utils::year_2023;
use rstest::*;
use test_log::test;

const TM_HEIGHT: u64 = 10;
const EVIDENCE_HEIGHT: u64 = 20;

fn height(revision_height: u64) -> Height {
    Height::new(0, revision_height).unwrap()
}

fn honest_mock_header() -> MockHeader {
    MockHeader::new(height(EVIDENCE_HEIGHT))
}

fn forked_mock_header() -> MockHeader {
    honest_mock_header().with_timestamp((year_2023() + Duration::from_secs(1)).unwrap())
}

/// A host with a mock client and a Tendermint client, both holding a trusted
/// consensus state at `EVIDENCE_HEIGHT`.
#[fixture]
fn fixture() -> Fixture<TmBlockConfig> {
    let config = TmBlockConfig::default();
    let mut ctx = MockContext::default();

    ctx.deliver(msg_create_mock_client(&mock_client_id(0), height(TM_HEIGHT)))
        .unwrap();
    ctx.deliver(msg_update_mock_client(
        &mock_client_id(0),
        honest_mock_header(),
    ))
    .unwrap();

    ctx.deliver(msg_create_tm_client(
        &tm_client_id(0),
        config.consensus_state(TM_HEIGHT),
    ))
    .unwrap();
    ctx.deliver(msg_update_tm_client(
        &tm_client_id(0),
        config.header(EVIDENCE_HEIGHT, TM_HEIGHT),
    ))
    .unwrap();

    Fixture { ctx, msg: config }
}

/// Delivers evidence that must be rejected, and checks that the host state
/// is left untouched.
fn deliver_failing(ctx: &mut MockContext, msg: ClientMsgRef<MockContext>) -> ContextError {
    let before = ctx.ibc_store();

    let err = ctx.deliver(msg).unwrap_err();

    assert_eq!(ctx.ibc_store(), before);

    err
}

#[rstest]
fn test_misbehaviour_mock_client_ok(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, .. } = fixture;
    let client_id = mock_client_id(0);
    let consensus_heights_before = ctx.ibc_store().consensus_state_heights(&client_id);

    let outcome = ctx
        .deliver(msg_mock_misbehaviour(
            &client_id,
            forked_mock_header(),
            honest_mock_header(),
        ))
        .unwrap();

    assert_eq!(
        outcome,
        ClientMsgOutcome::Misbehaviour(MisbehaviourOutcome::Frozen {
            frozen_height: height(EVIDENCE_HEIGHT)
        })
    );

    let client_state = ctx.client_state_of(&client_id).unwrap();
    assert_eq!(client_state.frozen_height(), Some(height(EVIDENCE_HEIGHT)));
    assert_eq!(client_state.latest_height(), height(EVIDENCE_HEIGHT));
    assert_eq!(
        ctx.ibc_store().consensus_state_heights(&client_id),
        consensus_heights_before
    );
}

#[rstest]
fn test_misbehaviour_events(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, .. } = fixture;
    let client_id = mock_client_id(0);

    ctx.deliver(msg_mock_misbehaviour(
        &client_id,
        forked_mock_header(),
        honest_mock_header(),
    ))
    .unwrap();

    let events = ctx.events();
    assert_eq!(
        events[events.len() - 2..],
        [
            IbcEvent::Message(MessageEvent::Client),
            IbcEvent::ClientMisbehaviour(ClientMisbehaviourEvent::new(
                client_id,
                mock_client_type(),
                height(EVIDENCE_HEIGHT)
            )),
        ]
    );
    assert_eq!(
        ctx.logs().last().unwrap(),
        "client 9999-mock-0 frozen due to misbehaviour"
    );
}

#[rstest]
fn test_misbehaviour_without_conflict(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, .. } = fixture;
    let before = ctx.ibc_store();

    let outcome = ctx
        .deliver(msg_mock_misbehaviour(
            &mock_client_id(0),
            honest_mock_header(),
            honest_mock_header(),
        ))
        .unwrap();

    assert_eq!(
        outcome,
        ClientMsgOutcome::Misbehaviour(MisbehaviourOutcome::NotMisbehaviour)
    );
    assert_eq!(ctx.ibc_store(), before);
}

#[rstest]
fn test_misbehaviour_contradicting_trusted_snapshot(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, .. } = fixture;

    // both headers agree with each other, but not with what the client trusts
    let outcome = ctx
        .deliver(msg_mock_misbehaviour(
            &mock_client_id(0),
            forked_mock_header(),
            forked_mock_header(),
        ))
        .unwrap();

    assert!(matches!(
        outcome,
        ClientMsgOutcome::Misbehaviour(MisbehaviourOutcome::Frozen { .. })
    ));
}

#[rstest]
fn test_submit_misbehaviour_nonexisting_client(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, .. } = fixture;

    let err = deliver_failing(
        &mut ctx,
        msg_mock_misbehaviour(&mock_client_id(7), forked_mock_header(), honest_mock_header()),
    );

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::ClientStateNotFound { .. })
    ));
}

#[test]
fn test_submit_misbehaviour_client_without_type() {
    let client_id = mock_client_id(0);
    let mut ctx = MockContext::default()
        .with_client_state(&client_id, MockClientState::new(honest_mock_header()).into());

    let err = deliver_failing(
        &mut ctx,
        msg_mock_misbehaviour(&client_id, forked_mock_header(), honest_mock_header()),
    );

    assert!(err.is_fatal());
}

#[rstest]
fn test_submit_misbehaviour_of_foreign_type(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, msg: config } = fixture;
    let misbehaviour = config.misbehaviour(&mock_client_id(0), EVIDENCE_HEIGHT, TM_HEIGHT);

    let err = deliver_failing(&mut ctx, msg_tm_misbehaviour(misbehaviour));

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::MismatchedClientType { expected, actual, .. })
            if expected == mock_client_type() && actual == tm_client_type()
    ));
}

#[rstest]
fn test_submit_misbehaviour_frozen_client(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, .. } = fixture;
    let client_id = mock_client_id(0);

    ctx.deliver(msg_mock_misbehaviour(
        &client_id,
        forked_mock_header(),
        honest_mock_header(),
    ))
    .unwrap();

    let err = deliver_failing(
        &mut ctx,
        msg_mock_misbehaviour(&client_id, forked_mock_header(), honest_mock_header()),
    );

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::ClientFrozen { .. })
    ));
}

#[rstest]
fn test_submit_misbehaviour_without_anchor(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, .. } = fixture;
    let header = MockHeader::new(height(EVIDENCE_HEIGHT + 5));

    let err = deliver_failing(
        &mut ctx,
        msg_mock_misbehaviour(
            &mock_client_id(0),
            header.with_timestamp((year_2023() + Duration::from_secs(1)).unwrap()),
            header,
        ),
    );

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::ConsensusStateNotFound { height: h, .. })
            if h == height(EVIDENCE_HEIGHT + 5)
    ));
}

#[rstest]
fn test_submit_misbehaviour_without_strategy(fixture: Fixture<TmBlockConfig>) {
    let Fixture { ctx, .. } = fixture;
    let mut ctx = ctx.without_light_client(mock_client_type());

    let err = deliver_failing(
        &mut ctx,
        msg_mock_misbehaviour(&mock_client_id(0), forked_mock_header(), honest_mock_header()),
    );

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::UnrecognizedMisbehaviourType { .. })
    ));
}

#[rstest]
fn test_submit_malformed_misbehaviour(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, .. } = fixture;

    // header1 must be the higher of the two
    let err = deliver_failing(
        &mut ctx,
        msg_mock_misbehaviour(
            &mock_client_id(0),
            honest_mock_header(),
            MockHeader::new(height(EVIDENCE_HEIGHT + 1)),
        ),
    );

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::FailedMisbehaviourVerification { .. })
    ));
}

#[rstest]
fn test_misbehaviour_verifies_evidence_once(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, msg: config } = fixture;
    let lookups = ctx.strategy_lookups();

    ctx.deliver(msg_tm_misbehaviour(config.misbehaviour(
        &tm_client_id(0),
        EVIDENCE_HEIGHT,
        TM_HEIGHT,
    )))
    .unwrap();

    assert_eq!(ctx.strategy_lookups(), lookups + 1);
}

#[rstest]
fn test_misbehaviour_synthetic_tendermint_equivocation(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, msg: config } = fixture;
    let client_id = tm_client_id(0);
    let latest_height = ctx.client_state_of(&client_id).unwrap().latest_height();

    let outcome = ctx
        .deliver(msg_tm_misbehaviour(config.misbehaviour(
            &client_id,
            EVIDENCE_HEIGHT,
            TM_HEIGHT,
        )))
        .unwrap();

    assert_eq!(
        outcome,
        ClientMsgOutcome::Misbehaviour(MisbehaviourOutcome::Frozen {
            frozen_height: config.height(EVIDENCE_HEIGHT)
        })
    );

    let client_state = ctx.client_state_of(&client_id).unwrap();
    assert!(client_state.is_frozen());
    assert_eq!(client_state.latest_height(), latest_height);
}

#[rstest]
fn test_misbehaviour_synthetic_tendermint_identical_headers(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, msg: config } = fixture;
    let client_id = tm_client_id(0);
    let header = config.header(EVIDENCE_HEIGHT, TM_HEIGHT);

    let outcome = ctx
        .deliver(msg_tm_misbehaviour(TmMisbehaviour::new(
            client_id.clone(),
            header.clone(),
            header,
        )))
        .unwrap();

    assert_eq!(
        outcome,
        ClientMsgOutcome::Misbehaviour(MisbehaviourOutcome::NotMisbehaviour)
    );
    assert!(!ctx.client_state_of(&client_id).unwrap().is_frozen());
}

#[rstest]
fn test_misbehaviour_synthetic_tendermint_contradicting_snapshot(
    fixture: Fixture<TmBlockConfig>,
) {
    let Fixture { mut ctx, msg: config } = fixture;
    let client_id = tm_client_id(0);
    let forked_timestamp =
        (config.timestamp_at(EVIDENCE_HEIGHT) + Duration::from_secs(1)).unwrap();
    let forked_header = config.header_at_time(EVIDENCE_HEIGHT, TM_HEIGHT, forked_timestamp);

    let outcome = ctx
        .deliver(msg_tm_misbehaviour(TmMisbehaviour::new(
            client_id.clone(),
            forked_header.clone(),
            forked_header,
        )))
        .unwrap();

    assert!(matches!(
        outcome,
        ClientMsgOutcome::Misbehaviour(MisbehaviourOutcome::Frozen { .. })
    ));
}

#[rstest]
fn test_misbehaviour_synthetic_tendermint_other_chain(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, .. } = fixture;
    let other_chain = TmBlockConfig::builder()
        .chain_id("chainC-0".parse().unwrap())
        .build();

    let err = deliver_failing(
        &mut ctx,
        msg_tm_misbehaviour(other_chain.misbehaviour(
            &tm_client_id(0),
            EVIDENCE_HEIGHT,
            TM_HEIGHT,
        )),
    );

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::FailedMisbehaviourVerification { .. })
    ));
}
