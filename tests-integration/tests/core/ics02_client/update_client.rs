use core::time::Duration;

use ibc_lc_core::client::context::client_state::ClientStateCommon;
use ibc_lc_core::client::context::ClientValidationContext;
use ibc_lc_core::client::types::error::ClientError;
use ibc_lc_core::client::types::events::UpdateClient;
use ibc_lc_core::client::types::msgs::ClientMsgOutcome;
use ibc_lc_core::client::types::Height;
use ibc_lc_core::entrypoint::validate;
use ibc_lc_core::handler::types::error::ContextError;
use ibc_lc_core::handler::types::events::{IbcEvent, MessageEvent};
use ibc_lc_core::host::types::identifiers::ClientId;
use ibc_lc_core::host::ClientMsgRef;
use ibc_lc_core::primitives::Timestamp;
use ibc_lc_tendermint::types::client_type as tm_client_type;
use ibc_lc_tendermint::TendermintClient;
use ibc_lc_testkit::context::MockContext;
use ibc_lc_testkit::fixtures::clients::tendermint::TmBlockConfig;
use ibc_lc_testkit::fixtures::core::client::{
    mock_client_id, msg_create_mock_client, msg_create_tm_client, msg_update_mock_client,
    msg_update_tm_client, tm_client_id,
};
use ibc_lc_testkit::fixtures::core::context::MockContextConfig;
use ibc_lc_testkit::fixtures::Fixture;
use ibc_lc_testkit::testapp::ibc::clients::mock::client_state::{
    client_type as mock_client_type, MockClientState,
};
use ibc_lc_testkit::testapp::ibc::clients::mock::header::MockHeader;
use rstest::*;

const MOCK_HEIGHT: u64 = 42;
const TM_HEIGHT: u64 = 10;

fn mock_height(revision_height: u64) -> Height {
    Height::new(0, revision_height).unwrap()
}

/// A host with a mock client created at `MOCK_HEIGHT` and a Tendermint
/// client created at `TM_HEIGHT`.
#[fixture]
fn fixture() -> Fixture<TmBlockConfig> {
    let config = TmBlockConfig::default();
    let mut ctx = MockContext::default();

    ctx.deliver(msg_create_mock_client(
        &mock_client_id(0),
        mock_height(MOCK_HEIGHT),
    ))
    .unwrap();
    ctx.deliver(msg_create_tm_client(
        &tm_client_id(0),
        config.consensus_state(TM_HEIGHT),
    ))
    .unwrap();

    Fixture { ctx, msg: config }
}

/// Delivers a message that must be rejected, and checks that the host state
/// is left untouched.
fn deliver_failing(ctx: &mut MockContext, msg: ClientMsgRef<MockContext>) -> ContextError {
    let before = ctx.ibc_store();
    let height_before = ctx.latest_height();

    let err = ctx.deliver(msg).unwrap_err();

    assert_eq!(ctx.ibc_store(), before);
    assert_eq!(ctx.latest_height(), height_before);

    err
}

#[rstest]
#[test_log::test]
fn test_update_client_ok(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, .. } = fixture;
    let client_id = mock_client_id(0);
    let height = mock_height(50);
    let host_timestamp = ctx.latest_timestamp();
    let host_height = ctx.latest_height();

    let outcome = ctx
        .deliver(msg_update_mock_client(&client_id, MockHeader::new(height)))
        .unwrap();

    assert_eq!(
        outcome,
        ClientMsgOutcome::Updated {
            client_id: client_id.clone(),
            height
        }
    );
    assert_eq!(
        ctx.client_state_of(&client_id).unwrap().latest_height(),
        height
    );
    assert!(ctx.consensus_state_of(&client_id, height).is_some());
    assert_eq!(
        ctx.client_update_meta(&client_id, &height).unwrap(),
        Some((host_timestamp, host_height))
    );
}

#[rstest]
#[test_log::test]
fn test_update_client_events(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, .. } = fixture;
    let client_id = mock_client_id(0);
    let height = mock_height(50);

    ctx.deliver(msg_update_mock_client(&client_id, MockHeader::new(height)))
        .unwrap();

    let events = ctx.events();
    assert_eq!(
        events[0],
        IbcEvent::Message(MessageEvent::Client),
        "every transition starts with the message event"
    );
    assert!(matches!(events[1], IbcEvent::CreateClient(_)));
    assert_eq!(
        events[events.len() - 2..],
        [
            IbcEvent::Message(MessageEvent::Client),
            IbcEvent::UpdateClient(UpdateClient::new(
                client_id,
                mock_client_type(),
                height
            )),
        ]
    );
    assert_eq!(
        ctx.logs().last().unwrap(),
        "client 9999-mock-0 updated to height 0-50"
    );
}

#[rstest]
#[test_log::test]
#[case(&[43, 44, 45])]
#[case(&[43, 50, 1000])]
fn test_update_client_heights_never_decrease(
    fixture: Fixture<TmBlockConfig>,
    #[case] heights: &[u64],
) {
    let Fixture { mut ctx, .. } = fixture;
    let client_id = mock_client_id(0);

    let mut latest = mock_height(MOCK_HEIGHT);
    for &h in heights {
        ctx.deliver(msg_update_mock_client(
            &client_id,
            MockHeader::new(mock_height(h)),
        ))
        .unwrap();

        let client_state = ctx.client_state_of(&client_id).unwrap();
        assert!(client_state.latest_height() >= latest);
        assert!(!client_state.is_frozen());
        latest = client_state.latest_height();
    }

    assert_eq!(latest, mock_height(*heights.last().unwrap()));
}

#[rstest]
#[test_log::test]
fn test_update_nonexisting_client(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, .. } = fixture;
    let client_id = mock_client_id(5);

    let err = deliver_failing(
        &mut ctx,
        msg_update_mock_client(&client_id, MockHeader::new(mock_height(50))),
    );

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::ClientTypeNotFound { client_id: id }) if id == client_id
    ));
}

#[test_log::test]
fn test_update_client_without_state() {
    let client_id = mock_client_id(0);
    let mut ctx = MockContext::default().with_client_type(&client_id, mock_client_type());

    let err = deliver_failing(
        &mut ctx,
        msg_update_mock_client(&client_id, MockHeader::new(mock_height(50))),
    );

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::ClientStateNotFound { .. })
    ));
}

#[rstest]
#[test_log::test]
fn test_update_client_with_foreign_header(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, msg: config } = fixture;
    let client_id = mock_client_id(0);

    let err = deliver_failing(
        &mut ctx,
        msg_update_tm_client(&client_id, config.header(TM_HEIGHT + 1, TM_HEIGHT)),
    );

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::MismatchedClientType { expected, actual, .. })
            if expected == mock_client_type() && actual == tm_client_type()
    ));
}

#[test_log::test]
fn test_update_frozen_client() {
    let client_id = mock_client_id(0);
    let header = MockHeader::new(mock_height(MOCK_HEIGHT));
    let mut ctx = MockContext::default()
        .with_client_type(&client_id, mock_client_type())
        .with_client_state(
            &client_id,
            MockClientState::new(header)
                .frozen_at(mock_height(MOCK_HEIGHT))
                .into(),
        );

    let err = deliver_failing(
        &mut ctx,
        msg_update_mock_client(&client_id, MockHeader::new(mock_height(50))),
    );

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::ClientFrozen { frozen_height, .. })
            if frozen_height == mock_height(MOCK_HEIGHT)
    ));
}

#[rstest]
#[test_log::test]
fn test_update_client_without_strategy(fixture: Fixture<TmBlockConfig>) {
    let Fixture { ctx, .. } = fixture;
    let mut ctx = ctx.without_light_client(mock_client_type());

    let err = deliver_failing(
        &mut ctx,
        msg_update_mock_client(&mock_client_id(0), MockHeader::new(mock_height(50))),
    );

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::UnsupportedClientType { .. })
    ));
}

#[rstest]
#[test_log::test]
fn test_update_client_without_trusted_snapshot(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, .. } = fixture;
    let header = MockHeader::new(mock_height(50)).with_trusted_height(mock_height(10));

    let err = deliver_failing(&mut ctx, msg_update_mock_client(&mock_client_id(0), header));

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::ConsensusStateNotFound { height, .. })
            if height == mock_height(10)
    ));
}

#[rstest]
#[test_log::test]
#[case(MOCK_HEIGHT)]
#[case(MOCK_HEIGHT - 1)]
fn test_update_mock_client_with_stale_header(
    fixture: Fixture<TmBlockConfig>,
    #[case] revision_height: u64,
) {
    let Fixture { mut ctx, .. } = fixture;

    let err = deliver_failing(
        &mut ctx,
        msg_update_mock_client(
            &mock_client_id(0),
            MockHeader::new(mock_height(revision_height))
                .with_trusted_height(mock_height(MOCK_HEIGHT)),
        ),
    );

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::FailedHeaderVerification { .. })
    ));
}

#[rstest]
#[test_log::test]
#[case::adjacent(TM_HEIGHT + 1)]
#[case::non_adjacent(TM_HEIGHT + 10)]
fn test_update_tendermint_client_ok(
    fixture: Fixture<TmBlockConfig>,
    #[case] revision_height: u64,
) {
    let Fixture { mut ctx, msg: config } = fixture;
    let client_id = tm_client_id(0);

    let outcome = ctx
        .deliver(msg_update_tm_client(
            &client_id,
            config.header(revision_height, TM_HEIGHT),
        ))
        .unwrap();

    assert_eq!(
        outcome,
        ClientMsgOutcome::Updated {
            client_id: client_id.clone(),
            height: config.height(revision_height)
        }
    );
    assert_eq!(
        ctx.client_state_of(&client_id).unwrap().latest_height(),
        config.height(revision_height)
    );
    assert_eq!(
        ctx.consensus_state_of(&client_id, config.height(revision_height)),
        Some(config.consensus_state(revision_height).into())
    );
}

#[rstest]
#[test_log::test]
fn test_update_tendermint_client_verifies_header_once(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, msg: config } = fixture;
    let msg = msg_update_tm_client(&tm_client_id(0), config.header(TM_HEIGHT + 1, TM_HEIGHT));
    let lookups = ctx.strategy_lookups();

    validate(&ctx, &msg).unwrap();
    assert_eq!(ctx.strategy_lookups(), lookups + 1);

    ctx.deliver(msg).unwrap();
    assert_eq!(ctx.strategy_lookups(), lookups + 2);
}

#[rstest]
#[test_log::test]
fn test_update_tendermint_client_duplicate_ok(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, msg: config } = fixture;
    let client_id = tm_client_id(0);
    let height = config.height(20);
    let header = config.header(20, TM_HEIGHT);

    ctx.deliver(msg_update_tm_client(&client_id, header.clone()))
        .unwrap();
    let update_meta = ctx.client_update_meta(&client_id, &height).unwrap();

    ctx.deliver(msg_update_tm_client(&client_id, header))
        .unwrap();

    assert_eq!(ctx.client_update_meta(&client_id, &height).unwrap(), update_meta);
    assert_eq!(
        ctx.client_state_of(&client_id).unwrap().latest_height(),
        height
    );
    assert_eq!(
        ctx.events()
            .iter()
            .filter(|event| matches!(event, IbcEvent::UpdateClient(_)))
            .count(),
        2
    );
}

#[rstest]
#[test_log::test]
fn test_update_tendermint_client_conflicting_snapshot(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, msg: config } = fixture;
    let client_id = tm_client_id(0);

    ctx.deliver(msg_update_tm_client(&client_id, config.header(20, TM_HEIGHT)))
        .unwrap();

    let forked_timestamp = (config.timestamp_at(20) + Duration::from_secs(1)).unwrap();
    let err = deliver_failing(
        &mut ctx,
        msg_update_tm_client(
            &client_id,
            config.header_at_time(20, TM_HEIGHT, forked_timestamp),
        ),
    );

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::ConflictingConsensusState { height, .. })
            if height == config.height(20)
    ));
}

#[rstest]
#[test_log::test]
fn test_update_tendermint_client_lower_height(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, msg: config } = fixture;
    let client_id = tm_client_id(0);

    ctx.deliver(msg_update_tm_client(&client_id, config.header(20, TM_HEIGHT)))
        .unwrap();

    // a header between two stored snapshots may fill the gap
    ctx.deliver(msg_update_tm_client(&client_id, config.header(15, TM_HEIGHT)))
        .unwrap();

    assert!(ctx
        .consensus_state_of(&client_id, config.height(15))
        .is_some());
    assert_eq!(
        ctx.client_state_of(&client_id).unwrap().latest_height(),
        config.height(20)
    );
}

#[rstest]
#[test_log::test]
fn test_update_tendermint_client_non_monotonic_time(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, msg: config } = fixture;
    let client_id = tm_client_id(0);

    ctx.deliver(msg_update_tm_client(&client_id, config.header(20, TM_HEIGHT)))
        .unwrap();

    let late_timestamp = (config.timestamp_at(20) + Duration::from_secs(1)).unwrap();
    let err = deliver_failing(
        &mut ctx,
        msg_update_tm_client(
            &client_id,
            config.header_at_time(15, TM_HEIGHT, late_timestamp),
        ),
    );

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::FailedHeaderVerification { .. })
    ));
}

#[rstest]
#[test_log::test]
fn test_update_tendermint_client_from_other_chain(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, .. } = fixture;
    let other_chain = TmBlockConfig::builder()
        .chain_id("chainC-0".parse().unwrap())
        .build();

    let err = deliver_failing(
        &mut ctx,
        msg_update_tm_client(&tm_client_id(0), other_chain.header(20, TM_HEIGHT)),
    );

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::FailedHeaderVerification { .. })
    ));
}

#[rstest]
#[test_log::test]
fn test_update_tendermint_client_max_clock_drift(fixture: Fixture<TmBlockConfig>) {
    let Fixture { mut ctx, msg: config } = fixture;
    let future: Timestamp = (ctx.latest_timestamp() + Duration::from_secs(60)).unwrap();

    let err = deliver_failing(
        &mut ctx,
        msg_update_tm_client(
            &tm_client_id(0),
            config.header_at_time(20, TM_HEIGHT, future),
        ),
    );

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::FailedHeaderVerification { .. })
    ));
}

#[test_log::test]
fn test_update_expired_tendermint_client() {
    let config = TmBlockConfig::default();
    let client_id = tm_client_id(0);

    // the counterparty snapshot is a day old, well past an hour of trust
    let mut ctx: MockContext = MockContextConfig::builder()
        .tendermint_client(TendermintClient {
            trusting_period: Duration::from_secs(60 * 60),
            ..Default::default()
        })
        .build();
    ctx.deliver(msg_create_tm_client(
        &client_id,
        config.consensus_state(TM_HEIGHT),
    ))
    .unwrap();

    let err = deliver_failing(
        &mut ctx,
        msg_update_tm_client(&client_id, config.header(20, TM_HEIGHT)),
    );

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::FailedHeaderVerification { client_id: id, .. })
            if id == client_id
    ));
}

#[test_log::test]
fn test_failed_update_rolls_back_partial_writes() {
    let client_id: ClientId = mock_client_id(0);
    let mut ctx = MockContext::default();
    ctx.deliver(msg_create_mock_client(&client_id, mock_height(MOCK_HEIGHT)))
        .unwrap();

    let mut ctx = ctx.with_failing_consensus_store();

    // the new client state is written before the consensus state write fails
    let err = deliver_failing(
        &mut ctx,
        msg_update_mock_client(&client_id, MockHeader::new(mock_height(50))),
    );

    assert!(matches!(
        &err,
        ContextError::ClientStore { client_id: id, .. } if id == &client_id
    ));
    assert!(err.to_string().contains(client_id.as_str()));
    assert_eq!(
        ctx.client_state_of(&client_id).unwrap().latest_height(),
        mock_height(MOCK_HEIGHT)
    );
    assert!(!ctx
        .events()
        .iter()
        .any(|event| matches!(event, IbcEvent::UpdateClient(_))));
    assert!(matches!(ctx.events()[1], IbcEvent::CreateClient(_)));
}
