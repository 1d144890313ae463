//! Walks a single client through its whole life: creation, updates, a
//! rejected foreign header, evidence of a fork and the frozen end state.

use core::str::FromStr;

use ibc_lc_core::client::context::client_state::ClientStateCommon;
use ibc_lc_core::client::types::error::ClientError;
use ibc_lc_core::client::types::msgs::{ClientMsgOutcome, MisbehaviourOutcome};
use ibc_lc_core::client::types::{Height, Status};
use ibc_lc_core::handler::types::error::ContextError;
use ibc_lc_core::host::types::identifiers::ClientId;
use ibc_lc_query::core::client::{query_client_status, QueryClientStatusRequest};
use ibc_lc_testkit::context::MockContext;
use ibc_lc_testkit::fixtures::clients::tendermint::TmBlockConfig;
use ibc_lc_testkit::fixtures::core::client::{
    msg_create_tm_client, msg_tm_misbehaviour, msg_update_mock_client, msg_update_tm_client,
    tm_client_id,
};
use ibc_lc_testkit::testapp::ibc::clients::mock::header::MockHeader;
use rstest::*;

const S0: u64 = 10;

#[rstest]
#[test_log::test]
#[case::generated_id(tm_client_id(0))]
#[case::host_chosen_id(ClientId::from_str("chainA").expect("valid client id"))]
fn test_tendermint_client_lifecycle(#[case] client_id: ClientId) {
    let config = TmBlockConfig::default();
    let mut ctx = MockContext::default();

    // 1. create at S0
    let outcome = ctx
        .deliver(msg_create_tm_client(&client_id, config.consensus_state(S0)))
        .unwrap();
    assert_eq!(
        outcome,
        ClientMsgOutcome::Created {
            client_id: client_id.clone(),
            height: config.height(S0)
        }
    );

    // 2. update to S0 + 10
    let outcome = ctx
        .deliver(msg_update_tm_client(&client_id, config.header(S0 + 10, S0)))
        .unwrap();
    assert_eq!(
        outcome,
        ClientMsgOutcome::Updated {
            client_id: client_id.clone(),
            height: config.height(S0 + 10)
        }
    );

    // 3. a header of another consensus type is rejected
    let before = ctx.ibc_store();
    let err = ctx
        .deliver(msg_update_mock_client(
            &client_id,
            MockHeader::new(Height::new(0, S0 + 11).unwrap()),
        ))
        .unwrap_err();
    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::MismatchedClientType { .. })
    ));
    assert_eq!(ctx.ibc_store(), before);

    // 4. evidence of a fork at S0 + 10 freezes the client
    let outcome = ctx
        .deliver(msg_tm_misbehaviour(config.misbehaviour(
            &client_id,
            S0 + 10,
            S0,
        )))
        .unwrap();
    assert_eq!(
        outcome,
        ClientMsgOutcome::Misbehaviour(MisbehaviourOutcome::Frozen {
            frozen_height: config.height(S0 + 10)
        })
    );

    let status = query_client_status(
        &ctx,
        &QueryClientStatusRequest {
            client_id: client_id.clone(),
            query_height: None,
        },
    )
    .unwrap()
    .status;
    assert_eq!(status, Status::Frozen);

    // 5. a frozen client takes no more headers
    let before = ctx.ibc_store();
    let err = ctx
        .deliver(msg_update_tm_client(&client_id, config.header(S0 + 15, S0 + 10)))
        .unwrap_err();
    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::ClientFrozen { frozen_height, .. })
            if frozen_height == config.height(S0 + 10)
    ));
    assert_eq!(ctx.ibc_store(), before);

    let client_state = ctx.client_state_of(&client_id).unwrap();
    assert_eq!(client_state.latest_height(), config.height(S0 + 10));

    let event_types: Vec<_> = ctx
        .events()
        .iter()
        .map(|event| event.event_type().to_string())
        .collect();
    assert_eq!(
        event_types,
        [
            "message",
            "create_client",
            "message",
            "update_client",
            "message",
            "client_misbehaviour"
        ]
    );
}
