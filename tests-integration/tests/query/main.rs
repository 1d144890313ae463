//! Read-only accessors over the committed states of a host.

use core::time::Duration;

use ibc_lc_core::client::context::client_state::ClientStateCommon;
use ibc_lc_core::client::types::error::ClientError;
use ibc_lc_core::client::types::{Height, Status};
use ibc_lc_core::handler::types::error::ContextError;
use ibc_lc_query::core::client::{
    query_client_state, query_client_states, query_consensus_state,
    query_consensus_state_heights, query_consensus_states, query_client_status,
    QueryClientStateRequest, QueryClientStatesRequest, QueryClientStatusRequest,
    QueryConsensusStateHeightsRequest, QueryConsensusStateRequest, QueryConsensusStatesRequest,
};
use ibc_lc_query::error::QueryError;
use ibc_lc_testkit::context::MockContext;
use ibc_lc_testkit::fixtures::clients::tendermint::TmBlockConfig;
use ibc_lc_testkit::fixtures::core::client::{
    mock_client_id, msg_create_mock_client, msg_create_tm_client, msg_mock_misbehaviour,
    msg_update_mock_client, tm_client_id,
};
use ibc_lc_testkit::testapp::ibc::clients::mock::client_state::client_type as mock_client_type;
use ibc_lc_testkit::testapp::ibc::clients::mock::header::MockHeader;
use ibc_lc_testkit::testapp::ibc::clients::AnyConsensusState;
use ibc_lc_testkit::utils::year_2023;
use rstest::*;

fn height(revision_height: u64) -> Height {
    Height::new(0, revision_height).unwrap()
}

/// The host starts at height 5. The mock client is created at height 42
/// while the host is at 5, then updated to 50 while the host is at 6.
/// The Tendermint client is created while the host is at 7.
#[fixture]
fn ctx() -> MockContext {
    let mut ctx = MockContext::default();

    ctx.deliver(msg_create_mock_client(&mock_client_id(0), height(42)))
        .unwrap();
    ctx.deliver(msg_update_mock_client(
        &mock_client_id(0),
        MockHeader::new(height(50)),
    ))
    .unwrap();
    ctx.deliver(msg_create_tm_client(
        &tm_client_id(0),
        TmBlockConfig::default().consensus_state(10),
    ))
    .unwrap();

    ctx
}

#[rstest]
#[test_log::test]
#[case(None, 50)]
#[case(Some(8), 50)]
#[case(Some(7), 50)]
#[case(Some(6), 42)]
fn test_query_client_state(
    ctx: MockContext,
    #[case] query_height: Option<u64>,
    #[case] expected_height: u64,
) {
    let response = query_client_state(
        &ctx,
        &QueryClientStateRequest {
            client_id: mock_client_id(0),
            query_height: query_height.map(height),
        },
    )
    .unwrap();

    assert_eq!(response.client_state.latest_height(), height(expected_height));
    assert_eq!(response.client_type, mock_client_type());
    assert_eq!(
        response.query_height,
        query_height.map(height).unwrap_or(ctx.latest_height())
    );
}

#[rstest]
#[test_log::test]
fn test_query_client_state_before_creation(ctx: MockContext) {
    let res = query_client_state(
        &ctx,
        &QueryClientStateRequest {
            client_id: mock_client_id(0),
            query_height: Some(height(5)),
        },
    );

    assert!(matches!(
        res,
        Err(QueryError::Context(ContextError::ClientError(
            ClientError::ClientStateNotFound { .. }
        )))
    ));
}

#[rstest]
#[test_log::test]
#[case::pruned(2)]
#[case::not_yet_produced(9)]
fn test_query_missing_snapshot(ctx: MockContext, #[case] query_height: u64) {
    let res = query_client_states(
        &ctx,
        &QueryClientStatesRequest {
            query_height: Some(height(query_height)),
        },
    );

    assert!(matches!(
        res,
        Err(QueryError::SnapshotNotFound { height: h }) if h == height(query_height)
    ));
}

#[rstest]
#[test_log::test]
fn test_query_client_states(ctx: MockContext) {
    let latest = query_client_states(&ctx, &QueryClientStatesRequest::default()).unwrap();
    let client_ids: Vec<_> = latest
        .client_states
        .iter()
        .map(|identified| identified.client_id.clone())
        .collect();

    assert_eq!(client_ids, vec![tm_client_id(0), mock_client_id(0)]);

    let earlier = query_client_states(
        &ctx,
        &QueryClientStatesRequest {
            query_height: Some(height(7)),
        },
    )
    .unwrap();

    assert_eq!(earlier.client_states.len(), 1);
    assert_eq!(earlier.client_states[0].client_id, mock_client_id(0));
}

#[rstest]
#[test_log::test]
#[case(None, 50)]
#[case(Some(42), 42)]
fn test_query_consensus_state(
    ctx: MockContext,
    #[case] consensus_height: Option<u64>,
    #[case] expected_height: u64,
) {
    let response = query_consensus_state(
        &ctx,
        &QueryConsensusStateRequest {
            client_id: mock_client_id(0),
            consensus_height: consensus_height.map(height),
            query_height: None,
        },
    )
    .unwrap();

    assert_eq!(response.consensus_height, height(expected_height));
    assert!(matches!(
        response.consensus_state,
        AnyConsensusState::Mock(consensus_state) if consensus_state.height == height(expected_height)
    ));
}

#[rstest]
#[test_log::test]
fn test_query_missing_consensus_state(ctx: MockContext) {
    let res = query_consensus_state(
        &ctx,
        &QueryConsensusStateRequest {
            client_id: mock_client_id(0),
            consensus_height: Some(height(45)),
            query_height: None,
        },
    );

    assert!(matches!(
        res,
        Err(QueryError::Context(ContextError::ClientError(
            ClientError::ConsensusStateNotFound { height: h, .. }
        ))) if h == height(45)
    ));
}

#[rstest]
#[test_log::test]
fn test_query_consensus_states_and_heights(ctx: MockContext) {
    let client_id = mock_client_id(0);

    let states = query_consensus_states(
        &ctx,
        &QueryConsensusStatesRequest {
            client_id: client_id.clone(),
            query_height: None,
        },
    )
    .unwrap();
    let heights = query_consensus_state_heights(
        &ctx,
        &QueryConsensusStateHeightsRequest {
            client_id: client_id.clone(),
            query_height: None,
        },
    )
    .unwrap();

    assert_eq!(heights.consensus_state_heights, vec![height(42), height(50)]);
    assert_eq!(
        states
            .consensus_states
            .iter()
            .map(|state| state.height)
            .collect::<Vec<_>>(),
        heights.consensus_state_heights
    );

    let earlier = query_consensus_state_heights(
        &ctx,
        &QueryConsensusStateHeightsRequest {
            client_id,
            query_height: Some(height(6)),
        },
    )
    .unwrap();

    assert_eq!(earlier.consensus_state_heights, vec![height(42)]);
}

#[rstest]
#[test_log::test]
fn test_query_client_status(mut ctx: MockContext) {
    let client_id = mock_client_id(0);
    let header = MockHeader::new(height(50));

    ctx.deliver(msg_mock_misbehaviour(
        &client_id,
        header.with_timestamp((year_2023() + Duration::from_secs(1)).unwrap()),
        header,
    ))
    .unwrap();

    let status_at = |query_height: Option<Height>| {
        query_client_status(
            &ctx,
            &QueryClientStatusRequest {
                client_id: client_id.clone(),
                query_height,
            },
        )
        .unwrap()
        .status
    };

    assert_eq!(status_at(None), Status::Frozen);
    assert_eq!(status_at(Some(height(8))), Status::Active);
}

#[rstest]
#[test_log::test]
fn test_queries_do_not_mutate(ctx: MockContext) {
    let before = ctx.ibc_store();
    let height_before = ctx.latest_height();

    query_client_states(&ctx, &QueryClientStatesRequest::default()).unwrap();
    query_consensus_state(
        &ctx,
        &QueryConsensusStateRequest {
            client_id: tm_client_id(0),
            consensus_height: None,
            query_height: None,
        },
    )
    .unwrap();

    assert_eq!(ctx.ibc_store(), before);
    assert_eq!(ctx.latest_height(), height_before);
}
