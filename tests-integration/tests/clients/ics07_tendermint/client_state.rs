use core::time::Duration;

use ibc_lc_core::client::types::error::ClientError;
use ibc_lc_core::handler::types::error::ContextError;
use ibc_lc_tendermint::types::TrustThreshold;
use ibc_lc_tendermint::TendermintClient;
use ibc_lc_testkit::context::MockContext;
use ibc_lc_testkit::fixtures::clients::tendermint::TmBlockConfig;
use ibc_lc_testkit::fixtures::core::client::{msg_create_tm_client, tm_client_id};
use ibc_lc_testkit::fixtures::core::context::MockContextConfig;
use ibc_lc_testkit::testapp::ibc::clients::AnyClientState;
use rstest::*;

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

fn create_with(tendermint_client: TendermintClient) -> Result<MockContext, ContextError> {
    let mut ctx: MockContext = MockContextConfig::builder()
        .tendermint_client(tendermint_client)
        .build();

    ctx.deliver(msg_create_tm_client(
        &tm_client_id(0),
        TmBlockConfig::default().consensus_state(10),
    ))?;

    Ok(ctx)
}

#[test_log::test]
fn test_client_state_carries_host_trust_parameters() {
    let tendermint_client = TendermintClient {
        trust_level: TrustThreshold::TWO_THIRDS,
        trusting_period: 7 * DAY,
        unbonding_period: 10 * DAY,
        max_clock_drift: Duration::from_secs(10),
    };

    let ctx = create_with(tendermint_client.clone()).unwrap();

    let Some(AnyClientState::Tendermint(client_state)) = ctx.client_state_of(&tm_client_id(0))
    else {
        panic!("tendermint client state expected");
    };

    assert_eq!(client_state.trust_level, tendermint_client.trust_level);
    assert_eq!(client_state.trusting_period, tendermint_client.trusting_period);
    assert_eq!(client_state.unbonding_period, tendermint_client.unbonding_period);
    assert_eq!(client_state.max_clock_drift, tendermint_client.max_clock_drift);
}

#[rstest]
#[test_log::test]
#[case::trusting_period_past_unbonding(TendermintClient {
    trusting_period: 30 * DAY,
    ..Default::default()
})]
#[case::no_clock_drift(TendermintClient {
    max_clock_drift: Duration::ZERO,
    ..Default::default()
})]
fn test_invalid_trust_parameters_fail_initialisation(#[case] tendermint_client: TendermintClient) {
    let err = create_with(tendermint_client).unwrap_err();

    assert!(matches!(
        err,
        ContextError::ClientError(ClientError::FailedInitialisation { .. })
    ));
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test_log::test]
    fn strategy_parameters_load_from_config() {
        let tendermint_client: TendermintClient = serde_json::from_str(
            r#"{"trusting_period":{"secs":604800,"nanos":0},"unbonding_period":{"secs":864000,"nanos":0}}"#,
        )
        .unwrap();

        assert_eq!(tendermint_client.trusting_period, 7 * DAY);
        assert_eq!(tendermint_client.unbonding_period, 10 * DAY);
        assert_eq!(tendermint_client.trust_level, TrustThreshold::ONE_THIRD);

        assert!(create_with(tendermint_client).is_ok());
    }
}
