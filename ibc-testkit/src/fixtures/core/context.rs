use alloc::sync::Arc;
use core::cmp::min;
use core::str::FromStr;
use core::sync::atomic::AtomicU64;
use core::time::Duration;

use ibc_lc_core::client::types::Height;
use ibc_lc_core::host::types::identifiers::ChainId;
use ibc_lc_core::primitives::prelude::*;
use ibc_lc_core::primitives::Timestamp;
use ibc_lc_tendermint::TendermintClient;
use parking_lot::Mutex;
use typed_builder::TypedBuilder;

use crate::context::MockContext;
use crate::hosts::HostBlock;
use crate::testapp::ibc::clients::mock::client::MockClient;
use crate::testapp::ibc::core::types::{MockIbcStore, DEFAULT_BLOCK_TIME};
use crate::utils::year_2023;

/// Configuration for a `MockContext` type.
#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = MockContext))]
pub struct MockContextConfig {
    #[builder(default = ChainId::from_str("mockgaia-0").expect("Never fails"))]
    host_id: ChainId,

    #[builder(default = DEFAULT_BLOCK_TIME)]
    block_time: Duration,

    #[builder(default = 5)]
    max_history_size: u64,

    #[builder(default = Height::new(0, 5).expect("Never fails"))]
    latest_height: Height,

    #[builder(default = year_2023())]
    latest_timestamp: Timestamp,

    #[builder(default)]
    tendermint_client: TendermintClient,

    #[builder(default)]
    mock_client: MockClient,
}

impl From<MockContextConfig> for MockContext {
    fn from(params: MockContextConfig) -> Self {
        assert_ne!(
            params.max_history_size, 0,
            "The chain must have a non-zero max_history_size"
        );

        assert_ne!(
            params.latest_height.revision_height(),
            0,
            "The chain must have a non-zero revision_height"
        );

        assert_eq!(
            params.host_id.revision_number(),
            params.latest_height.revision_number(),
            "The version in the chain identifier must match the version in the latest height"
        );

        // Compute the number of blocks to store.
        let n = min(
            params.max_history_size,
            params.latest_height.revision_height(),
        );

        // generate blocks with timestamps -> N, N - BT, N - 2BT, ...
        // where N = latest_timestamp, BT = block_time
        let history: Vec<HostBlock> = (0..n)
            .rev()
            .map(|i| {
                HostBlock::new(
                    Height::new(
                        params.latest_height.revision_number(),
                        params.latest_height.revision_height() - i,
                    )
                    .expect("Never fails"),
                    (params.latest_timestamp
                        - params.block_time * u32::try_from(i).expect("no overflow"))
                    .expect("Never fails"),
                )
            })
            .collect();

        // nothing was delivered before the latest block, so every retained
        // height committed an empty store
        let committed = history
            .iter()
            .map(|block| (block.height(), MockIbcStore::default()))
            .collect();

        MockContext {
            host_chain_id: params.host_id,
            max_history_size: params.max_history_size,
            history,
            block_time: params.block_time,
            tendermint_client: params.tendermint_client,
            mock_client: params.mock_client,
            ibc_store: Arc::new(Mutex::new(MockIbcStore::default())),
            committed,
            failing_sink: false,
            failing_consensus_store: false,
            disabled_light_clients: Vec::new(),
            strategy_lookups: Arc::new(AtomicU64::new(0)),
        }
    }
}
