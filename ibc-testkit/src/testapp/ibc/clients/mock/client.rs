//! Implements the `LightClient` strategy for the mock chain.

use core::time::Duration;

use ibc_lc_core::client::context::prelude::*;
use ibc_lc_core::client::types::error::ClientError;
use ibc_lc_core::host::types::identifiers::{ClientId, ClientType};
use ibc_lc_core::primitives::prelude::*;

use crate::testapp::ibc::clients::mock::client_state::{
    client_type as mock_client_type, MockClientState,
};
use crate::testapp::ibc::clients::mock::consensus_state::MockConsensusState;
use crate::testapp::ibc::clients::mock::error::MockClientError;
use crate::testapp::ibc::clients::mock::header::MockHeader;
use crate::testapp::ibc::clients::mock::misbehaviour::MockMisbehaviour;

/// The mock strategy. It trusts every header that moves the client forward
/// within its trusting period.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockClient {
    pub trusting_period: Duration,
}

impl Default for MockClient {
    fn default() -> Self {
        Self {
            trusting_period: Duration::from_secs(64000),
        }
    }
}

fn downcast<T, C>(value: &C) -> Result<T, ClientError>
where
    C: Clone,
    T: TryFrom<C>,
    <T as TryFrom<C>>::Error: Into<ClientError>,
{
    T::try_from(value.clone()).map_err(Into::into)
}

impl MockClient {
    /// Checks that the trusted snapshot is still within the trusting period
    /// at the host's current time.
    fn check_trusted<V>(
        &self,
        ctx: &V,
        client_state: &MockClientState,
        trusted: &MockConsensusState,
    ) -> Result<(), ClientError>
    where
        V: ExtClientValidationContext,
    {
        let host_timestamp = ctx.host_timestamp()?;

        let elapsed = host_timestamp.duration_since(&trusted.timestamp).ok_or(
            MockClientError::TrustedStateInFuture {
                trusted_timestamp: trusted.timestamp,
                host_timestamp,
            },
        )?;

        if client_state.expired(elapsed) {
            return Err(MockClientError::TrustedStateExpired {
                elapsed,
                trusting_period: client_state.trusting_period,
            }
            .into());
        }

        Ok(())
    }
}

impl<V> LightClient<V> for MockClient
where
    V: ExtClientValidationContext,
    MockClientState: Convertible<V::ClientStateRef>,
    MockConsensusState: Convertible<V::ConsensusStateRef>,
    <MockClientState as TryFrom<V::ClientStateRef>>::Error: Into<ClientError>,
    <MockConsensusState as TryFrom<V::ConsensusStateRef>>::Error: Into<ClientError>,
{
    type Header = MockHeader;
    type Misbehaviour = MockMisbehaviour;

    fn client_type(&self) -> ClientType {
        mock_client_type()
    }

    fn initialise(
        &self,
        consensus_state: &V::ConsensusStateRef,
    ) -> Result<V::ClientStateRef, ClientError> {
        let consensus_state: MockConsensusState = downcast(consensus_state)?;

        let header = MockHeader::new(consensus_state.height)
            .with_timestamp(consensus_state.timestamp);

        Ok(MockClientState::new(header)
            .with_trusting_period(self.trusting_period)
            .into())
    }

    fn verify_header(
        &self,
        ctx: &V,
        _client_id: &ClientId,
        client_state: &V::ClientStateRef,
        trusted_consensus_state: &V::ConsensusStateRef,
        header: &Self::Header,
    ) -> Result<(V::ClientStateRef, V::ConsensusStateRef), ClientError> {
        let client_state: MockClientState = downcast(client_state)?;
        let trusted: MockConsensusState = downcast(trusted_consensus_state)?;

        let latest_height = client_state.latest_height();
        if header.height <= latest_height {
            return Err(MockClientError::StaleHeader {
                header_height: header.height,
                latest_height,
            }
            .into());
        }

        if header.timestamp < trusted.timestamp {
            return Err(MockClientError::HeaderBeforeTrustedState {
                header_timestamp: header.timestamp,
                trusted_timestamp: trusted.timestamp,
            }
            .into());
        }

        self.check_trusted(ctx, &client_state, &trusted)?;

        Ok((
            client_state.with_header(*header).into(),
            MockConsensusState::new(*header).into(),
        ))
    }

    fn check_misbehaviour(
        &self,
        _ctx: &V,
        _client_id: &ClientId,
        client_state: &V::ClientStateRef,
        anchor_consensus_state: &V::ConsensusStateRef,
        misbehaviour: &Self::Misbehaviour,
    ) -> Result<Option<V::ClientStateRef>, ClientError> {
        let client_state: MockClientState = downcast(client_state)?;
        let anchor: MockConsensusState = downcast(anchor_consensus_state)?;

        if misbehaviour.header1.height < misbehaviour.header2.height {
            return Err(MockClientError::InvalidMisbehaviour {
                description: format!(
                    "header1 at {} must not be lower than header2 at {}",
                    misbehaviour.header1.height, misbehaviour.header2.height
                ),
            }
            .into());
        }

        let contradicts_anchor = MockConsensusState::new(misbehaviour.header1) != anchor;

        let frozen = (misbehaviour.is_conflicting() || contradicts_anchor)
            .then(|| client_state.frozen_at(misbehaviour.height()).into());

        Ok(frozen)
    }
}
