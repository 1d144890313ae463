//! Implements the `LightClient` strategy for Tendermint chains.

use core::time::Duration;

use ibc_lc_client_context::prelude::*;
use ibc_lc_client_types::error::ClientError;
use ibc_lc_host_types::identifiers::{ClientId, ClientType};
use ibc_lc_tendermint_types::error::TendermintClientError;
use ibc_lc_tendermint_types::{
    client_type as tm_client_type, ClientState as ClientStateType,
    ConsensusState as ConsensusStateType, Header as TmHeader, Misbehaviour as TmMisbehaviour,
    TrustThreshold,
};
use tendermint::crypto::default::Sha256;

use crate::verifier::DefaultVerifier;

mod misbehaviour;
mod update_client;

pub use misbehaviour::*;
pub use update_client::*;

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// The Tendermint strategy together with the trust parameters it gives the
/// clients it initialises.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TendermintClient {
    pub trust_level: TrustThreshold,
    pub trusting_period: Duration,
    pub unbonding_period: Duration,
    pub max_clock_drift: Duration,
}

impl Default for TendermintClient {
    fn default() -> Self {
        Self {
            trust_level: TrustThreshold::ONE_THIRD,
            trusting_period: 14 * DAY,
            unbonding_period: 21 * DAY,
            max_clock_drift: Duration::from_secs(3),
        }
    }
}

impl TendermintClient {
    /// Derives the initial client state from the first trusted snapshot.
    pub fn client_state_for(
        &self,
        consensus_state: &ConsensusStateType,
    ) -> Result<ClientStateType, TendermintClientError> {
        ClientStateType::new(
            consensus_state.chain_id.clone(),
            self.trust_level,
            self.trusting_period,
            self.unbonding_period,
            self.max_clock_drift,
            consensus_state.height,
        )
    }
}

/// Obtains the Tendermint-specific value from the host's representation.
pub(crate) fn downcast<T, C>(value: &C) -> Result<T, ClientError>
where
    C: Clone,
    T: TryFrom<C>,
    <T as TryFrom<C>>::Error: Into<ClientError>,
{
    T::try_from(value.clone()).map_err(Into::into)
}

impl<V> LightClient<V> for TendermintClient
where
    V: ExtClientValidationContext,
    ClientStateType: Convertible<V::ClientStateRef>,
    ConsensusStateType: Convertible<V::ConsensusStateRef>,
    <ClientStateType as TryFrom<V::ClientStateRef>>::Error: Into<ClientError>,
    <ConsensusStateType as TryFrom<V::ConsensusStateRef>>::Error: Into<ClientError>,
{
    type Header = TmHeader;
    type Misbehaviour = TmMisbehaviour;

    fn client_type(&self) -> ClientType {
        tm_client_type()
    }

    fn initialise(
        &self,
        consensus_state: &V::ConsensusStateRef,
    ) -> Result<V::ClientStateRef, ClientError> {
        let consensus_state: ConsensusStateType = downcast(consensus_state)?;

        let client_state = self.client_state_for(&consensus_state)?;

        Ok(client_state.into())
    }

    fn verify_header(
        &self,
        ctx: &V,
        client_id: &ClientId,
        client_state: &V::ClientStateRef,
        trusted_consensus_state: &V::ConsensusStateRef,
        header: &Self::Header,
    ) -> Result<(V::ClientStateRef, V::ConsensusStateRef), ClientError> {
        let client_state: ClientStateType = downcast(client_state)?;
        let trusted_consensus_state: ConsensusStateType = downcast(trusted_consensus_state)?;

        let (client_state, consensus_state) = verify_header::<V, Sha256>(
            ctx,
            client_id,
            &client_state,
            &trusted_consensus_state,
            header,
            &DefaultVerifier,
        )?;

        Ok((client_state.into(), consensus_state.into()))
    }

    fn check_misbehaviour(
        &self,
        ctx: &V,
        client_id: &ClientId,
        client_state: &V::ClientStateRef,
        anchor_consensus_state: &V::ConsensusStateRef,
        misbehaviour: &Self::Misbehaviour,
    ) -> Result<Option<V::ClientStateRef>, ClientError> {
        let client_state: ClientStateType = downcast(client_state)?;
        let anchor_consensus_state: ConsensusStateType = downcast(anchor_consensus_state)?;

        verify_misbehaviour::<V, Sha256>(ctx, client_id, &client_state, misbehaviour, &DefaultVerifier)?;

        let frozen = check_for_misbehaviour(&anchor_consensus_state, misbehaviour)?
            .then(|| client_state.with_frozen_height(misbehaviour.height()).into());

        Ok(frozen)
    }
}
