//! The closed set of light clients the mock host supports, along with the
//! enums its store keeps their states in.

pub mod mock;

use derive_more::From;
use ibc_lc_core::client::context::prelude::*;
use ibc_lc_core::client::types::error::ClientError;
use ibc_lc_core::client::types::Height;
use ibc_lc_core::commitment_types::commitment::CommitmentRoot;
use ibc_lc_core::host::types::identifiers::{ClientId, ClientType};
use ibc_lc_core::primitives::prelude::*;
use ibc_lc_core::primitives::Timestamp;
use ibc_lc_tendermint::types::{
    ClientState as TmClientState, ConsensusState as TmConsensusState, Header as TmHeader,
    Misbehaviour as TmMisbehaviour,
};
use ibc_lc_tendermint::TendermintClient;

use crate::context::MockContext;
use crate::testapp::ibc::clients::mock::client::MockClient;
use crate::testapp::ibc::clients::mock::client_state::MockClientState;
use crate::testapp::ibc::clients::mock::consensus_state::MockConsensusState;
use crate::testapp::ibc::clients::mock::header::MockHeader;
use crate::testapp::ibc::clients::mock::misbehaviour::MockMisbehaviour;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, From, PartialEq)]
pub enum AnyClientState {
    Tendermint(TmClientState),
    Mock(MockClientState),
}

impl ClientStateCommon for AnyClientState {
    fn client_type(&self) -> ClientType {
        match self {
            Self::Tendermint(cs) => cs.client_type(),
            Self::Mock(cs) => cs.client_type(),
        }
    }

    fn latest_height(&self) -> Height {
        match self {
            Self::Tendermint(cs) => cs.latest_height(),
            Self::Mock(cs) => cs.latest_height(),
        }
    }

    fn frozen_height(&self) -> Option<Height> {
        match self {
            Self::Tendermint(cs) => cs.frozen_height(),
            Self::Mock(cs) => cs.frozen_height(),
        }
    }
}

impl TryFrom<AnyClientState> for TmClientState {
    type Error = ClientError;

    fn try_from(value: AnyClientState) -> Result<Self, Self::Error> {
        match value {
            AnyClientState::Tendermint(cs) => Ok(cs),
            other => Err(ClientError::InvalidClientStateType(
                other.client_type().to_string(),
            )),
        }
    }
}

impl TryFrom<AnyClientState> for MockClientState {
    type Error = ClientError;

    fn try_from(value: AnyClientState) -> Result<Self, Self::Error> {
        match value {
            AnyClientState::Mock(cs) => Ok(cs),
            other => Err(ClientError::InvalidClientStateType(
                other.client_type().to_string(),
            )),
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, From, PartialEq, Eq)]
pub enum AnyConsensusState {
    Tendermint(TmConsensusState),
    Mock(MockConsensusState),
}

impl AnyConsensusState {
    fn variant(&self) -> &'static str {
        match self {
            Self::Tendermint(_) => "tendermint",
            Self::Mock(_) => "mock",
        }
    }
}

impl ConsensusState for AnyConsensusState {
    fn root(&self) -> &CommitmentRoot {
        match self {
            Self::Tendermint(cs) => cs.root(),
            Self::Mock(cs) => cs.root(),
        }
    }

    fn timestamp(&self) -> Timestamp {
        match self {
            Self::Tendermint(cs) => cs.timestamp(),
            Self::Mock(cs) => cs.timestamp(),
        }
    }
}

impl TryFrom<AnyConsensusState> for TmConsensusState {
    type Error = ClientError;

    fn try_from(value: AnyConsensusState) -> Result<Self, Self::Error> {
        match value {
            AnyConsensusState::Tendermint(cs) => Ok(cs),
            other => Err(ClientError::InvalidConsensusStateType(
                other.variant().to_string(),
            )),
        }
    }
}

impl TryFrom<AnyConsensusState> for MockConsensusState {
    type Error = ClientError;

    fn try_from(value: AnyConsensusState) -> Result<Self, Self::Error> {
        match value {
            AnyConsensusState::Mock(cs) => Ok(cs),
            other => Err(ClientError::InvalidConsensusStateType(
                other.variant().to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, From, PartialEq)]
pub enum AnyHeader {
    Tendermint(TmHeader),
    Mock(MockHeader),
}

impl ClientHeader for AnyHeader {
    fn client_type(&self) -> ClientType {
        match self {
            Self::Tendermint(h) => h.client_type(),
            Self::Mock(h) => h.client_type(),
        }
    }

    fn height(&self) -> Height {
        match self {
            Self::Tendermint(h) => ClientHeader::height(h),
            Self::Mock(h) => ClientHeader::height(h),
        }
    }

    fn trusted_height(&self) -> Height {
        match self {
            Self::Tendermint(h) => ClientHeader::trusted_height(h),
            Self::Mock(h) => ClientHeader::trusted_height(h),
        }
    }
}

#[derive(Debug, Clone, From, PartialEq)]
pub enum AnyMisbehaviour {
    Tendermint(TmMisbehaviour),
    Mock(MockMisbehaviour),
}

impl ClientMisbehaviour for AnyMisbehaviour {
    fn client_id(&self) -> &ClientId {
        match self {
            Self::Tendermint(m) => ClientMisbehaviour::client_id(m),
            Self::Mock(m) => ClientMisbehaviour::client_id(m),
        }
    }

    fn client_type(&self) -> ClientType {
        match self {
            Self::Tendermint(m) => m.client_type(),
            Self::Mock(m) => m.client_type(),
        }
    }

    fn height(&self) -> Height {
        match self {
            Self::Tendermint(m) => m.height(),
            Self::Mock(m) => m.height(),
        }
    }
}

/// The light client strategies registered with the mock host.
#[derive(Debug, Clone, From, PartialEq)]
pub enum AnyClient {
    Tendermint(TendermintClient),
    Mock(MockClient),
}

impl LightClient<MockContext> for AnyClient {
    type Header = AnyHeader;
    type Misbehaviour = AnyMisbehaviour;

    fn client_type(&self) -> ClientType {
        match self {
            Self::Tendermint(c) => LightClient::<MockContext>::client_type(c),
            Self::Mock(c) => LightClient::<MockContext>::client_type(c),
        }
    }

    fn initialise(
        &self,
        consensus_state: &AnyConsensusState,
    ) -> Result<AnyClientState, ClientError> {
        match self {
            Self::Tendermint(c) => LightClient::<MockContext>::initialise(c, consensus_state),
            Self::Mock(c) => LightClient::<MockContext>::initialise(c, consensus_state),
        }
    }

    fn verify_header(
        &self,
        ctx: &MockContext,
        client_id: &ClientId,
        client_state: &AnyClientState,
        trusted_consensus_state: &AnyConsensusState,
        header: &AnyHeader,
    ) -> Result<(AnyClientState, AnyConsensusState), ClientError> {
        match (self, header) {
            (Self::Tendermint(c), AnyHeader::Tendermint(h)) => {
                c.verify_header(ctx, client_id, client_state, trusted_consensus_state, h)
            }
            (Self::Mock(c), AnyHeader::Mock(h)) => {
                c.verify_header(ctx, client_id, client_state, trusted_consensus_state, h)
            }
            _ => Err(ClientError::InvalidHeaderType(
                header.client_type().to_string(),
            )),
        }
    }

    fn check_misbehaviour(
        &self,
        ctx: &MockContext,
        client_id: &ClientId,
        client_state: &AnyClientState,
        anchor_consensus_state: &AnyConsensusState,
        misbehaviour: &AnyMisbehaviour,
    ) -> Result<Option<AnyClientState>, ClientError> {
        match (self, misbehaviour) {
            (Self::Tendermint(c), AnyMisbehaviour::Tendermint(m)) => c.check_misbehaviour(
                ctx,
                client_id,
                client_state,
                anchor_consensus_state,
                m,
            ),
            (Self::Mock(c), AnyMisbehaviour::Mock(m)) => c.check_misbehaviour(
                ctx,
                client_id,
                client_state,
                anchor_consensus_state,
                m,
            ),
            _ => Err(ClientError::InvalidMisbehaviourType(
                misbehaviour.client_type().to_string(),
            )),
        }
    }
}
