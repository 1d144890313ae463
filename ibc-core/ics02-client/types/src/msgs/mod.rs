//! Defines the client message types handed to the registry.
//!
//! Messages are generic over the decoded consensus state, header and
//! misbehaviour types of the host, since values arrive already decoded.

use ibc_lc_host_types::identifiers::ClientId;

use crate::height::Height;

mod create_client;
mod misbehaviour;
mod update_client;

pub use create_client::*;
pub use misbehaviour::*;
pub use update_client::*;

/// Encodes all the different client messages
#[derive(Clone, Debug, PartialEq, Eq, derive_more::From)]
pub enum ClientMsg<C, H, M> {
    CreateClient(MsgCreateClient<C>),
    UpdateClient(MsgUpdateClient<H>),
    Misbehaviour(MsgSubmitMisbehaviour<M>),
}

/// Outcome of a successfully processed misbehaviour submission.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MisbehaviourOutcome {
    /// The evidence was valid and the client got frozen.
    Frozen { frozen_height: Height },
    /// The evidence was well-formed but did not prove misbehaviour.
    NotMisbehaviour,
}

impl MisbehaviourOutcome {
    pub fn is_frozen(&self) -> bool {
        matches!(self, Self::Frozen { .. })
    }
}

/// Outcome of a successfully processed client message.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientMsgOutcome {
    Created { client_id: ClientId, height: Height },
    Updated { client_id: ClientId, height: Height },
    Misbehaviour(MisbehaviourOutcome),
}
