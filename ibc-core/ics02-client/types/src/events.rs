//! Types for the IBC events emitted from Tendermint Websocket by the client module.

use core::str::FromStr;

use derive_more::From;
use ibc_lc_host_types::identifiers::{ClientId, ClientType};
use ibc_lc_primitives::prelude::*;
use tendermint::abci;

use crate::error::ClientError;
use crate::height::Height;

/// Client event types
pub const CREATE_CLIENT_EVENT: &str = "create_client";
pub const UPDATE_CLIENT_EVENT: &str = "update_client";
pub const CLIENT_MISBEHAVIOUR_EVENT: &str = "client_misbehaviour";

/// The content of the `key` field for the attribute containing the client identifier.
pub const CLIENT_ID_ATTRIBUTE_KEY: &str = "client_id";

/// The content of the `key` field for the attribute containing the client type.
pub const CLIENT_TYPE_ATTRIBUTE_KEY: &str = "client_type";

/// The content of the `key` field for the attribute containing the height.
pub const CONSENSUS_HEIGHT_ATTRIBUTE_KEY: &str = "consensus_height";

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, From, PartialEq, Eq)]
struct ClientIdAttribute {
    client_id: ClientId,
}

impl From<ClientIdAttribute> for abci::EventAttribute {
    fn from(attr: ClientIdAttribute) -> Self {
        (CLIENT_ID_ATTRIBUTE_KEY, attr.client_id.as_str()).into()
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, From, PartialEq, Eq)]
struct ClientTypeAttribute {
    client_type: ClientType,
}

impl From<ClientTypeAttribute> for abci::EventAttribute {
    fn from(attr: ClientTypeAttribute) -> Self {
        (CLIENT_TYPE_ATTRIBUTE_KEY, attr.client_type.as_str()).into()
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, From, PartialEq, Eq)]
struct ConsensusHeightAttribute {
    consensus_height: Height,
}

impl From<ConsensusHeightAttribute> for abci::EventAttribute {
    fn from(attr: ConsensusHeightAttribute) -> Self {
        (CONSENSUS_HEIGHT_ATTRIBUTE_KEY, attr.consensus_height).into()
    }
}

/// The attribute set shared by every client event.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
struct ClientAttributes {
    client_id: ClientIdAttribute,
    client_type: ClientTypeAttribute,
    consensus_height: ConsensusHeightAttribute,
}

impl ClientAttributes {
    fn new(client_id: ClientId, client_type: ClientType, consensus_height: Height) -> Self {
        Self {
            client_id: ClientIdAttribute::from(client_id),
            client_type: ClientTypeAttribute::from(client_type),
            consensus_height: ConsensusHeightAttribute::from(consensus_height),
        }
    }

    fn into_event(self, kind: &str) -> abci::Event {
        abci::Event {
            kind: kind.to_owned(),
            attributes: vec![
                self.client_id.into(),
                self.client_type.into(),
                self.consensus_height.into(),
            ],
        }
    }

    /// Recovers the attributes from an event of the given `kind`. Attributes
    /// with unknown keys are skipped.
    fn from_event(kind: &str, event: &abci::Event) -> Result<Self, ClientError> {
        if event.kind != kind {
            return Err(ClientError::InvalidEventKind {
                expected: kind.to_string(),
                actual: event.kind.clone(),
            });
        }

        let mut client_id = None;
        let mut client_type = None;
        let mut consensus_height = None;

        for attribute in &event.attributes {
            let key = attribute
                .key_str()
                .map_err(|_| ClientError::MissingAttributeKey)?;
            let value = attribute
                .value_str()
                .map_err(|_| ClientError::MissingAttributeValue)?;

            match key {
                CLIENT_ID_ATTRIBUTE_KEY => {
                    client_id = Some(ClientId::from_str(value)?);
                }
                CLIENT_TYPE_ATTRIBUTE_KEY => {
                    client_type = Some(ClientType::from_str(value)?);
                }
                CONSENSUS_HEIGHT_ATTRIBUTE_KEY => {
                    consensus_height = Some(
                        Height::from_str(value)
                            .map_err(|_| ClientError::InvalidAttributeValue(value.to_string()))?,
                    );
                }
                _ => {}
            }
        }

        let client_id = client_id.ok_or_else(|| {
            ClientError::InvalidAttributeKey(CLIENT_ID_ATTRIBUTE_KEY.to_string())
        })?;
        let client_type = client_type.ok_or_else(|| {
            ClientError::InvalidAttributeKey(CLIENT_TYPE_ATTRIBUTE_KEY.to_string())
        })?;
        let consensus_height = consensus_height.ok_or_else(|| {
            ClientError::InvalidAttributeKey(CONSENSUS_HEIGHT_ATTRIBUTE_KEY.to_string())
        })?;

        Ok(Self::new(client_id, client_type, consensus_height))
    }
}

/// CreateClient event signals the creation of a new on-chain client (IBC client).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateClient(ClientAttributes);

impl CreateClient {
    pub fn new(client_id: ClientId, client_type: ClientType, consensus_height: Height) -> Self {
        Self(ClientAttributes::new(
            client_id,
            client_type,
            consensus_height,
        ))
    }

    pub fn client_id(&self) -> &ClientId {
        &self.0.client_id.client_id
    }

    pub fn client_type(&self) -> &ClientType {
        &self.0.client_type.client_type
    }

    pub fn consensus_height(&self) -> &Height {
        &self.0.consensus_height.consensus_height
    }

    pub fn event_type(&self) -> &str {
        CREATE_CLIENT_EVENT
    }
}

impl From<CreateClient> for abci::Event {
    fn from(c: CreateClient) -> Self {
        c.0.into_event(CREATE_CLIENT_EVENT)
    }
}

impl TryFrom<abci::Event> for CreateClient {
    type Error = ClientError;

    fn try_from(value: abci::Event) -> Result<Self, Self::Error> {
        ClientAttributes::from_event(CREATE_CLIENT_EVENT, &value).map(Self)
    }
}

/// UpdateClient event signals a recent update of an on-chain client (IBC Client).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateClient(ClientAttributes);

impl UpdateClient {
    pub fn new(client_id: ClientId, client_type: ClientType, consensus_height: Height) -> Self {
        Self(ClientAttributes::new(
            client_id,
            client_type,
            consensus_height,
        ))
    }

    pub fn client_id(&self) -> &ClientId {
        &self.0.client_id.client_id
    }

    pub fn client_type(&self) -> &ClientType {
        &self.0.client_type.client_type
    }

    pub fn consensus_height(&self) -> &Height {
        &self.0.consensus_height.consensus_height
    }

    pub fn event_type(&self) -> &str {
        UPDATE_CLIENT_EVENT
    }
}

impl From<UpdateClient> for abci::Event {
    fn from(u: UpdateClient) -> Self {
        u.0.into_event(UPDATE_CLIENT_EVENT)
    }
}

impl TryFrom<abci::Event> for UpdateClient {
    type Error = ClientError;

    fn try_from(value: abci::Event) -> Result<Self, Self::Error> {
        ClientAttributes::from_event(UPDATE_CLIENT_EVENT, &value).map(Self)
    }
}

/// ClientMisbehaviour event signals the freezing of a client after evidence
/// of misbehaviour was verified. The consensus height is the height at which
/// the client was frozen.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientMisbehaviour(ClientAttributes);

impl ClientMisbehaviour {
    pub fn new(client_id: ClientId, client_type: ClientType, consensus_height: Height) -> Self {
        Self(ClientAttributes::new(
            client_id,
            client_type,
            consensus_height,
        ))
    }

    pub fn client_id(&self) -> &ClientId {
        &self.0.client_id.client_id
    }

    pub fn client_type(&self) -> &ClientType {
        &self.0.client_type.client_type
    }

    pub fn consensus_height(&self) -> &Height {
        &self.0.consensus_height.consensus_height
    }

    pub fn event_type(&self) -> &str {
        CLIENT_MISBEHAVIOUR_EVENT
    }
}

impl From<ClientMisbehaviour> for abci::Event {
    fn from(c: ClientMisbehaviour) -> Self {
        c.0.into_event(CLIENT_MISBEHAVIOUR_EVENT)
    }
}

impl TryFrom<abci::Event> for ClientMisbehaviour {
    type Error = ClientError;

    fn try_from(value: abci::Event) -> Result<Self, Self::Error> {
        ClientAttributes::from_event(CLIENT_MISBEHAVIOUR_EVENT, &value).map(Self)
    }
}
