//! Defines the events emitted by the registry entrypoints.

use ibc_lc_client_types::events::{self as ClientEvents};
use ibc_lc_primitives::prelude::*;
use tendermint::abci;

const MESSAGE_EVENT: &str = "message";

/// The key of the single attribute carried by a `message` event.
pub const MODULE_ATTRIBUTE_KEY: &str = "module";

/// Events created by the client registry, destined for an external observer.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, derive_more::From)]
pub enum IbcEvent {
    CreateClient(ClientEvents::CreateClient),
    UpdateClient(ClientEvents::UpdateClient),
    ClientMisbehaviour(ClientEvents::ClientMisbehaviour),
    Message(MessageEvent),
}

impl From<IbcEvent> for abci::Event {
    fn from(event: IbcEvent) -> Self {
        match event {
            IbcEvent::CreateClient(event) => event.into(),
            IbcEvent::UpdateClient(event) => event.into(),
            IbcEvent::ClientMisbehaviour(event) => event.into(),
            IbcEvent::Message(event) => abci::Event {
                kind: MESSAGE_EVENT.to_string(),
                attributes: vec![(MODULE_ATTRIBUTE_KEY, event.module_attribute(), true).into()],
            },
        }
    }
}

impl IbcEvent {
    pub fn event_type(&self) -> &str {
        match self {
            IbcEvent::CreateClient(event) => event.event_type(),
            IbcEvent::UpdateClient(event) => event.event_type(),
            IbcEvent::ClientMisbehaviour(event) => event.event_type(),
            IbcEvent::Message(_) => MESSAGE_EVENT,
        }
    }
}

/// An event type that is emitted by the Cosmos SDK.
///
/// We need to emit it as well, as currently [hermes] relies on it.
///
/// [hermes]: https://github.com/informalsystems/hermes
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageEvent {
    Client,
}

impl MessageEvent {
    /// The ABCI event attribute has only one attribute, with key `module`.
    /// This method gets the associated value.
    pub fn module_attribute(&self) -> String {
        match self {
            MessageEvent::Client => "ibc_client".to_string(),
        }
    }
}
