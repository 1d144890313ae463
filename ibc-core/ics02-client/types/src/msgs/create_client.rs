//! Definition of domain type message `MsgCreateClient`.

use ibc_lc_host_types::identifiers::{ClientId, ClientType};

/// A type of message that triggers the creation of a new on-chain (IBC)
/// client under a caller-chosen identifier.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgCreateClient<C> {
    pub client_id: ClientId,
    pub client_type: ClientType,
    pub consensus_state: C,
}

impl<C> MsgCreateClient<C> {
    pub fn new(client_id: ClientId, client_type: ClientType, consensus_state: C) -> Self {
        MsgCreateClient {
            client_id,
            client_type,
            consensus_state,
        }
    }
}
