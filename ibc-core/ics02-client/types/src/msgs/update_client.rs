//! Definition of domain type message `MsgUpdateClient`.

use ibc_lc_host_types::identifiers::ClientId;

/// Represents the message that triggers the update of an on-chain (IBC)
/// client with a new header.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgUpdateClient<H> {
    pub client_id: ClientId,
    pub header: H,
}

impl<H> MsgUpdateClient<H> {
    pub fn new(client_id: ClientId, header: H) -> Self {
        MsgUpdateClient { client_id, header }
    }
}
