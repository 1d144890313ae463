//! Defines `ClientStateCommon`, the view of a client state the registry needs
//! regardless of the consensus algorithm behind it.

use core::fmt::Debug;

use ibc_lc_client_types::{Height, Status};
use ibc_lc_host_types::identifiers::ClientType;

/// `ClientState` methods the registry relies on. They do not require access
/// to a client context.
pub trait ClientStateCommon: Clone + Debug + PartialEq {
    /// Type of client associated with this state (eg. Tendermint)
    fn client_type(&self) -> ClientType;

    /// Latest height the client was updated to. Never decreases.
    fn latest_height(&self) -> Height;

    /// Height at which the client was frozen, if any. Once set it is never
    /// cleared.
    fn frozen_height(&self) -> Option<Height>;

    /// Returns the status of the client. Only `Active` clients accept
    /// updates.
    fn status(&self) -> Status {
        if self.frozen_height().is_some() {
            Status::Frozen
        } else {
            Status::Active
        }
    }

    fn is_frozen(&self) -> bool {
        self.status().is_frozen()
    }
}
