//! Views of the client messages that the registry inspects before handing
//! them to a strategy.

use core::fmt::Debug;

use ibc_lc_client_types::Height;
use ibc_lc_host_types::identifiers::{ClientId, ClientType};

/// A header submitted to move a client forward. Headers are never stored.
pub trait ClientHeader: Clone + Debug {
    /// The consensus type the header claims to belong to.
    fn client_type(&self) -> ClientType;

    /// Height of the block the header attests to.
    fn height(&self) -> Height;

    /// Height of the trusted consensus state the header is verified against.
    fn trusted_height(&self) -> Height;
}

/// Evidence that the counterparty chain signed two conflicting headers.
pub trait ClientMisbehaviour: Clone + Debug {
    /// The client the evidence is submitted against.
    fn client_id(&self) -> &ClientId;

    /// The consensus type the evidence claims to belong to.
    fn client_type(&self) -> ClientType;

    /// The height at which the conflict occurred. A successful submission
    /// freezes the client at this height.
    fn height(&self) -> Height;
}
