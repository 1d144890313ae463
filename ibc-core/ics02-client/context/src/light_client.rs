//! Defines `LightClient`, the strategy a consensus type plugs into the
//! registry with.

use ibc_lc_client_types::error::ClientError;
use ibc_lc_host_types::identifiers::{ClientId, ClientType};

use crate::client_message::{ClientHeader, ClientMisbehaviour};
use crate::context::ClientValidationContext;

/// A consensus-specific verifier. The registry looks one up per client type
/// and delegates every consensus decision to it; the strategy itself never
/// writes to the store.
///
/// The generic `V` is the client store the strategy reads from, which lets a
/// strategy ask for extra host capabilities (see
/// [`ExtClientValidationContext`](crate::ExtClientValidationContext)) through
/// its trait bounds.
pub trait LightClient<V: ClientValidationContext> {
    type Header: ClientHeader;
    type Misbehaviour: ClientMisbehaviour;

    /// The client type this strategy verifies.
    fn client_type(&self) -> ClientType;

    /// Derives the initial client state from the first trusted consensus
    /// state. The returned state's client type must equal
    /// [`LightClient::client_type`] and its latest height must be the height
    /// of the given consensus state.
    fn initialise(
        &self,
        consensus_state: &V::ConsensusStateRef,
    ) -> Result<V::ClientStateRef, ClientError>;

    /// Verifies `header` against the trusted consensus state and returns the
    /// next client state along with the consensus state derived from the
    /// header.
    fn verify_header(
        &self,
        ctx: &V,
        client_id: &ClientId,
        client_state: &V::ClientStateRef,
        trusted_consensus_state: &V::ConsensusStateRef,
        header: &Self::Header,
    ) -> Result<(V::ClientStateRef, V::ConsensusStateRef), ClientError>;

    /// Checks the submitted evidence. Returns the frozen client state if the
    /// evidence proves misbehaviour, and `None` if it is valid but does not
    /// conflict.
    fn check_misbehaviour(
        &self,
        ctx: &V,
        client_id: &ClientId,
        client_state: &V::ClientStateRef,
        anchor_consensus_state: &V::ConsensusStateRef,
        misbehaviour: &Self::Misbehaviour,
    ) -> Result<Option<V::ClientStateRef>, ClientError>;
}
