use ibc_lc_client_types::Height;
use ibc_lc_handler_types::error::ContextError;
use ibc_lc_host_types::identifiers::{ClientId, ClientType};
use ibc_lc_host_types::path::{ClientConsensusStatePath, ClientStatePath, ClientTypePath};
use ibc_lc_primitives::prelude::*;
use ibc_lc_primitives::Timestamp;

use crate::client_state::ClientStateCommon;
use crate::consensus_state::ConsensusState;

/// Defines the read side of the client store that the registry handlers and
/// the light client strategies rely on.
///
/// Lookups of absent records return `Ok(None)`; an `Err` is reserved for
/// failures of the store itself.
pub trait ClientValidationContext: Sized {
    type ClientStateRef: ClientStateCommon;
    type ConsensusStateRef: ConsensusState;

    /// Returns the consensus type tag recorded for `client_id` at creation.
    fn client_type(&self, client_id: &ClientId) -> Result<Option<ClientType>, ContextError>;

    /// Returns the ClientState for the given identifier `client_id`.
    ///
    /// Note: Clients have the responsibility to store client states on client creation and update.
    fn client_state(
        &self,
        client_id: &ClientId,
    ) -> Result<Option<Self::ClientStateRef>, ContextError>;

    /// Retrieve the consensus state for the given client ID at the specified
    /// height.
    fn consensus_state(
        &self,
        client_cons_state_path: &ClientConsensusStatePath,
    ) -> Result<Option<Self::ConsensusStateRef>, ContextError>;

    /// Returns the consensus state with the greatest height that is lower
    /// than or equal to `height`, together with that height.
    fn consensus_state_at_or_below(
        &self,
        client_id: &ClientId,
        height: &Height,
    ) -> Result<Option<(Height, Self::ConsensusStateRef)>, ContextError>;

    /// Returns the timestamp and height of the host when it processed a client
    /// update request at the specified height.
    fn client_update_meta(
        &self,
        client_id: &ClientId,
        height: &Height,
    ) -> Result<Option<(Timestamp, Height)>, ContextError>;
}

/// Defines the write side of the client store.
///
/// Writes are only issued once every read and verification of a message has
/// succeeded, so a host may apply them directly.
pub trait ClientExecutionContext: ClientValidationContext {
    /// Called upon successful client creation and update
    fn store_client_state(
        &mut self,
        client_state_path: ClientStatePath,
        client_state: Self::ClientStateRef,
    ) -> Result<(), ContextError>;

    /// Called once, upon successful client creation
    fn store_client_type(
        &mut self,
        client_type_path: ClientTypePath,
        client_type: ClientType,
    ) -> Result<(), ContextError>;

    /// Called upon successful client creation and update
    fn store_consensus_state(
        &mut self,
        consensus_state_path: ClientConsensusStatePath,
        consensus_state: Self::ConsensusStateRef,
    ) -> Result<(), ContextError>;

    /// Called upon successful client creation and update.
    ///
    /// Implementations are expected to use this to record the specified time
    /// and height as the time at which this update (or header) was processed.
    fn store_update_meta(
        &mut self,
        client_id: ClientId,
        height: Height,
        host_timestamp: Timestamp,
        host_height: Height,
    ) -> Result<(), ContextError>;
}

/// An optional trait that extends the client validation context capabilities by
/// providing additional methods for validating a client state. Mainly
/// benefiting ICS-07 Tendermint clients by granting access to essential
/// information from hosts.
pub trait ExtClientValidationContext: ClientValidationContext {
    /// Returns the current timestamp of the local chain.
    fn host_timestamp(&self) -> Result<Timestamp, ContextError>;

    /// Returns the current height of the local chain.
    fn host_height(&self) -> Result<Height, ContextError>;

    /// Returns all the heights at which a consensus state is stored, in
    /// ascending order.
    fn consensus_state_heights(&self, client_id: &ClientId) -> Result<Vec<Height>, ContextError>;

    /// Search for the lowest consensus state higher than `height`.
    fn next_consensus_state(
        &self,
        client_id: &ClientId,
        height: &Height,
    ) -> Result<Option<Self::ConsensusStateRef>, ContextError>;

    /// Search for the highest consensus state lower than `height`.
    fn prev_consensus_state(
        &self,
        client_id: &ClientId,
        height: &Height,
    ) -> Result<Option<Self::ConsensusStateRef>, ContextError>;
}

/// An optional trait that extends the client context required during execution.
///
/// This trait serves as a trait alias for types that implement both
/// [`ExtClientValidationContext`] and [`ClientExecutionContext`], and it is
/// auto-implemented for such types.
pub trait ExtClientExecutionContext: ExtClientValidationContext + ClientExecutionContext {}

impl<T> ExtClientExecutionContext for T where T: ExtClientValidationContext + ClientExecutionContext {}

/// General-purpose helper converter enabling `TryFrom` and `Into` conversions
/// primarily intended between an enum and its variants. This usually used by
/// standalone functions as a trait bound allowing them to obtain the concrete
/// local type from the enum containing that concrete type as its variant, like
/// when enum `AnyConsensusState` contains the Tendermint `ConsensusState`.
pub trait Convertible<C>: TryFrom<C> + Into<C> {}

impl<T, C> Convertible<C> for T where T: TryFrom<C> + Into<C> {}
