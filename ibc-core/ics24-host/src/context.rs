use ibc_lc_client_context::prelude::*;
use ibc_lc_client_types::msgs::ClientMsg;
use ibc_lc_client_types::Height;
use ibc_lc_handler_types::error::ContextError;
use ibc_lc_handler_types::events::IbcEvent;
use ibc_lc_host_types::identifiers::ClientType;
use ibc_lc_primitives::prelude::*;
use ibc_lc_primitives::Timestamp;

/// Context to be implemented by the host that provides all "read-only" methods.
///
/// Trait used for the top-level `validate` entrypoint in the `ibc-lc-core` crate.
pub trait ValidationContext {
    type V: ClientValidationContext;
    /// The closed set of light client strategies the host supports.
    type LightClientRef: LightClient<Self::V>;

    /// Retrieve the context that implements all clients' `ValidationContext`.
    fn get_client_validation_context(&self) -> &Self::V;

    /// Looks up the strategy registered for `client_type`. Returns `None` for
    /// every type the host does not support.
    fn light_client(&self, client_type: &ClientType) -> Option<Self::LightClientRef>;

    /// Returns the current height of the local chain.
    fn host_height(&self) -> Result<Height, ContextError>;

    /// Returns the current timestamp of the local chain.
    fn host_timestamp(&self) -> Result<Timestamp, ContextError>;
}

/// Context to be implemented by the host that provides all "write-only" methods.
///
/// Trait used for the top-level `execute` and `dispatch` entrypoints in the `ibc-lc-core` crate.
pub trait ExecutionContext: ValidationContext {
    type E: ClientExecutionContext<
        ClientStateRef = ClientStateRef<Self>,
        ConsensusStateRef = ConsensusStateRef<Self>,
    >;

    /// Retrieve the context that implements all clients' `ExecutionContext`.
    fn get_client_execution_context(&mut self) -> &mut Self::E;

    /// Emit the given IBC event
    fn emit_ibc_event(&mut self, event: IbcEvent) -> Result<(), ContextError>;

    /// Log the given message.
    fn log_message(&mut self, message: String) -> Result<(), ContextError>;
}

/// Convenient type alias for `ClientStateRef`, providing access to client
/// validation methods within the context.
pub type ClientStateRef<Ctx> =
    <<Ctx as ValidationContext>::V as ClientValidationContext>::ClientStateRef;

/// Convenient type alias for `ConsensusStateRef`, providing access to client
/// validation methods within the context.
pub type ConsensusStateRef<Ctx> =
    <<Ctx as ValidationContext>::V as ClientValidationContext>::ConsensusStateRef;

/// Convenient type alias for the header type accepted by the host's strategies.
pub type HeaderRef<Ctx> = <<Ctx as ValidationContext>::LightClientRef as LightClient<
    <Ctx as ValidationContext>::V,
>>::Header;

/// Convenient type alias for the misbehaviour type accepted by the host's
/// strategies.
pub type MisbehaviourRef<Ctx> = <<Ctx as ValidationContext>::LightClientRef as LightClient<
    <Ctx as ValidationContext>::V,
>>::Misbehaviour;

/// Convenient type alias for the client messages a host can process.
pub type ClientMsgRef<Ctx> = ClientMsg<ConsensusStateRef<Ctx>, HeaderRef<Ctx>, MisbehaviourRef<Ctx>>;
