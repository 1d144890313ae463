//! Protocol logic specific to processing ICS2 messages of type `MsgCreateClient`.

use ibc_lc_client_context::prelude::*;
use ibc_lc_client_types::error::ClientError;
use ibc_lc_client_types::events::CreateClient;
use ibc_lc_client_types::msgs::MsgCreateClient;
use ibc_lc_client_types::Height;
use ibc_lc_handler_types::error::ContextError;
use ibc_lc_handler_types::events::IbcEvent;
use ibc_lc_host::{ClientStateRef, ConsensusStateRef, ExecutionContext, ValidationContext};
use ibc_lc_host_types::path::{ClientConsensusStatePath, ClientStatePath, ClientTypePath};
use ibc_lc_primitives::prelude::*;
use tracing::debug;

use super::notify;

pub fn validate<Ctx>(
    ctx: &Ctx,
    msg: &MsgCreateClient<ConsensusStateRef<Ctx>>,
) -> Result<(), ContextError>
where
    Ctx: ValidationContext,
{
    process(ctx, msg).map(|_| ())
}

/// Creates the client and returns the height of its initial consensus state.
pub fn execute<Ctx>(
    ctx: &mut Ctx,
    msg: MsgCreateClient<ConsensusStateRef<Ctx>>,
) -> Result<Height, ContextError>
where
    Ctx: ExecutionContext,
{
    let client_state = process(ctx, &msg)?;

    let host_timestamp = ctx.host_timestamp()?;
    let host_height = ctx.host_height()?;

    let MsgCreateClient {
        client_id,
        client_type,
        consensus_state,
    } = msg;

    let latest_height = client_state.latest_height();

    let client_exec_ctx = ctx.get_client_execution_context();

    client_exec_ctx
        .store_client_state(ClientStatePath::new(client_id.clone()), client_state)
        .map_err(|e| e.for_client(&client_id))?;
    client_exec_ctx
        .store_client_type(ClientTypePath::new(client_id.clone()), client_type.clone())
        .map_err(|e| e.for_client(&client_id))?;
    client_exec_ctx
        .store_consensus_state(
            ClientConsensusStatePath::new(
                client_id.clone(),
                latest_height.revision_number(),
                latest_height.revision_height(),
            ),
            consensus_state,
        )
        .map_err(|e| e.for_client(&client_id))?;
    client_exec_ctx
        .store_update_meta(
            client_id.clone(),
            latest_height,
            host_timestamp,
            host_height,
        )
        .map_err(|e| e.for_client(&client_id))?;

    debug!("created client {client_id} of type {client_type} at height {latest_height}");

    let event = IbcEvent::CreateClient(CreateClient::new(
        client_id.clone(),
        client_type,
        latest_height,
    ));
    notify(
        ctx,
        event,
        format!("client {client_id} created at height {latest_height}"),
    );

    Ok(latest_height)
}

/// Runs every check of the creation and returns the initial client state.
fn process<Ctx>(
    ctx: &Ctx,
    msg: &MsgCreateClient<ConsensusStateRef<Ctx>>,
) -> Result<ClientStateRef<Ctx>, ContextError>
where
    Ctx: ValidationContext,
{
    let MsgCreateClient {
        client_id,
        client_type,
        consensus_state,
    } = msg;

    let client_val_ctx = ctx.get_client_validation_context();

    if client_val_ctx
        .client_state(client_id)
        .map_err(|e| e.for_client(client_id))?
        .is_some()
    {
        return Err(ClientError::ClientStateAlreadyExists {
            client_id: client_id.clone(),
        }
        .into());
    }

    if let Some(stored_type) = client_val_ctx
        .client_type(client_id)
        .map_err(|e| e.for_client(client_id))?
    {
        return Err(ContextError::store_corruption(
            client_id.clone(),
            format!("client type `{stored_type}` is recorded without a client state"),
        ));
    }

    let light_client =
        ctx.light_client(client_type)
            .ok_or_else(|| ClientError::UnsupportedClientType {
                client_id: client_id.clone(),
                client_type: client_type.clone(),
            })?;

    let failed_initialisation = |error: ClientError| ClientError::FailedInitialisation {
        client_id: client_id.clone(),
        error: Box::new(error),
    };

    let client_state = light_client
        .initialise(consensus_state)
        .map_err(failed_initialisation)?;

    let actual = client_state.client_type();
    if &actual != client_type {
        return Err(failed_initialisation(ClientError::MismatchedClientType {
            client_id: client_id.clone(),
            expected: client_type.clone(),
            actual,
        })
        .into());
    }

    Ok(client_state)
}
