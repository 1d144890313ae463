//! Protocol logic specific to processing ICS2 messages of type `MsgUpdateClient`.

use ibc_lc_client_context::prelude::*;
use ibc_lc_client_types::error::ClientError;
use ibc_lc_client_types::events::UpdateClient;
use ibc_lc_client_types::msgs::MsgUpdateClient;
use ibc_lc_client_types::Height;
use ibc_lc_handler_types::error::ContextError;
use ibc_lc_handler_types::events::IbcEvent;
use ibc_lc_host::{
    ClientStateRef, ConsensusStateRef, ExecutionContext, HeaderRef, ValidationContext,
};
use ibc_lc_host_types::identifiers::ClientType;
use ibc_lc_host_types::path::{ClientConsensusStatePath, ClientStatePath};
use ibc_lc_primitives::prelude::*;
use tracing::debug;

use super::notify;

/// The writes an update resolves to once every check has passed.
struct Update<Ctx: ValidationContext> {
    client_type: ClientType,
    height: Height,
    client_state: ClientStateRef<Ctx>,
    /// `None` when an identical consensus state is already stored at
    /// `height`.
    consensus_state: Option<ConsensusStateRef<Ctx>>,
}

pub fn validate<Ctx>(ctx: &Ctx, msg: &MsgUpdateClient<HeaderRef<Ctx>>) -> Result<(), ContextError>
where
    Ctx: ValidationContext,
{
    process(ctx, msg).map(|_| ())
}

/// Updates the client and returns the height of the header it was updated
/// with.
pub fn execute<Ctx>(
    ctx: &mut Ctx,
    msg: MsgUpdateClient<HeaderRef<Ctx>>,
) -> Result<Height, ContextError>
where
    Ctx: ExecutionContext,
{
    let Update {
        client_type,
        height,
        client_state,
        consensus_state,
    } = process(ctx, &msg)?;

    let host_timestamp = ctx.host_timestamp()?;
    let host_height = ctx.host_height()?;

    let client_id = msg.client_id;

    let client_exec_ctx = ctx.get_client_execution_context();

    client_exec_ctx
        .store_client_state(ClientStatePath::new(client_id.clone()), client_state)
        .map_err(|e| e.for_client(&client_id))?;

    if let Some(consensus_state) = consensus_state {
        client_exec_ctx
            .store_consensus_state(
                ClientConsensusStatePath::new(
                    client_id.clone(),
                    height.revision_number(),
                    height.revision_height(),
                ),
                consensus_state,
            )
            .map_err(|e| e.for_client(&client_id))?;
        client_exec_ctx
            .store_update_meta(
                client_id.clone(),
                height,
                host_timestamp,
                host_height,
            )
            .map_err(|e| e.for_client(&client_id))?;
    } else {
        debug!("consensus state of client {client_id} at height {height} already stored");
    }

    debug!("updated client {client_id} to height {height}");

    let event = IbcEvent::UpdateClient(UpdateClient::new(client_id.clone(), client_type, height));
    notify(
        ctx,
        event,
        format!("client {client_id} updated to height {height}"),
    );

    Ok(height)
}

fn process<Ctx>(ctx: &Ctx, msg: &MsgUpdateClient<HeaderRef<Ctx>>) -> Result<Update<Ctx>, ContextError>
where
    Ctx: ValidationContext,
{
    let MsgUpdateClient { client_id, header } = msg;

    let client_val_ctx = ctx.get_client_validation_context();

    let client_type = client_val_ctx
        .client_type(client_id)
        .map_err(|e| e.for_client(client_id))?
        .ok_or_else(|| ClientError::ClientTypeNotFound {
            client_id: client_id.clone(),
        })?;

    let header_type = header.client_type();
    if header_type != client_type {
        return Err(ClientError::MismatchedClientType {
            client_id: client_id.clone(),
            expected: client_type,
            actual: header_type,
        }
        .into());
    }

    let client_state = client_val_ctx
        .client_state(client_id)
        .map_err(|e| e.for_client(client_id))?
        .ok_or_else(|| ClientError::ClientStateNotFound {
            client_id: client_id.clone(),
        })?;

    if let Some(frozen_height) = client_state.frozen_height() {
        return Err(ClientError::ClientFrozen {
            client_id: client_id.clone(),
            frozen_height,
        }
        .into());
    }

    let light_client =
        ctx.light_client(&client_type)
            .ok_or_else(|| ClientError::UnsupportedClientType {
                client_id: client_id.clone(),
                client_type: client_type.clone(),
            })?;

    let trusted_height = header.trusted_height();
    let (_, trusted_consensus_state) = client_val_ctx
        .consensus_state_at_or_below(client_id, &trusted_height)
        .map_err(|e| e.for_client(client_id))?
        .ok_or_else(|| ClientError::ConsensusStateNotFound {
            client_id: client_id.clone(),
            height: trusted_height,
        })?;

    let (client_state, consensus_state) = light_client
        .verify_header(
            client_val_ctx,
            client_id,
            &client_state,
            &trusted_consensus_state,
            header,
        )
        .map_err(|e| ClientError::FailedHeaderVerification {
            client_id: client_id.clone(),
            error: Box::new(e),
        })?;

    let height = header.height();
    let stored = client_val_ctx
        .consensus_state(&ClientConsensusStatePath::new(
            client_id.clone(),
            height.revision_number(),
            height.revision_height(),
        ))
        .map_err(|e| e.for_client(client_id))?;

    let consensus_state = match stored {
        Some(stored) if stored == consensus_state => None,
        Some(_) => {
            return Err(ClientError::ConflictingConsensusState {
                client_id: client_id.clone(),
                height,
            }
            .into())
        }
        None => Some(consensus_state),
    };

    Ok(Update {
        client_type,
        height,
        client_state,
        consensus_state,
    })
}
