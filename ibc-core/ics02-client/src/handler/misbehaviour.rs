//! Protocol logic specific to processing ICS2 messages of type `MsgSubmitMisbehaviour`.

use ibc_lc_client_context::prelude::*;
use ibc_lc_client_types::error::ClientError;
use ibc_lc_client_types::events::ClientMisbehaviour as ClientMisbehaviourEvent;
use ibc_lc_client_types::msgs::{MisbehaviourOutcome, MsgSubmitMisbehaviour};
use ibc_lc_client_types::Height;
use ibc_lc_handler_types::error::ContextError;
use ibc_lc_handler_types::events::IbcEvent;
use ibc_lc_host::{ClientStateRef, ExecutionContext, MisbehaviourRef, ValidationContext};
use ibc_lc_host_types::path::{ClientConsensusStatePath, ClientStatePath};
use ibc_lc_primitives::prelude::*;
use tracing::debug;

use super::notify;

pub fn validate<Ctx>(
    ctx: &Ctx,
    msg: &MsgSubmitMisbehaviour<MisbehaviourRef<Ctx>>,
) -> Result<MisbehaviourOutcome, ContextError>
where
    Ctx: ValidationContext,
{
    process(ctx, msg).map(|frozen| match frozen {
        Some(client_state) => MisbehaviourOutcome::Frozen {
            frozen_height: frozen_height_of(&client_state, &msg.misbehaviour),
        },
        None => MisbehaviourOutcome::NotMisbehaviour,
    })
}

/// Checks the evidence and freezes the client if it proves misbehaviour.
/// Evidence that does not conflict leaves the store untouched.
pub fn execute<Ctx>(
    ctx: &mut Ctx,
    msg: MsgSubmitMisbehaviour<MisbehaviourRef<Ctx>>,
) -> Result<MisbehaviourOutcome, ContextError>
where
    Ctx: ExecutionContext,
{
    let Some(client_state) = process(ctx, &msg)? else {
        debug!(
            "evidence against client {} shows no misbehaviour",
            msg.misbehaviour.client_id()
        );
        return Ok(MisbehaviourOutcome::NotMisbehaviour);
    };

    let misbehaviour = msg.misbehaviour;
    let client_id = misbehaviour.client_id().clone();
    let client_type = client_state.client_type();
    let frozen_height = frozen_height_of(&client_state, &misbehaviour);

    ctx.get_client_execution_context()
        .store_client_state(ClientStatePath::new(client_id.clone()), client_state)
        .map_err(|e| e.for_client(&client_id))?;

    debug!("froze client {client_id} at height {frozen_height}");

    let event = IbcEvent::ClientMisbehaviour(ClientMisbehaviourEvent::new(
        client_id.clone(),
        client_type,
        frozen_height,
    ));
    notify(
        ctx,
        event,
        format!("client {client_id} frozen due to misbehaviour"),
    );

    Ok(MisbehaviourOutcome::Frozen { frozen_height })
}

fn frozen_height_of<S, M>(client_state: &S, misbehaviour: &M) -> Height
where
    S: ClientStateCommon,
    M: ClientMisbehaviour,
{
    client_state
        .frozen_height()
        .unwrap_or_else(|| misbehaviour.height())
}

/// Runs every check of the submission and returns the frozen client state
/// if the evidence proves misbehaviour.
fn process<Ctx>(
    ctx: &Ctx,
    msg: &MsgSubmitMisbehaviour<MisbehaviourRef<Ctx>>,
) -> Result<Option<ClientStateRef<Ctx>>, ContextError>
where
    Ctx: ValidationContext,
{
    let misbehaviour = &msg.misbehaviour;
    let client_id = misbehaviour.client_id();

    let client_val_ctx = ctx.get_client_validation_context();

    let client_state = client_val_ctx
        .client_state(client_id)
        .map_err(|e| e.for_client(client_id))?
        .ok_or_else(|| ClientError::ClientStateNotFound {
            client_id: client_id.clone(),
        })?;

    let evidence_type = misbehaviour.client_type();
    match client_val_ctx
        .client_type(client_id)
        .map_err(|e| e.for_client(client_id))?
    {
        None => {
            return Err(ContextError::store_corruption(
                client_id.clone(),
                "client state is recorded without a client type",
            ))
        }
        Some(stored_type) if stored_type != evidence_type => {
            return Err(ClientError::MismatchedClientType {
                client_id: client_id.clone(),
                expected: stored_type,
                actual: evidence_type,
            }
            .into())
        }
        Some(_) => {}
    }

    if let Some(frozen_height) = client_state.frozen_height() {
        return Err(ClientError::ClientFrozen {
            client_id: client_id.clone(),
            frozen_height,
        }
        .into());
    }

    let height = misbehaviour.height();
    let anchor_consensus_state = client_val_ctx
        .consensus_state(&ClientConsensusStatePath::new(
            client_id.clone(),
            height.revision_number(),
            height.revision_height(),
        ))
        .map_err(|e| e.for_client(client_id))?
        .ok_or_else(|| ClientError::ConsensusStateNotFound {
            client_id: client_id.clone(),
            height,
        })?;

    let light_client = ctx.light_client(&evidence_type).ok_or_else(|| {
        ClientError::UnrecognizedMisbehaviourType {
            client_id: client_id.clone(),
            client_type: evidence_type.clone(),
        }
    })?;

    let frozen = light_client
        .check_misbehaviour(
            client_val_ctx,
            client_id,
            &client_state,
            &anchor_consensus_state,
            misbehaviour,
        )
        .map_err(|e| ClientError::FailedMisbehaviourVerification {
            client_id: client_id.clone(),
            error: Box::new(e),
        })?;

    Ok(frozen)
}
