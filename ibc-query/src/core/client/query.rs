//! Provides utility functions for querying IBC client states.

use ibc_lc_core::client::context::prelude::*;
use ibc_lc_core::client::types::error::ClientError;
use ibc_lc_core::client::types::Height;
use ibc_lc_core::host::types::identifiers::ClientId;
use ibc_lc_core::host::types::path::ClientConsensusStatePath;
use ibc_lc_core::host::{ClientStateRef, ConsensusStateRef, ValidationContext};

use super::types::*;
use crate::core::context::{HistoricalContext, QueryContext};
use crate::error::QueryError;

type Snapshot<H> = <H as HistoricalContext>::Snapshot;

/// Picks the committed state a query is answered from: the one at
/// `query_height` if given, else the latest one.
fn snapshot<H>(ctx: &H, query_height: Option<Height>) -> Result<(Snapshot<H>, Height), QueryError>
where
    H: HistoricalContext,
{
    let height = query_height.unwrap_or_else(|| ctx.latest_query_height());

    let snapshot = ctx
        .snapshot_at(&height)
        .ok_or(QueryError::SnapshotNotFound { height })?;

    Ok((snapshot, height))
}

fn client_state_of<I>(ibc_ctx: &I, client_id: &ClientId) -> Result<ClientStateRef<I>, QueryError>
where
    I: ValidationContext,
{
    let client_state = ibc_ctx
        .get_client_validation_context()
        .client_state(client_id)?
        .ok_or_else(|| ClientError::ClientStateNotFound {
            client_id: client_id.clone(),
        })?;

    Ok(client_state)
}

/// Queries for the client state of a given client id.
pub fn query_client_state<H>(
    ctx: &H,
    request: &QueryClientStateRequest,
) -> Result<QueryClientStateResponse<ClientStateRef<Snapshot<H>>>, QueryError>
where
    H: HistoricalContext,
{
    let (ibc_ctx, query_height) = snapshot(ctx, request.query_height)?;
    let client_id = &request.client_id;

    let client_state = client_state_of(&ibc_ctx, client_id)?;

    let client_type = ibc_ctx
        .get_client_validation_context()
        .client_type(client_id)?
        .ok_or_else(|| ClientError::ClientTypeNotFound {
            client_id: client_id.clone(),
        })?;

    Ok(QueryClientStateResponse {
        client_state,
        client_type,
        query_height,
    })
}

/// Queries for all the existing client states.
pub fn query_client_states<H>(
    ctx: &H,
    request: &QueryClientStatesRequest,
) -> Result<QueryClientStatesResponse<ClientStateRef<Snapshot<H>>>, QueryError>
where
    H: HistoricalContext,
{
    let (ibc_ctx, query_height) = snapshot(ctx, request.query_height)?;

    let client_states = ibc_ctx
        .client_states()?
        .into_iter()
        .map(|(client_id, client_state)| IdentifiedClientState::new(client_id, client_state))
        .collect();

    Ok(QueryClientStatesResponse {
        client_states,
        query_height,
    })
}

/// Queries for the consensus state of a given client id and height. Without a
/// consensus height, the consensus state at the client's latest height is
/// returned.
pub fn query_consensus_state<H>(
    ctx: &H,
    request: &QueryConsensusStateRequest,
) -> Result<QueryConsensusStateResponse<ConsensusStateRef<Snapshot<H>>>, QueryError>
where
    H: HistoricalContext,
{
    let (ibc_ctx, query_height) = snapshot(ctx, request.query_height)?;
    let client_id = &request.client_id;

    let consensus_height = match request.consensus_height {
        Some(height) => height,
        None => client_state_of(&ibc_ctx, client_id)?.latest_height(),
    };

    let consensus_state = ibc_ctx
        .get_client_validation_context()
        .consensus_state(&ClientConsensusStatePath::new(
            client_id.clone(),
            consensus_height.revision_number(),
            consensus_height.revision_height(),
        ))?
        .ok_or_else(|| ClientError::ConsensusStateNotFound {
            client_id: client_id.clone(),
            height: consensus_height,
        })?;

    Ok(QueryConsensusStateResponse {
        consensus_state,
        consensus_height,
        query_height,
    })
}

/// Queries for all the consensus states of a given client id.
pub fn query_consensus_states<H>(
    ctx: &H,
    request: &QueryConsensusStatesRequest,
) -> Result<QueryConsensusStatesResponse<ConsensusStateRef<Snapshot<H>>>, QueryError>
where
    H: HistoricalContext,
{
    let (ibc_ctx, query_height) = snapshot(ctx, request.query_height)?;

    let consensus_states = ibc_ctx
        .consensus_states(&request.client_id)?
        .into_iter()
        .map(|(height, consensus_state)| ConsensusStateWithHeight::new(height, consensus_state))
        .collect();

    Ok(QueryConsensusStatesResponse {
        consensus_states,
        query_height,
    })
}

/// Queries for the heights of all the consensus states of a given client id.
pub fn query_consensus_state_heights<H>(
    ctx: &H,
    request: &QueryConsensusStateHeightsRequest,
) -> Result<QueryConsensusStateHeightsResponse, QueryError>
where
    H: HistoricalContext,
{
    let (ibc_ctx, query_height) = snapshot(ctx, request.query_height)?;

    let consensus_state_heights = ibc_ctx.consensus_state_heights(&request.client_id)?;

    Ok(QueryConsensusStateHeightsResponse {
        consensus_state_heights,
        query_height,
    })
}

/// Queries for the status (Active, Frozen) of a given client.
pub fn query_client_status<H>(
    ctx: &H,
    request: &QueryClientStatusRequest,
) -> Result<QueryClientStatusResponse, QueryError>
where
    H: HistoricalContext,
{
    let (ibc_ctx, query_height) = snapshot(ctx, request.query_height)?;

    let status = client_state_of(&ibc_ctx, &request.client_id)?.status();

    Ok(QueryClientStatusResponse {
        status,
        query_height,
    })
}
