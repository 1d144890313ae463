use ibc_lc_client_context::prelude::*;
use ibc_lc_client_types::error::ClientError;
use ibc_lc_host_types::identifiers::{ChainId, ClientId};
use ibc_lc_primitives::prelude::*;
use ibc_lc_primitives::Timestamp;
use ibc_lc_tendermint_types::error::{IntoResult, TendermintClientError};
use ibc_lc_tendermint_types::{
    ClientState as ClientStateType, ConsensusState as ConsensusStateType, Header as TmHeader,
    Misbehaviour as TmMisbehaviour,
};
use tendermint::chain::Id as TmChainId;
use tendermint::crypto::Sha256;
use tendermint::merkle::MerkleHash;
use tendermint_light_client_verifier::options::Options;
use tendermint_light_client_verifier::Verifier;

use super::downcast;
use crate::verifier::TmVerifier;

/// Determines whether or not the two headers of the evidence would each have
/// convinced the light client.
pub fn verify_misbehaviour<V, H>(
    ctx: &V,
    client_id: &ClientId,
    client_state: &ClientStateType,
    misbehaviour: &TmMisbehaviour,
    verifier: &impl TmVerifier,
) -> Result<(), ClientError>
where
    V: ExtClientValidationContext,
    ConsensusStateType: Convertible<V::ConsensusStateRef>,
    <ConsensusStateType as TryFrom<V::ConsensusStateRef>>::Error: Into<ClientError>,
    H: MerkleHash + Sha256 + Default,
{
    let chain_id = client_state.chain_id();

    misbehaviour
        .header1()
        .verify_chain_id_version_matches_height(chain_id)?;
    misbehaviour
        .header2()
        .verify_chain_id_version_matches_height(chain_id)?;

    misbehaviour.validate_basic::<H>()?;

    let options = client_state.as_light_client_options()?;
    let current_timestamp = ctx.host_timestamp()?;

    for header in [misbehaviour.header1(), misbehaviour.header2()] {
        let trusted_height = header.trusted_height();

        let (_, trusted_consensus_state) = ctx
            .consensus_state_at_or_below(client_id, &trusted_height)?
            .ok_or_else(|| ClientError::ConsensusStateNotFound {
                client_id: client_id.clone(),
                height: trusted_height,
            })?;
        let trusted_consensus_state: ConsensusStateType = downcast(&trusted_consensus_state)?;

        verify_misbehaviour_header::<H>(
            header,
            chain_id,
            &options,
            &trusted_consensus_state,
            current_timestamp,
            verifier,
        )?;
    }

    Ok(())
}

pub fn verify_misbehaviour_header<H>(
    header: &TmHeader,
    chain_id: &ChainId,
    options: &Options,
    trusted_consensus_state: &ConsensusStateType,
    current_timestamp: Timestamp,
    verifier: &impl TmVerifier,
) -> Result<(), ClientError>
where
    H: MerkleHash + Sha256 + Default,
{
    // ensure correctness of the trusted next validator set provided by the relayer
    header.check_trusted_next_validator_set::<H>(&trusted_consensus_state.next_validators_hash)?;

    // ensure trusted consensus state is within trusting period
    {
        let trusted_timestamp = trusted_consensus_state.timestamp;

        let duration_since_consensus_state = current_timestamp
            .duration_since(&trusted_timestamp)
            .ok_or(TendermintClientError::InvalidConsensusStateTimestamp {
                trusted: trusted_timestamp,
                host: current_timestamp,
            })?;

        if duration_since_consensus_state >= options.trusting_period {
            return Err(TendermintClientError::InsufficientTrustingPeriod {
                duration_since_consensus_state,
                trusting_period: options.trusting_period,
            }
            .into());
        }
    }

    // main header verification, delegated to the tendermint-light-client crate.
    let untrusted_state = header.as_untrusted_block_state();

    let tm_chain_id =
        TmChainId::try_from(chain_id.as_str()).map_err(|e| TendermintClientError::InvalidChainId {
            chain_id: chain_id.to_string(),
            description: e.to_string(),
        })?;

    let trusted_state = header.as_trusted_block_state(
        &tm_chain_id,
        trusted_consensus_state.height,
        trusted_consensus_state.tm_time()?,
        trusted_consensus_state.next_validators_hash,
    )?;

    let current_timestamp = current_timestamp
        .into_tm_time()
        .map_err(TendermintClientError::InvalidHostTimestamp)?;

    verifier
        .verifier()
        .verify_misbehaviour_header(untrusted_state, trusted_state, options, current_timestamp)
        .into_result()?;

    Ok(())
}

/// Tells whether verified evidence proves misbehaviour: either the two
/// headers conflict with each other, or `header1` contradicts the snapshot
/// already trusted at its height.
pub fn check_for_misbehaviour(
    anchor_consensus_state: &ConsensusStateType,
    misbehaviour: &TmMisbehaviour,
) -> Result<bool, ClientError> {
    if misbehaviour.is_conflicting() {
        return Ok(true);
    }

    let header_consensus_state = ConsensusStateType::try_from(misbehaviour.header1())?;

    Ok(header_consensus_state != *anchor_consensus_state)
}
