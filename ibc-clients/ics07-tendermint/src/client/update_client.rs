use ibc_lc_client_context::prelude::*;
use ibc_lc_client_types::error::ClientError;
use ibc_lc_host_types::identifiers::ClientId;
use ibc_lc_host_types::path::ClientConsensusStatePath;
use ibc_lc_primitives::prelude::*;
use ibc_lc_tendermint_types::error::{IntoResult, TendermintClientError};
use ibc_lc_tendermint_types::{
    ClientState as ClientStateType, ConsensusState as ConsensusStateType, Header as TmHeader,
};
use tendermint::chain::Id as TmChainId;
use tendermint::crypto::Sha256;
use tendermint::merkle::MerkleHash;
use tendermint_light_client_verifier::Verifier;

use crate::verifier::TmVerifier;

/// Verifies `header` against the trusted snapshot and returns the advanced
/// client state with the snapshot derived from the header.
pub fn verify_header<V, H>(
    ctx: &V,
    client_id: &ClientId,
    client_state: &ClientStateType,
    trusted_consensus_state: &ConsensusStateType,
    header: &TmHeader,
    verifier: &impl TmVerifier,
) -> Result<(ClientStateType, ConsensusStateType), ClientError>
where
    V: ExtClientValidationContext,
    H: MerkleHash + Sha256 + Default,
{
    // Checks that the header fields are valid.
    header.validate_basic::<H>()?;

    // The tendermint-light-client crate works on heights that are assumed
    // to have the same revision number. We ensure this here.
    header.verify_chain_id_version_matches_height(client_state.chain_id())?;

    header.check_trusted_next_validator_set::<H>(&trusted_consensus_state.next_validators_hash)?;

    // Delegate to tendermint-light-client, which contains the required checks
    // of the new header against the trusted consensus state.
    {
        let tm_chain_id = TmChainId::try_from(client_state.chain_id.as_str()).map_err(|e| {
            TendermintClientError::InvalidChainId {
                chain_id: client_state.chain_id.to_string(),
                description: e.to_string(),
            }
        })?;

        let trusted_state = header.as_trusted_block_state(
            &tm_chain_id,
            trusted_consensus_state.height,
            trusted_consensus_state.tm_time()?,
            trusted_consensus_state.next_validators_hash,
        )?;

        let untrusted_state = header.as_untrusted_block_state();

        let options = client_state.as_light_client_options()?;
        let now = ctx
            .host_timestamp()?
            .into_tm_time()
            .map_err(TendermintClientError::InvalidHostTimestamp)?;

        // main header verification, delegated to the tendermint-light-client crate.
        verifier
            .verifier()
            .verify_update_header(untrusted_state, trusted_state, &options, now)
            .into_result()?;
    }

    check_timestamp_monotonicity(ctx, client_id, client_state, header)?;

    let consensus_state = ConsensusStateType::try_from(header)?;
    let client_state = client_state.clone().with_header(header);

    Ok((client_state, consensus_state))
}

/// Ensures the header time fits between the snapshots stored right below and
/// right above its height. A header at an already stored height is left to
/// the registry's immutability check.
fn check_timestamp_monotonicity<V>(
    ctx: &V,
    client_id: &ClientId,
    client_state: &ClientStateType,
    header: &TmHeader,
) -> Result<(), ClientError>
where
    V: ExtClientValidationContext,
{
    let height = header.height();

    let path_at_header_height = ClientConsensusStatePath::new(
        client_id.clone(),
        height.revision_number(),
        height.revision_height(),
    );
    if ctx.consensus_state(&path_at_header_height)?.is_some() {
        return Ok(());
    }

    let header_timestamp = header.timestamp()?;
    let non_monotonic = || TendermintClientError::NonMonotonicHeaderTimestamp {
        height,
        header_timestamp,
    };

    // 1. the new header needs to have a larger timestamp than the
    //    "previous header"
    if let Some(prev_cs) = ctx.prev_consensus_state(client_id, &height)? {
        if header_timestamp <= prev_cs.timestamp() {
            return Err(non_monotonic().into());
        }
    }

    // 2. a header that is not the "last" one must have a timestamp smaller
    //    than the "next header"
    if height < client_state.latest_height {
        if let Some(next_cs) = ctx.next_consensus_state(client_id, &height)? {
            if header_timestamp >= next_cs.timestamp() {
                return Err(non_monotonic().into());
            }
        }
    }

    Ok(())
}
