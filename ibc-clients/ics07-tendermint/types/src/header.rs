//! Defines the domain type for tendermint headers

use core::fmt::{Display, Error as FmtError, Formatter};

use ibc_lc_client_context::client_message::ClientHeader;
use ibc_lc_client_types::Height;
use ibc_lc_host_types::identifiers::{ChainId, ClientType};
use ibc_lc_primitives::prelude::*;
use ibc_lc_primitives::Timestamp;
use tendermint::block::signed_header::SignedHeader;
use tendermint::chain::Id as TmChainId;
use tendermint::crypto::Sha256;
use tendermint::merkle::MerkleHash;
use tendermint::validator::Set as ValidatorSet;
use tendermint::{Hash, Time};
use tendermint_light_client_verifier::types::{TrustedBlockState, UntrustedBlockState};

use crate::error::TendermintClientError;

/// Tendermint consensus header
#[derive(Clone, PartialEq, Eq)]
pub struct Header {
    signed_header: SignedHeader,
    validator_set: ValidatorSet,
    trusted_height: Height,
    trusted_next_validator_set: ValidatorSet,
    chain_id: ChainId,
    height: Height,
}

impl core::fmt::Debug for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, " Header {{...}}")
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(
            f,
            "Header {{ chain_id: {}, height: {}, trusted_height: {}, validators: {}, trusted_validators: {} }}",
            self.chain_id,
            self.height,
            self.trusted_height,
            self.validator_set.validators().len(),
            self.trusted_next_validator_set.validators().len(),
        )
    }
}

impl Header {
    /// Builds a header out of a signed block header, the validator set that
    /// signed it, and the trusted height and next validator set it should be
    /// verified against.
    pub fn new(
        signed_header: SignedHeader,
        validator_set: ValidatorSet,
        trusted_height: Height,
        trusted_next_validator_set: ValidatorSet,
    ) -> Result<Self, TendermintClientError> {
        let chain_id = ChainId::new(signed_header.header.chain_id.as_str())?;

        let block_height = u64::from(signed_header.header.height);
        let height = Height::new(chain_id.revision_number(), block_height)
            .map_err(|_| TendermintClientError::InvalidHeaderHeight(block_height))?;

        Ok(Self {
            signed_header,
            validator_set,
            trusted_height,
            trusted_next_validator_set,
            chain_id,
            height,
        })
    }

    pub fn signed_header(&self) -> &SignedHeader {
        &self.signed_header
    }

    pub fn validator_set(&self) -> &ValidatorSet {
        &self.validator_set
    }

    pub fn trusted_height(&self) -> Height {
        self.trusted_height
    }

    pub fn trusted_next_validator_set(&self) -> &ValidatorSet {
        &self.trusted_next_validator_set
    }

    /// The chain the header was produced by.
    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    pub fn height(&self) -> Height {
        self.height
    }

    /// Hash of the block the header commits to.
    pub fn block_hash(&self) -> Hash {
        self.signed_header.commit.block_id.hash
    }

    pub fn time(&self) -> Time {
        self.signed_header.header.time
    }

    pub fn timestamp(&self) -> Result<Timestamp, TendermintClientError> {
        self.time()
            .try_into()
            .map_err(TendermintClientError::InvalidHeaderTimestamp)
    }

    pub fn as_untrusted_block_state(&self) -> UntrustedBlockState<'_> {
        UntrustedBlockState {
            signed_header: &self.signed_header,
            validators: &self.validator_set,
            // NB: This will skip the
            // VerificationPredicates::next_validators_match check for the
            // untrusted state.
            next_validators: None,
        }
    }

    /// Builds the trusted state to verify this header against, from the
    /// snapshot stored at `trusted_height`.
    pub fn as_trusted_block_state<'a>(
        &'a self,
        chain_id: &'a TmChainId,
        trusted_height: Height,
        header_time: Time,
        next_validators_hash: Hash,
    ) -> Result<TrustedBlockState<'a>, TendermintClientError> {
        Ok(TrustedBlockState {
            chain_id,
            header_time,
            height: trusted_height.revision_height().try_into().map_err(|_| {
                TendermintClientError::InvalidHeaderHeight(trusted_height.revision_height())
            })?,
            next_validators: &self.trusted_next_validator_set,
            next_validators_hash,
        })
    }

    pub fn verify_chain_id_version_matches_height(
        &self,
        chain_id: &ChainId,
    ) -> Result<(), TendermintClientError> {
        if self.chain_id != *chain_id {
            return Err(TendermintClientError::MismatchedHeaderChainIds {
                expected: chain_id.to_string(),
                actual: self.chain_id.to_string(),
            });
        }
        Ok(())
    }

    /// `header.trusted_next_validator_set` was given to us by the relayer.
    /// Thus, we need to ensure that the relayer gave us the right set, i.e. by
    /// ensuring that it matches the hash we have stored on chain.
    pub fn check_trusted_next_validator_set<H: MerkleHash + Sha256 + Default>(
        &self,
        trusted_next_validator_hash: &Hash,
    ) -> Result<(), TendermintClientError> {
        let actual = self.trusted_next_validator_set.hash_with::<H>();

        if &actual == trusted_next_validator_hash {
            Ok(())
        } else {
            Err(
                TendermintClientError::MismatchedTrustedNextValidatorsHash {
                    expected: *trusted_next_validator_hash,
                    actual,
                },
            )
        }
    }

    /// Checks if the fields of a given header are consistent with the trusted fields of this header.
    pub fn validate_basic<H: MerkleHash + Sha256 + Default>(
        &self,
    ) -> Result<(), TendermintClientError> {
        if self.height.revision_number() != self.trusted_height.revision_number() {
            return Err(TendermintClientError::MismatchedRevisionHeights {
                expected: self.trusted_height.revision_number(),
                actual: self.height.revision_number(),
            });
        }

        // The trusted height must be smaller than the height of the new
        // header being installed.
        if self.trusted_height >= self.height {
            return Err(TendermintClientError::InvalidHeaderHeight(
                self.height.revision_height(),
            ));
        }

        let validators_hash = self.validator_set.hash_with::<H>();

        if validators_hash != self.signed_header.header.validators_hash {
            return Err(TendermintClientError::MismatchedValidatorHashes {
                expected: self.signed_header.header.validators_hash,
                actual: validators_hash,
            });
        }

        Ok(())
    }
}

impl ClientHeader for Header {
    fn client_type(&self) -> ClientType {
        crate::client_type()
    }

    fn height(&self) -> Height {
        self.height
    }

    fn trusted_height(&self) -> Height {
        self.trusted_height
    }
}
