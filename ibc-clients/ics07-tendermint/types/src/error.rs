//! Defines the Tendermint light client's error type

use core::time::Duration;

use displaydoc::Display;
use ibc_lc_client_types::error::ClientError;
use ibc_lc_client_types::Height;
use ibc_lc_host_types::error::IdentifierError;
use ibc_lc_primitives::prelude::*;
use ibc_lc_primitives::{Timestamp, TimestampError};
use tendermint::{Error as TendermintError, Hash};
use tendermint_light_client_verifier::errors::VerificationErrorDetail as LightClientErrorDetail;
use tendermint_light_client_verifier::operations::VotingPowerTally;
use tendermint_light_client_verifier::Verdict;

/// The main error type for the Tendermint light client
#[derive(Debug, Display)]
pub enum TendermintClientError {
    /// invalid identifier: `{0}`
    InvalidIdentifier(IdentifierError),
    /// invalid chain identifier `{chain_id}`: `{description}`
    InvalidChainId {
        chain_id: String,
        description: String,
    },
    /// invalid client state trust threshold: `{description}`
    InvalidTrustThreshold { description: String },
    /// invalid tendermint trust threshold: `{0}`
    InvalidTendermintTrustThreshold(TendermintError),
    /// invalid trusting period: `{description}`
    InvalidTrustingPeriod { description: String },
    /// invalid clock drift; must be greater than 0
    InvalidMaxClockDrift,
    /// invalid latest height: `{description}`
    InvalidLatestHeight { description: String },
    /// invalid header timestamp: `{0}`
    InvalidHeaderTimestamp(TimestampError),
    /// invalid host timestamp: `{0}`
    InvalidHostTimestamp(TimestampError),
    /// invalid header height: `{0}`
    InvalidHeaderHeight(u64),
    /// invalid misbehaviour: `{description}`
    InvalidMisbehaviour { description: String },
    /// mismatched revision heights: expected `{expected}`, actual `{actual}`
    MismatchedRevisionHeights { expected: u64, actual: u64 },
    /// mismatched header chain ids: expected `{expected}`, actual `{actual}`
    MismatchedHeaderChainIds { expected: String, actual: String },
    /// mismatched validator hashes: expected `{expected}`, actual `{actual}`
    MismatchedValidatorHashes { expected: Hash, actual: Hash },
    /// header trusted next validator set hash `{actual}` does not match hash `{expected}` stored on chain
    MismatchedTrustedNextValidatorsHash { expected: Hash, actual: Hash },
    /// header timestamp `{header_timestamp}` at height `{height}` is not monotonic with the stored consensus states
    NonMonotonicHeaderTimestamp {
        height: Height,
        header_timestamp: Timestamp,
    },
    /// trusted consensus state timestamp `{trusted}` is later than the host timestamp `{host}`
    InvalidConsensusStateTimestamp { trusted: Timestamp, host: Timestamp },
    /// failed to verify header: `{0}`
    FailedToVerifyHeader(Box<LightClientErrorDetail>),
    /// insufficient validator overlap: `{0}`
    InsufficientValidatorOverlap(VotingPowerTally),
    /// insufficient trusting period `{trusting_period:?}`; should be > consensus state timestamp `{duration_since_consensus_state:?}`
    InsufficientTrustingPeriod {
        duration_since_consensus_state: Duration,
        trusting_period: Duration,
    },
}

#[cfg(feature = "std")]
impl std::error::Error for TendermintClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::InvalidIdentifier(e) => Some(e),
            Self::InvalidTendermintTrustThreshold(e) => Some(e),
            Self::InvalidHeaderTimestamp(e) | Self::InvalidHostTimestamp(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TendermintClientError> for ClientError {
    fn from(e: TendermintClientError) -> Self {
        Self::ClientSpecific {
            description: e.to_string(),
        }
    }
}

impl From<IdentifierError> for TendermintClientError {
    fn from(e: IdentifierError) -> Self {
        Self::InvalidIdentifier(e)
    }
}

pub trait IntoResult<T, E> {
    fn into_result(self) -> Result<T, E>;
}

impl IntoResult<(), TendermintClientError> for Verdict {
    fn into_result(self) -> Result<(), TendermintClientError> {
        match self {
            Verdict::Success => Ok(()),
            Verdict::NotEnoughTrust(tally) => {
                Err(TendermintClientError::InsufficientValidatorOverlap(tally))
            }
            Verdict::Invalid(detail) => Err(TendermintClientError::FailedToVerifyHeader(Box::new(
                detail,
            ))),
        }
    }
}
