//! Contains the implementation of the Tendermint `ClientState` domain type.

use core::cmp::max;
use core::time::Duration;

use ibc_lc_client_context::client_state::ClientStateCommon;
use ibc_lc_client_types::Height;
use ibc_lc_host_types::identifiers::{ChainId, ClientType};
use ibc_lc_primitives::prelude::*;
use ibc_lc_primitives::ZERO_DURATION;
use tendermint::chain::Id as TmChainId;
use tendermint_light_client_verifier::options::Options;

use crate::error::TendermintClientError;
use crate::header::Header as TmHeader;
use crate::trust_threshold::TrustThreshold;

/// Defines data structure for Tendermint client state.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientState {
    pub chain_id: ChainId,
    pub trust_level: TrustThreshold,
    pub trusting_period: Duration,
    pub unbonding_period: Duration,
    pub max_clock_drift: Duration,
    pub latest_height: Height,
    pub frozen_height: Option<Height>,
}

impl ClientState {
    /// Constructs a new Tendermint `ClientState` by given parameters and checks
    /// if the parameters are valid.
    pub fn new(
        chain_id: ChainId,
        trust_level: TrustThreshold,
        trusting_period: Duration,
        unbonding_period: Duration,
        max_clock_drift: Duration,
        latest_height: Height,
    ) -> Result<Self, TendermintClientError> {
        let client_state = Self {
            chain_id,
            trust_level,
            trusting_period,
            unbonding_period,
            max_clock_drift,
            latest_height,
            // New valid client must not be frozen.
            frozen_height: None,
        };
        client_state.validate()?;
        Ok(client_state)
    }

    pub fn with_header(self, header: &TmHeader) -> Self {
        Self {
            latest_height: max(header.height(), self.latest_height),
            ..self
        }
    }

    pub fn with_frozen_height(self, h: Height) -> Self {
        Self {
            frozen_height: Some(h),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), TendermintClientError> {
        TmChainId::try_from(self.chain_id.as_str()).map_err(|e| {
            TendermintClientError::InvalidChainId {
                chain_id: self.chain_id.to_string(),
                description: e.to_string(),
            }
        })?;

        self.trust_level
            .as_fraction()
            .map_err(|e| TendermintClientError::InvalidTrustThreshold {
                description: e.to_string(),
            })?;

        if self.trusting_period <= ZERO_DURATION {
            return Err(TendermintClientError::InvalidTrustingPeriod {
                description: format!(
                    "ClientState trusting period ({:?}) must be greater than zero",
                    self.trusting_period
                ),
            });
        }

        if self.trusting_period >= self.unbonding_period {
            return Err(TendermintClientError::InvalidTrustingPeriod {
                description: format!(
                    "ClientState trusting period ({:?}) must be smaller than unbonding period ({:?})",
                    self.trusting_period, self.unbonding_period
                ),
            });
        }

        if self.max_clock_drift <= ZERO_DURATION {
            return Err(TendermintClientError::InvalidMaxClockDrift);
        }

        if self.latest_height.revision_number() != self.chain_id.revision_number() {
            return Err(TendermintClientError::InvalidLatestHeight {
                description: format!(
                    "latest height revision number {} does not match chain id `{}`",
                    self.latest_height.revision_number(),
                    self.chain_id
                ),
            });
        }

        Ok(())
    }

    /// Helper method to produce a [`Options`] struct for use in
    /// Tendermint-specific light client verification.
    pub fn as_light_client_options(&self) -> Result<Options, TendermintClientError> {
        Ok(Options {
            trust_threshold: self.trust_level.as_fraction().map_err(|e| {
                TendermintClientError::InvalidTrustThreshold {
                    description: e.to_string(),
                }
            })?,
            trusting_period: self.trusting_period,
            clock_drift: self.max_clock_drift,
        })
    }

    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }
}

impl ClientStateCommon for ClientState {
    fn client_type(&self) -> ClientType {
        crate::client_type()
    }

    fn latest_height(&self) -> Height {
        self.latest_height
    }

    fn frozen_height(&self) -> Option<Height> {
        self.frozen_height
    }
}
