//! Defines the trust threshold of a Tendermint client, represented as a
//! fraction.

use core::fmt::{Display, Error as FmtError, Formatter};

use ibc_lc_client_types::error::ClientError;
use tendermint::trust_threshold::TrustThresholdFraction;

/// Represents the level of trust that a client has towards a set of validators
/// of a chain.
///
/// Given a _trusted_ header at height H1 and an _untrusted_ header at height
/// H2 > H1, the trust threshold is the minimal ratio of the voting power
/// behind H2 that must originate from the validators trusted at H1 in order
/// to deem H2 as trusted. Since Tendermint assumes that at least 2/3 of the
/// validators are honest, a typical trust threshold in practice is 1/3.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TrustThreshold {
    numerator: u64,
    denominator: u64,
}

impl TrustThreshold {
    /// Constant for a trust threshold of 1/3.
    pub const ONE_THIRD: Self = Self {
        numerator: 1,
        denominator: 3,
    };

    /// Constant for a trust threshold of 2/3.
    pub const TWO_THIRDS: Self = Self {
        numerator: 2,
        denominator: 3,
    };

    /// Instantiate a TrustThreshold with the given denominator and
    /// numerator.
    ///
    /// The constructor succeeds if the fraction is in the range `[0, 1]`.
    /// Whether it is usable for verification is checked by
    /// [`TrustThreshold::as_fraction`].
    pub fn new(numerator: u64, denominator: u64) -> Result<Self, ClientError> {
        if numerator > denominator || denominator == 0 {
            return Err(ClientError::InvalidTrustThreshold {
                numerator,
                denominator,
            });
        }

        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// The numerator of the fraction underlying this trust threshold.
    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    /// The denominator of the fraction underlying this trust threshold.
    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Converts into the fraction the Tendermint verifier works with, which
    /// only admits values in `[1/3, 1]`.
    pub fn as_fraction(&self) -> Result<TrustThresholdFraction, ClientError> {
        TrustThresholdFraction::new(self.numerator, self.denominator).map_err(|_| {
            ClientError::InvalidTrustThreshold {
                numerator: self.numerator,
                denominator: self.denominator,
            }
        })
    }
}

impl Default for TrustThreshold {
    fn default() -> Self {
        Self::ONE_THIRD
    }
}

impl From<TrustThresholdFraction> for TrustThreshold {
    fn from(t: TrustThresholdFraction) -> Self {
        Self {
            numerator: t.numerator(),
            denominator: t.denominator(),
        }
    }
}

impl TryFrom<TrustThreshold> for TrustThresholdFraction {
    type Error = ClientError;

    fn try_from(t: TrustThreshold) -> Result<TrustThresholdFraction, ClientError> {
        t.as_fraction()
    }
}

impl Display for TrustThreshold {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
