use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use ibc_lc_primitives::prelude::*;

use crate::error::IdentifierError;
use crate::validate::validate_chain_identifier;

/// Defines the domain type for chain identifiers.
///
/// A valid `ChainId` follows the format {chain name}-{revision number} where
/// the revision number indicates how many times the chain has been upgraded.
/// Creating `ChainId`s not in this format will result in a `ChainId` with a
/// revision number of 0.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainId {
    id: String,
    revision_number: u64,
}

impl ChainId {
    /// Creates a new `ChainId` from a string.
    ///
    /// ```
    /// use ibc_lc_host_types::identifiers::ChainId;
    ///
    /// let chain_id = ChainId::new("chainA-1").unwrap();
    /// assert_eq!(chain_id.revision_number(), 1);
    ///
    /// let chain_id = ChainId::new("chainA").unwrap();
    /// assert_eq!(chain_id.revision_number(), 0);
    /// ```
    pub fn new(chain_id: &str) -> Result<Self, IdentifierError> {
        Self::from_str(chain_id)
    }

    /// Get a reference to the underlying string.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Splits the chain identifier into its name and revision number.
    pub fn split_chain_id(&self) -> Result<(&str, u64), IdentifierError> {
        parse_chain_id_string(self.as_str())
    }

    /// Extract the revision number from the chain identifier
    pub fn revision_number(&self) -> u64 {
        self.revision_number
    }
}

/// Parses a string intended to represent a `ChainId` and, if successful,
/// returns a tuple containing the chain name and revision number.
fn parse_chain_id_string(chain_id_str: &str) -> Result<(&str, u64), IdentifierError> {
    let invalid = || IdentifierError::InvalidPrefix {
        prefix: chain_id_str.to_string(),
    };

    let (name, revision) = chain_id_str.rsplit_once('-').ok_or_else(invalid)?;

    if name.is_empty() || revision.is_empty() {
        return Err(invalid());
    }

    // Leading zeros are not a canonical revision number.
    if revision.len() > 1 && revision.starts_with('0') {
        return Err(invalid());
    }

    let revision_number = revision.parse::<u64>().map_err(|_| invalid())?;

    Ok((name, revision_number))
}

impl FromStr for ChainId {
    type Err = IdentifierError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        validate_chain_identifier(id)?;

        let revision_number = parse_chain_id_string(id)
            .map(|(_, revision_number)| revision_number)
            .unwrap_or_default();

        Ok(Self {
            id: id.into(),
            revision_number,
        })
    }
}

impl TryFrom<String> for ChainId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<ChainId> for String {
    fn from(chain_id: ChainId) -> String {
        chain_id.id
    }
}

impl Display for ChainId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.id)
    }
}
