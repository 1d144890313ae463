use core::str::FromStr;

use derive_more::Into;
use ibc_lc_primitives::prelude::*;

use crate::error::IdentifierError;
use crate::validate::{validate_client_identifier, validate_client_type};

/// Opaque identifier of a light client hosted by the registry.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Into, derive_more::Display)]
pub struct ClientId(String);

impl ClientId {
    /// Builds a new client identifier.
    ///
    /// Client identifiers are deterministically formed from two elements:
    /// a prefix derived from the client type `ctype`, and a monotonically
    /// increasing `counter`; these are separated by a dash "-".
    ///
    /// # Example
    ///
    /// ```
    /// # use ibc_lc_host_types::identifiers::ClientId;
    /// let client_id = ClientId::new("07-tendermint", 0).unwrap();
    /// assert_eq!(client_id.as_str(), "07-tendermint-0");
    /// ```
    pub fn new(client_type: &str, counter: u64) -> Result<Self, IdentifierError> {
        let client_type = client_type.trim();
        validate_client_type(client_type)?;
        Self::from_str(&format!("{client_type}-{counter}"))
    }

    /// Get this identifier as a borrowed `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get this identifier as a borrowed byte slice
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl FromStr for ClientId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_client_identifier(s).map(|_| Self(s.to_string()))
    }
}

impl TryFrom<String> for ClientId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_client_identifier(&value)?;
        Ok(Self(value))
    }
}

/// Equality check against string literal (satisfies &ClientId == &str).
/// ```
/// use core::str::FromStr;
/// use ibc_lc_host_types::identifiers::ClientId;
/// let client_id = ClientId::from_str("clientidtwo");
/// assert!(client_id.is_ok());
/// client_id.map(|id| {assert_eq!(&id, "clientidtwo")});
/// ```
impl PartialEq<str> for ClientId {
    fn eq(&self, other: &str) -> bool {
        self.as_str().eq(other)
    }
}
