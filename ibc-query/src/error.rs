use displaydoc::Display;
use ibc_lc_core::client::types::error::ClientError;
use ibc_lc_core::client::types::Height;
use ibc_lc_core::handler::types::error::ContextError;
use ibc_lc_core::host::types::error::{HostError, IdentifierError};

/// The main error type of the ibc-lc-query crate. This type mainly
/// serves to surface lower-level errors that occur when executing
/// ibc-lc-query's codepaths.
#[derive(Debug, Display)]
pub enum QueryError {
    /// context error: `{0}`
    Context(ContextError),
    /// identifier error: `{0}`
    Identifier(IdentifierError),
    /// no committed state to query at height `{height}`; it is either pruned or not yet produced
    SnapshotNotFound { height: Height },
}

impl From<ContextError> for QueryError {
    fn from(e: ContextError) -> Self {
        Self::Context(e)
    }
}

impl From<ClientError> for QueryError {
    fn from(e: ClientError) -> Self {
        Self::Context(ContextError::ClientError(e))
    }
}

impl From<HostError> for QueryError {
    fn from(e: HostError) -> Self {
        Self::Context(ContextError::HostError(e))
    }
}

impl From<IdentifierError> for QueryError {
    fn from(e: IdentifierError) -> Self {
        Self::Identifier(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Context(e) => Some(e),
            Self::Identifier(e) => Some(e),
            Self::SnapshotNotFound { .. } => None,
        }
    }
}
