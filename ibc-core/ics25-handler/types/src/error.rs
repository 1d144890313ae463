//! Defines the context error type

use derive_more::From;
use displaydoc::Display;
use ibc_lc_client_types::error::ClientError;
use ibc_lc_host_types::error::HostError;
use ibc_lc_host_types::identifiers::ClientId;
use ibc_lc_primitives::prelude::*;

/// Top-level error
#[derive(Debug, Display, From)]
pub enum ContextError {
    /// ICS02 Client error: {0}
    ClientError(ClientError),
    /// host error: {0}
    HostError(HostError),
    /// store error for client `{client_id}`: {error}
    #[from(ignore)]
    ClientStore { client_id: ClientId, error: HostError },
    /// store corruption detected for client `{client_id}`: {description}
    #[from(ignore)]
    StoreCorruption {
        client_id: ClientId,
        description: String,
    },
}

impl ContextError {
    /// Store corruption means the records of a client contradict each other.
    /// The host has to halt instead of retrying such a message.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::StoreCorruption { .. })
    }

    /// Attaches `client_id` to a host fault raised while accessing the
    /// records of that client. Other errors already name their client.
    pub fn for_client(self, client_id: &ClientId) -> Self {
        match self {
            Self::HostError(error) => Self::ClientStore {
                client_id: client_id.clone(),
                error,
            },
            other => other,
        }
    }

    pub fn store_corruption<T: ToString>(client_id: ClientId, description: T) -> Self {
        Self::StoreCorruption {
            client_id,
            description: description.to_string(),
        }
    }
}

impl From<ContextError> for ClientError {
    fn from(context_error: ContextError) -> Self {
        match context_error {
            ContextError::ClientError(e) => e,
            ContextError::HostError(e) => ClientError::Host(e),
            ContextError::ClientStore { .. } | ContextError::StoreCorruption { .. } => {
                ClientError::Other {
                    description: context_error.to_string(),
                }
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ClientError(e) => Some(e),
            Self::HostError(e) => Some(e),
            Self::ClientStore { error, .. } => Some(error),
            Self::StoreCorruption { .. } => None,
        }
    }
}
