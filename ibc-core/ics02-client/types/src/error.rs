//! Defines the client error type

use core::convert::Infallible;

use displaydoc::Display;
use ibc_lc_host_types::error::{HostError, IdentifierError};
use ibc_lc_host_types::identifiers::{ClientId, ClientType};
use ibc_lc_primitives::prelude::*;
use ibc_lc_primitives::TimestampError;

use crate::height::Height;

/// Encodes all the possible client errors
#[derive(Debug, Display)]
pub enum ClientError {
    /// host error: `{0}`
    Host(HostError),
    /// identifier error: `{0}`
    Identifier(IdentifierError),
    /// timestamp error: `{0}`
    Timestamp(TimestampError),
    /// client state not found for client `{client_id}`
    ClientStateNotFound { client_id: ClientId },
    /// client type not found for client `{client_id}`
    ClientTypeNotFound { client_id: ClientId },
    /// consensus state not found for client `{client_id}` at height `{height}`
    ConsensusStateNotFound { client_id: ClientId, height: Height },
    /// client state already exists for client `{client_id}`
    ClientStateAlreadyExists { client_id: ClientId },
    /// mismatched client type for client `{client_id}`: expected `{expected}`, actual `{actual}`
    MismatchedClientType {
        client_id: ClientId,
        expected: ClientType,
        actual: ClientType,
    },
    /// client `{client_id}` is frozen at height `{frozen_height}`
    ClientFrozen {
        client_id: ClientId,
        frozen_height: Height,
    },
    /// unsupported client type `{client_type}` for client `{client_id}`
    UnsupportedClientType {
        client_id: ClientId,
        client_type: ClientType,
    },
    /// unrecognized misbehaviour type `{client_type}` for client `{client_id}`
    UnrecognizedMisbehaviourType {
        client_id: ClientId,
        client_type: ClientType,
    },
    /// failed to initialise client `{client_id}`: `{error}`
    FailedInitialisation {
        client_id: ClientId,
        error: Box<ClientError>,
    },
    /// failed header verification for client `{client_id}`: `{error}`
    FailedHeaderVerification {
        client_id: ClientId,
        error: Box<ClientError>,
    },
    /// failed misbehaviour verification for client `{client_id}`: `{error}`
    FailedMisbehaviourVerification {
        client_id: ClientId,
        error: Box<ClientError>,
    },
    /// conflicting consensus state for client `{client_id}` at height `{height}`
    ConflictingConsensusState { client_id: ClientId, height: Height },
    /// invalid height; cannot be zero or negative
    InvalidHeight,
    /// invalid trust threshold: `{numerator}`/`{denominator}`
    InvalidTrustThreshold { numerator: u64, denominator: u64 },
    /// invalid client state type: `{0}`
    InvalidClientStateType(String),
    /// invalid consensus state type: `{0}`
    InvalidConsensusStateType(String),
    /// invalid header type: `{0}`
    InvalidHeaderType(String),
    /// invalid misbehaviour type: `{0}`
    InvalidMisbehaviourType(String),
    /// invalid attribute key: `{0}`
    InvalidAttributeKey(String),
    /// invalid attribute value: `{0}`
    InvalidAttributeValue(String),
    /// missing attribute key
    MissingAttributeKey,
    /// missing attribute value
    MissingAttributeValue,
    /// invalid event kind: expected `{expected}`, actual `{actual}`
    InvalidEventKind { expected: String, actual: String },
    /// client-specific error: `{description}`
    ClientSpecific { description: String },
    /// other error: `{description}`
    Other { description: String },
}

impl ClientError {
    /// Returns the client the error refers to, if any.
    pub fn client_id(&self) -> Option<&ClientId> {
        match self {
            Self::ClientStateNotFound { client_id }
            | Self::ClientTypeNotFound { client_id }
            | Self::ConsensusStateNotFound { client_id, .. }
            | Self::ClientStateAlreadyExists { client_id }
            | Self::MismatchedClientType { client_id, .. }
            | Self::ClientFrozen { client_id, .. }
            | Self::UnsupportedClientType { client_id, .. }
            | Self::UnrecognizedMisbehaviourType { client_id, .. }
            | Self::FailedInitialisation { client_id, .. }
            | Self::FailedHeaderVerification { client_id, .. }
            | Self::FailedMisbehaviourVerification { client_id, .. }
            | Self::ConflictingConsensusState { client_id, .. } => Some(client_id),
            _ => None,
        }
    }
}

impl From<&'static str> for ClientError {
    fn from(s: &'static str) -> Self {
        Self::Other {
            description: s.to_string(),
        }
    }
}

impl From<Infallible> for ClientError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

impl From<HostError> for ClientError {
    fn from(e: HostError) -> Self {
        Self::Host(e)
    }
}

impl From<IdentifierError> for ClientError {
    fn from(e: IdentifierError) -> Self {
        Self::Identifier(e)
    }
}

impl From<TimestampError> for ClientError {
    fn from(e: TimestampError) -> Self {
        Self::Timestamp(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Host(e) => Some(e),
            Self::Identifier(e) => Some(e),
            Self::Timestamp(e) => Some(e),
            Self::FailedInitialisation { error, .. }
            | Self::FailedHeaderVerification { error, .. }
            | Self::FailedMisbehaviourVerification { error, .. } => Some(error.as_ref()),
            _ => None,
        }
    }
}
