use core::time::Duration;

use displaydoc::Display;
use ibc_lc_core::client::types::error::ClientError;
use ibc_lc_core::client::types::Height;
use ibc_lc_core::primitives::prelude::*;
use ibc_lc_core::primitives::Timestamp;

/// Errors raised by the mock light client.
#[derive(Debug, Display)]
pub enum MockClientError {
    /// stale header at height `{header_height}`; the client is already at `{latest_height}`
    StaleHeader {
        header_height: Height,
        latest_height: Height,
    },
    /// header time `{header_timestamp}` precedes the trusted time `{trusted_timestamp}`
    HeaderBeforeTrustedState {
        header_timestamp: Timestamp,
        trusted_timestamp: Timestamp,
    },
    /// trusted consensus state from `{trusted_timestamp}` lies in the future of the host time `{host_timestamp}`
    TrustedStateInFuture {
        trusted_timestamp: Timestamp,
        host_timestamp: Timestamp,
    },
    /// trusted consensus state is `{elapsed:?}` old, past the trusting period of `{trusting_period:?}`
    TrustedStateExpired {
        elapsed: Duration,
        trusting_period: Duration,
    },
    /// invalid misbehaviour: `{description}`
    InvalidMisbehaviour { description: String },
}

impl From<MockClientError> for ClientError {
    fn from(e: MockClientError) -> Self {
        ClientError::ClientSpecific {
            description: e.to_string(),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MockClientError {}
