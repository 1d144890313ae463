use core::str::FromStr;
use core::time::Duration;

use ibc_lc_core::client::context::client_state::ClientStateCommon;
use ibc_lc_core::client::types::Height;
use ibc_lc_core::host::types::identifiers::ClientType;

use crate::testapp::ibc::clients::mock::header::MockHeader;

pub const MOCK_CLIENT_TYPE: &str = "9999-mock";

pub fn client_type() -> ClientType {
    ClientType::from_str(MOCK_CLIENT_TYPE).expect("never fails because it's valid client type")
}

/// A mock of a client state. For an example of a real structure that this mocks, you can see
/// `ClientState` of ics07-tendermint/types/src/client_state.rs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MockClientState {
    pub header: MockHeader,
    pub trusting_period: Duration,
    pub frozen_height: Option<Height>,
}

impl MockClientState {
    /// Initializes a new `MockClientState` with the given `MockHeader` and a
    /// trusting period of 10 seconds as a default. If the trusting period
    /// needs to be changed, use the `with_trusting_period` method to override it.
    pub fn new(header: MockHeader) -> Self {
        Self {
            header,
            trusting_period: Duration::from_secs(10),
            frozen_height: None,
        }
    }

    pub fn with_trusting_period(self, trusting_period: Duration) -> Self {
        Self {
            trusting_period,
            ..self
        }
    }

    /// Moves the client to `header`, keeping the trust parameters.
    pub fn with_header(self, header: MockHeader) -> Self {
        Self { header, ..self }
    }

    pub fn frozen_at(self, frozen_height: Height) -> Self {
        Self {
            frozen_height: Some(frozen_height),
            ..self
        }
    }

    pub(crate) fn expired(&self, elapsed: Duration) -> bool {
        elapsed > self.trusting_period
    }
}

impl ClientStateCommon for MockClientState {
    fn client_type(&self) -> ClientType {
        client_type()
    }

    fn latest_height(&self) -> Height {
        self.header.height()
    }

    fn frozen_height(&self) -> Option<Height> {
        self.frozen_height
    }
}
