use core::fmt::{Display, Error as FmtError, Formatter};

use ibc_lc_core::client::context::client_message::ClientHeader;
use ibc_lc_core::client::types::Height;
use ibc_lc_core::host::types::identifiers::ClientType;
use ibc_lc_core::primitives::Timestamp;

use crate::testapp::ibc::clients::mock::client_state::client_type as mock_client_type;
use crate::utils::year_2023;

/// A header of the mock chain. Unless told otherwise it is verified against
/// the latest consensus state at or below its own height.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MockHeader {
    pub height: Height,
    pub timestamp: Timestamp,
    pub trusted_height: Height,
}

impl Default for MockHeader {
    fn default() -> Self {
        Self::new(Height::min(0))
    }
}

impl Display for MockHeader {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(
            f,
            "MockHeader {{ height: {}, timestamp: {}, trusted_height: {} }}",
            self.height, self.timestamp, self.trusted_height
        )
    }
}

impl MockHeader {
    pub fn height(&self) -> Height {
        self.height
    }

    pub fn new(height: Height) -> Self {
        Self {
            height,
            timestamp: year_2023(),
            trusted_height: height,
        }
    }

    pub fn with_timestamp(self, timestamp: Timestamp) -> Self {
        Self { timestamp, ..self }
    }

    pub fn with_trusted_height(self, trusted_height: Height) -> Self {
        Self {
            trusted_height,
            ..self
        }
    }
}

impl ClientHeader for MockHeader {
    fn client_type(&self) -> ClientType {
        mock_client_type()
    }

    fn height(&self) -> Height {
        self.height
    }

    fn trusted_height(&self) -> Height {
        self.trusted_height
    }
}
