use ibc_lc_core::client::context::client_message::ClientMisbehaviour;
use ibc_lc_core::client::types::Height;
use ibc_lc_core::host::types::identifiers::{ClientId, ClientType};

use crate::testapp::ibc::clients::mock::client_state::client_type as mock_client_type;
use crate::testapp::ibc::clients::mock::header::MockHeader;

/// Two mock headers submitted as proof that the mock chain forked.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockMisbehaviour {
    pub client_id: ClientId,
    pub header1: MockHeader,
    pub header2: MockHeader,
}

impl MockMisbehaviour {
    pub fn new(client_id: ClientId, header1: MockHeader, header2: MockHeader) -> Self {
        Self {
            client_id,
            header1,
            header2,
        }
    }

    /// Two distinct headers for one height, or a higher header that is not
    /// later in time.
    pub fn is_conflicting(&self) -> bool {
        if self.header1.height == self.header2.height {
            self.header1.timestamp != self.header2.timestamp
        } else {
            self.header1.timestamp <= self.header2.timestamp
        }
    }
}

impl ClientMisbehaviour for MockMisbehaviour {
    fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    fn client_type(&self) -> ClientType {
        mock_client_type()
    }

    fn height(&self) -> Height {
        self.header1.height
    }
}
