use core::time::Duration;

use ibc_lc_core::client::types::Height;
use ibc_lc_core::primitives::Timestamp;

/// A block of the host chain. The registry only ever observes its height and
/// time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostBlock {
    height: Height,
    timestamp: Timestamp,
}

impl HostBlock {
    pub fn new(height: Height, timestamp: Timestamp) -> Self {
        Self { height, timestamp }
    }

    pub fn height(&self) -> Height {
        self.height
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Produces the block that follows this one after `block_time`.
    pub fn next(&self, block_time: Duration) -> Self {
        Self {
            height: self.height.increment(),
            timestamp: (self.timestamp + block_time).expect("Never fails"),
        }
    }
}
