use core::fmt::Debug;

use ibc_lc_commitment_types::commitment::CommitmentRoot;
use ibc_lc_primitives::Timestamp;

/// Defines methods that all `ConsensusState`s should provide.
///
/// One can think of a "consensus state" as a pruned header, to be stored on chain. In other words,
/// a consensus state only contains the header's information needed by IBC message handlers.
///
/// Stored consensus states are immutable; `PartialEq` lets the registry tell an
/// identical re-submission from a conflicting one.
pub trait ConsensusState: Clone + Debug + PartialEq + Send + Sync {
    /// Commitment root of the consensus state, which is used for key-value pair verification.
    fn root(&self) -> &CommitmentRoot;

    /// The timestamp of the consensus state
    fn timestamp(&self) -> Timestamp;
}
