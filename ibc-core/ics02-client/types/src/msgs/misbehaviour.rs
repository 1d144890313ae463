//! Definition of domain type message `MsgSubmitMisbehaviour`.

/// A type of message that submits client misbehaviour proof. The evidence
/// itself names the client it accuses.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgSubmitMisbehaviour<M> {
    pub misbehaviour: M,
}

impl<M> MsgSubmitMisbehaviour<M> {
    pub fn new(misbehaviour: M) -> Self {
        MsgSubmitMisbehaviour { misbehaviour }
    }
}
