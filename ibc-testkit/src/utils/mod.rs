use ibc_lc_core::primitives::Timestamp;

/// Returns a `Timestamp` representation of beginning of year 2023.
///
/// This is introduced to initialize [`MockContext`](crate::context::MockContext)s
/// and generated counterparty blocks against the same fixed clock. Two
/// contexts initialized with `Timestamp::now()` would not agree on the time,
/// so the headers of one could not be checked against the other.
pub fn year_2023() -> Timestamp {
    // Sun Jan 01 2023 00:00:00 GMT+0000
    Timestamp::from_unix_timestamp(1_672_531_200, 0).expect("should be a valid time")
}
