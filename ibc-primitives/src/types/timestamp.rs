//! Defines the representation of host and header timestamps.

use core::fmt::{Display, Error as FmtError, Formatter};
use core::hash::Hash;
use core::ops::{Add, Sub};
use core::time::Duration;

use displaydoc::Display;
use tendermint::Time;
use time::error::ComponentRange;
use time::macros::offset;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::prelude::*;

pub const ZERO_DURATION: Duration = Duration::from_secs(0);

/// A new type wrapper over `PrimitiveDateTime` with extended capabilities to
/// keep track of host timestamps.
///
/// The representable range is the one of a `u64` count of nanoseconds since
/// the UNIX epoch, i.e. from 1970 up to about the year 2554.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u64", into = "u64")
)]
#[derive(PartialEq, Eq, Copy, Clone, Debug, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    time: PrimitiveDateTime,
}

impl Timestamp {
    pub fn from_nanoseconds(nanoseconds: u64) -> Result<Self, TimestampError> {
        Self::try_from(nanoseconds)
    }

    pub fn from_unix_timestamp(secs: u64, nanos: u32) -> Result<Self, TimestampError> {
        if nanos > 999_999_999 {
            return Err(TimestampError::DateOutOfRange);
        }

        let total_nanos = i128::from(secs) * 1_000_000_000 + i128::from(nanos);

        let odt = OffsetDateTime::from_unix_timestamp_nanos(total_nanos)?;

        Self::from_utc(odt)
    }

    /// Produces a `Timestamp` from a zero-offset `OffsetDateTime`, rejecting
    /// anything outside the `u64` nanosecond range.
    fn from_utc(t: OffsetDateTime) -> Result<Self, TimestampError> {
        debug_assert_eq!(t.offset(), offset!(UTC));

        let nanos = t.unix_timestamp_nanos();
        if nanos < 0 || nanos > i128::from(u64::MAX) {
            return Err(TimestampError::DateOutOfRange);
        }

        Ok(Self {
            time: PrimitiveDateTime::new(t.date(), t.time()),
        })
    }

    /// Returns a `Timestamp` representation of the current time.
    #[cfg(feature = "std")]
    pub fn now() -> Result<Self, TimestampError> {
        OffsetDateTime::now_utc().try_into()
    }

    /// Computes the duration difference of another `Timestamp` from the current
    /// one. Returns `None` if `other` is later than `self`.
    pub fn duration_since(&self, other: &Self) -> Option<Duration> {
        let duration = self.time.assume_utc() - other.time.assume_utc();
        duration.try_into().ok()
    }

    /// Converts a `Timestamp` to a `u64` value in nanoseconds.
    /// ```
    /// use ibc_lc_primitives::Timestamp;
    ///
    /// let max = u64::MAX;
    /// let tx = Timestamp::from_nanoseconds(max).unwrap();
    /// assert_eq!(tx.nanoseconds(), max);
    /// let ti = Timestamp::from_nanoseconds(u64::MIN).unwrap();
    /// assert_eq!(ti.nanoseconds(), u64::MIN);
    /// ```
    pub fn nanoseconds(self) -> u64 {
        let odt: OffsetDateTime = self.into();
        // `from_utc` only admits values within the `u64` range
        u64::try_from(odt.unix_timestamp_nanos()).unwrap_or_default()
    }

    /// Converts into a Tendermint `Time`. Fails only for values that the
    /// Tendermint representation cannot hold.
    pub fn into_tm_time(self) -> Result<Time, TimestampError> {
        Time::try_from(self.time.assume_offset(offset!(UTC)))
            .map_err(|_| TimestampError::DateOutOfRange)
    }
}

impl TryFrom<OffsetDateTime> for Timestamp {
    type Error = TimestampError;

    fn try_from(t: OffsetDateTime) -> Result<Self, Self::Error> {
        Self::from_utc(t.to_offset(offset!(UTC)))
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(t: Timestamp) -> Self {
        t.time.assume_utc()
    }
}

impl TryFrom<u64> for Timestamp {
    type Error = TimestampError;

    fn try_from(nanoseconds: u64) -> Result<Self, Self::Error> {
        let odt = OffsetDateTime::from_unix_timestamp_nanos(nanoseconds.into())?;
        Self::from_utc(odt)
    }
}

impl From<Timestamp> for u64 {
    fn from(value: Timestamp) -> Self {
        value.nanoseconds()
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "Timestamp({})", self.time)
    }
}

impl Add<Duration> for Timestamp {
    type Output = Result<Self, TimestampError>;

    fn add(self, rhs: Duration) -> Self::Output {
        let duration = rhs
            .try_into()
            .map_err(|_| TimestampError::TimestampOverflow)?;
        let t = self
            .time
            .checked_add(duration)
            .ok_or(TimestampError::TimestampOverflow)?;
        Self::from_utc(t.assume_utc())
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Result<Self, TimestampError>;

    fn sub(self, rhs: Duration) -> Self::Output {
        let duration = rhs
            .try_into()
            .map_err(|_| TimestampError::TimestampOverflow)?;
        let t = self
            .time
            .checked_sub(duration)
            .ok_or(TimestampError::TimestampOverflow)?;
        Self::from_utc(t.assume_utc())
    }
}

impl TryFrom<Time> for Timestamp {
    type Error = TimestampError;

    fn try_from(tm_time: Time) -> Result<Self, Self::Error> {
        let odt: OffsetDateTime = tm_time.into();
        odt.try_into()
    }
}

#[derive(Debug, Display, derive_more::From)]
pub enum TimestampError {
    /// date out of range
    DateOutOfRange,
    /// timestamp overflow when modifying with duration
    TimestampOverflow,
    /// invalid date component: `{0}`
    Conversion(ComponentRange),
}

#[cfg(feature = "std")]
impl std::error::Error for TimestampError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Conversion(e) => Some(e),
            _ => None,
        }
    }
}
