//! Types and utilities related to timing.
use core::{
    convert::TryFrom,
    fmt,
    ops::{Add, Sub},
    time::Duration,
};

#[cfg(test)]
use proptest_derive::Arbitrary;

use crate::impl_ops;

/// A point in time, measured from the start of the session.
///
/// Timestamps are represented as `i32`s in milliseconds.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Default)]
#[cfg_attr(test, derive(Arbitrary))]
pub struct Timestamp(pub i32);

/// Difference between two [`Timestamp`]s.
///
/// Differences are represented as `i32`s in milliseconds.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Default)]
#[cfg_attr(test, derive(Arbitrary))]
pub struct TimestampDifference(pub i32);

/// Error returned when converting a [`Duration`] which doesn't fit into a [`Timestamp`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TryFromDurationError(());

/// Error returned when converting a negative [`Timestamp`] into a [`Duration`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TryFromTimestampError(());

impl Timestamp {
    /// Returns the zero timestamp, corresponding to the session start.
    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Creates a `Timestamp` from a number of milliseconds.
    #[inline]
    pub const fn from_millis(millis: i32) -> Self {
        Self(millis)
    }

    /// Returns the number of milliseconds in this `Timestamp`.
    #[inline]
    pub const fn into_millis(self) -> i32 {
        self.0
    }

    /// Returns `self - earlier`, saturating at the numeric bounds instead of overflowing.
    #[inline]
    pub fn saturating_since(self, earlier: Timestamp) -> TimestampDifference {
        TimestampDifference(self.0.saturating_sub(earlier.0))
    }

    /// Returns the absolute distance between two timestamps in milliseconds.
    ///
    /// Unlike `(a - b).abs()` this never overflows.
    #[inline]
    pub fn distance(self, other: Timestamp) -> u32 {
        (i64::from(self.0) - i64::from(other.0)).unsigned_abs() as u32
    }
}

impl TimestampDifference {
    /// Creates a `TimestampDifference` from a number of milliseconds.
    #[inline]
    pub const fn from_millis(millis: i32) -> Self {
        Self(millis)
    }

    /// Returns the number of milliseconds in this `TimestampDifference`.
    #[inline]
    pub const fn into_millis(self) -> i32 {
        self.0
    }
}

impl_ops!(Timestamp, TimestampDifference);

impl TryFrom<Duration> for Timestamp {
    type Error = TryFromDurationError;

    #[inline]
    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        i32::try_from(value.as_millis())
            .map(Self)
            .map_err(|_| TryFromDurationError(()))
    }
}

impl TryFrom<Timestamp> for Duration {
    type Error = TryFromTimestampError;

    #[inline]
    fn try_from(value: Timestamp) -> Result<Self, Self::Error> {
        u64::try_from(value.0)
            .map(Duration::from_millis)
            .map_err(|_| TryFromTimestampError(()))
    }
}

impl TryFrom<Duration> for TimestampDifference {
    type Error = TryFromDurationError;

    #[inline]
    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        i32::try_from(value.as_millis())
            .map(Self)
            .map_err(|_| TryFromDurationError(()))
    }
}

impl fmt::Display for TryFromDurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("duration does not fit into a timestamp")
    }
}

impl fmt::Display for TryFromTimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("negative timestamp cannot be converted into a duration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn distance_is_symmetric_at_the_bounds() {
        let a = Timestamp(i32::MIN);
        let b = Timestamp(i32::MAX);
        assert_eq!(a.distance(b), u32::MAX);
        assert_eq!(b.distance(a), u32::MAX);
    }

    #[test]
    fn negative_timestamp_to_duration() {
        assert!(Duration::try_from(Timestamp(-1)).is_err());
    }

    proptest! {
        #[test]
        fn distance_matches_difference(a in -1_000_000..1_000_000i32, b in -1_000_000..1_000_000i32) {
            let a = Timestamp(a);
            let b = Timestamp(b);
            prop_assert_eq!(a.distance(b), (a - b).0.unsigned_abs());
        }

        #[test]
        fn saturating_add_doesnt_panic(a: Timestamp, b: TimestampDifference) {
            let _ = a.saturating_add(b);
            let _ = a.saturating_sub(b);
        }
    }
}
