use std::{convert::TryFrom, time::Duration};

extern crate tapwave_core;
use tapwave_core::timing::{Timestamp, TimestampDifference};

use proptest::prelude::*;

proptest! {
    #[test]
    fn duration_to_timestamp_and_back(millis in 0..i32::MAX as u64) {
        let duration = Duration::from_millis(millis);
        let timestamp = Timestamp::try_from(duration).unwrap();
        let duration2 = Duration::try_from(timestamp).unwrap();

        prop_assert_eq!(duration, duration2);
    }

    #[test]
    fn duration_to_difference(millis in 0..i32::MAX as u64) {
        let difference = TimestampDifference::try_from(Duration::from_millis(millis)).unwrap();
        prop_assert_eq!(i64::from(difference.into_millis()), millis as i64);
    }
}

#[test]
fn too_long_duration() {
    let duration = Duration::from_millis(i32::MAX as u64 + 1);
    assert!(Timestamp::try_from(duration).is_err());
}
