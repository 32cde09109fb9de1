//! Judgements and the timing windows that produce them.
use core::fmt;

#[cfg(test)]
use proptest_derive::Arbitrary;

use crate::timing::TimestampDifference;

/// Outcome of judging a single hit object.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Judgement {
    /// Hit within the tightest window.
    Perfect,
    /// Hit within the second window.
    Great,
    /// Hit within the third window.
    Okay,
    /// Hit way off, or not hit at all.
    Miss,
}

impl Judgement {
    /// All judgements, from best to worst.
    pub const ALL: [Judgement; 4] = [
        Judgement::Perfect,
        Judgement::Great,
        Judgement::Okay,
        Judgement::Miss,
    ];

    /// Returns the weight of this judgement in the accuracy formula.
    ///
    /// A perfect hit weighs 300, so accuracy is the sum of weights divided by 300 per judgement.
    #[inline]
    pub fn accuracy_weight(self) -> u64 {
        match self {
            Judgement::Perfect => 300,
            Judgement::Great => 100,
            Judgement::Okay => 50,
            Judgement::Miss => 0,
        }
    }

    /// Returns `true` if this judgement resets the combo.
    #[inline]
    pub fn breaks_combo(self) -> bool {
        self == Judgement::Miss
    }
}

impl fmt::Display for Judgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Judgement::Perfect => "perfect",
            Judgement::Great => "great",
            Judgement::Okay => "okay",
            Judgement::Miss => "miss",
        })
    }
}

/// The four ascending timing windows.
///
/// Each window is the largest distance from the scheduled time, inclusive, that still gives the
/// corresponding judgement. Objects past the miss window can't be judged yet (when early) or are
/// expired (when late).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct HitWindows {
    perfect: TimestampDifference,
    great: TimestampDifference,
    okay: TimestampDifference,
    miss: TimestampDifference,
}

/// An error returned from [`HitWindows::new()`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InvalidHitWindows {
    /// One of the windows is negative.
    Negative(TimestampDifference),
    /// The windows are not strictly ascending.
    ///
    /// The tuple contains the two offending neighbouring windows.
    NotAscending(TimestampDifference, TimestampDifference),
}

impl fmt::Display for InvalidHitWindows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative(window) => write!(f, "hit window of {} ms is negative", window.0),
            Self::NotAscending(a, b) => write!(
                f,
                "hit windows must be strictly ascending, but {} ms is followed by {} ms",
                a.0, b.0
            ),
        }
    }
}

impl HitWindows {
    /// Creates a new set of hit windows.
    ///
    /// The windows must be non-negative and strictly ascending.
    pub fn new(
        perfect: TimestampDifference,
        great: TimestampDifference,
        okay: TimestampDifference,
        miss: TimestampDifference,
    ) -> Result<Self, InvalidHitWindows> {
        if perfect.0 < 0 {
            return Err(InvalidHitWindows::Negative(perfect));
        }

        for pair in [perfect, great, okay, miss].windows(2) {
            if pair[0] >= pair[1] {
                return Err(InvalidHitWindows::NotAscending(pair[0], pair[1]));
            }
        }

        Ok(Self {
            perfect,
            great,
            okay,
            miss,
        })
    }

    /// Creates hit windows from millisecond values.
    #[inline]
    pub fn from_millis(
        perfect: i32,
        great: i32,
        okay: i32,
        miss: i32,
    ) -> Result<Self, InvalidHitWindows> {
        Self::new(
            TimestampDifference::from_millis(perfect),
            TimestampDifference::from_millis(great),
            TimestampDifference::from_millis(okay),
            TimestampDifference::from_millis(miss),
        )
    }

    /// Returns the window for the given judgement.
    #[inline]
    pub fn window(&self, judgement: Judgement) -> TimestampDifference {
        match judgement {
            Judgement::Perfect => self.perfect,
            Judgement::Great => self.great,
            Judgement::Okay => self.okay,
            Judgement::Miss => self.miss,
        }
    }

    /// Returns the largest window, past which objects are considered expired.
    #[inline]
    pub fn miss(&self) -> TimestampDifference {
        self.miss
    }

    /// Classifies a distance from the scheduled time, in milliseconds.
    ///
    /// Returns `None` if the distance is past the miss window.
    pub fn judge(&self, distance: u32) -> Option<Judgement> {
        Judgement::ALL
            .into_iter()
            // Windows are validated to be non-negative.
            .find(|&judgement| distance <= self.window(judgement).0 as u32)
    }
}

impl Default for HitWindows {
    fn default() -> Self {
        Self {
            perfect: TimestampDifference::from_millis(50),
            great: TimestampDifference::from_millis(100),
            okay: TimestampDifference::from_millis(150),
            miss: TimestampDifference::from_millis(200),
        }
    }
}
