//! Score, combo and accuracy tracking.
use core::fmt;

use crate::judgement::Judgement;

/// Points awarded for each judgement.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ScoreValues {
    /// Points for a perfect hit.
    pub perfect: i64,
    /// Points for a great hit.
    pub great: i64,
    /// Points for an okay hit.
    pub okay: i64,
    /// Points for a miss. May be negative.
    pub miss: i64,
}

impl ScoreValues {
    /// Returns the points awarded for `judgement`.
    #[inline]
    pub fn value(&self, judgement: Judgement) -> i64 {
        match judgement {
            Judgement::Perfect => self.perfect,
            Judgement::Great => self.great,
            Judgement::Okay => self.okay,
            Judgement::Miss => self.miss,
        }
    }
}

impl Default for ScoreValues {
    fn default() -> Self {
        Self {
            perfect: 300,
            great: 100,
            okay: 50,
            miss: 0,
        }
    }
}

/// Tracks score, combo and accuracy over a session.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTracker {
    values: ScoreValues,
    score: i64,
    combo: u32,
    max_combo: u32,
    perfect: u32,
    great: u32,
    okay: u32,
    miss: u32,
    accuracy: f32,
}

impl ScoreTracker {
    /// Creates a tracker with nothing recorded.
    pub fn new(values: ScoreValues) -> Self {
        Self {
            values,
            score: 0,
            combo: 0,
            max_combo: 0,
            perfect: 0,
            great: 0,
            okay: 0,
            miss: 0,
            accuracy: 0.,
        }
    }

    /// Records one judgement.
    pub fn record(&mut self, judgement: Judgement) {
        self.score = self.score.saturating_add(self.values.value(judgement));

        let counter = match judgement {
            Judgement::Perfect => &mut self.perfect,
            Judgement::Great => &mut self.great,
            Judgement::Okay => &mut self.okay,
            Judgement::Miss => &mut self.miss,
        };
        *counter = counter.saturating_add(1);

        if judgement.breaks_combo() {
            self.combo = 0;
        } else {
            self.combo = self.combo.saturating_add(1);
        }
        self.max_combo = self.max_combo.max(self.combo);

        self.accuracy = self.compute_accuracy();
    }

    /// Clears everything recorded so far. The score values are kept.
    pub fn reset(&mut self) {
        *self = Self::new(self.values);
    }

    fn compute_accuracy(&self) -> f32 {
        let total = self.total_judgements();
        if total == 0 {
            return 0.;
        }

        let points: u64 = Judgement::ALL
            .into_iter()
            .map(|judgement| u64::from(self.count(judgement)) * judgement.accuracy_weight())
            .sum();
        let max_points = total * Judgement::Perfect.accuracy_weight();

        (points as f64 / max_points as f64 * 100.) as f32
    }

    /// Returns the cumulative score.
    #[inline]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Returns the current combo.
    #[inline]
    pub fn combo(&self) -> u32 {
        self.combo
    }

    /// Returns the largest combo reached so far.
    #[inline]
    pub fn max_combo(&self) -> u32 {
        self.max_combo
    }

    /// Returns the accuracy in percent, from 0 to 100.
    ///
    /// Zero when nothing has been recorded.
    #[inline]
    pub fn accuracy(&self) -> f32 {
        self.accuracy
    }

    /// Returns how many times `judgement` was recorded.
    #[inline]
    pub fn count(&self, judgement: Judgement) -> u32 {
        match judgement {
            Judgement::Perfect => self.perfect,
            Judgement::Great => self.great,
            Judgement::Okay => self.okay,
            Judgement::Miss => self.miss,
        }
    }

    /// Returns the number of judgements recorded.
    #[inline]
    pub fn total_judgements(&self) -> u64 {
        Judgement::ALL
            .into_iter()
            .map(|judgement| u64::from(self.count(judgement)))
            .sum()
    }

    /// Returns the score values this tracker awards.
    #[inline]
    pub fn values(&self) -> &ScoreValues {
        &self.values
    }

    /// Returns the letter grade for the current accuracy.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn grade(&self) -> Option<Grade> {
        if self.total_judgements() == 0 {
            None
        } else {
            Some(Grade::from_accuracy(self.accuracy))
        }
    }

    /// Returns a helper that formats the accuracy as `99.12%`.
    #[inline]
    pub fn display_accuracy(&self) -> DisplayAccuracy {
        DisplayAccuracy(self.accuracy)
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new(ScoreValues::default())
    }
}

/// Formats an accuracy with two decimal places and a percent sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayAccuracy(f32);

impl fmt::Display for DisplayAccuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

/// Letter grade derived from accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    /// 100% accuracy.
    X,
    /// At least 95%.
    S,
    /// At least 90%.
    A,
    /// At least 80%.
    B,
    /// At least 70%.
    C,
    /// Below 70%.
    D,
}

impl Grade {
    /// Returns the grade for an accuracy in percent.
    pub fn from_accuracy(accuracy: f32) -> Self {
        if accuracy >= 100. {
            Grade::X
        } else if accuracy >= 95. {
            Grade::S
        } else if accuracy >= 90. {
            Grade::A
        } else if accuracy >= 80. {
            Grade::B
        } else if accuracy >= 70. {
            Grade::C
        } else {
            Grade::D
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Grade::X => "X",
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        })
    }
}
