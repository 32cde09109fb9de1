//! Functionality related to objects that constitute the maps.
#[cfg(test)]
use proptest_derive::Arbitrary;

use crate::{
    judgement::{HitWindows, Judgement},
    timing::Timestamp,
};

/// A point on the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Returns `true` if `other` is at most `radius` away from this point.
    #[inline]
    pub fn is_within(self, other: Point, radius: f32) -> bool {
        self.distance_squared(other) <= radius * radius
    }
}

/// Kind of a hit object.
///
/// Only affects how the object is drawn. All categories are judged the same way.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Category {
    /// A regular circle.
    #[default]
    Circle,
    /// A slider.
    Slider,
    /// A spinner.
    Spinner,
}

/// A timed target that the player has to click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitObject {
    /// Position of the object center.
    pub position: Point,
    /// The timestamp at which this object should be hit.
    pub timestamp: Timestamp,
    /// Kind of the object.
    pub category: Category,
    /// Judgement recorded for this object, if it has been resolved.
    outcome: Option<Judgement>,
}

impl HitObject {
    /// Creates a new, unresolved hit object.
    #[inline]
    pub fn new(position: Point, timestamp: Timestamp, category: Category) -> Self {
        Self {
            position,
            timestamp,
            category,
            outcome: None,
        }
    }

    /// Returns `true` if the object has been hit or missed.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns the judgement recorded for this object.
    #[inline]
    pub fn outcome(&self) -> Option<Judgement> {
        self.outcome
    }

    /// Classifies a hit at `now` against this object.
    ///
    /// Returns `None` if the object is already resolved or if `now` is further from the object
    /// timestamp than the miss window. Doesn't resolve the object.
    #[inline]
    pub fn classify(&self, hit_windows: &HitWindows, now: Timestamp) -> Option<Judgement> {
        if self.is_resolved() {
            return None;
        }

        hit_windows.judge(self.timestamp.distance(now))
    }

    /// Returns `true` if the object can no longer be hit at `now`.
    #[inline]
    pub(crate) fn is_expired(&self, hit_windows: &HitWindows, now: Timestamp) -> bool {
        self.timestamp.saturating_add(hit_windows.miss()) < now
    }

    /// Records the judgement for this object.
    ///
    /// Has no effect if the object is already resolved.
    #[inline]
    pub(crate) fn resolve(&mut self, judgement: Judgement) {
        if self.outcome.is_none() {
            self.outcome = Some(judgement);
        }
    }

    /// Forgets the recorded judgement.
    #[inline]
    pub(crate) fn unresolve(&mut self) {
        self.outcome = None;
    }
}
