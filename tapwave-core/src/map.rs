//! Functionality related to maps.
use alloc::{string::String, vec::Vec};

#[cfg(test)]
use proptest::prelude::*;
#[cfg(test)]
use proptest_derive::Arbitrary;

use crate::{
    object::{Category, HitObject, Point},
    timing::Timestamp,
};

#[cfg(test)]
fn arbitrary_point() -> impl Strategy<Value = Point> {
    (-1000f32..1000., -1000f32..1000.).prop_map(|(x, y)| Point::new(x, y))
}

/// One object as authored in a map.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(test, derive(Arbitrary))]
pub struct MapObject {
    /// Position of the object center.
    #[cfg_attr(test, proptest(strategy = "arbitrary_point()"))]
    pub position: Point,
    /// The timestamp at which this object should be hit.
    #[cfg_attr(
        test,
        proptest(strategy = "(-100_000..1_000_000i32).prop_map(Timestamp)")
    )]
    pub timestamp: Timestamp,
    /// Kind of the object.
    pub category: Category,
}

/// A map (beatmap, chart, file).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(test, derive(Arbitrary))]
pub struct Map {
    /// Title of the song.
    pub title: Option<String>,
    /// Artist of the song.
    pub artist: Option<String>,
    /// Mapper's name.
    pub creator: Option<String>,
    /// Difficulty name.
    pub difficulty_name: Option<String>,
    /// Objects in the order they were authored.
    ///
    /// This is not necessarily sorted by timestamp.
    #[cfg_attr(
        test,
        proptest(strategy = "proptest::collection::vec(any::<MapObject>(), 0..50)")
    )]
    pub objects: Vec<MapObject>,
}

impl MapObject {
    /// Creates a new map object.
    #[inline]
    pub fn new(position: Point, timestamp: Timestamp, category: Category) -> Self {
        Self {
            position,
            timestamp,
            category,
        }
    }
}

impl From<MapObject> for HitObject {
    #[inline]
    fn from(object: MapObject) -> Self {
        HitObject::new(object.position, object.timestamp, object.category)
    }
}

impl Map {
    /// Constructs an empty map.
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }
}
