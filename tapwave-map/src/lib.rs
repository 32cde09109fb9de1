//! YAML beatmap format.
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use tapwave_core::{
    map::{Map, MapObject},
    object::{Category, Point},
    timing::Timestamp,
};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
pub enum ObjectType {
    #[default]
    Circle,
    Slider,
    Spinner,
}

impl From<ObjectType> for Category {
    #[inline]
    fn from(object_type: ObjectType) -> Self {
        match object_type {
            ObjectType::Circle => Category::Circle,
            ObjectType::Slider => Category::Slider,
            ObjectType::Spinner => Category::Spinner,
        }
    }
}

impl From<Category> for ObjectType {
    #[inline]
    fn from(category: Category) -> Self {
        match category {
            Category::Circle => ObjectType::Circle,
            Category::Slider => ObjectType::Slider,
            Category::Spinner => ObjectType::Spinner,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitObject {
    #[serde(rename = "X")]
    pub x: f32,
    #[serde(rename = "Y")]
    pub y: f32,
    #[serde(rename = "StartTime")]
    pub start_time: i32,
    #[serde(default, rename = "Type")]
    pub object_type: ObjectType,
}

impl From<HitObject> for MapObject {
    #[inline]
    fn from(hit_object: HitObject) -> Self {
        MapObject::new(
            Point::new(hit_object.x, hit_object.y),
            Timestamp::from_millis(hit_object.start_time),
            hit_object.object_type.into(),
        )
    }
}

impl From<MapObject> for HitObject {
    #[inline]
    fn from(object: MapObject) -> Self {
        Self {
            x: object.position.x,
            y: object.position.y,
            start_time: object.timestamp.into_millis(),
            object_type: object.category.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapFile {
    #[serde(default, rename = "Title")]
    pub title: Option<String>,
    #[serde(default, rename = "Artist")]
    pub artist: Option<String>,
    #[serde(default, rename = "Creator")]
    pub creator: Option<String>,
    #[serde(default, rename = "DifficultyName")]
    pub difficulty_name: Option<String>,
    #[serde(default, rename = "HitObjects")]
    pub hit_objects: Vec<HitObject>,
}

impl From<MapFile> for Map {
    #[inline]
    fn from(file: MapFile) -> Self {
        Self {
            title: file.title,
            artist: file.artist,
            creator: file.creator,
            difficulty_name: file.difficulty_name,
            // Authoring order is kept as is.
            objects: file.hit_objects.into_iter().map(MapObject::from).collect(),
        }
    }
}

impl From<Map> for MapFile {
    #[inline]
    fn from(map: Map) -> Self {
        Self {
            title: map.title,
            artist: map.artist,
            creator: map.creator,
            difficulty_name: map.difficulty_name,
            hit_objects: map.objects.into_iter().map(HitObject::from).collect(),
        }
    }
}

/// Center of the playfield the demo map is laid out around.
pub const DEMO_CENTER: Point = Point::new(400., 300.);

/// Builds the built-in demo map.
///
/// Ten objects, 500 ms apart, swaying horizontally around `center`. Every third one is a slider.
pub fn demo(center: Point) -> Map {
    const CATEGORIES: [Category; 3] = [Category::Circle, Category::Circle, Category::Slider];

    let objects = (0..10)
        .map(|i| {
            let x = center.x + (i as f32 * 0.5).sin() * 100.;
            MapObject::new(
                Point::new(x, center.y),
                Timestamp::from_millis(500 * (i + 1)),
                CATEGORIES[i as usize % CATEGORIES.len()],
            )
        })
        .collect();

    Map {
        title: Some("Demo".to_owned()),
        artist: None,
        creator: Some("tapwave".to_owned()),
        difficulty_name: Some("Easy".to_owned()),
        objects,
    }
}

/// Deserializes a `MapFile` from an IO stream of YAML.
pub fn from_reader<R: Read>(reader: R) -> Result<MapFile, serde_yaml::Error> {
    serde_yaml::from_reader(reader)
}

/// Serializes a `MapFile` as YAML into the IO stream.
pub fn to_writer<W: Write>(writer: W, map: &MapFile) -> Result<(), serde_yaml::Error> {
    serde_yaml::to_writer(writer, map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_pattern() {
        let map = demo(DEMO_CENTER);
        assert_eq!(map.objects.len(), 10);

        let times: Vec<i32> = map
            .objects
            .iter()
            .map(|x| x.timestamp.into_millis())
            .collect();
        assert_eq!(
            times,
            [500, 1000, 1500, 2000, 2500, 3000, 3500, 4000, 4500, 5000]
        );

        assert_eq!(map.objects[0].position, DEMO_CENTER);
        assert_eq!(map.objects[2].category, Category::Slider);
        assert_eq!(map.objects[3].category, Category::Circle);
        assert!(map.objects.iter().all(|x| x.position.y == DEMO_CENTER.y));
        assert!(map
            .objects
            .iter()
            .all(|x| (x.position.x - DEMO_CENTER.x).abs() <= 100.));
    }

    #[test]
    fn missing_type_is_circle() {
        let yaml = "HitObjects:\n  - X: 1\n    Y: 2\n    StartTime: 3\n";
        let file = from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(file.hit_objects[0].object_type, ObjectType::Circle);
        assert_eq!(file.title, None);
    }

    #[test]
    fn unknown_type_is_an_error() {
        let yaml = "HitObjects:\n  - X: 1\n    Y: 2\n    StartTime: 3\n    Type: Hold\n";
        assert!(from_reader(yaml.as_bytes()).is_err());
    }
}
