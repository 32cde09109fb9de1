use std::io::Read;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use tapwave_core::object::{HitObject, Point};
use tapwave_core::timing::Timestamp;

/// Something the player did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Pointer press or hit key press at the given playfield position.
    Click(Point),
    /// Pause key press.
    Pause,
}

/// An action at a point in wall time, measured from the session start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    pub time: Timestamp,
    pub action: Action,
}

/// One replay entry as stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReplayEntry {
    pub time: i32,
    #[serde(default)]
    pub click: Option<[f32; 2]>,
    #[serde(default)]
    pub pause: bool,
}

impl TryFrom<ReplayEntry> for Input {
    type Error = anyhow::Error;

    fn try_from(entry: ReplayEntry) -> Result<Self, Self::Error> {
        let action = match (entry.click, entry.pause) {
            (Some([x, y]), false) => Action::Click(Point::new(x, y)),
            (None, true) => Action::Pause,
            (Some(_), true) => bail!("entry at {} ms is both a click and a pause", entry.time),
            (None, false) => bail!("entry at {} ms has no action", entry.time),
        };

        Ok(Self {
            time: Timestamp::from_millis(entry.time),
            action,
        })
    }
}

/// Reads a replay, returning the inputs in the order they should be applied.
///
/// Entries are stably sorted by time, so entries with equal times keep their file order.
pub fn read_replay<R: Read>(reader: R) -> anyhow::Result<Vec<Input>> {
    let entries: Vec<ReplayEntry> =
        serde_yaml::from_reader(reader).context("error parsing replay")?;

    let mut inputs = entries
        .into_iter()
        .map(Input::try_from)
        .collect::<anyhow::Result<Vec<_>>>()?;
    inputs.sort_by_key(|input| input.time);
    Ok(inputs)
}

/// Generates inputs that click every object dead center exactly on time.
pub fn autoplay(objects: &[HitObject]) -> Vec<Input> {
    let mut inputs: Vec<Input> = objects
        .iter()
        .map(|object| Input {
            time: object.timestamp,
            action: Action::Click(object.position),
        })
        .collect();
    inputs.sort_by_key(|input| input.time);
    inputs
}
