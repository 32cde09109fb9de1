use std::io::Read;

use serde::{Deserialize, Serialize};
use tapwave_core::config::Config;
use tapwave_core::judgement::{HitWindows, InvalidHitWindows};
use tapwave_core::score::ScoreValues;

/// Gameplay configuration as stored on disk. Missing values fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ConfigFile {
    pub hit_windows: HitWindowsFile,
    pub score_values: ScoreValuesFile,
    pub circle_radius: Option<f32>,
    pub hit_margin: Option<f32>,
}

/// Hit windows in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct HitWindowsFile {
    pub perfect: Option<i32>,
    pub great: Option<i32>,
    pub okay: Option<i32>,
    pub miss: Option<i32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ScoreValuesFile {
    pub perfect: Option<i64>,
    pub great: Option<i64>,
    pub okay: Option<i64>,
    pub miss: Option<i64>,
}

impl TryFrom<HitWindowsFile> for HitWindows {
    type Error = InvalidHitWindows;

    fn try_from(file: HitWindowsFile) -> Result<Self, Self::Error> {
        use tapwave_core::judgement::Judgement::*;

        let default = HitWindows::default();
        let window = |value: Option<i32>, judgement| {
            value.unwrap_or_else(|| default.window(judgement).into_millis())
        };

        HitWindows::from_millis(
            window(file.perfect, Perfect),
            window(file.great, Great),
            window(file.okay, Okay),
            window(file.miss, Miss),
        )
    }
}

impl From<ScoreValuesFile> for ScoreValues {
    fn from(file: ScoreValuesFile) -> Self {
        let default = ScoreValues::default();
        Self {
            perfect: file.perfect.unwrap_or(default.perfect),
            great: file.great.unwrap_or(default.great),
            okay: file.okay.unwrap_or(default.okay),
            miss: file.miss.unwrap_or(default.miss),
        }
    }
}

impl TryFrom<ConfigFile> for Config {
    type Error = InvalidHitWindows;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let default = Config::default();
        Ok(Self {
            hit_windows: file.hit_windows.try_into()?,
            score_values: file.score_values.into(),
            circle_radius: file.circle_radius.unwrap_or(default.circle_radius),
            hit_margin: file.hit_margin.unwrap_or(default.hit_margin),
        })
    }
}

pub fn from_reader<R: Read>(reader: R) -> Result<ConfigFile, serde_yaml::Error> {
    serde_yaml::from_reader(reader)
}
