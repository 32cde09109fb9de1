use std::fmt;

use tapwave_core::judgement::Judgement;
use tapwave_core::score::{DisplayAccuracy, Grade};
use tapwave_core::state::JudgmentEngine;

/// End of session results.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub score: i64,
    pub max_combo: u32,
    pub accuracy: DisplayAccuracy,
    pub grade: Option<Grade>,
    pub counts: [(Judgement, u32); 4],
    /// Mean difference of every click hit in milliseconds, negative for early.
    pub mean_hit_error: Option<f32>,
}

impl Summary {
    pub fn new(engine: &JudgmentEngine) -> Self {
        let tracker = engine.tracker();

        Self {
            score: tracker.score(),
            max_combo: tracker.max_combo(),
            accuracy: tracker.display_accuracy(),
            grade: tracker.grade(),
            counts: Judgement::ALL.map(|judgement| (judgement, tracker.count(judgement))),
            mean_hit_error: engine.mean_hit_difference(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score:     {}", self.score)?;
        writeln!(f, "Max combo: {}", self.max_combo)?;
        write!(f, "Accuracy:  {}", self.accuracy)?;
        if let Some(grade) = self.grade {
            write!(f, " ({})", grade)?;
        }
        writeln!(f)?;

        for (judgement, count) in self.counts {
            writeln!(f, "{:<10} {}", format!("{}:", judgement), count)?;
        }

        if let Some(error) = self.mean_hit_error {
            writeln!(f, "Mean hit error: {:+.1} ms", error)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tapwave_core::config::Config;
    use tapwave_core::map::{Map, MapObject};
    use tapwave_core::object::{Category, Point};
    use tapwave_core::timing::Timestamp;

    fn engine() -> JudgmentEngine {
        let map = Map {
            objects: [100, 500, 900]
                .into_iter()
                .map(|millis| {
                    MapObject::new(Point::new(0., 0.), Timestamp(millis), Category::Circle)
                })
                .collect(),
            ..Map::new()
        };
        JudgmentEngine::new(&map, Config::default())
    }

    #[test]
    fn empty_summary() {
        let summary = Summary::new(&engine());

        assert_eq!(summary.score, 0);
        assert_eq!(summary.grade, None);
        assert_eq!(summary.mean_hit_error, None);
        assert!(summary.counts.iter().all(|&(_, count)| count == 0));
        assert!(summary.to_string().contains("Accuracy:  0.00%\n"));
    }

    #[test]
    fn summary_after_play() {
        let mut engine = engine();

        engine.advance(Timestamp(80));
        engine.resolve_click(0., 0.);
        engine.advance(Timestamp(620));
        engine.resolve_click(0., 0.);
        engine.advance(Timestamp(2000));

        let summary = Summary::new(&engine);
        assert_eq!(summary.score, 300 + 50);
        assert_eq!(summary.max_combo, 2);
        assert_eq!(
            summary.counts,
            [
                (Judgement::Perfect, 1),
                (Judgement::Great, 0),
                (Judgement::Okay, 1),
                (Judgement::Miss, 1),
            ]
        );
        assert_eq!(summary.mean_hit_error, Some(50.));

        let text = summary.to_string();
        assert!(text.contains("Score:     350"));
        assert!(text.contains("Accuracy:  38.89% (D)"));
        assert!(text.contains("Mean hit error: +50.0 ms"));
    }
}
