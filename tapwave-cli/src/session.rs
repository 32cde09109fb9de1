use tapwave_core::state::{Cause, JudgmentEngine};
use tapwave_core::timing::{Timestamp, TimestampDifference};

use crate::input::{Action, Input};

/// Drives a [`JudgmentEngine`] from wall time and player inputs.
///
/// Wall time keeps running while the game is paused. The time spent paused is subtracted so that
/// the game clock resumes where it stopped.
pub struct Session {
    pub engine: JudgmentEngine,
    /// Wall time when the current pause started.
    paused_at: Option<Timestamp>,
    /// Total wall time spent in finished pauses.
    paused_for: TimestampDifference,
}

impl Session {
    pub fn new(engine: JudgmentEngine) -> Self {
        Self {
            engine,
            paused_at: None,
            paused_for: TimestampDifference::from_millis(0),
        }
    }

    /// Converts wall time into game time.
    pub fn game_time(&self, wall: Timestamp) -> Timestamp {
        self.paused_at.unwrap_or(wall).saturating_sub(self.paused_for)
    }

    pub fn set_now(&mut self, wall: Timestamp) {
        self.engine.advance(self.game_time(wall));
        self.log_events();
    }

    pub fn input(&mut self, input: Input) {
        self.set_now(input.time);

        match input.action {
            Action::Click(point) => {
                trace!(time = input.time.0, x = point.x, y = point.y, "click");
                self.engine.resolve_click(point.x, point.y);
            }
            Action::Pause => {
                let was_paused = self.engine.is_paused();
                self.engine.toggle_pause();

                match (was_paused, self.engine.is_paused()) {
                    (false, true) => {
                        info!(clock = self.engine.clock().0, "paused");
                        self.paused_at = Some(input.time);
                    }
                    (true, false) => {
                        if let Some(paused_at) = self.paused_at.take() {
                            self.paused_for = self
                                .paused_for
                                .saturating_add(input.time.saturating_since(paused_at));
                        }
                        info!(clock = self.engine.clock().0, "resumed");
                    }
                    _ => debug!("pause toggle ignored, session is finished"),
                }
            }
        }

        self.log_events();
    }

    /// Runs the session until the engine is finished or the game clock reaches `until`.
    ///
    /// `inputs` must be sorted by wall time. The clock is advanced every `tick` and right before
    /// each input. A session left paused with no inputs remaining stops as well.
    pub fn run(&mut self, inputs: &[Input], tick: TimestampDifference, until: Timestamp) {
        let tick = TimestampDifference::from_millis(tick.0.max(1));
        let mut inputs = inputs.iter().copied().peekable();
        let mut wall = Timestamp::zero();

        while !self.engine.is_finished() {
            while let Some(input) = inputs.next_if(|input| input.time <= wall) {
                self.input(input);
            }

            self.set_now(wall);

            if self.engine.is_finished() {
                break;
            }

            let game_time = self.game_time(wall);
            if game_time >= until {
                warn!(clock = self.engine.clock().0, "time limit reached");
                break;
            }

            if self.engine.is_paused() {
                if inputs.peek().is_none() {
                    warn!(clock = self.engine.clock().0, "paused with no inputs left");
                    break;
                }
                wall = wall.saturating_add(tick);
            } else {
                // Land exactly on `until` in game time.
                wall = wall.saturating_add(tick.min(until.saturating_since(game_time)));
            }
        }
    }

    /// Returns the game time to stop at when no limit is given: the last object plus the miss
    /// window plus a second.
    pub fn default_until(engine: &JudgmentEngine) -> Timestamp {
        engine
            .last_timestamp()
            .unwrap_or_else(Timestamp::zero)
            .saturating_add(engine.config().hit_windows.miss())
            .saturating_add(TimestampDifference::from_millis(1000))
    }

    fn log_events(&mut self) {
        for event in self.engine.drain_events() {
            match event.cause {
                Cause::Click => debug!(
                    object = event.object,
                    difference = event.difference.0,
                    "{}",
                    event.judgement
                ),
                Cause::Expired => debug!(object = event.object, "{} (expired)", event.judgement),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::autoplay;
    use tapwave_core::config::Config;
    use tapwave_core::judgement::Judgement;
    use tapwave_core::map::{Map, MapObject};
    use tapwave_core::object::{Category, Point};

    const TICK: TimestampDifference = TimestampDifference(16);

    fn engine(objects: &[(f32, f32, i32)]) -> JudgmentEngine {
        let map = Map {
            objects: objects
                .iter()
                .map(|&(x, y, millis)| {
                    MapObject::new(Point::new(x, y), Timestamp(millis), Category::Circle)
                })
                .collect(),
            ..Map::new()
        };
        JudgmentEngine::new(&map, Config::default())
    }

    fn click(millis: i32, x: f32, y: f32) -> Input {
        Input {
            time: Timestamp(millis),
            action: Action::Click(Point::new(x, y)),
        }
    }

    fn pause(millis: i32) -> Input {
        Input {
            time: Timestamp(millis),
            action: Action::Pause,
        }
    }

    #[test]
    fn autoplay_demo_is_perfect() {
        let map = tapwave_map::demo(tapwave_map::DEMO_CENTER);
        let mut session = Session::new(JudgmentEngine::new(&map, Config::default()));
        let inputs = autoplay(session.engine.objects());

        session.run(&inputs, TICK, Timestamp(10_000));

        let tracker = session.engine.tracker();
        assert!(session.engine.is_finished());
        assert_eq!(tracker.count(Judgement::Perfect), 10);
        assert_eq!(tracker.max_combo(), 10);
        assert_eq!(tracker.accuracy(), 100.);
        assert!(session.engine.last_hits().iter().all(|hit| hit.difference.0 == 0));
    }

    #[test]
    fn no_inputs_misses_everything() {
        let mut session = Session::new(engine(&[(0., 0., 100), (0., 0., 500)]));
        session.run(&[], TICK, Timestamp(10_000));

        assert!(session.engine.is_finished());
        assert_eq!(session.engine.tracker().count(Judgement::Miss), 2);
        // Finished right after the last object expired, not at the time limit.
        assert!(session.engine.clock() <= Timestamp(500 + 200 + 16));
    }

    #[test]
    fn time_limit_stops_the_run() {
        let mut session = Session::new(engine(&[(0., 0., 5000)]));
        session.run(&[], TICK, Timestamp(1000));

        assert!(!session.engine.is_finished());
        assert_eq!(session.engine.clock(), Timestamp(1000));
    }

    #[test]
    fn pause_shifts_game_time() {
        let mut session = Session::new(engine(&[(0., 0., 1000)]));
        let inputs = [pause(500), pause(2500), click(3000, 0., 0.)];

        session.run(&inputs, TICK, Timestamp(10_000));

        // Paused for 2000 ms, so the click at 3000 ms lands at 1000 ms of game time.
        assert_eq!(
            session.engine.objects()[0].outcome(),
            Some(Judgement::Perfect)
        );
    }

    #[test]
    fn pause_doesnt_shorten_default_limit() {
        let engine = engine(&[(0., 0., 1000)]);
        let until = Session::default_until(&engine);
        assert_eq!(until, Timestamp(2200));

        let mut session = Session::new(engine);
        let inputs = [pause(500), pause(3000), click(3500, 0., 0.)];
        session.run(&inputs, TICK, until);

        assert!(session.engine.is_finished());
        assert_eq!(
            session.engine.objects()[0].outcome(),
            Some(Judgement::Perfect)
        );
    }

    #[test]
    fn pause_then_nothing_is_missed_after_default_limit() {
        let engine = engine(&[(0., 0., 1000), (0., 0., 5000)]);
        let until = Session::default_until(&engine);

        let mut session = Session::new(engine);
        let inputs = [pause(500), pause(3000), click(3500, 0., 0.)];
        session.run(&inputs, TICK, until);

        // The limit is in game time, so the second object still gets to expire.
        assert!(session.engine.is_finished());
        assert_eq!(session.engine.tracker().count(Judgement::Perfect), 1);
        assert_eq!(session.engine.tracker().count(Judgement::Miss), 1);
    }

    #[test]
    fn left_paused_stops() {
        let mut session = Session::new(engine(&[(0., 0., 1000)]));
        session.run(&[pause(500)], TICK, Timestamp(10_000));

        assert!(session.engine.is_paused());
        assert_eq!(session.engine.clock(), Timestamp(500));
    }

    #[test]
    fn click_while_paused_uses_frozen_time() {
        let mut session = Session::new(engine(&[(0., 0., 1000)]));
        let inputs = [pause(960), click(4000, 0., 0.), pause(5000)];
        session.run(&inputs, TICK, Timestamp(10_000));

        let difference = session.engine.last_hits().iter().next().map(|hit| hit.difference);
        assert_eq!(difference, Some(TimestampDifference(-40)));
        assert!(session.engine.is_finished());
    }

    #[test]
    fn game_time_is_frozen_while_paused() {
        let mut session = Session::new(engine(&[(0., 0., 1000)]));
        session.input(pause(500));

        assert_eq!(session.game_time(Timestamp(400)), Timestamp(500));
        assert_eq!(session.game_time(Timestamp(4000)), Timestamp(500));

        session.input(pause(4000));
        assert_eq!(session.game_time(Timestamp(4100)), Timestamp(600));
    }
}
