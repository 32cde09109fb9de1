//! Functionality related to managing the game state.
use alloc::{collections::VecDeque, vec::Vec};

use circular_queue::CircularQueue;

use crate::{
    config::Config,
    judgement::Judgement,
    map::Map,
    object::{HitObject, Point},
    score::ScoreTracker,
    timing::{Timestamp, TimestampDifference},
};

/// Number of click hits kept in [`JudgmentEngine::last_hits()`].
const LAST_HITS_CAPACITY: usize = 32;

/// State of a session.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SessionState {
    /// The clock advances and clicks are judged.
    Running,
    /// The clock is frozen and clicks are ignored.
    Paused,
    /// Every object has been resolved. Terminal.
    Finished,
}

/// Why an object got its judgement.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Cause {
    /// The player clicked the object.
    Click,
    /// The object went past the miss window without being clicked.
    Expired,
}

/// A judgement that happened during the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Event {
    /// Index of the object in [`JudgmentEngine::objects()`].
    pub object: usize,
    /// The judgement.
    pub judgement: Judgement,
    /// What caused the judgement.
    pub cause: Cause,
    /// Clock value at the moment of the judgement.
    pub timestamp: Timestamp,
    /// Difference between the judgement timestamp and the object timestamp.
    ///
    /// Negative for early hits.
    pub difference: TimestampDifference,
}

/// Information about a click that resulted in a judgement.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Hit {
    /// Timestamp of the click.
    pub timestamp: Timestamp,
    /// Difference between the click and the perfect timing.
    pub difference: TimestampDifference,
}

/// Judges clicks against hit objects and keeps score.
///
/// The engine exclusively owns the objects, the score tracker and the clock for the duration of
/// one session.
#[derive(Debug, Clone)]
pub struct JudgmentEngine {
    config: Config,
    /// Objects in authoring order.
    objects: Vec<HitObject>,
    tracker: ScoreTracker,
    clock: Timestamp,
    state: SessionState,
    /// Judgements not yet taken by the host.
    events: VecDeque<Event>,
    /// Contains a number of last click hits.
    ///
    /// Useful for implementing an error bar.
    last_hits: CircularQueue<Hit>,
    /// Sum of the differences of every click hit this session.
    hit_difference_total: i64,
    /// Number of click hits this session.
    hit_count: u32,
}

impl JudgmentEngine {
    /// Creates a new `JudgmentEngine` given a map and a configuration.
    ///
    /// The object order of the map is preserved. An empty map produces an already finished
    /// session.
    pub fn new(map: &Map, config: Config) -> Self {
        let objects: Vec<HitObject> = map.objects.iter().copied().map(HitObject::from).collect();

        let mut engine = Self {
            config,
            objects,
            tracker: ScoreTracker::new(config.score_values),
            clock: Timestamp::zero(),
            state: SessionState::Running,
            events: VecDeque::new(),
            last_hits: CircularQueue::with_capacity(LAST_HITS_CAPACITY),
            hit_difference_total: 0,
            hit_count: 0,
        };
        engine.check_finished();
        engine
    }

    /// Starts the same map over: every object becomes unresolved, the score is reset and the
    /// clock goes back to zero.
    pub fn restart(&mut self) {
        for object in &mut self.objects {
            object.unresolve();
        }
        self.tracker.reset();
        self.clock = Timestamp::zero();
        self.state = SessionState::Running;
        self.events.clear();
        self.last_hits = CircularQueue::with_capacity(LAST_HITS_CAPACITY);
        self.hit_difference_total = 0;
        self.hit_count = 0;
        self.check_finished();
    }

    /// Advances the clock to `now`, measured from the session start.
    ///
    /// Essentially, this is a way to signal "some time has passed". Objects that can no longer be
    /// hit are marked as missed here. This should be called every frame.
    ///
    /// Does nothing while paused. The clock never goes backwards: a `now` earlier than the current
    /// clock only re-runs the miss check.
    pub fn advance(&mut self, now: Timestamp) {
        if self.state == SessionState::Paused {
            return;
        }

        self.clock = self.clock.max(now);

        let hit_windows = &self.config.hit_windows;
        for (index, object) in self.objects.iter_mut().enumerate() {
            if object.is_resolved() || !object.is_expired(hit_windows, self.clock) {
                continue;
            }

            object.resolve(Judgement::Miss);
            self.tracker.record(Judgement::Miss);
            self.events.push_back(Event {
                object: index,
                judgement: Judgement::Miss,
                cause: Cause::Expired,
                timestamp: self.clock,
                difference: self.clock.saturating_since(object.timestamp),
            });
        }

        self.check_finished();
    }

    /// Handles a click (or a hit key press) at the given playfield coordinates.
    ///
    /// The first unresolved object, in authoring order, whose hit zone contains the click is
    /// judged at the current clock. If it is too far from its timestamp to be judged, nothing
    /// happens. At most one object is resolved per click.
    ///
    /// While paused, clicks are judged at the frozen clock. Clicks once finished are ignored.
    pub fn resolve_click(&mut self, x: f32, y: f32) {
        if self.state == SessionState::Finished {
            return;
        }

        let click = Point::new(x, y);
        let radius = self.config.hit_zone_radius();

        let Some(index) = self
            .objects
            .iter()
            .position(|object| !object.is_resolved() && object.position.is_within(click, radius))
        else {
            return;
        };

        let object = &mut self.objects[index];
        let Some(judgement) = object.classify(&self.config.hit_windows, self.clock) else {
            // Clicked way too early.
            return;
        };

        object.resolve(judgement);
        self.tracker.record(judgement);

        let difference = self.clock.saturating_since(object.timestamp);
        self.events.push_back(Event {
            object: index,
            judgement,
            cause: Cause::Click,
            timestamp: self.clock,
            difference,
        });
        self.last_hits.push(Hit {
            timestamp: self.clock,
            difference,
        });
        self.hit_difference_total += i64::from(difference.0);
        self.hit_count += 1;

        self.check_finished();
    }

    /// Toggles between running and paused.
    ///
    /// Does nothing once the session has finished.
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            SessionState::Running => SessionState::Paused,
            SessionState::Paused => SessionState::Running,
            SessionState::Finished => SessionState::Finished,
        };
    }

    fn check_finished(&mut self) {
        if self.state != SessionState::Finished && self.objects.iter().all(HitObject::is_resolved)
        {
            self.state = SessionState::Finished;
        }
    }

    /// Removes and returns the judgements that happened since the last call.
    #[inline]
    pub fn drain_events(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.events.drain(..)
    }

    /// Returns the objects in authoring order.
    #[inline]
    pub fn objects(&self) -> &[HitObject] {
        &self.objects
    }

    /// Returns the score tracker.
    #[inline]
    pub fn tracker(&self) -> &ScoreTracker {
        &self.tracker
    }

    /// Returns the configuration of this session.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the current clock value.
    #[inline]
    pub fn clock(&self) -> Timestamp {
        self.clock
    }

    /// Returns the state of the session.
    #[inline]
    pub fn session_state(&self) -> SessionState {
        self.state
    }

    /// Returns `true` if the session is paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state == SessionState::Paused
    }

    /// Returns `true` if every object has been resolved.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// Returns the most recent click hits, newest first.
    #[inline]
    pub fn last_hits(&self) -> &CircularQueue<Hit> {
        &self.last_hits
    }

    /// Returns the mean difference of every click hit this session, in milliseconds.
    ///
    /// Negative when the hits were early on average. Returns `None` if no object was clicked.
    pub fn mean_hit_difference(&self) -> Option<f32> {
        if self.hit_count == 0 {
            None
        } else {
            Some((self.hit_difference_total as f64 / f64::from(self.hit_count)) as f32)
        }
    }

    /// Returns the earliest object timestamp.
    #[inline]
    pub fn first_timestamp(&self) -> Option<Timestamp> {
        self.objects.iter().map(|object| object.timestamp).min()
    }

    /// Returns the latest object timestamp.
    #[inline]
    pub fn last_timestamp(&self) -> Option<Timestamp> {
        self.objects.iter().map(|object| object.timestamp).max()
    }
}

// Pending events are a delivery buffer, not part of the session.
impl PartialEq for JudgmentEngine {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && self.objects == other.objects
            && self.tracker == other.tracker
            && self.clock == other.clock
            && self.state == other.state
            && self.last_hits == other.last_hits
            && self.hit_difference_total == other.hit_difference_total
            && self.hit_count == other.hit_count
    }
}
