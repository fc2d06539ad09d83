use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::TickClock;
use crate::config::{
    GridSize, INITIAL_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, TICK_INTERVAL_DECREASE_MS,
};
use crate::game::{DeathReason, GameState, TickOutcome};
use crate::input::Direction;
use crate::score::HighScoreStore;
use crate::snake::{Position, Snake};

/// Lifecycle phase of one play-through.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionPhase {
    /// Pre-start or post-reset; the board is drawn but frozen.
    Idle,
    Running,
    Paused,
    /// Terminal: the snake died.
    GameOver,
    /// Terminal: the snake covers the whole board.
    Victory,
}

impl SessionPhase {
    /// Returns true for the phases no tick can leave without a reset.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver | Self::Victory)
    }
}

/// Immutable view of the session handed to the renderer and observers.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: GridSize,
    pub snake: &'a Snake,
    pub food: Position,
    pub direction: Direction,
    pub phase: SessionPhase,
    pub score: u32,
    pub high_score: u32,
    pub tick_interval_ms: u64,
    pub death_reason: Option<DeathReason>,
}

type Observer = Box<dyn FnMut(&Snapshot<'_>)>;

/// One game session: authoritative state, tick scheduling, score and speed
/// metrics, and the high-score persistence capability.
///
/// All mutation goes through the methods below and lands as a single commit
/// per tick; every commit (and every phase change) notifies subscribed
/// observers with a fresh [`Snapshot`]. The core logic itself never depends
/// on who is observing.
pub struct Session {
    state: GameState,
    phase: SessionPhase,
    score: u32,
    tick_interval_ms: u64,
    high_score: u32,
    store: Box<dyn HighScoreStore>,
    clock: TickClock,
    rng: StdRng,
    death_reason: Option<DeathReason>,
    observers: Vec<Observer>,
}

impl Session {
    /// Creates an idle session on a fresh board.
    ///
    /// The high score is read from `store` once, here; a failed read is
    /// non-fatal and defaults to 0. Passing a seed makes food placement
    /// reproducible.
    #[must_use]
    pub fn new(grid: GridSize, store: Box<dyn HighScoreStore>, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = GameState::new(grid, &mut rng);
        let high_score = store.load().unwrap_or(0);

        Self {
            state,
            phase: SessionPhase::Idle,
            score: 0,
            tick_interval_ms: INITIAL_TICK_INTERVAL_MS,
            high_score,
            store,
            clock: TickClock::new(),
            rng,
            death_reason: None,
            observers: Vec::new(),
        }
    }

    /// Registers an observer called with a snapshot after every commit.
    pub fn subscribe(&mut self, observer: impl FnMut(&Snapshot<'_>) + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Current tick interval in milliseconds (the session's speed).
    #[must_use]
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    /// Overrides the tick interval, for scripted scenarios.
    pub fn set_tick_interval_ms(&mut self, ms: u64) {
        self.tick_interval_ms = ms;
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable board access for scripted scenarios and tests.
    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Builds the read-only view consumed by the renderer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.state.grid,
            snake: &self.state.snake,
            food: self.state.food,
            direction: self.state.direction(),
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
            tick_interval_ms: self.tick_interval_ms,
            death_reason: self.death_reason,
        }
    }

    /// Starts or resumes play. From a terminal phase this performs an
    /// implicit reset first. Arms the tick clock at `now`.
    pub fn start(&mut self, now: Instant) {
        match self.phase {
            SessionPhase::Running => return,
            SessionPhase::GameOver | SessionPhase::Victory => self.reset_board(),
            SessionPhase::Idle | SessionPhase::Paused => {}
        }

        self.phase = SessionPhase::Running;
        self.clock.start(now);
        self.notify();
    }

    /// Toggles Running and Paused. A pure toggle: calling it twice while
    /// running lands back in Running. No-op in Idle and terminal phases.
    pub fn pause_toggle(&mut self, now: Instant) {
        match self.phase {
            SessionPhase::Running => {
                self.phase = SessionPhase::Paused;
                self.clock.stop();
            }
            SessionPhase::Paused => {
                self.phase = SessionPhase::Running;
                self.clock.start(now);
            }
            SessionPhase::Idle | SessionPhase::GameOver | SessionPhase::Victory => return,
        }

        self.notify();
    }

    /// Returns the session to Idle on a fresh board, from any phase.
    pub fn reset(&mut self) {
        self.reset_board();
        self.notify();
    }

    /// Queues a direction change. Ignored unless running; reversal requests
    /// are rejected by the board. Last accepted request before the next tick
    /// wins.
    pub fn request_direction(&mut self, requested: Direction) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }

        self.state.request_direction(requested)
    }

    /// Offers a tick opportunity; called once per frame.
    ///
    /// No-op unless the session is running and the tick interval has elapsed
    /// since the last commit. Returns whether a tick was committed.
    pub fn advance(&mut self, now: Instant) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }
        if !self
            .clock
            .should_fire(now, Duration::from_millis(self.tick_interval_ms))
        {
            return false;
        }

        match self.state.advance(&mut self.rng) {
            TickOutcome::Moved => {}
            TickOutcome::Ate => self.record_food_eaten(),
            TickOutcome::BoardFull => {
                self.record_food_eaten();
                self.finish(SessionPhase::Victory);
            }
            TickOutcome::Collision(reason) => {
                self.death_reason = Some(reason);
                self.finish(SessionPhase::GameOver);
            }
        }

        self.notify();
        true
    }

    fn record_food_eaten(&mut self) {
        self.score += 1;
        self.tick_interval_ms = self
            .tick_interval_ms
            .saturating_sub(TICK_INTERVAL_DECREASE_MS)
            .max(MIN_TICK_INTERVAL_MS);
    }

    /// Enters a terminal phase and settles the high score.
    ///
    /// A failed save is dropped: persistence problems never end a session.
    fn finish(&mut self, phase: SessionPhase) {
        self.phase = phase;
        self.clock.stop();

        if self.score > self.high_score {
            self.high_score = self.score;
            let _ = self.store.save(self.score);
        }
    }

    fn reset_board(&mut self) {
        self.state = GameState::new(self.state.grid, &mut self.rng);
        self.phase = SessionPhase::Idle;
        self.score = 0;
        self.tick_interval_ms = INITIAL_TICK_INTERVAL_MS;
        self.death_reason = None;
        self.clock.stop();
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }

        // Observers are moved out so the snapshot can borrow `self`.
        let mut observers = std::mem::take(&mut self.observers);
        let snapshot = self.snapshot();
        for observer in &mut observers {
            observer(&snapshot);
        }
        self.observers = observers;
    }
}
