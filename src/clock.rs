use std::time::{Duration, Instant};

/// Gate between the frame loop and game-state commits.
///
/// The frame loop offers an advancement opportunity every frame; the clock
/// lets one through only when the tick interval has elapsed since the last
/// commit, decoupling simulation rate from display rate. `start` clears any
/// accumulated elapsed time so resuming from pause never fires a stale
/// catch-up tick, and `stop` is idempotent so teardown paths can call it
/// unconditionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickClock {
    last_commit: Option<Instant>,
}

impl TickClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the clock, restarting elapsed-time accumulation at `now`.
    pub fn start(&mut self, now: Instant) {
        self.last_commit = Some(now);
    }

    /// Disarms the clock. Safe to call any number of times.
    pub fn stop(&mut self) {
        self.last_commit = None;
    }

    /// Returns true while the clock is armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.last_commit.is_some()
    }

    /// Returns true when a tick is due, and restarts the interval from `now`.
    ///
    /// Always false while disarmed.
    pub fn should_fire(&mut self, now: Instant, interval: Duration) -> bool {
        let Some(last_commit) = self.last_commit else {
            return false;
        };

        if now.duration_since(last_commit) < interval {
            return false;
        }

        self.last_commit = Some(now);
        true
    }
}
