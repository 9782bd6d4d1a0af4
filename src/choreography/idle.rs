//! Idle deadline tracking.

use web_time::{Duration, Instant};

/// Longest delay honoured; larger values are capped so deadline arithmetic
/// cannot overflow `Instant`.
pub const MAX_DELAY: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Snapshot of the idle deadlines after a [`IdleWatcher::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdleStatus {
    /// Autorotate is permitted (level: stays true for the rest of the cycle).
    pub rotate_due: bool,
    /// The transition deadline was crossed on this tick (edge: true once
    /// per cycle).
    pub transition_due: bool,
}

/// Tracks time since the last user interaction against two deadlines.
///
/// All waiting is polled: the render loop calls [`tick`](Self::tick) once
/// per frame with the frame timestamp, and the watcher compares elapsed
/// idle time against the configured delays. There are no timers to cancel.
#[derive(Debug, Clone)]
pub struct IdleWatcher {
    rotate_delay: Duration,
    transition_delay: Duration,
    /// Start of the current idle cycle.
    last_interaction: Instant,
    rotate_due: bool,
    transition_due: bool,
    /// Set once `transition_due` has fired in this cycle.
    transition_fired: bool,
}

impl IdleWatcher {
    /// Create a watcher whose first idle cycle starts at `now`.
    #[must_use]
    pub fn new(
        rotate_delay: Duration,
        transition_delay: Duration,
        now: Instant,
    ) -> Self {
        Self {
            rotate_delay: rotate_delay.min(MAX_DELAY),
            transition_delay: transition_delay.min(MAX_DELAY),
            last_interaction: now,
            rotate_due: false,
            transition_due: false,
            transition_fired: false,
        }
    }

    /// Record user activity at `timestamp` and restart both deadlines.
    pub fn on_interaction(&mut self, timestamp: Instant) {
        self.reset(timestamp);
    }

    /// Begin a fresh idle cycle at `now` without user activity (used when an
    /// idle transition completes).
    pub fn restart_cycle(&mut self, now: Instant) {
        self.reset(now);
    }

    fn reset(&mut self, at: Instant) {
        self.last_interaction = at;
        self.rotate_due = false;
        self.transition_due = false;
        self.transition_fired = false;
    }

    /// Re-evaluate both deadlines at `now`.
    ///
    /// A timestamp earlier than the cycle start counts as zero idle time.
    pub fn tick(&mut self, now: Instant) -> IdleStatus {
        let elapsed = now.saturating_duration_since(self.last_interaction);

        self.rotate_due = elapsed >= self.rotate_delay;
        self.transition_due =
            !self.transition_fired && elapsed >= self.transition_delay;
        if self.transition_due {
            self.transition_fired = true;
        }

        self.status()
    }

    /// Flags as of the last tick.
    #[must_use]
    pub fn status(&self) -> IdleStatus {
        IdleStatus {
            rotate_due: self.rotate_due,
            transition_due: self.transition_due,
        }
    }

    /// Whether autorotate is currently permitted.
    #[must_use]
    pub fn rotate_due(&self) -> bool {
        self.rotate_due
    }

    /// Whether the transition deadline fired on the last tick.
    #[must_use]
    pub fn transition_due(&self) -> bool {
        self.transition_due
    }

    /// Start of the current idle cycle.
    #[must_use]
    pub fn last_interaction(&self) -> Instant {
        self.last_interaction
    }

    /// `(rotate, transition)` deadlines for the current cycle.
    #[must_use]
    pub fn deadlines(&self) -> (Instant, Instant) {
        (
            self.last_interaction + self.rotate_delay,
            self.last_interaction + self.transition_delay,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn watcher(t0: Instant) -> IdleWatcher {
        IdleWatcher::new(ms(3000), ms(10000), t0)
    }

    #[test]
    fn rotate_becomes_due_exactly_at_deadline() {
        let t0 = Instant::now();
        let mut w = watcher(t0);
        assert!(!w.tick(t0 + ms(2999)).rotate_due);
        assert!(w.tick(t0 + ms(3000)).rotate_due);
        assert!(w.tick(t0 + ms(9000)).rotate_due);
    }

    #[test]
    fn transition_due_fires_once_per_cycle() {
        let t0 = Instant::now();
        let mut w = watcher(t0);
        assert!(!w.tick(t0 + ms(9999)).transition_due);
        assert!(w.tick(t0 + ms(10000)).transition_due);
        assert!(!w.tick(t0 + ms(10016)).transition_due);
        assert!(!w.tick(t0 + ms(60000)).transition_due);
    }

    #[test]
    fn interaction_resets_deadlines_and_flags() {
        let t0 = Instant::now();
        let mut w = watcher(t0);
        let _ = w.tick(t0 + ms(10000));

        let event = t0 + ms(10500);
        w.on_interaction(event);
        assert_eq!(w.status(), IdleStatus::default());
        assert_eq!(w.deadlines(), (event + ms(3000), event + ms(10000)));

        // The transition edge is re-armed for the new cycle.
        assert!(w.tick(event + ms(10000)).transition_due);
    }

    #[test]
    fn repeated_interactions_keep_latest_timestamp() {
        let t0 = Instant::now();
        let mut w = watcher(t0);
        for step in [100, 250, 251, 900] {
            let at = t0 + ms(step);
            w.on_interaction(at);
            assert_eq!(w.deadlines(), (at + ms(3000), at + ms(10000)));
            assert!(!w.rotate_due());
        }
    }

    #[test]
    fn earlier_timestamp_counts_as_no_idle_time() {
        let t0 = Instant::now() + ms(5000);
        let mut w = watcher(t0);
        assert_eq!(w.tick(t0 - ms(4000)), IdleStatus::default());
    }

    #[test]
    fn zero_delays_are_due_immediately() {
        let t0 = Instant::now();
        let mut w = IdleWatcher::new(Duration::ZERO, Duration::ZERO, t0);
        let status = w.tick(t0);
        assert!(status.rotate_due && status.transition_due);
    }

    #[test]
    fn huge_delays_are_capped() {
        let t0 = Instant::now();
        let mut w = IdleWatcher::new(Duration::MAX, Duration::MAX, t0);
        assert_eq!(w.deadlines(), (t0 + MAX_DELAY, t0 + MAX_DELAY));
        assert_eq!(w.tick(t0 + ms(3_600_000)), IdleStatus::default());
    }

    #[test]
    fn restart_cycle_behaves_like_fresh_start() {
        let t0 = Instant::now();
        let mut w = watcher(t0);
        let _ = w.tick(t0 + ms(12000));
        w.restart_cycle(t0 + ms(14000));
        assert_eq!(w.last_interaction(), t0 + ms(14000));
        assert!(!w.tick(t0 + ms(16999)).rotate_due);
        assert!(w.tick(t0 + ms(17000)).rotate_due);
    }
}
