use tracing::debug;
use web_time::{Duration, Instant};

use crate::replay::{ReplayOutcome, Session};

/// Fixed-interval auto-advance over a `Session`.
///
/// Holds at most one pending deadline; starting again re-arms it. Time is
/// supplied by the caller, so the schedule itself never blocks or sleeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoPlay {
    interval: Duration,
    next_due: Option<Instant>,
}

impl AutoPlay {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn start(&mut self, now: Instant) {
        debug!(interval_ms = self.interval.as_millis() as u64, "auto-play started");
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        if self.next_due.take().is_some() {
            debug!("auto-play stopped");
        }
    }

    /// Returns whether auto-play is running afterwards.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_running() {
            self.stop();
        } else {
            self.start(now);
        }
        self.is_running()
    }

    /// Advances `session` by one ply when the deadline has passed.
    ///
    /// Stops when the session is already at the end, or once the advance
    /// reaches it.
    pub fn tick(&mut self, now: Instant, session: Session) -> (Session, Option<ReplayOutcome>) {
        let Some(due) = self.next_due else {
            return (session, None);
        };
        if now < due {
            return (session, None);
        }
        if session.at_end() {
            self.stop();
            return (session, None);
        }

        let (session, outcome) = session.next();
        if session.at_end() {
            self.stop();
        } else {
            // Missed deadlines are dropped, not replayed in a burst.
            self.next_due = Some(now + self.interval);
        }
        (session, Some(outcome))
    }
}
