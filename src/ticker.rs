use std::time::{Duration, Instant};

/// Fixed-period tick schedule for the game loop.
///
/// Holds at most one pending deadline. Changing the period drops the old
/// deadline before arming a new one, so two periods never run side by side.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    /// Creates a ticker that is not yet armed.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true once the pending deadline has passed.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.next_due.is_some_and(|due| now >= due)
    }

    /// Records that a tick ran at `now`; the next one is one period later.
    pub fn mark_ticked(&mut self, now: Instant) {
        if self.next_due.is_some() {
            self.next_due = Some(now + self.period);
        }
    }

    /// Cancels the pending deadline and re-arms with `period` from `now`.
    pub fn reschedule(&mut self, period: Duration, now: Instant) {
        self.period = period;
        self.next_due = Some(now + period);
    }

    /// Disarms the ticker. Nothing is due until [`Ticker::resume`].
    pub fn suspend(&mut self) {
        self.next_due = None;
    }

    /// Re-arms a suspended ticker one period after `now`. No-op when armed.
    pub fn resume(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }
}
