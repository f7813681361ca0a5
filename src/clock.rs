//! Time source for the scheduler.
//!
//! Every operation reads the clock once and reuses that reading for all
//! timestamps it derives, so `lastReviewDate`/`nextReviewDate` stay consistent.

use chrono::{DateTime, Utc};
use std::cell::Cell;

/// `now` plus whole days, saturating at the latest representable instant.
pub fn days_after(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    now.checked_add_signed(chrono::Duration::days(i64::from(days)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a given instant. Used by tests and by the CLI once the
/// simulated date has been read.
#[derive(Clone, Debug)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
