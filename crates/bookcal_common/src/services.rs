// --- File: crates/bookcal_common/src/services.rs ---
//! Capability abstractions the calendar core calls into.
//!
//! The core never reads the wall clock directly. Everything that depends on
//! "now" or "today" goes through [`Clock`], which lets tests pin the date and
//! drive timers forward deterministically.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use std::cell::Cell;
use std::rc::Rc;

/// A source of the current instant and the timezone "today" is judged in.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Timezone used to turn [`Clock::now`] into a calendar date.
    fn timezone(&self) -> Tz;

    /// The calendar date of [`Clock::now`] in [`Clock::timezone`].
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&self.timezone()).date_naive()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn timezone(&self) -> Tz {
        (**self).timezone()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn timezone(&self) -> Tz {
        (**self).timezone()
    }
}

/// Wall clock in a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(Tz::Europe__Zurich)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn timezone(&self) -> Tz {
        self.tz
    }
}

/// A clock that only moves when told to. Shared through `Rc` between the
/// state and the week strip in tests and headless hosts.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
    tz: Tz,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>, tz: Tz) -> Self {
        Self {
            now: Cell::new(now),
            tz,
        }
    }

    /// A UTC clock pinned to noon of `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).unwrap_or_default().and_utc();
        Self::new(noon, Tz::UTC)
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn advance(&self, delta: chrono::Duration) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    fn timezone(&self) -> Tz {
        self.tz
    }
}
