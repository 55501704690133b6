// --- File: crates/bookcal_calendar/src/state.rs ---
//! Session state shared by the month grid and the week strip.
//!
//! The fields are private: `current_date` and `selected_date` only change
//! through the setters below, and every change is pushed synchronously to the
//! subscribed listeners. Views never cache derived data across changes; they
//! rebuild from this state on demand.

use crate::availability::{Availability, AvailabilityMap};
use crate::constraints::{max_bookable_date, min_bookable_date};
use bookcal_common::log_fallback;
use bookcal_config::BookingConstraints;
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// Notification emitted after a state write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StateEvent {
    CurrentDateChanged {
        previous: NaiveDate,
        current: NaiveDate,
    },
    SelectedDateChanged {
        previous: Option<NaiveDate>,
        current: Option<NaiveDate>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StateEvent)>;

pub struct CalendarState {
    today: NaiveDate,
    constraints: BookingConstraints,
    max_bookable: NaiveDate,
    availability: AvailabilityMap,
    current_date: NaiveDate,
    selected_date: Option<NaiveDate>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for CalendarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarState")
            .field("today", &self.today)
            .field("constraints", &self.constraints)
            .field("max_bookable", &self.max_bookable)
            .field("availability_len", &self.availability.len())
            .field("current_date", &self.current_date)
            .field("selected_date", &self.selected_date)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Move `date` by whole months, clamping the day to the target month's length.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let delta = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        date.checked_add_months(delta)
    } else {
        date.checked_sub_months(delta)
    };
    shifted.unwrap_or(date)
}

impl CalendarState {
    /// Starts a session: derives the window and availability once, and puts
    /// both the current and the selected date on `today`.
    pub fn new(constraints: BookingConstraints, today: NaiveDate) -> Self {
        let max_bookable = max_bookable_date(&constraints, today);
        let availability = AvailabilityMap::build(&constraints, today);

        info!(
            "Calendar session started: today={} max_bookable={} ({} days) constraints={:?}",
            today,
            max_bookable,
            (max_bookable - today).num_days(),
            constraints
        );

        Self {
            today,
            constraints,
            max_bookable,
            availability,
            current_date: today,
            selected_date: Some(today),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn booking_constraints(&self) -> &BookingConstraints {
        &self.constraints
    }

    pub fn availability_map(&self) -> &AvailabilityMap {
        &self.availability
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn max_bookable_date(&self) -> NaiveDate {
        self.max_bookable
    }

    pub fn min_bookable_date(&self) -> NaiveDate {
        min_bookable_date(self.today)
    }

    /// Map lookup; anything outside the window is not available.
    pub fn availability_for(&self, date: NaiveDate) -> Availability {
        self.availability.get(date)
    }

    pub fn is_today(&self, date: NaiveDate) -> bool {
        date == self.today
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected_date == Some(date)
    }

    /// Earliest available date in the window, or today when none is.
    pub fn first_bookable_date(&self) -> NaiveDate {
        match self.availability.first_available() {
            Some(date) => date,
            None => log_fallback(self.today, "No available date in booking window"),
        }
    }

    pub fn set_selected_date(&mut self, date: NaiveDate) {
        let previous = self.selected_date;
        if previous == Some(date) {
            return;
        }
        self.selected_date = Some(date);
        debug!("Selected date: {:?} -> {}", previous, date);
        self.notify(StateEvent::SelectedDateChanged {
            previous,
            current: Some(date),
        });
    }

    pub fn set_current_date(&mut self, date: NaiveDate) {
        let previous = self.current_date;
        if previous == date {
            return;
        }
        self.current_date = date;
        debug!("Current date: {} -> {}", previous, date);
        self.notify(StateEvent::CurrentDateChanged {
            previous,
            current: date,
        });
    }

    pub fn previous_month(&mut self) {
        self.set_current_date(shift_month(self.current_date, -1));
    }

    pub fn next_month(&mut self) {
        self.set_current_date(shift_month(self.current_date, 1));
    }

    /// True once the month in focus is today's month or earlier.
    pub fn is_previous_month_disabled(&self) -> bool {
        (self.current_date.year(), self.current_date.month())
            <= (self.today.year(), self.today.month())
    }

    /// True when one more month would step past the max bookable date.
    pub fn is_next_month_disabled(&self) -> bool {
        shift_month(self.current_date, 1) > self.max_bookable
    }

    /// Register a listener called after every effective state write.
    pub fn subscribe(&mut self, listener: impl FnMut(&StateEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: StateEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}
