// --- File: crates/bookcal_calendar/src/calendar.rs ---
//! The calendar a host UI talks to.
//!
//! `Calendar` owns the session state and the week strip, and routes events
//! between them: month changes found by scrolling are written to the state,
//! and state month changes made anywhere else are forwarded to the strip.
//! Routing goes through a state subscription, so nothing is missed no matter
//! which operation caused the write.

use crate::constraints::{constraints_for_session, constraints_summary, ConstraintsSummary};
use crate::month_grid::{build_calendar_month, month_year_label, same_month, CalendarDay, CalendarMonth};
use crate::state::{CalendarState, StateEvent};
use crate::surface::StripSurface;
use crate::week_strip::{strip_days, StripEvent, WeekStrip, WeekStripConfig};
use bookcal_common::{CalendarError, Clock, SystemClock};
use bookcal_config::{AppConfig, BookingConstraints};
use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::debug;

/// Wall clock in the configured timezone.
pub fn system_clock(config: &AppConfig) -> Result<SystemClock, CalendarError> {
    Ok(SystemClock::new(config.calendar.tz()?))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Week,
    Month,
}

pub struct Calendar<S: StripSurface, C: Clock> {
    state: CalendarState,
    strip: WeekStrip<S, C>,
    view: ViewMode,
    state_events: Rc<RefCell<VecDeque<StateEvent>>>,
}

impl<S: StripSurface, C: Clock> Calendar<S, C> {
    /// Starts a session on `clock.today()`.
    pub fn new(
        constraints: BookingConstraints,
        clock: C,
        surface: S,
        strip_config: WeekStripConfig,
    ) -> Self {
        let mut state = CalendarState::new(constraints, clock.today());

        let state_events = Rc::new(RefCell::new(VecDeque::new()));
        let sink = Rc::clone(&state_events);
        state.subscribe(move |event| sink.borrow_mut().push_back(*event));

        Self {
            state,
            strip: WeekStrip::new(surface, clock, strip_config),
            view: ViewMode::default(),
            state_events,
        }
    }

    /// Starts a session from loaded configuration. `rng` is only drawn from
    /// when the config asks for random constraints. Out-of-range constraints
    /// or strip settings are rejected.
    pub fn from_config<R: Rng>(
        config: &AppConfig,
        clock: C,
        surface: S,
        rng: &mut R,
    ) -> Result<Self, CalendarError> {
        let strip_config = WeekStripConfig::try_from(&config.week_strip)?;
        let constraints =
            constraints_for_session(&config.calendar.constraints, clock.today(), rng)?;
        Ok(Self::new(constraints, clock, surface, strip_config))
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    pub fn strip(&self) -> &WeekStrip<S, C> {
        &self.strip
    }

    pub fn surface(&self) -> &S {
        self.strip.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.strip.surface_mut()
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Switch views. Both views read the same state, so selection and the
    /// month in focus carry over; the strip stays mounted.
    pub fn set_view(&mut self, view: ViewMode) {
        if self.view != view {
            debug!("Calendar view {:?} -> {:?}", self.view, view);
            self.view = view;
        }
    }

    pub fn calendar_month(&self) -> CalendarMonth {
        build_calendar_month(&self.state)
    }

    pub fn week_days(&self) -> Vec<CalendarDay> {
        strip_days(&self.state)
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.state.selected_date()
    }

    pub fn current_date(&self) -> NaiveDate {
        self.state.current_date()
    }

    // --- Month selector ---

    /// e.g. "Jul 2025"
    pub fn month_label(&self) -> String {
        month_year_label(self.state.current_date())
    }

    pub fn is_previous_month_disabled(&self) -> bool {
        self.state.is_previous_month_disabled()
    }

    pub fn is_next_month_disabled(&self) -> bool {
        self.state.is_next_month_disabled()
    }

    /// Returns false when navigation is disabled.
    pub fn previous_month(&mut self) -> bool {
        if self.state.is_previous_month_disabled() {
            return false;
        }
        self.state.previous_month();
        self.dispatch_state_events();
        true
    }

    /// Returns false when navigation is disabled.
    pub fn next_month(&mut self) -> bool {
        if self.state.is_next_month_disabled() {
            return false;
        }
        self.state.next_month();
        self.dispatch_state_events();
        true
    }

    /// Jump the month in focus, e.g. from a date picker.
    pub fn go_to_month(&mut self, date: NaiveDate) {
        self.state.set_current_date(date);
        self.dispatch_state_events();
    }

    // --- Month grid ---

    /// Grid cell tapped. Padding days from adjacent months are ignored.
    pub fn select_day(&mut self, day: &CalendarDay) -> bool {
        if !day.is_current_month || !same_month(day.date, self.state.current_date()) {
            return false;
        }
        self.state.set_selected_date(day.date);
        self.dispatch_state_events();
        true
    }

    // --- Week strip ---

    pub fn on_layout(&mut self) -> Vec<StripEvent> {
        let events = self.strip.on_layout(&mut self.state);
        self.dispatch_state_events();
        events
    }

    pub fn on_scroll(&mut self) {
        self.strip.on_scroll();
    }

    /// Drive due timers. Month changes found by the strip are applied to the
    /// state before the events are handed back.
    pub fn poll(&mut self) -> Vec<StripEvent> {
        let events = self.strip.poll(&self.state);
        for event in &events {
            self.handle_strip_event(event);
        }
        events
    }

    pub fn strip_day_click(&mut self, date: NaiveDate) -> Option<StripEvent> {
        let event = self.strip.select_day(&mut self.state, date);
        self.dispatch_state_events();
        event
    }

    pub fn next_timer_due(&self) -> Option<DateTime<Utc>> {
        self.strip.next_due()
    }

    /// Apply a strip event to the state. `poll` already does this for the
    /// events it returns.
    pub fn handle_strip_event(&mut self, event: &StripEvent) {
        match event {
            StripEvent::MonthChanged(date) => {
                self.state.set_current_date(*date);
                self.dispatch_state_events();
            }
            // the strip already wrote the selection through the state
            StripEvent::DaySelected(_) => {}
        }
    }

    fn dispatch_state_events(&mut self) {
        loop {
            let next = self.state_events.borrow_mut().pop_front();
            let Some(event) = next else {
                break;
            };
            if let StateEvent::CurrentDateChanged { current, .. } = event {
                self.strip.on_current_date_changed(current);
            }
        }
    }

    pub fn constraints_summary(&self) -> ConstraintsSummary {
        constraints_summary(self.state.booking_constraints(), self.state.today())
    }

    /// Tear the calendar down, cancelling any pending strip timers.
    pub fn teardown(self) -> usize {
        self.strip.destroy()
    }
}
