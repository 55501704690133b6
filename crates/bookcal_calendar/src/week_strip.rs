// --- File: crates/bookcal_calendar/src/week_strip.rs ---
//! Horizontally scrolling day strip over the whole booking window.
//!
//! The controller is `Uninitialized` until the host reports its first layout
//! pass, then stays `Ready` while mounted. It tracks which month the strip is
//! showing so that scroll-driven month changes and month changes made
//! elsewhere (a month selector) do not echo back and forth.
//!
//! Timing is explicit: scroll handling is debounced and programmatic scrolls
//! wait for layout to settle, both through a [`TimerQueue`] the host drains
//! with [`WeekStrip::poll`].

use crate::month_grid::{same_month, CalendarDay};
use crate::state::CalendarState;
use crate::surface::{clamp_scroll_left, first_visible_index, StripSurface};
use bookcal_common::{invalid_settings, CalendarError, Clock, TimerHandle, TimerQueue};
use bookcal_config::WeekStripSettings;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, trace};

/// Quiet period after the last scroll event before the position is evaluated.
pub const SCROLL_DEBOUNCE_MS: i64 = 100;
/// Delay before a programmatic scroll, letting the host finish re-layout.
pub const LAYOUT_SETTLE_MS: i64 = 100;
/// A day counts as visible once more than this fraction of it is on screen.
pub const VISIBILITY_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekStripConfig {
    pub debounce: Duration,
    pub settle_delay: Duration,
    pub visibility_threshold: f64,
}

impl Default for WeekStripConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::milliseconds(SCROLL_DEBOUNCE_MS),
            settle_delay: Duration::milliseconds(LAYOUT_SETTLE_MS),
            visibility_threshold: VISIBILITY_THRESHOLD,
        }
    }
}

impl TryFrom<&WeekStripSettings> for WeekStripConfig {
    type Error = CalendarError;

    fn try_from(settings: &WeekStripSettings) -> Result<Self, Self::Error> {
        settings.validate()?;
        let millis = |value: u64| {
            i64::try_from(value)
                .map(Duration::milliseconds)
                .map_err(|_| invalid_settings(format!("{} ms does not fit a duration", value)))
        };
        Ok(Self {
            debounce: millis(settings.debounce_ms)?,
            settle_delay: millis(settings.settle_delay_ms)?,
            visibility_threshold: settings.visibility_threshold,
        })
    }
}

/// Year and 1-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripPhase {
    Uninitialized,
    Ready { tracked: MonthKey },
}

/// Notifications for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StripEvent {
    DaySelected(CalendarDay),
    /// The strip came to rest on a different month; payload is the day that
    /// triggered the change.
    MonthChanged(NaiveDate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StripTask {
    ProcessScroll,
    ScrollToMonth(MonthKey),
}

/// Days shown by the strip: every day of `[today, max_bookable_date]`.
pub fn strip_days(state: &CalendarState) -> Vec<CalendarDay> {
    let today = state.today();
    let max = state.max_bookable_date();
    let focus = state.current_date();

    today
        .iter_days()
        .take_while(|date| *date <= max)
        .map(|date| CalendarDay {
            date,
            is_current_month: same_month(date, focus),
            is_today: state.is_today(date),
            availability: state.availability_for(date),
            is_selected: state.is_selected(date),
        })
        .collect()
}

pub struct WeekStrip<S: StripSurface, C: Clock> {
    surface: S,
    clock: C,
    config: WeekStripConfig,
    phase: StripPhase,
    timers: TimerQueue<StripTask>,
    debounce: Option<TimerHandle>,
    pending_scroll: Option<TimerHandle>,
}

impl<S: StripSurface, C: Clock> WeekStrip<S, C> {
    pub fn new(surface: S, clock: C, config: WeekStripConfig) -> Self {
        Self {
            surface,
            clock,
            config,
            phase: StripPhase::Uninitialized,
            timers: TimerQueue::new(),
            debounce: None,
            pending_scroll: None,
        }
    }

    pub fn phase(&self) -> StripPhase {
        self.phase
    }

    pub fn tracked_month(&self) -> Option<MonthKey> {
        match self.phase {
            StripPhase::Uninitialized => None,
            StripPhase::Ready { tracked } => Some(tracked),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn days(&self, state: &CalendarState) -> Vec<CalendarDay> {
        strip_days(state)
    }

    /// Earliest pending timer, for hosts that sleep between polls.
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.timers.next_due()
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.pending_scroll.is_some()
    }

    pub fn has_pending_debounce(&self) -> bool {
        self.debounce.is_some()
    }

    /// First layout pass: start tracking the state's month and select the
    /// first day of the window. Later layout passes do nothing.
    pub fn on_layout(&mut self, state: &mut CalendarState) -> Vec<StripEvent> {
        if self.phase != StripPhase::Uninitialized {
            return Vec::new();
        }

        self.phase = StripPhase::Ready {
            tracked: MonthKey::of(state.current_date()),
        };
        debug!("Week strip ready, tracking {:?}", self.tracked_month());

        let Some(first) = strip_days(state).first().map(|day| day.date) else {
            return Vec::new();
        };
        state.set_selected_date(first);

        // rebuilt after the write so the payload carries the selection
        strip_days(state)
            .into_iter()
            .find(|day| day.date == first)
            .map(StripEvent::DaySelected)
            .into_iter()
            .collect()
    }

    /// Raw scroll event from the surface. Out-of-range offsets are pulled
    /// back at once; evaluation waits until scrolling pauses.
    pub fn on_scroll(&mut self) {
        if self.phase == StripPhase::Uninitialized {
            return;
        }

        if let Some(clamped) = clamp_scroll_left(
            self.surface.scroll_left(),
            self.surface.viewport_width(),
            self.surface.scroll_width(),
        ) {
            trace!("Clamping strip scroll to {}", clamped);
            self.surface.set_scroll_left(clamped);
        }

        if let Some(handle) = self.debounce.take() {
            self.timers.cancel(handle);
        }
        let now = self.clock.now();
        self.debounce = Some(
            self.timers
                .schedule(now, self.config.debounce, StripTask::ProcessScroll),
        );
    }

    /// Run every timer that is due by the clock.
    pub fn poll(&mut self, state: &CalendarState) -> Vec<StripEvent> {
        let now = self.clock.now();
        let mut events = Vec::new();

        for task in self.timers.take_due(now) {
            match task {
                StripTask::ProcessScroll => {
                    self.debounce = None;
                    events.extend(self.process_scroll(state));
                }
                StripTask::ScrollToMonth(target) => {
                    self.pending_scroll = None;
                    self.scroll_to_month(state, target.year, target.month);
                }
            }
        }
        events
    }

    /// Evaluate the resting position. Emits when the left-most visible day
    /// starts a month (or is the window's first or last day) and belongs to a
    /// month other than the tracked one.
    fn process_scroll(&mut self, state: &CalendarState) -> Option<StripEvent> {
        let StripPhase::Ready { tracked } = self.phase else {
            return None;
        };

        let items = self.surface.item_bounds();
        let viewport = self.surface.viewport_bounds();
        let index = first_visible_index(&items, &viewport, self.config.visibility_threshold)?;

        let days = strip_days(state);
        let day = days.get(index)?;

        let is_first_of_month = day.date.day() == 1;
        let is_window_edge = index == 0 || index == days.len() - 1;
        if !(is_first_of_month || is_window_edge) {
            return None;
        }

        let visible = MonthKey::of(day.date);
        if visible == tracked {
            return None;
        }

        debug!("Strip settled on {:?} (was {:?})", visible, tracked);
        self.phase = StripPhase::Ready { tracked: visible };
        Some(StripEvent::MonthChanged(day.date))
    }

    /// Bring the first in-window day of `month`/`year` to the left edge.
    /// Returns false, and leaves the surface alone, if the month has no day
    /// in the window or the cell is not rendered.
    pub fn scroll_to_month(&mut self, state: &CalendarState, year: i32, month: u32) -> bool {
        let target = MonthKey { year, month };
        let days = strip_days(state);
        let Some(index) = days
            .iter()
            .position(|day| MonthKey::of(day.date) == target)
        else {
            debug!("Scroll target {:?} is outside the booking window", target);
            return false;
        };

        match self.surface.item_offset(index) {
            Some(offset) => {
                debug!("Scrolling strip to {} at {}", days[index].date, offset);
                self.surface.scroll_to(offset);
                true
            }
            None => false,
        }
    }

    /// The state's current date changed. If it is a month the strip is not
    /// already showing, track it and scroll there once layout settles.
    ///
    /// Tracking is updated before the scroll so the scroll's own settle
    /// finds nothing to report.
    pub fn on_current_date_changed(&mut self, current: NaiveDate) -> bool {
        let StripPhase::Ready { tracked } = self.phase else {
            return false;
        };

        let target = MonthKey::of(current);
        if target == tracked {
            return false;
        }

        self.phase = StripPhase::Ready { tracked: target };

        // a pending settle was measured against the old month
        if let Some(handle) = self.debounce.take() {
            self.timers.cancel(handle);
        }
        if let Some(handle) = self.pending_scroll.take() {
            self.timers.cancel(handle);
        }

        let now = self.clock.now();
        self.pending_scroll = Some(self.timers.schedule(
            now,
            self.config.settle_delay,
            StripTask::ScrollToMonth(target),
        ));
        debug!("External navigation to {:?}, scroll scheduled", target);
        true
    }

    /// A tap on a strip cell. Any in-window day can be picked; picking one in
    /// another month also moves the state's month, without scrolling.
    pub fn select_day(&mut self, state: &mut CalendarState, date: NaiveDate) -> Option<StripEvent> {
        if date < state.today() || date > state.max_bookable_date() {
            return None;
        }

        if !same_month(date, state.current_date()) {
            if let StripPhase::Ready { .. } = self.phase {
                self.phase = StripPhase::Ready {
                    tracked: MonthKey::of(date),
                };
            }
            state.set_current_date(date);
        }
        state.set_selected_date(date);

        strip_days(state)
            .into_iter()
            .find(|day| day.date == date)
            .map(StripEvent::DaySelected)
    }

    /// Unmount: drop pending timers. Consuming `self` means nothing can fire
    /// against the torn-down strip. Returns the number of cancelled timers.
    pub fn destroy(mut self) -> usize {
        self.debounce = None;
        self.pending_scroll = None;
        let cancelled = self.timers.cancel_all();
        debug!("Week strip destroyed, {} timer(s) cancelled", cancelled);
        cancelled
    }
}
