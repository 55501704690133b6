// --- File: crates/bookcal_calendar/src/month_grid.rs ---
use crate::availability::{Availability, AvailabilityMap};
use crate::state::CalendarState;
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

pub const DAYS_PER_WEEK: usize = 7;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One cell of a calendar view. Rebuilt on every state change, never patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub availability: Availability,
    pub is_selected: bool,
}

impl CalendarDay {
    /// Whether a grid should highlight this cell as the selection.
    /// Padding days from adjacent months never show it.
    pub fn shows_selection(&self) -> bool {
        self.is_current_month && self.is_selected
    }
}

/// A month expanded to whole Sunday-to-Saturday weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    /// Zero based, January = 0
    pub month: u32,
    pub month_name: String,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Rows of exactly seven days in array order.
    pub fn rows(&self) -> std::slice::Chunks<'_, CalendarDay> {
        self.days.chunks(DAYS_PER_WEEK)
    }

    pub fn current_month_days(&self) -> impl Iterator<Item = &CalendarDay> + '_ {
        self.days.iter().filter(|day| day.is_current_month)
    }

    pub fn find(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days.iter().find(|day| day.date == date)
    }
}

/// English month name for a zero-based month. Out-of-range input wraps.
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES[(month0 % 12) as usize]
}

/// Short label for a month selector, e.g. "Jul 2025".
pub fn month_year_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// The Saturday on or after `date`.
pub fn week_end(date: NaiveDate) -> NaiveDate {
    let forward = 6 - u64::from(date.weekday().num_days_from_sunday());
    date.checked_add_days(Days::new(forward)).unwrap_or(date)
}

/// Every date of the whole weeks covering `first..=last`.
pub fn week_aligned_span(first: NaiveDate, last: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let end = week_end(last);
    week_start(first)
        .iter_days()
        .take_while(move |date| *date <= end)
}

/// Builds the grid for the month containing `target`.
///
/// Padding days and past days are never available; everything else comes
/// from the availability map.
pub fn build_calendar_month_for(
    target: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    availability: &AvailabilityMap,
) -> CalendarMonth {
    let days = week_aligned_span(first_of_month(target), last_of_month(target))
        .map(|date| {
            let is_current_month = same_month(date, target);
            let availability = if !is_current_month || date < today {
                Availability::NotAvailable
            } else {
                availability.get(date)
            };
            CalendarDay {
                date,
                is_current_month,
                is_today: date == today,
                availability,
                is_selected: selected == Some(date),
            }
        })
        .collect();

    CalendarMonth {
        year: target.year(),
        month: target.month0(),
        month_name: month_name(target.month0()).to_string(),
        days,
    }
}

/// Grid for the state's current month.
pub fn build_calendar_month(state: &CalendarState) -> CalendarMonth {
    build_calendar_month_for(
        state.current_date(),
        state.today(),
        state.selected_date(),
        state.availability_map(),
    )
}
