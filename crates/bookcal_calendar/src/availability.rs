// --- File: crates/bookcal_calendar/src/availability.rs ---
use crate::constraints::{is_bookable, max_bookable_date};
use bookcal_config::BookingConstraints;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    Available,
    NotAvailable,
}

impl Availability {
    pub fn is_available(self) -> bool {
        self == Availability::Available
    }
}

/// Weekdays are available above this bucket.
pub const WEEKDAY_THRESHOLD: u32 = 20;
/// Weekends are available above this bucket, so they open less often.
pub const WEEKEND_THRESHOLD: u32 = 30;

/// 32-bit wrapping string hash of the `YYYY-MM-DD` form of `date`.
pub fn date_hash(date: NaiveDate) -> i32 {
    date.format("%Y-%m-%d")
        .to_string()
        .bytes()
        .fold(0i32, |hash, byte| {
            hash.wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(i32::from(byte))
        })
}

/// Pseudo-random score in `0..100`, a pure function of the date.
pub fn availability_bucket(date: NaiveDate) -> u32 {
    date_hash(date).unsigned_abs() % 100
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Derives availability for one date. Unbookable dates are never available.
pub fn availability_for(
    date: NaiveDate,
    constraints: &BookingConstraints,
    today: NaiveDate,
) -> Availability {
    if !is_bookable(date, constraints, today) {
        return Availability::NotAvailable;
    }

    let threshold = if is_weekend(date) {
        WEEKEND_THRESHOLD
    } else {
        WEEKDAY_THRESHOLD
    };

    if availability_bucket(date) > threshold {
        Availability::Available
    } else {
        Availability::NotAvailable
    }
}

/// Availability for every date of the booking window, computed once per session.
///
/// Serializes as an object keyed by ISO date strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct AvailabilityMap {
    entries: BTreeMap<NaiveDate, Availability>,
}

impl AvailabilityMap {
    /// Eagerly derive `[today, max_bookable_date]`.
    pub fn build(constraints: &BookingConstraints, today: NaiveDate) -> Self {
        let max = max_bookable_date(constraints, today);
        let entries: BTreeMap<_, _> = today
            .iter_days()
            .take_while(|date| *date <= max)
            .map(|date| (date, availability_for(date, constraints, today)))
            .collect();

        let available = entries.values().filter(|a| a.is_available()).count();
        debug!(
            "Built availability map {} - {}: {}/{} dates available",
            today,
            max,
            available,
            entries.len()
        );

        Self { entries }
    }

    /// Lookup; dates outside the window are not available.
    pub fn get(&self, date: NaiveDate) -> Availability {
        self.entries
            .get(&date)
            .copied()
            .unwrap_or(Availability::NotAvailable)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    /// Earliest available date, if any.
    pub fn first_available(&self) -> Option<NaiveDate> {
        self.entries
            .iter()
            .find(|(_, availability)| availability.is_available())
            .map(|(date, _)| *date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Availability)> + '_ {
        self.entries.iter().map(|(date, availability)| (*date, *availability))
    }
}
