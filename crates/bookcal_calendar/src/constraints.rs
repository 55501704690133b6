// --- File: crates/bookcal_calendar/src/constraints.rs ---
//! Booking window math.
//!
//! Everything here is a pure function of the constraints and the session's
//! `today`. Month and year offsets clamp to the end of the target month
//! (Jan 31 + 1 month = Feb 29 in a leap year, Feb 29 + 1 year = Feb 28).

use bookcal_common::{date_out_of_range, log_fallback, CalendarError};
use bookcal_config::{
    BookingConstraints, ConstraintsSource, MaxTimeOut, MaxTimeOutUnit, MinAdvanceUnit,
    MinTimeInAdvance,
};
use chrono::{Days, Duration, Months, NaiveDate, NaiveTime};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// Last date that may be booked: `today` advanced by the max time out.
pub fn checked_max_bookable_date(
    constraints: &BookingConstraints,
    today: NaiveDate,
) -> Result<NaiveDate, CalendarError> {
    let MaxTimeOut { value, unit } = constraints.max_time_out;
    let max = match unit {
        MaxTimeOutUnit::Week => today.checked_add_days(Days::new(7 * u64::from(value))),
        MaxTimeOutUnit::Month => today.checked_add_months(Months::new(value)),
        MaxTimeOutUnit::Year => value
            .checked_mul(12)
            .and_then(|months| today.checked_add_months(Months::new(months))),
    };
    max.ok_or_else(|| date_out_of_range(format!("{} + {}", today, constraints.max_time_out)))
}

/// Like [`checked_max_bookable_date`], saturating at `NaiveDate::MAX`.
pub fn max_bookable_date(constraints: &BookingConstraints, today: NaiveDate) -> NaiveDate {
    checked_max_bookable_date(constraints, today)
        .unwrap_or_else(|err| log_fallback(NaiveDate::MAX, &err.to_string()))
}

/// First date of the booking window. Lead time may still exclude it.
pub fn min_bookable_date(today: NaiveDate) -> NaiveDate {
    today
}

/// Past dates never qualify; otherwise the minimum lead time must be met.
///
/// Dates are compared at their start of day, so an hour-based lead time of
/// any positive length excludes `today` and admits tomorrow.
pub fn meets_min_advance(
    date: NaiveDate,
    constraints: &BookingConstraints,
    today: NaiveDate,
) -> bool {
    if date < today {
        return false;
    }

    let MinTimeInAdvance { value, unit } = constraints.min_time_in_advance;
    match unit {
        MinAdvanceUnit::None => true,
        MinAdvanceUnit::Day => today
            .checked_add_days(Days::new(u64::from(value)))
            .is_some_and(|earliest| date >= earliest),
        MinAdvanceUnit::Hour => today
            .and_time(NaiveTime::MIN)
            .checked_add_signed(Duration::hours(i64::from(value)))
            .is_some_and(|earliest| date.and_time(NaiveTime::MIN) >= earliest),
    }
}

/// Whether `date` can be booked at all under `constraints`.
pub fn is_bookable(date: NaiveDate, constraints: &BookingConstraints, today: NaiveDate) -> bool {
    meets_min_advance(date, constraints, today) && date <= max_bookable_date(constraints, today)
}

/// Randomized constraints for demo sessions.
///
/// Max time out is 6-18 months or 1-3 years (weeks are left out so the window
/// always spans several months). Min time in advance is 1-5 hours, 1-5 days,
/// or none.
pub fn random_constraints<R: Rng>(rng: &mut R) -> BookingConstraints {
    let max_time_out = if rng.gen_bool(0.5) {
        MaxTimeOut {
            value: rng.gen_range(6..=18),
            unit: MaxTimeOutUnit::Month,
        }
    } else {
        MaxTimeOut {
            value: rng.gen_range(1..=3),
            unit: MaxTimeOutUnit::Year,
        }
    };

    let min_time_in_advance = match rng.gen_range(0..3) {
        0 => MinTimeInAdvance {
            value: rng.gen_range(1..=5),
            unit: MinAdvanceUnit::Hour,
        },
        1 => MinTimeInAdvance {
            value: rng.gen_range(1..=5),
            unit: MinAdvanceUnit::Day,
        },
        _ => MinTimeInAdvance {
            value: 0,
            unit: MinAdvanceUnit::None,
        },
    };

    BookingConstraints {
        max_time_out,
        min_time_in_advance,
    }
}

/// Resolve the configured source into the constraints for a session
/// starting on `today`.
pub fn constraints_for_session<R: Rng>(
    source: &ConstraintsSource,
    today: NaiveDate,
    rng: &mut R,
) -> Result<BookingConstraints, CalendarError> {
    let constraints = match source {
        ConstraintsSource::Default => BookingConstraints::default(),
        ConstraintsSource::Random => random_constraints(rng),
        ConstraintsSource::Fixed(constraints) => *constraints,
    };
    constraints.validate()?;
    checked_max_bookable_date(&constraints, today)?;
    debug!("Session booking constraints: {:?}", constraints);
    Ok(constraints)
}

/// Human-readable constraint summary for a host's info panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintsSummary {
    /// e.g. "3 months"
    pub max_time_out: String,
    /// e.g. "2 days" or "None"
    pub min_time_in_advance: String,
    pub max_bookable_date: NaiveDate,
}

pub fn constraints_summary(constraints: &BookingConstraints, today: NaiveDate) -> ConstraintsSummary {
    ConstraintsSummary {
        max_time_out: constraints.max_time_out.to_string(),
        min_time_in_advance: constraints.min_time_in_advance.to_string(),
        max_bookable_date: max_bookable_date(constraints, today),
    }
}
