#[cfg(test)]
mod tests {
    use crate::availability::{Availability, AvailabilityMap};
    use crate::month_grid::{build_calendar_month_for, last_of_month, same_month, DAYS_PER_WEEK};
    use bookcal_config::BookingConstraints;
    use chrono::{Datelike, Days, NaiveDate, Weekday};
    use proptest::prelude::*;

    fn day_from(offset: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    }

    proptest! {
        // Test that every grid is made of whole Sunday-to-Saturday weeks
        #[test]
        fn test_grid_is_whole_weeks(offset in 0u64..30_000) {
            let target = day_from(offset);
            let month = build_calendar_month_for(target, target, None, &AvailabilityMap::default());

            prop_assert_eq!(month.days.len() % DAYS_PER_WEEK, 0);
            prop_assert!(month.days.len() >= 28 && month.days.len() <= 42);
            prop_assert_eq!(month.days.first().unwrap().date.weekday(), Weekday::Sun);
            prop_assert_eq!(month.days.last().unwrap().date.weekday(), Weekday::Sat);
        }

        // Test that each in-month day appears exactly once, in order
        #[test]
        fn test_in_month_days_once_in_order(offset in 0u64..30_000) {
            let target = day_from(offset);
            let month = build_calendar_month_for(target, target, None, &AvailabilityMap::default());

            let in_month: Vec<_> = month.current_month_days().map(|day| day.date).collect();
            prop_assert_eq!(in_month.len() as u32, last_of_month(target).day());
            prop_assert!(in_month.iter().all(|date| same_month(*date, target)));
            prop_assert!(month.days.windows(2).all(|pair| pair[0].date.succ_opt() == Some(pair[1].date)));
        }

        // Test that padding and past days are never available
        #[test]
        fn test_padding_and_past_unavailable(offset in 0u64..20_000, months_ahead in 0u32..3) {
            let today = day_from(offset);
            let target = today.checked_add_months(chrono::Months::new(months_ahead)).unwrap();
            let map = AvailabilityMap::build(&BookingConstraints::default(), today);
            let month = build_calendar_month_for(target, today, Some(today), &map);

            for day in &month.days {
                if !day.is_current_month || day.date < today {
                    prop_assert_eq!(day.availability, Availability::NotAvailable);
                }
                prop_assert_eq!(day.is_today, day.date == today);
            }
        }
    }
}
