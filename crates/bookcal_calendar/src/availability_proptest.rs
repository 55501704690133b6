#[cfg(test)]
mod tests {
    use crate::availability::{
        availability_bucket, availability_for, is_weekend, Availability, AvailabilityMap,
        WEEKDAY_THRESHOLD, WEEKEND_THRESHOLD,
    };
    use crate::constraints::{is_bookable, max_bookable_date};
    use bookcal_config::{BookingConstraints, MaxTimeOut, MaxTimeOutUnit};
    use chrono::{Days, NaiveDate};
    use proptest::prelude::*;

    fn day_from(offset: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    }

    proptest! {
        // Test that the bucket always lands in 0..100
        #[test]
        fn test_bucket_in_range(offset in 0u64..40_000) {
            prop_assert!(availability_bucket(day_from(offset)) < 100);
        }

        // Test that availability is a pure function of its inputs
        #[test]
        fn test_availability_is_deterministic(offset in 0u64..20_000, ahead in 0u64..120) {
            let today = day_from(offset);
            let date = today.checked_add_days(Days::new(ahead)).unwrap();
            let constraints = BookingConstraints::default();
            prop_assert_eq!(
                availability_for(date, &constraints, today),
                availability_for(date, &constraints, today)
            );
        }

        // Test that available implies bookable and above the day's threshold
        #[test]
        fn test_available_implies_bookable(offset in 0u64..20_000, ahead in 0u64..120) {
            let today = day_from(offset);
            let date = today.checked_add_days(Days::new(ahead)).unwrap();
            let constraints = BookingConstraints::default();

            if availability_for(date, &constraints, today) == Availability::Available {
                prop_assert!(is_bookable(date, &constraints, today));
                let threshold = if is_weekend(date) { WEEKEND_THRESHOLD } else { WEEKDAY_THRESHOLD };
                prop_assert!(availability_bucket(date) > threshold);
            }
        }

        // Test that the map holds exactly the dates of the window
        #[test]
        fn test_map_has_one_entry_per_window_day(offset in 0u64..20_000, weeks in 1u32..30) {
            let today = day_from(offset);
            let constraints = BookingConstraints {
                max_time_out: MaxTimeOut { value: weeks, unit: MaxTimeOutUnit::Week },
                ..BookingConstraints::default()
            };
            let map = AvailabilityMap::build(&constraints, today);
            let max = max_bookable_date(&constraints, today);

            prop_assert_eq!(map.len() as i64, (max - today).num_days() + 1);
            prop_assert!(map.iter().all(|(date, _)| date >= today && date <= max));
        }
    }
}
