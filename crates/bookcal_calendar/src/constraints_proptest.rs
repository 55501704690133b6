#[cfg(test)]
mod tests {
    use crate::constraints::{is_bookable, max_bookable_date};
    use bookcal_config::{
        BookingConstraints, MaxTimeOut, MaxTimeOutUnit, MinAdvanceUnit, MinTimeInAdvance,
    };
    use chrono::{Days, NaiveDate};
    use proptest::prelude::*;

    fn max_unit() -> impl Strategy<Value = MaxTimeOutUnit> {
        prop_oneof![
            Just(MaxTimeOutUnit::Week),
            Just(MaxTimeOutUnit::Month),
            Just(MaxTimeOutUnit::Year),
        ]
    }

    fn min_unit() -> impl Strategy<Value = MinAdvanceUnit> {
        prop_oneof![
            Just(MinAdvanceUnit::Hour),
            Just(MinAdvanceUnit::Day),
            Just(MinAdvanceUnit::None),
        ]
    }

    // Any day from 2000 through roughly 2060
    fn any_today() -> impl Strategy<Value = NaiveDate> {
        (0u64..22_000).prop_map(|offset| {
            NaiveDate::from_ymd_opt(2000, 1, 1)
                .unwrap()
                .checked_add_days(Days::new(offset))
                .unwrap()
        })
    }

    fn any_constraints() -> impl Strategy<Value = BookingConstraints> {
        (1u32..=24, max_unit(), 0u32..=72, min_unit()).prop_map(
            |(max_value, max_unit, min_value, min_unit)| BookingConstraints {
                max_time_out: MaxTimeOut {
                    value: max_value,
                    unit: max_unit,
                },
                min_time_in_advance: MinTimeInAdvance {
                    value: min_value,
                    unit: min_unit,
                },
            },
        )
    }

    proptest! {
        // Test that a date before today is never bookable
        #[test]
        fn test_past_never_bookable(
            today in any_today(),
            constraints in any_constraints(),
            days_back in 1u64..1000,
        ) {
            let past = today.checked_sub_days(Days::new(days_back)).unwrap();
            prop_assert!(!is_bookable(past, &constraints, today));
        }

        // Test that the window always ends after today
        #[test]
        fn test_max_bookable_after_today(
            today in any_today(),
            constraints in any_constraints(),
        ) {
            prop_assert!(max_bookable_date(&constraints, today) > today);
        }

        // Test that nothing past the max bookable date is bookable
        #[test]
        fn test_nothing_past_max_bookable(
            today in any_today(),
            constraints in any_constraints(),
            days_after in 1u64..400,
        ) {
            let max = max_bookable_date(&constraints, today);
            let beyond = max.checked_add_days(Days::new(days_after)).unwrap();
            prop_assert!(!is_bookable(beyond, &constraints, today));
        }

        // Test that without a lead time, today is bookable
        #[test]
        fn test_no_lead_time_today_bookable(
            today in any_today(),
            max_value in 1u32..=24,
            max_unit in max_unit(),
        ) {
            let constraints = BookingConstraints {
                max_time_out: MaxTimeOut { value: max_value, unit: max_unit },
                min_time_in_advance: MinTimeInAdvance { value: 0, unit: MinAdvanceUnit::None },
            };
            prop_assert!(is_bookable(today, &constraints, today));
        }

        // Test that a longer horizon never ends earlier
        #[test]
        fn test_max_bookable_monotonic(
            today in any_today(),
            value in 1u32..=24,
            unit in max_unit(),
        ) {
            let shorter = BookingConstraints {
                max_time_out: MaxTimeOut { value, unit },
                ..BookingConstraints::default()
            };
            let longer = BookingConstraints {
                max_time_out: MaxTimeOut { value: value + 1, unit },
                ..BookingConstraints::default()
            };
            prop_assert!(max_bookable_date(&shorter, today) <= max_bookable_date(&longer, today));
        }
    }
}
