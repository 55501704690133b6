#[cfg(test)]
mod tests {
    use crate::availability::Availability;
    use crate::state::{shift_month, CalendarState, StateEvent};
    use bookcal_config::{
        BookingConstraints, MaxTimeOut, MaxTimeOutUnit, MinAdvanceUnit, MinTimeInAdvance,
    };
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn recorder(state: &mut CalendarState) -> Rc<RefCell<Vec<StateEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        state.subscribe(move |event| sink.borrow_mut().push(*event));
        events
    }

    #[test]
    fn test_shift_month_clamps() {
        assert_eq!(shift_month(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2024, 3, 31), -1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2024, 1, 15), -1), date(2023, 12, 15));
        assert_eq!(shift_month(date(2024, 1, 15), 12), date(2025, 1, 15));
    }

    #[test]
    fn test_new_session() {
        let today = date(2024, 1, 15);
        let state = CalendarState::new(BookingConstraints::default(), today);

        assert_eq!(state.today(), today);
        assert_eq!(state.current_date(), today);
        assert_eq!(state.selected_date(), Some(today));
        assert_eq!(state.max_bookable_date(), date(2024, 4, 15));
        assert_eq!(state.min_bookable_date(), today);
        assert_eq!(state.availability_map().len(), 92);
        assert!(state.is_today(today));
        assert!(state.is_selected(today));
        assert_eq!(state.availability_for(date(2024, 1, 17)), Availability::Available);
        assert_eq!(state.availability_for(date(2025, 1, 17)), Availability::NotAvailable);
    }

    #[test]
    fn test_setters_notify_listeners() {
        let today = date(2024, 1, 15);
        let mut state = CalendarState::new(BookingConstraints::default(), today);
        let events = recorder(&mut state);

        state.set_selected_date(date(2024, 1, 20));
        state.set_current_date(date(2024, 2, 1));

        assert_eq!(
            *events.borrow(),
            vec![
                StateEvent::SelectedDateChanged {
                    previous: Some(today),
                    current: Some(date(2024, 1, 20)),
                },
                StateEvent::CurrentDateChanged {
                    previous: today,
                    current: date(2024, 2, 1),
                },
            ]
        );
    }

    #[test]
    fn test_unchanged_writes_are_silent() {
        let today = date(2024, 1, 15);
        let mut state = CalendarState::new(BookingConstraints::default(), today);
        let events = recorder(&mut state);

        state.set_selected_date(today);
        state.set_current_date(today);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_unsubscribe() {
        let mut state = CalendarState::new(BookingConstraints::default(), date(2024, 1, 15));
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = state.subscribe(move |_| *sink.borrow_mut() += 1);

        state.next_month();
        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.next_month();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_month_navigation_and_disabled_flags() {
        let today = date(2024, 1, 15);
        let mut state = CalendarState::new(BookingConstraints::default(), today);

        assert!(state.is_previous_month_disabled());
        assert!(!state.is_next_month_disabled());

        state.next_month();
        assert_eq!(state.current_date(), date(2024, 2, 15));
        assert!(!state.is_previous_month_disabled());

        state.next_month();
        assert_eq!(state.current_date(), date(2024, 3, 15));
        // Apr 15 is the max bookable date itself
        assert!(!state.is_next_month_disabled());

        state.next_month();
        assert_eq!(state.current_date(), date(2024, 4, 15));
        assert!(state.is_next_month_disabled());

        state.previous_month();
        assert_eq!(state.current_date(), date(2024, 3, 15));
    }

    #[test]
    fn test_previous_disabled_across_year_boundary() {
        let today = date(2024, 12, 20);
        let mut state = CalendarState::new(BookingConstraints::default(), today);
        assert!(state.is_previous_month_disabled());

        state.next_month();
        assert_eq!(state.current_date(), date(2025, 1, 20));
        assert!(!state.is_previous_month_disabled());
    }

    #[test]
    fn test_selection_is_independent_of_focus() {
        let today = date(2024, 1, 15);
        let mut state = CalendarState::new(BookingConstraints::default(), today);
        state.set_selected_date(date(2024, 1, 20));
        state.next_month();
        assert_eq!(state.selected_date(), Some(date(2024, 1, 20)));
    }

    #[test]
    fn test_first_bookable_date() {
        let state = CalendarState::new(BookingConstraints::default(), date(2024, 1, 15));
        assert_eq!(state.first_bookable_date(), date(2024, 1, 17));
    }

    #[test]
    fn test_first_bookable_date_falls_back_to_today() {
        let today = date(2024, 2, 8);
        let constraints = BookingConstraints {
            max_time_out: MaxTimeOut {
                value: 1,
                unit: MaxTimeOutUnit::Week,
            },
            min_time_in_advance: MinTimeInAdvance {
                value: 2,
                unit: MinAdvanceUnit::Day,
            },
        };
        let state = CalendarState::new(constraints, today);
        assert_eq!(state.first_bookable_date(), today);
    }
}
