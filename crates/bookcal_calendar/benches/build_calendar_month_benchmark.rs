use bookcal_calendar::availability::AvailabilityMap;
use bookcal_calendar::month_grid::build_calendar_month_for;
use bookcal_calendar::week_strip::strip_days;
use bookcal_calendar::{BookingConstraints, CalendarState, MaxTimeOut, MaxTimeOutUnit};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// Helper function to create constraints with a given horizon
fn create_constraints(value: u32, unit: MaxTimeOutUnit) -> BookingConstraints {
    BookingConstraints {
        max_time_out: MaxTimeOut { value, unit },
        ..BookingConstraints::default()
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

fn benchmark_availability_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("availability_map");

    // Default window: 3 months
    group.bench_function("three_months", |b| {
        let constraints = BookingConstraints::default();
        b.iter(|| AvailabilityMap::build(black_box(&constraints), black_box(today())))
    });

    // Longest random window: 3 years
    group.bench_function("three_years", |b| {
        let constraints = create_constraints(3, MaxTimeOutUnit::Year);
        b.iter(|| AvailabilityMap::build(black_box(&constraints), black_box(today())))
    });

    group.finish();
}

fn benchmark_build_calendar_month(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_calendar_month");

    let constraints = create_constraints(18, MaxTimeOutUnit::Month);
    let map = AvailabilityMap::build(&constraints, today());

    // Five-row month
    group.bench_function("january", |b| {
        b.iter(|| {
            build_calendar_month_for(
                black_box(today()),
                black_box(today()),
                black_box(Some(today())),
                black_box(&map),
            )
        })
    });

    // Six-row month
    group.bench_function("march", |b| {
        let target = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        b.iter(|| {
            build_calendar_month_for(
                black_box(target),
                black_box(today()),
                black_box(None),
                black_box(&map),
            )
        })
    });

    group.finish();
}

fn benchmark_strip_days(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_days");

    // The strip is rebuilt on every state change, over the whole window
    group.bench_function("eighteen_months", |b| {
        let state = CalendarState::new(create_constraints(18, MaxTimeOutUnit::Month), today());
        b.iter(|| strip_days(black_box(&state)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_availability_map,
    benchmark_build_calendar_month,
    benchmark_strip_days
);
criterion_main!(benches);
