// --- File: crates/bookcal_calendar/src/lib.rs ---
// Declare modules within this crate
pub mod availability;
#[cfg(test)]
mod availability_proptest;
pub mod calendar;
pub mod constraints;
#[cfg(test)]
mod constraints_proptest;
pub mod month_grid;
#[cfg(test)]
mod month_grid_proptest;
pub mod state;
#[cfg(test)]
mod state_test;
pub mod surface;
pub mod week_strip;

pub use availability::{Availability, AvailabilityMap};
pub use calendar::{Calendar, ViewMode};
pub use month_grid::{CalendarDay, CalendarMonth};
pub use state::{CalendarState, StateEvent};
pub use surface::{Bounds, StripSurface};
pub use week_strip::{StripEvent, WeekStrip, WeekStripConfig};

pub use bookcal_config::{
    BookingConstraints, MaxTimeOut, MaxTimeOutUnit, MinAdvanceUnit, MinTimeInAdvance,
};
