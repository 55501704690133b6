
// Declare modules within this crate
pub mod error; // Error handling
pub mod logging; // Logging utilities
pub mod services; // Clock capability
pub mod timers; // Deferred callbacks for the event loop

// Re-export error types and utilities for easier access
pub use error::{
    date_out_of_range, invalid_constraints, invalid_settings, invalid_timezone, CalendarError,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_fallback, parse_level};

pub use services::{Clock, ManualClock, SystemClock};
pub use timers::{TimerHandle, TimerQueue};

// This crate provides the ambient pieces shared by the calendar crates:
// the error taxonomy, subscriber setup, the clock seam and the timer queue.
