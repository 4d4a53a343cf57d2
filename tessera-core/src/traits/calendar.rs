//! Calendar trait
//!
//! The register-level clock/calendar access lives behind this seam.
//! Committed values have already passed field validation and display
//! conversion; an implementation refusing one is a contract breach the
//! caller treats as fatal.

use crate::clock::{Date, HourFormat, Snapshot, Time};

/// Errors a calendar implementation can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalendarError {
    /// Hardware rejected a read or write
    Hardware,
    /// The calendar has not been set since power-on
    NotRunning,
}

/// Battery-backed (or emulated) clock/calendar hardware
pub trait Calendar {
    /// The board's configured display convention
    fn hour_format(&self) -> HourFormat;

    /// Sample the current time and date
    fn now(&mut self) -> Result<Snapshot, CalendarError>;

    /// Commit a fully validated, display-converted time
    fn set_time(&mut self, time: Time) -> Result<(), CalendarError>;

    /// Commit a fully validated date
    fn set_date(&mut self, date: Date) -> Result<(), CalendarError>;
}
