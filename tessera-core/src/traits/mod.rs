//! Hardware abstraction traits
//!
//! These traits define the interface between the console logic and
//! hardware-specific implementations: the LED bank the pattern engine
//! drives, and the calendar the RTC worker configures and samples.

pub mod calendar;
pub mod led;

pub use calendar::{Calendar, CalendarError};
pub use led::LedBank;
