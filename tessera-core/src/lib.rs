//! Board-agnostic logic for the Tessera serial console
//!
//! This crate contains everything that does not depend on specific
//! hardware:
//!
//! - Command framing (newline-terminated lines from a drained byte queue)
//! - The application mode token and command dispatch mapping
//! - Menu command parsing for every console mode
//! - LED pattern generators
//! - Clock/calendar types, field validation, and multi-step entry drafts
//! - Snapshot formatting
//! - Hardware abstraction traits (LED bank, calendar)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod clock;
pub mod command;
pub mod led;
pub mod menu;
pub mod mode;
pub mod traits;
