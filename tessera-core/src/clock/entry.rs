//! Sequential time and date entry
//!
//! Each configuration sequence prompts for one field at a time and
//! validates the reply immediately. The first out-of-range or
//! non-numeric reply aborts the whole sequence: nothing already entered
//! is committed, the draft is discarded. Only a fully validated draft is
//! handed back for the atomic commit.

use super::{Date, Time, Weekday};

/// Outcome of feeding one reply to an entry sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EntryOutcome<T> {
    /// Field accepted; prompt for the next one
    Next(&'static str),
    /// Every field validated; commit this value
    Complete(T),
    /// Reply invalid; the sequence is over and the draft discarded
    Rejected,
}

/// Parse a decimal field reply
///
/// Rejects empty replies, non-digit bytes, and values that do not fit
/// the field width.
fn parse_field(reply: &[u8]) -> Option<u8> {
    if reply.is_empty() || reply.len() > 3 {
        return None;
    }

    let mut value: u16 = 0;
    for &byte in reply {
        if !byte.is_ascii_digit() {
            return None;
        }
        value = value * 10 + (byte - b'0') as u16;
    }

    u8::try_from(value).ok()
}

/// Sequential time entry: hours, then minutes, then seconds
#[derive(Debug, Clone, Copy)]
pub struct TimeEntry {
    state: TimeField,
    draft: Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeField {
    Hours,
    Minutes,
    Seconds,
}

impl TimeEntry {
    pub const HOURS_PROMPT: &'static str = "Enter hours(0-23): ";
    pub const MINUTES_PROMPT: &'static str = "Enter minutes(0-59): ";
    pub const SECONDS_PROMPT: &'static str = "Enter seconds(0-59): ";

    pub const fn new() -> Self {
        Self {
            state: TimeField::Hours,
            draft: Time::new(0, 0, 0),
        }
    }

    /// Prompt for the first field
    pub const fn first_prompt() -> &'static str {
        Self::HOURS_PROMPT
    }

    /// Feed the reply for the currently prompted field
    ///
    /// The completed value is a 24-hour time; the caller converts it to
    /// the display convention before committing.
    pub fn feed(&mut self, reply: &[u8]) -> EntryOutcome<Time> {
        let Some(value) = parse_field(reply) else {
            return EntryOutcome::Rejected;
        };

        match self.state {
            TimeField::Hours => {
                if value > 23 {
                    return EntryOutcome::Rejected;
                }
                self.draft.hours = value;
                self.state = TimeField::Minutes;
                EntryOutcome::Next(Self::MINUTES_PROMPT)
            }
            TimeField::Minutes => {
                if value > 59 {
                    return EntryOutcome::Rejected;
                }
                self.draft.minutes = value;
                self.state = TimeField::Seconds;
                EntryOutcome::Next(Self::SECONDS_PROMPT)
            }
            TimeField::Seconds => {
                if value > 59 {
                    return EntryOutcome::Rejected;
                }
                self.draft.seconds = value;
                EntryOutcome::Complete(self.draft)
            }
        }
    }
}

impl Default for TimeEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// Sequential date entry: day, month, year, then weekday
#[derive(Debug, Clone, Copy)]
pub struct DateEntry {
    state: DateField,
    day: u8,
    month: u8,
    year: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateField {
    Day,
    Month,
    Year,
    Weekday,
}

impl DateEntry {
    pub const DAY_PROMPT: &'static str = "Enter date(1-31): ";
    pub const MONTH_PROMPT: &'static str = "Enter month(1-12): ";
    pub const YEAR_PROMPT: &'static str = "Enter year(0-99): ";
    pub const WEEKDAY_PROMPT: &'static str = "Enter day(1-7): ";

    pub const fn new() -> Self {
        Self {
            state: DateField::Day,
            day: 0,
            month: 0,
            year: 0,
        }
    }

    /// Prompt for the first field
    pub const fn first_prompt() -> &'static str {
        Self::DAY_PROMPT
    }

    /// Feed the reply for the currently prompted field
    pub fn feed(&mut self, reply: &[u8]) -> EntryOutcome<Date> {
        let Some(value) = parse_field(reply) else {
            return EntryOutcome::Rejected;
        };

        match self.state {
            DateField::Day => {
                if value < 1 || value > 31 {
                    return EntryOutcome::Rejected;
                }
                self.day = value;
                self.state = DateField::Month;
                EntryOutcome::Next(Self::MONTH_PROMPT)
            }
            DateField::Month => {
                if value < 1 || value > 12 {
                    return EntryOutcome::Rejected;
                }
                self.month = value;
                self.state = DateField::Year;
                EntryOutcome::Next(Self::YEAR_PROMPT)
            }
            DateField::Year => {
                if value > 99 {
                    return EntryOutcome::Rejected;
                }
                self.year = value;
                self.state = DateField::Weekday;
                EntryOutcome::Next(Self::WEEKDAY_PROMPT)
            }
            DateField::Weekday => {
                let Some(weekday) = Weekday::from_entry(value) else {
                    return EntryOutcome::Rejected;
                };
                EntryOutcome::Complete(Date::new(self.day, self.month, self.year, weekday))
            }
        }
    }
}

impl Default for DateEntry {
    fn default() -> Self {
        Self::new()
    }
}
