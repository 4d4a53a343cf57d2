//! Clock and calendar types
//!
//! Time and date values as the calendar hardware stores them, the
//! board's display convention (12-hour or 24-hour), and the conversion
//! applied to a completed time entry before it is committed.

pub mod entry;
pub mod format;

pub use entry::{DateEntry, EntryOutcome, TimeEntry};
pub use format::{format_snapshot, SnapshotText, SNAPSHOT_HEADER};

/// AM/PM marker, meaningful under the 12-hour convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Meridiem {
    Am,
    Pm,
}

/// Board display convention for hours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourFormat {
    H12,
    H24,
}

/// Day of week, Monday-first as the calendar stores it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// Three-letter abbreviation used in snapshots
    pub const fn abbrev(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }

    /// Decode the stored 1-7 Monday-first numbering
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Stored 1-7 Monday-first numbering
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Remap a console date-entry value (1-7, Sunday-first) to the
    /// stored numbering
    ///
    /// Keeps the original firmware's literal transform: `(v + 6) % 7`,
    /// with a zero result mapping to 7.
    pub const fn from_entry(value: u8) -> Option<Self> {
        if value < 1 || value > 7 {
            return None;
        }
        let shifted = (value + 6) % 7;
        let index = if shifted == 0 { 7 } else { shifted };
        Self::from_index(index)
    }
}

/// A time value as the calendar stores it
///
/// Under the 12-hour convention `hours` is 1-12 and `meridiem` is set;
/// under the 24-hour convention `hours` is 0-23 and `meridiem` is
/// `None`. Sequential entry always accumulates 24-hour values and
/// converts once, at commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Time {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub meridiem: Option<Meridiem>,
}

impl Time {
    /// A 24-hour time value
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            meridiem: None,
        }
    }

    /// Convert an accumulated 24-hour value to the board's display
    /// convention
    ///
    /// Under `H24` the value is unchanged. Under `H12`: hour 0 becomes
    /// 12 AM, 1-11 stay AM, 12 stays and is marked PM, 13-23 drop by
    /// twelve and are marked PM.
    pub fn to_display(mut self, format: HourFormat) -> Self {
        match format {
            HourFormat::H24 => {
                self.meridiem = None;
            }
            HourFormat::H12 => {
                if self.hours > 12 {
                    self.hours -= 12;
                    self.meridiem = Some(Meridiem::Pm);
                } else if self.hours == 12 {
                    self.meridiem = Some(Meridiem::Pm);
                } else if self.hours >= 1 {
                    self.meridiem = Some(Meridiem::Am);
                } else {
                    self.hours = 12;
                    self.meridiem = Some(Meridiem::Am);
                }
            }
        }
        self
    }
}

/// A calendar date as stored: two-digit year, Monday-first weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Date {
    pub day: u8,
    pub month: u8,
    /// Years since 2000
    pub year: u8,
    pub weekday: Weekday,
}

impl Date {
    pub const fn new(day: u8, month: u8, year: u8, weekday: Weekday) -> Self {
        Self {
            day,
            month,
            year,
            weekday,
        }
    }
}

/// One sampled time/date pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub time: Time,
    pub date: Date,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_conversion_24h_is_identity() {
        for hours in 0..24 {
            let time = Time::new(hours, 30, 45).to_display(HourFormat::H24);
            assert_eq!(time.hours, hours);
            assert_eq!(time.meridiem, None);
        }
    }

    #[test]
    fn test_display_conversion_12h_table() {
        // hour 0 -> 12 AM
        let t = Time::new(0, 0, 0).to_display(HourFormat::H12);
        assert_eq!((t.hours, t.meridiem), (12, Some(Meridiem::Am)));

        // 1-11 unchanged, AM
        for hours in 1..12 {
            let t = Time::new(hours, 0, 0).to_display(HourFormat::H12);
            assert_eq!((t.hours, t.meridiem), (hours, Some(Meridiem::Am)));
        }

        // 12 unchanged, PM
        let t = Time::new(12, 0, 0).to_display(HourFormat::H12);
        assert_eq!((t.hours, t.meridiem), (12, Some(Meridiem::Pm)));

        // 13-23 -> hour - 12, PM
        for hours in 13..24 {
            let t = Time::new(hours, 0, 0).to_display(HourFormat::H12);
            assert_eq!((t.hours, t.meridiem), (hours - 12, Some(Meridiem::Pm)));
        }
    }

    #[test]
    fn test_conversion_preserves_minutes_and_seconds() {
        let t = Time::new(17, 42, 9).to_display(HourFormat::H12);
        assert_eq!((t.minutes, t.seconds), (42, 9));
    }

    #[test]
    fn test_weekday_entry_remap() {
        // Console entry is Sunday-first: 1 -> Sunday ... 7 -> Saturday.
        assert_eq!(Weekday::from_entry(1), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_entry(2), Some(Weekday::Monday));
        assert_eq!(Weekday::from_entry(3), Some(Weekday::Tuesday));
        assert_eq!(Weekday::from_entry(4), Some(Weekday::Wednesday));
        assert_eq!(Weekday::from_entry(5), Some(Weekday::Thursday));
        assert_eq!(Weekday::from_entry(6), Some(Weekday::Friday));
        assert_eq!(Weekday::from_entry(7), Some(Weekday::Saturday));
    }

    #[test]
    fn test_weekday_entry_rejects_out_of_range() {
        assert_eq!(Weekday::from_entry(0), None);
        assert_eq!(Weekday::from_entry(8), None);
    }

    #[test]
    fn test_weekday_abbrevs() {
        assert_eq!(Weekday::Monday.abbrev(), "Mon");
        assert_eq!(Weekday::Sunday.abbrev(), "Sun");
    }

    #[test]
    fn test_weekday_index_roundtrip() {
        for index in 1..=7 {
            let day = Weekday::from_index(index).unwrap();
            assert_eq!(day.index(), index);
        }
        assert_eq!(Weekday::from_index(0), None);
        assert_eq!(Weekday::from_index(8), None);
    }
}
