//! Snapshot formatting
//!
//! Renders one sampled time/date pair as a console line. Two literal
//! layouts, chosen by the board's display convention:
//!
//! - 12-hour: `HH:MM:SS [AM|PM] [Www] DD-MM-YYYY\n`
//! - 24-hour: `HH:MM:SS [Www] DD-MM-YYYY\n`
//!
//! The four-digit year is 2000 plus the stored two-digit year.

use core::fmt::Write;

use heapless::String;

use super::{HourFormat, Meridiem, Snapshot};

/// Header line emitted before a requested snapshot
pub const SNAPSHOT_HEADER: &str = "Current Time&Date ";

/// A formatted snapshot line
pub type SnapshotText = String<64>;

/// Render a snapshot in the given display convention
pub fn format_snapshot(snapshot: &Snapshot, format: HourFormat) -> SnapshotText {
    let mut text = SnapshotText::new();
    let time = snapshot.time;
    let date = snapshot.date;
    let year = 2000u16 + date.year as u16;

    // Capacity is sized well past the longest layout; the writes cannot
    // fail.
    match format {
        HourFormat::H12 => {
            let form = match time.meridiem {
                Some(Meridiem::Pm) => "PM",
                _ => "AM",
            };
            let _ = write!(
                text,
                "{:02}:{:02}:{:02} [{}] [{}] {:02}-{:02}-{:04}\n",
                time.hours,
                time.minutes,
                time.seconds,
                form,
                date.weekday.abbrev(),
                date.day,
                date.month,
                year,
            );
        }
        HourFormat::H24 => {
            let _ = write!(
                text,
                "{:02}:{:02}:{:02} [{}] {:02}-{:02}-{:04}\n",
                time.hours,
                time.minutes,
                time.seconds,
                date.weekday.abbrev(),
                date.day,
                date.month,
                year,
            );
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Date, Time, Weekday};

    fn sample() -> Snapshot {
        Snapshot {
            time: Time::new(9, 5, 7),
            date: Date::new(3, 11, 25, Weekday::Wednesday),
        }
    }

    #[test]
    fn test_format_24h() {
        let text = format_snapshot(&sample(), HourFormat::H24);
        assert_eq!(text.as_str(), "09:05:07 [Wed] 03-11-2025\n");
    }

    #[test]
    fn test_format_12h() {
        let mut snapshot = sample();
        snapshot.time = Time::new(21, 5, 7).to_display(HourFormat::H12);

        let text = format_snapshot(&snapshot, HourFormat::H12);
        assert_eq!(text.as_str(), "09:05:07 [PM] [Wed] 03-11-2025\n");
    }

    #[test]
    fn test_format_12h_morning() {
        let mut snapshot = sample();
        snapshot.time = Time::new(0, 0, 0).to_display(HourFormat::H12);
        snapshot.date = Date::new(1, 1, 0, Weekday::Sunday);

        let text = format_snapshot(&snapshot, HourFormat::H12);
        assert_eq!(text.as_str(), "12:00:00 [AM] [Sun] 01-01-2000\n");
    }

    #[test]
    fn test_year_is_offset_from_2000() {
        let mut snapshot = sample();
        snapshot.date.year = 99;

        let text = format_snapshot(&snapshot, HourFormat::H24);
        assert!(text.as_str().ends_with("03-11-2099\n"));
    }
}
