//! Menu command parsing
//!
//! Single-reply token parsers for the prompting modes. A parser returns
//! `None` for anything it does not recognize - wrong length included -
//! and the worker answers with one fixed error line, state unchanged.

use crate::command::Command;

/// Root menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuChoice {
    /// "0" - enter the LED pattern demonstrator
    LedEffect,
    /// "1" - enter the RTC sub-menu
    RtcMenu,
    /// "2" - leave the console
    Exit,
}

impl MenuChoice {
    /// Parse a root menu reply; `None` if unrecognized
    pub fn parse(cmd: &Command) -> Option<Self> {
        match cmd.as_bytes() {
            b"0" => Some(MenuChoice::LedEffect),
            b"1" => Some(MenuChoice::RtcMenu),
            b"2" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// RTC sub-menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RtcChoice {
    /// "0" - sequential time entry
    ConfigureTime,
    /// "1" - sequential date entry
    ConfigureDate,
    /// "2" - enable/disable periodic reporting
    Reporting,
    /// "3" - back to the root menu
    Exit,
    /// "4" - print the current snapshot
    Debug,
}

impl RtcChoice {
    /// Parse an RTC menu reply; `None` if unrecognized
    pub fn parse(cmd: &Command) -> Option<Self> {
        match cmd.as_bytes() {
            b"0" => Some(RtcChoice::ConfigureTime),
            b"1" => Some(RtcChoice::ConfigureDate),
            b"2" => Some(RtcChoice::Reporting),
            b"3" => Some(RtcChoice::Exit),
            b"4" => Some(RtcChoice::Debug),
            _ => None,
        }
    }
}

/// Reporting toggle reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportChoice {
    /// "y"/"Y" - start the periodic reporter
    Enable,
    /// "n"/"N" - stop it
    Disable,
}

impl ReportChoice {
    /// Parse a y/n reply; `None` if unrecognized
    pub fn parse(cmd: &Command) -> Option<Self> {
        match cmd.as_bytes() {
            b"y" | b"Y" => Some(ReportChoice::Enable),
            b"n" | b"N" => Some(ReportChoice::Disable),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(line: &[u8]) -> Command {
        let mut data = line.to_vec();
        data.push(b'\n');
        Command::extract(&mut data.iter().copied()).unwrap()
    }

    #[test]
    fn test_menu_choices() {
        assert_eq!(MenuChoice::parse(&cmd(b"0")), Some(MenuChoice::LedEffect));
        assert_eq!(MenuChoice::parse(&cmd(b"1")), Some(MenuChoice::RtcMenu));
        assert_eq!(MenuChoice::parse(&cmd(b"2")), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_menu_rejects_wrong_length_and_unknown() {
        assert_eq!(MenuChoice::parse(&cmd(b"")), None);
        assert_eq!(MenuChoice::parse(&cmd(b"3")), None);
        assert_eq!(MenuChoice::parse(&cmd(b"01")), None);
        assert_eq!(MenuChoice::parse(&cmd(b"exit")), None);
    }

    #[test]
    fn test_rtc_choices() {
        assert_eq!(RtcChoice::parse(&cmd(b"0")), Some(RtcChoice::ConfigureTime));
        assert_eq!(RtcChoice::parse(&cmd(b"1")), Some(RtcChoice::ConfigureDate));
        assert_eq!(RtcChoice::parse(&cmd(b"2")), Some(RtcChoice::Reporting));
        assert_eq!(RtcChoice::parse(&cmd(b"3")), Some(RtcChoice::Exit));
        assert_eq!(RtcChoice::parse(&cmd(b"4")), Some(RtcChoice::Debug));
        assert_eq!(RtcChoice::parse(&cmd(b"5")), None);
        assert_eq!(RtcChoice::parse(&cmd(b"44")), None);
    }

    #[test]
    fn test_report_choice_case() {
        assert_eq!(ReportChoice::parse(&cmd(b"y")), Some(ReportChoice::Enable));
        assert_eq!(ReportChoice::parse(&cmd(b"Y")), Some(ReportChoice::Enable));
        assert_eq!(ReportChoice::parse(&cmd(b"n")), Some(ReportChoice::Disable));
        assert_eq!(ReportChoice::parse(&cmd(b"N")), Some(ReportChoice::Disable));
        assert_eq!(ReportChoice::parse(&cmd(b"yes")), None);
        assert_eq!(ReportChoice::parse(&cmd(b"x")), None);
    }
}
