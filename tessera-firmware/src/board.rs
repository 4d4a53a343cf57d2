//! RP2040 board bindings
//!
//! The two hardware collaborators behind the core traits: the four user
//! LEDs and the on-chip RTC. Pin assignment and register access stay in
//! this module.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;

use tessera_core::clock::{Date, HourFormat, Meridiem, Snapshot, Time, Weekday};
use tessera_core::traits::{Calendar, CalendarError, LedBank};

use crate::config::HOUR_FORMAT;

/// Calendar shared between the RTC worker and the reporter
pub type CalendarHandle = &'static Mutex<CriticalSectionRawMutex, BoardCalendar>;

/// The four user LEDs, bit i of an output vector driving LED i
pub struct BoardLeds {
    leds: [Output<'static>; 4],
}

impl BoardLeds {
    pub fn new(
        led0: Output<'static>,
        led1: Output<'static>,
        led2: Output<'static>,
        led3: Output<'static>,
    ) -> Self {
        Self {
            leds: [led0, led1, led2, led3],
        }
    }
}

impl LedBank for BoardLeds {
    fn write(&mut self, bits: u8) {
        for (i, led) in self.leds.iter_mut().enumerate() {
            if bits & (1 << i) != 0 {
                led.set_high();
            } else {
                led.set_low();
            }
        }
    }
}

/// The on-chip RTC behind the calendar seam
///
/// The hardware stores 24-hour values; the configured display
/// convention is applied at this boundary, so the rest of the system
/// only ever sees convention-consistent times.
pub struct BoardCalendar {
    rtc: Rtc<'static, RTC>,
    hour_format: HourFormat,
}

impl BoardCalendar {
    /// Wrap the RTC and start it from the power-on default
    pub fn new(rtc: Rtc<'static, RTC>) -> Self {
        let mut calendar = Self {
            rtc,
            hour_format: HOUR_FORMAT,
        };

        // 2000-01-01 was a Saturday; the snapshot year counts from 2000.
        let default = DateTime {
            year: 2000,
            month: 1,
            day: 1,
            day_of_week: DayOfWeek::Saturday,
            hour: 0,
            minute: 0,
            second: 0,
        };
        unwrap!(calendar.rtc.set_datetime(default).map_err(|_| CalendarError::Hardware));
        info!("Calendar started from power-on default");

        calendar
    }

    /// Convert a display-converted hour back to the hardware's 24-hour form
    fn hw_hour(time: &Time) -> u8 {
        match time.meridiem {
            None => time.hours,
            Some(Meridiem::Am) => {
                if time.hours == 12 {
                    0
                } else {
                    time.hours
                }
            }
            Some(Meridiem::Pm) => {
                if time.hours == 12 {
                    12
                } else {
                    time.hours + 12
                }
            }
        }
    }

    fn hw_weekday(weekday: Weekday) -> DayOfWeek {
        match weekday {
            Weekday::Monday => DayOfWeek::Monday,
            Weekday::Tuesday => DayOfWeek::Tuesday,
            Weekday::Wednesday => DayOfWeek::Wednesday,
            Weekday::Thursday => DayOfWeek::Thursday,
            Weekday::Friday => DayOfWeek::Friday,
            Weekday::Saturday => DayOfWeek::Saturday,
            Weekday::Sunday => DayOfWeek::Sunday,
        }
    }

    fn from_hw_weekday(day: DayOfWeek) -> Weekday {
        match day {
            DayOfWeek::Monday => Weekday::Monday,
            DayOfWeek::Tuesday => Weekday::Tuesday,
            DayOfWeek::Wednesday => Weekday::Wednesday,
            DayOfWeek::Thursday => Weekday::Thursday,
            DayOfWeek::Friday => Weekday::Friday,
            DayOfWeek::Saturday => Weekday::Saturday,
            DayOfWeek::Sunday => Weekday::Sunday,
        }
    }

    fn read_hw(&mut self) -> Result<DateTime, CalendarError> {
        self.rtc.now().map_err(|_| CalendarError::NotRunning)
    }
}

impl Calendar for BoardCalendar {
    fn hour_format(&self) -> HourFormat {
        self.hour_format
    }

    fn now(&mut self) -> Result<Snapshot, CalendarError> {
        let dt = self.read_hw()?;

        let time = Time::new(dt.hour, dt.minute, dt.second).to_display(self.hour_format);
        let date = Date::new(
            dt.day,
            dt.month,
            dt.year.saturating_sub(2000) as u8,
            Self::from_hw_weekday(dt.day_of_week),
        );

        Ok(Snapshot { time, date })
    }

    fn set_time(&mut self, time: Time) -> Result<(), CalendarError> {
        // The RTC commits a whole datetime; carry the current date over.
        let dt = self.read_hw()?;
        let new = DateTime {
            year: dt.year,
            month: dt.month,
            day: dt.day,
            day_of_week: dt.day_of_week,
            hour: Self::hw_hour(&time),
            minute: time.minutes,
            second: time.seconds,
        };
        self.rtc
            .set_datetime(new)
            .map_err(|_| CalendarError::Hardware)
    }

    fn set_date(&mut self, date: Date) -> Result<(), CalendarError> {
        let dt = self.read_hw()?;
        let new = DateTime {
            year: 2000 + date.year as u16,
            month: date.month,
            day: date.day,
            day_of_week: Self::hw_weekday(date.weekday),
            hour: dt.hour,
            minute: dt.minute,
            second: dt.second,
        };
        self.rtc
            .set_datetime(new)
            .map_err(|_| CalendarError::Hardware)
    }
}
