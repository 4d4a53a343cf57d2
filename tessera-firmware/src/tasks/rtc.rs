//! RTC worker
//!
//! Sub-state machines for sequential time entry, sequential date entry,
//! the reporting toggle, and the snapshot print. Every entry sequence is
//! all-or-nothing: the first invalid field aborts it and the calendar is
//! left exactly as it was.

use defmt::*;

use tessera_core::clock::{
    format_snapshot, DateEntry, EntryOutcome, TimeEntry, SNAPSHOT_HEADER,
};
use tessera_core::command::Command;
use tessera_core::menu::{ReportChoice, RtcChoice};
use tessera_core::mode::AppMode;
use tessera_core::traits::Calendar;

use crate::board::CalendarHandle;
use crate::channels::{
    set_mode, ConsoleMessage, TickControl, MENU_SIGNAL, PRINT_QUEUE, REPORT_CONTROL, RTC_SIGNAL,
};

const RTC_BANNER: &str = "=====================\n\
                          |\tRTC\t\t|\n\
                          =====================\n";

const RTC_MENU: &str = "Configure time\t\t--> 0\n\
                        Configure date\t\t--> 1\n\
                        Enable reporting\t--> 2\n\
                        Exit\t\t\t--> 3\n\
                        Debug\t\t\t--> 4\n\
                        Enter your choice here: ";

const REPORT_PROMPT: &str = "Enable reporting y/n ";

/// Fixed reply for anything the RTC worker does not recognize
const RTC_INVALID: &str = "error: Invalid rtc input command\n";

/// RTC task - owns focus in every Rtc* mode
#[embassy_executor::task]
pub async fn rtc_task(calendar: CalendarHandle) {
    info!("RTC task started");

    loop {
        // Wait for the menu to hand over focus; value ignored, same
        // overwrite rule as the other workers.
        let _ = RTC_SIGNAL.wait().await;

        'session: loop {
            PRINT_QUEUE.send(ConsoleMessage::Static(RTC_BANNER)).await;
            PRINT_QUEUE.send(ConsoleMessage::Static(RTC_MENU)).await;

            let cmd = wait_command().await;
            let Some(choice) = RtcChoice::parse(&cmd) else {
                let _ = PRINT_QUEUE.try_send(ConsoleMessage::Static(RTC_INVALID));
                continue;
            };

            match choice {
                RtcChoice::ConfigureTime => {
                    set_mode(AppMode::RtcTimeConfig);
                    if configure_time(calendar).await {
                        print_snapshot(calendar).await;
                    }
                    set_mode(AppMode::RtcMenu);
                }
                RtcChoice::ConfigureDate => {
                    set_mode(AppMode::RtcDateConfig);
                    if configure_date(calendar).await {
                        print_snapshot(calendar).await;
                    }
                    set_mode(AppMode::RtcMenu);
                }
                RtcChoice::Reporting => {
                    set_mode(AppMode::RtcReport);
                    configure_reporting().await;
                    set_mode(AppMode::RtcMenu);
                }
                RtcChoice::Debug => {
                    print_snapshot(calendar).await;
                    log_raw_time(calendar).await;
                }
                RtcChoice::Exit => {
                    set_mode(AppMode::MainMenu);
                    MENU_SIGNAL.signal(None);
                    break 'session;
                }
            }
        }
    }
}

/// Wait for the next real command, ignoring bare wakes
async fn wait_command() -> Command {
    loop {
        if let Some(cmd) = RTC_SIGNAL.wait().await {
            return cmd;
        }
        trace!("Ignoring bare wake while awaiting a reply");
    }
}

/// Run the sequential time entry; true if a new time was committed
///
/// The draft accumulates 24-hour values. Only after the last field
/// validates is it converted to the display convention and committed in
/// one calendar write.
async fn configure_time(calendar: CalendarHandle) -> bool {
    let mut entry = TimeEntry::new();
    let mut prompt = TimeEntry::first_prompt();

    loop {
        PRINT_QUEUE.send(ConsoleMessage::Static(prompt)).await;
        let cmd = wait_command().await;

        match entry.feed(cmd.as_bytes()) {
            EntryOutcome::Next(next) => prompt = next,
            EntryOutcome::Complete(time) => {
                let mut cal = calendar.lock().await;
                let time = time.to_display(cal.hour_format());
                // The value passed every check; a refused commit is a
                // contract breach, not a user error.
                unwrap!(cal.set_time(time));
                debug!("Time committed");
                return true;
            }
            EntryOutcome::Rejected => {
                let _ = PRINT_QUEUE.try_send(ConsoleMessage::Static(RTC_INVALID));
                return false;
            }
        }
    }
}

/// Run the sequential date entry; true if a new date was committed
async fn configure_date(calendar: CalendarHandle) -> bool {
    let mut entry = DateEntry::new();
    let mut prompt = DateEntry::first_prompt();

    loop {
        PRINT_QUEUE.send(ConsoleMessage::Static(prompt)).await;
        let cmd = wait_command().await;

        match entry.feed(cmd.as_bytes()) {
            EntryOutcome::Next(next) => prompt = next,
            EntryOutcome::Complete(date) => {
                unwrap!(calendar.lock().await.set_date(date));
                debug!("Date committed");
                return true;
            }
            EntryOutcome::Rejected => {
                let _ = PRINT_QUEUE.try_send(ConsoleMessage::Static(RTC_INVALID));
                return false;
            }
        }
    }
}

/// Prompt y/n and start or stop the periodic reporter
async fn configure_reporting() {
    PRINT_QUEUE.send(ConsoleMessage::Static(REPORT_PROMPT)).await;
    let cmd = wait_command().await;

    match ReportChoice::parse(&cmd) {
        Some(ReportChoice::Enable) => REPORT_CONTROL.signal(TickControl::Start),
        Some(ReportChoice::Disable) => REPORT_CONTROL.signal(TickControl::Stop),
        None => {
            let _ = PRINT_QUEUE.try_send(ConsoleMessage::Static(RTC_INVALID));
        }
    }
}

/// Sample the calendar and queue the formatted snapshot
async fn print_snapshot(calendar: CalendarHandle) {
    let (snapshot, format) = {
        let mut cal = calendar.lock().await;
        (unwrap!(cal.now()), cal.hour_format())
    };

    PRINT_QUEUE
        .send(ConsoleMessage::Static(SNAPSHOT_HEADER))
        .await;
    PRINT_QUEUE
        .send(ConsoleMessage::from(format_snapshot(&snapshot, format)))
        .await;
}

/// Log the raw time fields, register readback included
async fn log_raw_time(calendar: CalendarHandle) {
    let snapshot = {
        let mut cal = calendar.lock().await;
        unwrap!(cal.now())
    };
    debug!(
        "Hours: {}, Minutes: {}, Seconds: {}",
        snapshot.time.hours, snapshot.time.minutes, snapshot.time.seconds
    );
}
