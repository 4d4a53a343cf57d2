//! Periodic time/date reporter
//!
//! Independently schedulable: started and stopped only by the RTC
//! worker's reporting toggle, never by focus changes. Each firing
//! samples the calendar and formats one snapshot. The snapshot is always
//! logged; forwarding it to the console is a deployment choice.

use core::fmt::Write;

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::Ticker;

use tessera_core::clock::{format_snapshot, SnapshotText, SNAPSHOT_HEADER};
use tessera_core::traits::Calendar;

use crate::board::CalendarHandle;
use crate::channels::{ConsoleMessage, TickControl, PRINT_QUEUE, REPORT_CONTROL};
use crate::config::{REPORT_PERIOD, REPORT_TO_CONSOLE};

/// Reporter task - periodic snapshot driver
#[embassy_executor::task]
pub async fn reporter_task(calendar: CalendarHandle) {
    info!("Reporter task started");

    let mut ticker = Ticker::every(REPORT_PERIOD);
    let mut running = false;

    loop {
        if running {
            match select(REPORT_CONTROL.wait(), ticker.next()).await {
                Either::First(TickControl::Start) => {}
                Either::First(TickControl::Stop) => {
                    info!("Periodic reporting stopped");
                    running = false;
                }
                Either::Second(()) => report(calendar).await,
            }
        } else {
            match REPORT_CONTROL.wait().await {
                TickControl::Start => {
                    info!("Periodic reporting started");
                    ticker.reset();
                    running = true;
                }
                TickControl::Stop => {}
            }
        }
    }
}

/// Sample the calendar and emit one snapshot
async fn report(calendar: CalendarHandle) {
    let (snapshot, format) = {
        let mut cal = calendar.lock().await;
        (unwrap!(cal.now()), cal.hour_format())
    };

    let line = format_snapshot(&snapshot, format);
    info!("{}{}", SNAPSHOT_HEADER, line.as_str().trim_end());

    if REPORT_TO_CONSOLE {
        let mut msg = SnapshotText::new();
        let _ = write!(msg, "{}{}", SNAPSHOT_HEADER, line);

        // Best effort: reporting must never stall behind a full queue.
        if PRINT_QUEUE.try_send(ConsoleMessage::from(msg)).is_err() {
            warn!("Print queue full, snapshot dropped");
        }
    }
}
