//! LED tick driver
//!
//! Independent periodic driver for the pattern engine. Exposes explicit
//! start/stop through its control signal; while running it emits one
//! lossy tick per period. Which generator consumes a tick is the LED
//! worker's business, never this task's.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::Ticker;

use crate::channels::{TickControl, LED_TICK, LED_TICK_CONTROL};
use crate::config::LED_TICK_PERIOD;

/// LED tick task - periodic driver behind the pattern engine
#[embassy_executor::task]
pub async fn led_tick_task() {
    info!("LED tick task started");

    let mut ticker = Ticker::every(LED_TICK_PERIOD);
    let mut running = false;

    loop {
        if running {
            match select(LED_TICK_CONTROL.wait(), ticker.next()).await {
                Either::First(TickControl::Start) => {
                    // Already running; selection changes never reset the
                    // driver cadence.
                }
                Either::First(TickControl::Stop) => {
                    debug!("LED tick driver stopped");
                    running = false;
                }
                Either::Second(()) => {
                    LED_TICK.signal(());
                }
            }
        } else {
            match LED_TICK_CONTROL.wait().await {
                TickControl::Start => {
                    debug!("LED tick driver started");
                    ticker.reset();
                    running = true;
                }
                TickControl::Stop => {}
            }
        }
    }
}
