//! LED pattern worker
//!
//! Owns the LED bank and the pattern engine. Commands select one of the
//! four generators or leave; ticks from the shared driver advance
//! whichever generator is selected. The driver starts lazily on the
//! first selection and keeps running until "exit".

use defmt::*;
use embassy_futures::select::{select, Either};

use tessera_core::led::{LedCommand, PatternEngine};
use tessera_core::mode::AppMode;
use tessera_core::traits::LedBank;

use crate::board::BoardLeds;
use crate::channels::{
    set_mode, ConsoleMessage, TickControl, LED_SIGNAL, LED_TICK, LED_TICK_CONTROL, MENU_SIGNAL,
    PRINT_QUEUE,
};

const LED_BANNER: &str = "=====================\n\
                          |\tLEDs\t\t|\n\
                          =====================\n\
                          Options: exit, e1, e2, e3, e4\n\
                          Enter your choice here: ";

/// Fixed reply for anything the LED worker does not recognize
const LED_INVALID: &str = "error (leds_effect): invalid input command\n";

/// LED task - owns focus in LedEffect mode
#[embassy_executor::task]
pub async fn led_task(mut leds: BoardLeds) {
    info!("LED task started");

    let mut engine = PatternEngine::new();

    loop {
        // Wait for the menu to hand over focus. The wake's value is
        // ignored: a command racing the handoff may overwrite it, and
        // the overwrite rule says that command is simply lost.
        let _ = LED_SIGNAL.wait().await;

        // Entry always starts dark with no generator selected.
        engine.clear();
        leds.all_off();

        'session: loop {
            PRINT_QUEUE.send(ConsoleMessage::Static(LED_BANNER)).await;

            // Ticks keep arriving while we wait for the next command.
            let cmd = loop {
                match select(LED_SIGNAL.wait(), LED_TICK.wait()).await {
                    Either::First(Some(cmd)) => break cmd,
                    Either::First(None) => {
                        trace!("Ignoring bare wake in LED session");
                    }
                    Either::Second(()) => {
                        let frame = engine.step();
                        leds.write(frame);
                    }
                }
            };

            match LedCommand::parse(&cmd) {
                Some(LedCommand::Select(effect)) => {
                    debug!("Selecting {:?}", effect);
                    leds.all_off();
                    engine.select(effect);
                    // Lazy start; a repeated start is a no-op for the
                    // driver and never resets its cadence.
                    LED_TICK_CONTROL.signal(TickControl::Start);
                }
                Some(LedCommand::Exit) => {
                    LED_TICK_CONTROL.signal(TickControl::Stop);
                    engine.clear();
                    leds.all_off();

                    set_mode(AppMode::MainMenu);
                    MENU_SIGNAL.signal(None);
                    break 'session;
                }
                None => {
                    // Best effort: an error line must not stall the worker.
                    let _ = PRINT_QUEUE.try_send(ConsoleMessage::Static(LED_INVALID));
                }
            }
        }
    }
}
