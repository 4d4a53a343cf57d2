//! Command dispatch task
//!
//! Waits for line-ready, frames one command out of the byte queue, and
//! forwards it through the single-slot signal of whichever worker the
//! current mode selects. The router never interprets command content.

use defmt::*;

use tessera_core::command::{Command, FrameError};
use tessera_core::mode::DispatchTarget;

use crate::channels::{
    current_mode, CONSOLE_BYTES, LED_SIGNAL, LINE_READY, MENU_SIGNAL, RTC_SIGNAL,
};

/// Router task - frames commands and dispatches them by mode
#[embassy_executor::task]
pub async fn router_task() {
    info!("Router task started");

    loop {
        LINE_READY.wait().await;

        // The ready signal is lossy, so drain every complete line that
        // is buffered, not just one.
        loop {
            let mut buffered = core::iter::from_fn(|| CONSOLE_BYTES.try_receive().ok());

            match Command::extract(&mut buffered) {
                Ok(cmd) => dispatch(cmd),
                Err(FrameError::Incomplete) => {
                    // No terminator among the buffered bytes; nothing is
                    // delivered and the next line starts fresh.
                    break;
                }
                Err(FrameError::Overflow) => {
                    warn!("Oversized line dropped");
                }
            }
        }
    }
}

/// Forward a framed command to the worker owning the current mode
fn dispatch(cmd: Command) {
    let mode = current_mode();
    trace!("Dispatching {} byte command in {:?}", cmd.len(), mode);

    match mode.dispatch_target() {
        DispatchTarget::Menu => MENU_SIGNAL.signal(Some(cmd)),
        DispatchTarget::Led => LED_SIGNAL.signal(Some(cmd)),
        DispatchTarget::Rtc => RTC_SIGNAL.signal(Some(cmd)),
    }
}
