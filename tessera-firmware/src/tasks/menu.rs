//! Root menu worker
//!
//! Prompts with the main banner, routes the user into the LED or RTC
//! sub-systems, then suspends until focus comes back and prompts again.

use defmt::*;

use tessera_core::menu::MenuChoice;
use tessera_core::mode::AppMode;

use crate::channels::{set_mode, ConsoleMessage, LED_SIGNAL, MENU_SIGNAL, PRINT_QUEUE, RTC_SIGNAL};

const MENU_BANNER: &str = "\n=====================\n\
                           |\tMENU\t\t|\n\
                           =====================\n\
                           LED effect\t--> 0\n\
                           Date and time\t--> 1\n\
                           Exit\t\t--> 2\n\
                           Enter your choice here: ";

/// Fixed reply for anything the root menu does not recognize
pub const INVALID_COMMAND: &str = "error: invalid input command\n";

/// Menu task - root worker, owns focus in MainMenu mode
#[embassy_executor::task]
pub async fn menu_task() {
    info!("Menu task started");

    loop {
        PRINT_QUEUE.send(ConsoleMessage::Static(MENU_BANNER)).await;

        // Wait for the user command
        let Some(cmd) = MENU_SIGNAL.wait().await else {
            // Bare wake: a sub-system returned focus, just re-prompt.
            continue;
        };

        match MenuChoice::parse(&cmd) {
            Some(MenuChoice::LedEffect) => {
                set_mode(AppMode::LedEffect);
                LED_SIGNAL.signal(None);
            }
            Some(MenuChoice::RtcMenu) => {
                set_mode(AppMode::RtcMenu);
                RTC_SIGNAL.signal(None);
            }
            Some(MenuChoice::Exit) => {
                // Shutdown path ends at the console; the board keeps
                // running and the next command re-opens the menu.
                info!("Exit selected, console parked");
            }
            None => {
                PRINT_QUEUE
                    .send(ConsoleMessage::Static(INVALID_COMMAND))
                    .await;
                continue;
            }
        }

        // Suspend until focus returns, then start the menu again
        let _ = MENU_SIGNAL.wait().await;
    }
}
