//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.
//! The three workers (menu, led, rtc) own the console state machines;
//! console_rx, router, and print move bytes and text; led_tick and
//! reporter are the periodic drivers.

pub mod console_rx;
pub mod led;
pub mod led_tick;
pub mod menu;
pub mod print;
pub mod reporter;
pub mod router;
pub mod rtc;

pub use console_rx::console_rx_task;
pub use led::led_task;
pub use led_tick::led_tick_task;
pub use menu::menu_task;
pub use print::print_task;
pub use reporter::reporter_task;
pub use router::router_task;
pub use rtc::rtc_task;
