//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy
//! tasks, plus the shared application-mode token.
//!
//! Worker command delivery uses `Signal`: a single-slot channel where a
//! send while a previous value is unread overwrites it and the prior
//! value is lost. The console protocol depends on exactly this
//! semantic - do not replace a worker signal with a queue.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicU8, Ordering};

use tessera_core::clock::SnapshotText;
use tessera_core::command::Command;
use tessera_core::mode::AppMode;

/// Channel capacity for raw console bytes awaiting framing
const CONSOLE_BYTES_SIZE: usize = 64;

/// Channel capacity for outbound console text
const PRINT_QUEUE_SIZE: usize = 8;

/// Raw console bytes from the UART, drained by the router
pub static CONSOLE_BYTES: Channel<CriticalSectionRawMutex, u8, CONSOLE_BYTES_SIZE> = Channel::new();

/// Raised by the RX task whenever a line terminator arrives
pub static LINE_READY: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Command signal for the root menu worker; `None` is a bare focus wake
pub static MENU_SIGNAL: Signal<CriticalSectionRawMutex, Option<Command>> = Signal::new();

/// Command signal for the LED pattern worker
pub static LED_SIGNAL: Signal<CriticalSectionRawMutex, Option<Command>> = Signal::new();

/// Command signal for the RTC worker
pub static RTC_SIGNAL: Signal<CriticalSectionRawMutex, Option<Command>> = Signal::new();

/// Outbound console text, drained in FIFO order by the print task
pub static PRINT_QUEUE: Channel<CriticalSectionRawMutex, ConsoleMessage, PRINT_QUEUE_SIZE> =
    Channel::new();

/// Start/stop control for the LED tick driver
pub static LED_TICK_CONTROL: Signal<CriticalSectionRawMutex, TickControl> = Signal::new();

/// One LED tick; lossy, a missed tick coalesces with the next
pub static LED_TICK: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Start/stop control for the periodic reporter
pub static REPORT_CONTROL: Signal<CriticalSectionRawMutex, TickControl> = Signal::new();

/// Control value for the independently schedulable periodic drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum TickControl {
    Start,
    Stop,
}

/// One outbound console text fragment
///
/// Banners, prompts, and error lines are static; snapshots are owned so
/// no two in-flight messages ever share a buffer.
pub enum ConsoleMessage {
    Static(&'static str),
    Owned(SnapshotText),
}

impl ConsoleMessage {
    pub fn as_str(&self) -> &str {
        match self {
            ConsoleMessage::Static(text) => text,
            ConsoleMessage::Owned(text) => text.as_str(),
        }
    }
}

impl From<&'static str> for ConsoleMessage {
    fn from(text: &'static str) -> Self {
        ConsoleMessage::Static(text)
    }
}

impl From<SnapshotText> for ConsoleMessage {
    fn from(text: SnapshotText) -> Self {
        ConsoleMessage::Owned(text)
    }
}

/// The application mode token
///
/// No lock protects it: only the worker holding focus writes it, and
/// only at the instant it hands focus to another worker. The router
/// reads it before every dispatch.
static APP_MODE: AtomicU8 = AtomicU8::new(AppMode::MainMenu.encode());

/// Read the current application mode
pub fn current_mode() -> AppMode {
    // Only encode() values are ever stored, so decode cannot fail.
    defmt::unwrap!(AppMode::decode(APP_MODE.load(Ordering::Relaxed)))
}

/// Move the mode token; called only at focus-handoff points
pub fn set_mode(mode: AppMode) {
    APP_MODE.store(mode.encode(), Ordering::Relaxed);
}
