//! Tessera - Serial Console Firmware
//!
//! Interactive UART console for RP2040 boards: a root menu, an LED
//! pattern demonstrator, and an RTC configuration/reporting sub-menu.
//! One worker task per sub-system; a router forwards each framed
//! command to whichever worker currently owns focus.
//!
//! Named after the Greek "tessera" meaning "four" - the four board
//! LEDs the pattern engine drives.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::rtc::Rtc;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::board::{BoardCalendar, BoardLeds};

mod board;
mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

// The calendar is shared by the RTC worker and the reporter
static CALENDAR: StaticCell<Mutex<CriticalSectionRawMutex, BoardCalendar>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tessera console starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Console UART
    let uart_config = UartConfig::default(); // 115200 baud default

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("Console UART initialized");

    // The four user LEDs, lowest vector bit first
    let leds = BoardLeds::new(
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
    );

    // On-chip RTC behind the calendar seam
    let calendar = CALENDAR.init(Mutex::new(BoardCalendar::new(Rtc::new(p.RTC))));

    // Spawn tasks; the menu worker prompts first, no kick-off needed
    spawner.spawn(tasks::print_task(tx)).unwrap();
    spawner.spawn(tasks::console_rx_task(rx)).unwrap();
    spawner.spawn(tasks::router_task()).unwrap();
    spawner.spawn(tasks::menu_task()).unwrap();
    spawner.spawn(tasks::led_task(leds)).unwrap();
    spawner.spawn(tasks::led_tick_task()).unwrap();
    spawner.spawn(tasks::rtc_task(calendar)).unwrap();
    spawner.spawn(tasks::reporter_task(calendar)).unwrap();

    info!("All tasks spawned, console running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
