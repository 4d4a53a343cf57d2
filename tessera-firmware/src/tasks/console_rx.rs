//! Console UART receive task
//!
//! Pushes raw bytes into the bounded byte queue and notifies the router
//! whenever a line terminator arrives. Framing happens on the router
//! side; this task never inspects anything but the terminator.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use tessera_core::command::TERMINATOR;

use crate::channels::{CONSOLE_BYTES, LINE_READY};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Console RX task - feeds the byte queue and raises line-ready
#[embassy_executor::task]
pub async fn console_rx_task(mut rx: BufferedUartRx) {
    info!("Console RX task started");

    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    // Bounded queue: overflow drops the byte, the line it
                    // belongs to will fail framing as an invalid command.
                    if CONSOLE_BYTES.try_send(byte).is_err() {
                        warn!("Console byte queue full, dropping byte");
                    }
                    if byte == TERMINATOR {
                        LINE_READY.signal(());
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
