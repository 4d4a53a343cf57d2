//! Console transmit task
//!
//! Single consumer of the print queue: drains outbound text fragments
//! to the UART in strict FIFO order. No reordering, no filtering.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::PRINT_QUEUE;

/// Print task - drains the outbound text queue to the console
#[embassy_executor::task]
pub async fn print_task(mut tx: BufferedUartTx) {
    info!("Print task started");

    loop {
        let msg = PRINT_QUEUE.receive().await;

        if let Err(e) = tx.write_all(msg.as_str().as_bytes()).await {
            warn!("UART write error: {:?}", e);
        }
    }
}
