//! Display UART transmit task
//!
//! Frames queued glyph commands and heartbeat responses for the renderer.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use bigtime_protocol::{WatchMessage, MAX_FRAME_SIZE};

use crate::channels::{COMMAND_CHANNEL, HEARTBEAT_RECEIVED};

/// Display TX task - sends frames to the renderer
#[embassy_executor::task]
pub async fn display_tx_task(mut tx: BufferedUartTx) {
    info!("Display TX task started");

    loop {
        let msg = match select(COMMAND_CHANNEL.receive(), HEARTBEAT_RECEIVED.wait()).await {
            Either::First(msg) => msg,
            Either::Second(()) => WatchMessage::Pong,
        };

        send_message(&mut tx, &msg).await;
    }
}

/// Encode one message and write it out
async fn send_message(tx: &mut BufferedUartTx, msg: &WatchMessage) {
    let frame = match msg.to_frame() {
        Ok(frame) => frame,
        Err(e) => {
            warn!("Failed to build frame: {:?}", e);
            return;
        }
    };

    let mut buf = [0u8; MAX_FRAME_SIZE];
    match frame.encode(&mut buf) {
        Ok(len) => {
            if let Err(e) = tx.write_all(&buf[..len]).await {
                warn!("UART write error: {:?}", e);
            } else {
                trace!("TX frame type {=u8:#x}, {} bytes", frame.msg_type, len);
            }
        }
        Err(e) => {
            warn!("Failed to encode frame: {:?}", e);
        }
    }
}
