//! Display UART receive task
//!
//! Receives frames from the renderer and dispatches them.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use bigtime_protocol::{FrameParser, RendererMessage};

use crate::channels::{HEARTBEAT_RECEIVED, RENDERER_READY};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Display RX task - receives and parses frames from the renderer
#[embassy_executor::task]
pub async fn display_rx_task(mut rx: BufferedUartRx) {
    info!("Display RX task started");

    let mut parser = FrameParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(frame)) => match RendererMessage::from_frame(&frame) {
                            Ok(msg) => handle_renderer_message(msg),
                            Err(e) => warn!("Failed to parse renderer message: {:?}", e),
                        },
                        Ok(None) => {}
                        Err(e) => {
                            warn!("Frame parse error: {:?}", e);
                        }
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

fn handle_renderer_message(msg: RendererMessage) {
    match msg {
        RendererMessage::Ready => {
            info!("Renderer READY received");
            RENDERER_READY.signal(());
        }
        RendererMessage::Ping => {
            trace!("PING received");
            HEARTBEAT_RECEIVED.signal(());
        }
    }
}
