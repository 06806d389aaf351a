//! BLE link monitoring task
//!
//! The BLE module drives its STATE pin high while a central is connected.

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_rp::gpio::Input;

use bigtime_core::WatchEvent;

use crate::channels::{EVENT_CHANNEL, LINK_UP};

/// Link task - queues a connectivity event on every STATE change
#[embassy_executor::task]
pub async fn link_task(mut state_pin: Input<'static>) {
    info!("Link task started");

    let mut connected = LINK_UP.load(Ordering::Relaxed);

    loop {
        state_pin.wait_for_any_edge().await;

        let now_connected = state_pin.is_high();
        if now_connected == connected {
            // Glitch shorter than the edge wait
            continue;
        }

        connected = now_connected;
        LINK_UP.store(connected, Ordering::Relaxed);
        info!("BLE link {}", if connected { "up" } else { "down" });

        if EVENT_CHANNEL
            .try_send(WatchEvent::Connectivity(connected))
            .is_err()
        {
            warn!("Event channel full, dropping link event");
        }
    }
}
