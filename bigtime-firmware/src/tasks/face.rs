//! Watch face task
//!
//! Sole owner of the [`WatchFace`]. Runs the startup sequence on the first
//! tick, then handles ticks, queued events and renderer reboots one at a
//! time.

use defmt::*;
use embassy_futures::select::{select3, Either3};

use bigtime_core::config::WatchConfig;
use bigtime_core::{WatchEvent, WatchFace, WatchHandler};
use bigtime_protocol::WatchMessage;

use crate::channels::{EVENT_CHANNEL, RENDERER_READY, TICK};
use crate::display::ChannelSink;
use crate::host::FirmwareHost;

#[embassy_executor::task]
pub async fn face_task(config: WatchConfig, host: FirmwareHost) {
    info!("Face task started");

    let mut face = WatchFace::new(config);
    let mut sink = ChannelSink;

    let now = TICK.wait().await;
    face.start(&host, &now, &mut sink);
    info!("Face started at {:02}:{:02}:{:02}", now.hour, now.minute, now.second);

    loop {
        match select3(TICK.wait(), EVENT_CHANNEL.receive(), RENDERER_READY.wait()).await {
            Either3::First(time) => {
                face.handle(WatchEvent::Tick(time), &host, &mut sink);
            }
            Either3::Second(event) => {
                debug!("Event: {:?}", event);
                face.handle(event, &host, &mut sink);
            }
            Either3::Third(()) => {
                info!("Renderer ready, replaying screen");
                sink.send(WatchMessage::Clear);
                face.replay(&mut sink);
            }
        }
    }
}
