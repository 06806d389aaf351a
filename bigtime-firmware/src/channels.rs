//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Only the face task touches the `WatchFace`; everything else reaches it
//! through these.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicBool;

use bigtime_core::battery::BatteryReading;
use bigtime_core::clock::TimeReading;
use bigtime_core::WatchEvent;
use bigtime_protocol::WatchMessage;

/// Channel capacity for battery/link events
const EVENT_CHANNEL_SIZE: usize = 8;

/// Channel capacity for outgoing renderer commands
///
/// A startup sequence is the largest burst: six digits, two icons, the
/// first tick and the date.
pub const COMMAND_CHANNEL_SIZE: usize = 24;

/// Latest wall-clock reading (updated by tick task every second)
pub static TICK: Signal<CriticalSectionRawMutex, TimeReading> = Signal::new();

/// Battery and link changes for the face task
pub static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, WatchEvent, EVENT_CHANNEL_SIZE> =
    Channel::new();

/// Glyph commands waiting to be framed and sent to the renderer
pub static COMMAND_CHANNEL: Channel<CriticalSectionRawMutex, WatchMessage, COMMAND_CHANNEL_SIZE> =
    Channel::new();

/// Signal that the renderer booted and needs the full screen state
pub static RENDERER_READY: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Signal that a heartbeat (PING) was received from the renderer
pub static HEARTBEAT_RECEIVED: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Most recent battery reading (written by battery task, peeked every tick)
pub static BATTERY_STATE: Mutex<CriticalSectionRawMutex, Cell<BatteryReading>> =
    Mutex::new(Cell::new(BatteryReading::unplugged(0)));

/// Current BLE link state (written by link task)
pub static LINK_UP: AtomicBool = AtomicBool::new(false);
