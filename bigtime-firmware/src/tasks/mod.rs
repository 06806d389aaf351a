//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod battery;
pub mod display_rx;
pub mod display_tx;
pub mod face;
pub mod link;
pub mod tick;

pub use battery::{battery_task, BatterySense};
pub use display_rx::display_rx_task;
pub use display_tx::display_tx_task;
pub use face::face_task;
pub use link::link_task;
pub use tick::{build_datetime, tick_task};
