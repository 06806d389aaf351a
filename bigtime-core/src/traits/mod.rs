//! Host-facing traits
//!
//! These traits define the interface between the display model and the
//! runtime that hosts it. The model never talks to timers, sensors or the
//! screen directly.

pub mod handler;
pub mod host;
pub mod sink;

pub use handler::WatchHandler;
pub use host::HostStatus;
pub use sink::GlyphSink;
