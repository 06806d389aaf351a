//! Board-agnostic display model for the BigTime watch face
//!
//! This crate contains all watch face logic that does not depend on
//! a specific host runtime:
//!
//! - Glyph identifiers (digits, battery levels, link state)
//! - Slot state and decimal decomposition
//! - Hour normalization, battery and connection icon selection
//! - Date text cache with locale tables
//! - Screen layout tables and configuration types
//! - Host-facing traits (event handlers, status queries, glyph output)
//!
//! The host owns rendering, bitmap decoding and the event loop. It feeds
//! readings into [`WatchFace`] and receives glyph selections through a
//! [`GlyphSink`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod battery;
pub mod clock;
pub mod config;
pub mod connection;
pub mod date;
pub mod events;
pub mod face;
pub mod glyph;
pub mod slots;
pub mod traits;

pub use events::WatchEvent;
pub use face::WatchFace;
pub use traits::{GlyphSink, HostStatus, WatchHandler};
