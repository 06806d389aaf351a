//! Renderer link protocol
//!
//! This crate defines the UART protocol between the watch controller and
//! the renderer that owns the screen, glyph bitmaps and fonts. The
//! controller only says which glyph goes where; the renderer draws.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH │ TYPE │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B     │ 1B   │ 0–32B       │ 1B       │
//! └───────┴────────┴──────┴─────────────┴──────────┘
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod frame;
pub mod messages;

pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE};
pub use messages::{RendererMessage, StatusText, WatchMessage, MAX_STATUS_LEN};
