//! Message types for the renderer link
//!
//! Message types are divided into two categories:
//! - Watch → Renderer: glyph selections, status text, heartbeat responses
//! - Renderer → Watch: boot notification, heartbeat requests

use heapless::String;

use crate::frame::{Frame, FrameError};

// Message type IDs: Renderer → Watch
pub const MSG_READY: u8 = 0x01;
pub const MSG_PING: u8 = 0x02;

// Message type IDs: Watch → Renderer
pub const MSG_CLEAR: u8 = 0x20;
pub const MSG_DIGIT: u8 = 0x21;
pub const MSG_CLEAR_SLOT: u8 = 0x22;
pub const MSG_BATTERY: u8 = 0x23;
pub const MSG_CONNECTION: u8 = 0x24;
pub const MSG_STATUS: u8 = 0x25;
pub const MSG_PONG: u8 = 0x26;

/// Palette bounds the renderer is built with
pub const SLOT_COUNT: u8 = 6;
pub const GLYPH_SIZES: u8 = 2;
pub const DIGIT_GLYPHS: u8 = 10;
pub const BATTERY_GLYPHS: u8 = 12;
pub const CONNECTION_GLYPHS: u8 = 2;

/// Maximum status text length in bytes
pub const MAX_STATUS_LEN: usize = 24;

/// Status text carried by [`WatchMessage::Status`]
pub type StatusText = String<MAX_STATUS_LEN>;

/// Messages from the watch to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchMessage {
    /// Blank the whole screen
    Clear,
    /// Show a digit glyph in a slot
    Digit { slot: u8, size: u8, digit: u8 },
    /// Remove the glyph from a slot
    ClearSlot { slot: u8 },
    /// Swap the battery glyph
    Battery { icon: u8 },
    /// Swap the connection glyph
    Connection { icon: u8 },
    /// Replace the status text
    Status(StatusText),
    /// Heartbeat response
    Pong,
}

impl WatchMessage {
    /// Build a status message, truncating at a character boundary
    pub fn status(text: &str) -> Self {
        let mut end = text.len().min(MAX_STATUS_LEN);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        let mut owned = StatusText::new();
        // Cannot fail: end <= capacity
        let _ = owned.push_str(&text[..end]);
        WatchMessage::Status(owned)
    }

    /// Encode this message into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            WatchMessage::Clear => Ok(Frame::empty(MSG_CLEAR)),
            WatchMessage::Digit { slot, size, digit } => {
                Frame::new(MSG_DIGIT, &[*slot, *size, *digit])
            }
            WatchMessage::ClearSlot { slot } => Frame::new(MSG_CLEAR_SLOT, &[*slot]),
            WatchMessage::Battery { icon } => Frame::new(MSG_BATTERY, &[*icon]),
            WatchMessage::Connection { icon } => Frame::new(MSG_CONNECTION, &[*icon]),
            WatchMessage::Status(text) => Frame::new(MSG_STATUS, text.as_bytes()),
            WatchMessage::Pong => Ok(Frame::empty(MSG_PONG)),
        }
    }

    /// Parse a message from a frame (renderer side)
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        let payload = frame.payload.as_slice();
        match frame.msg_type {
            MSG_CLEAR => {
                expect_len(payload, 0)?;
                Ok(WatchMessage::Clear)
            }
            MSG_DIGIT => {
                expect_len(payload, 3)?;
                Ok(WatchMessage::Digit {
                    slot: bounded(payload[0], SLOT_COUNT)?,
                    size: bounded(payload[1], GLYPH_SIZES)?,
                    digit: bounded(payload[2], DIGIT_GLYPHS)?,
                })
            }
            MSG_CLEAR_SLOT => {
                expect_len(payload, 1)?;
                Ok(WatchMessage::ClearSlot {
                    slot: bounded(payload[0], SLOT_COUNT)?,
                })
            }
            MSG_BATTERY => {
                expect_len(payload, 1)?;
                Ok(WatchMessage::Battery {
                    icon: bounded(payload[0], BATTERY_GLYPHS)?,
                })
            }
            MSG_CONNECTION => {
                expect_len(payload, 1)?;
                Ok(WatchMessage::Connection {
                    icon: bounded(payload[0], CONNECTION_GLYPHS)?,
                })
            }
            MSG_STATUS => {
                let text = core::str::from_utf8(payload).map_err(|_| FrameError::InvalidFrame)?;
                let mut owned = StatusText::new();
                owned
                    .push_str(text)
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                Ok(WatchMessage::Status(owned))
            }
            MSG_PONG => {
                expect_len(payload, 0)?;
                Ok(WatchMessage::Pong)
            }
            other => Err(FrameError::UnknownMessage(other)),
        }
    }
}

/// Messages from the renderer to the watch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RendererMessage {
    /// Renderer (re)booted with a blank screen and needs the full state
    Ready,
    /// Heartbeat request
    Ping,
}

impl RendererMessage {
    /// Encode this message into a frame (renderer side)
    pub fn to_frame(&self) -> Frame {
        match self {
            RendererMessage::Ready => Frame::empty(MSG_READY),
            RendererMessage::Ping => Frame::empty(MSG_PING),
        }
    }

    /// Parse a message from a frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.msg_type {
            MSG_READY => Ok(RendererMessage::Ready),
            MSG_PING => Ok(RendererMessage::Ping),
            other => Err(FrameError::UnknownMessage(other)),
        }
    }
}

fn expect_len(payload: &[u8], len: usize) -> Result<(), FrameError> {
    if payload.len() == len {
        Ok(())
    } else {
        Err(FrameError::InvalidFrame)
    }
}

fn bounded(value: u8, limit: u8) -> Result<u8, FrameError> {
    if value < limit {
        Ok(value)
    } else {
        Err(FrameError::InvalidFrame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameParser;

    fn through_wire(msg: &WatchMessage) -> WatchMessage {
        let bytes = msg.to_frame().unwrap().encode_to_vec().unwrap();
        let mut parser = FrameParser::new();
        let mut parsed = None;
        for &b in bytes.iter() {
            if let Some(frame) = parser.feed(b).unwrap() {
                parsed = Some(frame);
            }
        }
        WatchMessage::from_frame(&parsed.unwrap()).unwrap()
    }

    #[test]
    fn test_digit_over_the_wire() {
        let msg = WatchMessage::Digit {
            slot: 4,
            size: 1,
            digit: 7,
        };
        assert_eq!(through_wire(&msg), msg);
    }

    #[test]
    fn test_status_over_the_wire() {
        let msg = WatchMessage::status("MER\n05\nGEN\n2024");
        assert_eq!(through_wire(&msg), msg);
    }

    #[test]
    fn test_status_truncates_on_char_boundary() {
        // 'Ì' is two bytes and straddles the 24-byte limit
        let msg = WatchMessage::status("VENERDÌ SABATO: MARTEDÌ");
        match msg {
            WatchMessage::Status(text) => {
                assert!(text.len() <= MAX_STATUS_LEN);
                assert_eq!(text.as_str(), "VENERDÌ SABATO: MARTED");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let frame = Frame::new(MSG_DIGIT, &[6, 0, 1]).unwrap();
        assert_eq!(WatchMessage::from_frame(&frame), Err(FrameError::InvalidFrame));

        let frame = Frame::new(MSG_BATTERY, &[12]).unwrap();
        assert_eq!(WatchMessage::from_frame(&frame), Err(FrameError::InvalidFrame));

        let frame = Frame::new(MSG_CONNECTION, &[0, 1]).unwrap();
        assert_eq!(WatchMessage::from_frame(&frame), Err(FrameError::InvalidFrame));
    }

    #[test]
    fn test_invalid_utf8_status_rejected() {
        let frame = Frame::new(MSG_STATUS, &[0xC3]).unwrap();
        assert_eq!(WatchMessage::from_frame(&frame), Err(FrameError::InvalidFrame));
    }

    #[test]
    fn test_renderer_messages() {
        for msg in [RendererMessage::Ready, RendererMessage::Ping] {
            assert_eq!(RendererMessage::from_frame(&msg.to_frame()), Ok(msg));
        }
        assert_eq!(
            RendererMessage::from_frame(&Frame::empty(MSG_PONG)),
            Err(FrameError::UnknownMessage(MSG_PONG))
        );
    }
}
