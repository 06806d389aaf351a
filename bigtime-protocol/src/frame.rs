//! Frame encoding and decoding
//!
//! Frame format:
//! - START (1 byte): 0xA5 synchronization byte
//! - LENGTH (1 byte): payload length (0-32)
//! - TYPE (1 byte): message type identifier
//! - PAYLOAD (0-32 bytes): type-specific data
//! - CHECKSUM (1 byte): XOR of LENGTH, TYPE, and all PAYLOAD bytes

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_START: u8 = 0xA5;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_SIZE: usize = 32;

/// Bytes around the payload (START, LENGTH, TYPE, CHECKSUM)
const FRAME_OVERHEAD: usize = 4;

/// Maximum complete frame size
pub const MAX_FRAME_SIZE: usize = MAX_PAYLOAD_SIZE + FRAME_OVERHEAD;

/// Errors that can occur during frame parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds maximum allowed size
    PayloadTooLarge,
    /// Checksum mismatch
    InvalidChecksum,
    /// Invalid frame structure or payload contents
    InvalidFrame,
    /// Buffer too small for encoding
    BufferTooSmall,
    /// Message type not known to this side of the link
    UnknownMessage(u8),
}

/// A parsed or constructed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Message type identifier
    pub msg_type: u8,
    /// Payload data
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Frame {
    /// Create a new frame with the given message type and payload
    pub fn new(msg_type: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let payload = Vec::from_slice(payload).map_err(|_| FrameError::PayloadTooLarge)?;
        Ok(Self { msg_type, payload })
    }

    /// Create a frame with no payload
    pub fn empty(msg_type: u8) -> Self {
        Self {
            msg_type,
            payload: Vec::new(),
        }
    }

    fn checksum(length: u8, msg_type: u8, payload: &[u8]) -> u8 {
        payload.iter().fold(length ^ msg_type, |acc, &b| acc ^ b)
    }

    /// Size of the encoded frame in bytes
    pub fn encoded_len(&self) -> usize {
        self.payload.len() + FRAME_OVERHEAD
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = self.encoded_len();
        let out = buffer
            .get_mut(..frame_len)
            .ok_or(FrameError::BufferTooSmall)?;

        let length = self.payload.len() as u8;
        let (header, rest) = out.split_at_mut(3);
        header.copy_from_slice(&[FRAME_START, length, self.msg_type]);
        let (body, tail) = rest.split_at_mut(self.payload.len());
        body.copy_from_slice(&self.payload);
        tail[0] = Self::checksum(length, self.msg_type, &self.payload);

        Ok(frame_len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        Vec::from_slice(&buffer[..len]).map_err(|_| FrameError::BufferTooSmall)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Waiting for START byte
    Start,
    /// Got START, waiting for LENGTH
    Length,
    /// Got LENGTH, waiting for TYPE
    Type,
    /// Reading payload bytes
    Payload,
    /// Waiting for CHECKSUM
    Checksum,
}

/// Byte-at-a-time frame parser
///
/// Bytes before a START are dropped, so the parser resynchronizes on its
/// own after line noise or a corrupted frame.
#[derive(Debug, Clone)]
pub struct FrameParser {
    state: ParseState,
    buffer: Vec<u8, MAX_PAYLOAD_SIZE>,
    expected_length: u8,
    msg_type: u8,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    pub const fn new() -> Self {
        Self {
            state: ParseState::Start,
            buffer: Vec::new(),
            expected_length: 0,
            msg_type: 0,
        }
    }

    /// Drop any partial frame
    pub fn reset(&mut self) {
        self.state = ParseState::Start;
        self.buffer.clear();
        self.expected_length = 0;
        self.msg_type = 0;
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(frame))` when a complete valid frame is parsed,
    /// `Ok(None)` when more bytes are needed, or `Err` on parse error.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.state {
            ParseState::Start => {
                if byte == FRAME_START {
                    self.state = ParseState::Length;
                }
            }
            ParseState::Length => {
                if byte as usize > MAX_PAYLOAD_SIZE {
                    self.reset();
                    return Err(FrameError::InvalidFrame);
                }
                self.expected_length = byte;
                self.state = ParseState::Type;
            }
            ParseState::Type => {
                self.msg_type = byte;
                self.buffer.clear();
                self.state = if self.expected_length == 0 {
                    ParseState::Checksum
                } else {
                    ParseState::Payload
                };
            }
            ParseState::Payload => {
                // Cannot overflow: expected_length <= MAX_PAYLOAD_SIZE
                let _ = self.buffer.push(byte);
                if self.buffer.len() == self.expected_length as usize {
                    self.state = ParseState::Checksum;
                }
            }
            ParseState::Checksum => {
                let expected = Frame::checksum(self.expected_length, self.msg_type, &self.buffer);
                let frame = Frame {
                    msg_type: self.msg_type,
                    payload: self.buffer.clone(),
                };
                self.reset();

                if byte != expected {
                    return Err(FrameError::InvalidChecksum);
                }
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse_all(parser: &mut FrameParser, bytes: &[u8]) -> Result<Option<Frame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = parser.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }

    #[test]
    fn test_encode_empty_payload() {
        let frame = Frame::empty(0x20);
        let mut buffer = [0u8; 8];
        let len = frame.encode(&mut buffer).unwrap();

        assert_eq!(len, 4);
        assert_eq!(&buffer[..4], &[FRAME_START, 0, 0x20, 0x20]);
    }

    #[test]
    fn test_encode_with_payload() {
        let frame = Frame::new(0x21, &[3, 0, 7]).unwrap();
        let mut buffer = [0u8; 16];
        let len = frame.encode(&mut buffer).unwrap();

        assert_eq!(len, 7);
        assert_eq!(&buffer[..6], &[FRAME_START, 3, 0x21, 3, 0, 7]);
        assert_eq!(buffer[6], 3 ^ 0x21 ^ 3 ^ 0 ^ 7);
    }

    #[test]
    fn test_encode_buffer_too_small() {
        let frame = Frame::new(0x21, &[1, 2, 3]).unwrap();
        let mut buffer = [0u8; 6];
        assert_eq!(frame.encode(&mut buffer), Err(FrameError::BufferTooSmall));
    }

    #[test]
    fn test_parse_encoded_frame() {
        let sent = Frame::new(0x25, b"MER\n05").unwrap();
        let encoded = sent.encode_to_vec().unwrap();

        let mut parser = FrameParser::new();
        assert_eq!(parse_all(&mut parser, &encoded), Ok(Some(sent)));
    }

    #[test]
    fn test_invalid_checksum() {
        let mut encoded = Frame::empty(0x02).encode_to_vec().unwrap();
        let last = encoded.len() - 1;
        encoded[last] ^= 0xFF;

        let mut parser = FrameParser::new();
        assert_eq!(parse_all(&mut parser, &encoded), Err(FrameError::InvalidChecksum));

        // Parser is ready for the next frame
        let good = Frame::empty(0x02).encode_to_vec().unwrap();
        assert!(parse_all(&mut parser, &good).unwrap().is_some());
    }

    #[test]
    fn test_resync_after_garbage() {
        let encoded = Frame::empty(0x01).encode_to_vec().unwrap();
        let mut data = Vec::<u8, 16>::new();
        data.extend_from_slice(&[0x00, 0xFF, 0x12]).unwrap();
        data.extend_from_slice(&encoded).unwrap();

        let mut parser = FrameParser::new();
        let parsed = parse_all(&mut parser, &data).unwrap().unwrap();
        assert_eq!(parsed.msg_type, 0x01);
    }

    #[test]
    fn test_oversized_length_rejected() {
        let mut parser = FrameParser::new();
        assert_eq!(parser.feed(FRAME_START), Ok(None));
        assert_eq!(
            parser.feed(MAX_PAYLOAD_SIZE as u8 + 1),
            Err(FrameError::InvalidFrame)
        );
    }

    #[test]
    fn test_payload_too_large() {
        let payload = [0u8; MAX_PAYLOAD_SIZE + 1];
        assert_eq!(Frame::new(0x21, &payload), Err(FrameError::PayloadTooLarge));
    }

    proptest! {
        #[test]
        fn prop_parser_survives_noise(noise in proptest::collection::vec(any::<u8>(), 0..128)) {
            let mut parser = FrameParser::new();
            for byte in noise {
                let _ = parser.feed(byte);
            }
            // Whatever state the noise left behind, a fresh frame after a
            // reset always parses
            parser.reset();
            let frame = Frame::new(0x23, &[7]).unwrap();
            let encoded = frame.encode_to_vec().unwrap();
            prop_assert_eq!(parse_all(&mut parser, &encoded), Ok(Some(frame)));
        }
    }
}
