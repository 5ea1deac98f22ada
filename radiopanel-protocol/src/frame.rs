//! Frame encoding and decoding for the panel serial link.
//!
//! Frame format:
//! - START (1 byte): 0xAA synchronization byte
//! - LENGTH (1 byte): payload length (0-46)
//! - IDENTIFIER (1 byte): state module the payload belongs to
//! - PAYLOAD (0-46 bytes): module-specific data
//! - CHECKSUM (1 byte): XOR of LENGTH, IDENTIFIER, and all PAYLOAD bytes

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_START: u8 = 0xAA;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_SIZE: usize = 46;

/// Maximum complete frame size (START + LENGTH + IDENTIFIER + MAX_PAYLOAD + CHECKSUM)
pub const MAX_FRAME_SIZE: usize = 1 + 1 + 1 + MAX_PAYLOAD_SIZE + 1;

/// Errors that can occur during frame parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds maximum allowed size
    PayloadTooLarge,
    /// Checksum mismatch
    InvalidChecksum,
    /// Length byte out of range
    InvalidLength,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// A parsed or constructed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// State module identifier
    pub identifier: u8,
    /// Payload data
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Frame {
    /// Create a new frame with the given identifier and payload
    pub fn new(identifier: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let mut payload_vec = Vec::new();
        payload_vec
            .extend_from_slice(payload)
            .map_err(|_| FrameError::PayloadTooLarge)?;

        Ok(Self {
            identifier,
            payload: payload_vec,
        })
    }

    /// Number of bytes this frame occupies on the wire
    pub fn encoded_len(&self) -> usize {
        4 + self.payload.len()
    }

    fn calculate_checksum(length: u8, identifier: u8, payload: &[u8]) -> u8 {
        payload
            .iter()
            .fold(length ^ identifier, |checksum, &byte| checksum ^ byte)
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = self.encoded_len();
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        let length = self.payload.len() as u8;
        let end = 3 + self.payload.len();

        buffer[0] = FRAME_START;
        buffer[1] = length;
        buffer[2] = self.identifier;
        buffer[3..end].copy_from_slice(&self.payload);
        buffer[end] = Self::calculate_checksum(length, self.identifier, &self.payload);

        Ok(frame_len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        Vec::from_slice(&buffer[..len]).map_err(|_| FrameError::BufferTooSmall)
    }
}

/// Byte-at-a-time frame decoder
///
/// Partial frames survive between calls, so bytes may be fed in whatever
/// chunks the receive path delivers them.
#[derive(Debug, Clone)]
pub struct FrameParser {
    state: ParseState,
    payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

/// Where the parser is within a frame
///
/// The header fields ride along with the state that still needs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Idle,
    Length,
    Identifier { length: u8 },
    Payload { length: u8, identifier: u8 },
    Checksum { length: u8, identifier: u8 },
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    pub const fn new() -> Self {
        Self {
            state: ParseState::Idle,
            payload: Vec::new(),
        }
    }

    /// Drop any partial frame and wait for the next start byte
    pub fn reset(&mut self) {
        self.state = ParseState::Idle;
        self.payload.clear();
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(frame))` when a complete valid frame is parsed,
    /// `Ok(None)` when more bytes are needed, or `Err` on parse error.
    /// After an error the parser is back to waiting for a start byte.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        self.state = match self.state {
            // Line noise between frames is skipped
            ParseState::Idle if byte == FRAME_START => ParseState::Length,
            ParseState::Idle => ParseState::Idle,
            ParseState::Length if byte as usize > MAX_PAYLOAD_SIZE => {
                self.reset();
                return Err(FrameError::InvalidLength);
            }
            ParseState::Length => ParseState::Identifier { length: byte },
            ParseState::Identifier { length } => {
                self.payload.clear();
                if length == 0 {
                    ParseState::Checksum {
                        length,
                        identifier: byte,
                    }
                } else {
                    ParseState::Payload {
                        length,
                        identifier: byte,
                    }
                }
            }
            ParseState::Payload { length, identifier } => {
                // Cannot overflow: length <= MAX_PAYLOAD_SIZE
                let _ = self.payload.push(byte);
                if self.payload.len() == length as usize {
                    ParseState::Checksum { length, identifier }
                } else {
                    ParseState::Payload { length, identifier }
                }
            }
            ParseState::Checksum { length, identifier } => {
                let expected = Frame::calculate_checksum(length, identifier, &self.payload);
                let frame = Frame {
                    identifier,
                    payload: core::mem::take(&mut self.payload),
                };
                self.reset();
                if byte != expected {
                    return Err(FrameError::InvalidChecksum);
                }
                return Ok(Some(frame));
            }
        };
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed bytes until the first frame or error
    fn parse(parser: &mut FrameParser, bytes: &[u8]) -> Result<Option<Frame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = parser.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }

    #[test]
    fn test_frame_encode_empty_payload() {
        let frame = Frame::new(0x04, &[]).unwrap();
        let mut buffer = [0u8; 10];
        let len = frame.encode(&mut buffer).unwrap();

        assert_eq!(len, 4);
        assert_eq!(buffer[0], FRAME_START);
        assert_eq!(buffer[1], 0); // length
        assert_eq!(buffer[2], 0x04); // identifier
        assert_eq!(buffer[3], 0x04); // checksum (0 ^ 0x04)
    }

    #[test]
    fn test_frame_encode_with_payload() {
        let frame = Frame::new(0x04, &[0x02, 0x03]).unwrap();
        let mut buffer = [0u8; 16];
        let len = frame.encode(&mut buffer).unwrap();

        assert_eq!(len, 6);
        assert_eq!(&buffer[..6], &[FRAME_START, 2, 0x04, 0x02, 0x03, 2 ^ 0x04 ^ 0x02 ^ 0x03]);
    }

    #[test]
    fn test_encode_buffer_too_small() {
        let frame = Frame::new(0x01, &[1, 2, 3]).unwrap();
        let mut buffer = [0u8; 6];
        assert_eq!(frame.encode(&mut buffer), Err(FrameError::BufferTooSmall));
    }

    #[test]
    fn test_parser_invalid_checksum() {
        let frame = Frame::new(0x01, &[9, 9]).unwrap();
        let mut encoded = frame.encode_to_vec().unwrap();
        let last_idx = encoded.len() - 1;
        encoded[last_idx] ^= 0xFF;

        let mut parser = FrameParser::new();
        assert_eq!(parse(&mut parser, &encoded), Err(FrameError::InvalidChecksum));

        // The next frame parses cleanly
        let good = frame.encode_to_vec().unwrap();
        assert_eq!(parse(&mut parser, &good), Ok(Some(frame)));
    }

    #[test]
    fn test_parser_rejects_oversized_length() {
        let mut parser = FrameParser::new();
        assert_eq!(parser.feed(FRAME_START), Ok(None));
        assert_eq!(
            parser.feed(MAX_PAYLOAD_SIZE as u8 + 1),
            Err(FrameError::InvalidLength)
        );
        // Back to idle: payload bytes are ignored until a start byte
        assert_eq!(parser.feed(0x00), Ok(None));
        let empty = Frame::new(0x04, &[]).unwrap();
        assert_eq!(parse(&mut parser, &[FRAME_START, 0, 0x04, 0x04]), Ok(Some(empty)));
    }

    #[test]
    fn test_parser_resync_after_garbage() {
        let frame = Frame::new(0x04, &[0x01, 0x01]).unwrap();
        let encoded = frame.encode_to_vec().unwrap();

        let mut data = Vec::<u8, 20>::new();
        data.extend_from_slice(&[0x00, 0xFF, 0x12, 0x34]).unwrap();
        data.extend_from_slice(&encoded).unwrap();

        let mut parser = FrameParser::new();
        let parsed = parse(&mut parser, &data).unwrap().unwrap();

        assert_eq!(parsed, frame);
    }

    #[test]
    fn test_parser_split_across_calls() {
        let frame = Frame::new(0x01, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]).unwrap();
        let encoded = frame.encode_to_vec().unwrap();
        let (head, tail) = encoded.split_at(5);

        let mut parser = FrameParser::new();
        assert_eq!(parse(&mut parser, head), Ok(None));
        assert_eq!(parse(&mut parser, tail), Ok(Some(frame)));
    }

    #[test]
    fn test_parser_empty_payload_frame() {
        let mut parser = FrameParser::new();
        assert_eq!(parser.feed(FRAME_START), Ok(None));
        assert_eq!(parser.feed(0), Ok(None));
        assert_eq!(parser.feed(0x01), Ok(None));
        assert_eq!(parser.feed(0x01), Ok(Some(Frame::new(0x01, &[]).unwrap())));
    }

    #[test]
    fn test_reset_discards_partial_frame() {
        let frame = Frame::new(0x04, &[3, 0x04]).unwrap();
        let encoded = frame.encode_to_vec().unwrap();

        let mut parser = FrameParser::new();
        assert_eq!(parse(&mut parser, &encoded[..4]), Ok(None));
        parser.reset();
        // The tail alone holds no start byte
        assert_eq!(parse(&mut parser, &encoded[4..]), Ok(None));
        assert_eq!(parse(&mut parser, &encoded), Ok(Some(frame)));
    }

    #[test]
    fn test_payload_too_large() {
        let large_payload = [0u8; MAX_PAYLOAD_SIZE + 1];
        let result = Frame::new(0x01, &large_payload);
        assert_eq!(result, Err(FrameError::PayloadTooLarge));
    }
}
