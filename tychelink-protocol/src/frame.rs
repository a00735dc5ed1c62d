//! Frame encoding and decoding for display update messages.
//!
//! Frame format (7 bytes, fixed):
//! - HEADER (1 byte): 0xFE synchronization byte
//! - RESERVED (1 byte): 0x02, constant in all captured traffic
//! - COMMAND (1 byte): update kind identifier
//! - CHECK (1 byte): duplicate of VALUE (not a real checksum)
//! - FLAG (1 byte): 0x01, constant
//! - VALUE (1 byte): the update payload
//! - TRAILER (1 byte): second duplicate of VALUE
//!
//! The display's original sender transmitted a 7th byte of undefined
//! content past its 6-byte buffer. The trailer here is pinned to VALUE so
//! the length stays wire compatible with defined contents. Decoding ignores
//! the trailer for the same reason.

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_HEADER: u8 = 0xFE;

/// Reserved byte following the header
pub const FRAME_RESERVED: u8 = 0x02;

/// Constant flag byte preceding the value
pub const FRAME_FLAG: u8 = 0x01;

/// Complete frame size in bytes
pub const FRAME_LEN: usize = 7;

/// Errors that can occur during frame encoding or decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Buffer too small for encoding
    BufferTooSmall,
    /// Fewer than [`FRAME_LEN`] bytes available
    Truncated,
    /// HEADER or RESERVED byte mismatch
    BadHeader,
    /// COMMAND byte does not name a known update kind
    UnknownCommand,
    /// CHECK byte does not duplicate VALUE
    CheckMismatch,
}

/// A complete, immutable update frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UpdateFrame {
    bytes: [u8; FRAME_LEN],
}

impl UpdateFrame {
    /// Build a frame from a command byte and payload value
    pub(crate) fn build(command: u8, value: u8) -> Self {
        Self {
            bytes: [
                FRAME_HEADER,
                FRAME_RESERVED,
                command,
                value, // CHECK duplicates VALUE
                FRAME_FLAG,
                value,
                value, // defined TRAILER, see module docs
            ],
        }
    }

    /// Command byte of this frame
    pub fn command(&self) -> u8 {
        self.bytes[2]
    }

    /// Payload value of this frame
    pub fn value(&self) -> u8 {
        self.bytes[5]
    }

    /// The complete wire bytes
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.bytes
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        if buffer.len() < FRAME_LEN {
            return Err(FrameError::BufferTooSmall);
        }
        buffer[..FRAME_LEN].copy_from_slice(&self.bytes);
        Ok(FRAME_LEN)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Vec<u8, FRAME_LEN> {
        let mut vec = Vec::new();
        // Capacity equals FRAME_LEN, extend cannot fail
        let _ = vec.extend_from_slice(&self.bytes);
        vec
    }

    /// Validate and reconstruct a frame from raw bytes
    ///
    /// Accepts trailing bytes beyond [`FRAME_LEN`]; the trailer byte's
    /// content is not checked (legacy senders emitted garbage there).
    pub fn parse(bytes: &[u8]) -> Result<Self, FrameError> {
        if bytes.len() < FRAME_LEN {
            return Err(FrameError::Truncated);
        }
        if bytes[0] != FRAME_HEADER || bytes[1] != FRAME_RESERVED {
            return Err(FrameError::BadHeader);
        }
        if bytes[3] != bytes[5] {
            return Err(FrameError::CheckMismatch);
        }
        Ok(Self::build(bytes[2], bytes[5]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout() {
        let frame = UpdateFrame::build(0x03, 7);
        assert_eq!(frame.as_bytes(), &[0xFE, 0x02, 0x03, 7, 0x01, 7, 7]);
        assert_eq!(frame.command(), 0x03);
        assert_eq!(frame.value(), 7);
    }

    #[test]
    fn test_encode_into_buffer() {
        let frame = UpdateFrame::build(0x04, 100);
        let mut buffer = [0u8; 16];
        let len = frame.encode(&mut buffer).unwrap();

        assert_eq!(len, FRAME_LEN);
        assert_eq!(&buffer[..len], frame.as_bytes());
    }

    #[test]
    fn test_encode_buffer_too_small() {
        let frame = UpdateFrame::build(0x02, 1);
        let mut buffer = [0u8; FRAME_LEN - 1];
        assert_eq!(frame.encode(&mut buffer), Err(FrameError::BufferTooSmall));
    }

    #[test]
    fn test_encode_to_vec_matches_bytes() {
        let frame = UpdateFrame::build(0x03, 2);
        assert_eq!(frame.encode_to_vec().as_slice(), frame.as_bytes());
    }

    #[test]
    fn test_parse_rejects_bad_header() {
        let bytes = [0xAA, 0x02, 0x03, 0, 0x01, 0, 0];
        assert_eq!(UpdateFrame::parse(&bytes), Err(FrameError::BadHeader));
    }

    #[test]
    fn test_parse_rejects_check_mismatch() {
        let bytes = [0xFE, 0x02, 0x03, 1, 0x01, 2, 2];
        assert_eq!(UpdateFrame::parse(&bytes), Err(FrameError::CheckMismatch));
    }

    #[test]
    fn test_parse_truncated() {
        let bytes = [0xFE, 0x02, 0x03];
        assert_eq!(UpdateFrame::parse(&bytes), Err(FrameError::Truncated));
    }

    #[test]
    fn test_parse_ignores_trailer_content() {
        // Legacy senders emitted an undefined trailer byte
        let bytes = [0xFE, 0x02, 0x03, 5, 0x01, 5, 0xC9];
        let frame = UpdateFrame::parse(&bytes).unwrap();
        assert_eq!(frame.value(), 5);
    }
}
