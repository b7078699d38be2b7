// src/error.rs

use crate::frame::FRAME_LEN;

/// Errors produced while accepting a frame for decoding.
///
/// Wrong-length payloads are the only failure: within a 9-byte frame every
/// bit pattern is decodable (possibly to blank digits or no units), because
/// the wire format carries no checksum and the physical display really can
/// show partial glyphs. Malformed frames are an expected operating condition
/// (radio noise, partial reads), so they are reported as values rather than
/// panics, and the transport decides whether to drop or wait for the next
/// notification.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum FrameError {
    /// Notification payload was not exactly [`FRAME_LEN`] bytes.
    #[error("invalid frame length: expected {} bytes, got {got}", FRAME_LEN)]
    InvalidLength { got: usize },
}
