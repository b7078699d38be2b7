// src/frame.rs

use crate::decode;
use crate::error::FrameError;
use crate::record::MeasurementRecord;
use core::convert::TryFrom;

/// Number of bytes in one notification payload from the meter.
pub const FRAME_LEN: usize = 9;

/// One validated telemetry frame: exactly [`FRAME_LEN`] bytes as delivered
/// by the meter's reading characteristic.
///
/// Construction is the only place length is checked; once a `Frame` exists,
/// decoding cannot fail. The frame carries no checksum — that is a property
/// of the wire format, not something this crate can add.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    /// Creates a `Frame` from a notification payload slice.
    ///
    /// Returns [`FrameError::InvalidLength`] for any slice that is not
    /// exactly [`FRAME_LEN`] bytes; the decode algorithm is never invoked
    /// on such input.
    pub fn from_bytes(payload: &[u8]) -> Result<Self, FrameError> {
        match <[u8; FRAME_LEN]>::try_from(payload) {
            Ok(bytes) => Ok(Frame(bytes)),
            Err(_) => Err(FrameError::InvalidLength { got: payload.len() }),
        }
    }

    /// Decodes this frame into a freshly constructed [`MeasurementRecord`].
    #[inline]
    pub fn decode(&self) -> MeasurementRecord {
        decode::decode(self)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// Byte at `index`, named to keep the decode steps readable against the
    /// protocol notes (byte 1 flags, bytes 2-5 digits, bytes 5-7 modifiers).
    #[inline]
    pub(crate) const fn byte(&self, index: usize) -> u8 {
        self.0[index]
    }
}

impl From<[u8; FRAME_LEN]> for Frame {
    fn from(bytes: [u8; FRAME_LEN]) -> Self {
        Frame(bytes)
    }
}

impl TryFrom<&[u8]> for Frame {
    type Error = FrameError;

    fn try_from(payload: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(payload)
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_nine_bytes() {
        let frame = Frame::from_bytes(&[0u8; 9]).unwrap();
        assert_eq!(frame.as_bytes(), &[0u8; 9]);
    }

    #[test]
    fn test_rejects_wrong_lengths() {
        for len in [0usize, 8, 10, 100] {
            let payload = [0u8; 100];
            assert_eq!(
                Frame::from_bytes(&payload[..len]),
                Err(FrameError::InvalidLength { got: len })
            );
        }
    }

    #[test]
    fn test_rejects_heapless_notification_buffer() {
        // A BLE stack typically hands the payload over in a bounded buffer;
        // a truncated notification must still be rejected by length.
        let mut payload: heapless::Vec<u8, 16> = heapless::Vec::new();
        payload.extend_from_slice(&[0x00, 0x02, 0x0B, 0xEB]).unwrap();
        assert_eq!(
            Frame::try_from(payload.as_slice()),
            Err(FrameError::InvalidLength { got: 4 })
        );
    }

    #[test]
    fn test_try_from_slice_matches_from_array() {
        let bytes = [1u8, 2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(Frame::try_from(&bytes[..]).unwrap(), Frame::from(bytes));
    }
}
