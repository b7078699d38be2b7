// src/lib.rs

//! Decoder for the binary telemetry protocol of the TS-04 BLE multimeter.
//!
//! The meter notifies a fixed 9-byte frame on its reading characteristic
//! (see [`gatt`] for the service/characteristic UUIDs). [`decode_frame`]
//! turns one such frame into a [`MeasurementRecord`]: the numeric readout as
//! shown on the meter's seven-segment display, plus units, magnitude prefix,
//! mode flags, and device status.
//!
//! Decoding is pure and stateless. The BLE transport (discovery,
//! subscription, notification delivery) and any presentation of the record
//! are the caller's concern; this crate only maps bytes to meaning.

#![no_std] // Specify no_std at the crate root

pub mod decode;
pub mod digit;
pub mod error;
pub mod frame;
pub mod gatt;
pub mod record;

// Re-export key types for convenience
pub use decode::decode_frame;
pub use digit::{decode_digit, segment_key};
pub use error::FrameError;
pub use frame::{Frame, FRAME_LEN};
pub use record::{AcDc, Magnitude, MeasurementRecord, Readout, Setting, Status, Units};
