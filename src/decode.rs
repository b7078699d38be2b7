// src/decode.rs

//! The frame-decoding algorithm.
//!
//! A frame is nine bytes. Byte 1 carries the AC/DC, autorange and polarity
//! flags plus the upper segments of the first display cell; bytes 2-5 carry
//! the four seven-segment cells (each split with the byte before it); bytes
//! 5-7 carry the unit, magnitude and mode annunciators. Several annunciator
//! bits can assert at once, and the meaning of the frame depends on the
//! evaluation order below: later checks overwrite earlier ones on the same
//! field. That order is part of the protocol contract, not a free choice.

use crate::digit::decode_digit;
use crate::error::FrameError;
use crate::frame::Frame;
use crate::record::{AcDc, Magnitude, MeasurementRecord, Readout, Setting, Status, Units};

/// Decodes one notification payload into a [`MeasurementRecord`].
///
/// The payload must be exactly [`FRAME_LEN`](crate::FRAME_LEN) bytes;
/// anything else is rejected with [`FrameError::InvalidLength`] before the
/// decode algorithm runs. Within a valid-length frame every bit pattern is
/// decodable, so this is the only error case.
pub fn decode_frame(payload: &[u8]) -> Result<MeasurementRecord, FrameError> {
    let frame = Frame::from_bytes(payload)?;
    Ok(decode(&frame))
}

/// The decode proper, total over all valid frames. Pure: a fresh record is
/// built per call and nothing is retained between frames.
pub(crate) fn decode(frame: &Frame) -> MeasurementRecord {
    let mut record = MeasurementRecord::empty();

    // Byte 1 bits 0-1: AC/DC annunciator, DC bit checked first.
    let flags = frame.byte(1);
    record.ac_dc = if flags & 0b10 != 0 {
        Some(AcDc::Dc)
    } else if flags & 0b01 != 0 {
        Some(AcDc::Ac)
    } else {
        None
    };

    // Byte 1 bit 2: autoranging.
    record.auto_range = flags & 0b100 != 0;

    // Byte 1 bit 4: negative sign annunciator.
    record.negative_polarity = flags & 0b1_0000 != 0;

    // Bytes 2-5: one display cell each, segments shared with the previous
    // byte. Bit 4 of bytes 2-4 is the decimal point trailing that cell.
    let mut readout = Readout::new();
    for x in 2..=5 {
        if let Some(glyph) = decode_digit(frame.byte(x), frame.byte(x - 1)) {
            readout.push(glyph);
        }
        if x < 5 && frame.byte(x) & 0b1_0000 != 0 {
            readout.push('.');
        }
    }

    // The sign is inverted on the wire: the readout gains a leading '-'
    // when the polarity bit is ABSENT. Observed device behavior, preserved
    // until verified against hardware.
    if !record.negative_polarity {
        record.value.push('-');
    }
    // Capacity holds: at most sign + four cells + three points.
    record.value.push_str(&readout);

    // Byte 7: unit annunciators, with bit 6 as a permanently-set marker
    // that is masked out before testing.
    let units = frame.byte(7) & !0b0100_0000;
    if units & 0b0000_0001 != 0 {
        record.units = Some(Units::Amps);
        record.setting = Some(Setting::Amperage);
    }
    if units & 0b0000_0010 != 0 {
        record.units = Some(Units::Volts);
        record.setting = Some(Setting::Voltage);
    }
    if units & 0b0001_0000 != 0 {
        record.units = Some(Units::Fahrenheit);
        record.setting = Some(Setting::Temperature);
    }
    if units & 0b0010_0000 != 0 {
        record.units = Some(Units::Celsius);
        record.setting = Some(Setting::Temperature);
    }
    if units & 0b1000_0000 != 0 {
        record.units = Some(Units::Ncv);
        record.setting = Some(Setting::NonContactAcVoltage);
    }

    // Byte 7 bit 3: low battery.
    if units & 0b0000_1000 != 0 {
        record.status = Some(Status::LowBattery);
    }

    // Byte 6 bit 5: ohms, taking final precedence over any unit byte 7
    // asserted.
    if frame.byte(6) & 0b0010_0000 != 0 {
        record.units = Some(Units::Ohms);
        record.setting = Some(Setting::Resistance);
    }

    // Magnitude prefix: milli, mega, kilo, micro in evaluation order; the
    // last asserted bit wins.
    if frame.byte(6) & 0b0000_0001 != 0 {
        record.magnitude = Some(Magnitude::Milli);
    }
    if frame.byte(6) & 0b0000_0100 != 0 {
        record.magnitude = Some(Magnitude::Mega);
    }
    if frame.byte(5) & 0b0100_0000 != 0 {
        record.magnitude = Some(Magnitude::Kilo);
    }
    if frame.byte(5) & 0b0001_0000 != 0 {
        record.magnitude = Some(Magnitude::Micro);
    }

    // Byte 6 bit 3: continuity. A display of exactly 000.0 means the
    // circuit is closed, which the record reports literally. The comparison
    // runs against the unsigned digit assembly, so it fires regardless of
    // the polarity bit.
    if frame.byte(6) & 0b0000_1000 != 0 {
        record.setting = Some(Setting::Continuity);
        if readout.as_str() == "000.0" {
            record.value.clear();
            record.value.push_str("continuous");
        }
    }

    // Byte 6 bit 7: display hold.
    record.hold = frame.byte(6) & 0b1000_0000 != 0;

    // Byte 5 bit 7: diode check, overriding continuity when both assert.
    if frame.byte(5) & 0b1000_0000 != 0 {
        record.setting = Some(Setting::DiodeCheck);
    }

    // Byte 5 bit 2: NCV beep, meaningful only while the NCV setting still
    // stands at this point in evaluation.
    if frame.byte(5) & 0b0000_0100 != 0 && record.setting == Some(Setting::NonContactAcVoltage) {
        record.ncv = true;
    }

    record
}
