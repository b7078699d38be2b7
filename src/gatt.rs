// src/gatt.rs

//! GATT constants for the meter's telemetry channel.
//!
//! The transport collaborator needs these to find the meter and subscribe
//! to its notifications; no BLE I/O lives in this crate.

/// 16-bit UUID of the meter's primary service.
pub const METER_SERVICE_UUID: u16 = 0xFFB0;

/// 16-bit UUID of the characteristic that notifies telemetry frames.
pub const READING_CHARACTERISTIC_UUID: u16 = 0xFFB2;
