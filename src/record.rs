// src/record.rs

use arrayvec::ArrayString;
use core::fmt;

/// Capacity of the readout string. The longest possible contents are the
/// literal `"continuous"` (10 bytes) and a signed numeric readout of four
/// digits with up to three decimal points (8 bytes).
pub const READOUT_CAPACITY: usize = 12;

/// The assembled display readout. Bounded and stack-allocated so records
/// can be built and passed around without an allocator.
pub type Readout = ArrayString<READOUT_CAPACITY>;

/// Measured quantity, as indicated by the display's unit annunciators.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Units {
    Amps,
    Volts,
    Ohms,
    Fahrenheit,
    Celsius,
    /// Non-contact AC voltage detection.
    Ncv,
}

/// SI scale prefix modifying the displayed value. At most one is active;
/// when the device asserts several prefix bits at once the last one in
/// protocol evaluation order wins.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Magnitude {
    Milli,
    Kilo,
    Mega,
    Micro,
}

/// AC/DC annunciator for voltage and current readings.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AcDc {
    Ac,
    Dc,
}

/// Functional mode selected on the meter (dial position plus mode button).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Setting {
    Amperage,
    Voltage,
    Temperature,
    Resistance,
    NonContactAcVoltage,
    Continuity,
    DiodeCheck,
}

/// Device health flag.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Status {
    LowBattery,
}

/// One decoded measurement, produced fresh per frame.
///
/// No field carries state between frames; decoding the same frame twice
/// yields identical records. `setting`, `units` and `magnitude` reflect the
/// protocol's last-writer-wins evaluation order, since the device can
/// assert several of their source bits simultaneously.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRecord {
    /// Numeric readout as displayed, possibly with a decimal point and a
    /// leading `-`, or the literal `"continuous"` in continuity mode.
    pub value: Readout,
    /// DC negative-sign annunciator bit.
    pub negative_polarity: bool,
    pub units: Option<Units>,
    pub magnitude: Option<Magnitude>,
    pub ac_dc: Option<AcDc>,
    pub setting: Option<Setting>,
    /// Display hold engaged.
    pub hold: bool,
    /// Autoranging engaged.
    pub auto_range: bool,
    /// Non-contact voltage beep; only meaningful when `setting` is
    /// [`Setting::NonContactAcVoltage`].
    pub ncv: bool,
    pub status: Option<Status>,
}

impl MeasurementRecord {
    /// An empty record: blank value, all annunciators off. This is the
    /// starting point of every decode, never a value shared across calls.
    pub(crate) fn empty() -> Self {
        MeasurementRecord {
            value: Readout::new(),
            negative_polarity: false,
            units: None,
            magnitude: None,
            ac_dc: None,
            setting: None,
            hold: false,
            auto_range: false,
            ncv: false,
            status: None,
        }
    }
}

// --- Display labels, matching the annunciators on the meter itself ---

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Units::Amps => "amps",
            Units::Volts => "volts",
            Units::Ohms => "ohms",
            Units::Fahrenheit => "degrees Fahrenheit",
            Units::Celsius => "degrees Celsius",
            Units::Ncv => "NCV",
        };
        write!(f, "{}", label)
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Magnitude::Milli => "milli",
            Magnitude::Kilo => "kilo",
            Magnitude::Mega => "mega",
            Magnitude::Micro => "micro",
        };
        write!(f, "{}", label)
    }
}

impl fmt::Display for AcDc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if matches!(self, AcDc::Ac) { "AC" } else { "DC" })
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Setting::Amperage => "Amperage",
            Setting::Voltage => "Voltage",
            Setting::Temperature => "Temperature",
            Setting::Resistance => "Resistance",
            Setting::NonContactAcVoltage => "Non-Contact AC Voltage Check",
            Setting::Continuity => "Continuity",
            Setting::DiodeCheck => "Diode Check",
        };
        write!(f, "{}", label)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "low battery")
    }
}
