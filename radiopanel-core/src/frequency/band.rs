//! Frequency bands and the active/standby pair carried per designation
//!
//! Frequencies travel in kHz. The host bridge rounds simulator values to
//! the band's channel step before sending them.

use radiopanel_protocol::InvalidValue;

/// Set of values a designation may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Band {
    /// Evenly spaced channels between two inclusive limits (kHz)
    Range {
        min_khz: u32,
        max_khz: u32,
        step_khz: u32,
    },
    /// Four digit transponder code, each digit 0-7
    Squawk,
    /// Nothing to tune; only zero is accepted
    Off,
}

/// Highest squawk code
pub const MAX_SQUAWK: u32 = 7777;

/// Squawk reported before the host sets one (VFR)
pub const DEFAULT_SQUAWK: u32 = 1200;

impl Band {
    /// VOR/ILS navigation receivers, 50 kHz channels
    pub const NAV: Band = Band::Range {
        min_khz: 108_000,
        max_khz: 117_950,
        step_khz: 50,
    };

    /// VHF communication radios, 5 kHz resolution
    ///
    /// Tops out at 136.990, the last 8.33 kHz channel rounded to 5 kHz.
    pub const COM: Band = Band::Range {
        min_khz: 118_000,
        max_khz: 136_990,
        step_khz: 5,
    };

    /// Automatic direction finder, 1 kHz resolution
    pub const ADF: Band = Band::Range {
        min_khz: 190,
        max_khz: 1_799,
        step_khz: 1,
    };

    /// Check whether a value is a valid channel in this band
    pub fn contains(&self, value: u32) -> bool {
        match *self {
            Band::Range {
                min_khz,
                max_khz,
                step_khz,
            } => (min_khz..=max_khz).contains(&value) && (value - min_khz) % step_khz == 0,
            Band::Squawk => is_squawk(value),
            Band::Off => value == 0,
        }
    }

    /// True if the band has a standby value alongside the active one
    pub fn has_standby(&self) -> bool {
        matches!(self, Band::Range { .. })
    }

    /// Pair reported before the host has set anything
    pub fn default_pair(&self) -> FrequencyPair {
        match *self {
            Band::Range { min_khz, .. } => FrequencyPair::new(min_khz, min_khz),
            Band::Squawk => FrequencyPair::new(DEFAULT_SQUAWK, 0),
            Band::Off => FrequencyPair::new(0, 0),
        }
    }

    /// Validate an active/standby pair against this band
    ///
    /// Bands without a standby value require it to be zero.
    pub fn validate(&self, pair: FrequencyPair) -> Result<(), InvalidValue> {
        if !self.contains(pair.active) {
            return Err(InvalidValue::Frequency(pair.active));
        }
        let standby_ok = if self.has_standby() {
            self.contains(pair.standby)
        } else {
            pair.standby == 0
        };
        if !standby_ok {
            return Err(InvalidValue::Frequency(pair.standby));
        }
        Ok(())
    }
}

fn is_squawk(mut code: u32) -> bool {
    if code > MAX_SQUAWK {
        return false;
    }
    while code > 0 {
        if code % 10 > 7 {
            return false;
        }
        code /= 10;
    }
    true
}

/// Active and standby value of one designation
///
/// kHz for the radios, the squawk code (as its decimal digits) for the
/// transponder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrequencyPair {
    pub active: u32,
    pub standby: u32,
}

impl FrequencyPair {
    pub const fn new(active: u32, standby: u32) -> Self {
        Self { active, standby }
    }
}
