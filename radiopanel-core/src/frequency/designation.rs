//! Which radio function the frequency selector points at

use super::band::Band;
use crate::channel::Device;

/// Radio function selected on the frequency knob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrequencyDesignation {
    /// Primary navigation receiver
    Nav1,
    /// Secondary navigation receiver
    Nav2,
    /// Primary communication radio
    Com1,
    /// Secondary communication radio
    Com2,
    /// Automatic direction finder
    Adf,
    /// Transponder squawk code
    Xpdr,
    /// Reserved or out-of-range selector position
    Unassigned,
}

impl FrequencyDesignation {
    /// Every designation, in table order
    pub const ALL: [FrequencyDesignation; 7] = [
        FrequencyDesignation::Nav1,
        FrequencyDesignation::Nav2,
        FrequencyDesignation::Com1,
        FrequencyDesignation::Com2,
        FrequencyDesignation::Adf,
        FrequencyDesignation::Xpdr,
        FrequencyDesignation::Unassigned,
    ];

    /// Map a raw selector position to a designation
    ///
    /// Total over `u8`: positions 6 and 7 are reserved and anything at or
    /// above the selector's range falls back to `Unassigned` as well.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => FrequencyDesignation::Nav1,
            1 => FrequencyDesignation::Nav2,
            2 => FrequencyDesignation::Com1,
            3 => FrequencyDesignation::Com2,
            4 => FrequencyDesignation::Adf,
            5 => FrequencyDesignation::Xpdr,
            _ => FrequencyDesignation::Unassigned,
        }
    }

    /// Parse a designation from its wire format byte
    ///
    /// Shares the device code space; DME has no frequency of its own.
    pub fn from_code(code: u8) -> Option<Self> {
        match Device::from_code(code)? {
            Device::Com1 => Some(FrequencyDesignation::Com1),
            Device::Com2 => Some(FrequencyDesignation::Com2),
            Device::Nav1 => Some(FrequencyDesignation::Nav1),
            Device::Nav2 => Some(FrequencyDesignation::Nav2),
            Device::Adf => Some(FrequencyDesignation::Adf),
            Device::Xpdr => Some(FrequencyDesignation::Xpdr),
            Device::Unassigned => Some(FrequencyDesignation::Unassigned),
            Device::Dme => None,
        }
    }

    /// Device this designation tunes
    pub fn device(self) -> Device {
        match self {
            FrequencyDesignation::Nav1 => Device::Nav1,
            FrequencyDesignation::Nav2 => Device::Nav2,
            FrequencyDesignation::Com1 => Device::Com1,
            FrequencyDesignation::Com2 => Device::Com2,
            FrequencyDesignation::Adf => Device::Adf,
            FrequencyDesignation::Xpdr => Device::Xpdr,
            FrequencyDesignation::Unassigned => Device::Unassigned,
        }
    }

    /// Convert to wire format byte
    pub fn code(self) -> u8 {
        self.device().code()
    }

    /// Selector position mapping to this designation
    ///
    /// `None` for `Unassigned`, which is shared by the reserved positions.
    pub fn position(self) -> Option<u8> {
        match self {
            FrequencyDesignation::Unassigned => None,
            other => Some(other.index() as u8),
        }
    }

    /// Position in [`Self::ALL`]
    pub fn index(self) -> usize {
        match self {
            FrequencyDesignation::Nav1 => 0,
            FrequencyDesignation::Nav2 => 1,
            FrequencyDesignation::Com1 => 2,
            FrequencyDesignation::Com2 => 3,
            FrequencyDesignation::Adf => 4,
            FrequencyDesignation::Xpdr => 5,
            FrequencyDesignation::Unassigned => 6,
        }
    }

    /// Valid values for this designation's frequencies
    pub fn band(self) -> Band {
        match self {
            FrequencyDesignation::Nav1 | FrequencyDesignation::Nav2 => Band::NAV,
            FrequencyDesignation::Com1 | FrequencyDesignation::Com2 => Band::COM,
            FrequencyDesignation::Adf => Band::ADF,
            FrequencyDesignation::Xpdr => Band::Squawk,
            FrequencyDesignation::Unassigned => Band::Off,
        }
    }
}
