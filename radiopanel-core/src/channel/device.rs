//! Logical radio devices selectable on the channel knob

/// Radio device shown on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Device {
    Com1,
    Com2,
    Nav1,
    Nav2,
    /// Distance measuring equipment
    Dme,
    Adf,
    Xpdr,
    /// Reserved selector position
    Unassigned,
}

impl Device {
    /// Every device, in raw selector order
    pub const ALL: [Device; 8] = [
        Device::Com1,
        Device::Com2,
        Device::Nav1,
        Device::Nav2,
        Device::Dme,
        Device::Adf,
        Device::Xpdr,
        Device::Unassigned,
    ];

    /// Map a raw selector position to a device
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Device::Com1,
            1 => Device::Com2,
            2 => Device::Nav1,
            3 => Device::Nav2,
            4 => Device::Dme,
            5 => Device::Adf,
            6 => Device::Xpdr,
            _ => Device::Unassigned,
        }
    }

    /// Parse a device from its wire format byte
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(Device::Unassigned),
            0x01 => Some(Device::Com1),
            0x02 => Some(Device::Com2),
            0x03 => Some(Device::Nav1),
            0x04 => Some(Device::Nav2),
            0x05 => Some(Device::Dme),
            0x06 => Some(Device::Adf),
            0x07 => Some(Device::Xpdr),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn code(self) -> u8 {
        match self {
            Device::Unassigned => 0x00,
            Device::Com1 => 0x01,
            Device::Com2 => 0x02,
            Device::Nav1 => 0x03,
            Device::Nav2 => 0x04,
            Device::Dme => 0x05,
            Device::Adf => 0x06,
            Device::Xpdr => 0x07,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_order() {
        for (raw, device) in Device::ALL.iter().enumerate() {
            assert_eq!(Device::from_raw(raw as u8), *device);
        }
        assert_eq!(Device::from_raw(8), Device::Unassigned);
        assert_eq!(Device::from_raw(0xFF), Device::Unassigned);
    }

    #[test]
    fn test_code_roundtrip() {
        for device in Device::ALL {
            assert_eq!(Device::from_code(device.code()), Some(device));
        }
        assert_eq!(Device::from_code(0x08), None);
    }

    #[test]
    fn test_codes_are_raw_plus_one() {
        for raw in 0..7u8 {
            assert_eq!(Device::from_raw(raw).code(), raw + 1);
        }
    }
}
