//! Device/channel selector state
//!
//! Payload layout (2 bytes, identifier `MSG_CHANNEL`):
//! ```text
//! ┌───────────┬─────────────┐
//! │ SELECTION │ DEVICE CODE │
//! │ 1B        │ 1B          │
//! └───────────┴─────────────┘
//! ```

pub mod device;

pub use device::Device;

use radiopanel_hal::SelectorInput;
use radiopanel_protocol::{expect_len, InvalidValue, ProcessingResult};

use crate::selection::SelectionTracker;
use crate::traits::StateModule;
use crate::SELECTOR_POSITIONS;

/// Width of a channel payload
pub const CHANNEL_PAYLOAD_WIDTH: usize = 2;

/// Encoded channel payload
pub type ChannelPayload = [u8; CHANNEL_PAYLOAD_WIDTH];

/// Device selector module
pub struct ChannelSelect<S> {
    input: S,
    selection: SelectionTracker,
}

impl<S: SelectorInput> ChannelSelect<S> {
    pub fn new(input: S) -> Self {
        Self {
            input,
            selection: SelectionTracker::new(),
        }
    }

    /// Map a raw selector position to a device
    pub fn convert_to_device(raw: u8) -> Device {
        Device::from_raw(raw)
    }

    pub fn selection(&self) -> u8 {
        self.selection.current()
    }

    pub fn device(&self) -> Device {
        Self::convert_to_device(self.selection())
    }

    pub fn input_mut(&mut self) -> &mut S {
        &mut self.input
    }

    fn decode(payload: &[u8]) -> Result<u8, InvalidValue> {
        let selection = payload[0];
        let code = payload[1];

        if selection >= SELECTOR_POSITIONS {
            return Err(InvalidValue::Selection(selection));
        }
        let device = Device::from_code(code).ok_or(InvalidValue::Code(code))?;
        if device != Self::convert_to_device(selection) {
            return Err(InvalidValue::Mismatch { selection, code });
        }
        Ok(selection)
    }
}

impl<S: SelectorInput> StateModule for ChannelSelect<S> {
    const PAYLOAD_WIDTH: usize = CHANNEL_PAYLOAD_WIDTH;
    type Payload = ChannelPayload;

    fn init(&mut self) {
        self.selection = SelectionTracker::new();
    }

    fn update(&mut self) -> bool {
        let raw = self.input.read_position();
        self.selection.observe(raw)
    }

    fn assemble_payload(&self) -> ChannelPayload {
        [self.selection(), self.device().code()]
    }

    fn packet_callback(&mut self, payload: &[u8]) -> ProcessingResult {
        expect_len(payload, CHANNEL_PAYLOAD_WIDTH)?;
        let selection = Self::decode(payload)?;
        self.selection.set(selection);
        Ok(())
    }
}
