//! Frequency selector state
//!
//! Tracks which radio function the frequency knob points at, together with
//! the active and standby frequency of every function as last set by the
//! host.
//!
//! Payload layout (9 bytes, identifier `MSG_FREQUENCY`):
//! ```text
//! ┌──────┬──────────────┬──────────────┐
//! │ CODE │ STANDBY kHz  │ ACTIVE kHz   │
//! │ 1B   │ 4B BE        │ 4B BE        │
//! └──────┴──────────────┴──────────────┘
//! ```
//!
//! The code is the device code of the designation. Positions 0-5 are
//! recovered from it directly. Both reserved positions send `0x00`; on
//! receipt a module already resting on a reserved position keeps it,
//! otherwise it moves to the first reserved position.

pub mod band;
pub mod designation;

pub use band::{Band, FrequencyPair};
pub use designation::FrequencyDesignation;

use radiopanel_hal::SelectorInput;
use radiopanel_protocol::{expect_len, InvalidValue, ProcessingResult};

use crate::selection::SelectionTracker;
use crate::traits::StateModule;
use crate::SELECTOR_POSITIONS;

/// Width of a frequency payload
pub const FREQUENCY_PAYLOAD_WIDTH: usize = 9;

/// Encoded frequency payload
pub type FrequencyPayload = [u8; FREQUENCY_PAYLOAD_WIDTH];

const DESIGNATION_COUNT: usize = FrequencyDesignation::ALL.len();

/// First selector position without a designation
const FIRST_RESERVED: u8 = 6;

/// Frequency selector module
pub struct FrequencySelect<S> {
    input: S,
    selection: SelectionTracker,
    table: [FrequencyPair; DESIGNATION_COUNT],
}

impl<S: SelectorInput> FrequencySelect<S> {
    /// Create the module around its selector input
    pub fn new(input: S) -> Self {
        Self {
            input,
            selection: SelectionTracker::new(),
            table: default_table(),
        }
    }

    /// Map a raw selector position to a designation
    pub fn convert_to_designation(raw: u8) -> FrequencyDesignation {
        FrequencyDesignation::from_raw(raw)
    }

    /// Canonical selector position
    pub fn selection(&self) -> u8 {
        self.selection.current()
    }

    /// Designation of the canonical selector position
    pub fn designation(&self) -> FrequencyDesignation {
        Self::convert_to_designation(self.selection())
    }

    /// Stored frequencies of a designation
    pub fn frequencies(&self, designation: FrequencyDesignation) -> FrequencyPair {
        self.table[designation.index()]
    }

    /// Access the selector input
    pub fn input_mut(&mut self) -> &mut S {
        &mut self.input
    }

    fn decode(payload: &[u8]) -> Result<(FrequencyDesignation, FrequencyPair), InvalidValue> {
        let code = payload[0];
        let designation = FrequencyDesignation::from_code(code).ok_or(InvalidValue::Code(code))?;

        let pair = FrequencyPair::new(read_u32(&payload[5..9]), read_u32(&payload[1..5]));
        designation.band().validate(pair)?;

        Ok((designation, pair))
    }

    /// Selector position a host-set designation lands on
    fn position_for(&self, designation: FrequencyDesignation) -> u8 {
        match designation.position() {
            Some(position) => position,
            None if self.designation() == FrequencyDesignation::Unassigned
                && self.selection() < SELECTOR_POSITIONS =>
            {
                self.selection()
            }
            None => FIRST_RESERVED,
        }
    }
}

impl<S: SelectorInput> StateModule for FrequencySelect<S> {
    const PAYLOAD_WIDTH: usize = FREQUENCY_PAYLOAD_WIDTH;
    type Payload = FrequencyPayload;

    fn init(&mut self) {
        self.selection = SelectionTracker::new();
        self.table = default_table();
    }

    fn update(&mut self) -> bool {
        let raw = self.input.read_position();
        self.selection.observe(raw)
    }

    fn assemble_payload(&self) -> FrequencyPayload {
        let designation = self.designation();
        let pair = self.frequencies(designation);

        let mut payload = [0u8; FREQUENCY_PAYLOAD_WIDTH];
        payload[0] = designation.code();
        payload[1..5].copy_from_slice(&pair.standby.to_be_bytes());
        payload[5..9].copy_from_slice(&pair.active.to_be_bytes());
        payload
    }

    fn packet_callback(&mut self, payload: &[u8]) -> ProcessingResult {
        expect_len(payload, FREQUENCY_PAYLOAD_WIDTH)?;
        let (designation, pair) = Self::decode(payload)?;

        let selection = self.position_for(designation);
        self.selection.set(selection);
        self.table[designation.index()] = pair;
        Ok(())
    }
}

fn default_table() -> [FrequencyPair; DESIGNATION_COUNT] {
    FrequencyDesignation::ALL.map(|designation| designation.band().default_pair())
}

fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
