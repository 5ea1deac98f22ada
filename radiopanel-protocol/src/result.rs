//! Outcome of interpreting an inbound payload
//!
//! Every handler reports back through [`ProcessingResult`]; a bad payload is
//! a value to be logged, never a reason to stop the panel loop.

/// Which part of a payload failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidValue {
    /// Raw selector position outside the selector's domain
    Selection(u8),
    /// Designation or device code that no variant uses
    Code(u8),
    /// Code disagrees with the designation implied by the selection
    Mismatch { selection: u8, code: u8 },
    /// Frequency outside the band of its designation (kHz)
    Frequency(u32),
}

/// Reasons an inbound payload was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProcessingError {
    /// Payload length does not match the module's encoding width
    MalformedLength { expected: usize, actual: usize },
    /// Payload decoded to a value outside the valid domain
    InvalidValue(InvalidValue),
    /// No handler is registered for the frame's identifier
    UnknownIdentifier(u8),
}

impl From<InvalidValue> for ProcessingError {
    fn from(value: InvalidValue) -> Self {
        ProcessingError::InvalidValue(value)
    }
}

/// Result of handing a payload to a handler
pub type ProcessingResult = Result<(), ProcessingError>;

/// Check that a payload has exactly the expected width
pub fn expect_len(payload: &[u8], expected: usize) -> ProcessingResult {
    if payload.len() == expected {
        Ok(())
    } else {
        Err(ProcessingError::MalformedLength {
            expected,
            actual: payload.len(),
        })
    }
}
