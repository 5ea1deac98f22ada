//! Change detection for selector positions
//!
//! Two values are tracked per selector. The *observed* value is the last
//! position read from hardware and only changes when the physical control
//! moves. The *current* value is the canonical selection reported to the
//! host; it follows the hardware but can also be set by the host. Because
//! change detection compares against the observed value, a host-set
//! selection is not echoed back until someone actually turns the knob.

/// Observed and canonical position of one selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelectionTracker {
    /// Last hardware reading, `None` until the first poll
    observed: Option<u8>,
    /// Canonical selection
    current: u8,
}

impl Default for SelectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionTracker {
    /// Tracker with nothing observed yet
    pub const fn new() -> Self {
        Self {
            observed: None,
            current: 0,
        }
    }

    /// Record a hardware reading
    ///
    /// Returns true if it differs from the previous reading (always true
    /// for the first one). Unchanged readings leave the tracker untouched.
    pub fn observe(&mut self, raw: u8) -> bool {
        if self.observed == Some(raw) {
            return false;
        }
        self.observed = Some(raw);
        self.current = raw;
        true
    }

    /// Set the canonical selection without touching the hardware reading
    pub fn set(&mut self, raw: u8) {
        self.current = raw;
    }

    /// Canonical selection
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Last hardware reading
    pub fn observed(&self) -> Option<u8> {
        self.observed
    }
}
