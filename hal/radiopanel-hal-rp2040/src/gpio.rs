//! GPIO wrappers and pin bookkeeping
//!
//! Selector contacts switch to ground, so selector pins are inputs with the
//! internal pull-up enabled. Wrap them in [`radiopanel_hal::ActiveLow`] to
//! read a closed contact as a set bit.

use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
use embassy_rp::Peri;
use heapless::FnvIndexSet;
use radiopanel_hal::{InputPin, OutputPin};

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: usize = 30;

/// One contact of a binary-coded selector
pub struct SelectorPin<'d> {
    input: Input<'d>,
}

impl<'d> SelectorPin<'d> {
    /// Configure a pin as a pulled-up selector contact
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            input: Input::new(pin, Pull::Up),
        }
    }
}

impl InputPin for SelectorPin<'_> {
    fn is_high(&self) -> bool {
        self.input.is_high()
    }
}

/// Board status LED
pub struct StatusLed<'d> {
    output: Output<'d>,
}

impl<'d> StatusLed<'d> {
    /// Configure a pin as a push-pull output, initially off
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            output: Output::new(pin, Level::Low),
        }
    }
}

impl OutputPin for StatusLed<'_> {
    fn set_high(&mut self) {
        self.output.set_high();
    }

    fn set_low(&mut self) {
        self.output.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.output.is_set_high()
    }
}

/// Pin claim failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// No such GPIO on this chip
    OutOfRange(u8),
    /// Pin already claimed by another function
    InUse(u8),
}

/// Tracks which GPIO numbers the board layout has handed out
pub struct PinAllocator {
    claimed: FnvIndexSet<u8, 32>,
}

impl Default for PinAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl PinAllocator {
    pub fn new() -> Self {
        Self {
            claimed: FnvIndexSet::new(),
        }
    }

    /// Claim a single GPIO
    pub fn claim(&mut self, pin: u8) -> Result<(), PinError> {
        if pin as usize >= GPIO_COUNT {
            return Err(PinError::OutOfRange(pin));
        }
        if self.claimed.contains(&pin) {
            return Err(PinError::InUse(pin));
        }
        self.claimed
            .insert(pin)
            .map_err(|_| PinError::OutOfRange(pin))?;
        Ok(())
    }

    /// Claim every pin of a group, stopping at the first conflict
    pub fn claim_all(&mut self, pins: &[u8]) -> Result<(), PinError> {
        pins.iter().try_for_each(|&pin| self.claim(pin))
    }

    pub fn claimed_count(&self) -> usize {
        self.claimed.len()
    }
}
