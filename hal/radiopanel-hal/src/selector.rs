//! Multi-position selector switches
//!
//! The panel's rotary selectors present their position as a small binary
//! number on a group of input pins. [`BinarySelector`] reads those pins and
//! assembles the raw position; anything that can report a position
//! implements [`SelectorInput`].

use crate::gpio::InputPin;

/// A control that reports a raw numeric position
pub trait SelectorInput {
    /// Read the current raw position
    fn read_position(&mut self) -> u8;
}

/// Selector decoded from binary-weighted input pins
///
/// `pins[0]` is the least significant bit. At most 8 pins contribute to
/// the position; extra pins are ignored.
pub struct BinarySelector<P, const N: usize> {
    pins: [P; N],
}

impl<P: InputPin, const N: usize> BinarySelector<P, N> {
    /// Create a selector from its pins, least significant bit first
    pub fn new(pins: [P; N]) -> Self {
        Self { pins }
    }
}

impl<P: InputPin, const N: usize> SelectorInput for BinarySelector<P, N> {
    fn read_position(&mut self) -> u8 {
        self.pins
            .iter()
            .take(8)
            .enumerate()
            .fold(0u8, |acc, (bit, pin)| {
                if pin.is_high() {
                    acc | (1 << bit)
                } else {
                    acc
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::ActiveLow;

    #[derive(Clone, Copy)]
    struct FakePin(bool);

    impl InputPin for FakePin {
        fn is_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_all_low_is_zero() {
        let mut selector = BinarySelector::new([FakePin(false); 3]);
        assert_eq!(selector.read_position(), 0);
    }

    #[test]
    fn test_bits_are_lsb_first() {
        let mut selector = BinarySelector::new([FakePin(true), FakePin(false), FakePin(true)]);
        assert_eq!(selector.read_position(), 0b101);
    }

    #[test]
    fn test_active_low_pins() {
        // Closed contacts pull to ground
        let pins = [
            ActiveLow(FakePin(false)),
            ActiveLow(FakePin(false)),
            ActiveLow(FakePin(true)),
        ];
        let mut selector = BinarySelector::new(pins);
        assert_eq!(selector.read_position(), 0b011);
    }

    #[test]
    fn test_ninth_pin_ignored() {
        let mut pins = [FakePin(false); 9];
        pins[0] = FakePin(true);
        pins[8] = FakePin(true);
        let mut selector = BinarySelector::new(pins);
        assert_eq!(selector.read_position(), 1);
    }
}
