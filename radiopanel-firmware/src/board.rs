//! Pin layout of the panel board (Raspberry Pi Pico)
//!
//! The numbers here must match the peripherals taken in `main`.

use radiopanel_hal_rp2040::{PinAllocator, PinError};

/// UART0 TX/RX to the host bridge
pub const UART_PINS: [u8; 2] = [0, 1];

/// Frequency selector contacts, least significant bit first
pub const FREQUENCY_SELECTOR_PINS: [u8; 3] = [2, 3, 4];

/// Device selector contacts, least significant bit first
pub const CHANNEL_SELECTOR_PINS: [u8; 3] = [6, 7, 8];

/// On-board LED
pub const STATUS_LED_PIN: u8 = 25;

/// Check that no GPIO is assigned twice
pub fn check_layout() -> Result<usize, PinError> {
    let mut pins = PinAllocator::new();
    pins.claim_all(&UART_PINS)?;
    pins.claim_all(&FREQUENCY_SELECTOR_PINS)?;
    pins.claim_all(&CHANNEL_SELECTOR_PINS)?;
    pins.claim(STATUS_LED_PIN)?;
    Ok(pins.claimed_count())
}
