//! RP2040-specific HAL for the radio panel firmware
//!
//! Implements the `radiopanel-hal` traits on top of embassy-rp:
//!
//! - GPIO wrappers for selector pins and the status LED
//! - Blocking transmit and non-blocking receive over the buffered UART
//! - GPIO bookkeeping so the two selectors never share a pin

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod uart;

pub use gpio::{PinAllocator, PinError, SelectorPin, StatusLed, GPIO_COUNT};
pub use uart::{uart_config, IoUartRx, IoUartTx, PanelUartRx, PanelUartTx};
