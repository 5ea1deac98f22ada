//! Radiopanel Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the panel logic is
//! written against. Chip-specific crates (currently RP2040) implement them,
//! and host tests implement them with plain fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  radiopanel-core / radiopanel-protocol  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  radiopanel-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ radiopanel-   │
//!             │ hal-rp2040    │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial communication
//! - [`selector::SelectorInput`] - Multi-position selector switches

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod selector;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{ActiveLow, InputPin, OutputPin};
pub use selector::{BinarySelector, SelectorInput};
pub use uart::{Parity, RxQueue, StopBits, UartConfig, UartRx, UartTx, RX_QUEUE_SIZE};
