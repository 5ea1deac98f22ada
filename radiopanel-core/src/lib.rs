//! Board-agnostic core logic for the radio panel firmware
//!
//! This crate contains everything that keeps the panel's physical selectors
//! in step with the host simulator, independent of the chip it runs on:
//!
//! - Selector change detection shared by both state modules
//! - Frequency selector module (designations, bands, payload codec)
//! - Device/channel selector module
//! - The cooperative synchronization loop ([`panel::Panel`])
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod channel;
pub mod config;
pub mod frequency;
pub mod panel;
pub mod selection;
pub mod traits;

pub use channel::{ChannelSelect, Device};
pub use config::{ConfigError, PanelConfig};
pub use frequency::{FrequencyDesignation, FrequencyPair, FrequencySelect};
pub use panel::{Panel, PanelError, Route, TickReport};
pub use traits::StateModule;

/// Number of positions on each panel selector (three binary-coded pins)
pub const SELECTOR_POSITIONS: u8 = 8;
