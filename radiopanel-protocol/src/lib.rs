//! Radio Panel Serial Protocol
//!
//! This crate defines the framed UART protocol between the radio panel and
//! the host simulator bridge, and the identifier-keyed routing of inbound
//! frames to the panel's state modules.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌───────┬────────┬────────────┬─────────────┬──────────┐
//! │ START │ LENGTH │ IDENTIFIER │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B     │ 1B         │ 0–46B       │ 1B       │
//! └───────┴────────┴────────────┴─────────────┴──────────┘
//! ```
//!
//! The identifier selects which state module a payload belongs to. The same
//! identifier is used in both directions: the panel reports local changes
//! with it and the host sets state with it.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod result;
pub mod router;
pub mod transport;

pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE};
pub use result::{expect_len, InvalidValue, ProcessingError, ProcessingResult};
pub use router::{Router, RouterError, MAX_ROUTES};
pub use transport::{send_frame, FrameReceiver, TransportError};

/// Identifier of frequency selection frames
pub const MSG_FREQUENCY: u8 = 0x01;

/// Identifier of device/channel selection frames
pub const MSG_CHANNEL: u8 = 0x04;
