//! Configuration types
//!
//! Board-agnostic panel configuration. The firmware builds it from
//! `Default`; hosts may load it through the optional `serde` derives.

pub mod panel;

pub use panel::*;
