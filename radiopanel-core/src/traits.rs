//! The contract shared by the panel's state modules

use radiopanel_protocol::ProcessingResult;

/// A selector-backed piece of panel state synchronized with the host
///
/// Implementations own their state exclusively. The synchronization loop
/// only ever talks to them through this trait.
pub trait StateModule {
    /// Exact width of this module's payload on the wire
    const PAYLOAD_WIDTH: usize;

    /// Fixed-size outbound payload
    type Payload: AsRef<[u8]>;

    /// Return to the "nothing observed yet" state
    fn init(&mut self);

    /// Poll the hardware; true if the control moved since the last poll
    fn update(&mut self) -> bool;

    /// Encode the current state for transmission
    fn assemble_payload(&self) -> Self::Payload;

    /// Apply a host-originated payload
    ///
    /// Either the whole payload is applied or nothing is.
    fn packet_callback(&mut self, payload: &[u8]) -> ProcessingResult;
}
