//! Moving frames over the UART halves
//!
//! Outbound frames are encoded into a stack buffer and written with a
//! blocking write. Inbound bytes are pulled without blocking: when the
//! receive queue runs dry the call returns and the partial frame stays in
//! the parser until the next poll.

use radiopanel_hal::{UartRx, UartTx};

use crate::frame::{Frame, FrameError, FrameParser, MAX_FRAME_SIZE};

/// Upper bound on bytes consumed by a single [`FrameReceiver::receive`] call
pub const RECEIVE_BUDGET: usize = 2 * MAX_FRAME_SIZE;

/// Transport level failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Frame could not be encoded or a received frame was corrupt
    Frame(FrameError),
    /// The UART rejected a write
    Write,
    /// The UART reported a receive error
    Read,
}

impl From<FrameError> for TransportError {
    fn from(e: FrameError) -> Self {
        TransportError::Frame(e)
    }
}

/// Frame `payload` under `identifier` and write it out
///
/// Returns the number of bytes put on the wire.
pub fn send_frame<W: UartTx>(
    writer: &mut W,
    payload: &[u8],
    identifier: u8,
) -> Result<usize, TransportError> {
    let frame = Frame::new(identifier, payload)?;
    let mut buf = [0u8; MAX_FRAME_SIZE];
    let len = frame.encode(&mut buf)?;
    writer
        .write_all(&buf[..len])
        .map_err(|_| TransportError::Write)?;
    Ok(len)
}

/// Assembles inbound frames from a non-blocking byte source
#[derive(Debug, Clone, Default)]
pub struct FrameReceiver {
    parser: FrameParser,
}

impl FrameReceiver {
    /// Create a receiver with an idle parser
    pub const fn new() -> Self {
        Self {
            parser: FrameParser::new(),
        }
    }

    /// Try to assemble one complete frame
    ///
    /// Consumes bytes until a frame completes, the source has no more data,
    /// or [`RECEIVE_BUDGET`] bytes have been read. Bytes following a
    /// completed frame stay in the source for the next call. A corrupt frame
    /// is reported as an error; the parser has already resynchronized.
    pub fn receive<R: UartRx>(&mut self, reader: &mut R) -> Result<Option<Frame>, TransportError> {
        for _ in 0..RECEIVE_BUDGET {
            let byte = match reader.try_read_byte().map_err(|_| TransportError::Read)? {
                Some(byte) => byte,
                None => return Ok(None),
            };
            if let Some(frame) = self.parser.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }

    /// Drop any partially received frame
    pub fn reset(&mut self) {
        self.parser.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;
    use radiopanel_hal::RxQueue;

    /// Captures everything written to it
    struct Capture {
        bytes: Vec<u8, 256>,
        fail: bool,
    }

    impl Capture {
        fn new() -> Self {
            Self {
                bytes: Vec::new(),
                fail: false,
            }
        }
    }

    impl UartTx for Capture {
        type Error = ();

        fn write_all(&mut self, data: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.bytes.extend_from_slice(data).map_err(|_| ())
        }

        fn flush(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    fn enqueue_frame(producer: &mut heapless::spsc::Producer<'_, u8, 256>, id: u8, payload: &[u8]) {
        let encoded = Frame::new(id, payload).unwrap().encode_to_vec().unwrap();
        for &byte in encoded.iter() {
            producer.enqueue(byte).unwrap();
        }
    }

    #[test]
    fn test_send_frame_writes_encoded_frame() {
        let mut tx = Capture::new();
        let len = send_frame(&mut tx, &[0x02, 0x03], 0x04).unwrap();

        assert_eq!(len, 6);
        let expected = Frame::new(0x04, &[0x02, 0x03]).unwrap().encode_to_vec().unwrap();
        assert_eq!(&tx.bytes[..], &expected[..]);
    }

    #[test]
    fn test_send_frame_write_error() {
        let mut tx = Capture::new();
        tx.fail = true;
        assert_eq!(send_frame(&mut tx, &[1], 0x01), Err(TransportError::Write));
    }

    #[test]
    fn test_receive_nothing_available() {
        let mut queue = RxQueue::new();
        let (_producer, mut consumer) = queue.split();

        let mut receiver = FrameReceiver::new();
        assert_eq!(receiver.receive(&mut consumer), Ok(None));
    }

    #[test]
    fn test_receive_one_frame_per_call() {
        let mut queue = RxQueue::new();
        let (mut producer, mut consumer) = queue.split();
        enqueue_frame(&mut producer, 0x01, &[1]);
        enqueue_frame(&mut producer, 0x04, &[2, 3]);

        let mut receiver = FrameReceiver::new();
        let first = receiver.receive(&mut consumer).unwrap().unwrap();
        assert_eq!(first.identifier, 0x01);

        // Second frame is still queued
        assert_eq!(consumer.len(), 6);

        let second = receiver.receive(&mut consumer).unwrap().unwrap();
        assert_eq!(second.identifier, 0x04);
        assert_eq!(receiver.receive(&mut consumer), Ok(None));
    }

    #[test]
    fn test_receive_partial_frame_completes_later() {
        let mut queue = RxQueue::new();
        let (mut producer, mut consumer) = queue.split();
        let encoded = Frame::new(0x04, &[5, 6]).unwrap().encode_to_vec().unwrap();

        for &byte in &encoded[..3] {
            producer.enqueue(byte).unwrap();
        }
        let mut receiver = FrameReceiver::new();
        assert_eq!(receiver.receive(&mut consumer), Ok(None));

        for &byte in &encoded[3..] {
            producer.enqueue(byte).unwrap();
        }
        let frame = receiver.receive(&mut consumer).unwrap().unwrap();
        assert_eq!(&frame.payload[..], &[5, 6]);
    }

    #[test]
    fn test_receive_corrupt_frame_then_recover() {
        let mut queue = RxQueue::new();
        let (mut producer, mut consumer) = queue.split();
        let mut corrupt = Frame::new(0x01, &[9]).unwrap().encode_to_vec().unwrap();
        let last = corrupt.len() - 1;
        corrupt[last] ^= 0x55;
        for &byte in corrupt.iter() {
            producer.enqueue(byte).unwrap();
        }
        enqueue_frame(&mut producer, 0x04, &[1, 1]);

        let mut receiver = FrameReceiver::new();
        assert_eq!(
            receiver.receive(&mut consumer),
            Err(TransportError::Frame(FrameError::InvalidChecksum))
        );
        let frame = receiver.receive(&mut consumer).unwrap().unwrap();
        assert_eq!(frame.identifier, 0x04);
    }

    #[test]
    fn test_receive_budget_bounds_garbage() {
        let mut queue = RxQueue::new();
        let (mut producer, mut consumer) = queue.split();
        for _ in 0..RECEIVE_BUDGET + 10 {
            producer.enqueue(0x00).unwrap();
        }

        let mut receiver = FrameReceiver::new();
        assert_eq!(receiver.receive(&mut consumer), Ok(None));
        assert_eq!(consumer.len(), 10);
    }
}
