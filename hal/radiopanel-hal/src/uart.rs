//! UART serial communication abstractions
//!
//! Transmit is blocking, receive is non-blocking: the panel loop checks
//! whether a byte is available and never waits for one. Received bytes are
//! buffered by an interrupt handler outside of the loop.

use core::convert::Infallible;

use heapless::spsc::{Consumer, Queue};

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write all of `data` to the UART
    ///
    /// Blocks until every byte has been handed to the peripheral.
    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// UART receiver
pub trait UartRx {
    /// Error type for receive operations
    type Error;

    /// Take the next received byte, if one is buffered
    ///
    /// Returns `Ok(None)` immediately when no data is available.
    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

/// Depth of the interrupt-fed receive queue
///
/// A heapless SPSC queue holds one element less than its size.
pub const RX_QUEUE_SIZE: usize = 256;

/// Single-producer/single-consumer receive queue
///
/// The producer half is fed from the UART interrupt, the consumer half is
/// drained by the panel loop through [`UartRx`].
pub type RxQueue = Queue<u8, RX_QUEUE_SIZE>;

impl<const N: usize> UartRx for Consumer<'_, u8, N> {
    type Error = Infallible;

    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(self.dequeue())
    }
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 115200,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

impl UartConfig {
    /// 8N1 configuration at the given baud rate
    pub fn with_baudrate(baudrate: u32) -> Self {
        Self {
            baudrate,
            ..Self::default()
        }
    }
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumer_reads_in_order() {
        let mut queue: RxQueue = Queue::new();
        let (mut producer, mut consumer) = queue.split();

        producer.enqueue(0xAA).unwrap();
        producer.enqueue(0x01).unwrap();

        assert_eq!(consumer.try_read_byte(), Ok(Some(0xAA)));
        assert_eq!(consumer.try_read_byte(), Ok(Some(0x01)));
    }

    #[test]
    fn test_consumer_empty_does_not_block() {
        let mut queue: RxQueue = Queue::new();
        let (_producer, mut consumer) = queue.split();

        assert_eq!(consumer.try_read_byte(), Ok(None));
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut queue: RxQueue = Queue::new();
        let (mut producer, _consumer) = queue.split();

        for i in 0..RX_QUEUE_SIZE - 1 {
            assert!(producer.enqueue(i as u8).is_ok());
        }
        assert_eq!(producer.enqueue(0xFF), Err(0xFF));
    }

    #[test]
    fn test_config_with_baudrate() {
        let config = UartConfig::with_baudrate(9600);
        assert_eq!(config.baudrate, 9600);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.stop_bits, StopBits::One);
    }
}
