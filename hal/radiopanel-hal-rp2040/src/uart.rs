//! UART halves for the panel link
//!
//! Adapts any `embedded-io` transport to the panel's UART traits. On the
//! RP2040 these are the halves of an interrupt-driven `BufferedUart`: the
//! interrupt fills the receive ring buffer and the panel loop drains it
//! without waiting.

use embassy_rp::uart::{BufferedUartRx, BufferedUartTx, Config};
use embedded_io::{Read, ReadReady, Write};
use radiopanel_hal::{Parity, StopBits, UartConfig, UartRx, UartTx};

/// Blocking transmitter over an `embedded-io` writer
pub struct IoUartTx<T> {
    inner: T,
}

impl<T: Write> IoUartTx<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: Write> UartTx for IoUartTx<T> {
    type Error = T::Error;

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.flush()
    }
}

/// Non-blocking receiver over an `embedded-io` reader
pub struct IoUartRx<T> {
    inner: T,
}

impl<T: Read + ReadReady> IoUartRx<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: Read + ReadReady> UartRx for IoUartRx<T> {
    type Error = T::Error;

    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        if !self.inner.read_ready()? {
            return Ok(None);
        }
        let mut byte = [0u8; 1];
        match self.inner.read(&mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }
}

/// Transmit half of the panel's buffered UART
pub type PanelUartTx = IoUartTx<BufferedUartTx>;

/// Receive half of the panel's buffered UART
pub type PanelUartRx = IoUartRx<BufferedUartRx>;

/// Translate the board-agnostic UART settings into embassy-rp's
pub fn uart_config(config: &UartConfig) -> Config {
    let mut cfg = Config::default();
    cfg.baudrate = config.baudrate;
    cfg.parity = match config.parity {
        Parity::None => embassy_rp::uart::Parity::ParityNone,
        Parity::Even => embassy_rp::uart::Parity::ParityEven,
        Parity::Odd => embassy_rp::uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => embassy_rp::uart::StopBits::STOP1,
        StopBits::Two => embassy_rp::uart::StopBits::STOP2,
    };
    cfg
}
