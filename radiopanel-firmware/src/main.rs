//! Radio panel firmware
//!
//! Keeps the frequency and device selectors of a flight simulator radio
//! panel in sync with the host bridge over UART0.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_time::{Delay, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use radiopanel_core::{ChannelSelect, FrequencySelect, Panel, PanelConfig, TickReport};
use radiopanel_hal::{ActiveLow, BinarySelector, OutputPin, UartConfig};
use radiopanel_hal_rp2040::{uart_config, PanelUartRx, PanelUartTx, SelectorPin, StatusLed};

mod board;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Radio panel firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    match board::check_layout() {
        Ok(count) => debug!("Board layout: {} pins", count),
        Err(e) => error!("Board layout conflict: {:?}", e),
    }

    let config = PanelConfig::default();

    // Host link
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart_cfg = uart_config(&UartConfig::with_baudrate(config.baudrate));
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_cfg);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    let mut tx = PanelUartTx::new(tx);
    let mut rx = PanelUartRx::new(rx);
    info!("UART initialized at {} baud", config.baudrate);

    // Selector contacts close to ground
    let frequency_selector = BinarySelector::new([
        ActiveLow(SelectorPin::new(p.PIN_2)),
        ActiveLow(SelectorPin::new(p.PIN_3)),
        ActiveLow(SelectorPin::new(p.PIN_4)),
    ]);
    let channel_selector = BinarySelector::new([
        ActiveLow(SelectorPin::new(p.PIN_6)),
        ActiveLow(SelectorPin::new(p.PIN_7)),
        ActiveLow(SelectorPin::new(p.PIN_8)),
    ]);
    let mut led = StatusLed::new(p.PIN_25);

    let mut panel = unwrap!(Panel::new(
        FrequencySelect::new(frequency_selector),
        ChannelSelect::new(channel_selector),
        config,
    ));

    if let Err(e) = panel.announce(&mut tx) {
        warn!("Failed to send banner: {:?}", e);
    }
    Timer::after_millis(config.startup_delay_ms as u64).await;

    panel.init();
    info!("Panel {} running, tick {} ms", config.panel_id, config.tick_interval_ms);

    let mut delay = Delay;
    panel
        .run(&mut tx, &mut rx, &mut delay, |report| {
            if report.transmissions() > 0 || report.received.is_some() {
                led.toggle();
            }
            log_report(report);
        })
        .await;
}

/// Log what happened during a tick
fn log_report(report: &TickReport) {
    if report.frequency_sent {
        debug!("TX frequency");
    }
    if report.channel_sent {
        debug!("TX channel");
    }
    if let Some(identifier) = report.received {
        trace!("RX frame 0x{:02x}", identifier);
    }
    if let Some(Err(e)) = report.dispatch {
        warn!("Packet processing error: {:?}", e);
    }
    if let Some(e) = report.send_error {
        warn!("UART send error: {:?}", e);
    }
    if let Some(e) = report.receive_error {
        warn!("UART receive error: {:?}", e);
    }
}
