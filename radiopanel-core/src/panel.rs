//! Cooperative synchronization loop
//!
//! [`Panel`] owns both state modules, the inbound router and the frame
//! receiver. Each tick it flushes local selector changes to the host
//! (frequency first, then channel) and then handles at most one inbound
//! frame. Nothing that happens during a tick stops the loop; problems are
//! returned in a [`TickReport`] for the caller to log.

use core::fmt::Write as _;

use embedded_hal_async::delay::DelayNs;
use heapless::String;
use radiopanel_hal::{UartRx, UartTx};
use radiopanel_protocol::{
    send_frame, Frame, FrameReceiver, ProcessingResult, Router, RouterError, TransportError,
};

use crate::config::{ConfigError, PanelConfig};
use crate::traits::StateModule;

/// Longest startup banner ("Radio: 255\n")
const BANNER_LEN: usize = 16;

/// State module an inbound identifier is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Route {
    Frequency,
    Channel,
}

/// Panel construction failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    Config(ConfigError),
    Router(RouterError),
}

impl From<ConfigError> for PanelError {
    fn from(e: ConfigError) -> Self {
        PanelError::Config(e)
    }
}

impl From<RouterError> for PanelError {
    fn from(e: RouterError) -> Self {
        PanelError::Router(e)
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// A frequency frame was written
    pub frequency_sent: bool,
    /// A channel frame was written
    pub channel_sent: bool,
    /// Identifier of the inbound frame handled this tick
    pub received: Option<u8>,
    /// Outcome of routing that frame
    pub dispatch: Option<ProcessingResult>,
    /// Last outbound write failure
    pub send_error: Option<TransportError>,
    /// Receive path failure (corrupt frame or UART error)
    pub receive_error: Option<TransportError>,
}

impl TickReport {
    /// Nothing sent, nothing received, nothing failed
    pub fn is_idle(&self) -> bool {
        *self == TickReport::default()
    }

    /// Number of frames written
    pub fn transmissions(&self) -> usize {
        usize::from(self.frequency_sent) + usize::from(self.channel_sent)
    }

    /// True if anything in this tick went wrong
    pub fn has_diagnostics(&self) -> bool {
        self.send_error.is_some()
            || self.receive_error.is_some()
            || matches!(self.dispatch, Some(Err(_)))
    }
}

/// The panel's synchronization loop
pub struct Panel<F, C> {
    frequency: F,
    channel: C,
    router: Router<Route>,
    receiver: FrameReceiver,
    config: PanelConfig,
}

impl<F: StateModule, C: StateModule> Panel<F, C> {
    /// Build the loop and register both modules with the router
    pub fn new(frequency: F, channel: C, config: PanelConfig) -> Result<Self, PanelError> {
        config.validate()?;

        let mut router = Router::new();
        router.register(config.frequency_id, Route::Frequency)?;
        router.register(config.channel_id, Route::Channel)?;

        Ok(Self {
            frequency,
            channel,
            router,
            receiver: FrameReceiver::new(),
            config,
        })
    }

    /// Return both modules to their initial state and drop partial input
    pub fn init(&mut self) {
        self.frequency.init();
        self.channel.init();
        self.receiver.reset();
    }

    /// Run one pass of the loop without sleeping
    pub fn tick<W: UartTx, R: UartRx>(&mut self, tx: &mut W, rx: &mut R) -> TickReport {
        let mut report = TickReport::default();

        if self.frequency.update() {
            let payload = self.frequency.assemble_payload();
            debug_assert_eq!(payload.as_ref().len(), F::PAYLOAD_WIDTH);
            match send_frame(tx, payload.as_ref(), self.config.frequency_id) {
                Ok(_) => report.frequency_sent = true,
                Err(e) => report.send_error = Some(e),
            }
        }

        if self.channel.update() {
            let payload = self.channel.assemble_payload();
            debug_assert_eq!(payload.as_ref().len(), C::PAYLOAD_WIDTH);
            match send_frame(tx, payload.as_ref(), self.config.channel_id) {
                Ok(_) => report.channel_sent = true,
                Err(e) => report.send_error = Some(e),
            }
        }

        match self.receiver.receive(rx) {
            Ok(Some(frame)) => {
                report.received = Some(frame.identifier);
                report.dispatch = Some(self.dispatch(&frame));
            }
            Ok(None) => {}
            Err(e) => report.receive_error = Some(e),
        }

        report
    }

    /// Route an inbound frame to the module registered for its identifier
    pub fn dispatch(&mut self, frame: &Frame) -> ProcessingResult {
        let Self {
            frequency,
            channel,
            router,
            ..
        } = self;

        router.dispatch(frame, |route, payload| match route {
            Route::Frequency => frequency.packet_callback(payload),
            Route::Channel => channel.packet_callback(payload),
        })
    }

    /// One tick followed by the configured sleep
    pub async fn step<W, R, D>(&mut self, tx: &mut W, rx: &mut R, delay: &mut D) -> TickReport
    where
        W: UartTx,
        R: UartRx,
        D: DelayNs,
    {
        let report = self.tick(tx, rx);
        delay.delay_ms(self.config.tick_interval_ms).await;
        report
    }

    /// Loop forever, handing every report to `on_tick`
    pub async fn run<W, R, D, L>(&mut self, tx: &mut W, rx: &mut R, delay: &mut D, mut on_tick: L)
    where
        W: UartTx,
        R: UartRx,
        D: DelayNs,
        L: FnMut(&TickReport),
    {
        loop {
            let report = self.step(tx, rx, delay).await;
            on_tick(&report);
        }
    }

    /// Write the plain-text identification banner
    pub fn announce<W: UartTx>(&self, tx: &mut W) -> Result<(), TransportError> {
        let mut banner: String<BANNER_LEN> = String::new();
        writeln!(banner, "Radio: {}", self.config.panel_id).map_err(|_| TransportError::Write)?;
        tx.write_all(banner.as_bytes())
            .map_err(|_| TransportError::Write)?;
        tx.flush().map_err(|_| TransportError::Write)
    }

    pub fn frequency(&self) -> &F {
        &self.frequency
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }
}
