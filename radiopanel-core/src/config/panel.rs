//! Panel configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default UART baud rate
pub const DEFAULT_BAUDRATE: u32 = 115_200;

/// Default period between loop ticks (ms)
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 50;

/// Default settle time between the banner and the first tick (ms)
pub const DEFAULT_STARTUP_DELAY_MS: u32 = 3_000;

/// Configuration validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The loop would never yield
    ZeroTickInterval,
    /// Both modules share one frame identifier
    IdentifierClash(u8),
    /// UART cannot run at zero baud
    ZeroBaudrate,
}

/// Panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Number announced in the startup banner
    pub panel_id: u8,
    /// UART baud rate
    pub baudrate: u32,
    /// Sleep between loop ticks (ms)
    pub tick_interval_ms: u32,
    /// Settle time between the banner and the first tick (ms)
    pub startup_delay_ms: u32,
    /// Frame identifier of the frequency module
    pub frequency_id: u8,
    /// Frame identifier of the channel module
    pub channel_id: u8,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            panel_id: 1,
            baudrate: DEFAULT_BAUDRATE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            startup_delay_ms: DEFAULT_STARTUP_DELAY_MS,
            frequency_id: radiopanel_protocol::MSG_FREQUENCY,
            channel_id: radiopanel_protocol::MSG_CHANNEL,
        }
    }
}

impl PanelConfig {
    /// Check the configuration for values the loop cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.baudrate == 0 {
            return Err(ConfigError::ZeroBaudrate);
        }
        if self.frequency_id == self.channel_id {
            return Err(ConfigError::IdentifierClash(self.frequency_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PanelConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.frequency_id, 0x01);
        assert_eq!(config.channel_id, 0x04);
        assert_eq!(config.tick_interval_ms, 50);
    }

    #[test]
    fn test_zero_tick_interval() {
        let config = PanelConfig {
            tick_interval_ms: 0,
            ..PanelConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));
    }

    #[test]
    fn test_identifier_clash() {
        let config = PanelConfig {
            channel_id: 0x01,
            ..PanelConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::IdentifierClash(0x01)));
    }

    #[test]
    fn test_zero_baudrate() {
        let config = PanelConfig {
            baudrate: 0,
            ..PanelConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroBaudrate));
    }
}
