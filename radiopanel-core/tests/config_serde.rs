//! Binary round trips of the serializable configuration and state types
//!
//! Run with `cargo test -p radiopanel-core --features serde`.

use radiopanel_core::config::{ConfigError, PanelConfig};
use radiopanel_core::frequency::FrequencyPair;
use radiopanel_core::{Device, FrequencyDesignation};

fn roundtrip<T>(value: &T) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let mut buffer = [0u8; 64];
    let used = postcard::to_slice(value, &mut buffer).unwrap();
    postcard::from_bytes(used).unwrap()
}

#[test]
fn test_default_config_roundtrip() {
    let config = PanelConfig::default();
    let decoded = roundtrip(&config);
    assert_eq!(decoded, config);
    assert_eq!(decoded.validate(), Ok(()));
}

#[test]
fn test_custom_config_roundtrip() {
    let config = PanelConfig {
        panel_id: 3,
        baudrate: 9_600,
        tick_interval_ms: 20,
        ..PanelConfig::default()
    };
    assert_eq!(roundtrip(&config), config);
}

#[test]
fn test_loaded_config_still_validated() {
    let config = PanelConfig {
        channel_id: radiopanel_protocol::MSG_FREQUENCY,
        ..PanelConfig::default()
    };
    let decoded = roundtrip(&config);
    assert_eq!(
        decoded.validate(),
        Err(ConfigError::IdentifierClash(radiopanel_protocol::MSG_FREQUENCY))
    );
}

#[test]
fn test_truncated_config_rejected() {
    let mut buffer = [0u8; 64];
    let used = postcard::to_slice(&PanelConfig::default(), &mut buffer).unwrap();
    let short = &used[..used.len() - 1];
    assert!(postcard::from_bytes::<PanelConfig>(short).is_err());
}

#[test]
fn test_state_types_roundtrip() {
    for designation in FrequencyDesignation::ALL {
        assert_eq!(roundtrip(&designation), designation);
    }
    for device in Device::ALL {
        assert_eq!(roundtrip(&device), device);
    }
    let pair = FrequencyPair::new(121_500, 136_990);
    assert_eq!(roundtrip(&pair), pair);
}
