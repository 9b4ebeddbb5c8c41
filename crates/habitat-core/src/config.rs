//! Configuration types for worlds.

use crate::Result;
use serde::{Deserialize, Serialize};

/// World configuration parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Width of the world grid
    pub width: i32,
    /// Height of the world grid
    pub height: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
        }
    }
}

impl WorldConfig {
    /// Parse a configuration from a JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Notification channel parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventBusConfig {
    /// Events buffered per subscriber before the oldest are dropped
    pub capacity: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self { capacity: 1024 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let world_config = WorldConfig::default();
        assert_eq!(world_config.width, 64);
        assert_eq!(world_config.height, 64);

        let bus_config = EventBusConfig::default();
        assert_eq!(bus_config.capacity, 1024);
    }

    #[test]
    fn test_world_config_from_json() {
        let config = WorldConfig::from_json(r#"{"width": 3, "height": 2}"#).unwrap();
        assert_eq!(config, WorldConfig { width: 3, height: 2 });

        let partial = WorldConfig::from_json(r#"{"height": 10}"#).unwrap();
        assert_eq!(partial.width, 64);
        assert_eq!(partial.height, 10);
    }

    #[test]
    fn test_world_config_rejects_garbage() {
        assert!(matches!(
            WorldConfig::from_json("{width"),
            Err(crate::Error::Serialization(_))
        ));
    }
}
