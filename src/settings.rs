//! Game configuration
//!
//! Persisted separately from the save record.

use serde::{Deserialize, Serialize};

/// Current configuration record version
pub const CONFIG_VERSION: u8 = 1;

/// Window geometry reported by the host each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub size: [i32; 2],
    pub position: [i32; 2],
}

/// Window and audio preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub configuration_version: u8,
    pub window_size: [i32; 2],
    #[serde(rename = "lastWindowPosition")]
    pub window_position: [i32; 2],
    /// Volume of every sound (0.0 - 1.0)
    pub volume: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            configuration_version: CONFIG_VERSION,
            window_size: [640, 280],
            window_position: [0, 0],
            volume: 1.0,
        }
    }
}

impl Config {
    /// Remember where the window is, for the next launch
    pub fn track_window(&mut self, geometry: WindowGeometry) {
        self.window_size = geometry.size;
        self.window_position = geometry.position;
    }

    /// Bring a hand-edited record back into range
    pub fn sanitize(&mut self) {
        if !(0.0..=1.0).contains(&self.volume) {
            log::warn!("Volume {} out of range, clamping", self.volume);
            self.volume = if self.volume.is_nan() { 1.0 } else { self.volume.clamp(0.0, 1.0) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(json["configurationVersion"], 1);
        assert_eq!(json["windowSize"][0], 640);
        assert_eq!(json["lastWindowPosition"][1], 0);
        assert_eq!(json["volume"], 1.0);
    }

    #[test]
    fn test_track_window() {
        let mut config = Config::default();
        config.track_window(WindowGeometry {
            size: [800, 600],
            position: [10, 20],
        });
        assert_eq!(config.window_size, [800, 600]);
        assert_eq!(config.window_position, [10, 20]);
    }

    #[test]
    fn test_sanitize_clamps_volume() {
        let mut config: Config = serde_json::from_str(r#"{"volume": 3.5}"#).unwrap();
        config.sanitize();
        assert_eq!(config.volume, 1.0);
        assert_eq!(config.window_size, [640, 280]);
    }
}
