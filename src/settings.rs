//! Runtime settings
//!
//! Loaded from an optional JSON file. Missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::LayoutConfig;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play field ===
    /// Panel width in pixels
    pub panel_width: i32,
    /// Panel height in pixels (split into 14 rows)
    pub panel_height: i32,
    /// Fixed simulation timestep
    pub tick_interval_ms: u32,

    // === Run ===
    /// Fixed seed for reproducible runs; entropy when absent
    pub seed: Option<u64>,
    /// How many ticks the headless runner plays
    pub demo_ticks: u32,
    /// Let the autopilot drive the frog
    pub autopilot: bool,

    // === Output ===
    /// Pixels per character cell when printing a frame
    pub text_cell: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            panel_width: PANEL_WIDTH,
            panel_height: PANEL_HEIGHT,
            tick_interval_ms: TICK_INTERVAL_MS,

            seed: None,
            demo_ticks: 3000,
            autopilot: true,

            text_cell: 10,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                log::info!("Using default settings");
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Grid geometry for these settings
    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig::new(self.panel_width, self.panel_height)
    }

    /// Fixed timestep, with a zero interval replaced by the default
    pub fn tick_interval(&self) -> u32 {
        if self.tick_interval_ms == 0 {
            log::warn!("Tick interval of 0ms is invalid, using {}ms", TICK_INTERVAL_MS);
            return TICK_INTERVAL_MS;
        }
        self.tick_interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "autopilot": false }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(!settings.autopilot);
        assert_eq!(settings.panel_width, PANEL_WIDTH);
        assert_eq!(settings.tick_interval_ms, TICK_INTERVAL_MS);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ seed: }").is_err());
        assert!(Settings::from_json(r#"{ "panel_width": "wide" }"#).is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/nonexistent/frogger-settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("frogger-settings-{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(7),
            demo_ticks: 10,
            ..Default::default()
        };
        std::fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();
        let loaded = Settings::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_zero_tick_interval_uses_default() {
        let settings = Settings {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(settings.tick_interval(), TICK_INTERVAL_MS);

        let settings = Settings {
            tick_interval_ms: 33,
            ..Default::default()
        };
        assert_eq!(settings.tick_interval(), 33);
    }

    #[test]
    fn test_layout_from_settings() {
        let settings = Settings {
            panel_width: 560,
            panel_height: 840,
            ..Default::default()
        };
        let layout = settings.layout();
        assert_eq!(layout.segment(), 60);
        assert_eq!(layout.columns(), 9);
    }
}
