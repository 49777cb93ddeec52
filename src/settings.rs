//! Game settings
//!
//! Course composition, level dimensions and the render style. Loaded from JSON;
//! anything missing takes its default, anything unreadable falls back to the
//! defaults wholesale.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::*;
use crate::level::{LevelParams, ShapeKind};

/// Level dimensions shared by every generated level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConstants {
    pub width: f32,
    pub height: f32,
    pub band_width: f32,
    pub start_rail_inset: f32,
    pub end_rail_inset: f32,
}

impl Default for LevelConstants {
    fn default() -> Self {
        Self {
            width: LEVEL_WIDTH,
            height: LEVEL_HEIGHT,
            band_width: LEVEL_BAND_WIDTH,
            start_rail_inset: START_RAIL_INSET,
            end_rail_inset: END_RAIL_INSET,
        }
    }
}

/// Colours and stroke used by the renderer; the geometry never sees these
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub shape_fill: [f32; 4],
    pub rail: [f32; 4],
    pub token: [f32; 4],
    pub target: [f32; 4],
    pub background: [f32; 4],
    pub win_flash: [f32; 4],
    pub lose_flash: [f32; 4],
    /// Rail stroke width
    pub line_width: f32,
    /// Arc tessellation density
    pub segments_per_radian: f32,
    /// Segments for full circles (token, target)
    pub circle_segments: u32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            shape_fill: [225.0 / 255.0, 222.0 / 255.0, 217.0 / 255.0, 1.0],
            rail: [0.75, 0.74, 0.72, 1.0],
            token: [1.0, 0.0, 0.0, 1.0],
            target: [1.0, 0.0, 0.0, 1.0],
            background: [242.0 / 255.0, 241.0 / 255.0, 246.0 / 255.0, 1.0],
            win_flash: [121.0 / 255.0, 195.0 / 255.0, 81.0 / 255.0, 1.0],
            lose_flash: [227.0 / 255.0, 86.0 / 255.0, 45.0 / 255.0, 1.0],
            line_width: LINE_WIDTH,
            segments_per_radian: 16.0,
            circle_segments: 48,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Geometry ===
    pub level: LevelConstants,
    /// Token pick-up radius and tap target radius
    pub token_radius: f32,

    // === Course composition ===
    /// Upper bound on randomly drawn shape levels (at least one is drawn)
    pub shape_levels_max: usize,
    /// Tap levels mixed into every course
    pub free_token_levels: usize,
    /// Levels always placed first, in order, never shuffled
    pub fixed_levels: Vec<ShapeKind>,
    /// Randomize the order of the non-fixed levels
    pub shuffle: bool,
    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,

    // === Presentation ===
    pub style: Style,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: LevelConstants::default(),
            token_radius: TOKEN_RADIUS,

            shape_levels_max: SHAPE_LEVELS_MAX,
            free_token_levels: FREE_TOKEN_LEVELS,
            fixed_levels: Vec::new(),
            shuffle: true,
            seed: None,

            style: Style::default(),
        }
    }
}

impl Settings {
    /// Parameters every generated level is built from (already sanitized)
    pub fn level_params(&self) -> LevelParams {
        LevelParams::new(self.level.width, self.level.height, self.level.band_width)
            .with_insets(self.level.start_rail_inset, self.level.end_rail_inset)
            .sanitized()
    }

    /// Token radius, or the default when the configured one is unusable
    pub fn token_radius(&self) -> f32 {
        if self.token_radius.is_finite() && self.token_radius > 0.0 {
            self.token_radius
        } else {
            log::warn!(
                "Token radius {} invalid, using {}",
                self.token_radius,
                TOKEN_RADIUS
            );
            TOKEN_RADIUS
        }
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Ignoring malformed settings ({err}), using defaults");
                Self::default()
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(err) => {
                log::info!("No settings at {} ({err}), using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "shuffle": false, "level": { "band_width": 120.0 } }"#);
        assert!(!settings.shuffle);
        assert_eq!(settings.level.band_width, 120.0);
        assert_eq!(settings.level.width, LEVEL_WIDTH);
        assert_eq!(settings.free_token_levels, FREE_TOKEN_LEVELS);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert_eq!(Settings::from_json("{ not json"), Settings::default());
    }

    #[test]
    fn test_json_round_trip_with_fixed_levels() {
        let settings = Settings {
            fixed_levels: vec![ShapeKind::ReversedL],
            seed: Some(17),
            ..Settings::default()
        };
        assert_eq!(Settings::from_json(&settings.to_json()), settings);
    }

    #[test]
    fn test_level_params_are_sanitized() {
        let settings = Settings {
            level: LevelConstants {
                band_width: -4.0,
                ..LevelConstants::default()
            },
            ..Settings::default()
        };
        let params = settings.level_params();
        assert_eq!(params.band_width, LEVEL_BAND_WIDTH);
        assert_eq!(params.start_rail_inset, START_RAIL_INSET);
    }

    #[test]
    fn test_invalid_token_radius_falls_back() {
        for json in [
            r#"{ "token_radius": -80.0 }"#,
            r#"{ "token_radius": 0.0 }"#,
            r#"{ "token_radius": -1e39 }"#,
        ] {
            assert_eq!(Settings::from_json(json).token_radius(), TOKEN_RADIUS, "{json}");
        }
        let settings = Settings::from_json(r#"{ "token_radius": 40.0 }"#);
        assert_eq!(settings.token_radius(), 40.0);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/button-trace.json"));
        assert_eq!(settings, Settings::default());
    }
}
