// Data-driven generator configuration.
//
// Presentation constants live here in `GeneratorConfig` so a front end can
// restyle compositions without recompiling: the seed-indexed palette list,
// canvas and compositor layout, flower placement spacing, the animation
// timeline, and stroke colors for the renderer. Every `Default` reproduces
// the stock look; a JSON file may override any subset of fields.
//
// The growth algorithms' own shape constants (branch angles, jitter ranges,
// length ratios) are not configurable. They live next to the code in
// `branch.rs` and `flower.rs`.
//
// See also: `style.rs` which indexes `palettes`, `placement.rs` which reads
// `PlacementParams`, `compose.rs` which reads `LayoutParams` and
// `TimingParams`.
//
// **Critical constraint: determinism.** Config values feed directly into
// geometry. Two callers only get identical compositions for the same seed if
// they also use identical configs.

use crate::error::BloomError;
use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Parameter groups
// ---------------------------------------------------------------------------

/// A (flower, background) color pair selected by seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub flower: String,
    pub background: String,
}

impl Palette {
    pub fn new(flower: &str, background: &str) -> Self {
        Self {
            flower: flower.to_string(),
            background: background.to_string(),
        }
    }
}

/// The stock palette list, in index order: pink, peach, lavender, mint,
/// cream, coral.
pub fn default_palettes() -> Vec<Palette> {
    vec![
        Palette::new("#F8B4C4", "#fff5f5"),
        Palette::new("#FFDAB9", "#fffef5"),
        Palette::new("#E6E6FA", "#f5f5ff"),
        Palette::new("#B5EAD7", "#f0faf7"),
        Palette::new("#FFF8E7", "#fffef5"),
        Palette::new("#F08080", "#fff0f0"),
    ]
}

/// Canvas geometry and the compositor's global transform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Where the stem and all first-ring branches start.
    pub base_point: Point,
    /// How far the stem rises above the base point.
    pub stem_rise: f64,
    /// Fixed point of the global scale.
    pub focal_point: Point,
    pub scale: f64,
    /// Extra multiplier on petal and center-disc sizes.
    pub flower_emphasis: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            canvas_width: 320,
            canvas_height: 240,
            base_point: Point::new(160.0, 210.0),
            stem_rise: 18.0,
            focal_point: Point::new(160.0, 185.0),
            scale: 2.0,
            flower_emphasis: 1.5,
        }
    }
}

/// Spacing rules for cluster-mode flower placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementParams {
    /// Minimum distance between any newly accepted flower and those before it.
    pub min_separation: f64,
    /// Distance of fallback offset points from their tip.
    pub fallback_radius: f64,
    /// Offset points tried per fallback attempt.
    pub fallback_tries: u32,
    /// Offset points deviate from the tip angle by at most this many degrees.
    pub fallback_spread_deg: f64,
    /// Fallback attempts are capped at `requested * attempt_multiplier`.
    pub attempt_multiplier: u32,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            min_separation: 16.0,
            fallback_radius: 5.0,
            fallback_tries: 5,
            fallback_spread_deg: 25.0,
            attempt_multiplier: 3,
        }
    }
}

/// Animation timeline constants, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingParams {
    pub seed_start: u32,
    pub seed_duration: u32,
    pub stem_duration: u32,
    pub branch_start: u32,
    pub branch_stagger: u32,
    pub branch_duration: u32,
    /// Pause between the last branch slot and the first flower.
    pub flower_gap: u32,
    pub flower_stagger: u32,
    pub flower_duration: u32,
    /// Pause between the last flower slot and the trailing marker.
    pub message_gap: u32,
}

impl Default for TimingParams {
    fn default() -> Self {
        Self {
            seed_start: 0,
            seed_duration: 600,
            stem_duration: 600,
            branch_start: 500,
            branch_stagger: 80,
            branch_duration: 500,
            flower_gap: 400,
            flower_stagger: 120,
            flower_duration: 400,
            message_gap: 300,
        }
    }
}

/// Stroke colors used by renderers for the woody parts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeColors {
    pub stem: String,
    pub branch: String,
}

impl Default for StrokeColors {
    fn default() -> Self {
        Self {
            stem: "#5a8f5a".to_string(),
            branch: "#5c935c".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// GeneratorConfig
// ---------------------------------------------------------------------------

/// Complete configuration for `generate_with_config`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed-indexed palettes. Must not be empty.
    pub palettes: Vec<Palette>,
    pub layout: LayoutParams,
    pub placement: PlacementParams,
    pub timing: TimingParams,
    pub colors: StrokeColors,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            palettes: default_palettes(),
            layout: LayoutParams::default(),
            placement: PlacementParams::default(),
            timing: TimingParams::default(),
            colors: StrokeColors::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a config from JSON. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, BloomError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, BloomError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), BloomError> {
        if self.palettes.is_empty() {
            return Err(BloomError::InvalidConfig(
                "palettes must contain at least one entry".into(),
            ));
        }
        if self
            .palettes
            .iter()
            .any(|p| p.flower.trim().is_empty() || p.background.trim().is_empty())
        {
            return Err(BloomError::InvalidConfig(
                "palette colors must not be empty".into(),
            ));
        }
        let layout = &self.layout;
        if layout.canvas_width == 0 || layout.canvas_height == 0 {
            return Err(BloomError::InvalidConfig(
                "canvas dimensions must be positive".into(),
            ));
        }
        if !(layout.scale.is_finite() && layout.scale > 0.0) {
            return Err(BloomError::InvalidConfig(format!(
                "scale must be positive, got {}",
                layout.scale
            )));
        }
        if !(layout.flower_emphasis.is_finite() && layout.flower_emphasis > 0.0) {
            return Err(BloomError::InvalidConfig(format!(
                "flower_emphasis must be positive, got {}",
                layout.flower_emphasis
            )));
        }
        let placement = &self.placement;
        if !(placement.min_separation.is_finite() && placement.min_separation >= 0.0) {
            return Err(BloomError::InvalidConfig(format!(
                "min_separation must be non-negative, got {}",
                placement.min_separation
            )));
        }
        if !(placement.fallback_radius.is_finite() && placement.fallback_radius >= 0.0) {
            return Err(BloomError::InvalidConfig(format!(
                "fallback_radius must be non-negative, got {}",
                placement.fallback_radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn default_config_serializes() {
        let config = GeneratorConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let restored = GeneratorConfig::from_json_str(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let json = r#"{
            "timing": { "branch_stagger": 40 },
            "layout": { "scale": 1.5 }
        }"#;
        let config = GeneratorConfig::from_json_str(json).unwrap();
        assert_eq!(config.timing.branch_stagger, 40);
        assert_eq!(config.timing.flower_stagger, 120);
        assert_eq!(config.layout.scale, 1.5);
        assert_eq!(config.layout.canvas_width, 320);
        assert_eq!(config.palettes.len(), 6);
    }

    #[test]
    fn empty_palettes_are_rejected() {
        let err = GeneratorConfig::from_json_str(r#"{ "palettes": [] }"#).unwrap_err();
        assert!(matches!(err, BloomError::InvalidConfig(_)));
    }

    #[test]
    fn zero_scale_is_rejected() {
        let err =
            GeneratorConfig::from_json_str(r#"{ "layout": { "scale": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, BloomError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = GeneratorConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, BloomError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = GeneratorConfig::load(Path::new("/nonexistent/seed-bloom.json")).unwrap_err();
        assert!(matches!(err, BloomError::ConfigIo(_)));
    }

    #[test]
    fn palette_order_is_stable() {
        let palettes = default_palettes();
        assert_eq!(palettes[0].flower, "#F8B4C4");
        assert_eq!(palettes[5].background, "#fff0f0");
    }
}
