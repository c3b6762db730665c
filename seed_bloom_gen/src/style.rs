// Style derivation: display style bucket and resolved colors.
//
// `derive_style` maps (seed, bloom, message length) to a display style tag
// and a seed-indexed palette. It consumes no random draws. `resolve_style`
// then applies the caller's explicit color overrides on top.
//
// The display style is informational metadata only. Branch algorithm
// selection is driven by the raw requested flower count (see `pipeline.rs`),
// not by this bucket.

use crate::config::Palette;
use crate::params::GenerationParameters;
use serde::{Deserialize, Serialize};

/// Display style bucket derived from bloom and message length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowerType {
    Single,
    Cluster,
    Bouquet,
}

impl FlowerType {
    pub fn as_str(self) -> &'static str {
        match self {
            FlowerType::Single => "single",
            FlowerType::Cluster => "cluster",
            FlowerType::Bouquet => "bouquet",
        }
    }
}

/// Output of [`derive_style`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedStyle {
    pub flower_type: FlowerType,
    pub palette: Palette,
}

/// Colors and style tag after overrides; what renderers must apply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    pub flower_type: FlowerType,
    /// The single flower color (override or palette).
    pub flower_color: String,
    /// Per-flower colors, cycled by index. Never empty.
    pub flower_colors: Vec<String>,
    pub background_color: String,
}

/// Blend of bloom and message length that picks the display style.
pub fn intensity(bloom: f64, message_length: usize) -> f64 {
    bloom * 0.6 + (message_length as f64 / 30.0).min(1.0) * 0.4
}

/// Index into a palette list of length `count`, always non-negative.
pub fn palette_index(seed_int: i64, count: usize) -> usize {
    seed_int.rem_euclid(count as i64) as usize
}

/// Map seed, bloom, and message length to a style tag and palette.
///
/// Palette choice depends on the seed alone. An empty palette list falls
/// back to the first stock palette.
pub fn derive_style(
    seed_int: i64,
    bloom: f64,
    message_length: usize,
    palettes: &[Palette],
) -> DerivedStyle {
    let level = intensity(bloom, message_length);
    let flower_type = if level < 0.35 {
        FlowerType::Single
    } else if level < 0.65 {
        FlowerType::Cluster
    } else {
        FlowerType::Bouquet
    };

    let palette = if palettes.is_empty() {
        Palette::new("#F8B4C4", "#fff5f5")
    } else {
        palettes[palette_index(seed_int, palettes.len())].clone()
    };

    DerivedStyle {
        flower_type,
        palette,
    }
}

/// Apply explicit color overrides from `params` on top of a derived style.
///
/// Empty strings and empty lists count as "not given".
pub fn resolve_style(params: &GenerationParameters, derived: &DerivedStyle) -> ResolvedStyle {
    let flower_color = params
        .flower_color
        .clone()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| derived.palette.flower.clone());
    let flower_colors = params
        .flower_colors
        .clone()
        .filter(|list| !list.is_empty())
        .unwrap_or_else(|| vec![flower_color.clone()]);
    let background_color = params
        .background_color
        .clone()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| derived.palette.background.clone());

    ResolvedStyle {
        flower_type: derived.flower_type,
        flower_color,
        flower_colors,
        background_color,
    }
}

/// Hex value of a named bloom color (`pink`, `peach`, `lavender`, `mint`,
/// `cream`, `coral`), case-insensitive.
pub fn named_color(name: &str) -> Option<&'static str> {
    match name.trim().to_ascii_lowercase().as_str() {
        "pink" => Some("#F8B4C4"),
        "peach" => Some("#FFDAB9"),
        "lavender" => Some("#E6E6FA"),
        "mint" => Some("#B5EAD7"),
        "cream" => Some("#FFF8E7"),
        "coral" => Some("#F08080"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_palettes;

    #[test]
    fn style_buckets_follow_intensity() {
        let palettes = default_palettes();
        assert_eq!(derive_style(0, 0.0, 0, &palettes).flower_type, FlowerType::Single);
        // 0.6 * 0.6 = 0.36
        assert_eq!(derive_style(0, 0.6, 0, &palettes).flower_type, FlowerType::Cluster);
        // 1.0 * 0.6 + 1.0 * 0.4 = 1.0
        assert_eq!(derive_style(0, 1.0, 45, &palettes).flower_type, FlowerType::Bouquet);
    }

    #[test]
    fn message_length_saturates_at_thirty() {
        assert_eq!(intensity(0.0, 30), intensity(0.0, 300));
        assert!((intensity(0.0, 15) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn palette_index_is_non_negative() {
        assert_eq!(palette_index(-7, 6), 5);
        assert_eq!(palette_index(2_722_655_244, 6), 0);
        assert_eq!(palette_index(97, 6), 1);
    }

    #[test]
    fn palette_depends_on_seed_only() {
        let palettes = default_palettes();
        let a = derive_style(98, 0.1, 0, &palettes);
        let b = derive_style(98, 0.9, 60, &palettes);
        assert_eq!(a.palette, b.palette);
        assert_eq!(a.palette.flower, "#E6E6FA");
    }

    #[test]
    fn overrides_take_precedence() {
        let derived = derive_style(0, 0.5, 0, &default_palettes());
        let params = GenerationParameters {
            flower_color: Some("#123456".into()),
            background_color: Some("#000000".into()),
            ..GenerationParameters::default()
        };
        let style = resolve_style(&params, &derived);
        assert_eq!(style.flower_color, "#123456");
        assert_eq!(style.flower_colors, vec!["#123456".to_string()]);
        assert_eq!(style.background_color, "#000000");
    }

    #[test]
    fn empty_color_list_falls_back_to_single_color() {
        let derived = derive_style(0, 0.5, 0, &default_palettes());
        let params = GenerationParameters {
            flower_colors: Some(Vec::new()),
            ..GenerationParameters::default()
        };
        let style = resolve_style(&params, &derived);
        assert_eq!(style.flower_colors, vec!["#F8B4C4".to_string()]);
    }

    #[test]
    fn named_colors_resolve() {
        assert_eq!(named_color("Mint"), Some("#B5EAD7"));
        assert_eq!(named_color("#B5EAD7"), None);
    }
}
