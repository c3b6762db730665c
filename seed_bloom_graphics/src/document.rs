// Front-end document: the composition as a flat, serializable JSON value.
//
// Mirrors what a browser player needs to replay the growth without running
// the generator: resolved parameters, animation durations, the phase
// timeline, per-element layers with ids and delays, and a few human-readable
// notes about what each input influenced. Branch curves are flattened to SVG
// path strings here so the player never has to know about `QuadCurve`.

use crate::paths::quad_path_data;
use seed_bloom_gen::Composition;
use seed_bloom_gen::compose::{Span, Staggered};
use seed_bloom_gen::style::FlowerType;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowerDocument {
    pub params: DocumentParams,
    pub animation: DocumentAnimation,
    pub timeline: DocumentTimeline,
    pub meta: DocumentMeta,
    pub layers: DocumentLayers,
    #[serde(rename = "viewBox")]
    pub view_box: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentParams {
    pub seed: String,
    pub bloom: f64,
    pub flower_type: FlowerType,
    pub petal_count: u32,
    pub flower_color: String,
    pub flower_colors: Vec<String>,
    pub background_color: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAnimation {
    pub seed_duration: u32,
    pub stem_duration: u32,
    pub branch_duration: u32,
    pub flower_duration: u32,
    pub stagger: StaggerPair,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaggerPair {
    pub branch: u32,
    pub flower: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTimeline {
    pub seed: Span,
    pub branches: Staggered,
    pub flowers: Staggered,
    pub message: MessageStart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStart {
    pub start: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub seed_reason: String,
    pub bloom_reason: String,
    pub message_influence: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentLayers {
    pub stem: StemLayer,
    pub branches: BranchLayer,
    pub flowers: Vec<FlowerEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StemLayer {
    pub segments: Vec<StemEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StemEntry {
    pub id: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub delay: u32,
    pub stage: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchLayer {
    pub segments: Vec<BranchEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchEntry {
    pub id: String,
    pub path: String,
    pub depth: u32,
    pub delay: u32,
    pub stage: String,
    pub stroke_width: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowerEntry {
    pub id: String,
    pub cx: f64,
    pub cy: f64,
    pub petal_count: u32,
    pub petal_length: f64,
    pub petal_width: f64,
    pub center_radius: f64,
    pub rotation: f64,
    /// Placement weight: 1.0 for primary tips, 0.9 for fallbacks.
    pub scale: f64,
    pub color: String,
    pub delay: u32,
    pub stage: String,
}

/// Stroke width for a branch segment, thinning with depth.
pub fn branch_stroke_width(depth: u32) -> f64 {
    match depth {
        0 => 1.9,
        1 => 1.7,
        _ => 1.5,
    }
}

impl FlowerDocument {
    pub fn from_composition(c: &Composition) -> Self {
        let stem = &c.stem.segment;
        let stem_entry = StemEntry {
            id: "stem-0".to_string(),
            x1: stem.start.x,
            y1: stem.start.y,
            x2: stem.end.x,
            y2: stem.end.y,
            delay: c.stem.delay,
            stage: "seed".to_string(),
        };

        let branches = c
            .branches
            .iter()
            .enumerate()
            .map(|(i, b)| BranchEntry {
                id: format!("branch-{i}"),
                path: quad_path_data(&b.segment.curve),
                depth: b.segment.depth,
                delay: b.delay,
                stage: "branches".to_string(),
                stroke_width: branch_stroke_width(b.segment.depth),
            })
            .collect();

        let flowers = c
            .flowers
            .iter()
            .enumerate()
            .map(|(i, t)| FlowerEntry {
                id: format!("flower-{i}"),
                cx: t.flower.center.x,
                cy: t.flower.center.y,
                petal_count: t.flower.petal_count,
                petal_length: t.flower.petal_length,
                petal_width: t.flower.petal_width,
                center_radius: t.flower.center_radius,
                rotation: t.flower.rotation,
                scale: t.flower.weight,
                color: t.flower.color.clone(),
                delay: t.delay,
                stage: "flowers".to_string(),
            })
            .collect();

        Self {
            params: DocumentParams {
                seed: c.source.seed.clone(),
                bloom: c.source.bloom,
                flower_type: c.style.flower_type,
                petal_count: c.source.petal_count,
                flower_color: c.style.flower_color.clone(),
                flower_colors: c.style.flower_colors.clone(),
                background_color: c.style.background_color.clone(),
            },
            animation: DocumentAnimation {
                seed_duration: c.animation.seed_duration,
                stem_duration: c.animation.stem_duration,
                branch_duration: c.animation.branch_duration,
                flower_duration: c.animation.flower_duration,
                stagger: StaggerPair {
                    branch: c.animation.branch_stagger,
                    flower: c.animation.flower_stagger,
                },
            },
            timeline: DocumentTimeline {
                seed: c.timeline.seed,
                branches: c.timeline.branches,
                flowers: c.timeline.flowers,
                message: MessageStart {
                    start: c.timeline.message_start,
                },
            },
            meta: DocumentMeta {
                seed_reason: "the seed deterministically fixes the branching structure, \
                              flower positions and color palette"
                    .to_string(),
                bloom_reason: format!(
                    "bloom ({}) sets branch density, flower size and initial branch length",
                    c.source.bloom
                ),
                message_influence: format!(
                    "message length ({}) shifts the display style; requested flower_count={}",
                    c.source.message_length, c.source.requested_flowers
                ),
            },
            layers: DocumentLayers {
                stem: StemLayer {
                    segments: vec![stem_entry],
                },
                branches: BranchLayer { segments: branches },
                flowers,
            },
            view_box: c.viewport.view_box(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_bloom_gen::{GenerationParameters, generate};

    fn document() -> (Composition, FlowerDocument) {
        let c = generate(&GenerationParameters::default());
        let doc = FlowerDocument::from_composition(&c);
        (c, doc)
    }

    #[test]
    fn document_mirrors_composition() {
        let (c, doc) = document();
        assert_eq!(doc.params.seed, "blooming-42");
        assert_eq!(doc.params.petal_count, 5);
        assert_eq!(doc.view_box, "0 0 320 240");
        assert_eq!(doc.layers.stem.segments.len(), 1);
        assert_eq!(doc.layers.stem.segments[0].stage, "seed");
        assert_eq!(doc.layers.branches.segments.len(), c.branches.len());
        assert_eq!(doc.layers.flowers.len(), c.flowers.len());
        assert_eq!(doc.timeline.message.start, c.timeline.message_start);
        assert_eq!(doc.animation.stagger.branch, 80);
        assert_eq!(doc.animation.stagger.flower, 120);
    }

    #[test]
    fn ids_and_delays_follow_order() {
        let (_, doc) = document();
        for (i, b) in doc.layers.branches.segments.iter().enumerate() {
            assert_eq!(b.id, format!("branch-{i}"));
            assert_eq!(b.delay, 500 + i as u32 * 80);
            assert!(b.path.starts_with("M "));
        }
        let flower_start = doc.timeline.flowers.start;
        for (i, f) in doc.layers.flowers.iter().enumerate() {
            assert_eq!(f.id, format!("flower-{i}"));
            assert_eq!(f.delay, flower_start + i as u32 * 120);
            assert_eq!(f.stage, "flowers");
        }
    }

    #[test]
    fn stroke_width_thins_with_depth() {
        assert_eq!(branch_stroke_width(0), 1.9);
        assert_eq!(branch_stroke_width(1), 1.7);
        assert_eq!(branch_stroke_width(2), 1.5);
        assert_eq!(branch_stroke_width(7), 1.5);
    }

    #[test]
    fn json_uses_front_end_keys() {
        let (_, doc) = document();
        let json = doc.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["viewBox"], "0 0 320 240");
        assert_eq!(value["params"]["flower_type"], "cluster");
        assert_eq!(value["layers"]["stem"]["segments"][0]["id"], "stem-0");
        assert!(value["meta"]["seed_reason"].is_string());
        let back: FlowerDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
