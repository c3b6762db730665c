// Compositor: global transform and presentation timeline.
//
// Takes the raw geometry from the builders and synthesizer, scales every
// coordinate uniformly about the focal point, enlarges flower dimensions by
// the emphasis factor, and assigns each element a start delay:
//
//   stem      starts at `seed_start`
//   branch i  starts at `branch_start + i * branch_stagger`
//   flower i  starts at `flower_start + i * flower_stagger`, where
//             `flower_start = branch_start + branches * branch_stagger + flower_gap`
//   marker    `flower_start + flowers * flower_stagger + message_gap`
//
// The result is the immutable `Composition` handed to renderers.

use crate::config::{GeneratorConfig, TimingParams};
use crate::style::ResolvedStyle;
use crate::types::{BranchSegment, FlowerDescriptor, StemSegment};
use serde::{Deserialize, Serialize};

/// Start and length of a single timed phase, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub duration: u32,
}

/// Start of a staggered phase and the gap between siblings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staggered {
    pub start: u32,
    pub stagger: u32,
}

/// Phase start offsets for the whole reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub seed: Span,
    pub branches: Staggered,
    pub flowers: Staggered,
    /// When a caller-defined closing annotation may appear.
    pub message_start: u32,
}

impl Timeline {
    /// Offsets saturate at `u32::MAX` rather than wrapping.
    pub fn new(timing: &TimingParams, branch_count: usize, flower_count: usize) -> Self {
        let flower_start = timing
            .branch_start
            .saturating_add(stagger_offset(branch_count, timing.branch_stagger))
            .saturating_add(timing.flower_gap);
        let message_start = flower_start
            .saturating_add(stagger_offset(flower_count, timing.flower_stagger))
            .saturating_add(timing.message_gap);
        Self {
            seed: Span {
                start: timing.seed_start,
                duration: timing.seed_duration,
            },
            branches: Staggered {
                start: timing.branch_start,
                stagger: timing.branch_stagger,
            },
            flowers: Staggered {
                start: flower_start,
                stagger: timing.flower_stagger,
            },
            message_start,
        }
    }

    pub fn branch_delay(&self, index: usize) -> u32 {
        self.branches
            .start
            .saturating_add(stagger_offset(index, self.branches.stagger))
    }

    pub fn flower_delay(&self, index: usize) -> u32 {
        self.flowers
            .start
            .saturating_add(stagger_offset(index, self.flowers.stagger))
    }
}

/// `count * stagger`, saturating.
fn stagger_offset(count: usize, stagger: u32) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger)
}

/// Per-element durations and staggers, copied from the timing config.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationTiming {
    pub seed_duration: u32,
    pub stem_duration: u32,
    pub branch_duration: u32,
    pub flower_duration: u32,
    pub branch_stagger: u32,
    pub flower_stagger: u32,
}

impl From<&TimingParams> for AnimationTiming {
    fn from(t: &TimingParams) -> Self {
        Self {
            seed_duration: t.seed_duration,
            stem_duration: t.stem_duration,
            branch_duration: t.branch_duration,
            flower_duration: t.flower_duration,
            branch_stagger: t.branch_stagger,
            flower_stagger: t.flower_stagger,
        }
    }
}

/// Fixed logical canvas size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// SVG `viewBox` value, e.g. `"0 0 320 240"`.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimedStem {
    pub segment: StemSegment,
    pub delay: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimedBranch {
    pub segment: BranchSegment,
    pub delay: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimedFlower {
    pub flower: FlowerDescriptor,
    pub delay: u32,
}

/// Unscaled geometry from the earlier stages, in creation order.
#[derive(Clone, Debug, PartialEq)]
pub struct RawGeometry {
    pub stem: StemSegment,
    pub branches: Vec<BranchSegment>,
    pub flowers: Vec<FlowerDescriptor>,
}

/// Inputs echoed into the composition for renderers and documents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompositionSource {
    pub seed: String,
    pub bloom: f64,
    pub requested_flowers: i32,
    pub petal_count: u32,
    pub message_length: usize,
}

/// The finished composition. Built once; renderers only read it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub source: CompositionSource,
    pub style: ResolvedStyle,
    pub animation: AnimationTiming,
    pub timeline: Timeline,
    pub stem: TimedStem,
    pub branches: Vec<TimedBranch>,
    pub flowers: Vec<TimedFlower>,
    pub viewport: Viewport,
}

/// Scale, recenter, and time the raw geometry.
pub fn compose(
    source: CompositionSource,
    style: ResolvedStyle,
    geometry: RawGeometry,
    config: &GeneratorConfig,
) -> Composition {
    let layout = &config.layout;
    let focal = layout.focal_point;
    let scale = layout.scale;
    let timeline = Timeline::new(
        &config.timing,
        geometry.branches.len(),
        geometry.flowers.len(),
    );

    let stem = TimedStem {
        segment: StemSegment {
            start: geometry.stem.start.scaled_about(focal, scale),
            end: geometry.stem.end.scaled_about(focal, scale),
            layer: geometry.stem.layer,
        },
        delay: timeline.seed.start,
    };

    let branches = geometry
        .branches
        .into_iter()
        .enumerate()
        .map(|(i, segment)| TimedBranch {
            segment: BranchSegment {
                curve: segment.curve.scaled_about(focal, scale),
                ..segment
            },
            delay: timeline.branch_delay(i),
        })
        .collect();

    let emphasis = layout.flower_emphasis;
    let flowers = geometry
        .flowers
        .into_iter()
        .enumerate()
        .map(|(i, flower)| TimedFlower {
            flower: FlowerDescriptor {
                center: flower.center.scaled_about(focal, scale),
                petal_length: flower.petal_length * emphasis,
                petal_width: flower.petal_width * emphasis,
                center_radius: flower.center_radius * emphasis,
                ..flower
            },
            delay: timeline.flower_delay(i),
        })
        .collect();

    Composition {
        source,
        style,
        animation: AnimationTiming::from(&config.timing),
        timeline,
        stem,
        branches,
        flowers,
        viewport: Viewport {
            width: layout.canvas_width,
            height: layout.canvas_height,
        },
    }
}
