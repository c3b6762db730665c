// Branch builders.
//
// Two strategies grow the branches flowers sit on:
//
// - Pairwise (requested flowers < 3): one straight-ish branch per flower,
//   fanned at fixed base angles. Each branch endpoint becomes exactly one tip.
// - Cluster (requested flowers >= 3): bounded recursive subdivision. The
//   first ring fans into three children, deeper rings split into one or two.
//   Every node's endpoint is recorded as a tip, not only the leaves, and the
//   flower placer later chooses among them.
//
// Both builders return segments in creation order (depth-first for the
// cluster builder), which is also the order the compositor staggers them in.
//
// **Critical constraint: determinism.** The draw order below is part of the
// output. Reordering any `rng` call changes every composition after it.

use crate::prng::BloomRng;
use crate::types::{BranchSegment, BranchTip, Layer, Point, QuadCurve};

/// Recursion stops at this depth; segments themselves reach depth 2 at most.
pub const MAX_DEPTH: u32 = 3;
/// Recursion stops once a branch would be shorter than this.
pub const MIN_SEGMENT_LENGTH: f64 = 8.0;
/// Probability that a ring-2+ node splits into two children instead of one.
pub const SPLIT_CHANCE: f64 = 0.8;

const PAIR_SINGLE_ANGLES: [f64; 1] = [0.0];
const PAIR_DOUBLE_ANGLES: [f64; 2] = [-55.0, 55.0];
const PAIR_WOBBLE: f64 = 4.0;
const FIRST_RING_ANGLES: [f64; 3] = [-60.0, 0.0, 60.0];
const FIRST_RING_WOBBLE: f64 = 10.0;

/// Segments and tip candidates produced by a builder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BranchGrowth {
    pub segments: Vec<BranchSegment>,
    pub tips: Vec<BranchTip>,
}

/// Initial branch length for a given bloom.
pub fn initial_length(bloom: f64) -> f64 {
    38.0 + bloom * 18.0
}

/// Pairwise builder for 1 or 2 flowers; `flower_count <= 0` grows nothing.
///
/// Per branch: an angle wobble in `[-4, 4]`, then control-point jitter in
/// `[-3, 3]` (x) and `[-2, 2]` (y).
pub fn build_pairwise(
    start: Point,
    flower_count: i32,
    length: f64,
    rng: &mut BloomRng,
) -> BranchGrowth {
    let mut growth = BranchGrowth::default();
    let base_angles: &[f64] = match flower_count {
        n if n <= 0 => return growth,
        1 => &PAIR_SINGLE_ANGLES,
        _ => &PAIR_DOUBLE_ANGLES,
    };

    for &base_angle in base_angles {
        let angle = base_angle + rng.range(-PAIR_WOBBLE, PAIR_WOBBLE);
        let end = start.advance(angle, length);
        let control = Point::new(
            start.x + (end.x - start.x) * 0.4 + rng.range(-3.0, 3.0),
            start.y - length * 0.45 + rng.range(-2.0, 2.0),
        );

        growth.segments.push(BranchSegment {
            curve: QuadCurve {
                start,
                control,
                end,
            },
            depth: 0,
            layer: Layer::Branches,
        });
        growth.tips.push(BranchTip {
            position: end,
            depth: 0,
            angle,
        });
    }

    growth
}

/// Cluster builder: recursive growth straight up from `start`.
pub fn build_cluster(start: Point, bloom: f64, rng: &mut BloomRng) -> BranchGrowth {
    let mut growth = BranchGrowth::default();
    grow(&mut growth, rng, start, 0.0, initial_length(bloom), 0);
    growth
}

fn grow(
    growth: &mut BranchGrowth,
    rng: &mut BloomRng,
    start: Point,
    angle: f64,
    length: f64,
    depth: u32,
) {
    if depth >= MAX_DEPTH || length < MIN_SEGMENT_LENGTH {
        return;
    }

    let end = start.advance(angle, length);
    let control = Point::new(
        start.x + (end.x - start.x) * 0.4 + rng.range(-5.0, 5.0),
        start.y - length * 0.5 + rng.range(-3.0, 3.0),
    );
    growth.segments.push(BranchSegment {
        curve: QuadCurve {
            start,
            control,
            end,
        },
        depth,
        layer: Layer::Branches,
    });
    growth.tips.push(BranchTip {
        position: end,
        depth,
        angle,
    });

    let (child_angles, child_length) = if depth == 0 {
        let angles: Vec<f64> = FIRST_RING_ANGLES
            .iter()
            .map(|a| a + rng.range(-FIRST_RING_WOBBLE, FIRST_RING_WOBBLE))
            .collect();
        (angles, length * rng.range(0.65, 0.8))
    } else {
        let children = if rng.chance(SPLIT_CHANCE) { 2 } else { 1 };
        let child_length = length * rng.range(0.55, 0.75);
        let spread = 38.0 + rng.range(0.0, 10.0);
        let angles: Vec<f64> = (0..children)
            .map(|i| {
                let side = if i == 0 { 1.0 } else { -1.0 };
                angle + spread * side * (0.7 + rng.range(0.0, 0.3))
            })
            .collect();
        (angles, child_length)
    };

    for child_angle in child_angles {
        grow(growth, rng, end, child_angle, child_length, depth + 1);
    }
}
