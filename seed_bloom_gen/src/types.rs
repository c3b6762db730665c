// Geometric primitives shared across the pipeline.
//
// Defines points, quadratic curves, and the intermediate structures each
// stage hands to the next: stem and branch segments from the builders, tip
// candidates from branch growth, accepted flower positions from the placer,
// and flower descriptors from the synthesizer. All types derive `Serialize`
// and `Deserialize` so the finished `Composition` can be written out as a
// document.
//
// Coordinates are in canvas units with y pointing down. Angles are in degrees
// measured clockwise from straight up (0 = up, 90 = right), matching how the
// branch builders rotate their length vectors.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Points and curves
// ---------------------------------------------------------------------------

/// A position on the logical canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// The point `length` units away along `angle_deg` (0 = up, clockwise).
    pub fn advance(self, angle_deg: f64, length: f64) -> Self {
        let rad = angle_deg.to_radians();
        Self::new(self.x + length * rad.sin(), self.y - length * rad.cos())
    }

    /// Uniform scale about `focal`.
    pub fn scaled_about(self, focal: Self, factor: f64) -> Self {
        Self::new(
            (self.x - focal.x) * factor + focal.x,
            (self.y - focal.y) * factor + focal.y,
        )
    }
}

/// A quadratic Bézier curve: enough to reproduce a smooth branch path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuadCurve {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl QuadCurve {
    pub fn scaled_about(self, focal: Point, factor: f64) -> Self {
        Self {
            start: self.start.scaled_about(focal, factor),
            control: self.control.scaled_about(focal, factor),
            end: self.end.scaled_about(focal, factor),
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline intermediates
// ---------------------------------------------------------------------------

/// Which presentation layer an element belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Stem,
    Branches,
    Flowers,
}

/// The short rising stem at the base point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StemSegment {
    pub start: Point,
    pub end: Point,
    pub layer: Layer,
}

/// One branch: a quadratic curve plus its growth ring (0 = first ring).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchSegment {
    pub curve: QuadCurve,
    pub depth: u32,
    pub layer: Layer,
}

impl BranchSegment {
    pub fn start(&self) -> Point {
        self.curve.start
    }

    pub fn end(&self) -> Point {
        self.curve.end
    }
}

/// A candidate flower anchor at a branch endpoint.
///
/// Every node of the growth produces one, not only the leaves.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchTip {
    pub position: Point,
    pub depth: u32,
    /// Outward angle of the branch that ended here, in degrees.
    pub angle: f64,
}

/// Weight of a flower placed directly on a tip.
pub const PRIMARY_WEIGHT: f64 = 1.0;
/// Weight of a flower placed on a jittered offset around a tip.
pub const FALLBACK_WEIGHT: f64 = 0.9;

/// An accepted flower anchor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowerPosition {
    pub position: Point,
    /// Angle of the tip the position came from, in degrees.
    pub angle: f64,
    /// [`PRIMARY_WEIGHT`] or [`FALLBACK_WEIGHT`]; also a size discount.
    pub weight: f64,
}

/// A fully sized and colored flower, ready to be laid out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowerDescriptor {
    pub center: Point,
    pub petal_count: u32,
    pub petal_length: f64,
    pub petal_width: f64,
    pub center_radius: f64,
    /// Rotation offset of the first petal, in degrees.
    pub rotation: f64,
    pub weight: f64,
    pub color: String,
}
