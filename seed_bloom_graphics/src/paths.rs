// SVG path data for composition geometry.
//
// Coordinates are printed with two decimals, which is plenty for a 320×240
// logical canvas and keeps documents compact.

use seed_bloom_gen::flower::PetalCurve;
use seed_bloom_gen::types::QuadCurve;

/// `M sx sy Q cx cy ex ey` for a branch curve.
pub fn quad_path_data(curve: &QuadCurve) -> String {
    format!(
        "M {:.2} {:.2} Q {:.2} {:.2} {:.2} {:.2}",
        curve.start.x,
        curve.start.y,
        curve.control.x,
        curve.control.y,
        curve.end.x,
        curve.end.y
    )
}

/// Closed petal outline: out to the tip along one side, back along the other.
pub fn petal_path_data(petal: &PetalCurve) -> String {
    format!(
        "M {:.2} {:.2} Q {:.2} {:.2} {:.2} {:.2} Q {:.2} {:.2} {:.2} {:.2}",
        petal.base.x,
        petal.base.y,
        petal.left_control.x,
        petal.left_control.y,
        petal.tip.x,
        petal.tip.y,
        petal.right_control.x,
        petal.right_control.y,
        petal.base.x,
        petal.base.y
    )
}
