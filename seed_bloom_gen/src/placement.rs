// Flower placer for cluster mode.
//
// Chooses flower anchors among branch tips so that flowers do not overlap:
//
// 1. Greedy pass. Tips are ordered top-first (smallest y), then by horizontal
//    distance from the center, then by a random tie-break. Walking that
//    order, a tip is accepted at full weight whenever it is at least
//    `min_separation` away from every flower accepted so far.
// 2. Fallback pass, only while short. A bounded number of attempts cycles
//    through the ordered tips and tries a few jittered offset points around
//    each; the first offset far enough from the accepted set is taken at a
//    reduced weight. Offsets are only checked against flowers accepted
//    before them.
//
// The attempt budget is finite, so the result may hold fewer flowers than
// requested. That under-fill is expected behavior, not an error.
//
// Accepted positions are finally ordered by their clockwise angle from
// vertical around the center point, which gives renderers a stable left-to-
// right reveal order.

use crate::config::PlacementParams;
use crate::prng::BloomRng;
use crate::types::{BranchTip, FALLBACK_WEIGHT, FlowerPosition, PRIMARY_WEIGHT, Point};
use std::cmp::Ordering;
use tracing::debug;

/// Clockwise angle of `p` from straight up around `center`, in `[0, 360)`.
pub fn angle_from_center(center: Point, p: Point) -> f64 {
    (p.x - center.x)
        .atan2(center.y - p.y)
        .to_degrees()
        .rem_euclid(360.0)
}

/// Sort positions by [`angle_from_center`]. Stable for equal angles.
pub fn sort_clockwise(positions: &mut [FlowerPosition], center: Point) {
    positions.sort_by(|a, b| {
        angle_from_center(center, a.position)
            .partial_cmp(&angle_from_center(center, b.position))
            .unwrap_or(Ordering::Equal)
    });
}

fn clears_all(candidate: Point, accepted: &[FlowerPosition], min_separation: f64) -> bool {
    accepted
        .iter()
        .all(|p| candidate.distance(p.position) >= min_separation)
}

/// Select up to `flower_count` separated anchors from `tips`.
///
/// Draws one tie-break value per tip (in input order) whenever there is
/// anything to place, then up to `fallback_tries` angle draws per fallback
/// attempt.
pub fn place_flowers(
    tips: &[BranchTip],
    flower_count: i32,
    center: Point,
    params: &PlacementParams,
    rng: &mut BloomRng,
) -> Vec<FlowerPosition> {
    if tips.is_empty() || flower_count <= 0 {
        return Vec::new();
    }
    let target = flower_count as usize;

    // Tie-break keys are drawn in input order, before sorting.
    let mut ordered: Vec<(BranchTip, f64)> = tips
        .iter()
        .map(|&tip| (tip, rng.range(0.0, 0.1)))
        .collect();
    ordered.sort_by(|(a, ka), (b, kb)| {
        let by_height = a.position.y.partial_cmp(&b.position.y);
        let by_offset = (a.position.x - center.x)
            .abs()
            .partial_cmp(&(b.position.x - center.x).abs());
        by_height
            .unwrap_or(Ordering::Equal)
            .then(by_offset.unwrap_or(Ordering::Equal))
            .then(ka.partial_cmp(kb).unwrap_or(Ordering::Equal))
    });
    let ordered: Vec<BranchTip> = ordered.into_iter().map(|(tip, _)| tip).collect();

    let mut positions: Vec<FlowerPosition> = Vec::with_capacity(target.min(tips.len()));
    for tip in &ordered {
        if positions.len() >= target {
            break;
        }
        if clears_all(tip.position, &positions, params.min_separation) {
            positions.push(FlowerPosition {
                position: tip.position,
                angle: tip.angle,
                weight: PRIMARY_WEIGHT,
            });
        }
    }
    let primary = positions.len();

    let budget = target.saturating_mul(params.attempt_multiplier as usize);
    let mut attempts = 0;
    while positions.len() < target && attempts < budget {
        attempts += 1;
        let tip = ordered[attempts % ordered.len()];
        for _ in 0..params.fallback_tries {
            let theta = tip.angle.to_radians()
                + rng
                    .range(-params.fallback_spread_deg, params.fallback_spread_deg)
                    .to_radians();
            let candidate = Point::new(
                tip.position.x + params.fallback_radius * theta.cos(),
                tip.position.y - params.fallback_radius * theta.sin(),
            );
            if clears_all(candidate, &positions, params.min_separation) {
                positions.push(FlowerPosition {
                    position: candidate,
                    angle: tip.angle,
                    weight: FALLBACK_WEIGHT,
                });
                break;
            }
        }
    }

    debug!(
        tips = tips.len(),
        requested = target,
        primary,
        fallback = positions.len() - primary,
        attempts,
        "flower placement finished"
    );
    if positions.len() < target {
        debug!(
            requested = target,
            placed = positions.len(),
            "flower placement under-filled"
        );
    }

    positions.truncate(target);
    sort_clockwise(&mut positions, center);
    positions
}
