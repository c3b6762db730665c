// Stem builder: one short, subtly uneven segment rising from the base point.

use crate::prng::BloomRng;
use crate::types::{Layer, Point, StemSegment};

/// Build the stem from `base`, rising `rise` units.
///
/// Takes two draws: a midpoint bend in `[-3, 3]` that is consumed but not
/// drawn, then the endpoint's lateral jitter in `[-2, 2]`. The vertical
/// extent is exactly `rise`.
pub fn build_stem(base: Point, rise: f64, rng: &mut BloomRng) -> StemSegment {
    let _bend = rng.range(-3.0, 3.0);
    let end_x = base.x + rng.range(-2.0, 2.0);
    StemSegment {
        start: base,
        end: Point::new(end_x, base.y - rise),
        layer: Layer::Stem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_rises_fixed_distance_with_small_jitter() {
        let mut rng = BloomRng::new(1234);
        let base = Point::new(160.0, 210.0);
        let stem = build_stem(base, 18.0, &mut rng);
        assert_eq!(stem.start, base);
        assert_eq!(stem.end.y, 192.0);
        assert!((stem.end.x - 160.0).abs() <= 2.0);
        assert_eq!(stem.layer, Layer::Stem);
    }

    #[test]
    fn stem_consumes_two_draws() {
        let mut rng = BloomRng::new(99);
        let mut reference = rng.clone();
        build_stem(Point::new(0.0, 0.0), 10.0, &mut rng);
        reference.next_state();
        reference.next_state();
        assert_eq!(rng, reference);
    }
}
