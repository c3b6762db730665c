// Flower synthesizer and petal curve synthesis.
//
// Base petal dimensions are drawn once per composition and shared by every
// flower, scaled by a bloom-driven size factor. Each flower then gets its own
// rotation offset and center-disc radius, and is discounted by its placement
// weight so fallback flowers come out slightly smaller. Colors cycle through
// the resolved color list by flower index.
//
// A petal is a closed teardrop: two mirrored quadratic curves from the flower
// center out to the petal tip and back, their control points pushed sideways
// by the petal width. A flower with N petals spaces them `360 / N` degrees
// apart starting at its rotation offset.

use crate::prng::BloomRng;
use crate::types::{FlowerDescriptor, FlowerPosition, Point};

/// Global flower size multiplier for a given bloom.
pub fn size_factor(bloom: f64) -> f64 {
    0.85 + bloom * 0.3
}

/// Size, rotate, and color a flower at every accepted position.
///
/// Draws base length then base width (always, even with no positions), then
/// per flower a rotation in `[-10, 10]` followed by a disc radius draw.
pub fn synthesize_flowers(
    positions: &[FlowerPosition],
    petal_count: u32,
    colors: &[String],
    bloom: f64,
    rng: &mut BloomRng,
) -> Vec<FlowerDescriptor> {
    let factor = size_factor(bloom);
    let base_length = (12.0 + rng.range(0.0, 4.0)) * factor;
    let base_width = (4.0 + rng.range(0.0, 2.0)) * factor;

    positions
        .iter()
        .enumerate()
        .map(|(i, pos)| {
            let rotation = rng.range(-10.0, 10.0);
            let color = if colors.is_empty() {
                String::new()
            } else {
                colors[i % colors.len()].clone()
            };
            let center_radius = (3.0 + rng.range(0.0, 1.5)) * pos.weight * factor;
            FlowerDescriptor {
                center: pos.position,
                petal_count,
                petal_length: base_length * pos.weight,
                petal_width: base_width * pos.weight,
                center_radius,
                rotation,
                weight: pos.weight,
                color,
            }
        })
        .collect()
}

/// One closed petal: center → `left_control` → `tip` → `right_control` → center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PetalCurve {
    pub base: Point,
    pub left_control: Point,
    pub tip: Point,
    pub right_control: Point,
}

/// Build one petal around `center`, pointing `angle_deg` from straight up.
pub fn petal_curve(center: Point, angle_deg: f64, length: f64, width: f64) -> PetalCurve {
    let (sin_a, cos_a) = angle_deg.to_radians().sin_cos();
    let rotate = |x: f64, y: f64| {
        Point::new(
            center.x + x * cos_a - y * sin_a,
            center.y + x * sin_a + y * cos_a,
        )
    };
    let half = width / 2.0;
    PetalCurve {
        base: rotate(0.0, 0.0),
        left_control: rotate(-half * 1.2, -length * 0.5),
        tip: rotate(0.0, -length),
        right_control: rotate(half * 1.2, -length * 0.5),
    }
}

/// All petals of a flower, evenly spaced from its rotation offset.
///
/// A flower with zero petals has no petal curves.
pub fn petal_curves(flower: &FlowerDescriptor) -> Vec<PetalCurve> {
    if flower.petal_count == 0 {
        return Vec::new();
    }
    let step = 360.0 / f64::from(flower.petal_count);
    (0..flower.petal_count)
        .map(|i| {
            petal_curve(
                flower.center,
                flower.rotation + f64::from(i) * step,
                flower.petal_length,
                flower.petal_width,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FALLBACK_WEIGHT, PRIMARY_WEIGHT};

    fn position(x: f64, y: f64, weight: f64) -> FlowerPosition {
        FlowerPosition {
            position: Point::new(x, y),
            angle: 0.0,
            weight,
        }
    }

    #[test]
    fn base_dimensions_are_drawn_even_without_flowers() {
        let mut rng = BloomRng::new(12);
        let mut reference = rng.clone();
        let flowers = synthesize_flowers(&[], 5, &["#fff".into()], 0.5, &mut rng);
        assert!(flowers.is_empty());
        reference.next_state();
        reference.next_state();
        assert_eq!(rng, reference);
    }

    #[test]
    fn flowers_share_petal_dimensions_by_weight() {
        let positions = [
            position(10.0, 10.0, PRIMARY_WEIGHT),
            position(50.0, 10.0, FALLBACK_WEIGHT),
        ];
        let mut rng = BloomRng::new(12);
        let flowers = synthesize_flowers(&positions, 6, &["#fff".into()], 0.6, &mut rng);
        assert_eq!(flowers.len(), 2);
        assert!((flowers[1].petal_length - flowers[0].petal_length * 0.9).abs() < 1e-12);
        assert!((flowers[1].petal_width - flowers[0].petal_width * 0.9).abs() < 1e-12);
        assert!(flowers.iter().all(|f| f.petal_count == 6));
    }

    #[test]
    fn dimensions_stay_in_range() {
        let positions = [position(0.0, 0.0, PRIMARY_WEIGHT)];
        for seed in 0..100 {
            let mut rng = BloomRng::new(seed);
            let f = &synthesize_flowers(&positions, 5, &["#fff".into()], 1.0, &mut rng)[0];
            let factor = size_factor(1.0);
            assert!((12.0 * factor..=16.0 * factor).contains(&f.petal_length));
            assert!((4.0 * factor..=6.0 * factor).contains(&f.petal_width));
            assert!((3.0 * factor..=4.5 * factor).contains(&f.center_radius));
            assert!((-10.0..=10.0).contains(&f.rotation));
        }
    }

    #[test]
    fn colors_cycle_by_index() {
        let positions: Vec<_> = (0..5).map(|i| position(i as f64, 0.0, 1.0)).collect();
        let colors = vec!["#a".to_string(), "#b".to_string()];
        let mut rng = BloomRng::new(1);
        let flowers = synthesize_flowers(&positions, 5, &colors, 0.5, &mut rng);
        let got: Vec<&str> = flowers.iter().map(|f| f.color.as_str()).collect();
        assert_eq!(got, vec!["#a", "#b", "#a", "#b", "#a"]);
    }

    #[test]
    fn upright_petal_tip_is_above_center() {
        let petal = petal_curve(Point::new(100.0, 100.0), 0.0, 12.0, 4.0);
        assert_eq!(petal.base, Point::new(100.0, 100.0));
        assert!((petal.tip.x - 100.0).abs() < 1e-12);
        assert!((petal.tip.y - 88.0).abs() < 1e-12);
        assert!((petal.left_control.x - 97.6).abs() < 1e-12);
        assert!((petal.right_control.x - 102.4).abs() < 1e-12);
        assert!((petal.left_control.y - 94.0).abs() < 1e-12);
    }

    #[test]
    fn petals_are_evenly_spaced() {
        let flower = FlowerDescriptor {
            center: Point::new(0.0, 0.0),
            petal_count: 4,
            petal_length: 10.0,
            petal_width: 3.0,
            center_radius: 3.0,
            rotation: 0.0,
            weight: 1.0,
            color: "#fff".into(),
        };
        let petals = petal_curves(&flower);
        assert_eq!(petals.len(), 4);
        for petal in &petals {
            assert!((petal.tip.distance(flower.center) - 10.0).abs() < 1e-9);
        }
        // Rotation by 90° per petal: second tip lies on the +x axis.
        assert!((petals[1].tip.x - 10.0).abs() < 1e-9);
        assert!(petals[1].tip.y.abs() < 1e-9);
    }

    #[test]
    fn zero_petals_yield_no_curves() {
        let flower = FlowerDescriptor {
            center: Point::new(0.0, 0.0),
            petal_count: 0,
            petal_length: 10.0,
            petal_width: 3.0,
            center_radius: 3.0,
            rotation: 0.0,
            weight: 1.0,
            color: "#fff".into(),
        };
        assert!(petal_curves(&flower).is_empty());
    }
}
