// Top-level generation entry points.
//
// Runs every stage in its fixed order against one private `BloomRng`:
//
//   style (no draws) → branches → placement → flowers → stem → compositor
//
// Branch strategy is selected by the raw requested flower count: below 3 the
// pairwise builder with one flower per tip, otherwise the cluster builder
// followed by the flower placer. The stem's two jitter draws are taken last
// so the branch/placement/flower sequence starts directly at the seeded
// state.

use crate::branch::{build_cluster, build_pairwise, initial_length};
use crate::compose::{Composition, CompositionSource, RawGeometry, compose};
use crate::config::GeneratorConfig;
use crate::flower::synthesize_flowers;
use crate::params::GenerationParameters;
use crate::placement::{place_flowers, sort_clockwise};
use crate::prng::BloomRng;
use crate::stem::build_stem;
use crate::style::{derive_style, resolve_style};
use crate::types::{FlowerPosition, PRIMARY_WEIGHT};
use tracing::debug;

/// Requested flower counts from this value up use the cluster builder.
pub const CLUSTER_THRESHOLD: i32 = 3;

/// Generate a composition with the stock configuration.
pub fn generate(params: &GenerationParameters) -> Composition {
    generate_with_config(params, &GeneratorConfig::default())
}

/// Generate a composition. Pure and deterministic in `(params, config)`.
///
/// Expects `params.validate()` and `config.validate()` to have passed.
pub fn generate_with_config(
    params: &GenerationParameters,
    config: &GeneratorConfig,
) -> Composition {
    let seed_int = params.seed.to_int();
    let mut rng = BloomRng::new(seed_int);

    let derived = derive_style(seed_int, params.bloom, params.message_length, &config.palettes);
    let style = resolve_style(params, &derived);

    let base = config.layout.base_point;
    let (growth, positions) = if params.flower_count < CLUSTER_THRESHOLD {
        let growth = build_pairwise(
            base,
            params.flower_count,
            initial_length(params.bloom),
            &mut rng,
        );
        let mut positions: Vec<FlowerPosition> = growth
            .tips
            .iter()
            .map(|tip| FlowerPosition {
                position: tip.position,
                angle: tip.angle,
                weight: PRIMARY_WEIGHT,
            })
            .collect();
        sort_clockwise(&mut positions, base);
        (growth, positions)
    } else {
        let growth = build_cluster(base, params.bloom, &mut rng);
        let positions = place_flowers(
            &growth.tips,
            params.flower_count,
            base,
            &config.placement,
            &mut rng,
        );
        (growth, positions)
    };

    let flowers = synthesize_flowers(
        &positions,
        params.petal_count,
        &style.flower_colors,
        params.bloom,
        &mut rng,
    );
    let stem = build_stem(base, config.layout.stem_rise, &mut rng);

    debug!(
        seed = %params.seed,
        flower_type = style.flower_type.as_str(),
        segments = growth.segments.len(),
        tips = growth.tips.len(),
        flowers = flowers.len(),
        "composition generated"
    );

    let source = CompositionSource {
        seed: params.seed.to_string(),
        bloom: params.bloom,
        requested_flowers: params.flower_count,
        petal_count: params.petal_count,
        message_length: params.message_length,
    };
    compose(
        source,
        style,
        RawGeometry {
            stem,
            branches: growth.segments,
            flowers,
        },
        config,
    )
}
