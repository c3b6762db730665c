// seed_bloom_gen: deterministic plant composition pipeline.
//
// Turns a seed and a few continuous parameters into a stem, branches, and
// flowers expressed as geometric primitives with per-element animation
// timing. The crate is pure computation: no I/O during generation, no global
// state, no system time. Renderers live in `seed_bloom_graphics`.
//
// Module overview:
// - `pipeline.rs`:  `generate` / `generate_with_config`, stage ordering.
// - `params.rs`:    GenerationParameters, Seed, caller-side validation.
// - `style.rs`:     Display style bucket, palette selection, color overrides.
// - `stem.rs`:      The short rising stem.
// - `branch.rs`:    Pairwise and recursive cluster branch builders.
// - `placement.rs`: Non-overlapping flower anchor selection (cluster mode).
// - `flower.rs`:    Flower sizing/coloring and petal curve synthesis.
// - `compose.rs`:   Global scale/recenter and animation timeline → Composition.
// - `config.rs`:    GeneratorConfig: palettes, layout, placement, timing.
// - `types.rs`:     Points, curves, segments, tips, positions, descriptors.
// - `error.rs`:     BloomError.
// - `prng`:         Re-exported from `seed_bloom_prng`, the seeded stream.
//
// **Critical constraint: determinism.** A composition is a pure function of
// `(GenerationParameters, GeneratorConfig)`. Each call owns a private
// `BloomRng`; compositions may be generated on parallel threads freely.

pub mod branch;
pub mod compose;
pub mod config;
pub mod error;
pub mod flower;
pub mod params;
pub mod pipeline;
pub mod placement;
pub use seed_bloom_prng as prng;
pub mod stem;
pub mod style;
pub mod types;

pub use compose::Composition;
pub use config::GeneratorConfig;
pub use error::BloomError;
pub use params::{GenerationParameters, Seed};
pub use pipeline::{generate, generate_with_config};
