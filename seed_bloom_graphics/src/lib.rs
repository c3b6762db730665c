// seed_bloom_graphics: renderers for finished compositions.
//
// Consumes an immutable `Composition` from `seed_bloom_gen` and produces
// either a standalone SVG image or the JSON document an animated front end
// plays back. Renderers keep element order and identity (`stem-0`,
// `branch-N`, `flower-N`) and apply the composition's resolved colors; they
// never re-run or alter geometry.
//
// Module overview:
// - `paths.rs`:    SVG path data for branch curves and petals.
// - `svg.rs`:      Layered SVG output, optional `data-delay`/`data-duration`.
// - `document.rs`: FlowerDocument, the serde front-end document.

pub mod document;
pub mod paths;
pub mod svg;
