// CLI entry point for Seed Bloom.
//
// Collects generation parameters from flags, runs the pipeline once, and
// either writes an SVG file or prints the front-end JSON document to stdout.
// Logging goes to stderr; `RUST_LOG` overrides the default filter.
//
// Usage:
//   bloom [OPTIONS]
//     --seed <TEXT>       Seed text (default: blooming-42)
//     --bloom <F>         Growth in [0, 1] (default: 0.6, clamped)
//     --flowers <N>       Requested flowers (default: 5)
//     --message <TEXT>    Accompanying message; its length biases the style
//     --petals <N>        Petals per flower (default: 5)
//     --color <C>         Single flower color (hex or named)
//     --colors <C,C,..>   Per-flower colors, cycled
//     --bg <C>            Background color
//     --output <PATH>     SVG output path (default: flower.svg)
//     --json              Print the JSON document instead of writing SVG
//     --animate           Attach data-delay/data-duration to SVG elements
//     --config <PATH>     JSON generator config
//     --verbose           Debug logging

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use seed_bloom_gen::style::named_color;
use seed_bloom_gen::{GenerationParameters, GeneratorConfig, Seed, generate_with_config};
use seed_bloom_graphics::document::FlowerDocument;
use seed_bloom_graphics::svg::{SvgOptions, to_svg};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bloom")]
#[command(version)]
#[command(about = "Grow a seeded flower composition as SVG or JSON", long_about = None)]
struct Cli {
    /// Seed text; the same seed always grows the same plant
    #[arg(long, default_value = "blooming-42")]
    seed: String,

    /// Growth/maturity in [0, 1]
    #[arg(long, default_value = "0.6", allow_negative_numbers = true)]
    bloom: f64,

    /// Number of flowers to request
    #[arg(long, default_value = "5", allow_negative_numbers = true)]
    flowers: i32,

    /// Accompanying message (only its length is used)
    #[arg(long, default_value = "")]
    message: String,

    /// Petals per flower
    #[arg(long, default_value = "5")]
    petals: u32,

    /// Single flower color
    #[arg(long)]
    color: Option<String>,

    /// Comma-separated per-flower colors
    #[arg(long)]
    colors: Option<String>,

    /// Background color
    #[arg(long)]
    bg: Option<String>,

    /// SVG output path
    #[arg(short, long, default_value = "flower.svg")]
    output: PathBuf,

    /// Print the JSON document to stdout instead of writing SVG
    #[arg(long)]
    json: bool,

    /// Include animation delays in the SVG
    #[arg(long)]
    animate: bool,

    /// JSON generator config overriding palettes, layout and timing
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    let params = build_params(&cli);
    params.validate().context("invalid generation parameters")?;

    let composition = generate_with_config(&params, &config);

    if cli.json {
        let doc = FlowerDocument::from_composition(&composition);
        println!("{}", doc.to_json_pretty()?);
        return Ok(());
    }

    let svg = to_svg(
        &composition,
        &config.colors,
        SvgOptions {
            animate: cli.animate,
        },
    )
    .context("rendering svg")?;
    std::fs::write(&cli.output, svg)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    info!(
        path = %cli.output.display(),
        flowers = composition.flowers.len(),
        branches = composition.branches.len(),
        "wrote svg"
    );
    println!("Saved: {}", cli.output.display());
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn build_params(cli: &Cli) -> GenerationParameters {
    let bloom = if cli.bloom.is_nan() {
        warn!("bloom is NaN, using 0.6");
        0.6
    } else {
        let clamped = cli.bloom.clamp(0.0, 1.0);
        if clamped != cli.bloom {
            warn!(requested = cli.bloom, used = clamped, "bloom clamped to [0, 1]");
        }
        clamped
    };

    let flower_colors = cli.colors.as_deref().map(parse_color_list);

    GenerationParameters {
        seed: Seed::Text(cli.seed.clone()),
        bloom,
        flower_count: cli.flowers,
        petal_count: cli.petals,
        flower_colors: flower_colors.filter(|list| !list.is_empty()),
        flower_color: cli.color.as_deref().map(resolve_color),
        background_color: cli.bg.as_deref().map(resolve_color),
        message_length: cli.message.chars().count(),
    }
}

/// Map a named bloom color to its hex value; anything else passes through.
fn resolve_color(value: &str) -> String {
    named_color(value)
        .map(str::to_string)
        .unwrap_or_else(|| value.trim().to_string())
}

/// Split a comma-separated color list, dropping blank entries.
fn parse_color_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(resolve_color)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("bloom").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_match_reference_run() {
        let params = build_params(&cli(&[]));
        assert_eq!(params, GenerationParameters::default());
    }

    #[test]
    fn bloom_is_clamped() {
        assert_eq!(build_params(&cli(&["--bloom", "1.7"])).bloom, 1.0);
        assert_eq!(build_params(&cli(&["--bloom", "-0.5"])).bloom, 0.0);
    }

    #[test]
    fn numeric_seed_stays_text() {
        let params = build_params(&cli(&["--seed", "42"]));
        assert_eq!(params.seed, Seed::Text("42".into()));
    }

    #[test]
    fn message_length_counts_chars() {
        let params = build_params(&cli(&["--message", "꽃이 피다"]));
        assert_eq!(params.message_length, 5);
    }

    #[test]
    fn color_lists_drop_blanks_and_resolve_names() {
        assert_eq!(
            parse_color_list("pink, ,#123456,,Mint"),
            vec!["#F8B4C4", "#123456", "#B5EAD7"]
        );
        let params = build_params(&cli(&["--colors", " , "]));
        assert_eq!(params.flower_colors, None);
    }

    #[test]
    fn single_colors_resolve_names() {
        let params = build_params(&cli(&["--color", "coral", "--bg", "#000"]));
        assert_eq!(params.flower_color.as_deref(), Some("#F08080"));
        assert_eq!(params.background_color.as_deref(), Some("#000"));
    }
}
