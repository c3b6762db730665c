// Layered SVG renderer.
//
// Emits one `<svg>` with a background rect and three groups in fixed order:
// `layer-stem` (a round-capped line), `layer-branches` (round-capped
// quadratic paths), and `layer-flowers` (one group per flower holding its
// petal paths and center disc). With `animate`, every element carries
// `data-delay` and `data-duration` attributes in milliseconds so a front end
// can replay the growth.

use crate::paths::{petal_path_data, quad_path_data};
use seed_bloom_gen::Composition;
use seed_bloom_gen::config::StrokeColors;
use seed_bloom_gen::flower::petal_curves;
use std::fmt::{self, Write};

const STEM_WIDTH: f64 = 2.5;
const BRANCH_WIDTH: f64 = 1.5;
const PETAL_OPACITY: f64 = 0.9;

/// Rendering switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SvgOptions {
    /// Attach `data-delay` / `data-duration` to each element.
    pub animate: bool,
}

/// Render a composition as an SVG string.
pub fn to_svg(
    composition: &Composition,
    strokes: &StrokeColors,
    options: SvgOptions,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_svg(&mut out, composition, strokes, options)?;
    Ok(out)
}

/// Render a composition into any `fmt::Write` sink.
pub fn write_svg(
    out: &mut impl Write,
    composition: &Composition,
    strokes: &StrokeColors,
    options: SvgOptions,
) -> fmt::Result {
    let c = composition;
    let timing = |delay: u32, duration: u32| {
        if options.animate {
            format!(" data-delay=\"{delay}\" data-duration=\"{duration}\"")
        } else {
            String::new()
        }
    };

    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{}\" width=\"{}\" height=\"{}\">",
        c.viewport.view_box(),
        c.viewport.width,
        c.viewport.height
    )?;
    writeln!(
        out,
        "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        escape_attr(&c.style.background_color)
    )?;

    writeln!(out, "  <g id=\"layer-stem\" data-layer=\"stem\">")?;
    let stem = &c.stem.segment;
    writeln!(
        out,
        "    <line id=\"stem-0\" x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" \
         stroke=\"{}\" stroke-width=\"{STEM_WIDTH}\" stroke-linecap=\"round\"{}/>",
        stem.start.x,
        stem.start.y,
        stem.end.x,
        stem.end.y,
        escape_attr(&strokes.stem),
        timing(c.stem.delay, c.animation.stem_duration)
    )?;
    writeln!(out, "  </g>")?;

    writeln!(out, "  <g id=\"layer-branches\" data-layer=\"branches\">")?;
    for (i, branch) in c.branches.iter().enumerate() {
        writeln!(
            out,
            "    <path id=\"branch-{i}\" d=\"{}\" fill=\"none\" stroke=\"{}\" \
             stroke-width=\"{BRANCH_WIDTH}\" stroke-linecap=\"round\"{}/>",
            quad_path_data(&branch.segment.curve),
            escape_attr(&strokes.branch),
            timing(branch.delay, c.animation.branch_duration)
        )?;
    }
    writeln!(out, "  </g>")?;

    writeln!(out, "  <g id=\"layer-flowers\" data-layer=\"flowers\">")?;
    for (i, timed) in c.flowers.iter().enumerate() {
        let flower = &timed.flower;
        let color = if flower.color.is_empty() {
            escape_attr(&c.style.flower_color)
        } else {
            escape_attr(&flower.color)
        };
        let group_attrs = if options.animate {
            format!(
                " id=\"flower-{i}\"{}",
                timing(timed.delay, c.animation.flower_duration)
            )
        } else {
            String::new()
        };

        let mut parts: Vec<String> = petal_curves(flower)
            .iter()
            .map(|petal| {
                format!(
                    "<path d=\"{}\" fill=\"{color}\" opacity=\"{PETAL_OPACITY}\"/>",
                    petal_path_data(petal)
                )
            })
            .collect();
        parts.push(format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.1}\" fill=\"{color}\"/>",
            flower.center.x, flower.center.y, flower.center_radius
        ));
        writeln!(out, "    <g{group_attrs}>{}</g>", parts.join("\n    "))?;
    }
    writeln!(out, "  </g>")?;
    write!(out, "</svg>")
}

/// Escape a value for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_bloom_gen::{GenerationParameters, generate};

    fn composition(flower_count: i32) -> Composition {
        generate(&GenerationParameters {
            flower_count,
            ..GenerationParameters::default()
        })
    }

    fn render(c: &Composition, animate: bool) -> String {
        to_svg(c, &StrokeColors::default(), SvgOptions { animate }).unwrap()
    }

    #[test]
    fn svg_has_layers_in_order() {
        let svg = render(&composition(5), false);
        assert!(svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 320 240\""
        ));
        assert!(svg.ends_with("</svg>"));
        let stem = svg.find("layer-stem").unwrap();
        let branches = svg.find("layer-branches").unwrap();
        let flowers = svg.find("layer-flowers").unwrap();
        assert!(stem < branches && branches < flowers);
        assert!(svg.contains("fill=\"#fff5f5\""));
        assert!(svg.contains("stroke=\"#5a8f5a\""));
    }

    #[test]
    fn element_counts_match_composition() {
        let c = composition(5);
        let svg = render(&c, false);
        let branch_paths = svg.matches("<path id=\"branch-").count();
        let discs = svg.matches("<circle").count();
        let petals = svg.matches("opacity=\"0.9\"").count();
        assert_eq!(branch_paths, c.branches.len());
        assert_eq!(discs, c.flowers.len());
        assert_eq!(petals, c.flowers.len() * 5);
    }

    #[test]
    fn static_svg_has_no_timing() {
        let svg = render(&composition(3), false);
        assert!(!svg.contains("data-delay"));
        assert!(!svg.contains("id=\"flower-0\""));
    }

    #[test]
    fn animated_svg_carries_delays() {
        let c = composition(5);
        let svg = render(&c, true);
        assert!(svg.contains("id=\"stem-0\""));
        assert!(svg.contains("data-delay=\"0\" data-duration=\"600\""));
        assert!(svg.contains("data-delay=\"500\" data-duration=\"500\""));
        let first_flower = format!(
            "<g id=\"flower-0\" data-delay=\"{}\" data-duration=\"400\">",
            c.timeline.flowers.start
        );
        assert!(svg.contains(&first_flower));
    }

    #[test]
    fn empty_composition_still_renders_stem() {
        let svg = render(&composition(0), false);
        assert!(svg.contains("<line id=\"stem-0\""));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn attribute_values_are_escaped() {
        assert_eq!(escape_attr("a\"<b>&"), "a&quot;&lt;b&gt;&amp;");
    }
}
