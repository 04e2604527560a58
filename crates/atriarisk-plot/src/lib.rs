//! atriarisk-plot — vertical gauge rendering for risk scores.
//!
//! A gauge places the score marker on a fixed vertical scale against
//! colour-banded decision zones. Band geometry, pole labels and the
//! annotation sentence all come from the score kind; the renderer itself
//! is model-agnostic.

use std::error::Error;
use std::path::Path;

use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use atriarisk_common::{AtriaError, BandLayout, Result, ScoreKind};

const WIDTH: u32 = 2100;
const HEIGHT: u32 = 1500;

const TEAL: RGBColor = RGBColor(0x3a, 0x8b, 0x8b);
const PLOT_BG: RGBColor = RGBColor(0xe7, 0xee, 0xe9);
const FRAME_BG: RGBColor = RGBColor(0x5b, 0x71, 0x73);
const POSITIVE_ZONE: RGBColor = RGBColor(0xff, 0xc1, 0x70);
const NEGATIVE_ZONE: RGBColor = RGBColor(0x9a, 0xde, 0x93);
const NEUTRAL_ZONE: RGBColor = RGBColor(0x80, 0x80, 0x80);

type Gauge<'a> = ChartContext<'a, BitMapBackend<'a>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Render a gauge for `score` into `<plot_dir>/graph_<index>.png` and
/// return the path relative to `static_root` (the prefix web clients use).
pub fn render_gauge(
    score: f64,
    kind: ScoreKind,
    plot_dir: &Path,
    index: &str,
    static_root: &Path,
) -> Result<String> {
    let file = plot_dir.join(format!("graph_{index}.png"));
    draw(&file, score, kind).map_err(|e| AtriaError::Render(e.to_string()))?;
    debug!(path = %file.display(), code = kind.code(), "gauge written");

    let rel = file.strip_prefix(static_root).unwrap_or(&file);
    Ok(rel.to_string_lossy().replace('\\', "/"))
}

fn draw(file: &Path, score: f64, kind: ScoreKind) -> std::result::Result<(), Box<dyn Error>> {
    // Baseline [-10, 10], stretched so the marker keeps a 2-unit margin.
    let y_min = (-10.0f64).min(score - 2.0);
    let y_max = 10.0f64.max(score + 2.0);

    let root = BitMapBackend::new(file, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&FRAME_BG)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(-0.5f64..0.5f64, y_min..y_max)?;
    chart.plotting_area().fill(&PLOT_BG)?;

    match kind.bands() {
        BandLayout::Neutral { lower, upper } => {
            band(&mut chart, lower, upper, NEUTRAL_ZONE.mix(0.2))?;
            band(&mut chart, upper, y_max, POSITIVE_ZONE.mix(0.3))?;
            band(&mut chart, y_min, lower, NEGATIVE_ZONE.mix(0.3))?;
            dashed_line(&mut chart, lower)?;
            dashed_line(&mut chart, upper)?;
        }
        BandLayout::Split { threshold } => {
            band(&mut chart, threshold, y_max, POSITIVE_ZONE.mix(0.3))?;
            band(&mut chart, y_min, threshold, NEGATIVE_ZONE.mix(0.3))?;
            dashed_line(&mut chart, threshold)?;
        }
    }

    // Pole labels in the upper and lower halves.
    let (upper_label, lower_label) = kind.pole_labels();
    let label_font = ("sans-serif", 36).into_font().color(&TEAL);
    chart.draw_series(std::iter::once(Text::new(
        upper_label.to_string(),
        (0.05, 6.0),
        label_font.clone(),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        lower_label.to_string(),
        (0.05, -7.0),
        label_font,
    )))?;

    // Marker line and square at the score.
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(-0.1, score), (0.1, score)],
        TEAL.stroke_width(4),
    )))?;
    chart.draw_series(std::iter::once(
        EmptyElement::at((0.0, score))
            + Rectangle::new([(-14, -14), (14, 14)], TEAL.filled())
            + Rectangle::new([(-14, -14), (14, 14)], BLACK.stroke_width(3)),
    ))?;

    // Score legend, top-right corner.
    let span = y_max - y_min;
    let legend_top = y_max - span * 0.04;
    let legend_bottom = y_max - span * 0.12;
    chart.draw_series(std::iter::once(Rectangle::new(
        [(0.22, legend_bottom), (0.48, legend_top)],
        FRAME_BG.filled(),
    )))?;
    chart.draw_series(std::iter::once(Rectangle::new(
        [(0.22, legend_bottom), (0.48, legend_top)],
        TEAL.stroke_width(4),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        format!("Score: {:.3}", score),
        (0.24, y_max - span * 0.075),
        ("sans-serif", 38).into_font().color(&WHITE),
    )))?;

    // Annotation sentence near the bottom of the scale.
    let annotation_style = TextStyle::from(("sans-serif", 42).into_font())
        .color(&TEAL)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series(std::iter::once(Text::new(
        kind.annotation().to_string(),
        (0.0, -9.5),
        annotation_style,
    )))?;

    root.present()?;
    Ok(())
}

fn band(
    chart: &mut Gauge<'_>,
    y0: f64,
    y1: f64,
    color: RGBAColor,
) -> std::result::Result<(), Box<dyn Error>> {
    chart.draw_series(std::iter::once(Rectangle::new(
        [(-0.2, y0), (0.2, y1)],
        color.filled(),
    )))?;
    Ok(())
}

fn dashed_line(chart: &mut Gauge<'_>, y: f64) -> std::result::Result<(), Box<dyn Error>> {
    let dashes = (0..10).map(|i| {
        let x0 = -0.2 + i as f64 * 0.04;
        PathElement::new(vec![(x0, y), (x0 + 0.024, y)], TEAL.stroke_width(3))
    });
    chart.draw_series(dashes)?;
    Ok(())
}
