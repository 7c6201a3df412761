// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Draws the with/without redistribution comparison.
//!
//! The baseline is drawn first as dashed lines in a lightened switch colour,
//! the treated series on top as solid lines in the full colour, so each
//! switch keeps one hue across both runs.

use crate::config::Chart;
use crate::palette::{colour, lighten};
use crate::scales::Ticks;
use crate::series::SwitchSeries;
use crate::Error;

use plotters::coord::Shift;
use plotters::prelude::*;

// dash and gap length of baseline lines
const DASH: u32 = 8;
const GAP: u32 = 5;

/// Render the comparison as an SVG document.
pub fn render(
    chart: &Chart,
    treated: &SwitchSeries,
    baseline: &SwitchSeries,
) -> Result<String, Error> {
    if treated.len() != baseline.len() {
        warn!(
            "series lengths differ: treated: {} baseline: {}",
            treated.len(),
            baseline.len()
        );
    }

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, chart.size()).into_drawing_area();
        draw(&root, chart, treated, baseline).map_err(|e| Error::Draw(e.to_string()))?;
    }
    debug!("rendered {} bytes of svg", svg.len());

    Ok(svg)
}

/// Label used for switch `index` of the given run.
pub fn label(index: usize, redistribution: bool) -> String {
    if redistribution {
        format!("s{}-with redistribution", index)
    } else {
        format!("s{}-without redistribution", index)
    }
}

/// Grid colours for major and minor positions. Only minor positions get a
/// visible line.
fn grid() -> (RGBAColor, RGBAColor) {
    (WHITE.mix(0.0), BLACK.mix(0.08))
}

fn points(switch: &[u64]) -> impl Iterator<Item = (f64, f64)> + Clone + '_ {
    switch
        .iter()
        .enumerate()
        .map(|(t, v)| (t as f64, *v as f64))
}

fn draw(
    root: &DrawingArea<SVGBackend, Shift>,
    chart: &Chart,
    treated: &SwitchSeries,
    baseline: &SwitchSeries,
) -> Result<(), Box<dyn std::error::Error>> {
    root.fill(&WHITE)?;

    let (x_major, x_minor) = chart.x_ticks();
    let (y_major, y_minor) = chart.y_ticks();
    let x_ticks = Ticks::new(x_major, x_minor);
    let y_ticks = Ticks::new(y_major, y_minor);

    let x_max = treated.len().max(baseline.len()).saturating_sub(1) as u64;
    let y_max = treated.peak().max(baseline.peak());

    let (major_grid, minor_grid) = grid();

    let font_size = chart.font_size();
    let font = ("sans-serif", font_size as f64).into_font();

    let mut ctx = ChartBuilder::on(root)
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, font_size * 5)
        .set_label_area_size(LabelAreaPosition::Bottom, font_size * 3)
        .build_cartesian_2d(x_ticks.range(x_max), y_ticks.range(y_max))?;

    ctx.configure_mesh()
        .x_desc(chart.x_desc())
        .y_desc(chart.y_desc())
        .x_label_formatter(&|x| format!("{:2}", *x as i64))
        .y_label_formatter(&|y| format!("{:4}", *y as i64))
        .x_label_style(font.clone())
        .y_label_style(font.clone())
        .axis_desc_style(font.clone())
        .bold_line_style(major_grid)
        .light_line_style(minor_grid)
        .draw()?;

    let width = chart.line_width();

    for (index, switch) in baseline.switches() {
        let style = lighten(colour(index)).stroke_width(width);
        ctx.draw_series(DashedLineSeries::new(points(switch), DASH, GAP, style))?
            .label(label(index, false))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    for (index, switch) in treated.switches() {
        let style = colour(index).stroke_width(width);
        ctx.draw_series(LineSeries::new(points(switch), style))?
            .label(label(index, true))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    if chart.legend() {
        ctx.configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(font)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(label(0, true), "s0-with redistribution");
        assert_eq!(label(3, false), "s3-without redistribution");
    }

    #[test]
    fn grid_only_on_minor_positions() {
        let (major, minor) = grid();
        assert_eq!(major.3, 0.0);
        assert!(minor.3 > 0.0);
    }

    #[test]
    fn points_are_indexed_by_time_step() {
        let points: Vec<_> = points(&[5, 7, 9]).collect();
        assert_eq!(points, vec![(0.0, 5.0), (1.0, 7.0), (2.0, 9.0)]);
    }
}
