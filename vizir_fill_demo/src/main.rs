// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line-shape and fill comparison demos for `vizir_fill_charts`.
//!
//! Writes an HTML report (first argument, default `vizir_fill_demo.html`) with one SVG figure per
//! section. Set `RUST_LOG=debug` for per-panel mark counts.
mod html;
mod svg;

use std::error::Error;

use kurbo::{Point, Rect};
use peniko::Color;
use peniko::color::palette::css;
use vizir_fill_charts::{
    AreaFill, AreaMarkSpec, BandMarkSpec, BandOrient, GridLayoutSpec, InputShapeError,
    LineMarkSpec, LineShape, Margin, Mark, MarkId, PointMarkSpec, RectMarkSpec, RuleMarkSpec,
    ScaleLinear, ScaleLinearSpec, Size, StrokeStyle, infer_domain_f64,
};
use vizir_gaps::{missing, segment_by_validity};

const DEFAULT_OUTPUT: &str = "vizir_fill_demo.html";
const TICK_COUNT: usize = 5;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let out_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let sections = vec![line_shape_demo()?, fill_compare_demo()?, fill_break_demo()?];

    let html = html::render_report("VizIR gap-aware fills demo", &sections);
    std::fs::write(&out_path, html)?;
    log::info!("wrote {out_path}");
    Ok(())
}

/// Plotly's default trace colors.
fn trace_color(i: usize) -> Color {
    match i % 3 {
        0 => Color::from_rgb8(0x63, 0x6e, 0xfa),
        1 => Color::from_rgb8(0xef, 0x55, 0x3b),
        _ => Color::from_rgb8(0x00, 0xcc, 0x96),
    }
}

fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![start; n];
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Replaces values whose `x` lies in `gap` (inclusive) with `NaN`.
fn with_gap(x: &[f64], y: &[f64], gap: (f64, f64)) -> Vec<f64> {
    x.iter()
        .zip(y)
        .map(|(&x, &y)| {
            if (gap.0..=gap.1).contains(&x) {
                f64::NAN
            } else {
                y
            }
        })
        .collect()
}

fn domain(columns: &[&[f64]], include_zero: bool) -> (f64, f64) {
    let (lo, hi) = infer_domain_f64(columns.iter().copied()).unwrap_or((0.0, 1.0));
    if include_zero {
        (lo.min(0.0), hi.max(0.0))
    } else {
        (lo, hi)
    }
}

/// Creates a figure scene sized to `grid` with a title above the cells.
fn figure_scene(grid: &GridLayoutSpec, title: &str) -> svg::SvgScene {
    let mut scene = svg::SvgScene::default();
    let view = Rect::new(0.0, 0.0, grid.size.width, grid.size.height);
    scene.set_view_box(view);
    scene.push_text(Point::new(view.center().x, 30.0), 16.0, title);
    scene
}

/// One subplot: its plot rectangle, nice scales, and the marks drawn into it.
struct Panel {
    id_base: u64,
    plot: Rect,
    x_scale: ScaleLinear,
    y_scale: ScaleLinear,
    marks: Vec<Mark>,
}

impl Panel {
    fn new(id_base: u64, plot: Rect, x_domain: (f64, f64), y_domain: (f64, f64)) -> Self {
        let x_scale = ScaleLinearSpec::new(x_domain)
            .with_nice(true)
            .instantiate_resolved((plot.x0, plot.x1), TICK_COUNT);
        let y_scale = ScaleLinearSpec::new(y_domain)
            .with_nice(true)
            .instantiate_resolved((plot.y1, plot.y0), TICK_COUNT);
        Self {
            id_base,
            plot,
            x_scale,
            y_scale,
            marks: Vec::new(),
        }
    }

    fn id(&self, offset: u64) -> u64 {
        self.id_base + offset
    }

    fn scales(&self) -> (ScaleLinear, ScaleLinear) {
        (self.x_scale, self.y_scale)
    }

    fn push(&mut self, marks: Vec<Mark>) {
        self.marks.extend(marks);
    }

    /// Adds the background, tick grid, zero lines, and title, then moves everything into `scene`.
    fn finish(self, scene: &mut svg::SvgScene, title: &str) {
        let Self {
            id_base,
            plot,
            x_scale,
            y_scale,
            mut marks,
        } = self;

        marks.push(
            RectMarkSpec::new(MarkId::from_raw(id_base + 0xF00), plot)
                .with_fill(Color::from_rgb8(0xe5, 0xec, 0xf6))
                .mark(),
        );
        let zero_line = StrokeStyle::solid(css::WHITE, 2.0);
        if spans_zero(&y_scale) {
            let y = y_scale.map(0.0);
            marks.push(
                RuleMarkSpec::horizontal(MarkId::from_raw(id_base + 0xF01), y, plot.x0, plot.x1)
                    .with_stroke(zero_line.clone())
                    .mark(),
            );
        }
        if spans_zero(&x_scale) {
            let x = x_scale.map(0.0);
            marks.push(
                RuleMarkSpec::vertical(MarkId::from_raw(id_base + 0xF02), x, plot.y0, plot.y1)
                    .with_stroke(zero_line)
                    .mark(),
            );
        }

        let grid_line = StrokeStyle::solid(css::WHITE, 1.0);
        let (x_left, x_right) = x_scale.range();
        let (y_bottom, y_top) = y_scale.range();
        let x_ticks = visible_ticks(&x_scale);
        let y_ticks = visible_ticks(&y_scale);
        for (i, (v, label)) in (0_u64..).zip(tick_labels(&x_ticks)) {
            let x = x_scale.map(v);
            marks.push(
                RuleMarkSpec::vertical(MarkId::from_raw(id_base + 0xE00 + i), x, y_top, y_bottom)
                    .with_stroke(grid_line.clone())
                    .mark(),
            );
            scene.push_text(Point::new(x, y_bottom + 14.0), 10.0, &label);
        }
        for (i, (v, label)) in (0_u64..).zip(tick_labels(&y_ticks)) {
            let y = y_scale.map(v);
            let id = MarkId::from_raw(id_base + 0xE80 + i);
            marks.push(
                RuleMarkSpec::horizontal(id, y, x_left, x_right)
                    .with_stroke(grid_line.clone())
                    .mark(),
            );
            scene.push_text(Point::new(x_left - 16.0, y + 3.5), 10.0, &label);
        }

        log::debug!("panel {title:?}: {} marks", marks.len());
        scene.push_text(Point::new(plot.center().x, plot.y0 - 8.0), 12.0, title);
        scene.extend_marks(marks);
    }
}

/// Tick values of `scale` that fall inside its domain.
fn visible_ticks(scale: &ScaleLinear) -> Vec<f64> {
    let (a, b) = (scale.domain_min(), scale.domain_max());
    let (lo, hi) = (a.min(b), a.max(b));
    let eps = (hi - lo) * 1e-9;
    scale
        .ticks(TICK_COUNT)
        .into_iter()
        .filter(|t| (lo - eps..=hi + eps).contains(t))
        .collect()
}

/// Pairs each tick with a label using just enough decimals for the tick step.
fn tick_labels(ticks: &[f64]) -> Vec<(f64, String)> {
    let step = match ticks {
        [a, b, ..] => (b - a).abs(),
        _ => 1.0,
    };
    let decimals = (0..6_u8)
        .find(|&d| {
            let scaled = step * 10_f64.powi(i32::from(d));
            (scaled - scaled.round()).abs() < 1e-6 * scaled.max(1.0)
        })
        .map_or(6, usize::from);
    ticks
        .iter()
        .map(|&t| {
            let label = format!("{t:.decimals$}");
            // "-0.0" reads as "0.0".
            let label = if label.trim_start_matches(['-', '0', '.']).is_empty() {
                label.trim_start_matches('-').to_string()
            } else {
                label
            };
            (t, label)
        })
        .collect()
}

fn spans_zero(scale: &ScaleLinear) -> bool {
    let (a, b) = (scale.domain_min(), scale.domain_max());
    a.min(b) <= 0.0 && 0.0 <= a.max(b)
}

fn line_shape_demo() -> Result<html::HtmlSection, InputShapeError> {
    const SHAPES: [(&str, LineShape); 6] = [
        ("linear", LineShape::Linear),
        ("spline", LineShape::SPLINE),
        ("hv", LineShape::Hv),
        ("vh", LineShape::Vh),
        ("hvh", LineShape::Hvh),
        ("vhv", LineShape::Vhv),
    ];

    let x: Vec<f64> = (0..=10_u8).map(f64::from).collect();
    let y = vec![0.0, 0.3, 2.5, 2.5, 1.0, 4.0, 3.8, 3.8, 1.5, 2.2, 0.5];

    let grid = GridLayoutSpec::new(2, 6, Size::new(1600.0, 650.0))
        .with_spacing(0.03, 0.12)
        .with_margin(Margin {
            left: 40.0,
            right: 20.0,
            top: 60.0,
            bottom: 60.0,
        });
    let mut scene = figure_scene(&grid, "line_shape comparison (top: lines, bottom: fills)");
    let x_domain = domain(&[&x], false);
    let y_domain = domain(&[&y], true);
    let color = trace_color(0);

    for (col, (name, shape)) in SHAPES.into_iter().enumerate() {
        let col_base = 0x1_0000 + ((col as u64) << 12);

        if let Some(plot) = grid.cell(0, col) {
            let mut panel = Panel::new(col_base, plot, x_domain, y_domain);
            let (xs, ys) = panel.scales();
            let line = LineMarkSpec::new(panel.id(0x100), x.clone(), y.clone(), xs, ys)
                .with_shape(shape)
                .with_stroke(StrokeStyle::solid(color, 2.0))
                .marks()?;
            let points = PointMarkSpec::new(
                MarkId::from_raw(panel.id(0x200)),
                x.clone(),
                y.clone(),
                xs,
                ys,
            )
            .with_fill(color)
            .marks()?;
            panel.push(line);
            panel.push(points);
            panel.finish(&mut scene, name);
        }

        if let Some(plot) = grid.cell(1, col) {
            let mut panel = Panel::new(col_base + 0x8_0000, plot, x_domain, y_domain);
            let (xs, ys) = panel.scales();
            let area = AreaMarkSpec::new(panel.id(0x100), x.clone(), y.clone(), xs, ys)
                .with_shape(shape)
                .with_fill(color.with_alpha(0.5))
                .with_stroke(StrokeStyle::solid(color, 2.0))
                .marks()?;
            panel.push(area);
            panel.finish(&mut scene, name);
        }
    }

    log::info!("line shapes: {} marks", scene.mark_count());
    Ok(html::HtmlSection {
        title: "Line shapes",
        description: "Top row: lines with markers for each line shape. Bottom row: the same shapes filled to y = 0.",
        svg: scene.to_svg_string(),
    })
}

fn fill_compare_demo() -> Result<html::HtmlSection, InputShapeError> {
    let x = linspace(0.0, 10.0, 201);
    let y1: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    let y2: Vec<f64> = y1.iter().map(|v| v + 0.8).collect();
    let y1_gap = with_gap(&x, &y1, (3.5, 5.0));
    let y2_gap = with_gap(&x, &y2, (3.5, 5.0));

    let grid = GridLayoutSpec::new(2, 3, Size::new(1200.0, 700.0))
        .with_spacing(0.08, 0.12)
        .with_margin(Margin {
            left: 50.0,
            right: 30.0,
            top: 60.0,
            bottom: 50.0,
        });
    let mut scene = figure_scene(&grid, "fill options compared (with a gap at x in [3.5, 5])");
    let (base_color, upper_color) = (trace_color(0), trace_color(1));
    let stroke = |c: Color| StrokeStyle::solid(c, 1.5);
    let x_domain = domain(&[&x], true);

    let mut panels = grid.cells().into_iter().enumerate().map(|(i, plot)| {
        let base = 0x2_0000 + ((i as u64) << 12);
        (base, plot)
    });

    if let Some((base, plot)) = panels.next() {
        let mut panel = Panel::new(base, plot, x_domain, domain(&[&y1_gap], true));
        let (xs, ys) = panel.scales();
        let line = LineMarkSpec::new(panel.id(0x100), x.clone(), y1_gap.clone(), xs, ys)
            .with_stroke(stroke(base_color))
            .marks()?;
        let points = PointMarkSpec::new(
            MarkId::from_raw(panel.id(0x200)),
            x.clone(),
            y1_gap.clone(),
            xs,
            ys,
        )
        .with_size(4.0)
        .with_fill(base_color)
        .marks()?;
        panel.push(line);
        panel.push(points);
        panel.finish(&mut scene, "fill=None");
    }

    for (fill_to, title) in [
        (AreaFill::ToZeroY, "fill='tozeroy'"),
        (AreaFill::ToZeroX, "fill='tozerox'"),
    ] {
        let Some((base, plot)) = panels.next() else {
            break;
        };
        let mut panel = Panel::new(base, plot, x_domain, domain(&[&y1_gap], true));
        let (xs, ys) = panel.scales();
        let area = AreaMarkSpec::new(panel.id(0x100), x.clone(), y1_gap.clone(), xs, ys)
            .with_fill_to(fill_to)
            .with_fill(base_color.with_alpha(0.5))
            .with_stroke(stroke(base_color))
            .marks()?;
        panel.push(area);
        panel.finish(&mut scene, title);
    }

    if let Some((base, plot)) = panels.next() {
        let mut panel = Panel::new(base, plot, x_domain, domain(&[&y1_gap, &y2_gap], true));
        let (xs, ys) = panel.scales();
        let band = BandMarkSpec::new(
            panel.id(0x100),
            x.clone(),
            y1_gap.clone(),
            y2_gap.clone(),
            xs,
            ys,
        )
        .with_fill(upper_color.with_alpha(0.5))
        .with_base_stroke(stroke(base_color))
        .with_upper_stroke(stroke(upper_color))
        .marks()?;
        panel.push(band);
        panel.finish(&mut scene, "fill='tonexty'");
    }

    if let Some((base, plot)) = panels.next() {
        // The same curves turned sideways: `x` runs up the y axis.
        let mut panel = Panel::new(base, plot, domain(&[&y1_gap, &y2_gap], true), x_domain);
        let (xs, ys) = panel.scales();
        let band = BandMarkSpec::new(
            panel.id(0x100),
            x.clone(),
            y1_gap.clone(),
            y2_gap.clone(),
            xs,
            ys,
        )
        .with_orient(BandOrient::Horizontal)
        .with_fill(upper_color.with_alpha(0.5))
        .with_base_stroke(stroke(base_color))
        .with_upper_stroke(stroke(upper_color))
        .marks()?;
        panel.push(band);
        panel.finish(&mut scene, "fill='tonextx'");
    }

    if let Some((base, plot)) = panels.next() {
        let x_poly = vec![2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0];
        let y_poly = vec![0.5, 1.2, 1.6, 0.8, 0.2, 0.3, 0.5];
        let mut panel = Panel::new(
            base,
            plot,
            domain(&[&x_poly], true),
            domain(&[&y_poly], true),
        );
        let (xs, ys) = panel.scales();
        let polygon = AreaMarkSpec::new(panel.id(0x100), x_poly, y_poly, xs, ys)
            .with_fill_to(AreaFill::ToSelf)
            .with_fill(base_color.with_alpha(0.5))
            .with_stroke(stroke(base_color))
            .marks()?;
        panel.push(polygon);
        panel.finish(&mut scene, "fill='toself'");
    }

    log::info!("fill comparison: {} marks", scene.mark_count());
    Ok(html::HtmlSection {
        title: "Fill options",
        description: "No fill, fill to y = 0, fill to x = 0, fill to the previous curve along y and along x, and a self-closed polygon. Nothing is drawn across the gap.",
        svg: scene.to_svg_string(),
    })
}

fn fill_break_demo() -> Result<html::HtmlSection, InputShapeError> {
    let x = linspace(0.0, 10.0, 201);
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    let y_gap = with_gap(&x, &y, (4.0, 6.0));
    let y2_gap: Vec<f64> = y_gap.iter().map(|v| v + 0.8).collect();

    let grid = GridLayoutSpec::new(2, 2, Size::new(1200.0, 800.0))
        .with_spacing(0.08, 0.12)
        .with_margin(Margin {
            left: 50.0,
            right: 30.0,
            top: 60.0,
            bottom: 50.0,
        });
    let mut scene = figure_scene(&grid, "fills break at missing values and resume after");
    let (base_color, upper_color) = (trace_color(0), trace_color(1));
    let x_domain = domain(&[&x], false);
    let y_domain = domain(&[&y_gap, &y2_gap], true);
    let cells = grid.cells();
    let panel_at = |i: usize| {
        cells
            .get(i)
            .map(|&plot| Panel::new(0x3_0000 + ((i as u64) << 12), plot, x_domain, y_domain))
    };

    if let Some(mut panel) = panel_at(0) {
        let (xs, ys) = panel.scales();
        let area = AreaMarkSpec::new(panel.id(0x100), x.clone(), y_gap.clone(), xs, ys)
            .with_fill(base_color.with_alpha(0.5))
            .with_stroke(StrokeStyle::solid(base_color, 1.5))
            .marks()?;
        panel.push(area);
        panel.finish(&mut scene, "single series, split at the gap");
    }

    if let Some(mut panel) = panel_at(1) {
        let (xs, ys) = panel.scales();
        // One spec per run, splitting the series up front.
        for (i, seg) in segment_by_validity(&y_gap, missing).enumerate() {
            let id_base = panel.id(0x100 + 0x10 * i as u64);
            let xi = x[seg.range()].to_vec();
            let area = AreaMarkSpec::new(id_base, xi, seg.values.to_vec(), xs, ys)
                .with_fill(trace_color(i).with_alpha(0.5))
                .with_stroke(StrokeStyle::solid(trace_color(i), 1.5))
                .marks()?;
            panel.push(area);
        }
        panel.finish(&mut scene, "one series per run");
    }

    if let Some(mut panel) = panel_at(2) {
        let (xs, ys) = panel.scales();
        let band = BandMarkSpec::new(
            panel.id(0x100),
            x.clone(),
            y_gap.clone(),
            y2_gap.clone(),
            xs,
            ys,
        )
        .with_fill(upper_color.with_alpha(0.4))
        .with_base_stroke(StrokeStyle::solid(base_color, 1.5))
        .with_upper_stroke(StrokeStyle::solid(upper_color, 1.5))
        .marks()?;
        panel.push(band);
        panel.finish(&mut scene, "fill to previous, both curves gapped");
    }

    if let Some(mut panel) = panel_at(3) {
        let (xs, ys) = panel.scales();
        for (i, seg) in segment_by_validity(&y_gap, missing).enumerate() {
            let upper: Vec<f64> = seg.values.iter().map(|v| v + 0.8).collect();
            let band = BandMarkSpec::new(
                panel.id(0x100 + 0x10 * i as u64),
                x[seg.range()].to_vec(),
                seg.values.to_vec(),
                upper,
                xs,
                ys,
            )
            .with_fill(upper_color.with_alpha(0.4))
            .with_base_stroke(StrokeStyle::solid(base_color, 1.5))
            .with_upper_stroke(StrokeStyle::solid(upper_color, 1.5))
            .marks()?;
            panel.push(band);
        }
        panel.finish(&mut scene, "fill to previous, one band per run");
    }

    log::info!("fill breaks: {} marks", scene.mark_count());
    Ok(html::HtmlSection {
        title: "Breaking fills at gaps",
        description: "A single gapped series and the same series split into runs up front draw the same shapes; so do the gapped band and one band per run.",
        svg: scene.to_svg_string(),
    })
}
