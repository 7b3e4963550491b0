// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::color::palette::css;

use crate::{
    AreaFill, AreaMarkSpec, BandMarkSpec, BandOrient, GridLayoutSpec, InputShapeError,
    LineMarkSpec, LineShape, Mark, MarkId, Margin, PointMarkSpec, RectMarkSpec, RuleMarkSpec,
    ScaleLinear, Size, StrokeStyle, sort_marks, z_order,
};

const SHAPES: [LineShape; 6] = [
    LineShape::Linear,
    LineShape::SPLINE,
    LineShape::Hv,
    LineShape::Vh,
    LineShape::Hvh,
    LineShape::Vhv,
];

/// `x = 0, 0.5, ..., 10` with `y` missing for `x` in `[3.5, 5.0]`.
fn gappy_series() -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..=20_u8).map(|i| f64::from(i) * 0.5).collect();
    let y = x
        .iter()
        .map(|&x| {
            if (3.5..=5.0).contains(&x) {
                f64::NAN
            } else {
                0.1 * x * x - x + 3.0
            }
        })
        .collect();
    (x, y)
}

fn cell() -> Rect {
    GridLayoutSpec::new(1, 1, Size::new(400.0, 300.0))
        .with_margin(Margin::uniform(20.0))
        .cell(0, 0)
        .unwrap()
}

fn scales(plot: Rect) -> (ScaleLinear, ScaleLinear) {
    (
        ScaleLinear::new((0.0, 10.0), (plot.x0, plot.x1)),
        ScaleLinear::new((-1.0, 5.0), (plot.y1, plot.y0)),
    )
}

fn assert_outside(marks: &[Mark], lo: f64, hi: f64) {
    for m in marks {
        let b = m.bounds();
        assert!(
            b.x1 < lo || b.x0 > hi,
            "{:?} spans the gap {lo}..{hi}: {b:?}",
            m.id
        );
    }
}

#[test]
fn no_shape_or_fill_crosses_the_gap() {
    let (x, y) = gappy_series();
    let (xs, ys) = scales(cell());
    let (lo, hi) = (xs.map(3.5), xs.map(5.0));

    for shape in SHAPES {
        let line = LineMarkSpec::new(0, x.clone(), y.clone(), xs, ys)
            .with_shape(shape)
            .marks()
            .unwrap();
        assert_eq!(line.len(), 2, "{shape:?}");
        assert_outside(&line, lo, hi);

        for fill_to in [AreaFill::ToZeroY, AreaFill::ToSelf] {
            let area = AreaMarkSpec::new(0, x.clone(), y.clone(), xs, ys)
                .with_fill_to(fill_to)
                .with_shape(shape)
                .with_stroke(StrokeStyle::default())
                .marks()
                .unwrap();
            assert_eq!(area.len(), 4, "{shape:?} {fill_to:?}");
            assert_outside(&area, lo, hi);
        }

        let upper: Vec<f64> = y.iter().map(|v| v + 1.0).collect();
        let band = BandMarkSpec::new(0, x.clone(), y.clone(), upper, xs, ys)
            .with_shape(shape)
            .marks()
            .unwrap();
        assert_eq!(band.len(), 6, "{shape:?}");
        assert_outside(&band, lo, hi);
    }
}

#[test]
fn area_closes_on_the_plot_baseline() {
    let (x, y) = gappy_series();
    let plot = cell();
    let xs = ScaleLinear::new((0.0, 10.0), (plot.x0, plot.x1));
    let ys = ScaleLinear::new((0.0, 5.0), (plot.y1, plot.y0));

    let marks = AreaMarkSpec::new(0, x, y, xs, ys).marks().unwrap();
    assert_eq!(marks.len(), 2);
    for m in &marks {
        // All values are positive, so the bottom edge of each fill is the zero line.
        assert_eq!(m.bounds().y1, plot.y1);
    }
}

#[test]
fn band_with_one_sided_gaps_only_fills_the_shared_runs() {
    let nan = f64::NAN;
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let base = vec![0.0, 0.0, nan, 0.0, 0.0, 0.0, 0.0];
    let upper = vec![1.0, 1.0, 1.0, 1.0, nan, 1.0, 1.0];
    let s = ScaleLinear::new((0.0, 1.0), (0.0, 1.0));

    let fills: Vec<Rect> = BandMarkSpec::new(0, x, base, upper, s, s)
        .without_base_stroke()
        .without_upper_stroke()
        .marks()
        .unwrap()
        .iter()
        .map(Mark::bounds)
        .collect();
    assert_eq!(
        fills,
        vec![
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(3.0, 0.0, 3.0, 1.0),
            Rect::new(5.0, 0.0, 6.0, 1.0),
        ]
    );
}

#[test]
fn horizontal_band_breaks_along_y() {
    let (axis, x) = gappy_series();
    let s = ScaleLinear::new((0.0, 1.0), (0.0, 1.0));
    let right: Vec<f64> = x.iter().map(|v| v + 2.0).collect();

    let marks = BandMarkSpec::new(0, axis, x, right, s, s)
        .with_orient(BandOrient::Horizontal)
        .marks()
        .unwrap();
    assert_eq!(marks.len(), 6);
    for m in &marks {
        let b = m.bounds();
        assert!(b.y1 <= 3.0 || b.y0 >= 5.5, "{b:?}");
    }
}

#[test]
fn mixed_specs_sort_into_layered_paint_order() {
    let (x, y) = gappy_series();
    let plot = cell();
    let (xs, ys) = scales(plot);

    let mut marks = Vec::new();
    marks.push(
        RectMarkSpec::new(MarkId::from_raw(0x10), plot)
            .with_fill(css::WHITE_SMOKE)
            .mark(),
    );
    marks.push(
        RuleMarkSpec::horizontal(MarkId::from_raw(0x11), ys.map(0.0), plot.x0, plot.x1).mark(),
    );
    marks.extend(
        PointMarkSpec::new(MarkId::from_raw(0x20), x.clone(), y.clone(), xs, ys)
            .marks()
            .unwrap(),
    );
    marks.extend(
        LineMarkSpec::new(0x30, x.clone(), y.clone(), xs, ys)
            .marks()
            .unwrap(),
    );
    marks.extend(
        AreaMarkSpec::new(0x40, x, y, xs, ys)
            .with_fill(css::LIGHT_BLUE)
            .marks()
            .unwrap(),
    );

    sort_marks(&mut marks);
    let order: Vec<(i32, u64)> = marks.iter().map(|m| (m.z_index, m.id.0)).collect();
    assert_eq!(
        order,
        vec![
            (z_order::PLOT_BACKGROUND, 0x10),
            (z_order::GRID_LINES, 0x11),
            (z_order::SERIES_FILL, 0x40),
            (z_order::SERIES_FILL, 0x41),
            (z_order::SERIES_STROKE, 0x30),
            (z_order::SERIES_STROKE, 0x31),
            (z_order::SERIES_POINTS, 0x20),
        ]
    );
}

#[test]
fn every_spec_reports_the_same_shape_error() {
    let s = ScaleLinear::new((0.0, 1.0), (0.0, 1.0));
    let err: Result<Vec<Mark>, _> = Err(InputShapeError {
        expected: 3,
        actual: 2,
    });
    let x = vec![0.0, 1.0, 2.0];
    let short = vec![0.0, 1.0];

    assert_eq!(
        LineMarkSpec::new(0, x.clone(), short.clone(), s, s).marks(),
        err
    );
    assert_eq!(
        AreaMarkSpec::new(0, x.clone(), short.clone(), s, s).marks(),
        err
    );
    assert_eq!(
        PointMarkSpec::new(MarkId::from_raw(0), x.clone(), short.clone(), s, s).marks(),
        err
    );
    assert_eq!(
        BandMarkSpec::new(0, x.clone(), x.clone(), short.clone(), s, s).marks(),
        err
    );
    assert_eq!(
        BandMarkSpec::new(0, x.clone(), short, x, s, s)
            .with_orient(BandOrient::Horizontal)
            .marks(),
        err
    );
}

#[test]
fn infinite_samples_split_runs_like_missing_ones() {
    let inf = f64::INFINITY;
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let y = vec![1.0, 2.0, inf, 2.0, 1.0];
    let s = ScaleLinear::new((0.0, 4.0), (0.0, 100.0));

    let line = LineMarkSpec::new(0, x.clone(), y.clone(), s, s).marks().unwrap();
    let area = AreaMarkSpec::new(0, x.clone(), y.clone(), s, s).marks().unwrap();
    let upper = vec![3.0, 3.0, 3.0, -inf, 3.0];
    let band = BandMarkSpec::new(0, x, y, upper, s, s)
        .without_base_stroke()
        .without_upper_stroke()
        .marks()
        .unwrap();

    assert_eq!(line.len(), 2);
    assert_eq!(area.len(), 2);
    // Position 2 is infinite in `base` and position 3 in `upper`.
    assert_eq!(band.len(), 2);
    for m in line.iter().chain(&area).chain(&band) {
        let b = m.bounds();
        assert!(
            b.x0.is_finite() && b.x1.is_finite() && b.y0.is_finite() && b.y1.is_finite(),
            "{:?}: {b:?}",
            m.id
        );
        assert!(b.x1 <= 25.0 || b.x0 >= 75.0, "{:?}: {b:?}", m.id);
    }
}
