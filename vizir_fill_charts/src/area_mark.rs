// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area mark generation for a single curve.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use peniko::Brush;
use vizir_gaps::{InputShapeError, segment_by_validity};

use crate::mark::MarkIds;
use crate::series::{keep_run, point_missing, scene_points};
use crate::{LineShape, Mark, ScaleLinear, StrokeStyle};

/// What a single-curve area is closed against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AreaFill {
    /// Close vertically down (or up) to the horizontal line `y = baseline`.
    #[default]
    ToZeroY,
    /// Close horizontally across to the vertical line `x = baseline`.
    ToZeroX,
    /// Close each run back onto its own first point.
    ToSelf,
}

/// A filled area under (or beside) an `x`/`y` series that breaks at missing samples.
///
/// Each run of present samples produces:
/// - one filled path mark for the area, and
/// - optionally one stroked path mark for the curve itself.
///
/// No fill ever spans a gap. Ids are allocated upward from `id_base` in run order (fill, then
/// outline).
#[derive(Clone, Debug)]
pub struct AreaMarkSpec {
    /// Stable-id base for marks emitted by this mark.
    pub id_base: u64,
    /// X values (non-finite = missing).
    pub x: Vec<f64>,
    /// Y values (non-finite = missing).
    pub y: Vec<f64>,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleLinear,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleLinear,
    /// What the area closes against.
    pub fill_to: AreaFill,
    /// Baseline in data units (typically `0.0`); unused for [`AreaFill::ToSelf`].
    pub baseline: f64,
    /// How consecutive points are joined.
    pub shape: LineShape,
    /// Fill paint for the area.
    pub fill: Brush,
    /// Optional stroke along the curve.
    pub stroke: Option<StrokeStyle>,
    /// Runs shorter than this are not drawn.
    pub min_run_len: usize,
    /// Rendering order hint for the filled areas.
    pub z_index: i32,
}

impl AreaMarkSpec {
    /// Creates an area filled to `y = 0` with default fill (`Brush::default()`) and no outline.
    pub fn new(
        id_base: u64,
        x: Vec<f64>,
        y: Vec<f64>,
        x_scale: ScaleLinear,
        y_scale: ScaleLinear,
    ) -> Self {
        Self {
            id_base,
            x,
            y,
            x_scale,
            y_scale,
            fill_to: AreaFill::ToZeroY,
            baseline: 0.0,
            shape: LineShape::Linear,
            fill: Brush::default(),
            stroke: None,
            min_run_len: 1,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets what the area closes against.
    pub fn with_fill_to(mut self, fill_to: AreaFill) -> Self {
        self.fill_to = fill_to;
        self
    }

    /// Sets the baseline in data units.
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the line shape used for the curve edge of the area.
    pub fn with_shape(mut self, shape: LineShape) -> Self {
        self.shape = shape;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Disables the outline stroke.
    pub fn without_stroke(mut self) -> Self {
        self.stroke = None;
        self
    }

    /// Skips runs with fewer than `min_run_len` samples.
    pub fn with_min_run_len(mut self, min_run_len: usize) -> Self {
        self.min_run_len = min_run_len;
        self
    }

    /// Sets the z-index used for render ordering.
    ///
    /// The optional outline stroke (if enabled) is drawn above the fill.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates marks for this mark.
    ///
    /// Fails if `x` and `y` have different lengths.
    pub fn marks(&self) -> Result<Vec<Mark>, InputShapeError> {
        let points = scene_points(&self.x, &self.y, &self.x_scale, &self.y_scale)?;
        let mut ids = MarkIds::starting_at(self.id_base);
        let mut out = Vec::new();

        for seg in segment_by_validity(&points, point_missing) {
            if !keep_run(seg.start, seg.len(), self.min_run_len) {
                continue;
            }
            let area = self.area_path(seg.values);
            out.push(Mark::filled(
                ids.next_id(),
                self.z_index,
                area,
                self.fill.clone(),
            ));

            if let Some(stroke) = &self.stroke {
                out.push(Mark::stroked(
                    ids.next_id(),
                    self.z_index.saturating_add(crate::z_order::SERIES_STROKE),
                    self.shape.path(seg.values),
                    stroke,
                ));
            }
        }

        Ok(out)
    }

    /// Closed outline for one run of scene points (never empty).
    fn area_path(&self, run: &[Point]) -> BezPath {
        let (Some(&first), Some(&last)) = (run.first(), run.last()) else {
            return BezPath::new();
        };
        let mut p = BezPath::new();
        match self.fill_to {
            AreaFill::ToZeroY => {
                let y0 = self.y_scale.map(self.baseline);
                p.move_to((first.x, y0));
                p.line_to(first);
                self.shape.extend(&mut p, run);
                p.line_to((last.x, y0));
            }
            AreaFill::ToZeroX => {
                let x0 = self.x_scale.map(self.baseline);
                p.move_to((x0, first.y));
                p.line_to(first);
                self.shape.extend(&mut p, run);
                p.line_to((x0, last.y));
            }
            AreaFill::ToSelf => {
                p.move_to(first);
                self.shape.extend(&mut p, run);
            }
        }
        p.close_path();
        p
    }
}
