// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Band mark generation: an upper curve filled to a base curve ("fill to previous").

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use peniko::Brush;
use vizir_gaps::{InputShapeError, segment_pairs_by_validity};

use crate::mark::MarkIds;
use crate::series::{keep_run, point_missing, scene_points};
use crate::{LineShape, Mark, ScaleLinear, StrokeStyle};

/// Which coordinate the base and upper curves share.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BandOrient {
    /// Shared `x` axis; `base` and `upper` are y values (fill to next y).
    #[default]
    Vertical,
    /// Shared `y` axis; `base` and `upper` are x values (fill to next x).
    Horizontal,
}

/// The region between a base curve and an upper curve over a shared axis column.
///
/// The band is only drawn where the axis value and both curves are present. For each such run,
/// in ascending order, this emits:
/// - the base curve stroke (optional),
/// - the filled region (upper curve forwards, base curve backwards, closed), and
/// - the upper curve stroke (optional).
///
/// Fills use `z_index` and strokes sit above them; ids increase in emission order, so sorting by
/// `(z_index, id)` paints each run's base before its upper curve.
#[derive(Clone, Debug)]
pub struct BandMarkSpec {
    /// Stable-id base for marks emitted by this mark.
    pub id_base: u64,
    /// Shared axis values (non-finite = missing).
    pub axis: Vec<f64>,
    /// Base (previous) curve values (non-finite = missing).
    pub base: Vec<f64>,
    /// Upper curve values, filled to `base` (non-finite = missing).
    pub upper: Vec<f64>,
    /// Which coordinate `axis` provides.
    pub orient: BandOrient,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleLinear,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleLinear,
    /// How consecutive points are joined (for both curves and the fill edges).
    pub shape: LineShape,
    /// Fill paint for the band.
    pub fill: Brush,
    /// Optional stroke along the base curve.
    pub base_stroke: Option<StrokeStyle>,
    /// Optional stroke along the upper curve.
    pub upper_stroke: Option<StrokeStyle>,
    /// Runs shorter than this are not drawn.
    pub min_run_len: usize,
    /// Rendering order hint for the filled band.
    pub z_index: i32,
}

impl BandMarkSpec {
    /// Creates a vertical band with default fill and default strokes on both curves.
    pub fn new(
        id_base: u64,
        axis: Vec<f64>,
        base: Vec<f64>,
        upper: Vec<f64>,
        x_scale: ScaleLinear,
        y_scale: ScaleLinear,
    ) -> Self {
        Self {
            id_base,
            axis,
            base,
            upper,
            orient: BandOrient::Vertical,
            x_scale,
            y_scale,
            shape: LineShape::Linear,
            fill: Brush::default(),
            base_stroke: Some(StrokeStyle::default()),
            upper_stroke: Some(StrokeStyle::default()),
            min_run_len: 1,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets which coordinate the axis column provides.
    pub fn with_orient(mut self, orient: BandOrient) -> Self {
        self.orient = orient;
        self
    }

    /// Sets the line shape.
    pub fn with_shape(mut self, shape: LineShape) -> Self {
        self.shape = shape;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the base curve stroke.
    pub fn with_base_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.base_stroke = Some(stroke);
        self
    }

    /// Disables the base curve stroke.
    pub fn without_base_stroke(mut self) -> Self {
        self.base_stroke = None;
        self
    }

    /// Sets the upper curve stroke.
    pub fn with_upper_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.upper_stroke = Some(stroke);
        self
    }

    /// Disables the upper curve stroke.
    pub fn without_upper_stroke(mut self) -> Self {
        self.upper_stroke = None;
        self
    }

    /// Skips runs with fewer than `min_run_len` positions.
    pub fn with_min_run_len(mut self, min_run_len: usize) -> Self {
        self.min_run_len = min_run_len;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates marks for this mark.
    ///
    /// Fails if `base` or `upper` differs in length from `axis`.
    pub fn marks(&self) -> Result<Vec<Mark>, InputShapeError> {
        InputShapeError::check(self.axis.len(), self.base.len())?;
        InputShapeError::check(self.axis.len(), self.upper.len())?;
        let base_pts = self.curve_points(&self.base)?;
        let upper_pts = self.curve_points(&self.upper)?;

        let stroke_z = self.z_index.saturating_add(crate::z_order::SERIES_STROKE);
        let mut ids = MarkIds::starting_at(self.id_base);
        let mut out = Vec::new();

        for seg in segment_pairs_by_validity(&base_pts, &upper_pts, point_missing)? {
            if !keep_run(seg.start, seg.len(), self.min_run_len) {
                continue;
            }
            if let Some(stroke) = &self.base_stroke {
                out.push(Mark::stroked(
                    ids.next_id(),
                    stroke_z,
                    self.shape.path(seg.base),
                    stroke,
                ));
            }
            out.push(Mark::filled(
                ids.next_id(),
                self.z_index,
                self.band_path(seg.base, seg.upper),
                self.fill.clone(),
            ));
            if let Some(stroke) = &self.upper_stroke {
                out.push(Mark::stroked(
                    ids.next_id(),
                    stroke_z,
                    self.shape.path(seg.upper),
                    stroke,
                ));
            }
        }

        Ok(out)
    }

    fn curve_points(&self, values: &[f64]) -> Result<Vec<Point>, InputShapeError> {
        match self.orient {
            BandOrient::Vertical => scene_points(&self.axis, values, &self.x_scale, &self.y_scale),
            BandOrient::Horizontal => {
                scene_points(values, &self.axis, &self.x_scale, &self.y_scale)
            }
        }
    }

    /// Upper curve forwards, then the base curve backwards, closed.
    fn band_path(&self, base: &[Point], upper: &[Point]) -> BezPath {
        let mut p = self.shape.path(upper);
        let Some(&base_last) = base.last() else {
            return p;
        };
        p.line_to(base_last);
        let reversed: Vec<Point> = base.iter().rev().copied().collect();
        self.shape.reversed().extend(&mut p, &reversed);
        p.close_path();
        p
    }
}
