// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point marker generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::BezPath;
use peniko::Brush;
use vizir_gaps::{InputShapeError, segment_by_validity};

use crate::series::{point_missing, scene_points};
use crate::symbol::Symbol;
use crate::{Mark, MarkId, ScaleLinear};

/// Markers at every present sample of an `x`/`y` series.
///
/// All glyphs go into a single filled path mark; missing samples draw nothing.
#[derive(Clone, Debug)]
pub struct PointMarkSpec {
    /// Stable id for the single mark emitted by this spec.
    pub id: MarkId,
    /// X values (non-finite = missing).
    pub x: Vec<f64>,
    /// Y values (non-finite = missing).
    pub y: Vec<f64>,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleLinear,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleLinear,
    /// Glyph size (diameter or side) in scene coordinates.
    pub size: f64,
    /// The glyph shape.
    pub symbol: Symbol,
    /// Fill paint for the glyphs.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

impl PointMarkSpec {
    /// Creates circle markers with a size of 6 and a default fill (`Brush::default()`).
    pub fn new(
        id: MarkId,
        x: Vec<f64>,
        y: Vec<f64>,
        x_scale: ScaleLinear,
        y_scale: ScaleLinear,
    ) -> Self {
        Self {
            id,
            x,
            y,
            x_scale,
            y_scale,
            size: 6.0,
            symbol: Symbol::Circle,
            fill: Brush::default(),
            z_index: crate::z_order::SERIES_POINTS,
        }
    }

    /// Sets the glyph size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the symbol shape.
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = symbol;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates marks for this mark (empty if no sample is present).
    ///
    /// Fails if `x` and `y` have different lengths.
    pub fn marks(&self) -> Result<Vec<Mark>, InputShapeError> {
        let points = scene_points(&self.x, &self.y, &self.x_scale, &self.y_scale)?;
        let mut path = BezPath::new();
        for seg in segment_by_validity(&points, point_missing) {
            for pt in seg.values {
                self.symbol.append_to(&mut path, pt.x, pt.y, self.size);
            }
        }
        if path.elements().is_empty() {
            return Ok(Vec::new());
        }
        Ok(alloc::vec![Mark::filled(
            self.id,
            self.z_index,
            path,
            self.fill.clone()
        )])
    }
}
