// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line mark generation.

extern crate alloc;

use alloc::vec::Vec;

use vizir_gaps::{InputShapeError, segment_by_validity};

use crate::mark::MarkIds;
use crate::series::{keep_run, point_missing, scene_points};
use crate::{LineShape, Mark, ScaleLinear, StrokeStyle};

/// A line through an `x`/`y` series that breaks at missing samples.
///
/// This generates one stroked path mark per run of present samples, so no segment is ever drawn
/// across a gap. Ids are allocated upward from `id_base` in run order.
#[derive(Clone, Debug)]
pub struct LineMarkSpec {
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
    /// How consecutive points are joined.
    pub shape: LineShape,
    /// Stroke style for the line.
    pub stroke: StrokeStyle,
    /// Runs shorter than this are not drawn.
    pub min_run_len: usize,
    /// Rendering order hint for the emitted marks.
    pub z_index: i32,
}

impl LineMarkSpec {
    /// Creates a straight line mark with a black stroke at width 1.
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
            shape: LineShape::Linear,
            stroke: StrokeStyle::default(),
            min_run_len: 1,
            z_index: crate::z_order::SERIES_STROKE,
        }
    }

    /// Sets the line shape.
    pub fn with_shape(mut self, shape: LineShape) -> Self {
        self.shape = shape;
        self
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Skips runs with fewer than `min_run_len` samples.
    ///
    /// The default of `1` draws every run, including single samples (which have no visible
    /// extent as a line).
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
    /// Fails if `x` and `y` have different lengths.
    pub fn marks(&self) -> Result<Vec<Mark>, InputShapeError> {
        let points = scene_points(&self.x, &self.y, &self.x_scale, &self.y_scale)?;
        let mut ids = MarkIds::starting_at(self.id_base);
        Ok(segment_by_validity(&points, point_missing)
            .filter(|seg| keep_run(seg.start, seg.len(), self.min_run_len))
            .map(|seg| {
                Mark::stroked(
                    ids.next_id(),
                    self.z_index,
                    self.shape.path(seg.values),
                    &self.stroke,
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use kurbo::{PathEl, Rect};
    use peniko::color::palette::css;

    use super::*;
    use crate::MarkId;

    fn identity() -> ScaleLinear {
        ScaleLinear::new((0.0, 1.0), (0.0, 1.0))
    }

    #[test]
    fn gap_splits_the_line_into_separate_marks() {
        let nan = f64::NAN;
        let spec = LineMarkSpec::new(
            0x100,
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            vec![1.0, 2.0, nan, nan, 3.0, 4.0],
            identity(),
            identity(),
        )
        .with_stroke(StrokeStyle::solid(css::STEEL_BLUE, 2.0));

        let marks = spec.marks().unwrap();
        assert_eq!(marks.len(), 2);
        assert_eq!(marks[0].id, MarkId::from_raw(0x100));
        assert_eq!(marks[1].id, MarkId::from_raw(0x101));
        assert_eq!(marks[0].bounds(), Rect::new(0.0, 1.0, 1.0, 2.0));
        assert_eq!(marks[1].bounds(), Rect::new(4.0, 3.0, 5.0, 4.0));
        for m in &marks {
            assert_eq!(m.stroke, css::STEEL_BLUE.into());
            assert_eq!(m.stroke_width, 2.0);
            assert!(
                m.path.elements().iter().all(|el| !matches!(el, PathEl::ClosePath)),
                "lines must stay open"
            );
        }
    }

    #[test]
    fn missing_x_also_breaks_the_line() {
        let spec = LineMarkSpec::new(
            1,
            vec![0.0, f64::NAN, 2.0],
            vec![1.0, 1.0, 1.0],
            identity(),
            identity(),
        );
        assert_eq!(spec.marks().unwrap().len(), 2);
    }

    #[test]
    fn min_run_len_drops_isolated_samples() {
        let nan = f64::NAN;
        let y = vec![nan, 7.0, nan, 1.0, 2.0];
        let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let all = LineMarkSpec::new(1, x, y, identity(), identity());
        assert_eq!(all.marks().unwrap().len(), 2);

        let filtered = all.with_min_run_len(2);
        let marks = filtered.marks().unwrap();
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].bounds(), Rect::new(3.0, 1.0, 4.0, 2.0));
    }

    #[test]
    fn mismatched_columns_fail() {
        let spec = LineMarkSpec::new(1, vec![0.0, 1.0], vec![0.0], identity(), identity());
        assert_eq!(
            spec.marks(),
            Err(InputShapeError {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn all_missing_draws_nothing() {
        let spec = LineMarkSpec::new(
            1,
            vec![0.0, 1.0],
            vec![f64::NAN, f64::NAN],
            identity(),
            identity(),
        );
        assert!(spec.marks().unwrap().is_empty());
    }
}
