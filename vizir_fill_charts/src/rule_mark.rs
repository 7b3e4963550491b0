// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule mark generation.
//!
//! A rule is a straight stroked segment, used here for the `x = 0` / `y = 0` guides that fills
//! close against.

use kurbo::BezPath;

use crate::{Mark, MarkId, StrokeStyle, z_order};

/// A rule mark spec (a stroked line segment in scene coordinates).
#[derive(Clone, Debug)]
pub struct RuleMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Start point x.
    pub x0: f64,
    /// Start point y.
    pub y0: f64,
    /// End point x.
    pub x1: f64,
    /// End point y.
    pub y1: f64,
    /// Stroke style.
    pub stroke: StrokeStyle,
    /// Rendering order hint.
    pub z_index: i32,
}

impl RuleMarkSpec {
    /// Creates a new rule between two points, drawn behind the series.
    pub fn new(id: MarkId, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            id,
            x0,
            y0,
            x1,
            y1,
            stroke: StrokeStyle::default(),
            z_index: z_order::GRID_LINES,
        }
    }

    /// Creates a horizontal rule at `y` spanning `x0..x1`.
    pub fn horizontal(id: MarkId, y: f64, x0: f64, x1: f64) -> Self {
        Self::new(id, x0, y, x1, y)
    }

    /// Creates a vertical rule at `x` spanning `y0..y1`.
    pub fn vertical(id: MarkId, x: f64, y0: f64, y1: f64) -> Self {
        Self::new(id, x, y0, x, y1)
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the rule mark.
    pub fn mark(&self) -> Mark {
        let mut p = BezPath::new();
        p.move_to((self.x0, self.y0));
        p.line_to((self.x1, self.y1));
        Mark::stroked(self.id, self.z_index, p, &self.stroke)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::{PathEl, Point};

    use super::*;

    #[test]
    fn horizontal_rule_is_an_open_stroke() {
        let mark = RuleMarkSpec::horizontal(MarkId::from_raw(1), 50.0, 10.0, 90.0).mark();
        assert_eq!(
            mark.path.elements(),
            &[
                PathEl::MoveTo(Point::new(10.0, 50.0)),
                PathEl::LineTo(Point::new(90.0, 50.0)),
            ]
        );
        assert!(mark.has_stroke());
        assert_eq!(mark.z_index, z_order::GRID_LINES);
    }

    #[test]
    fn vertical_rule_spans_y() {
        let mark = RuleMarkSpec::vertical(MarkId::from_raw(1), 5.0, 0.0, 40.0)
            .with_z_index(z_order::TITLES)
            .mark();
        assert_eq!(mark.bounds(), kurbo::Rect::new(5.0, 0.0, 5.0, 40.0));
        assert_eq!(mark.z_index, z_order::TITLES);
    }
}
