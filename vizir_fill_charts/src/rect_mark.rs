// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle mark generation (plot backgrounds and frames).

use kurbo::{Rect, Shape};
use peniko::Brush;

use crate::{Mark, MarkId, StrokeStyle};

/// A rectangle mark spec.
#[derive(Clone, Debug)]
pub struct RectMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Rectangle geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Optional frame stroke.
    pub stroke: Option<StrokeStyle>,
    /// Rendering order hint.
    pub z_index: i32,
}

impl RectMarkSpec {
    /// Creates a filled rectangle behind the series.
    pub fn new(id: MarkId, rect: Rect) -> Self {
        Self {
            id,
            rect,
            fill: Brush::default(),
            stroke: None,
            z_index: crate::z_order::PLOT_BACKGROUND,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the frame stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        let mut mark = Mark::filled(
            self.id,
            self.z_index,
            self.rect.to_path(0.1),
            self.fill.clone(),
        );
        if let Some(stroke) = &self.stroke {
            mark.stroke = stroke.brush.clone();
            mark.stroke_width = stroke.stroke_width;
        }
        mark
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn background_sits_below_the_series() {
        let r = Rect::new(10.0, 20.0, 110.0, 70.0);
        let mark = RectMarkSpec::new(MarkId::from_raw(3), r)
            .with_fill(css::WHITE_SMOKE)
            .mark();
        assert_eq!(mark.bounds(), r);
        assert_eq!(mark.z_index, crate::z_order::PLOT_BACKGROUND);
        assert!(!mark.has_stroke());
    }

    #[test]
    fn frame_stroke_is_carried_on_the_same_mark() {
        let mark = RectMarkSpec::new(MarkId::from_raw(3), Rect::new(0.0, 0.0, 1.0, 1.0))
            .with_stroke(StrokeStyle::solid(css::GRAY, 0.5))
            .mark();
        assert!(mark.has_stroke());
        assert_eq!(mark.stroke, css::GRAY.into());
        assert_eq!(mark.stroke_width, 0.5);
    }
}
