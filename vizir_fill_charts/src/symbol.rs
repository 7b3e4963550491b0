// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Symbol helpers for point markers.

use kurbo::{BezPath, Circle, Shape};

/// A small set of symbol shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A square (axis-aligned).
    Square,
    /// A circle.
    #[default]
    Circle,
}

impl Symbol {
    /// Appends this symbol centered at `cx, cy` to `path`, using `size` as the diameter/side.
    pub fn append_to(self, path: &mut BezPath, cx: f64, cy: f64, size: f64) {
        match self {
            Self::Square => append_square(path, cx, cy, size),
            Self::Circle => append_circle(path, cx, cy, size),
        }
    }

    /// Returns a path for this symbol centered at `cx, cy`.
    pub fn path(self, cx: f64, cy: f64, size: f64) -> BezPath {
        let mut p = BezPath::new();
        self.append_to(&mut p, cx, cy, size);
        p
    }
}

fn append_square(p: &mut BezPath, cx: f64, cy: f64, size: f64) {
    let half = size * 0.5;
    let x0 = cx - half;
    let y0 = cy - half;
    let x1 = cx + half;
    let y1 = cy + half;
    p.move_to((x0, y0));
    p.line_to((x1, y0));
    p.line_to((x1, y1));
    p.line_to((x0, y1));
    p.close_path();
}

fn append_circle(p: &mut BezPath, cx: f64, cy: f64, size: f64) {
    let circle = Circle::new((cx, cy), size * 0.5);
    // Marker-sized circles; a renderer that cares would pick this from the device pixel size.
    let tolerance = 0.1;
    p.extend(circle.path_elements(tolerance));
}
