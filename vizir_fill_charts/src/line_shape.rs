// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line shapes: how consecutive points of one run are joined.
//!
//! Shapes only ever join points inside a run handed to them; gaps are handled by the caller
//! splitting the series first.

use kurbo::{BezPath, Point};

/// How consecutive points are connected.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LineShape {
    /// Straight segments.
    #[default]
    Linear,
    /// Cardinal spline through every point.
    ///
    /// `smoothing` scales the tangents: `0.0` degenerates to straight segments, `1.0` is the
    /// usual amount.
    Spline {
        /// Tangent scale factor.
        smoothing: f64,
    },
    /// Horizontal, then vertical (step after).
    Hv,
    /// Vertical, then horizontal (step before).
    Vh,
    /// Horizontal to the x midpoint, vertical, horizontal (step centered on x).
    Hvh,
    /// Vertical to the y midpoint, horizontal, vertical.
    Vhv,
}

impl LineShape {
    /// A spline with the default smoothing of `1.0`.
    pub const SPLINE: Self = Self::Spline { smoothing: 1.0 };

    /// Returns the shape that traces the same geometry when the points are walked in reverse.
    ///
    /// Used to close a fill back along a curve: a step that goes horizontal-then-vertical
    /// forwards goes vertical-then-horizontal backwards.
    pub fn reversed(self) -> Self {
        match self {
            Self::Hv => Self::Vh,
            Self::Vh => Self::Hv,
            other => other,
        }
    }

    /// Returns a new path through `points`.
    ///
    /// A single point produces a lone `move_to`; no points produce an empty path.
    pub fn path(self, points: &[Point]) -> BezPath {
        let mut p = BezPath::new();
        if let Some(&first) = points.first() {
            p.move_to(first);
            self.extend(&mut p, points);
        }
        p
    }

    /// Continues `path` through `points`.
    ///
    /// The path's current point is assumed to be `points[0]`; only the joins from `points[0]`
    /// onward are appended.
    pub fn extend(self, path: &mut BezPath, points: &[Point]) {
        for (i, pair) in points.windows(2).enumerate() {
            let (p1, p2) = (pair[0], pair[1]);
            match self {
                Self::Linear => path.line_to(p2),
                Self::Hv => {
                    path.line_to((p2.x, p1.y));
                    path.line_to(p2);
                }
                Self::Vh => {
                    path.line_to((p1.x, p2.y));
                    path.line_to(p2);
                }
                Self::Hvh => {
                    let xm = 0.5 * (p1.x + p2.x);
                    path.line_to((xm, p1.y));
                    path.line_to((xm, p2.y));
                    path.line_to(p2);
                }
                Self::Vhv => {
                    let ym = 0.5 * (p1.y + p2.y);
                    path.line_to((p1.x, ym));
                    path.line_to((p2.x, ym));
                    path.line_to(p2);
                }
                Self::Spline { smoothing } => {
                    // Neighbors are clamped at the run ends.
                    let p0 = if i == 0 { p1 } else { points[i - 1] };
                    let p3 = points.get(i + 2).copied().unwrap_or(p2);
                    let k = smoothing / 6.0;
                    let c1 = p1 + (p2 - p0) * k;
                    let c2 = p2 - (p3 - p1) * k;
                    path.curve_to(c1, c2, p2);
                }
            }
        }
    }
}
