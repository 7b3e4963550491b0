// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for generated marks.
//!
//! Renderers sort by `(z_index, MarkId)`. Fills sit below strokes so a band's outlines stay
//! visible, and within one z-index the id (emission order) decides: a band's base curve is
//! emitted before its upper curve.

/// Plot background/frame fills.
pub const PLOT_BACKGROUND: i32 = -100;
/// Zero lines and other guides drawn behind series.
pub const GRID_LINES: i32 = -50;

/// Filled series marks (areas, bands).
pub const SERIES_FILL: i32 = 0;
/// Stroked series marks (lines, outlines).
pub const SERIES_STROKE: i32 = 10;
/// Point markers drawn above lines.
pub const SERIES_POINTS: i32 = 20;

/// Chart-level titles and annotations.
pub const TITLES: i32 = 80;
