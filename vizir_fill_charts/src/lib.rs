// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gap-aware line and fill marks.
//!
//! This crate is the rendering side of `vizir_gaps`: it turns numeric columns that may contain
//! missing samples (`NaN` or `±inf`) into resolved path [`Mark`]s, never drawing across a gap.
//! - **Scales** map data values into scene coordinates.
//! - **Line shapes** trace a run of points as straight, spline or step segments.
//! - **Marks** draw lines, markers, fills to a zero axis, self-closed fills, and fills between a
//!   base and an upper curve ("fill to previous").
//! - **Grid layout** splits a view into subplot cells.
//!
//! Output is plain data (`kurbo::BezPath` plus `peniko::Brush` paint); rasterizing it is out of
//! scope.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod area_mark;
mod band_mark;
#[cfg(test)]
mod fill_tests;
#[cfg(not(feature = "std"))]
mod float;
mod grid;
mod line_mark;
mod line_shape;
mod mark;
mod point_mark;
mod rect_mark;
mod rule_mark;
mod scale;
mod series;
mod style;
mod symbol;
mod z_order;

pub use area_mark::{AreaFill, AreaMarkSpec};
pub use band_mark::{BandMarkSpec, BandOrient};
pub use grid::{GridLayoutSpec, Margin, Size};
pub use line_mark::LineMarkSpec;
pub use line_shape::LineShape;
pub use mark::{Mark, MarkId, sort_marks};
pub use point_mark::PointMarkSpec;
pub use rect_mark::RectMarkSpec;
pub use rule_mark::RuleMarkSpec;
pub use scale::{ScaleLinear, ScaleLinearSpec, infer_domain_f64};
pub use style::StrokeStyle;
pub use symbol::Symbol;
pub use vizir_gaps::InputShapeError;
pub use z_order::*;
