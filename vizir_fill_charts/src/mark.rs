// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved path marks.

use kurbo::{BezPath, Rect, Shape};
use peniko::{Brush, Color};

use crate::StrokeStyle;

/// Stable identity for a mark.
///
/// Mark specs allocate ids upward from an `id_base`, one per emitted mark, so ids also record
/// emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Sequential id allocator used while a spec emits its marks.
#[derive(Debug)]
pub(crate) struct MarkIds(u64);

impl MarkIds {
    pub(crate) fn starting_at(id_base: u64) -> Self {
        Self(id_base)
    }

    pub(crate) fn next_id(&mut self) -> MarkId {
        let id = MarkId(self.0);
        self.0 = self.0.wrapping_add(1);
        id
    }
}

/// A path with paint, ready for a renderer.
///
/// A stroke width of `0.0` means "no stroke". Renderers should paint marks sorted by
/// `(z_index, id)`; see [`sort_marks`].
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Rendering order hint; lower values are painted first.
    pub z_index: i32,
    /// Geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint (transparent for stroke-only marks).
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl Mark {
    /// Creates a filled mark without an outline.
    pub fn filled(id: MarkId, z_index: i32, path: BezPath, fill: impl Into<Brush>) -> Self {
        Self {
            id,
            z_index,
            path,
            fill: fill.into(),
            stroke: Color::TRANSPARENT.into(),
            stroke_width: 0.0,
        }
    }

    /// Creates a stroke-only mark.
    pub fn stroked(id: MarkId, z_index: i32, path: BezPath, stroke: &StrokeStyle) -> Self {
        Self {
            id,
            z_index,
            path,
            fill: Color::TRANSPARENT.into(),
            stroke: stroke.brush.clone(),
            stroke_width: stroke.stroke_width,
        }
    }

    /// Returns the bounding box of the path (ignoring stroke width).
    pub fn bounds(&self) -> Rect {
        self.path.bounding_box()
    }

    /// Returns `true` if this mark paints an outline.
    pub fn has_stroke(&self) -> bool {
        self.stroke_width > 0.0
    }
}

/// Sorts marks into paint order: by `z_index`, then by id.
pub fn sort_marks(marks: &mut [Mark]) {
    marks.sort_unstable_by_key(|m| (m.z_index, m.id));
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use peniko::color::palette::css;

    use super::*;

    fn square() -> BezPath {
        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.line_to((10.0, 0.0));
        p.line_to((10.0, 5.0));
        p.close_path();
        p
    }

    #[test]
    fn filled_mark_has_no_stroke() {
        let m = Mark::filled(MarkId::from_raw(3), 0, square(), css::TOMATO);
        assert_eq!(m.fill, css::TOMATO.into());
        assert!(!m.has_stroke());
        assert_eq!(m.bounds(), Rect::new(0.0, 0.0, 10.0, 5.0));
    }

    #[test]
    fn stroked_mark_is_transparent_inside() {
        let m = Mark::stroked(
            MarkId::from_raw(1),
            10,
            square(),
            &StrokeStyle::solid(css::BLACK, 2.0),
        );
        assert_eq!(m.fill, Color::TRANSPARENT.into());
        assert_eq!(m.stroke, css::BLACK.into());
        assert!(m.has_stroke());
    }

    #[test]
    fn sort_orders_by_z_then_id() {
        let mut marks = vec![
            Mark::filled(MarkId::from_raw(2), 10, square(), css::RED),
            Mark::filled(MarkId::from_raw(5), 0, square(), css::RED),
            Mark::filled(MarkId::from_raw(1), 10, square(), css::RED),
        ];
        sort_marks(&mut marks);
        let order: std::vec::Vec<_> = marks.iter().map(|m| m.id.0).collect();
        assert_eq!(order, vec![5, 1, 2]);
    }

    #[test]
    fn ids_are_sequential() {
        let mut ids = MarkIds::starting_at(0x10);
        assert_eq!(ids.next_id(), MarkId(0x10));
        assert_eq!(ids.next_id(), MarkId(0x11));
    }
}
