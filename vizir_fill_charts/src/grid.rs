// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subplot grid layout.
//!
//! Splits a view into `rows x cols` plot cells separated by spacing, like Plotly's
//! `make_subplots`. Rows count from the top.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

/// A width/height pair used by grid layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in scene units.
    pub width: f64,
    /// Height in scene units.
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Space reserved around the whole grid.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margin {
    /// Left margin.
    pub left: f64,
    /// Right margin.
    pub right: f64,
    /// Top margin (titles usually go here).
    pub top: f64,
    /// Bottom margin.
    pub bottom: f64,
}

impl Margin {
    /// The same margin on all sides.
    pub const fn uniform(m: f64) -> Self {
        Self {
            left: m,
            right: m,
            top: m,
            bottom: m,
        }
    }
}

/// Layout inputs for a grid of subplots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayoutSpec {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Outer view size.
    pub size: Size,
    /// Gap between columns, as a fraction of the width inside the margins.
    pub h_spacing: f64,
    /// Gap between rows, as a fraction of the height inside the margins.
    pub v_spacing: f64,
    /// Outer margin.
    pub margin: Margin,
}

impl GridLayoutSpec {
    /// Creates a grid with Plotly's default spacing (`0.2 / cols` and `0.3 / rows`) and no margin.
    pub fn new(rows: usize, cols: usize, size: Size) -> Self {
        let per = |n: usize, total: f64| if n == 0 { 0.0 } else { total / n as f64 };
        Self {
            rows,
            cols,
            size,
            h_spacing: per(cols, 0.2),
            v_spacing: per(rows, 0.3),
            margin: Margin::default(),
        }
    }

    /// Sets the horizontal and vertical spacing fractions.
    pub fn with_spacing(mut self, h_spacing: f64, v_spacing: f64) -> Self {
        self.h_spacing = h_spacing;
        self.v_spacing = v_spacing;
        self
    }

    /// Sets the outer margin.
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// The area inside the margins (never inverted).
    pub fn inner(&self) -> Rect {
        let m = self.margin;
        let w = (self.size.width - m.left.max(0.0) - m.right.max(0.0)).max(0.0);
        let h = (self.size.height - m.top.max(0.0) - m.bottom.max(0.0)).max(0.0);
        let x0 = m.left.max(0.0);
        let y0 = m.top.max(0.0);
        Rect::new(x0, y0, x0 + w, y0 + h)
    }

    /// Returns the plot cell at `row`, `col` (0-based), or `None` if out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Rect> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let inner = self.inner();
        let (x0, x1) = track(inner.x0, inner.width(), self.cols, self.h_spacing, col);
        let (y0, y1) = track(inner.y0, inner.height(), self.rows, self.v_spacing, row);
        Some(Rect::new(x0, y0, x1, y1))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> Vec<Rect> {
        (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .filter_map(|(row, col)| self.cell(row, col))
            .collect()
    }
}

/// Start/end of cell `i` of `n` along one axis.
fn track(origin: f64, extent: f64, n: usize, spacing: f64, i: usize) -> (f64, f64) {
    let gaps = n.saturating_sub(1) as f64;
    // Total spacing may take at most the whole extent.
    let gap = if gaps > 0.0 {
        (spacing.max(0.0) * extent).min(extent / gaps)
    } else {
        0.0
    };
    let cell = (extent - gap * gaps) / n as f64;
    let start = origin + i as f64 * (cell + gap);
    (start, start + cell)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn cells_tile_the_inner_area_with_gaps() {
        let grid = GridLayoutSpec::new(2, 2, Size::new(220.0, 120.0))
            .with_spacing(0.1, 0.1)
            .with_margin(Margin::uniform(10.0));

        // Inner 200 x 100; gaps 20 x 10; cells 90 x 45.
        assert_eq!(grid.cell(0, 0), Some(Rect::new(10.0, 10.0, 100.0, 55.0)));
        assert_eq!(grid.cell(0, 1), Some(Rect::new(120.0, 10.0, 210.0, 55.0)));
        assert_eq!(grid.cell(1, 0), Some(Rect::new(10.0, 65.0, 100.0, 110.0)));
        assert_eq!(grid.cell(2, 0), None);
        assert_eq!(grid.cell(0, 2), None);
    }

    #[test]
    fn cells_are_row_major() {
        let grid = GridLayoutSpec::new(2, 3, Size::new(300.0, 200.0));
        let cells = grid.cells();
        assert_eq!(cells.len(), 6);
        assert_eq!(Some(cells[1]), grid.cell(0, 1));
        assert_eq!(Some(cells[3]), grid.cell(1, 0));
        assert!(cells[0].x1 < cells[1].x0);
        assert!(cells[0].y1 < cells[3].y0);
    }

    #[test]
    fn oversized_spacing_is_clamped() {
        let grid = GridLayoutSpec::new(1, 3, Size::new(90.0, 10.0)).with_spacing(5.0, 0.0);
        for cell in grid.cells() {
            assert!(cell.width() >= 0.0);
            assert!(cell.x1 <= 90.0 + 1e-9);
        }
    }

    #[test]
    fn oversized_margin_collapses_cells() {
        let grid = GridLayoutSpec::new(1, 1, Size::new(10.0, 10.0)).with_margin(Margin::uniform(20.0));
        let cell = grid.cell(0, 0).unwrap();
        assert_eq!(cell.width(), 0.0);
        assert_eq!(cell.height(), 0.0);
    }

    #[test]
    fn empty_grid_has_no_cells() {
        let grid = GridLayoutSpec::new(0, 4, Size::new(10.0, 10.0));
        assert!(grid.cells().is_empty());
        assert_eq!(grid.cell(0, 0), None);
    }
}
