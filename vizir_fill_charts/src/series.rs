// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column-to-scene helpers shared by the mark specs.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use vizir_gaps::InputShapeError;

use crate::ScaleLinear;

/// Placeholder for a sample where either coordinate is missing.
const MISSING_POINT: Point = Point::new(f64::NAN, f64::NAN);

/// Maps paired `x`/`y` columns into scene points.
///
/// A sample is present only if both coordinates are finite and map to a finite scene point.
/// Everything else (`NaN`, `±inf`) becomes a `NaN` point so the result can be split with
/// [`point_missing`]. Column lengths must agree (`x` is the reference).
pub(crate) fn scene_points(
    x: &[f64],
    y: &[f64],
    x_scale: &ScaleLinear,
    y_scale: &ScaleLinear,
) -> Result<Vec<Point>, InputShapeError> {
    InputShapeError::check(x.len(), y.len())?;
    Ok(x.iter()
        .zip(y)
        .map(|(&x, &y)| {
            if !x.is_finite() || !y.is_finite() {
                return MISSING_POINT;
            }
            let p = Point::new(x_scale.map(x), y_scale.map(y));
            if p.is_finite() { p } else { MISSING_POINT }
        })
        .collect())
}

/// Missing-value predicate for points produced by [`scene_points`].
pub(crate) fn point_missing(p: &Point) -> bool {
    !p.is_finite()
}

/// Returns `true` if a run of `len` samples should be drawn, logging the ones that are skipped.
pub(crate) fn keep_run(start: usize, len: usize, min_run_len: usize) -> bool {
    if len >= min_run_len {
        return true;
    }
    log::trace!("skipping run of {len} sample(s) at position {start} (minimum {min_run_len})");
    false
}
