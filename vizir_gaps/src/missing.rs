// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Missing-value conventions.
//!
//! The segmenters take an `is_missing` predicate so they do not depend on one sentinel
//! representation. [`Missing`] covers the common ones, and [`missing`] adapts it into a predicate:
//!
//! ```
//! use vizir_gaps::{missing, segment_by_validity};
//!
//! let ys = [1.0, f64::NAN, 2.0];
//! assert_eq!(segment_by_validity(&ys, missing).count(), 2);
//!
//! let opt = [Some(1), None, None, Some(4)];
//! assert_eq!(segment_by_validity(&opt, missing).count(), 2);
//! ```

/// Types with a built-in "no value here" marker.
pub trait Missing {
    /// Returns `true` if this sample carries no value.
    fn is_missing(&self) -> bool;
}

impl Missing for f64 {
    fn is_missing(&self) -> bool {
        self.is_nan()
    }
}

impl Missing for f32 {
    fn is_missing(&self) -> bool {
        self.is_nan()
    }
}

impl<T> Missing for Option<T> {
    fn is_missing(&self) -> bool {
        self.is_none()
    }
}

impl<T: Missing + ?Sized> Missing for &T {
    fn is_missing(&self) -> bool {
        (**self).is_missing()
    }
}

/// Predicate form of [`Missing::is_missing`], for passing to the segmenters.
pub fn missing<T: Missing + ?Sized>(value: &T) -> bool {
    value.is_missing()
}
