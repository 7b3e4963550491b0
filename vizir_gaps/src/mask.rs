// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validity masks and the run partition shared by both segmenters.

extern crate alloc;

use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::ops::Range;

use crate::InputShapeError;

/// Forward scan over positions `0..len`, producing maximal runs of valid positions.
///
/// The cursor only remembers where the next scan starts, so it is cheap to copy; a copy taken
/// before iteration replays the same runs.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RunCursor {
    pos: usize,
    len: usize,
}

impl RunCursor {
    pub(crate) fn new(len: usize) -> Self {
        Self { pos: 0, len }
    }

    /// Returns the next maximal run of positions for which `is_valid` holds.
    ///
    /// Every position is tested exactly once across the whole scan.
    pub(crate) fn next_run(
        &mut self,
        mut is_valid: impl FnMut(usize) -> bool,
    ) -> Option<Range<usize>> {
        while self.pos < self.len && !is_valid(self.pos) {
            self.pos += 1;
        }
        if self.pos >= self.len {
            return None;
        }
        let start = self.pos;
        self.pos += 1;
        while self.pos < self.len && is_valid(self.pos) {
            self.pos += 1;
        }
        // `pos` is either `len` or a known-invalid position; skip it so it is not tested again.
        let end = self.pos;
        if self.pos < self.len {
            self.pos += 1;
        }
        Some(start..end)
    }

    /// Upper bound on the number of runs left (runs are separated by at least one gap).
    pub(crate) fn max_remaining(&self) -> usize {
        self.len.saturating_sub(self.pos).div_ceil(2)
    }
}

/// Computes the validity mask of a series: `true` where the sample is present.
pub fn validity_mask<T>(series: &[T], is_missing: impl Fn(&T) -> bool) -> Vec<bool> {
    series.iter().map(|v| !is_missing(v)).collect()
}

/// Computes the combined validity mask of two aligned series (logical AND).
///
/// Fails with [`InputShapeError`] if the series lengths differ.
pub fn combined_mask<T>(
    base: &[T],
    upper: &[T],
    is_missing: impl Fn(&T) -> bool,
) -> Result<Vec<bool>, InputShapeError> {
    InputShapeError::check(base.len(), upper.len())?;
    Ok(base
        .iter()
        .zip(upper)
        .map(|(b, u)| !is_missing(b) && !is_missing(u))
        .collect())
}

/// Partitions an existing validity mask into its maximal `true` runs.
///
/// This is the same partition the segmenters perform, for callers that already hold a mask
/// (for example one combined from more than two series).
pub fn mask_runs(mask: &[bool]) -> MaskRuns<'_> {
    MaskRuns {
        mask,
        cursor: RunCursor::new(mask.len()),
    }
}

/// Iterator returned by [`mask_runs`].
#[derive(Clone, Debug)]
pub struct MaskRuns<'a> {
    mask: &'a [bool],
    cursor: RunCursor,
}

impl Iterator for MaskRuns<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let mask = self.mask;
        self.cursor.next_run(|i| mask[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.cursor.max_remaining()))
    }
}

impl FusedIterator for MaskRuns<'_> {}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use std::vec::Vec;

    use super::*;
    use crate::missing;

    #[test]
    fn runs_split_at_every_boundary() {
        let mask = [true, false, true, true, false, false, true];
        let runs: Vec<_> = mask_runs(&mask).collect();
        assert_eq!(runs, vec![0..1, 2..4, 6..7]);
    }

    #[test]
    fn runs_of_empty_and_all_false_masks_are_empty() {
        assert_eq!(mask_runs(&[]).count(), 0);
        assert_eq!(mask_runs(&[false; 5]).count(), 0);
    }

    #[test]
    fn all_true_mask_is_one_run() {
        let runs: Vec<_> = mask_runs(&[true; 4]).collect();
        assert_eq!(runs, vec![0..4]);
    }

    #[test]
    fn cursor_tests_each_position_once() {
        let mask = [false, true, true, false, true, false, false];
        let mut tested = vec![0_u32; mask.len()];
        let mut cursor = RunCursor::new(mask.len());
        while cursor
            .next_run(|i| {
                tested[i] += 1;
                mask[i]
            })
            .is_some()
        {}
        assert!(tested.iter().all(|&n| n == 1), "tested counts: {tested:?}");
    }

    #[test]
    fn size_hint_bounds_the_run_count() {
        let mask = [true, false, true, false, true];
        let runs = mask_runs(&mask);
        assert_eq!(runs.size_hint(), (0, Some(3)));
        assert_eq!(runs.count(), 3);
    }

    #[test]
    fn validity_mask_flags_present_samples() {
        let ys = [1.0, f64::NAN, 3.0];
        assert_eq!(validity_mask(&ys, missing), vec![true, false, true]);
    }

    #[test]
    fn combined_mask_is_the_and_of_both_masks() {
        let base = [1.0, 2.0, f64::NAN, 4.0, 5.0];
        let upper = [10.0, f64::NAN, 30.0, 40.0, 50.0];
        assert_eq!(
            combined_mask(&base, &upper, missing),
            Ok(vec![true, false, false, true, true])
        );
    }

    #[test]
    fn combined_mask_rejects_length_mismatch() {
        let err = combined_mask(&[1.0, 2.0], &[1.0], missing).unwrap_err();
        assert_eq!(
            err,
            InputShapeError {
                expected: 2,
                actual: 1
            }
        );
    }
}
