// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paired-fill segmenter: runs where a base and an upper curve are both present.
//!
//! "Fill to previous curve" rendering draws the `base` curve first and then the `upper` curve
//! filled down (or across) to it. Each [`PairedSegment`] is a range where that closed region can
//! be drawn without crossing a gap in either curve. A position where only one curve is present is
//! left out entirely: closing the region there would invent a boundary.

use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;

use crate::mask::RunCursor;
use crate::{InputShapeError, SegmentRanges};

/// A maximal run of positions where both `base` and `upper` are present.
///
/// `base` and `upper` are co-indexed: `base[i]` and `upper[i]` are the samples at position
/// `start + i`. The names carry the draw order: `base` is the previous curve, `upper` is the curve
/// filled to it.
#[derive(Debug, PartialEq)]
pub struct PairedSegment<'a, T> {
    /// First position of the run.
    pub start: usize,
    /// One past the last position of the run.
    pub end: usize,
    /// Samples of the base curve at `start..end`.
    pub base: &'a [T],
    /// Samples of the upper curve at `start..end`.
    pub upper: &'a [T],
}

impl<T> Clone for PairedSegment<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PairedSegment<'_, T> {}

impl<'a, T> PairedSegment<'a, T> {
    /// Returns the position range `start..end`.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the number of positions covered (at least 1).
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always `false`: segments cover at least one position.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` for a run of a single position (a region with no extent).
    pub fn is_single(&self) -> bool {
        self.len() == 1
    }

    /// Iterates `(position, base, upper)` triples in ascending position order.
    pub fn pairs(self) -> impl ExactSizeIterator<Item = (usize, &'a T, &'a T)> {
        let start = self.start;
        self.base
            .iter()
            .zip(self.upper)
            .enumerate()
            .map(move |(i, (b, u))| (start + i, b, u))
    }
}

/// Splits two aligned series into maximal runs where neither is missing.
///
/// `base` and `upper` must have the same length; otherwise this returns [`InputShapeError`]
/// (with `expected = base.len()`) before producing anything. Runs are produced lazily in
/// ascending position order. If the two curves are never present at the same position the
/// sequence is empty.
///
/// ```
/// use vizir_gaps::{missing, segment_pairs_by_validity};
///
/// let nan = f64::NAN;
/// let base = [1.0, 2.0, nan, 4.0, 5.0];
/// let upper = [10.0, nan, 30.0, 40.0, 50.0];
///
/// let segs: Vec<_> = segment_pairs_by_validity(&base, &upper, missing)?.collect();
/// assert_eq!(segs.len(), 2);
/// assert_eq!(segs[1].range(), 3..5);
/// assert_eq!(segs[1].base, &[4.0, 5.0]);
/// assert_eq!(segs[1].upper, &[40.0, 50.0]);
/// # Ok::<(), vizir_gaps::InputShapeError>(())
/// ```
pub fn segment_pairs_by_validity<'a, T, F>(
    base: &'a [T],
    upper: &'a [T],
    is_missing: F,
) -> Result<PairedSegments<'a, T, F>, InputShapeError>
where
    F: Fn(&T) -> bool,
{
    if let Err(err) = InputShapeError::check(base.len(), upper.len()) {
        log::debug!("refusing to pair misaligned series: {err}");
        return Err(err);
    }
    Ok(PairedSegments {
        base,
        upper,
        is_missing,
        cursor: RunCursor::new(base.len()),
    })
}

/// Iterator returned by [`segment_pairs_by_validity`].
///
/// Like [`ValiditySegments`](crate::ValiditySegments), a clone replays the remaining segments.
pub struct PairedSegments<'a, T, F> {
    base: &'a [T],
    upper: &'a [T],
    is_missing: F,
    cursor: RunCursor,
}

impl<T, F> PairedSegments<'_, T, F>
where
    F: Fn(&T) -> bool,
{
    /// Consumes the iterator, returning only the position ranges of the remaining segments.
    pub fn ranges(self) -> SegmentRanges {
        self.map(|s| s.range()).collect()
    }
}

impl<T, F: Clone> Clone for PairedSegments<'_, T, F> {
    fn clone(&self) -> Self {
        Self {
            base: self.base,
            upper: self.upper,
            is_missing: self.is_missing.clone(),
            cursor: self.cursor,
        }
    }
}

impl<T, F> fmt::Debug for PairedSegments<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairedSegments")
            .field("len", &self.base.len())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl<'a, T, F> Iterator for PairedSegments<'a, T, F>
where
    F: Fn(&T) -> bool,
{
    type Item = PairedSegment<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (base, upper) = (self.base, self.upper);
        let is_missing = &self.is_missing;
        let run = self
            .cursor
            .next_run(|i| !is_missing(&base[i]) && !is_missing(&upper[i]))?;
        Some(PairedSegment {
            start: run.start,
            end: run.end,
            base: &base[run.clone()],
            upper: &upper[run],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.cursor.max_remaining()))
    }
}

impl<T, F> FusedIterator for PairedSegments<'_, T, F> where F: Fn(&T) -> bool {}
