// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The validity segmenter: maximal runs of present samples in one series.

use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;

use smallvec::SmallVec;

use crate::mask::RunCursor;

/// Run ranges collected from a segmenter.
///
/// Most plotted series have a handful of gaps at most, so the first few ranges stay inline.
pub type SegmentRanges = SmallVec<[Range<usize>; 4]>;

/// A maximal run of present samples in one series.
///
/// `values` borrows `series[start..end]`; it is never empty.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, T> {
    /// First position of the run.
    pub start: usize,
    /// One past the last position of the run.
    pub end: usize,
    /// The samples at `start..end`.
    pub values: &'a [T],
}

impl<T> Clone for Segment<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Segment<'_, T> {}

impl<'a, T> Segment<'a, T> {
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

    /// Returns `true` for a run of a single sample.
    ///
    /// Such a run is legal but degenerate: as a line or an area it has no extent.
    pub fn is_single(&self) -> bool {
        self.len() == 1
    }

    /// Iterates `(position, value)` pairs.
    pub fn positions(self) -> impl ExactSizeIterator<Item = (usize, &'a T)> {
        let start = self.start;
        self.values
            .iter()
            .enumerate()
            .map(move |(i, v)| (start + i, v))
    }
}

/// Splits `series` into maximal runs of samples for which `is_missing` is `false`.
///
/// Runs are produced lazily, in increasing position order, and together cover every present
/// sample exactly once. An empty or fully missing series produces no runs.
///
/// ```
/// use vizir_gaps::{missing, segment_by_validity};
///
/// let ys = [1.0, f64::NAN, 2.0, 3.0, f64::NAN, f64::NAN, 4.0];
/// let ranges: Vec<_> = segment_by_validity(&ys, missing).map(|s| s.range()).collect();
/// assert_eq!(ranges, [0..1, 2..4, 6..7]);
/// ```
pub fn segment_by_validity<T, F>(series: &[T], is_missing: F) -> ValiditySegments<'_, T, F>
where
    F: Fn(&T) -> bool,
{
    ValiditySegments {
        series,
        is_missing,
        cursor: RunCursor::new(series.len()),
    }
}

/// Iterator returned by [`segment_by_validity`].
///
/// Cloning it before (or during) iteration gives an independent iterator that replays the same
/// segments from the same input.
pub struct ValiditySegments<'a, T, F> {
    series: &'a [T],
    is_missing: F,
    cursor: RunCursor,
}

impl<'a, T, F> ValiditySegments<'a, T, F>
where
    F: Fn(&T) -> bool,
{
    /// Consumes the iterator, returning only the position ranges of the remaining segments.
    pub fn ranges(self) -> SegmentRanges {
        self.map(|s| s.range()).collect()
    }
}

impl<T, F: Clone> Clone for ValiditySegments<'_, T, F> {
    fn clone(&self) -> Self {
        Self {
            series: self.series,
            is_missing: self.is_missing.clone(),
            cursor: self.cursor,
        }
    }
}

impl<T, F> fmt::Debug for ValiditySegments<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValiditySegments")
            .field("len", &self.series.len())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl<'a, T, F> Iterator for ValiditySegments<'a, T, F>
where
    F: Fn(&T) -> bool,
{
    type Item = Segment<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let series = self.series;
        let is_missing = &self.is_missing;
        let run = self.cursor.next_run(|i| !is_missing(&series[i]))?;
        Some(Segment {
            start: run.start,
            end: run.end,
            values: &series[run],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.cursor.max_remaining()))
    }
}

impl<T, F> FusedIterator for ValiditySegments<'_, T, F> where F: Fn(&T) -> bool {}
