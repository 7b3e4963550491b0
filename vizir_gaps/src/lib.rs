// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gap-aware curve segmentation for `vizir` fills.
//!
//! Series with missing samples (NaN, `None`, or anything a caller-supplied predicate rejects)
//! must not be drawn as one continuous path: a line or an area fill would bridge the gap and
//! fabricate data. This crate splits series into the pieces that can be drawn safely:
//! - [`segment_by_validity`] yields maximal runs of present samples in one series, and
//! - [`segment_pairs_by_validity`] yields maximal runs where a `base` and an `upper` series are
//!   both present, for "fill to previous curve" rendering.
//!
//! Segments borrow from the input slices; nothing is copied or mutated. Both segmenters are lazy
//! single forward scans with constant state, and their iterators can be cloned to restart.
//!
//! Rendering is out of scope; see `vizir_fill_charts` for a consumer that turns segments into
//! path marks.

#![no_std]

extern crate alloc;

mod error;
mod mask;
mod missing;
mod paired;
mod segment;

pub use error::InputShapeError;
pub use mask::{MaskRuns, combined_mask, mask_runs, validity_mask};
pub use missing::{Missing, missing};
pub use paired::{PairedSegment, PairedSegments, segment_pairs_by_validity};
pub use segment::{Segment, SegmentRanges, ValiditySegments, segment_by_validity};
