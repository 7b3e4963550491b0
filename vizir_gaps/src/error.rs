// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced to callers.

use core::fmt;

/// Two series that must share a position axis have different lengths.
///
/// Returned before any segment is produced. Lengths are never truncated or padded to make the
/// inputs fit, since that would silently shift one curve against the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputShapeError {
    /// Length of the reference series (the `base` curve, or the shared axis column).
    pub expected: usize,
    /// Length of the series that disagreed with it.
    pub actual: usize,
}

impl InputShapeError {
    /// Returns `Ok(())` if `actual == expected`, or the corresponding error.
    pub fn check(expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self { expected, actual })
        }
    }
}

impl fmt::Display for InputShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "series length mismatch: expected {} samples, got {}",
            self.expected, self.actual
        )
    }
}

impl core::error::Error for InputShapeError {}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn check_accepts_equal_lengths() {
        assert_eq!(InputShapeError::check(3, 3), Ok(()));
        assert_eq!(InputShapeError::check(0, 0), Ok(()));
    }

    #[test]
    fn check_reports_both_lengths() {
        assert_eq!(
            InputShapeError::check(5, 4),
            Err(InputShapeError {
                expected: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn display_names_both_lengths() {
        let err = InputShapeError {
            expected: 7,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "series length mismatch: expected 7 samples, got 2"
        );
    }
}
