//! Per-axis ranges measured from both ends of an axis.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// A contiguous range on one axis, given as elements skipped at the front
/// and elements trimmed from the back.
///
/// `AxisRange::new(3, 4)` on an axis of length 19 selects `3..15`. Keeping the
/// trim relative to the end lets one range describe the same placement on
/// buffers of different lengths.
///
/// `trim_end` reads like a negative slice stop: `None` runs to the end of the
/// axis and `Some(0)` stops at index 0, so `AxisRange::new(0, 0)` selects
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisRange {
    pub start: usize,
    pub trim_end: Option<usize>,
}

impl AxisRange {
    pub fn new(start: usize, trim_end: usize) -> Self {
        Self {
            start,
            trim_end: Some(trim_end),
        }
    }

    /// From `start` to the end of the axis.
    pub fn from_start(start: usize) -> Self {
        Self {
            start,
            trim_end: None,
        }
    }

    /// The whole axis.
    pub fn full() -> Self {
        Self::from_start(0)
    }

    /// Everything except the last element.
    pub fn drop_last() -> Self {
        Self::new(0, 1)
    }

    /// Resolve against an axis of length `len`.
    ///
    /// Returns `None` if the range does not fit.
    pub fn resolve(&self, len: usize) -> Option<Range<usize>> {
        let end = match self.trim_end {
            None => len,
            Some(0) => 0,
            Some(trim) => len.checked_sub(trim)?,
        };
        if self.start > end {
            return None;
        }
        Some(self.start..end)
    }

    /// Number of selected elements on an axis of length `len`.
    pub fn len_within(&self, len: usize) -> Option<usize> {
        self.resolve(len).map(|r| r.len())
    }

    pub fn is_full(&self) -> bool {
        self.start == 0 && self.trim_end.is_none()
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for AxisRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        if self.start > 0 {
            write!(f, "{}", self.start)?;
        }
        write!(f, ":")?;
        if let Some(trim) = self.trim_end {
            write!(f, "-{}", trim)?;
        }
        write!(f, "]")
    }
}
