//! Per-axis shape classification.
//!
//! A raw axis is recognised purely from its length compared to the compute
//! extent `e` and halo `h` of the matching logical axis:
//!
//! | length        | kind                  | tag       | range       |
//! |---------------|-----------------------|-----------|-------------|
//! | `e`           | `CenteredCompute`     | centered  | `[h:-(h+1)]`|
//! | `e + 2h`      | `CenteredHaloPadded`  | centered  | `[:-1]`     |
//! | `e + 1`       | `InterfaceCompute`    | interface | `[h:-h]`    |
//! | `e + 2h + 1`  | `InterfaceHaloPadded` | interface | `[:]`       |
//!
//! Rules are tried top to bottom, so with `h = 0` the compute variants win.
//! With `h = 0` the interface-compute range `[0:-0]` is empty and the copy
//! into it fails with a shape mismatch.
//! The ranges address a buffer sized by
//! [`SubtileGridSizer`](quantity::SubtileGridSizer), which allocates
//! `e + 2h + 1` points on x and y.

use serde::{Deserialize, Serialize};

use field_common::{AxisTag, GridShape};
use quantity::AxisRange;

/// How one raw axis relates to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisKind {
    /// Exactly the compute extent, no halo.
    CenteredCompute,
    /// Compute extent plus halo on both sides.
    CenteredHaloPadded,
    /// Compute extent plus one interface point, no halo.
    InterfaceCompute,
    /// Interface points plus halo on both sides.
    InterfaceHaloPadded,
    /// Trailing data dimension, copied whole.
    PassThrough,
}

impl AxisKind {
    /// Spatial kinds in the order they are tried.
    pub const SPATIAL: [AxisKind; 4] = [
        AxisKind::CenteredCompute,
        AxisKind::CenteredHaloPadded,
        AxisKind::InterfaceCompute,
        AxisKind::InterfaceHaloPadded,
    ];

    /// Raw length this kind expects for an axis with the given extent.
    ///
    /// `None` for [`AxisKind::PassThrough`], which accepts any length, and
    /// when the length does not fit in `usize`.
    pub fn expected_len(&self, extent: usize, halo: usize) -> Option<usize> {
        let padded = || halo.checked_mul(2).and_then(|h2| extent.checked_add(h2));
        match self {
            Self::CenteredCompute => Some(extent),
            Self::CenteredHaloPadded => padded(),
            Self::InterfaceCompute => extent.checked_add(1),
            Self::InterfaceHaloPadded => padded()?.checked_add(1),
            Self::PassThrough => None,
        }
    }

    pub fn matches(&self, size: usize, extent: usize, halo: usize) -> bool {
        self.expected_len(extent, halo) == Some(size)
    }

    pub fn is_interface(&self) -> bool {
        matches!(self, Self::InterfaceCompute | Self::InterfaceHaloPadded)
    }

    /// Dimension label for logical axis `axis`.
    pub fn tag(&self, axis: usize) -> Option<AxisTag> {
        match self {
            Self::CenteredCompute | Self::CenteredHaloPadded => AxisTag::centered(axis),
            Self::InterfaceCompute | Self::InterfaceHaloPadded => AxisTag::interface(axis),
            Self::PassThrough => None,
        }
    }

    /// Placement of the raw data inside a horizontally padded buffer.
    pub fn range(&self, halo: usize) -> AxisRange {
        match self {
            Self::CenteredCompute => AxisRange::new(halo, halo + 1),
            Self::CenteredHaloPadded => AxisRange::drop_last(),
            Self::InterfaceCompute => AxisRange::new(halo, halo),
            Self::InterfaceHaloPadded | Self::PassThrough => AxisRange::full(),
        }
    }
}

/// Classify raw axis `axis` of length `size`.
///
/// Returns `None` when no rule matches or `axis` is not a spatial axis.
pub fn classify_axis(axis: usize, size: usize, grid: GridShape) -> Option<AxisKind> {
    let extent = grid.extent(axis)?;
    AxisKind::SPATIAL
        .into_iter()
        .find(|kind| kind.matches(size, extent, grid.halo))
}

/// Range used for the vertical axis once all three spatial axes are known.
///
/// z never carries a halo: centered data fills all but the top interface
/// level and interface data fills the whole axis.
pub fn vertical_range(tag: &AxisTag) -> AxisRange {
    match tag {
        AxisTag::ZInterface => AxisRange::full(),
        _ => AxisRange::drop_last(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: GridShape = GridShape {
        nx: 12,
        ny: 12,
        nz: 79,
        halo: 3,
    };

    #[test]
    fn test_centered_compute_rule() {
        assert!(AxisKind::CenteredCompute.matches(12, 12, 3));
        assert!(!AxisKind::CenteredCompute.matches(13, 12, 3));
    }

    #[test]
    fn test_centered_halo_rule() {
        assert!(AxisKind::CenteredHaloPadded.matches(18, 12, 3));
        assert!(!AxisKind::CenteredHaloPadded.matches(12, 12, 3));
    }

    #[test]
    fn test_interface_compute_rule() {
        assert!(AxisKind::InterfaceCompute.matches(13, 12, 3));
        assert!(!AxisKind::InterfaceCompute.matches(19, 12, 3));
    }

    #[test]
    fn test_interface_halo_rule() {
        assert!(AxisKind::InterfaceHaloPadded.matches(19, 12, 3));
        assert!(!AxisKind::InterfaceHaloPadded.matches(18, 12, 3));
    }

    #[test]
    fn test_passthrough_never_matches_spatial_lengths() {
        assert!(!AxisKind::PassThrough.matches(12, 12, 3));
        assert_eq!(AxisKind::PassThrough.tag(0), None);
    }

    #[test]
    fn test_classify_axis() {
        assert_eq!(classify_axis(0, 12, GRID), Some(AxisKind::CenteredCompute));
        assert_eq!(classify_axis(1, 18, GRID), Some(AxisKind::CenteredHaloPadded));
        assert_eq!(classify_axis(0, 13, GRID), Some(AxisKind::InterfaceCompute));
        assert_eq!(classify_axis(1, 19, GRID), Some(AxisKind::InterfaceHaloPadded));
        assert_eq!(classify_axis(2, 79, GRID), Some(AxisKind::CenteredCompute));
        assert_eq!(classify_axis(2, 80, GRID), Some(AxisKind::InterfaceCompute));
    }

    #[test]
    fn test_classify_axis_unrecognised() {
        assert_eq!(classify_axis(0, 14, GRID), None);
        assert_eq!(classify_axis(2, 7, GRID), None);
        // Not a spatial axis
        assert_eq!(classify_axis(3, 12, GRID), None);
    }

    #[test]
    fn test_classify_prefers_compute_without_halo() {
        let grid = GridShape::new(6, 6, 4, 0);
        assert_eq!(classify_axis(0, 6, grid), Some(AxisKind::CenteredCompute));
        assert_eq!(classify_axis(0, 7, grid), Some(AxisKind::InterfaceCompute));
    }

    #[test]
    fn test_tags() {
        assert_eq!(AxisKind::CenteredHaloPadded.tag(1), Some(AxisTag::Y));
        assert_eq!(AxisKind::InterfaceCompute.tag(2), Some(AxisTag::ZInterface));
        assert_eq!(AxisKind::CenteredCompute.tag(3), None);
    }

    #[test]
    fn test_ranges() {
        assert_eq!(AxisKind::CenteredCompute.range(3), AxisRange::new(3, 4));
        assert_eq!(AxisKind::CenteredHaloPadded.range(3), AxisRange::drop_last());
        assert_eq!(AxisKind::InterfaceCompute.range(3), AxisRange::new(3, 3));
        assert_eq!(AxisKind::InterfaceHaloPadded.range(3), AxisRange::full());
        // No halo: [0:-0] leaves no room for interface data
        assert_eq!(AxisKind::InterfaceCompute.range(0).len_within(7), Some(0));
    }

    #[test]
    fn test_huge_extent_does_not_overflow() {
        let grid = GridShape::new(usize::MAX, 1, 1, 0);
        assert_eq!(AxisKind::InterfaceCompute.expected_len(usize::MAX, 0), None);
        assert_eq!(AxisKind::CenteredHaloPadded.expected_len(usize::MAX, 1), None);
        assert_eq!(classify_axis(0, 3, grid), None);
        assert_eq!(classify_axis(0, usize::MAX, grid), Some(AxisKind::CenteredCompute));
    }

    #[test]
    fn test_vertical_range() {
        assert_eq!(vertical_range(&AxisTag::Z), AxisRange::drop_last());
        assert_eq!(vertical_range(&AxisTag::ZInterface), AxisRange::full());
    }

    #[test]
    fn test_ranges_fit_padded_buffer() {
        let padded = GRID.nx + 2 * GRID.halo + 1;
        for kind in AxisKind::SPATIAL {
            let expected = kind.expected_len(GRID.nx, GRID.halo).unwrap();
            assert_eq!(kind.range(GRID.halo).len_within(padded), Some(expected), "{kind:?}");
        }
    }
}
