//! Ingestion plans: which label and which range every raw axis gets.

use serde::Serialize;
use tracing::debug;

use field_common::{AxisTag, GridShape};
use quantity::AxisRange;

use crate::classify::{classify_axis, vertical_range, AxisKind};
use crate::error::{IngestionError, Result};

/// Number of leading axes matched against the grid.
pub const SPATIAL_AXES: usize = 3;

/// Number of trailing data dimensions supported after the spatial axes.
pub const MAX_DATA_DIMS: usize = 1;

/// Decision for one raw axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisPlan {
    pub kind: AxisKind,
    pub tag: AxisTag,
    pub range: AxisRange,
    /// Length of the raw axis.
    pub len: usize,
}

/// Full placement of a raw array inside a freshly allocated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestPlan {
    pub axes: Vec<AxisPlan>,
}

impl IngestPlan {
    pub fn dims(&self) -> Vec<AxisTag> {
        self.axes.iter().map(|a| a.tag.clone()).collect()
    }

    pub fn ranges(&self) -> Vec<AxisRange> {
        self.axes.iter().map(|a| a.range).collect()
    }

    /// Names and lengths of trailing data dimensions.
    pub fn data_dims(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.axes
            .iter()
            .filter(|a| a.kind == AxisKind::PassThrough)
            .map(|a| (a.tag.name(), a.len))
    }

    pub fn has_data_dims(&self) -> bool {
        self.data_dims().next().is_some()
    }
}

/// Build the plan for a raw array of shape `shape`.
///
/// Returns `Ok(None)` when the array must be handed back untouched: a
/// scalar, or any of the first three axes matching no rule. A single
/// unrecognised axis abandons the whole array. More than one trailing data
/// dimension is an error, reported only once the spatial axes classified.
pub fn plan_ingestion(
    shape: &[usize],
    grid: GridShape,
    data_dim_name: &str,
) -> Result<Option<IngestPlan>> {
    if shape.is_empty() {
        return Ok(None);
    }

    let mut axes = Vec::with_capacity(shape.len());
    for (axis, &size) in shape.iter().enumerate().take(SPATIAL_AXES) {
        let Some(kind) = classify_axis(axis, size, grid) else {
            debug!(
                axis,
                size,
                shape = ?shape,
                grid = %grid,
                "Axis matches no layout, passing array through"
            );
            return Ok(None);
        };

        let Some(tag) = kind.tag(axis) else {
            return Ok(None);
        };

        axes.push(AxisPlan {
            kind,
            tag,
            range: kind.range(grid.halo),
            len: size,
        });
    }

    if let Some(z) = axes.get_mut(2) {
        z.range = vertical_range(&z.tag);
    }

    let data_dims = shape.len().saturating_sub(SPATIAL_AXES);
    if data_dims > MAX_DATA_DIMS {
        return Err(IngestionError::UnsupportedRank {
            ndim: shape.len(),
            max: SPATIAL_AXES + MAX_DATA_DIMS,
        });
    }

    for &len in shape.iter().skip(SPATIAL_AXES) {
        axes.push(AxisPlan {
            kind: AxisKind::PassThrough,
            tag: AxisTag::extra(data_dim_name),
            range: AxisRange::full(),
            len,
        });
    }

    Ok(Some(IngestPlan { axes }))
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

    fn plan(shape: &[usize]) -> Option<IngestPlan> {
        plan_ingestion(shape, GRID, "data").unwrap()
    }

    #[test]
    fn test_scalar_has_no_plan() {
        assert_eq!(plan(&[]), None);
    }

    #[test]
    fn test_halo_padded_3d() {
        let p = plan(&[18, 18, 79]).unwrap();
        assert_eq!(p.dims(), vec![AxisTag::X, AxisTag::Y, AxisTag::Z]);
        assert_eq!(
            p.ranges(),
            vec![AxisRange::drop_last(), AxisRange::drop_last(), AxisRange::drop_last()]
        );
    }

    #[test]
    fn test_interface_1d() {
        let p = plan(&[13]).unwrap();
        assert_eq!(p.dims(), vec![AxisTag::XInterface]);
        assert_eq!(p.ranges(), vec![AxisRange::new(3, 3)]);
    }

    #[test]
    fn test_two_axes_keep_halo_trim() {
        let p = plan(&[12, 13]).unwrap();
        assert_eq!(p.dims(), vec![AxisTag::X, AxisTag::YInterface]);
        assert_eq!(p.ranges(), vec![AxisRange::new(3, 4), AxisRange::new(3, 3)]);
    }

    #[test]
    fn test_vertical_override_replaces_halo_trim() {
        // 79 on z takes the centered-compute rule, which would be [3:-4] on x/y
        let p = plan(&[12, 12, 79]).unwrap();
        assert_eq!(p.axes[2].kind, AxisKind::CenteredCompute);
        assert_eq!(p.axes[2].range, AxisRange::drop_last());
        assert_eq!(p.axes[0].range, AxisRange::new(3, 4));
    }

    #[test]
    fn test_vertical_override_on_halo_sized_z() {
        // nz + 2h on z: still [:-1], never [h:-(h+1)]
        let p = plan(&[12, 12, 85]).unwrap();
        assert_eq!(p.axes[2].kind, AxisKind::CenteredHaloPadded);
        assert_eq!(p.axes[2].tag, AxisTag::Z);
        assert_eq!(p.axes[2].range, AxisRange::drop_last());
    }

    #[test]
    fn test_vertical_override_interface() {
        let p = plan(&[12, 12, 80]).unwrap();
        assert_eq!(p.axes[2].tag, AxisTag::ZInterface);
        assert_eq!(p.axes[2].range, AxisRange::full());

        let p = plan(&[12, 12, 86]).unwrap();
        assert_eq!(p.axes[2].tag, AxisTag::ZInterface);
        assert_eq!(p.axes[2].range, AxisRange::full());
    }

    #[test]
    fn test_unrecognised_axis_abandons_plan() {
        assert_eq!(plan(&[14]), None);
        assert_eq!(plan(&[12, 12, 50]), None);
        assert_eq!(plan(&[18, 7, 79]), None);
    }

    #[test]
    fn test_data_dimension() {
        let p = plan(&[12, 12, 79, 5]).unwrap();
        assert_eq!(p.dims()[3], AxisTag::extra("data"));
        assert_eq!(p.axes[3].range, AxisRange::full());
        assert_eq!(p.data_dims().collect::<Vec<_>>(), vec![("data", 5)]);
        assert!(p.has_data_dims());
    }

    #[test]
    fn test_too_many_data_dimensions() {
        let err = plan_ingestion(&[12, 12, 79, 5, 2], GRID, "data").unwrap_err();
        assert!(matches!(
            err,
            IngestionError::UnsupportedRank { ndim: 5, max: 4 }
        ));
    }

    #[test]
    fn test_unrecognised_axis_wins_over_rank_check() {
        assert_eq!(plan_ingestion(&[1, 12, 79, 5, 2], GRID, "data").unwrap(), None);
    }
}
