//! Dimension labels for structured fields.
//!
//! Every axis of a field carries one of six spatial labels or a named extra
//! (data) dimension such as a tracer index.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label attached to one axis of a structured field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisTag {
    /// Cell-centered x
    X,
    /// Cell-centered y
    Y,
    /// Cell-centered z (vertical levels)
    Z,
    /// x cell faces
    XInterface,
    /// y cell faces
    YInterface,
    /// z level interfaces
    ZInterface,
    /// Non-spatial data dimension registered by name with the sizer
    Extra(String),
}

/// Cell-centered labels indexed by logical axis (x, y, z).
pub const CENTERED_DIMS: [AxisTag; 3] = [AxisTag::X, AxisTag::Y, AxisTag::Z];

/// Interface labels indexed by logical axis (x, y, z).
pub const INTERFACE_DIMS: [AxisTag; 3] =
    [AxisTag::XInterface, AxisTag::YInterface, AxisTag::ZInterface];

/// Labels that receive halo padding.
pub const HORIZONTAL_DIMS: [AxisTag; 4] = [
    AxisTag::X,
    AxisTag::XInterface,
    AxisTag::Y,
    AxisTag::YInterface,
];

impl AxisTag {
    /// Cell-centered label for logical axis 0, 1 or 2.
    pub fn centered(axis: usize) -> Option<Self> {
        CENTERED_DIMS.get(axis).cloned()
    }

    /// Interface label for logical axis 0, 1 or 2.
    pub fn interface(axis: usize) -> Option<Self> {
        INTERFACE_DIMS.get(axis).cloned()
    }

    /// Create a named extra dimension.
    pub fn extra(name: impl Into<String>) -> Self {
        Self::Extra(name.into())
    }

    /// Canonical dimension name.
    pub fn name(&self) -> &str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::XInterface => "x_interface",
            Self::YInterface => "y_interface",
            Self::ZInterface => "z_interface",
            Self::Extra(name) => name,
        }
    }

    /// Logical spatial axis (0 = x, 1 = y, 2 = z), `None` for extra dims.
    pub fn spatial_axis(&self) -> Option<usize> {
        match self {
            Self::X | Self::XInterface => Some(0),
            Self::Y | Self::YInterface => Some(1),
            Self::Z | Self::ZInterface => Some(2),
            Self::Extra(_) => None,
        }
    }

    /// True for x/y labels, which carry a halo.
    pub fn is_horizontal(&self) -> bool {
        matches!(self.spatial_axis(), Some(0) | Some(1))
    }

    /// True for z and z_interface.
    pub fn is_vertical(&self) -> bool {
        self.spatial_axis() == Some(2)
    }

    /// True for labels located on cell faces.
    pub fn is_interface(&self) -> bool {
        matches!(self, Self::XInterface | Self::YInterface | Self::ZInterface)
    }

    pub fn is_extra(&self) -> bool {
        matches!(self, Self::Extra(_))
    }
}

impl fmt::Display for AxisTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
