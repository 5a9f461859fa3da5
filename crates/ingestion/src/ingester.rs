//! Raw array to structured field ingestion.

use ndarray::ArrayD;
use tracing::{debug, trace};

use field_common::GridShape;
use quantity::{safe_assign_array, FieldElement, FieldFactory, Quantity};

use crate::error::Result;
use crate::plan::plan_ingestion;
use crate::raw::{IngestedArray, RawArray};

/// Default unit string attached to ingested fields.
pub const DEFAULT_UNITS: &str = "n/a";

/// Default name of the trailing data dimension.
pub const DEFAULT_DATA_DIM: &str = "data";

/// Outcome of ingesting one raw array.
#[derive(Debug, Clone, PartialEq)]
pub enum Ingested<T> {
    /// The array was placed inside a newly allocated field.
    Field(Quantity<T>),
    /// The array was handed back untouched (scalar or unrecognised shape).
    Raw(ArrayD<T>),
}

impl<T: FieldElement> Ingested<T> {
    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(_))
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }

    pub fn as_field(&self) -> Option<&Quantity<T>> {
        match self {
            Self::Field(q) => Some(q),
            Self::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&ArrayD<T>> {
        match self {
            Self::Raw(a) => Some(a),
            Self::Field(_) => None,
        }
    }

    pub fn into_field(self) -> Option<Quantity<T>> {
        match self {
            Self::Field(q) => Some(q),
            Self::Raw(_) => None,
        }
    }

    pub fn into_raw(self) -> Option<ArrayD<T>> {
        match self {
            Self::Raw(a) => Some(a),
            Self::Field(_) => None,
        }
    }

    /// The value of a 0-dimensional passthrough.
    pub fn scalar(&self) -> Option<T> {
        match self {
            Self::Raw(a) if a.ndim() == 0 => a.iter().next().copied(),
            _ => None,
        }
    }
}

/// Per-call settings that are not part of the grid geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOptions {
    /// Unit string attached to every allocated field.
    pub units: String,
    /// Name registered for a trailing data dimension.
    pub data_dim_name: String,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            units: DEFAULT_UNITS.to_string(),
            data_dim_name: DEFAULT_DATA_DIM.to_string(),
        }
    }
}

/// Move a raw array into a halo-aware field.
///
/// Scalars and arrays whose first three axes do not all match a known
/// layout come back as [`Ingested::Raw`] without touching the factory.
/// Otherwise one field is allocated and the raw data copied into the
/// planned region. A trailing data dimension is registered on a copy of
/// `factory`, so the caller's factory is never modified.
///
/// # Errors
/// - [`IngestionError::UnsupportedRank`](crate::IngestionError::UnsupportedRank)
///   for more than one trailing data dimension
/// - [`IngestionError::Quantity`](crate::IngestionError::Quantity) if the
///   planned region does not have exactly the raw shape
pub fn ingest<T, F>(
    raw: ArrayD<T>,
    grid: GridShape,
    factory: &F,
    options: &IngestOptions,
) -> Result<Ingested<T>>
where
    T: FieldElement,
    F: FieldFactory + Clone,
{
    if raw.ndim() == 0 {
        trace!(dtype = T::DTYPE, "Scalar input, passing through");
        return Ok(Ingested::Raw(raw));
    }

    let Some(plan) = plan_ingestion(raw.shape(), grid, &options.data_dim_name)? else {
        return Ok(Ingested::Raw(raw));
    };

    let dims = plan.dims();
    let mut qty = if plan.has_data_dims() {
        let mut local = factory.clone();
        for (name, len) in plan.data_dims() {
            local.register_extra_dimension(name, len);
        }
        local.create_empty::<T>(&dims, &options.units)?
    } else {
        factory.create_empty::<T>(&dims, &options.units)?
    };

    safe_assign_array(qty.region_mut(&plan.ranges())?, &raw.view())?;

    debug!(
        shape = ?raw.shape(),
        dims = ?dims.iter().map(|d| d.name()).collect::<Vec<_>>(),
        dtype = T::DTYPE,
        "Ingested array into field"
    );

    Ok(Ingested::Field(qty))
}

/// Ingester bound to one grid and one factory.
#[derive(Debug, Clone)]
pub struct Ingester<F> {
    grid: GridShape,
    factory: F,
    options: IngestOptions,
}

impl<F: FieldFactory + Clone> Ingester<F> {
    pub fn new(grid: GridShape, factory: F) -> Self {
        Self {
            grid,
            factory,
            options: IngestOptions::default(),
        }
    }

    pub fn with_options(mut self, options: IngestOptions) -> Self {
        self.options = options;
        self
    }

    pub fn grid(&self) -> GridShape {
        self.grid
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn options(&self) -> &IngestOptions {
        &self.options
    }

    /// Ingest a typed array.
    pub fn ingest<T: FieldElement>(&self, raw: ArrayD<T>) -> Result<Ingested<T>> {
        ingest(raw, self.grid, &self.factory, &self.options)
    }

    /// Ingest a dtype-tagged array.
    pub fn ingest_array(&self, raw: RawArray) -> Result<IngestedArray> {
        Ok(match raw {
            RawArray::F32(a) => IngestedArray::F32(self.ingest(a)?),
            RawArray::F64(a) => IngestedArray::F64(self.ingest(a)?),
            RawArray::I32(a) => IngestedArray::I32(self.ingest(a)?),
            RawArray::I64(a) => IngestedArray::I64(self.ingest(a)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use field_common::AxisTag;
    use ndarray::IxDyn;
    use quantity::{AxisRange, QuantityFactory};

    fn c12() -> (GridShape, QuantityFactory) {
        let grid = GridShape::c12();
        (grid, QuantityFactory::from_grid_shape(grid))
    }

    #[test]
    fn test_scalar_passthrough() {
        let (grid, factory) = c12();
        let raw = ArrayD::from_elem(IxDyn(&[]), 3.5f32);
        let out = ingest(raw, grid, &factory, &IngestOptions::default()).unwrap();
        assert_eq!(out.scalar(), Some(3.5));
    }

    #[test]
    fn test_unclassifiable_passthrough_returns_same_array() {
        let (grid, factory) = c12();
        let raw = ArrayD::from_shape_fn(IxDyn(&[14, 12]), |i| (i[0] + i[1]) as i32);
        let out = ingest(raw.clone(), grid, &factory, &IngestOptions::default()).unwrap();
        assert_eq!(out.into_raw(), Some(raw));
    }

    #[test]
    fn test_interface_1d() {
        let (grid, factory) = c12();
        let raw = ArrayD::from_shape_fn(IxDyn(&[13]), |i| i[0] as f64 + 1.0);
        let out = ingest(raw.clone(), grid, &factory, &IngestOptions::default()).unwrap();

        let qty = out.into_field().unwrap();
        assert_eq!(qty.dims(), &[AxisTag::XInterface]);
        assert_eq!(qty.shape(), &[19]);
        assert_eq!(qty.region(&[AxisRange::new(3, 3)]).unwrap(), raw.view());
        assert_eq!(qty.data()[2], 0.0);
        assert_eq!(qty.data()[16], 0.0);
    }

    #[test]
    fn test_units_from_options() {
        let (grid, factory) = c12();
        let options = IngestOptions {
            units: "kg/kg".to_string(),
            ..IngestOptions::default()
        };
        let raw = ArrayD::<f32>::zeros(IxDyn(&[12, 12]));
        let qty = ingest(raw, grid, &factory, &options)
            .unwrap()
            .into_field()
            .unwrap();
        assert_eq!(qty.units(), "kg/kg");
    }

    #[test]
    fn test_ingester_dispatches_dtype() {
        let (grid, factory) = c12();
        let ingester = Ingester::new(grid, factory);
        let raw = RawArray::I64(ArrayD::zeros(IxDyn(&[12, 12, 79])));

        let out = ingester.ingest_array(raw).unwrap();
        assert!(out.is_field());
        assert_eq!(out.dtype(), "int64");
    }
}
