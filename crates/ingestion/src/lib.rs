//! Reference data ingestion library.
//!
//! Moves raw n-dimensional arrays loaded from reference datasets into
//! halo-aware, dimension-tagged fields. The layout of each array is inferred
//! from its shape alone.
//!
//! # Architecture
//!
//! The first three axes are matched against the grid extents, the trailing
//! axis (if any) becomes a named data dimension:
//!
//! | raw length    | axis labelled | data copied into |
//! |---------------|---------------|------------------|
//! | `n`           | centered      | `[h:-(h+1)]`     |
//! | `n + 2h`      | centered      | `[:-1]`          |
//! | `n + 1`       | interface     | `[h:-h]`         |
//! | `n + 2h + 1`  | interface     | `[:]`            |
//!
//! The vertical axis always uses `[:-1]` (centered) or `[:]` (interface).
//! An array with any unmatched axis is returned unchanged.
//!
//! # Example
//!
//! ```
//! use field_common::{AxisTag, GridShape};
//! use ingestion::{ingest, IngestOptions};
//! use ndarray::{ArrayD, IxDyn};
//! use quantity::QuantityFactory;
//!
//! let grid = GridShape::c12();
//! let factory = QuantityFactory::from_grid_shape(grid);
//! let raw = ArrayD::<f64>::ones(IxDyn(&[18, 18, 79]));
//!
//! let qty = ingest(raw, grid, &factory, &IngestOptions::default())
//!     .unwrap()
//!     .into_field()
//!     .unwrap();
//! assert_eq!(qty.dims(), &[AxisTag::X, AxisTag::Y, AxisTag::Z]);
//! assert_eq!(qty.shape(), &[19, 19, 80]);
//! ```

pub mod classify;
pub mod config;
pub mod dataset;
pub mod error;
mod ingester;
pub mod plan;
pub mod progress;
mod raw;
pub mod serialized;

// Re-exports
pub use classify::{classify_axis, AxisKind};
pub use config::{GridConfig, IngestConfig};
pub use dataset::{ingest_dataset, Dataset, IngestedDataset, IngestionReport};
pub use error::{IngestionError, Result};
pub use ingester::{ingest, IngestOptions, Ingested, Ingester, DEFAULT_DATA_DIM, DEFAULT_UNITS};
pub use plan::{plan_ingestion, AxisPlan, IngestPlan};
pub use progress::{StageTiming, TimedProgress};
pub use raw::{IngestedArray, Outcome, RawArray};
