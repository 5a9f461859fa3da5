//! Dtype-tagged arrays for heterogeneous datasets.
//!
//! Reference datasets mix float fields with integer configuration values,
//! so dataset-level code works on these enums and dispatches to the generic
//! [`ingest`](crate::ingest).

use ndarray::ArrayD;

use quantity::{FieldElement, QuantityMetadata};

use crate::error::Result;
use crate::ingester::Ingested;
use crate::serialized::unwrap_record;

/// A raw array of one of the supported element types.
#[derive(Debug, Clone, PartialEq)]
pub enum RawArray {
    F32(ArrayD<f32>),
    F64(ArrayD<f64>),
    I32(ArrayD<i32>),
    I64(ArrayD<i64>),
}

impl RawArray {
    pub fn shape(&self) -> &[usize] {
        match self {
            Self::F32(a) => a.shape(),
            Self::F64(a) => a.shape(),
            Self::I32(a) => a.shape(),
            Self::I64(a) => a.shape(),
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    pub fn dtype(&self) -> &'static str {
        match self {
            Self::F32(_) => f32::DTYPE,
            Self::F64(_) => f64::DTYPE,
            Self::I32(_) => i32::DTYPE,
            Self::I64(_) => i64::DTYPE,
        }
    }

    /// Strip the leading savepoint and rank axes of a serialized record.
    pub fn unwrap_record(self) -> Result<Self> {
        Ok(match self {
            Self::F32(a) => Self::F32(unwrap_record(a)?),
            Self::F64(a) => Self::F64(unwrap_record(a)?),
            Self::I32(a) => Self::I32(unwrap_record(a)?),
            Self::I64(a) => Self::I64(unwrap_record(a)?),
        })
    }
}

impl From<ArrayD<f32>> for RawArray {
    fn from(a: ArrayD<f32>) -> Self {
        Self::F32(a)
    }
}

impl From<ArrayD<f64>> for RawArray {
    fn from(a: ArrayD<f64>) -> Self {
        Self::F64(a)
    }
}

impl From<ArrayD<i32>> for RawArray {
    fn from(a: ArrayD<i32>) -> Self {
        Self::I32(a)
    }
}

impl From<ArrayD<i64>> for RawArray {
    fn from(a: ArrayD<i64>) -> Self {
        Self::I64(a)
    }
}

/// How an array came out of ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Field,
    Scalar,
    Passthrough,
}

/// Ingestion result for a dtype-tagged array.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestedArray {
    F32(Ingested<f32>),
    F64(Ingested<f64>),
    I32(Ingested<i32>),
    I64(Ingested<i64>),
}

impl IngestedArray {
    pub fn outcome(&self) -> Outcome {
        fn of<T: FieldElement>(i: &Ingested<T>) -> Outcome {
            match i {
                Ingested::Field(_) => Outcome::Field,
                Ingested::Raw(a) if a.ndim() == 0 => Outcome::Scalar,
                Ingested::Raw(_) => Outcome::Passthrough,
            }
        }

        match self {
            Self::F32(i) => of(i),
            Self::F64(i) => of(i),
            Self::I32(i) => of(i),
            Self::I64(i) => of(i),
        }
    }

    pub fn is_field(&self) -> bool {
        self.outcome() == Outcome::Field
    }

    pub fn dtype(&self) -> &'static str {
        match self {
            Self::F32(_) => f32::DTYPE,
            Self::F64(_) => f64::DTYPE,
            Self::I32(_) => i32::DTYPE,
            Self::I64(_) => i64::DTYPE,
        }
    }

    /// Field description, `None` for passthrough values.
    pub fn metadata(&self) -> Option<QuantityMetadata> {
        match self {
            Self::F32(i) => i.as_field().map(|q| q.metadata()),
            Self::F64(i) => i.as_field().map(|q| q.metadata()),
            Self::I32(i) => i.as_field().map(|q| q.metadata()),
            Self::I64(i) => i.as_field().map(|q| q.metadata()),
        }
    }

    /// Scalar value widened to f64, for integer configuration inputs.
    pub fn scalar_f64(&self) -> Option<f64> {
        match self {
            Self::F32(i) => i.scalar().map(f64::from),
            Self::F64(i) => i.scalar(),
            Self::I32(i) => i.scalar().map(f64::from),
            Self::I64(i) => i.scalar().map(|v| v as f64),
        }
    }
}
