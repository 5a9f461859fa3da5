//! Batch ingestion of named reference inputs.
//!
//! A reference dataset is loaded as a map of variable name to raw array.
//! Every variable goes through [`Ingester::ingest_array`], then saved names
//! are mapped to the names the calling code expects and unused inputs are
//! dropped.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

use quantity::FieldFactory;

use crate::config::IngestConfig;
use crate::error::{IngestionError, Result};
use crate::ingester::Ingester;
use crate::progress::{StageTiming, TimedProgress};
use crate::raw::{IngestedArray, Outcome, RawArray};

/// Raw inputs keyed by variable name.
pub type Dataset = BTreeMap<String, RawArray>;

/// Ingested inputs keyed by the name the calling code expects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestedDataset {
    entries: BTreeMap<String, IngestedArray>,
}

impl IngestedDataset {
    pub fn get(&self, name: &str) -> Option<&IngestedArray> {
        self.entries.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<IngestedArray> {
        self.entries.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IngestedArray)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_inner(self) -> BTreeMap<String, IngestedArray> {
        self.entries
    }

    /// Count outcomes over the current entries.
    fn count(&self, outcome: Outcome) -> usize {
        self.entries.values().filter(|v| v.outcome() == outcome).count()
    }
}

/// Summary of one dataset ingestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngestionReport {
    /// Variables placed in a field.
    pub fields: usize,
    /// Variables handed back because no layout matched.
    pub passthrough: usize,
    /// 0-dimensional variables.
    pub scalars: usize,
    /// Applied renames, saved name -> code name.
    pub renamed: BTreeMap<String, String>,
    pub removed: Vec<String>,
    pub stages: Vec<StageTiming>,
}

impl IngestionReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Ingest every variable of `dataset`.
///
/// Renames apply in key order of `config.rename`. A rename source or a
/// removal target that is not in the dataset is a
/// [`IngestionError::MissingInput`].
pub fn ingest_dataset<F>(
    dataset: Dataset,
    config: &IngestConfig,
    factory: &F,
) -> Result<(IngestedDataset, IngestionReport)>
where
    F: FieldFactory + Clone + Sync,
{
    config.validate()?;
    let grid = config.grid_shape()?;
    let ingester = Ingester::new(grid, factory.clone()).with_options(config.ingest_options());
    let mut progress = TimedProgress::new("dataset");

    info!(
        variables = dataset.len(),
        grid = %grid,
        serialized = config.serialized,
        parallel = config.parallel,
        "Ingesting dataset"
    );

    let dataset = if config.serialized {
        progress.stage("Unwrap serialized records", || unwrap_records(dataset))?
    } else {
        dataset
    };

    let entries = progress.stage("Ingest variables", || {
        if config.parallel {
            dataset
                .into_par_iter()
                .map(|(name, raw)| ingest_variable(&ingester, name, raw))
                .collect::<Result<BTreeMap<_, _>>>()
        } else {
            dataset
                .into_iter()
                .map(|(name, raw)| ingest_variable(&ingester, name, raw))
                .collect::<Result<BTreeMap<_, _>>>()
        }
    })?;

    let mut out = IngestedDataset { entries };
    let mut report = IngestionReport::default();

    progress.stage("Rename and remove inputs", || -> Result<()> {
        for (from, to) in &config.rename {
            let value = out
                .entries
                .remove(from)
                .ok_or_else(|| IngestionError::MissingInput(from.clone()))?;
            debug!(from = %from, to = %to, "Renamed input");
            out.entries.insert(to.clone(), value);
            report.renamed.insert(from.clone(), to.clone());
        }

        for name in &config.remove {
            out.entries
                .remove(name)
                .ok_or_else(|| IngestionError::MissingInput(name.clone()))?;
            debug!(name = %name, "Removed unused input");
            report.removed.push(name.clone());
        }

        Ok(())
    })?;

    report.fields = out.count(Outcome::Field);
    report.passthrough = out.count(Outcome::Passthrough);
    report.scalars = out.count(Outcome::Scalar);
    report.stages = progress.into_timings();

    info!(
        fields = report.fields,
        passthrough = report.passthrough,
        scalars = report.scalars,
        "Dataset ingested"
    );

    Ok((out, report))
}

fn unwrap_records(dataset: Dataset) -> Result<Dataset> {
    dataset
        .into_iter()
        .map(|(name, raw)| match raw.unwrap_record() {
            Ok(raw) => Ok((name, raw)),
            Err(e) => Err(IngestionError::for_variable(name, e)),
        })
        .collect()
}

fn ingest_variable<F: FieldFactory + Clone>(
    ingester: &Ingester<F>,
    name: String,
    raw: RawArray,
) -> Result<(String, IngestedArray)> {
    match ingester.ingest_array(raw) {
        Ok(ingested) => Ok((name, ingested)),
        Err(e) => Err(IngestionError::for_variable(name, e)),
    }
}
