//! Ingestion configuration.
//!
//! Settings come from a YAML document (with `${VAR}` / `${VAR:-default}`
//! substitution), from environment variables, or from `Default`.
//!
//! ```yaml
//! grid: c24                 # preset, or {nx: 24, ny: 24, nz: 72, halo: 3}
//! units: "n/a"
//! data_dim_name: ntracers
//! serialized: true
//! parallel: false
//! rename:
//!   qv: specific_humidity
//! remove:
//!   - unused_flag
//! ```

use anyhow::{Context, Result as AnyResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use field_common::{AxisTag, GridShape, CENTERED_DIMS, INTERFACE_DIMS};

use crate::error::{IngestionError, Result};
use crate::ingester::{IngestOptions, DEFAULT_DATA_DIM, DEFAULT_UNITS};

/// Grid selection: a named preset or explicit extents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GridConfig {
    Preset(String),
    Explicit(GridShape),
}

impl GridConfig {
    /// Parse an environment value: a preset name or "nx,ny,nz,halo".
    pub fn from_env_value(value: &str) -> Self {
        match GridShape::from_csv(value) {
            Ok(shape) => Self::Explicit(shape),
            Err(_) => Self::Preset(value.trim().to_string()),
        }
    }

    pub fn resolve(&self) -> Result<GridShape> {
        match self {
            Self::Explicit(shape) => Ok(*shape),
            Self::Preset(name) => GridShape::preset(name).ok_or_else(|| {
                IngestionError::InvalidConfig(format!("unknown grid preset '{}'", name))
            }),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::Preset("c12".to_string())
    }
}

/// Configuration for dataset ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Tile geometry the dataset was captured on.
    pub grid: GridConfig,

    /// Unit string attached to every allocated field.
    pub units: String,

    /// Name of the trailing data dimension (tracers, modes, ...).
    pub data_dim_name: String,

    /// Variables carry leading savepoint/rank record axes.
    pub serialized: bool,

    /// Saved variable name -> name expected by the calling code.
    pub rename: BTreeMap<String, String>,

    /// Variables dropped after ingestion.
    pub remove: Vec<String>,

    /// Ingest variables concurrently.
    pub parallel: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            units: DEFAULT_UNITS.to_string(),
            data_dim_name: DEFAULT_DATA_DIM.to_string(),
            serialized: false,
            rename: BTreeMap::new(),
            remove: Vec::new(),
            parallel: false,
        }
    }
}

impl IngestConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("INGEST_GRID") {
            config.grid = GridConfig::from_env_value(&val);
        }

        if let Ok(val) = std::env::var("INGEST_UNITS") {
            config.units = val;
        }

        if let Ok(val) = std::env::var("INGEST_DATA_DIM") {
            config.data_dim_name = val;
        }

        if let Ok(val) = std::env::var("INGEST_SERIALIZED") {
            config.serialized = val.to_lowercase() == "true" || val == "1";
        }

        if let Ok(val) = std::env::var("INGEST_PARALLEL") {
            config.parallel = val.to_lowercase() == "true" || val == "1";
        }

        config
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(content: &str) -> AnyResult<Self> {
        let expanded = expand_env_vars(content)?;

        let config: IngestConfig = serde_yaml::from_str(&expanded)
            .with_context(|| "Failed to parse ingestion config YAML")?;

        config.validate()?;

        Ok(config)
    }

    /// Read, parse and validate a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> AnyResult<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read ingestion config from {:?}", path.as_ref()))?;

        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid ingestion config in {:?}", path.as_ref()))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let grid = self.grid.resolve()?;

        // Buffers hold n + 1 + 2h points per horizontal axis
        let padded = |n: usize| {
            grid.halo
                .checked_mul(2)
                .and_then(|h2| n.checked_add(h2))
                .and_then(|len| len.checked_add(1))
        };
        let fits = padded(grid.nx).is_some()
            && padded(grid.ny).is_some()
            && grid.nz.checked_add(1).is_some();
        if !fits {
            return Err(IngestionError::InvalidConfig(format!(
                "grid {} is too large to allocate",
                grid
            )));
        }

        if self.units.is_empty() {
            return Err(IngestionError::InvalidConfig("units must not be empty".to_string()));
        }

        if self.data_dim_name.is_empty() {
            return Err(IngestionError::InvalidConfig(
                "data_dim_name must not be empty".to_string(),
            ));
        }

        let spatial = CENTERED_DIMS.iter().chain(INTERFACE_DIMS.iter());
        if spatial.map(AxisTag::name).any(|n| n == self.data_dim_name) {
            return Err(IngestionError::InvalidConfig(format!(
                "data_dim_name '{}' collides with a spatial dimension",
                self.data_dim_name
            )));
        }

        let empty_rename = self
            .rename
            .iter()
            .find(|(from, to)| from.is_empty() || to.is_empty());
        if let Some((from, _)) = empty_rename {
            return Err(IngestionError::InvalidConfig(format!(
                "rename entry '{}' has an empty name",
                from
            )));
        }

        Ok(())
    }

    /// Resolved grid shape.
    pub fn grid_shape(&self) -> Result<GridShape> {
        self.grid.resolve()
    }

    /// Per-call ingestion options derived from this configuration.
    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            units: self.units.clone(),
            data_dim_name: self.data_dim_name.clone(),
        }
    }
}

// ============================================================================
// Environment Variable Expansion
// ============================================================================

/// Substitute `${VAR}` and `${VAR:-default}` references.
///
/// An unset `${VAR}` is an error; an unset or empty variable with a default
/// takes the default.
fn expand_env_vars(content: &str) -> AnyResult<String> {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(open) = rest.find("${") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let close = after
            .find('}')
            .with_context(|| format!("Unclosed variable substitution: ${{{}", after))?;

        let expr = &after[..close];
        let value = match expr.split_once(":-") {
            Some((name, default)) => std::env::var(name.trim())
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string()),
            None => std::env::var(expr.trim())
                .with_context(|| format!("Environment variable {} not set", expr))?,
        };
        out.push_str(&value);

        rest = &after[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IngestConfig::default();
        assert_eq!(config.grid_shape().unwrap(), GridShape::c12());
        assert_eq!(config.units, "n/a");
        assert_eq!(config.data_dim_name, "data");
        assert!(!config.serialized);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = IngestConfig::default();
        config.units = String::new();
        assert!(config.validate().is_err());

        config = IngestConfig::default();
        config.data_dim_name = "z_interface".to_string();
        assert!(config.validate().is_err());

        config = IngestConfig::default();
        config.grid = GridConfig::Preset("c1000".to_string());
        assert!(config.validate().is_err());

        config = IngestConfig::default();
        config.rename.insert("qv".to_string(), String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_unallocatable_grid() {
        let mut config = IngestConfig::default();
        config.grid = GridConfig::Explicit(GridShape::new(usize::MAX, 1, 1, 0));
        assert!(matches!(config.validate(), Err(IngestionError::InvalidConfig(_))));

        config.grid = GridConfig::Explicit(GridShape::new(1, 1, 1, usize::MAX));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env() {
        // All INGEST_* cases run in this one test so they never race each other
        const VARS: [&str; 5] = [
            "INGEST_GRID",
            "INGEST_UNITS",
            "INGEST_DATA_DIM",
            "INGEST_SERIALIZED",
            "INGEST_PARALLEL",
        ];
        for var in VARS {
            std::env::remove_var(var);
        }
        assert_eq!(IngestConfig::from_env(), IngestConfig::default());

        std::env::set_var("INGEST_GRID", "c24");
        std::env::set_var("INGEST_UNITS", "m/s");
        std::env::set_var("INGEST_DATA_DIM", "ntracers");
        std::env::set_var("INGEST_SERIALIZED", "TRUE");
        std::env::set_var("INGEST_PARALLEL", "1");

        let config = IngestConfig::from_env();
        assert_eq!(config.grid, GridConfig::Preset("c24".to_string()));
        assert_eq!(config.grid_shape().unwrap(), GridShape::c24());
        assert_eq!(config.units, "m/s");
        assert_eq!(config.data_dim_name, "ntracers");
        assert!(config.serialized);
        assert!(config.parallel);

        std::env::set_var("INGEST_GRID", "8, 9, 10, 1");
        std::env::set_var("INGEST_SERIALIZED", "no");
        std::env::set_var("INGEST_PARALLEL", "false");

        let config = IngestConfig::from_env();
        assert_eq!(config.grid, GridConfig::Explicit(GridShape::new(8, 9, 10, 1)));
        assert!(!config.serialized);
        assert!(!config.parallel);

        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_grid_config_from_env_value() {
        assert_eq!(
            GridConfig::from_env_value("24,24,72,3"),
            GridConfig::Explicit(GridShape::c24())
        );
        assert_eq!(
            GridConfig::from_env_value(" c24 "),
            GridConfig::Preset("c24".to_string())
        );
    }

    #[test]
    fn test_yaml_preset_and_lists() {
        let yaml = "grid: c24\n\
                    units: kg/kg\n\
                    serialized: true\n\
                    rename:\n  qv: specific_humidity\n\
                    remove:\n  - unused\n";
        let config = IngestConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.grid_shape().unwrap(), GridShape::c24());
        assert_eq!(config.units, "kg/kg");
        assert!(config.serialized);
        assert_eq!(config.rename.get("qv").map(String::as_str), Some("specific_humidity"));
        assert_eq!(config.remove, vec!["unused".to_string()]);
        // Unspecified fields keep their defaults
        assert_eq!(config.data_dim_name, "data");
    }

    #[test]
    fn test_yaml_explicit_grid() {
        let config =
            IngestConfig::from_yaml_str("grid:\n  nx: 8\n  ny: 9\n  nz: 10\n  halo: 1\n").unwrap();
        assert_eq!(config.grid_shape().unwrap(), GridShape::new(8, 9, 10, 1));
    }

    #[test]
    fn test_yaml_rejects_invalid() {
        assert!(IngestConfig::from_yaml_str("grid: c7\n").is_err());
        assert!(IngestConfig::from_yaml_str("grid: [1, 2\n").is_err());
    }

    #[test]
    fn test_expand_env_vars_simple() {
        std::env::set_var("INGEST_TEST_UNITS", "Pa");
        let result = expand_env_vars("units: ${INGEST_TEST_UNITS}").unwrap();
        assert_eq!(result, "units: Pa");
    }

    #[test]
    fn test_expand_env_vars_with_default() {
        std::env::remove_var("INGEST_TEST_UNSET");
        let result = expand_env_vars("grid: ${INGEST_TEST_UNSET:-c24}").unwrap();
        assert_eq!(result, "grid: c24");
    }

    #[test]
    fn test_expand_env_vars_missing_required() {
        std::env::remove_var("INGEST_TEST_REQUIRED");
        assert!(expand_env_vars("${INGEST_TEST_REQUIRED}").is_err());
    }

    #[test]
    fn test_expand_env_vars_passes_plain_text() {
        std::env::set_var("INGEST_TEST_DIM", "nmodes");
        let result =
            expand_env_vars("units: $5\ndata_dim_name: ${INGEST_TEST_DIM}-x\n").unwrap();
        assert_eq!(result, "units: $5\ndata_dim_name: nmodes-x\n");
    }

    #[test]
    fn test_expand_env_vars_unclosed() {
        assert!(expand_env_vars("units: ${OPEN").is_err());
    }
}
