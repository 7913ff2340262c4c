//! Persisting generated tables.
//!
//! Every dataset is written to a fixed path below the output directory,
//! replacing whatever a previous run left there.

#[cfg(feature = "xlsx")]
pub mod xlsx;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::catalog::TemplateSpec;
use crate::config;
use crate::error::Result;
#[cfg(not(feature = "xlsx"))]
use crate::error::FixtureError;

/// Absolute path of a registered output file below `root`.
pub fn dataset_path(root: &Path, name: &str) -> Result<PathBuf> {
    Ok(root.join(config::output_file(name)?))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Write `rows` to `path` with a header row taken from the row type.
/// Returns the number of data rows written.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<usize> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = rows.len(), "Wrote CSV");
    Ok(rows.len())
}

/// Read a CSV file written by [`write_csv`] back into rows.
pub fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Write a statement template workbook to `path`. Returns the number of
/// template rows written.
#[cfg(feature = "xlsx")]
pub fn write_template(spec: &TemplateSpec, path: &Path) -> Result<usize> {
    ensure_parent(path)?;
    xlsx::write_template(spec, path)
}

/// Without the `xlsx` feature there is no workbook writer.
#[cfg(not(feature = "xlsx"))]
pub fn write_template(spec: &TemplateSpec, _path: &Path) -> Result<usize> {
    Err(FixtureError::FeatureDisabled(format!(
        "cannot write '{}': XLSX support is not compiled in; rebuild with `--features xlsx`",
        spec.sheet_name
    )))
}
