use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use ndarray::{Array1, Array2};
use tracing::warn;

use crate::data::dataset::TabularDataset;

/// Cell values treated as missing in numeric columns
const MISSING_TOKENS: [&str; 5] = ["", "na", "n/a", "nan", "null"];

/// Maps the distinct values of a categorical column to 0..n in sorted order
#[derive(Debug, Clone, Default)]
pub struct LabelEncoder {
    classes: BTreeMap<String, usize>,
}

impl LabelEncoder {
    pub fn fit(values: &[&str]) -> Self {
        let mut classes: BTreeMap<String, usize> =
            values.iter().map(|v| ((*v).to_string(), 0)).collect();
        for (index, slot) in classes.values_mut().enumerate() {
            *slot = index;
        }
        Self { classes }
    }

    pub fn transform(&self, value: &str) -> Option<usize> {
        self.classes.get(value).copied()
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }
}

fn is_missing(cell: &str) -> bool {
    let normalized = cell.trim().to_lowercase();
    MISSING_TOKENS.contains(&normalized.as_str())
}

/// Parse one column, either as numbers (mean-imputing missing cells) or by
/// label-encoding the raw text when any cell fails to parse.
fn parse_column(cells: &[&str]) -> Result<Vec<f64>> {
    let numeric = cells
        .iter()
        .all(|cell| is_missing(cell) || cell.parse::<f64>().is_ok());

    if numeric {
        let parsed: Vec<Option<f64>> = cells
            .iter()
            .map(|cell| {
                if is_missing(cell) {
                    None
                } else {
                    cell.parse::<f64>().ok()
                }
            })
            .collect();

        let present: Vec<f64> = parsed.iter().flatten().copied().collect();
        if present.is_empty() {
            bail!("column contains no usable values");
        }
        let mean = present.iter().sum::<f64>() / present.len() as f64;
        Ok(parsed.into_iter().map(|v| v.unwrap_or(mean)).collect())
    } else {
        let encoder = LabelEncoder::fit(cells);
        cells
            .iter()
            .map(|cell| {
                encoder
                    .transform(cell)
                    .map(|class| class as f64)
                    .ok_or_else(|| anyhow!("unencodable value '{}'", cell))
            })
            .collect()
    }
}

/// Load a CSV file into a numeric dataset.
///
/// Columns where every non-missing cell parses as a number are taken as-is
/// with missing cells imputed to the column mean; any other column is
/// label-encoded over its sorted distinct values. The target column must come
/// out binary (0/1) and is removed from the feature matrix.
pub fn load_dataset(path: &Path, target_column: &str) -> Result<TabularDataset> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open dataset {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("Failed to read header row of {}", path.display()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let target_index = headers
        .iter()
        .position(|header| header == target_column)
        .ok_or_else(|| {
            anyhow!(
                "Target column '{}' not found in {} (columns: {})",
                target_column,
                path.display(),
                headers.join(", ")
            )
        })?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed to read row in {}", path.display()))?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    if rows.is_empty() {
        bail!("Dataset {} has no data rows", path.display());
    }
    if headers.len() < 2 {
        bail!("Dataset {} has no feature columns", path.display());
    }

    let n_rows = rows.len();
    let mut columns: Vec<Vec<f64>> = Vec::with_capacity(headers.len());
    for (col_index, header) in headers.iter().enumerate() {
        let cells: Vec<&str> = rows.iter().map(|row| row[col_index].as_str()).collect();
        let missing = cells.iter().filter(|cell| is_missing(cell)).count();
        if missing > 0 {
            warn!("{}: column '{}' has {} missing cells", name, header, missing);
        }
        let column = parse_column(&cells)
            .with_context(|| format!("Column '{}' in {}", header, name))?;
        columns.push(column);
    }

    let target_values = columns.remove(target_index);
    let mut feature_names = headers;
    feature_names.remove(target_index);

    let mut targets = Vec::with_capacity(n_rows);
    for (row_index, value) in target_values.iter().enumerate() {
        if *value == 0.0 {
            targets.push(0usize);
        } else if *value == 1.0 {
            targets.push(1usize);
        } else {
            bail!(
                "Target column '{}' in {} must be binary (0/1), found {} at data row {}",
                target_column,
                name,
                value,
                row_index + 1
            );
        }
    }

    let n_features = columns.len();
    let mut records = Array2::zeros((n_rows, n_features));
    for (col_index, column) in columns.iter().enumerate() {
        for (row_index, value) in column.iter().enumerate() {
            records[[row_index, col_index]] = *value;
        }
    }

    Ok(TabularDataset {
        name,
        feature_names,
        records,
        targets: Array1::from(targets),
    })
}
