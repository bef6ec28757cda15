use linfa::Dataset;
use ndarray::{Array1, Array2, Ix1};

/// Fully numeric tabular dataset ready for fitting
#[derive(Debug, Clone)]
pub struct TabularDataset {
    /// Short name for log and error messages (the file stem)
    pub name: String,
    /// Feature column names in matrix order
    pub feature_names: Vec<String>,
    /// One row per sample
    pub records: Array2<f64>,
    /// Class labels, 0 or 1
    pub targets: Array1<usize>,
}

impl TabularDataset {
    pub fn n_samples(&self) -> usize {
        self.records.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.records.ncols()
    }

    /// Convert into a linfa dataset carrying the feature names
    pub fn into_dataset(self) -> Dataset<f64, usize, Ix1> {
        Dataset::new(self.records, self.targets).with_feature_names(self.feature_names)
    }
}
