use anyhow::{anyhow, Result};
use chrono::Utc;
use linfa::prelude::*;
use linfa_ensemble::{EnsembleLearner, EnsembleLearnerParams};
use linfa_preprocessing::linear_scaling::LinearScaler;
use linfa_trees::{DecisionTree, SplitQuality};
use ndarray::{Array1, Axis};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::data::TabularDataset;
use crate::models::{Disease, ModelMetrics};

/// Configuration for classifier training
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Fraction of rows held out for evaluation
    pub validation_split: f32,
    /// Number of bagged trees per ensemble
    pub ensemble_size: usize,
    /// Fraction of rows resampled (with replacement) per tree
    pub bootstrap_proportion: f64,
    /// Optional depth cap for individual trees
    pub max_depth: Option<usize>,
    /// Minimum rows a dataset must provide
    pub min_samples: usize,
    /// Seed for the shuffle that precedes the split
    pub seed: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            validation_split: 0.2,
            ensemble_size: 100,
            bootstrap_proportion: 1.0,
            max_depth: None,
            min_samples: 20,
            seed: 42,
        }
    }
}

/// One fitted disease classifier: standardizing scaler plus tree ensemble.
/// Fitted once at startup and read-only afterwards.
pub struct DiseaseModel {
    disease: Disease,
    scaler: LinearScaler<f64>,
    ensemble: EnsembleLearner<DecisionTree<f64, usize>>,
    feature_names: Vec<String>,
    metrics: ModelMetrics,
}

impl std::fmt::Debug for DiseaseModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiseaseModel")
            .field("disease", &self.disease)
            .field("feature_names", &self.feature_names)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl DiseaseModel {
    pub fn disease(&self) -> Disease {
        self.disease
    }

    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn metrics(&self) -> &ModelMetrics {
        &self.metrics
    }

    /// Classify a single feature row; true means class 1 (at risk)
    pub fn predict(&self, features: Array1<f64>) -> Result<bool> {
        if features.len() != self.n_features() {
            return Err(anyhow!(
                "{} model takes {} features, got {}",
                self.disease,
                self.n_features(),
                features.len()
            ));
        }

        let scaled = self.scaler.transform(features.insert_axis(Axis(0)));
        let prediction = self.ensemble.predict(&scaled);
        Ok(prediction[0] == 1)
    }
}

/// Trains one classifier per disease dataset
pub struct ModelTrainingService {
    config: TrainingConfig,
}

impl ModelTrainingService {
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Fit scaler and ensemble on the dataset and evaluate on a hold-out split
    pub fn train(&self, disease: Disease, dataset: TabularDataset) -> Result<DiseaseModel> {
        if dataset.n_samples() < self.config.min_samples {
            return Err(anyhow!(
                "Insufficient training data for {}: need at least {} samples, got {}",
                disease,
                self.config.min_samples,
                dataset.n_samples()
            ));
        }

        let feature_names = dataset.feature_names.clone();

        // Fit the scaler on the full dataset, then shuffle and split
        let dataset = dataset.into_dataset();
        let scaler = LinearScaler::standard().fit(&dataset)?;
        let dataset = scaler.transform(dataset);

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let (train, valid) = dataset
            .shuffle(&mut rng)
            .split_with_ratio(1.0 - self.config.validation_split);

        let tree_params = DecisionTree::params()
            .split_quality(SplitQuality::Gini)
            .max_depth(self.config.max_depth);

        let ensemble = EnsembleLearnerParams::new(tree_params)
            .ensemble_size(self.config.ensemble_size)
            .bootstrap_proportion(self.config.bootstrap_proportion)
            .fit(&train)?;

        // Evaluate on the hold-out rows
        let predicted = ensemble.predict(&valid);
        let confusion = predicted.confusion_matrix(&valid)?;
        let accuracy = confusion.accuracy();

        let metrics = ModelMetrics {
            disease,
            model_version: format!("{}_forest_v{}", disease.slug(), Utc::now().timestamp()),
            accuracy,
            n_train_samples: train.nsamples(),
            n_valid_samples: valid.nsamples(),
            trained_at: Utc::now(),
        };

        info!(
            "{} classifier trained: accuracy {:.3} ({} train / {} validation rows)",
            disease, accuracy, metrics.n_train_samples, metrics.n_valid_samples
        );

        Ok(DiseaseModel {
            disease,
            scaler,
            ensemble,
            feature_names,
            metrics,
        })
    }
}
