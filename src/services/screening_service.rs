use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::data;
use crate::models::{
    BloodPressureCategory, Disease, GlucoseControl, HealthProfile, ModelMetrics, RiskLabel,
    RiskReport,
};
use crate::services::model_training_service::{DiseaseModel, ModelTrainingService, TrainingConfig};

/// Holds the three fitted classifiers and answers screening requests
#[derive(Debug)]
pub struct ScreeningService {
    heart: DiseaseModel,
    stroke: DiseaseModel,
    diabetes: DiseaseModel,
}

impl ScreeningService {
    /// Train all three classifiers from the CSV datasets under `data_dir`
    pub fn train(data_dir: &Path, config: &TrainingConfig) -> Result<Self> {
        let trainer = ModelTrainingService::new(config.clone());

        Ok(Self {
            heart: Self::train_one(&trainer, Disease::Heart, data_dir)?,
            stroke: Self::train_one(&trainer, Disease::Stroke, data_dir)?,
            diabetes: Self::train_one(&trainer, Disease::Diabetes, data_dir)?,
        })
    }

    fn train_one(
        trainer: &ModelTrainingService,
        disease: Disease,
        data_dir: &Path,
    ) -> Result<DiseaseModel> {
        let path = data_dir.join(disease.dataset_file());
        info!("Training {} model from {}", disease, path.display());

        let dataset = data::load_dataset(&path, disease.target_column())
            .with_context(|| format!("Failed to load {} dataset", disease))?;
        trainer.train(disease, dataset)
    }

    /// Screen one profile against all three models
    pub fn screen(&self, profile: &HealthProfile) -> Result<RiskReport> {
        profile.validate()?;

        let heart = self.predict(&self.heart, profile)?;
        let stroke = self.predict(&self.stroke, profile)?;
        let diabetes = self.predict(&self.diabetes, profile)?;

        Ok(RiskReport {
            report_id: Uuid::new_v4(),
            heart: RiskLabel::from_prediction(heart),
            stroke: RiskLabel::from_prediction(stroke),
            diabetes: RiskLabel::from_prediction(diabetes),
            glucose_control: GlucoseControl::classify(profile.glucose),
            bp_category: BloodPressureCategory::classify(profile.systolic, profile.diastolic),
            generated_at: Utc::now(),
        })
    }

    fn predict(&self, model: &DiseaseModel, profile: &HealthProfile) -> Result<bool> {
        let features = profile.feature_vector(model.disease(), model.n_features())?;
        model.predict(features)
    }

    /// Evaluation records for the three fitted models
    pub fn metrics(&self) -> Vec<&ModelMetrics> {
        vec![
            self.heart.metrics(),
            self.stroke.metrics(),
            self.diabetes.metrics(),
        ]
    }
}
