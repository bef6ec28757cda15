// Business logic services

pub mod model_training_service;
pub mod screening_service;

pub use model_training_service::{DiseaseModel, ModelTrainingService, TrainingConfig};
pub use screening_service::ScreeningService;
