use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::disease::Disease;

/// Hold-out evaluation record for one fitted classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetrics {
    /// Disease the model screens for
    pub disease: Disease,
    /// Version tag assigned at training time
    pub model_version: String,
    /// Accuracy on the hold-out split
    pub accuracy: f32,
    /// Rows used for fitting
    pub n_train_samples: usize,
    /// Rows held out for evaluation
    pub n_valid_samples: usize,
    /// When training finished
    pub trained_at: DateTime<Utc>,
}
