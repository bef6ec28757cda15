use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{HealthProfile, ModelMetrics, RiskReport};
use crate::services::ScreeningService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub screening: Arc<ScreeningService>,
}

impl AppState {
    pub fn new(screening: ScreeningService) -> Self {
        Self {
            screening: Arc::new(screening),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Screening(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match self {
            ApiError::InvalidInput(_) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_input"),
            ApiError::Screening(_) => (StatusCode::INTERNAL_SERVER_ERROR, "screening_failed"),
        };

        let body = Json(json!({
            "error": error_code,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// JSON response for one completed screening
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningResponse {
    /// Identifier of the underlying report
    pub report_id: Uuid,
    /// Heart disease risk label
    pub heart_risk: String,
    /// Stroke risk label
    pub stroke_risk: String,
    /// Diabetes risk label, with the glucose control level when at risk
    pub diabetes: String,
    /// Blood pressure category
    pub bp_category: String,
    /// When the screening ran
    pub generated_at: DateTime<Utc>,
}

impl ScreeningResponse {
    pub fn from_report(report: &RiskReport) -> Self {
        Self {
            report_id: report.report_id,
            heart_risk: report.heart.to_string(),
            stroke_risk: report.stroke.to_string(),
            diabetes: report.diabetes_label(),
            bp_category: report.bp_category.to_string(),
            generated_at: report.generated_at,
        }
    }
}

/// Screen one health profile against the three disease models
pub async fn create_screening(
    State(state): State<AppState>,
    Json(profile): Json<HealthProfile>,
) -> Result<Json<ScreeningResponse>, ApiError> {
    profile
        .validate()
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    let report = state.screening.screen(&profile)?;
    Ok(Json(ScreeningResponse::from_report(&report)))
}

/// Evaluation metrics for the fitted models
pub async fn list_models(State(state): State<AppState>) -> Json<Vec<ModelMetrics>> {
    Json(state.screening.metrics().into_iter().cloned().collect())
}
