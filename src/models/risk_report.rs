use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::models::vitals::{BloodPressureCategory, GlucoseControl};

/// Verdict of one disease classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    AtRisk,
    LowRisk,
}

impl RiskLabel {
    pub fn from_prediction(at_risk: bool) -> Self {
        if at_risk {
            RiskLabel::AtRisk
        } else {
            RiskLabel::LowRisk
        }
    }

    pub fn is_at_risk(&self) -> bool {
        matches!(self, RiskLabel::AtRisk)
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLabel::AtRisk => write!(f, "⚠ At Risk"),
            RiskLabel::LowRisk => write!(f, "✅ Low Risk"),
        }
    }
}

/// Complete result of screening one profile
#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    /// Identifier for this report
    pub report_id: Uuid,
    /// Heart disease verdict
    pub heart: RiskLabel,
    /// Stroke verdict
    pub stroke: RiskLabel,
    /// Diabetes verdict
    pub diabetes: RiskLabel,
    /// Glucose control level backing the diabetes label
    pub glucose_control: GlucoseControl,
    /// Blood pressure category
    pub bp_category: BloodPressureCategory,
    /// When the screening ran
    pub generated_at: DateTime<Utc>,
}

impl RiskReport {
    /// Diabetes label with the glucose control level folded in when at risk
    pub fn diabetes_label(&self) -> String {
        match self.diabetes {
            RiskLabel::AtRisk => format!("⚠ At Risk ({})", self.glucose_control),
            RiskLabel::LowRisk => RiskLabel::LowRisk.to_string(),
        }
    }
}
