use serde::{Deserialize, Serialize};
use std::fmt;

/// Blood pressure category from systolic/diastolic readings.
///
/// The arms are checked top to bottom and the first match wins, so a reading
/// like 150/85 lands in Stage 1 through its diastolic value even though the
/// systolic alone would read as Stage 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodPressureCategory {
    Normal,
    Elevated,
    #[serde(rename = "Hypertension Stage 1")]
    Stage1,
    #[serde(rename = "Hypertension Stage 2")]
    Stage2,
    #[serde(rename = "Hypertensive Crisis")]
    Crisis,
}

impl BloodPressureCategory {
    pub fn classify(systolic: i32, diastolic: i32) -> Self {
        if systolic < 120 && diastolic < 80 {
            BloodPressureCategory::Normal
        } else if (120..=129).contains(&systolic) && diastolic < 80 {
            BloodPressureCategory::Elevated
        } else if (130..=139).contains(&systolic) || (80..=89).contains(&diastolic) {
            BloodPressureCategory::Stage1
        } else if (140..=180).contains(&systolic) || (90..=120).contains(&diastolic) {
            BloodPressureCategory::Stage2
        } else {
            BloodPressureCategory::Crisis
        }
    }
}

impl fmt::Display for BloodPressureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BloodPressureCategory::Normal => "Normal",
            BloodPressureCategory::Elevated => "Elevated",
            BloodPressureCategory::Stage1 => "Hypertension Stage 1",
            BloodPressureCategory::Stage2 => "Hypertension Stage 2",
            BloodPressureCategory::Crisis => "Hypertensive Crisis",
        };
        write!(f, "{}", label)
    }
}

/// Glucose control level from a fasting glucose reading in mg/dL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlucoseControl {
    Controlled,
    Prediabetic,
    Uncontrolled,
}

impl GlucoseControl {
    pub fn classify(glucose: f64) -> Self {
        if glucose < 140.0 {
            GlucoseControl::Controlled
        } else if glucose <= 199.0 {
            GlucoseControl::Prediabetic
        } else {
            GlucoseControl::Uncontrolled
        }
    }
}

impl fmt::Display for GlucoseControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GlucoseControl::Controlled => "Controlled",
            GlucoseControl::Prediabetic => "Prediabetic",
            GlucoseControl::Uncontrolled => "Uncontrolled",
        };
        write!(f, "{}", label)
    }
}
