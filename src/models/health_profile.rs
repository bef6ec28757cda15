use anyhow::{bail, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::disease::Disease;
use crate::models::validation;

/// Gender as the screening datasets encode it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(format!("Unrecognized gender '{}', expected male or female", other)),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Smoking status (current smoker or not)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SmokingStatus {
    Yes,
    No,
}

impl FromStr for SmokingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" => Ok(SmokingStatus::Yes),
            "no" | "n" => Ok(SmokingStatus::No),
            other => Err(format!("Unrecognized smoking status '{}', expected yes or no", other)),
        }
    }
}

impl TryFrom<String> for SmokingStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for SmokingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmokingStatus::Yes => write!(f, "yes"),
            SmokingStatus::No => write!(f, "no"),
        }
    }
}

/// One person's answers to the screening questionnaire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Age in years
    pub age: i32,
    /// Gender (male or female)
    pub gender: Gender,
    /// Systolic blood pressure in mmHg
    pub systolic: i32,
    /// Diastolic blood pressure in mmHg
    pub diastolic: i32,
    /// Total cholesterol in mg/dL
    pub cholesterol: f64,
    /// Fasting glucose in mg/dL
    pub glucose: f64,
    /// Body mass index
    pub bmi: f64,
    /// Smoking status
    pub smoking: SmokingStatus,
}

impl HealthProfile {
    /// Range-check every field
    pub fn validate(&self) -> Result<()> {
        validation::validate_age(self.age)?;
        validation::validate_systolic(self.systolic)?;
        validation::validate_diastolic(self.diastolic)?;
        validation::validate_cholesterol(self.cholesterol)?;
        validation::validate_glucose(self.glucose)?;
        validation::validate_bmi(self.bmi)?;
        Ok(())
    }

    pub fn gender_encoded(&self) -> f64 {
        match self.gender {
            Gender::Male => 1.0,
            Gender::Female => 0.0,
        }
    }

    pub fn smoking_encoded(&self) -> f64 {
        match self.smoking {
            SmokingStatus::Yes => 1.0,
            SmokingStatus::No => 0.0,
        }
    }

    /// 1.0 when the reading crosses the hypertension threshold (140/90)
    pub fn hypertension_flag(&self) -> f64 {
        if self.systolic >= 140 || self.diastolic >= 90 {
            1.0
        } else {
            0.0
        }
    }

    /// Feature row for one disease model, zero padded to `width`.
    ///
    /// Each dataset's leading columns carry the values the questionnaire can
    /// supply; columns past the mapped prefix are filled with zeros.
    pub fn feature_vector(&self, disease: Disease, width: usize) -> Result<Array1<f64>> {
        let mapped = match disease {
            Disease::Heart => vec![
                self.age as f64,
                self.gender_encoded(),
                self.cholesterol,
                self.systolic as f64,
                self.diastolic as f64,
                self.bmi,
                self.smoking_encoded(),
            ],
            Disease::Stroke => vec![
                self.gender_encoded(),
                self.age as f64,
                self.hypertension_flag(),
                0.0,
                self.glucose,
                self.smoking_encoded(),
                self.bmi,
                0.0,
                0.0,
            ],
            Disease::Diabetes => vec![
                0.0,
                self.glucose,
                0.0,
                0.0,
                0.0,
                self.bmi,
                0.0,
                self.age as f64,
            ],
        };

        if width < mapped.len() {
            bail!(
                "{} model expects {} features but the screening questionnaire maps {}",
                disease,
                width,
                mapped.len()
            );
        }

        let mut values = mapped;
        values.resize(width, 0.0);
        Ok(Array1::from(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> HealthProfile {
        HealthProfile {
            age: 52,
            gender: Gender::Male,
            systolic: 145,
            diastolic: 88,
            cholesterol: 230.0,
            glucose: 160.0,
            bmi: 28.5,
            smoking: SmokingStatus::Yes,
        }
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" f ".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_smoking_parsing() {
        assert_eq!("yes".parse::<SmokingStatus>().unwrap(), SmokingStatus::Yes);
        assert_eq!("N".parse::<SmokingStatus>().unwrap(), SmokingStatus::No);
        assert!("sometimes".parse::<SmokingStatus>().is_err());
    }

    #[test]
    fn test_encodings() {
        let profile = sample_profile();
        assert_eq!(profile.gender_encoded(), 1.0);
        assert_eq!(profile.smoking_encoded(), 1.0);

        let mut profile = profile;
        profile.gender = Gender::Female;
        profile.smoking = SmokingStatus::No;
        assert_eq!(profile.gender_encoded(), 0.0);
        assert_eq!(profile.smoking_encoded(), 0.0);
    }

    #[test]
    fn test_hypertension_flag_boundaries() {
        let mut profile = sample_profile();
        profile.systolic = 139;
        profile.diastolic = 89;
        assert_eq!(profile.hypertension_flag(), 0.0);

        profile.systolic = 140;
        assert_eq!(profile.hypertension_flag(), 1.0);

        profile.systolic = 120;
        profile.diastolic = 90;
        assert_eq!(profile.hypertension_flag(), 1.0);
    }

    #[test]
    fn test_heart_feature_layout() {
        let profile = sample_profile();
        let features = profile.feature_vector(Disease::Heart, 7).unwrap();
        assert_eq!(
            features.to_vec(),
            vec![52.0, 1.0, 230.0, 145.0, 88.0, 28.5, 1.0]
        );
    }

    #[test]
    fn test_stroke_feature_layout() {
        let profile = sample_profile();
        let features = profile.feature_vector(Disease::Stroke, 9).unwrap();
        assert_eq!(
            features.to_vec(),
            vec![1.0, 52.0, 1.0, 0.0, 160.0, 1.0, 28.5, 0.0, 0.0]
        );
    }

    #[test]
    fn test_diabetes_feature_layout() {
        let profile = sample_profile();
        let features = profile.feature_vector(Disease::Diabetes, 8).unwrap();
        assert_eq!(
            features.to_vec(),
            vec![0.0, 160.0, 0.0, 0.0, 0.0, 28.5, 0.0, 52.0]
        );
    }

    #[test]
    fn test_feature_vector_padding() {
        let profile = sample_profile();
        let features = profile.feature_vector(Disease::Heart, 10).unwrap();
        assert_eq!(features.len(), 10);
        assert_eq!(features[7], 0.0);
        assert_eq!(features[9], 0.0);
    }

    #[test]
    fn test_feature_vector_width_too_small() {
        let profile = sample_profile();
        let err = profile.feature_vector(Disease::Heart, 5).unwrap_err();
        assert!(err.to_string().contains("expects 5 features"));
    }

    #[test]
    fn test_profile_validation() {
        assert!(sample_profile().validate().is_ok());

        let mut profile = sample_profile();
        profile.age = 140;
        assert!(profile.validate().is_err());

        let mut profile = sample_profile();
        profile.glucose = 20.0;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_profile_deserializes_from_json() {
        let body = r#"{
            "age": 44,
            "gender": "m",
            "systolic": 120,
            "diastolic": 80,
            "cholesterol": 190.5,
            "glucose": 95.0,
            "bmi": 24.2,
            "smoking": "no"
        }"#;
        let profile: HealthProfile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.smoking, SmokingStatus::No);
        assert_eq!(profile.cholesterol, 190.5);
    }
}
