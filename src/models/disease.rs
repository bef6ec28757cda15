use serde::{Deserialize, Serialize};
use std::fmt;

/// The three screening targets, one trained classifier each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disease {
    Heart,
    Stroke,
    Diabetes,
}

impl Disease {
    pub const ALL: [Disease; 3] = [Disease::Heart, Disease::Stroke, Disease::Diabetes];

    /// Dataset file expected under the data directory
    pub fn dataset_file(&self) -> &'static str {
        match self {
            Disease::Heart => "heart.csv",
            Disease::Stroke => "stroke.csv",
            Disease::Diabetes => "diabetes.csv",
        }
    }

    /// Binary label column in that dataset
    pub fn target_column(&self) -> &'static str {
        match self {
            Disease::Heart => "target",
            Disease::Stroke => "stroke",
            Disease::Diabetes => "Outcome",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Disease::Heart => "heart",
            Disease::Stroke => "stroke",
            Disease::Diabetes => "diabetes",
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Disease::Heart => "Heart Disease",
            Disease::Stroke => "Stroke",
            Disease::Diabetes => "Diabetes",
        };
        write!(f, "{}", name)
    }
}
