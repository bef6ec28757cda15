// Shared fixtures for integration tests: synthetic, cleanly separable
// screening datasets and the profiles that should land on each side.

use std::fs;
use std::path::Path;

use health_screen::models::{Gender, HealthProfile, SmokingStatus};
use health_screen::services::TrainingConfig;

pub fn quick_training_config() -> TrainingConfig {
    TrainingConfig {
        ensemble_size: 25,
        min_samples: 10,
        ..Default::default()
    }
}

/// Write heart.csv, stroke.csv and diabetes.csv under `dir`
pub fn write_datasets(dir: &Path) {
    write_heart_csv(dir);
    write_stroke_csv(dir);
    write_diabetes_csv(dir);
}

/// Heart rows are positive when cholesterol crosses 300
pub fn write_heart_csv(dir: &Path) {
    let mut contents =
        String::from("age,gender,cholesterol,systolic,diastolic,bmi,smoking,target\n");
    for i in 0..40 {
        let age = 30 + i;
        let gender = i % 2;
        let cholesterol = 150.0 + i as f64 * 8.0;
        let systolic = 110 + (i % 25);
        let diastolic = 70 + (i % 15);
        let bmi = 21.0 + (i % 12) as f64 * 0.7;
        let smoking = (i + 1) % 2;
        let target = if cholesterol > 300.0 { 1 } else { 0 };
        contents.push_str(&format!(
            "{},{},{:.1},{},{},{:.1},{},{}\n",
            age, gender, cholesterol, systolic, diastolic, bmi, smoking, target
        ));
    }
    fs::write(dir.join("heart.csv"), contents).unwrap();
}

/// Stroke rows are positive when average glucose crosses 200; carries
/// categorical columns and one missing cell to exercise the loader
pub fn write_stroke_csv(dir: &Path) {
    let mut contents = String::from(
        "gender,age,hypertension,heart_disease,avg_glucose_level,smoking_status,bmi,ever_married,work_type,stroke\n",
    );
    let smoking_statuses = ["never smoked", "smokes", "formerly smoked"];
    let work_types = ["Private", "Govt_job", "Self-employed"];
    for i in 0..40 {
        let gender = if i % 2 == 0 { "Male" } else { "Female" };
        let age = 25 + i;
        let hypertension = (i / 3) % 2;
        let heart_disease = (i / 2) % 2;
        let glucose = 80.0 + i as f64 * 6.0;
        let smoking_status = smoking_statuses[i % 3];
        let bmi = if i == 7 {
            "N/A".to_string()
        } else {
            format!("{:.1}", 22.0 + (i % 10) as f64 * 0.8)
        };
        let ever_married = if i % 2 == 0 { "Yes" } else { "No" };
        let work_type = work_types[(i / 4) % 3];
        let stroke = if glucose > 200.0 { 1 } else { 0 };
        contents.push_str(&format!(
            "{},{},{},{},{:.1},{},{},{},{},{}\n",
            gender, age, hypertension, heart_disease, glucose, smoking_status, bmi, ever_married,
            work_type, stroke
        ));
    }
    fs::write(dir.join("stroke.csv"), contents).unwrap();
}

/// Diabetes rows are positive when glucose crosses 200
pub fn write_diabetes_csv(dir: &Path) {
    let mut contents = String::from(
        "Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age,Outcome\n",
    );
    for i in 0..40 {
        let pregnancies = i % 5;
        let glucose = 80.0 + i as f64 * 6.0;
        let blood_pressure = 65 + (i % 20);
        let skin_thickness = 15 + (i % 25);
        let insulin = 60 + (i % 30) * 4;
        let bmi = 21.0 + (i % 13) as f64 * 0.9;
        let pedigree = 0.2 + (i % 9) as f64 * 0.1;
        let age = 21 + i;
        let outcome = if glucose > 200.0 { 1 } else { 0 };
        contents.push_str(&format!(
            "{},{:.1},{},{},{},{:.1},{:.2},{},{}\n",
            pregnancies, glucose, blood_pressure, skin_thickness, insulin, bmi, pedigree, age,
            outcome
        ));
    }
    fs::write(dir.join("diabetes.csv"), contents).unwrap();
}

/// Heart dataset variant with fewer columns than the questionnaire maps
pub fn write_narrow_heart_csv(dir: &Path) {
    let mut contents = String::from("age,gender,cholesterol,target\n");
    for i in 0..40 {
        let cholesterol = 150.0 + i as f64 * 8.0;
        let target = if cholesterol > 300.0 { 1 } else { 0 };
        contents.push_str(&format!("{},{},{:.1},{}\n", 30 + i, i % 2, cholesterol, target));
    }
    fs::write(dir.join("heart.csv"), contents).unwrap();
}

pub fn high_risk_profile() -> HealthProfile {
    HealthProfile {
        age: 68,
        gender: Gender::Male,
        systolic: 160,
        diastolic: 100,
        cholesterol: 450.0,
        glucose: 300.0,
        bmi: 38.0,
        smoking: SmokingStatus::Yes,
    }
}

pub fn low_risk_profile() -> HealthProfile {
    HealthProfile {
        age: 25,
        gender: Gender::Female,
        systolic: 110,
        diastolic: 70,
        cholesterol: 160.0,
        glucose: 85.0,
        bmi: 22.0,
        smoking: SmokingStatus::No,
    }
}
