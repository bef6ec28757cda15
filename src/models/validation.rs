use anyhow::{anyhow, Result};

/// Validate age in years
pub fn validate_age(age: i32) -> Result<()> {
    if age < 0 || age > 100 {
        return Err(anyhow!("Age must be between 0 and 100 years"));
    }
    Ok(())
}

/// Validate systolic blood pressure
pub fn validate_systolic(systolic: i32) -> Result<()> {
    if systolic < 50 || systolic > 250 {
        return Err(anyhow!("Systolic blood pressure must be between 50 and 250 mmHg"));
    }
    Ok(())
}

/// Validate diastolic blood pressure
pub fn validate_diastolic(diastolic: i32) -> Result<()> {
    if diastolic < 30 || diastolic > 200 {
        return Err(anyhow!("Diastolic blood pressure must be between 30 and 200 mmHg"));
    }
    Ok(())
}

/// Validate total cholesterol
pub fn validate_cholesterol(cholesterol: f64) -> Result<()> {
    if !(50.0..=500.0).contains(&cholesterol) {
        return Err(anyhow!("Cholesterol must be between 50 and 500 mg/dL"));
    }
    Ok(())
}

/// Validate fasting glucose
pub fn validate_glucose(glucose: f64) -> Result<()> {
    if !(50.0..=500.0).contains(&glucose) {
        return Err(anyhow!("Glucose must be between 50 and 500 mg/dL"));
    }
    Ok(())
}

/// Validate body mass index
pub fn validate_bmi(bmi: f64) -> Result<()> {
    if !(10.0..=60.0).contains(&bmi) {
        return Err(anyhow!("BMI must be between 10 and 60"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_validation() {
        assert!(validate_age(44).is_ok());
        assert!(validate_age(0).is_ok());
        assert!(validate_age(100).is_ok());
        assert!(validate_age(-1).is_err());
        assert!(validate_age(101).is_err());
    }

    #[test]
    fn test_blood_pressure_validation() {
        assert!(validate_systolic(120).is_ok());
        assert!(validate_systolic(49).is_err());
        assert!(validate_systolic(251).is_err());
        assert!(validate_diastolic(80).is_ok());
        assert!(validate_diastolic(29).is_err());
        assert!(validate_diastolic(201).is_err());
    }

    #[test]
    fn test_cholesterol_validation() {
        assert!(validate_cholesterol(190.0).is_ok());
        assert!(validate_cholesterol(49.9).is_err());
        assert!(validate_cholesterol(500.1).is_err());
    }

    #[test]
    fn test_glucose_validation() {
        assert!(validate_glucose(95.0).is_ok());
        assert!(validate_glucose(30.0).is_err());
        assert!(validate_glucose(600.0).is_err());
    }

    #[test]
    fn test_bmi_validation() {
        assert!(validate_bmi(22.5).is_ok());
        assert!(validate_bmi(9.9).is_err());
        assert!(validate_bmi(60.1).is_err());
    }
}
