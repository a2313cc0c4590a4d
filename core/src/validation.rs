//! Input validation functions
//!
//! Domain-range guards for the values the analytics core consumes. The
//! calculators themselves never clamp or guess; callers validate first and
//! treat a failure here as a caller-side bug or bad user input.

use crate::errors::AnalyticsError;
use crate::models::UserProfile;

/// Validate age in years (clinical range used by the profile form)
pub fn validate_age(age: i32) -> Result<(), String> {
    if age < 10 {
        return Err("Age must be at least 10 years".to_string());
    }
    if age > 120 {
        return Err("Age must be at most 120 years".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 100.0 {
        return Err("Height must be at least 100 cm".to_string());
    }
    if height_cm > 250.0 {
        return Err("Height must be at most 250 cm".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 30.0 {
        return Err("Weight must be at least 30 kg".to_string());
    }
    if weight_kg > 300.0 {
        return Err("Weight must be at most 300 kg".to_string());
    }
    Ok(())
}

/// Validate calorie value
pub fn validate_calories(calories: f64) -> Result<(), String> {
    if calories.is_nan() || calories.is_infinite() {
        return Err("Calories must be a valid number".to_string());
    }
    if calories < 0.0 {
        return Err("Calories cannot be negative".to_string());
    }
    if calories > 50000.0 {
        return Err("Calorie value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate water intake (ml per day)
pub fn validate_water_ml(water_ml: f64) -> Result<(), String> {
    if water_ml.is_nan() || water_ml.is_infinite() {
        return Err("Water intake must be a valid number".to_string());
    }
    if water_ml < 0.0 {
        return Err("Water intake cannot be negative".to_string());
    }
    if water_ml > 20000.0 {
        return Err("Water intake unreasonably high".to_string());
    }
    Ok(())
}

/// Validate workout duration in minutes
pub fn validate_duration_minutes(minutes: f64) -> Result<(), String> {
    if minutes.is_nan() || minutes.is_infinite() {
        return Err("Duration must be a valid number".to_string());
    }
    if minutes < 0.0 {
        return Err("Duration cannot be negative".to_string());
    }
    if minutes > 1440.0 {
        // 24 hours
        return Err("Duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

/// Validate percentage value (0-100)
pub fn validate_percentage(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("Percentage must be a valid number".to_string());
    }
    if !(0.0..=100.0).contains(&value) {
        return Err("Percentage must be between 0 and 100".to_string());
    }
    Ok(())
}

/// Validate a full profile snapshot before feeding it to the calculators.
pub fn validate_profile(profile: &UserProfile) -> Result<(), AnalyticsError> {
    validate_age(profile.age).map_err(|e| AnalyticsError::Validation(format!("age: {e}")))?;
    validate_height_cm(profile.height_cm)
        .map_err(|e| AnalyticsError::Validation(format!("height_cm: {e}")))?;
    validate_weight_kg(profile.weight_kg)
        .map_err(|e| AnalyticsError::Validation(format!("weight_kg: {e}")))?;
    Ok(())
}
