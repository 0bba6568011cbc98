use serde::{Deserialize, Serialize};

use super::domain::{FarmerProfile, FarmingType};

/// Validation errors raised while turning a submitted form into a profile.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("{field} must be a number (found '{value}')")]
    NotANumber { field: &'static str, value: String },
    #[error("{field} cannot be negative (found {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("age must be a whole number greater than zero (found '{0}')")]
    InvalidAge(String),
    #[error("unknown farming type '{0}' (expected conventional, organic or mixed)")]
    UnknownFarmingType(String),
}

/// Eligibility form exactly as collected from the farmer: free text, possibly blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilityForm {
    pub land_size: String,
    pub state: String,
    pub crop: String,
    pub income: String,
    pub age: String,
    pub is_organic: bool,
    pub has_irrigation: bool,
    pub farming_type: String,
}

impl TryFrom<EligibilityForm> for FarmerProfile {
    type Error = IntakeError;

    fn try_from(form: EligibilityForm) -> Result<Self, Self::Error> {
        let land_size_hectares = parse_amount("land_size", &form.land_size)?;
        let annual_income = parse_amount("income", &form.income)?;
        let age = parse_age(&form.age)?;
        let farming_type = parse_farming_type(&form.farming_type)?;

        Ok(FarmerProfile {
            land_size_hectares,
            state: non_blank(form.state),
            primary_crop: non_blank(form.crop),
            annual_income,
            age,
            is_organic: form.is_organic,
            has_irrigation: form.has_irrigation,
            farming_type,
        })
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_amount(field: &'static str, raw: &str) -> Result<Option<f64>, IntakeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: f64 = trimmed
        .parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
        .ok_or_else(|| IntakeError::NotANumber {
            field,
            value: trimmed.to_string(),
        })?;

    if value < 0.0 {
        return Err(IntakeError::Negative { field, value });
    }

    Ok(Some(value))
}

fn parse_age(raw: &str) -> Result<Option<u16>, IntakeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<u16>() {
        Ok(age) if age > 0 => Ok(Some(age)),
        _ => Err(IntakeError::InvalidAge(trimmed.to_string())),
    }
}

fn parse_farming_type(raw: &str) -> Result<FarmingType, IntakeError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "conventional" => Ok(FarmingType::Conventional),
        "organic" => Ok(FarmingType::Organic),
        "mixed" => Ok(FarmingType::Mixed),
        _ => Err(IntakeError::UnknownFarmingType(raw.trim().to_string())),
    }
}
