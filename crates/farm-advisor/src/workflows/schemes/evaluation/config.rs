use serde::{Deserialize, Serialize};

use super::super::domain::EligibilityFactor;
use super::super::similarity::DEFAULT_RELEVANCE_FLOOR;

const DEFAULT_QUALIFYING_PERCENTAGE: u8 = 60;

/// Points available per factor. Every factor counts toward the maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    pub crop_relevance: f64,
    pub state_present: f64,
    pub land_size: f64,
    pub income_limit: f64,
    pub organic_practice: f64,
    pub irrigation_access: f64,
}

impl FactorWeights {
    pub fn weight(&self, factor: EligibilityFactor) -> f64 {
        match factor {
            EligibilityFactor::CropRelevance => self.crop_relevance,
            EligibilityFactor::StatePresent => self.state_present,
            EligibilityFactor::LandSize => self.land_size,
            EligibilityFactor::IncomeLimit => self.income_limit,
            EligibilityFactor::OrganicPractice => self.organic_practice,
            EligibilityFactor::IrrigationAccess => self.irrigation_access,
        }
    }

    pub fn total(&self) -> f64 {
        EligibilityFactor::ALL
            .iter()
            .map(|factor| self.weight(*factor))
            .sum()
    }

    fn sanitized(self) -> Self {
        let defaults = Self::default();
        let pick = |value: f64, fallback: f64| {
            if value.is_finite() && value >= 0.0 {
                value
            } else {
                fallback
            }
        };

        Self {
            crop_relevance: pick(self.crop_relevance, defaults.crop_relevance),
            state_present: pick(self.state_present, defaults.state_present),
            land_size: pick(self.land_size, defaults.land_size),
            income_limit: pick(self.income_limit, defaults.income_limit),
            organic_practice: pick(self.organic_practice, defaults.organic_practice),
            irrigation_access: pick(self.irrigation_access, defaults.irrigation_access),
        }
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            crop_relevance: 25.0,
            state_present: 20.0,
            land_size: 20.0,
            income_limit: 15.0,
            organic_practice: 10.0,
            irrigation_access: 10.0,
        }
    }
}

/// Rubric controlling how schemes are scored and which ones are recommended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: FactorWeights,
    /// Minimum match percentage for a scheme to be recommended.
    pub qualifying_percentage: u8,
    pub relevance_floor: f64,
}

impl ScoringConfig {
    /// Build a config, replacing negative or non-finite dials with the defaults.
    pub fn new(weights: FactorWeights, qualifying_percentage: u8, relevance_floor: f64) -> Self {
        let relevance_floor = if relevance_floor.is_finite() {
            relevance_floor.clamp(0.0, 1.0)
        } else {
            DEFAULT_RELEVANCE_FLOOR
        };

        Self {
            weights: weights.sanitized(),
            qualifying_percentage: qualifying_percentage.min(100),
            relevance_floor,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
            qualifying_percentage: DEFAULT_QUALIFYING_PERCENTAGE,
            relevance_floor: DEFAULT_RELEVANCE_FLOOR,
        }
    }
}
