use super::super::domain::{
    EligibilityFactor, FactorDetail, FactorOutcome, FarmerProfile, SchemeDefinition,
};
use super::super::similarity::crop_relevance_with_floor;
use super::config::ScoringConfig;

pub(crate) struct SchemeTally {
    pub factors: Vec<FactorOutcome>,
    pub earned: f64,
    pub possible: f64,
}

impl SchemeTally {
    pub fn percentage(&self) -> u8 {
        if self.possible <= 0.0 {
            return 0;
        }
        let ratio = (self.earned / self.possible).clamp(0.0, 1.0);
        (ratio * 100.0).round() as u8
    }
}

pub(crate) fn score_scheme(
    profile: &FarmerProfile,
    scheme: &SchemeDefinition,
    config: &ScoringConfig,
) -> SchemeTally {
    let factors: Vec<FactorOutcome> = EligibilityFactor::ALL
        .iter()
        .map(|factor| {
            let weight = config.weights.weight(*factor);
            let (fraction, detail) = evaluate_factor(*factor, profile, scheme, config);
            FactorOutcome {
                factor: *factor,
                satisfied: fraction > 0.0,
                earned: weight * fraction,
                weight,
                detail,
            }
        })
        .collect();

    let earned = factors.iter().map(|outcome| outcome.earned).sum();
    let possible = factors.iter().map(|outcome| outcome.weight).sum();

    SchemeTally {
        factors,
        earned,
        possible,
    }
}

/// Fraction of the factor weight awarded, with the observation behind it.
fn evaluate_factor(
    factor: EligibilityFactor,
    profile: &FarmerProfile,
    scheme: &SchemeDefinition,
    config: &ScoringConfig,
) -> (f64, FactorDetail) {
    let criteria = &scheme.criteria;
    match factor {
        EligibilityFactor::CropRelevance => {
            if !criteria.requires_crop {
                return (1.0, FactorDetail::NotRequired);
            }
            match present(&profile.primary_crop) {
                Some(crop) => {
                    let relevance =
                        crop_relevance_with_floor(crop, &scheme.description, config.relevance_floor);
                    (relevance, FactorDetail::CropRelevance { relevance })
                }
                None => (0.0, FactorDetail::NotProvided),
            }
        }
        EligibilityFactor::StatePresent => {
            if !criteria.requires_state {
                return (1.0, FactorDetail::NotRequired);
            }
            match present(&profile.state) {
                Some(state) => (
                    1.0,
                    FactorDetail::StateProvided {
                        state: state.to_string(),
                    },
                ),
                None => (0.0, FactorDetail::NotProvided),
            }
        }
        EligibilityFactor::LandSize => {
            if !criteria.requires_land_size {
                return (1.0, FactorDetail::NotRequired);
            }
            match profile.land_size_hectares {
                Some(hectares) if scheme.land_size_range.contains(hectares) => {
                    (1.0, FactorDetail::LandInRange { hectares })
                }
                Some(hectares) => (0.0, FactorDetail::LandOutOfRange { hectares }),
                None => (0.0, FactorDetail::NotProvided),
            }
        }
        EligibilityFactor::IncomeLimit => {
            if !criteria.requires_income {
                return (1.0, FactorDetail::NotRequired);
            }
            match profile.annual_income {
                Some(income) if scheme.income_within_limit(income) => {
                    (1.0, FactorDetail::IncomeWithinLimit { income })
                }
                Some(income) => (0.0, FactorDetail::IncomeOverLimit { income }),
                None => (0.0, FactorDetail::NotProvided),
            }
        }
        EligibilityFactor::OrganicPractice => {
            practice(criteria.requires_organic, profile.is_organic)
        }
        EligibilityFactor::IrrigationAccess => {
            practice(criteria.requires_irrigation, profile.has_irrigation)
        }
    }
}

fn practice(required: bool, practised: bool) -> (f64, FactorDetail) {
    match (required, practised) {
        (false, _) => (1.0, FactorDetail::NotRequired),
        (true, true) => (1.0, FactorDetail::Practised),
        (true, false) => (0.0, FactorDetail::NotPractised),
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
