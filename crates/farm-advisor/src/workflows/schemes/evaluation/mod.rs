mod config;
mod rules;

pub use config::{FactorWeights, ScoringConfig};

use super::domain::{FactorOutcome, FarmerProfile, MatchResult, SchemeDefinition};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless scorer applying the rubric configuration to a profile and catalog.
#[derive(Debug, Clone, Default)]
pub struct EligibilityScorer {
    config: ScoringConfig,
}

impl EligibilityScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one scheme without applying the recommendation threshold.
    pub fn evaluate(&self, profile: &FarmerProfile, scheme: &SchemeDefinition) -> SchemeEvaluation {
        let tally = rules::score_scheme(profile, scheme, &self.config);
        let match_percentage = tally.percentage();
        SchemeEvaluation {
            scheme_name: scheme.name.clone(),
            match_percentage,
            qualifies: match_percentage >= self.config.qualifying_percentage,
            earned: tally.earned,
            possible: tally.possible,
            factors: tally.factors,
        }
    }

    /// Recommended schemes, best match first. Ties keep catalog order.
    pub fn rank(&self, profile: &FarmerProfile, catalog: &[SchemeDefinition]) -> Vec<MatchResult> {
        let mut matches: Vec<MatchResult> = catalog
            .iter()
            .filter_map(|scheme| {
                let evaluation = self.evaluate(profile, scheme);
                debug!(
                    scheme = %scheme.name,
                    match_percentage = evaluation.match_percentage,
                    qualifies = evaluation.qualifies,
                    "scored scheme"
                );
                evaluation.qualifies.then(|| MatchResult {
                    scheme_name: evaluation.scheme_name,
                    match_percentage: evaluation.match_percentage,
                    factors: evaluation.factors,
                    description: scheme.description.clone(),
                })
            })
            .collect();

        // `sort_by` is stable, which keeps equal scores in catalog order.
        matches.sort_by(|left, right| right.match_percentage.cmp(&left.match_percentage));
        matches
    }
}

/// Full scoring trail for one scheme, qualifying or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeEvaluation {
    pub scheme_name: String,
    pub match_percentage: u8,
    pub qualifies: bool,
    pub earned: f64,
    pub possible: f64,
    pub factors: Vec<FactorOutcome>,
}

/// Rank `catalog` for `profile` using the default rubric.
pub fn score_eligibility(profile: &FarmerProfile, catalog: &[SchemeDefinition]) -> Vec<MatchResult> {
    EligibilityScorer::default().rank(profile, catalog)
}
