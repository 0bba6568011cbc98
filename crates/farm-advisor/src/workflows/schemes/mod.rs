//! Assistance-scheme eligibility: form intake, weighted scoring against the catalog, and
//! the searchable scheme directory.

pub mod catalog;
pub mod directory;
pub mod domain;
pub(crate) mod evaluation;
pub mod intake;
pub mod router;
pub mod service;
pub mod similarity;

#[cfg(test)]
mod tests;

pub use catalog::SchemeCatalog;
pub use directory::{SchemeDirectory, SchemeListing, SchemeQuery};
pub use domain::{
    EligibilityFactor, FactorDetail, FactorOutcome, FarmerProfile, FarmingType, LandSizeRange,
    MatchResult, SchemeCriteria, SchemeDefinition,
};
pub use evaluation::{
    score_eligibility, EligibilityScorer, FactorWeights, SchemeEvaluation, ScoringConfig,
};
pub use intake::{EligibilityForm, IntakeError};
pub use router::{scheme_router, EligibilityResponse, MatchView, SchemeSearchResponse};
pub use service::SchemeAdvisor;
