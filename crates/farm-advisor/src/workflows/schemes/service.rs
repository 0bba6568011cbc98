use tracing::info;

use super::catalog::SchemeCatalog;
use super::directory::{SchemeDirectory, SchemeListing, SchemeQuery};
use super::domain::{FarmerProfile, MatchResult};
use super::evaluation::{EligibilityScorer, ScoringConfig};
use super::intake::{EligibilityForm, IntakeError};

/// Service composing form intake, the scheme catalog, and the scoring rubric.
#[derive(Debug, Clone)]
pub struct SchemeAdvisor {
    catalog: SchemeCatalog,
    directory: SchemeDirectory,
    scorer: EligibilityScorer,
}

impl SchemeAdvisor {
    pub fn new(catalog: SchemeCatalog, directory: SchemeDirectory, config: ScoringConfig) -> Self {
        Self {
            catalog,
            directory,
            scorer: EligibilityScorer::new(config),
        }
    }

    pub fn catalog(&self) -> &SchemeCatalog {
        &self.catalog
    }

    /// Validate a submitted form and rank the catalog for it.
    pub fn recommend(&self, form: EligibilityForm) -> Result<Vec<MatchResult>, IntakeError> {
        let profile = FarmerProfile::try_from(form)?;
        Ok(self.recommend_for(&profile))
    }

    pub fn recommend_for(&self, profile: &FarmerProfile) -> Vec<MatchResult> {
        let matches = self.scorer.rank(profile, self.catalog.schemes());
        info!(
            catalog = self.catalog.len(),
            recommended = matches.len(),
            "eligibility check complete"
        );
        matches
    }

    pub fn search(&self, query: &SchemeQuery) -> Vec<SchemeListing> {
        self.directory.search(query)
    }
}

impl Default for SchemeAdvisor {
    fn default() -> Self {
        Self::new(
            SchemeCatalog::builtin(),
            SchemeDirectory::builtin(),
            ScoringConfig::default(),
        )
    }
}
