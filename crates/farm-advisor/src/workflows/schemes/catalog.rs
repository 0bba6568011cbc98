use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use super::domain::{LandSizeRange, SchemeCriteria, SchemeDefinition};
use crate::reference::{read_file, ReferenceDataError};

/// Immutable, cheaply cloneable scheme catalog shared by every scoring call.
#[derive(Debug, Clone)]
pub struct SchemeCatalog {
    schemes: Arc<[SchemeDefinition]>,
}

impl SchemeCatalog {
    pub fn new(schemes: Vec<SchemeDefinition>) -> Result<Self, ReferenceDataError> {
        validate(&schemes)?;
        Ok(Self {
            schemes: schemes.into(),
        })
    }

    /// Load a JSON array of scheme definitions. `null` bounds are unbounded.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ReferenceDataError> {
        let schemes: Vec<SchemeDefinition> = serde_json::from_reader(reader)?;
        Self::new(schemes)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ReferenceDataError> {
        let path = path.as_ref();
        let catalog = Self::from_json_reader(read_file(path)?)?;
        info!(path = %path.display(), schemes = catalog.len(), "loaded scheme catalog");
        Ok(catalog)
    }

    /// National schemes screened by the eligibility checker.
    pub fn builtin() -> Self {
        let scheme = |name: &str,
                      description: &str,
                      criteria: SchemeCriteria,
                      income_limit: Option<f64>,
                      land_size_range: LandSizeRange| SchemeDefinition {
            name: name.to_string(),
            description: description.to_string(),
            criteria,
            income_limit,
            land_size_range,
        };

        let schemes = vec![
            scheme(
                "PM Fasal Bima Yojana (PMFBY)",
                "Crop insurance scheme",
                SchemeCriteria {
                    requires_crop: true,
                    requires_state: true,
                    ..SchemeCriteria::default()
                },
                None,
                LandSizeRange::at_least(0.0),
            ),
            scheme(
                "Kisan Credit Card (KCC)",
                "Credit facility for farmers",
                SchemeCriteria {
                    requires_state: true,
                    requires_land_size: true,
                    ..SchemeCriteria::default()
                },
                None,
                LandSizeRange::at_least(0.0),
            ),
            scheme(
                "PM-KISAN (Pradhan Mantri Kisan Samman Nidhi)",
                "Direct income support for farmers",
                SchemeCriteria {
                    requires_land_size: true,
                    requires_income: true,
                    ..SchemeCriteria::default()
                },
                Some(200_000.0),
                LandSizeRange::at_least(0.0),
            ),
            scheme(
                "PMKSY (Pradhan Mantri Krishi Sinchayee Yojana)",
                "Irrigation development scheme",
                SchemeCriteria {
                    requires_state: true,
                    requires_land_size: true,
                    requires_irrigation: true,
                    ..SchemeCriteria::default()
                },
                None,
                LandSizeRange::at_least(0.5),
            ),
            scheme(
                "Soil Health Card Scheme",
                "Free soil testing and health monitoring",
                SchemeCriteria {
                    requires_crop: true,
                    requires_state: true,
                    ..SchemeCriteria::default()
                },
                None,
                LandSizeRange::at_least(0.0),
            ),
            scheme(
                "National Mission for Sustainable Agriculture",
                "Organic and sustainable farming support",
                SchemeCriteria {
                    requires_crop: true,
                    requires_state: true,
                    requires_land_size: true,
                    requires_organic: true,
                    ..SchemeCriteria::default()
                },
                None,
                LandSizeRange::at_least(0.0),
            ),
        ];

        Self {
            schemes: schemes.into(),
        }
    }

    pub fn schemes(&self) -> &[SchemeDefinition] {
        &self.schemes
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&SchemeDefinition> {
        self.schemes
            .iter()
            .find(|scheme| scheme.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl Default for SchemeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(schemes: &[SchemeDefinition]) -> Result<(), ReferenceDataError> {
    let mut seen = HashSet::new();
    for scheme in schemes {
        let invalid = |reason: &str| ReferenceDataError::InvalidScheme {
            scheme: scheme.name.clone(),
            reason: reason.to_string(),
        };

        if scheme.name.trim().is_empty() {
            return Err(invalid("name is blank"));
        }
        if !seen.insert(scheme.name.to_lowercase()) {
            return Err(ReferenceDataError::Duplicate {
                table: "scheme catalog",
                key: scheme.name.clone(),
            });
        }

        let LandSizeRange { min, max } = scheme.land_size_range;
        if [min, max, scheme.income_limit]
            .into_iter()
            .flatten()
            .any(|bound| !bound.is_finite() || bound < 0.0)
        {
            return Err(invalid("bounds must be finite and non-negative"));
        }
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(invalid("land size minimum exceeds maximum"));
            }
        }
    }
    Ok(())
}
