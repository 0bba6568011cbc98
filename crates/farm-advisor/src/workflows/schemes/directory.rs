use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::reference::{read_file, ReferenceDataError};

/// Descriptive listing shown on the scheme search page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeListing {
    pub name: String,
    pub scheme_type: String,
    pub benefits: String,
    pub premium: String,
    pub eligibility: String,
    pub central_or_state: String,
    pub applicable_crops: String,
    pub landholding: String,
    pub source_link: String,
}

/// Search filters. Blank or missing filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemeQuery {
    pub scheme_type: Option<String>,
    pub crop: Option<String>,
    pub jurisdiction: Option<String>,
    pub text: Option<String>,
}

impl SchemeQuery {
    pub fn is_empty(&self) -> bool {
        [&self.scheme_type, &self.crop, &self.jurisdiction, &self.text]
            .into_iter()
            .all(|filter| needle(filter).is_none())
    }

    pub fn matches(&self, listing: &SchemeListing) -> bool {
        let scheme_type = needle(&self.scheme_type)
            .map_or(true, |needle| contains(&listing.scheme_type, &needle));
        let crop = needle(&self.crop).map_or(true, |needle| {
            contains(&listing.applicable_crops, &needle) || listing.applicable_crops == "All"
        });
        let jurisdiction = needle(&self.jurisdiction)
            .map_or(true, |needle| contains(&listing.central_or_state, &needle));
        let text = needle(&self.text).map_or(true, |needle| {
            contains(&listing.name, &needle) || contains(&listing.benefits, &needle)
        });

        scheme_type && crop && jurisdiction && text
    }
}

fn needle(filter: &Option<String>) -> Option<String> {
    filter
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase)
}

fn contains(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Read-only collection of scheme listings.
#[derive(Debug, Clone)]
pub struct SchemeDirectory {
    listings: Arc<[SchemeListing]>,
}

impl SchemeDirectory {
    pub fn new(listings: Vec<SchemeListing>) -> Self {
        Self {
            listings: listings.into(),
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ReferenceDataError> {
        let listings: Vec<SchemeListing> = serde_json::from_reader(reader)?;
        Ok(Self::new(listings))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ReferenceDataError> {
        Self::from_json_reader(read_file(path.as_ref())?)
    }

    pub fn listings(&self) -> &[SchemeListing] {
        &self.listings
    }

    /// Listings matching every supplied filter, in directory order.
    pub fn search(&self, query: &SchemeQuery) -> Vec<SchemeListing> {
        self.listings
            .iter()
            .filter(|listing| query.matches(listing))
            .cloned()
            .collect()
    }

    /// Listings used when no directory file is configured.
    pub fn builtin() -> Self {
        let listing = |name: &str,
                       scheme_type: &str,
                       benefits: &str,
                       premium: &str,
                       eligibility: &str,
                       applicable_crops: &str,
                       landholding: &str,
                       source_link: &str| SchemeListing {
            name: name.to_string(),
            scheme_type: scheme_type.to_string(),
            benefits: benefits.to_string(),
            premium: premium.to_string(),
            eligibility: eligibility.to_string(),
            central_or_state: "Central".to_string(),
            applicable_crops: applicable_crops.to_string(),
            landholding: landholding.to_string(),
            source_link: source_link.to_string(),
        };

        Self::new(vec![
            listing(
                "Pradhan Mantri Fasal Bima Yojana (PMFBY)",
                "Crop insurance",
                "Insurance coverage for crop losses due to natural calamities, pests, and diseases",
                "1.5-5% of sum insured",
                "All farmers growing notified crops",
                "Notified crops",
                "All",
                "https://pmfby.gov.in/",
            ),
            listing(
                "Pradhan Mantri Kisan Samman Nidhi (PM-KISAN)",
                "Direct income support",
                "₹6,000/year paid in 3 instalments",
                "No premium",
                "Land-owning farmers",
                "All",
                "As per scheme",
                "https://pmkisan.gov.in/",
            ),
            listing(
                "Kisan Credit Card (KCC)",
                "Credit/Loan",
                "Short-term crop loans and working capital",
                "4% interest rate",
                "All farmers",
                "All",
                "All",
                "https://www.rbi.org.in/",
            ),
            listing(
                "Pradhan Mantri Krishi Sinchayee Yojana (PMKSY)",
                "Irrigation investment",
                "Subsidised drip and sprinkler irrigation infrastructure",
                "50% subsidy",
                "Landholders with suitable projects",
                "All",
                "All",
                "https://pmksy.gov.in/",
            ),
            listing(
                "Soil Health Card Scheme",
                "Free soil testing",
                "Soil report with NPK advice",
                "FREE",
                "All farmers",
                "All",
                "All",
                "https://soilhealth.dac.gov.in/",
            ),
            listing(
                "National Mission for Sustainable Agriculture",
                "Sustainable farming",
                "Training and equipment for climate-resilient practices",
                "60-75% subsidy",
                "Progressive farmers",
                "All",
                "All",
                "https://nmsa.dac.gov.in/",
            ),
        ])
    }
}

impl Default for SchemeDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}
