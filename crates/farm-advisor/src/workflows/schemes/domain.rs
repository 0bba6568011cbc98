use serde::{Deserialize, Serialize};

/// Farming practice declared on the eligibility form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FarmingType {
    #[default]
    Conventional,
    Organic,
    Mixed,
}

impl FarmingType {
    pub const fn label(self) -> &'static str {
        match self {
            FarmingType::Conventional => "conventional",
            FarmingType::Organic => "organic",
            FarmingType::Mixed => "mixed",
        }
    }
}

/// Validated farmer profile consumed by the scorer.
///
/// `None` means the farmer did not supply the value. The scorer keeps "unknown" distinct from
/// "fails the criterion".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FarmerProfile {
    pub land_size_hectares: Option<f64>,
    pub state: Option<String>,
    pub primary_crop: Option<String>,
    pub annual_income: Option<f64>,
    pub age: Option<u16>,
    pub is_organic: bool,
    pub has_irrigation: bool,
    pub farming_type: FarmingType,
}

/// Which profile facts a scheme cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemeCriteria {
    pub requires_crop: bool,
    pub requires_state: bool,
    pub requires_land_size: bool,
    pub requires_income: bool,
    pub requires_organic: bool,
    pub requires_irrigation: bool,
}

/// Inclusive landholding bounds in hectares. A missing bound is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandSizeRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl LandSizeRange {
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn contains(&self, hectares: f64) -> bool {
        self.min.map_or(true, |min| hectares >= min) && self.max.map_or(true, |max| hectares <= max)
    }
}

/// Catalog entry describing one assistance scheme's eligibility rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeDefinition {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub criteria: SchemeCriteria,
    /// Maximum annual income in rupees; `None` when the scheme has no income cap.
    #[serde(default)]
    pub income_limit: Option<f64>,
    #[serde(default)]
    pub land_size_range: LandSizeRange,
}

impl SchemeDefinition {
    pub fn income_within_limit(&self, income: f64) -> bool {
        self.income_limit.map_or(true, |limit| income <= limit)
    }
}

/// Scoring factors, declared in the order they are evaluated and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityFactor {
    CropRelevance,
    StatePresent,
    LandSize,
    IncomeLimit,
    OrganicPractice,
    IrrigationAccess,
}

impl EligibilityFactor {
    pub const ALL: [EligibilityFactor; 6] = [
        EligibilityFactor::CropRelevance,
        EligibilityFactor::StatePresent,
        EligibilityFactor::LandSize,
        EligibilityFactor::IncomeLimit,
        EligibilityFactor::OrganicPractice,
        EligibilityFactor::IrrigationAccess,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EligibilityFactor::CropRelevance => "Crop",
            EligibilityFactor::StatePresent => "State",
            EligibilityFactor::LandSize => "Land",
            EligibilityFactor::IncomeLimit => "Income",
            EligibilityFactor::OrganicPractice => "Organic",
            EligibilityFactor::IrrigationAccess => "Irrigation",
        }
    }
}

/// What the scorer observed for a single factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FactorDetail {
    /// The scheme does not require this factor; full weight is awarded.
    NotRequired,
    /// Required, but the farmer left it blank.
    NotProvided,
    CropRelevance { relevance: f64 },
    StateProvided { state: String },
    LandInRange { hectares: f64 },
    LandOutOfRange { hectares: f64 },
    IncomeWithinLimit { income: f64 },
    IncomeOverLimit { income: f64 },
    Practised,
    NotPractised,
}

/// Tagged outcome for one factor of one scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorOutcome {
    pub factor: EligibilityFactor,
    pub satisfied: bool,
    pub earned: f64,
    pub weight: f64,
    pub detail: FactorDetail,
}

impl FactorOutcome {
    /// Short display string, or `None` when the factor did not apply to the scheme.
    pub fn label(&self) -> Option<String> {
        let name = self.factor.label();
        let text = match &self.detail {
            FactorDetail::NotRequired => return None,
            FactorDetail::NotProvided => format!("{name}: not provided"),
            FactorDetail::CropRelevance { relevance } => {
                format!("{name}: {:.0}%", relevance * 100.0)
            }
            FactorDetail::StateProvided { .. } => format!("{name}: Match"),
            FactorDetail::LandInRange { hectares } => format!("{name}: {hectares}ha in range"),
            FactorDetail::LandOutOfRange { .. } => format!("{name}: out of range"),
            FactorDetail::IncomeWithinLimit { income } => {
                format!("{name}: ₹{income} within limit")
            }
            FactorDetail::IncomeOverLimit { .. } => format!("{name}: exceeds limit"),
            FactorDetail::Practised => format!("{name}: Yes"),
            FactorDetail::NotPractised => format!("{name}: No"),
        };
        Some(text)
    }
}

/// A scheme the farmer qualifies for, with its full factor breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub scheme_name: String,
    pub match_percentage: u8,
    pub factors: Vec<FactorOutcome>,
    pub description: String,
}

impl MatchResult {
    /// Display strings for the factors the scheme actually evaluated, in factor order.
    pub fn explanations(&self) -> Vec<String> {
        self.factors.iter().filter_map(FactorOutcome::label).collect()
    }

    pub fn justification(&self) -> String {
        self.explanations().join(" | ")
    }
}
