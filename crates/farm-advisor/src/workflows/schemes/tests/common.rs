use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::schemes::domain::{
    FarmerProfile, FarmingType, LandSizeRange, SchemeCriteria, SchemeDefinition,
};
use crate::workflows::schemes::intake::EligibilityForm;
use crate::workflows::schemes::{scheme_router, SchemeAdvisor, SchemeCatalog};

pub(super) fn scheme(name: &str, description: &str, criteria: SchemeCriteria) -> SchemeDefinition {
    SchemeDefinition {
        name: name.to_string(),
        description: description.to_string(),
        criteria,
        income_limit: None,
        land_size_range: LandSizeRange::at_least(0.0),
    }
}

pub(super) fn open_scheme(name: &str) -> SchemeDefinition {
    scheme(name, "Open to every farmer", SchemeCriteria::default())
}

/// Requires only state and land size, with an unbounded land range.
pub(super) fn state_and_land_scheme() -> SchemeDefinition {
    scheme(
        "State land support",
        "Credit facility for farmers",
        SchemeCriteria {
            requires_state: true,
            requires_land_size: true,
            ..SchemeCriteria::default()
        },
    )
}

pub(super) fn punjab_profile() -> FarmerProfile {
    FarmerProfile {
        land_size_hectares: Some(2.0),
        state: Some("Punjab".to_string()),
        farming_type: FarmingType::Conventional,
        ..FarmerProfile::default()
    }
}

/// A wheat grower in Punjab with irrigation, below the PM-KISAN income cap.
pub(super) fn complete_profile() -> FarmerProfile {
    FarmerProfile {
        land_size_hectares: Some(2.0),
        state: Some("Punjab".to_string()),
        primary_crop: Some("wheat".to_string()),
        annual_income: Some(150_000.0),
        age: Some(42),
        is_organic: false,
        has_irrigation: true,
        farming_type: FarmingType::Conventional,
    }
}

pub(super) fn complete_form() -> EligibilityForm {
    EligibilityForm {
        land_size: "2".to_string(),
        state: "Punjab".to_string(),
        crop: "wheat".to_string(),
        income: "150000".to_string(),
        age: "42".to_string(),
        is_organic: false,
        has_irrigation: true,
        farming_type: "conventional".to_string(),
    }
}

pub(super) fn builtin_catalog() -> SchemeCatalog {
    SchemeCatalog::builtin()
}

pub(super) fn router() -> axum::Router {
    scheme_router(Arc::new(SchemeAdvisor::default()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
