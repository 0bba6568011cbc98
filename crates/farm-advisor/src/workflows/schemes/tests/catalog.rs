use super::common::*;
use crate::reference::ReferenceDataError;
use crate::workflows::schemes::domain::LandSizeRange;
use crate::workflows::schemes::{SchemeCatalog, SchemeDirectory, SchemeQuery};

#[test]
fn builtin_catalog_lists_national_schemes() {
    let catalog = builtin_catalog();
    assert_eq!(catalog.len(), 6);

    let pm_kisan = catalog
        .find("pm-kisan (pradhan mantri kisan samman nidhi)")
        .expect("lookup ignores case");
    assert_eq!(pm_kisan.income_limit, Some(200_000.0));
    assert!(pm_kisan.criteria.requires_income);

    let pmksy = catalog
        .find("PMKSY (Pradhan Mantri Krishi Sinchayee Yojana)")
        .expect("pmksy present");
    assert_eq!(pmksy.land_size_range, LandSizeRange::at_least(0.5));
}

#[test]
fn json_catalog_treats_null_bounds_as_unbounded() {
    let json = r#"[
        {
            "name": "Dairy Entrepreneurship",
            "description": "Support for small dairy units",
            "criteria": { "requires_land_size": true, "requires_income": true },
            "income_limit": null,
            "land_size_range": { "min": 0.25, "max": null }
        },
        {
            "name": "Open Grant",
            "description": "No conditions"
        }
    ]"#;

    let catalog = SchemeCatalog::from_json_reader(json.as_bytes()).expect("catalog parses");

    assert_eq!(catalog.len(), 2);
    let dairy = &catalog.schemes()[0];
    assert!(dairy.criteria.requires_land_size);
    assert!(!dairy.criteria.requires_crop);
    assert!(dairy.land_size_range.contains(1_000.0));
    assert!(!dairy.land_size_range.contains(0.1));
    assert!(dairy.income_within_limit(f64::MAX));
    assert_eq!(catalog.schemes()[1].land_size_range, LandSizeRange::UNBOUNDED);
}

#[test]
fn duplicate_scheme_names_are_rejected() {
    let schemes = vec![open_scheme("Grant"), open_scheme("GRANT")];
    let error = SchemeCatalog::new(schemes).expect_err("duplicate rejected");
    assert!(matches!(error, ReferenceDataError::Duplicate { .. }));
}

#[test]
fn inverted_land_range_is_rejected() {
    let mut scheme = open_scheme("Inverted");
    scheme.land_size_range = LandSizeRange {
        min: Some(5.0),
        max: Some(1.0),
    };

    let error = SchemeCatalog::new(vec![scheme]).expect_err("range rejected");
    assert!(error.to_string().contains("minimum exceeds maximum"));
}

#[test]
fn malformed_json_is_reported() {
    let error = SchemeCatalog::from_json_reader("{not json".as_bytes()).expect_err("bad json");
    assert!(matches!(error, ReferenceDataError::Json(_)));
}

#[test]
fn empty_catalog_loads() {
    let catalog = SchemeCatalog::from_json_reader("[]".as_bytes()).expect("empty is allowed");
    assert!(catalog.is_empty());
}

#[test]
fn directory_search_with_no_filters_returns_everything() {
    let directory = SchemeDirectory::builtin();
    let query = SchemeQuery::default();

    assert!(query.is_empty());
    assert_eq!(directory.search(&query).len(), directory.listings().len());
}

#[test]
fn directory_search_narrows_by_each_filter() {
    let directory = SchemeDirectory::builtin();

    let credit = directory.search(&SchemeQuery {
        scheme_type: Some("credit".to_string()),
        ..SchemeQuery::default()
    });
    assert_eq!(credit.len(), 1);
    assert_eq!(credit[0].name, "Kisan Credit Card (KCC)");

    let by_text = directory.search(&SchemeQuery {
        text: Some("INSTALMENTS".to_string()),
        ..SchemeQuery::default()
    });
    assert_eq!(by_text.len(), 1);
    assert!(by_text[0].name.contains("PM-KISAN"));

    let state_only = directory.search(&SchemeQuery {
        jurisdiction: Some("state".to_string()),
        ..SchemeQuery::default()
    });
    assert!(state_only.is_empty());
}

#[test]
fn crop_filter_keeps_schemes_open_to_all_crops() {
    let directory = SchemeDirectory::builtin();

    let sugarcane = directory.search(&SchemeQuery {
        crop: Some("sugarcane".to_string()),
        ..SchemeQuery::default()
    });
    // Only PMFBY is limited to notified crops.
    assert_eq!(sugarcane.len(), directory.listings().len() - 1);

    let notified = directory.search(&SchemeQuery {
        crop: Some("notified".to_string()),
        scheme_type: Some("insurance".to_string()),
        ..SchemeQuery::default()
    });
    assert_eq!(notified.len(), 1);
}

#[test]
fn blank_filters_are_ignored() {
    let query = SchemeQuery {
        scheme_type: Some("   ".to_string()),
        text: Some(String::new()),
        ..SchemeQuery::default()
    };
    assert!(query.is_empty());
}
