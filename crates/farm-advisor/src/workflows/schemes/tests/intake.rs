use super::common::*;
use crate::workflows::schemes::domain::{FarmerProfile, FarmingType};
use crate::workflows::schemes::intake::{EligibilityForm, IntakeError};
use crate::workflows::schemes::SchemeAdvisor;

#[test]
fn complete_form_converts_to_profile() {
    let profile = FarmerProfile::try_from(complete_form()).expect("form is valid");
    assert_eq!(profile, complete_profile());
}

#[test]
fn blank_fields_become_unknown() {
    let form = EligibilityForm {
        land_size: "  ".to_string(),
        state: "".to_string(),
        crop: " \t".to_string(),
        ..EligibilityForm::default()
    };

    let profile = FarmerProfile::try_from(form).expect("blank form is valid");

    assert_eq!(profile, FarmerProfile::default());
    assert_eq!(profile.farming_type, FarmingType::Conventional);
}

#[test]
fn text_fields_are_trimmed() {
    let form = EligibilityForm {
        state: "  Maharashtra ".to_string(),
        crop: " cotton".to_string(),
        farming_type: " Mixed ".to_string(),
        ..EligibilityForm::default()
    };

    let profile = FarmerProfile::try_from(form).expect("form is valid");

    assert_eq!(profile.state.as_deref(), Some("Maharashtra"));
    assert_eq!(profile.primary_crop.as_deref(), Some("cotton"));
    assert_eq!(profile.farming_type, FarmingType::Mixed);
}

#[test]
fn non_numeric_land_size_is_rejected() {
    let form = EligibilityForm {
        land_size: "two acres".to_string(),
        ..EligibilityForm::default()
    };

    let error = FarmerProfile::try_from(form).expect_err("land size rejected");
    assert_eq!(
        error,
        IntakeError::NotANumber {
            field: "land_size",
            value: "two acres".to_string(),
        }
    );
}

#[test]
fn non_finite_income_is_rejected() {
    let form = EligibilityForm {
        income: "NaN".to_string(),
        ..EligibilityForm::default()
    };

    let error = FarmerProfile::try_from(form).expect_err("income rejected");
    assert!(matches!(error, IntakeError::NotANumber { field: "income", .. }));
}

#[test]
fn negative_amounts_are_rejected() {
    let form = EligibilityForm {
        income: "-100".to_string(),
        ..EligibilityForm::default()
    };

    let error = FarmerProfile::try_from(form).expect_err("negative income rejected");
    assert_eq!(
        error,
        IntakeError::Negative {
            field: "income",
            value: -100.0,
        }
    );
    assert!(error.to_string().contains("cannot be negative"));
}

#[test]
fn age_must_be_positive_integer() {
    for raw in ["0", "-3", "forty", "41.5"] {
        let form = EligibilityForm {
            age: raw.to_string(),
            ..EligibilityForm::default()
        };
        let error = FarmerProfile::try_from(form).expect_err("age rejected");
        assert_eq!(error, IntakeError::InvalidAge(raw.to_string()));
    }
}

#[test]
fn unknown_farming_type_is_rejected() {
    let form = EligibilityForm {
        farming_type: "hydroponic".to_string(),
        ..EligibilityForm::default()
    };

    let error = FarmerProfile::try_from(form).expect_err("farming type rejected");
    assert_eq!(error, IntakeError::UnknownFarmingType("hydroponic".to_string()));
}

#[test]
fn advisor_validates_before_scoring() {
    let advisor = SchemeAdvisor::default();

    let matches = advisor.recommend(complete_form()).expect("valid form scores");
    assert_eq!(matches.len(), 6);

    let invalid = EligibilityForm {
        land_size: "abc".to_string(),
        ..complete_form()
    };
    assert!(advisor.recommend(invalid).is_err());
}
