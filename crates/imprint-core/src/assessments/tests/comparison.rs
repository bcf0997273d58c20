use super::common::*;
use crate::assessments::comparison::{combine, AgreementLevel, ComparisonError};
use crate::assessments::domain::RespondentRole;

#[test]
fn thirty_point_gap_is_a_significant_difference() {
    let parent = rater_with(RespondentRole::Parent, &[(FOCUS, 80)]);
    let caregiver = rater_with(RespondentRole::Caregiver, &[(FOCUS, 50)]);

    let bundle = combine(parent, caregiver).expect("same category set");
    let focus = &bundle.comparisons[FOCUS];

    assert_eq!(focus.combined_percentage, 65);
    assert_eq!(focus.discrepancy, 30);
    assert_eq!(focus.agreement, AgreementLevel::SignificantDifference);
    assert_eq!(bundle.areas_of_discrepancy().len(), 1);
}

#[test]
fn close_elevated_scores_count_as_agreement() {
    let parent = rater_with(RespondentRole::Parent, &[(FOCUS, 55)]);
    let caregiver = rater_with(RespondentRole::Caregiver, &[(FOCUS, 62)]);

    let bundle = combine(parent, caregiver).expect("same category set");
    let focus = &bundle.comparisons[FOCUS];

    // round(58.5) rounds half up.
    assert_eq!(focus.combined_percentage, 59);
    assert_eq!(focus.discrepancy, 7);
    assert_eq!(focus.agreement, AgreementLevel::Consistent);
    assert_eq!(bundle.areas_of_agreement().len(), 1);
}

#[test]
fn agreement_on_unremarkable_scores_is_not_surfaced() {
    let parent = rater_with(RespondentRole::Parent, &[(FOCUS, 30)]);
    let caregiver = rater_with(RespondentRole::Caregiver, &[(FOCUS, 35)]);

    let bundle = combine(parent, caregiver).expect("same category set");

    assert_eq!(bundle.comparisons[FOCUS].agreement, AgreementLevel::Consistent);
    assert!(bundle.areas_of_agreement().is_empty());
}

#[test]
fn combination_is_symmetric() {
    let parent = rater_with(RespondentRole::Parent, &[(FOCUS, 81), (REGULATION, 22)]);
    let caregiver = rater_with(RespondentRole::Caregiver, &[(FOCUS, 48), (REGULATION, 67)]);

    let forward = combine(parent.clone(), caregiver.clone()).expect("same category set");
    let reverse = combine(caregiver, parent).expect("same category set");

    for code in [FOCUS, REGULATION] {
        assert_eq!(
            forward.comparisons[code].combined_percentage,
            reverse.comparisons[code].combined_percentage
        );
        assert_eq!(
            forward.comparisons[code].discrepancy,
            reverse.comparisons[code].discrepancy
        );
        assert_eq!(
            forward.comparisons[code].agreement,
            reverse.comparisons[code].agreement
        );
    }
    assert_eq!(
        forward.combined_overall_percentage,
        reverse.combined_overall_percentage
    );
}

#[test]
fn agreement_band_boundaries() {
    assert_eq!(AgreementLevel::from_discrepancy(0), AgreementLevel::Consistent);
    assert_eq!(AgreementLevel::from_discrepancy(14), AgreementLevel::Consistent);
    assert_eq!(
        AgreementLevel::from_discrepancy(15),
        AgreementLevel::ModerateDifference
    );
    assert_eq!(
        AgreementLevel::from_discrepancy(29),
        AgreementLevel::ModerateDifference
    );
    assert_eq!(
        AgreementLevel::from_discrepancy(30),
        AgreementLevel::SignificantDifference
    );
}

#[test]
fn mismatched_category_sets_are_a_precondition_violation() {
    let parent = rater_with(RespondentRole::Parent, &[(FOCUS, 60), (REGULATION, 40)]);
    let caregiver = rater_with(RespondentRole::Caregiver, &[(FOCUS, 55), (CAREGIVER_ONLY, 20)]);

    let error = combine(parent, caregiver).expect_err("different catalogs must not combine");
    match error {
        ComparisonError::CategoryMismatch {
            only_in_a,
            only_in_b,
        } => {
            assert_eq!(only_in_a, vec![REGULATION.to_string()]);
            assert_eq!(only_in_b, vec![CAREGIVER_ONLY.to_string()]);
        }
    }
}
