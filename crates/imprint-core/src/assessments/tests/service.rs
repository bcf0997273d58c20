use std::sync::Arc;

use super::common::*;
use crate::assessments::domain::{AssessmentKind, AssessmentStatus, RespondentRole};
use crate::assessments::guard::SubmissionViolation;
use crate::assessments::repository::{AssessmentRepository, RepositoryError};
use crate::assessments::service::{AssessmentService, AssessmentServiceError};

#[test]
fn single_rater_assessment_completes_on_first_submission() {
    let (service, _, notifier) = build_service();
    let record = service.create(AssessmentKind::AdhdAdult).expect("creates");
    assert_eq!(record.status, AssessmentStatus::Pending);

    let submission = complete_submission(AssessmentKind::AdhdAdult, RespondentRole::Adult, 2);
    let updated = service
        .submit_response(&record.assessment_id, submission)
        .expect("submits");

    assert_eq!(updated.status, AssessmentStatus::Completed);
    let events = notifier.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].template, "client_report_ready");
}

#[test]
fn dual_rater_assessment_waits_for_the_second_rater() {
    let (service, _, notifier) = build_service();
    let record = service.create(AssessmentKind::AdhdChild).expect("creates");

    let parent = complete_submission(AssessmentKind::AdhdChild, RespondentRole::Parent, 3);
    let after_first = service
        .submit_response(&record.assessment_id, parent)
        .expect("first rater submits");
    assert_eq!(after_first.status, AssessmentStatus::AwaitingSecondRater);

    let caregiver = complete_submission(AssessmentKind::AdhdChild, RespondentRole::Caregiver, 2);
    let after_second = service
        .submit_response(&record.assessment_id, caregiver)
        .expect("second rater submits");
    assert_eq!(after_second.status, AssessmentStatus::Completed);

    let templates: Vec<String> = notifier
        .events()
        .into_iter()
        .map(|alert| alert.template)
        .collect();
    assert_eq!(
        templates,
        vec![
            "client_report_ready".to_string(),
            "comparison_report_ready".to_string()
        ]
    );
}

#[test]
fn duplicate_role_submission_is_rejected() {
    let (service, _, _) = build_service();
    let record = service.create(AssessmentKind::AdhdChild).expect("creates");

    let first = complete_submission(AssessmentKind::AdhdChild, RespondentRole::Parent, 3);
    service
        .submit_response(&record.assessment_id, first)
        .expect("first submission lands");

    let again = complete_submission(AssessmentKind::AdhdChild, RespondentRole::Parent, 1);
    let error = service
        .submit_response(&record.assessment_id, again)
        .expect_err("second parent submission must fail");

    match error {
        AssessmentServiceError::AlreadySubmitted { role } => assert_eq!(role, "parent"),
        other => panic!("expected already-submitted error, got {other:?}"),
    }
}

#[test]
fn unexpected_role_is_rejected() {
    let (service, _, _) = build_service();
    let record = service.create(AssessmentKind::AdhdChild).expect("creates");

    let teen = complete_submission(AssessmentKind::AdhdTeen, RespondentRole::Teen, 2);
    let error = service
        .submit_response(&record.assessment_id, teen)
        .expect_err("teen is not a rater for the child screener");

    match error {
        AssessmentServiceError::RoleNotExpected { role, kind } => {
            assert_eq!(role, "teen_self");
            assert_eq!(kind, "adhd_child");
        }
        other => panic!("expected role-not-expected error, got {other:?}"),
    }
}

#[test]
fn incomplete_submission_is_rejected_and_not_stored() {
    let (service, repository, _) = build_service();
    let record = service.create(AssessmentKind::AdhdChild).expect("creates");

    let mut partial = complete_submission(AssessmentKind::AdhdChild, RespondentRole::Parent, 2);
    partial.answers.remove(&1);
    partial.answers.remove(&2);

    let error = service
        .submit_response(&record.assessment_id, partial)
        .expect_err("partial answers must fail");

    match error {
        AssessmentServiceError::Submission(SubmissionViolation::IncompleteAnswers { missing }) => {
            assert_eq!(missing, vec![1, 2]);
        }
        other => panic!("expected incomplete-answers error, got {other:?}"),
    }

    let stored = repository
        .fetch(&record.assessment_id)
        .expect("fetches")
        .expect("record exists");
    assert!(stored.responses.is_empty());
    assert_eq!(stored.status, AssessmentStatus::Pending);
}

#[test]
fn out_of_scale_answer_is_rejected() {
    let (service, _, _) = build_service();
    let record = service.create(AssessmentKind::AdhdChild).expect("creates");

    // 0 is legal on the percentage scale but below the 1-4 word scale.
    let mut submission = complete_submission(AssessmentKind::AdhdChild, RespondentRole::Parent, 2);
    submission.answers.insert(5, 0);

    let error = service
        .submit_response(&record.assessment_id, submission)
        .expect_err("off-scale answer must fail");

    match error {
        AssessmentServiceError::Submission(SubmissionViolation::AnswerOutOfRange {
            question_id,
            value,
            min,
            max,
        }) => {
            assert_eq!(question_id, 5);
            assert_eq!(value, 0);
            assert_eq!((min, max), (1, 4));
        }
        other => panic!("expected out-of-range error, got {other:?}"),
    }
}

#[test]
fn comparison_is_gated_on_both_raters() {
    let (service, _, _) = build_service();
    let record = service.create(AssessmentKind::AdhdTeen).expect("creates");

    let parent = complete_submission(AssessmentKind::AdhdTeen, RespondentRole::Parent, 3);
    service
        .submit_response(&record.assessment_id, parent)
        .expect("parent submits");

    let error = service
        .comparison_report(&record.assessment_id)
        .expect_err("comparison must wait for the teen");

    match error {
        AssessmentServiceError::ComparisonNotReady { status } => {
            assert_eq!(status, "awaiting_second_rater");
        }
        other => panic!("expected not-ready error, got {other:?}"),
    }
}

#[test]
fn comparison_report_is_available_once_both_raters_submit() {
    let (service, _, _) = build_service();
    let record = service.create(AssessmentKind::AdhdTeen).expect("creates");

    let parent = complete_submission(AssessmentKind::AdhdTeen, RespondentRole::Parent, 4);
    let teen = complete_submission(AssessmentKind::AdhdTeen, RespondentRole::Teen, 2);
    service
        .submit_response(&record.assessment_id, parent)
        .expect("parent submits");
    service
        .submit_response(&record.assessment_id, teen)
        .expect("teen submits");

    let report = service
        .comparison_report(&record.assessment_id)
        .expect("comparison available");

    // Flat 4s vs flat 2s: 100% vs 50% in both categories, everywhere
    // significant.
    assert_eq!(report.rater_a.overall.percentage, 100);
    assert_eq!(report.rater_b.overall.percentage, 50);
    assert_eq!(report.combined.percentage, 75);
    assert_eq!(report.discrepancies.len(), 2);
    assert!(report.agreements.is_empty());
}

#[test]
fn single_rater_kinds_have_no_comparison() {
    let (service, _, _) = build_service();
    let record = service.create(AssessmentKind::NeuralImprint).expect("creates");

    let error = service
        .comparison_report(&record.assessment_id)
        .expect_err("NIPA has one rater");

    match error {
        AssessmentServiceError::NotMultiRater { kind } => assert_eq!(kind, "neural_imprint"),
        other => panic!("expected not-multi-rater error, got {other:?}"),
    }
}

#[test]
fn client_report_recomputes_from_stored_answers() {
    let (service, _, _) = build_service();
    let record = service.create(AssessmentKind::AdhdAdult).expect("creates");

    let submission = complete_submission(AssessmentKind::AdhdAdult, RespondentRole::Adult, 4);
    service
        .submit_response(&record.assessment_id, submission)
        .expect("submits");

    let first = service
        .client_report(&record.assessment_id, RespondentRole::Adult)
        .expect("report renders");
    let second = service
        .client_report(&record.assessment_id, RespondentRole::Adult)
        .expect("report renders again");

    assert_eq!(first.overall.percentage, 100);
    assert_eq!(first.overall.percentage, second.overall.percentage);
    assert_eq!(first.categories.len(), second.categories.len());
}

#[test]
fn repository_outages_propagate() {
    let service = AssessmentService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryNotifier::default()),
    );

    let error = service
        .create(AssessmentKind::AdhdAdult)
        .expect_err("offline repository must fail");

    match error {
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => {}
        other => panic!("expected unavailable error, got {other:?}"),
    }
}
