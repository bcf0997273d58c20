use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::Args;

use crate::infra::{InMemoryAssessmentRepository, InMemoryReportNotifier};
use imprint_core::assessments::{
    catalogs, AssessmentKind, AssessmentService, RaterSubmission, ReportProjector,
    ResponseSheetImporter, RespondentRole, ScoringEngine, SheetContext, SubmissionGuard,
};
use imprint_core::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct SheetReportArgs {
    /// Assessment variant the sheet belongs to
    #[arg(long, value_parser = crate::infra::parse_kind)]
    pub(crate) kind: AssessmentKind,
    /// Role that filled the sheet in
    #[arg(long, value_parser = crate::infra::parse_role)]
    pub(crate) role: RespondentRole,
    /// Path to the scanned `Question ID,Answer` CSV
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Respondent display name for the report header
    #[arg(long)]
    pub(crate) name: String,
    /// Date the sheet was completed (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) completed_on: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Assessment variant to run the demo against
    #[arg(long, value_parser = crate::infra::parse_kind)]
    pub(crate) kind: Option<AssessmentKind>,
    /// Print the full per-category listing of each report
    #[arg(long)]
    pub(crate) include_categories: bool,
}

/// Score a scanned answer sheet without touching storage and print the
/// report record a renderer would receive.
pub(crate) fn run_sheet_report(args: SheetReportArgs) -> Result<(), AppError> {
    let SheetReportArgs {
        kind,
        role,
        input,
        name,
        completed_on,
    } = args;

    let submission = ResponseSheetImporter::from_path(
        &input,
        SheetContext {
            kind,
            role,
            respondent_name: name,
            respondent_email: None,
            completed_on,
        },
    )?;

    let catalog = catalogs::catalog_for(kind);
    let scheme = kind.scheme();

    let response = match SubmissionGuard::new(catalog, scheme).response_from_submission(submission)
    {
        Ok(response) => response,
        Err(error) => {
            println!("Sheet rejected: {error}");
            return Ok(());
        }
    };

    let result = match ScoringEngine::new(catalog, scheme).score(&response) {
        Ok(result) => result,
        Err(error) => {
            println!("Sheet unscorable: {error}");
            return Ok(());
        }
    };

    match ReportProjector::new(catalog, scheme).client_report(&result) {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(error) => println!("Report payload unavailable: {error}"),
        },
        Err(error) => println!("Report unavailable: {error}"),
    }

    Ok(())
}

/// End-to-end walkthrough: open an assessment, submit every required
/// rater, and print the resulting reports and dispatched alerts.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let kind = args.kind.unwrap_or(AssessmentKind::AdhdChild);

    println!("Imprint scoring demo: {}", kind.display_name());

    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let notifier = Arc::new(InMemoryReportNotifier::default());
    let service = AssessmentService::new(repository, notifier.clone());

    let record = match service.create(kind) {
        Ok(record) => record,
        Err(error) => {
            println!("  Could not open assessment: {error}");
            return Ok(());
        }
    };
    println!("- Opened {}", record.assessment_id.0);

    for (offset, role) in kind.required_roles().iter().enumerate() {
        let submission = sample_submission(kind, *role, offset as u32);
        let stored = match service.submit_response(&record.assessment_id, submission) {
            Ok(stored) => stored,
            Err(error) => {
                println!("  Submission for {} rejected: {error}", role.label());
                return Ok(());
            }
        };
        println!(
            "- {} submitted -> status {}",
            role.label(),
            stored.status.label()
        );

        let report = match service.client_report(&record.assessment_id, *role) {
            Ok(report) => report,
            Err(error) => {
                println!("  Report unavailable: {error}");
                return Ok(());
            }
        };
        println!(
            "  Overall {}% ({}), top concern: {}",
            report.overall.percentage,
            report.overall.severity_label,
            report
                .top_concerns
                .first()
                .map(|concern| concern.name.as_str())
                .unwrap_or("none")
        );

        if args.include_categories {
            for category in &report.categories {
                println!(
                    "    {} {}% [{}]",
                    category.name, category.percentage, category.severity_label
                );
            }
        }
    }

    if kind.is_multi_rater() {
        match service.comparison_report(&record.assessment_id) {
            Ok(comparison) => {
                println!(
                    "- Combined {}% ({})",
                    comparison.combined.percentage, comparison.combined.severity_label
                );
                println!(
                    "  {} area(s) of agreement, {} significant discrepancy(ies)",
                    comparison.agreements.len(),
                    comparison.discrepancies.len()
                );
                for entry in &comparison.discrepancies {
                    println!(
                        "    {}: {}% vs {}% ({})",
                        entry.name, entry.percentage_a, entry.percentage_b, entry.agreement_label
                    );
                }
            }
            Err(error) => println!("  Comparison unavailable: {error}"),
        }
    }

    let events = notifier.events();
    if events.is_empty() {
        println!("- External alerts: none dispatched");
    } else {
        println!("- External alerts:");
        for alert in events {
            println!("    template={} -> {}", alert.template, alert.assessment_id.0);
        }
    }

    Ok(())
}

/// Deterministic sample answers: each rater cycles the scale from a
/// different starting offset so the raters disagree a little, the way real
/// observer pairs do. Categories come from the catalog, never from
/// question-id arithmetic.
fn sample_submission(kind: AssessmentKind, role: RespondentRole, offset: u32) -> RaterSubmission {
    let catalog = catalogs::catalog_for(kind);
    let scheme = kind.scheme();
    let span = (scheme.answer_max - scheme.answer_min + 1) as u32;

    let answers = catalog
        .questions_for(role)
        .enumerate()
        .map(|(index, question)| {
            let value = scheme.answer_min + ((index as u32 + offset * 2) % span) as u8;
            (question.id, value)
        })
        .collect();

    RaterSubmission {
        role,
        respondent_name: format!("Demo {}", role.label()),
        respondent_email: None,
        answers,
        completed_on: None,
    }
}
