//! Built-in question inventories. Each catalog is an explicit immutable
//! value built once on first use; category membership always comes from
//! the declared `category_code`, never from question-id arithmetic.

mod adhd;
mod nipa;

use std::sync::LazyLock;

use super::catalog::QuestionCatalog;
use super::domain::AssessmentKind;

static NEURAL_IMPRINT: LazyLock<QuestionCatalog> = LazyLock::new(nipa::build);
static ADHD_ADULT: LazyLock<QuestionCatalog> = LazyLock::new(adhd::build_adult);
static ADHD_CHILD: LazyLock<QuestionCatalog> = LazyLock::new(adhd::build_child);
static ADHD_TEEN: LazyLock<QuestionCatalog> = LazyLock::new(adhd::build_teen);

/// The shared catalog for an assessment kind, passed by reference to every
/// engine call.
pub fn catalog_for(kind: AssessmentKind) -> &'static QuestionCatalog {
    match kind {
        AssessmentKind::NeuralImprint => &NEURAL_IMPRINT,
        AssessmentKind::AdhdAdult => &ADHD_ADULT,
        AssessmentKind::AdhdChild => &ADHD_CHILD,
        AssessmentKind::AdhdTeen => &ADHD_TEEN,
    }
}
