use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for assessment instances.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Perspective from which a questionnaire is completed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RespondentRole {
    #[serde(rename = "adult_self")]
    Adult,
    Parent,
    Caregiver,
    #[serde(rename = "teen_self")]
    Teen,
}

impl RespondentRole {
    pub const fn ordered() -> [Self; 4] {
        [Self::Adult, Self::Parent, Self::Caregiver, Self::Teen]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Adult => "adult_self",
            Self::Parent => "parent",
            Self::Caregiver => "caregiver",
            Self::Teen => "teen_self",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|role| role.label() == value)
    }
}

/// One questionnaire item, tagged with the pattern it measures and the
/// roles allowed to answer it. Immutable once the owning catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub category_code: String,
    pub text: String,
    pub eligible_roles: Vec<RespondentRole>,
}

impl Question {
    pub fn eligible_for(&self, role: RespondentRole) -> bool {
        self.eligible_roles.contains(&role)
    }
}

/// A category (pattern) groups the questions measuring one behavioral
/// construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub code: String,
    pub display_name: String,
}

/// Raw inbound answers for one rater, prior to validation by the
/// submission guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaterSubmission {
    pub role: RespondentRole,
    pub respondent_name: String,
    #[serde(default)]
    pub respondent_email: Option<String>,
    pub answers: BTreeMap<u32, u8>,
    #[serde(default)]
    pub completed_on: Option<NaiveDate>,
}

/// A validated, complete answer set for one rater.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSet {
    pub role: RespondentRole,
    pub respondent_name: String,
    pub respondent_email: Option<String>,
    pub answers: BTreeMap<u32, u8>,
    pub completed_on: Option<NaiveDate>,
}

/// Per-category reduction of one response set. Derived on demand from its
/// source answers, never stored independently of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category_code: String,
    pub raw_sum: u32,
    pub max_possible: u32,
    pub percentage: u8,
    pub question_count: usize,
}

impl CategoryScore {
    /// Arithmetic mean over the answered scale, used by raw-mean schemes.
    /// `None` when the category had no eligible questions for the role.
    pub fn raw_mean(&self) -> Option<f64> {
        if self.question_count == 0 {
            None
        } else {
            Some(self.raw_sum as f64 / self.question_count as f64)
        }
    }
}

/// Whole-questionnaire reduction across every eligible question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallScore {
    pub total_raw: u32,
    pub max_possible: u32,
    pub percentage: u8,
    pub question_count: usize,
}

impl OverallScore {
    pub fn raw_mean(&self) -> Option<f64> {
        if self.question_count == 0 {
            None
        } else {
            Some(self.total_raw as f64 / self.question_count as f64)
        }
    }
}

/// One rater's scored submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaterResult {
    pub role: RespondentRole,
    pub respondent_name: String,
    pub category_scores: BTreeMap<String, CategoryScore>,
    pub overall: OverallScore,
}

/// Assessment variants shipped with the platform. Each supplies its own
/// catalog and scoring scheme; none gets its own code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    NeuralImprint,
    AdhdAdult,
    AdhdChild,
    AdhdTeen,
}

impl AssessmentKind {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::NeuralImprint,
            Self::AdhdAdult,
            Self::AdhdChild,
            Self::AdhdTeen,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NeuralImprint => "neural_imprint",
            Self::AdhdAdult => "adhd_adult",
            Self::AdhdChild => "adhd_child",
            Self::AdhdTeen => "adhd_teen",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::NeuralImprint => "Neural Imprint Patterns Inventory (NIPA-343)",
            Self::AdhdAdult => "Adult ADHD Screener",
            Self::AdhdChild => "ADHD Screener, Ages 7-10",
            Self::AdhdTeen => "ADHD Screener, Ages 11-18",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|kind| kind.label() == value)
    }

    /// The raters whose submissions an instance of this kind collects.
    pub const fn required_roles(self) -> &'static [RespondentRole] {
        match self {
            Self::NeuralImprint | Self::AdhdAdult => &[RespondentRole::Adult],
            Self::AdhdChild => &[RespondentRole::Parent, RespondentRole::Caregiver],
            Self::AdhdTeen => &[RespondentRole::Parent, RespondentRole::Teen],
        }
    }

    pub const fn is_multi_rater(self) -> bool {
        self.required_roles().len() > 1
    }
}

/// Lifecycle of an assessment instance as tracked by the storage
/// collaborator. The engine reacts to it but never owns a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Pending,
    AwaitingSecondRater,
    Completed,
}

impl AssessmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::AwaitingSecondRater => "awaiting_second_rater",
            Self::Completed => "completed",
        }
    }
}
