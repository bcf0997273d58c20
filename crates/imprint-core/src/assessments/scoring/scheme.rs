use serde::{Deserialize, Serialize};

use super::super::domain::AssessmentKind;

/// Band table a scheme's scores classify against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandScale {
    /// Integer 0-100 bands: Low / Moderate / High / Severe.
    Percentage,
    /// Arithmetic-mean bands over the 1.0-4.0 answer scale:
    /// Low / Mild / Moderate / High.
    RawMean,
}

/// Scoring rubric for one assessment variant: the ordinal answer scale its
/// items use and the severity band table its scores classify against. A
/// single engine parameterized by this value replaces the per-variant
/// scoring forks of the legacy platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringScheme {
    pub answer_min: u8,
    pub answer_max: u8,
    pub bands: BandScale,
}

impl ScoringScheme {
    /// 0-4 Likert scale reported as integer percentages.
    pub const fn five_point_percentage() -> Self {
        Self {
            answer_min: 0,
            answer_max: 4,
            bands: BandScale::Percentage,
        }
    }

    /// Word-labelled 1-4 scale reported as a raw arithmetic mean.
    pub const fn word_scale_raw_mean() -> Self {
        Self {
            answer_min: 1,
            answer_max: 4,
            bands: BandScale::RawMean,
        }
    }

    pub fn contains(&self, value: u8) -> bool {
        (self.answer_min..=self.answer_max).contains(&value)
    }
}

impl AssessmentKind {
    /// The rubric this assessment variant scores with.
    pub const fn scheme(self) -> ScoringScheme {
        match self {
            Self::NeuralImprint | Self::AdhdAdult => ScoringScheme::five_point_percentage(),
            Self::AdhdChild | Self::AdhdTeen => ScoringScheme::word_scale_raw_mean(),
        }
    }
}
