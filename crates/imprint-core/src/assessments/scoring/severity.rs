use serde::{Deserialize, Serialize};

use super::super::domain::{CategoryScore, OverallScore};
use super::scheme::{BandScale, ScoringScheme};

/// Discrete severity bands across both classifier tables. Percentage
/// assessments use Low/Moderate/High/Severe; raw-mean screeners use
/// Low/Mild/Moderate/High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Mild,
    Moderate,
    High,
    Severe,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Severe => "Severe",
        }
    }

    /// Fixed display color consumed by the external report renderers.
    pub const fn color_hex(self) -> &'static str {
        match self {
            Self::Low => "#2e7d32",
            Self::Mild | Self::Moderate => "#f9a825",
            Self::High => "#c62828",
            Self::Severe => "#7f0000",
        }
    }
}

/// Raised when a value lies outside the classifier's domain. Out-of-domain
/// input is rejected, never clamped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassificationError {
    #[error("percentage {0} is outside 0..=100")]
    PercentageOutOfRange(u8),
    #[error("raw mean {0} is outside 1.0..=4.0")]
    MeanOutOfRange(f64),
}

const PERCENT_MODERATE_FROM: u8 = 25;
const PERCENT_HIGH_FROM: u8 = 50;
const PERCENT_SEVERE_FROM: u8 = 75;

/// Classify an integer percentage into the 0-100 band table. Total over
/// `0..=100`: the half-open bands partition the domain with both endpoints
/// inclusive overall.
pub fn classify_percentage(percentage: u8) -> Result<Severity, ClassificationError> {
    if percentage > 100 {
        return Err(ClassificationError::PercentageOutOfRange(percentage));
    }

    Ok(if percentage >= PERCENT_SEVERE_FROM {
        Severity::Severe
    } else if percentage >= PERCENT_HIGH_FROM {
        Severity::High
    } else if percentage >= PERCENT_MODERATE_FROM {
        Severity::Moderate
    } else {
        Severity::Low
    })
}

const MEAN_DOMAIN_MIN: f64 = 1.0;
const MEAN_DOMAIN_MAX: f64 = 4.0;
const MEAN_MILD_FROM: f64 = 1.5;
const MEAN_MODERATE_FROM: f64 = 2.5;
const MEAN_HIGH_FROM: f64 = 3.0;

/// Classify an arithmetic mean on the 1.0-4.0 word-labelled scale.
pub fn classify_raw_mean(mean: f64) -> Result<Severity, ClassificationError> {
    if !(MEAN_DOMAIN_MIN..=MEAN_DOMAIN_MAX).contains(&mean) {
        return Err(ClassificationError::MeanOutOfRange(mean));
    }

    Ok(if mean >= MEAN_HIGH_FROM {
        Severity::High
    } else if mean >= MEAN_MODERATE_FROM {
        Severity::Moderate
    } else if mean >= MEAN_MILD_FROM {
        Severity::Mild
    } else {
        Severity::Low
    })
}

impl ScoringScheme {
    /// Severity of one category score under this scheme's band table.
    ///
    /// A category with no eligible questions for the responding role has no
    /// mean to classify; it reports `Low` rather than failing, since empty
    /// categories are an expected catalog-design situation.
    pub fn classify(&self, score: &CategoryScore) -> Result<Severity, ClassificationError> {
        match self.bands {
            BandScale::Percentage => classify_percentage(score.percentage),
            BandScale::RawMean => match score.raw_mean() {
                Some(mean) => classify_raw_mean(mean),
                None => Ok(Severity::Low),
            },
        }
    }

    /// Severity of the whole-questionnaire score.
    pub fn classify_overall(
        &self,
        overall: &OverallScore,
    ) -> Result<Severity, ClassificationError> {
        match self.bands {
            BandScale::Percentage => classify_percentage(overall.percentage),
            BandScale::RawMean => match overall.raw_mean() {
                Some(mean) => classify_raw_mean(mean),
                None => Ok(Severity::Low),
            },
        }
    }
}
