use crate::scoring::chance::ChanceCategory;
use crate::scoring::domain::Program;
use crate::scoring::merit::MeritConfidence;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Safe,
    Moderate,
    Ambitious,
}

impl RiskCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Moderate => "Moderate",
            Self::Ambitious => "Ambitious",
        }
    }
}

/// How much risk the student is willing to carry across the whole list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Conservative,
    #[default]
    Balanced,
    Aggressive,
}

impl RiskTolerance {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Balanced => "balanced",
            Self::Aggressive => "aggressive",
        }
    }

    /// Share of safe programs (in percent) this tolerance aims for.
    pub const fn target_safe_share(self) -> f64 {
        match self {
            Self::Conservative => 60.0,
            Self::Balanced => 40.0,
            Self::Aggressive => 20.0,
        }
    }
}

/// Student-supplied preferences steering the ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceProfile {
    /// Interest rating (1-5) keyed by discipline.
    #[serde(default)]
    pub interests: BTreeMap<String, u8>,
    /// Campuses in order of preference.
    #[serde(default)]
    pub preferred_campuses: Vec<String>,
    #[serde(default)]
    pub risk_tolerance: RiskTolerance,
}

/// Normalized sub-scores, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub chance: f64,
    pub interest: f64,
    pub campus: f64,
    pub round: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceItem {
    pub rank: usize,
    pub program: Program,
    pub risk: RiskCategory,
    pub chance_percentage: u8,
    pub chance_category: ChanceCategory,
    pub predicted_round: Option<u8>,
    pub round_confidence: MeritConfidence,
    pub factors: FactorScores,
    pub combined_score: f64,
    pub reasoning: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceGroups {
    pub safe: Vec<PreferenceItem>,
    pub moderate: Vec<PreferenceItem>,
    pub ambitious: Vec<PreferenceItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSummary {
    pub total_programs: usize,
    pub safe_count: usize,
    pub moderate_count: usize,
    pub ambitious_count: usize,
    pub average_chance: f64,
    /// False when no candidate carried any closing history.
    pub data_available: bool,
}

impl PreferenceSummary {
    /// Percentage of the list classified as safe.
    pub fn safe_share(&self) -> f64 {
        if self.total_programs == 0 {
            0.0
        } else {
            self.safe_count as f64 / self.total_programs as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceList {
    pub user_aggregate: f64,
    pub ranked: Vec<PreferenceItem>,
    pub groups: PreferenceGroups,
    pub summary: PreferenceSummary,
    pub recommendations: Vec<String>,
}
