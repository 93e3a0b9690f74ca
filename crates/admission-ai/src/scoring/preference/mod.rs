//! Ranks candidate programs by combining chance, merit-list timing, and the
//! student's own interests.

mod factors;
mod insights;
mod ladder;
pub mod views;

pub use factors::FactorWeights;
pub use ladder::{LinearDecayLadder, ThresholdLadder};
pub use views::{
    FactorScores, PreferenceGroups, PreferenceItem, PreferenceList, PreferenceProfile,
    PreferenceSummary, RiskCategory, RiskTolerance,
};

use super::chance::{predict_chance, ChancePrediction};
use super::domain::{round2, CandidateProgram};
use super::merit::{predict_merit_list, MeritListPrediction};
use tracing::debug;

/// Composes the chance and merit-list predictors across many candidate programs.
#[derive(Debug, Clone, Default)]
pub struct PreferenceListGenerator<L = LinearDecayLadder> {
    ladder: L,
}

impl PreferenceListGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: ThresholdLadder> PreferenceListGenerator<L> {
    pub fn with_ladder(ladder: L) -> Self {
        Self { ladder }
    }

    pub fn generate(
        &self,
        user_aggregate: f64,
        candidates: &[CandidateProgram],
        profile: &PreferenceProfile,
    ) -> PreferenceList {
        if candidates.is_empty() {
            return PreferenceList {
                user_aggregate,
                ranked: Vec::new(),
                groups: PreferenceGroups::default(),
                summary: PreferenceSummary::default(),
                recommendations: vec![insights::EMPTY_SELECTION_MESSAGE.to_string()],
            };
        }

        let mut ranked: Vec<PreferenceItem> = candidates
            .iter()
            .map(|candidate| self.score_candidate(user_aggregate, candidate, profile))
            .collect();

        // Stable sort keeps input order for equal scores.
        ranked.sort_by(|left, right| right.combined_score.total_cmp(&left.combined_score));
        for (index, item) in ranked.iter_mut().enumerate() {
            item.rank = index + 1;
        }

        let summary = summarize(&ranked, candidates);
        let groups = group_by_risk(&ranked);
        let recommendations = insights::generate_recommendations(&summary, profile.risk_tolerance);

        debug!(
            user_aggregate,
            total = summary.total_programs,
            safe = summary.safe_count,
            moderate = summary.moderate_count,
            ambitious = summary.ambitious_count,
            "generated preference list"
        );

        PreferenceList {
            user_aggregate,
            ranked,
            groups,
            summary,
            recommendations,
        }
    }

    fn score_candidate(
        &self,
        user_aggregate: f64,
        candidate: &CandidateProgram,
        profile: &PreferenceProfile,
    ) -> PreferenceItem {
        let chance = predict_chance(user_aggregate, candidate.reference_closing());
        let merit = self.predict_rounds(user_aggregate, candidate);

        let rating = factors::interest_rating(profile, &candidate.program.discipline);
        let campus_position = factors::campus_position(profile, &candidate.program.campus);
        let factor_scores = FactorScores {
            chance: f64::from(chance.chance_percentage),
            interest: factors::interest_score(rating),
            campus: factors::campus_score(campus_position),
            round: factors::round_score(merit.predicted_round),
        };
        let risk = factors::classify_risk(chance.chance_percentage);

        PreferenceItem {
            rank: 0,
            reasoning: reasoning(&chance, &merit, rating, campus_position),
            program: candidate.program.clone(),
            risk,
            chance_percentage: chance.chance_percentage,
            chance_category: chance.category,
            predicted_round: merit.predicted_round,
            round_confidence: merit.confidence,
            combined_score: factors::combined_score(&factor_scores),
            factors: factor_scores,
        }
    }

    fn predict_rounds(&self, user_aggregate: f64, candidate: &CandidateProgram) -> MeritListPrediction {
        if candidate.thresholds.is_empty() {
            if let Some(closing) = candidate.closing_aggregate {
                return predict_merit_list(user_aggregate, &self.ladder.thresholds(closing));
            }
        }
        predict_merit_list(user_aggregate, &candidate.thresholds)
    }
}

fn reasoning(
    chance: &ChancePrediction,
    merit: &MeritListPrediction,
    rating: u8,
    campus_position: Option<usize>,
) -> String {
    let mut parts = vec![format!(
        "{}% admission chance ({})",
        chance.chance_percentage,
        chance.category.label()
    )];

    match merit.predicted_round {
        Some(round) if merit.is_estimate => parts.push(format!("estimated merit list {round}")),
        Some(round) => parts.push(format!("likely merit list {round}")),
        None => parts.push("no merit list cleared".to_string()),
    }

    parts.push(format!("interest {rating}/5"));

    match campus_position {
        Some(position) => parts.push(format!("preferred campus #{position}")),
        None => parts.push("campus not in preferences".to_string()),
    }

    if !chance.data_available {
        parts.push("no closing history".to_string());
    }

    parts.join("; ")
}

fn summarize(ranked: &[PreferenceItem], candidates: &[CandidateProgram]) -> PreferenceSummary {
    let count = |risk: RiskCategory| ranked.iter().filter(|item| item.risk == risk).count();
    let total_chance: f64 = ranked
        .iter()
        .map(|item| f64::from(item.chance_percentage))
        .sum();

    PreferenceSummary {
        total_programs: ranked.len(),
        safe_count: count(RiskCategory::Safe),
        moderate_count: count(RiskCategory::Moderate),
        ambitious_count: count(RiskCategory::Ambitious),
        average_chance: round2(total_chance / ranked.len() as f64),
        data_available: candidates
            .iter()
            .any(|candidate| candidate.reference_closing().is_some()),
    }
}

fn group_by_risk(ranked: &[PreferenceItem]) -> PreferenceGroups {
    let mut groups = PreferenceGroups::default();
    for item in ranked {
        let bucket = match item.risk {
            RiskCategory::Safe => &mut groups.safe,
            RiskCategory::Moderate => &mut groups.moderate,
            RiskCategory::Ambitious => &mut groups.ambitious,
        };
        bucket.push(item.clone());
    }
    groups
}
