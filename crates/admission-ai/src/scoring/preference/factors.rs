use super::views::{FactorScores, PreferenceProfile, RiskCategory};
use crate::scoring::domain::round2;

/// Weights combining the normalized factors into one score.
pub struct FactorWeights;

impl FactorWeights {
    pub const CHANCE: f64 = 0.40;
    pub const INTEREST: f64 = 0.35;
    pub const CAMPUS: f64 = 0.15;
    pub const ROUND: f64 = 0.10;
}

/// Minimum chance for each risk bucket. Independent of the chance bands.
const RISK_CUTOFFS: [(u8, RiskCategory); 2] =
    [(70, RiskCategory::Safe), (40, RiskCategory::Moderate)];

const MAX_INTEREST_RATING: u8 = 5;
const DEFAULT_INTEREST_RATING: u8 = 3;

const CAMPUS_STEP: f64 = 15.0;
const CAMPUS_FLOOR: f64 = 10.0;
const UNLISTED_CAMPUS_SCORE: f64 = 50.0;

const ROUND_STEP: f64 = 12.0;
const ROUND_FLOOR: f64 = 10.0;
const NO_ROUND_SCORE: f64 = 20.0;

pub(crate) fn classify_risk(chance_percentage: u8) -> RiskCategory {
    RISK_CUTOFFS
        .iter()
        .find(|(minimum, _)| chance_percentage >= *minimum)
        .map(|(_, risk)| *risk)
        .unwrap_or(RiskCategory::Ambitious)
}

pub(crate) fn interest_rating(profile: &PreferenceProfile, discipline: &str) -> u8 {
    profile
        .interests
        .iter()
        .find(|(name, _)| name.trim().eq_ignore_ascii_case(discipline.trim()))
        .map(|(_, rating)| (*rating).clamp(1, MAX_INTEREST_RATING))
        .unwrap_or(DEFAULT_INTEREST_RATING)
}

/// 1-based position of `campus` in the student's preferred campuses.
pub(crate) fn campus_position(profile: &PreferenceProfile, campus: &str) -> Option<usize> {
    profile
        .preferred_campuses
        .iter()
        .position(|preferred| preferred.trim().eq_ignore_ascii_case(campus.trim()))
        .map(|index| index + 1)
}

/// Ratings are clamped to 1..=5 upstream, so the lowest reachable score is 20 and an
/// unrated discipline scores 60.
pub(crate) fn interest_score(rating: u8) -> f64 {
    f64::from(rating) * 100.0 / f64::from(MAX_INTEREST_RATING)
}

pub(crate) fn campus_score(position: Option<usize>) -> f64 {
    match position {
        Some(position) => (100.0 - CAMPUS_STEP * (position - 1) as f64).max(CAMPUS_FLOOR),
        None => UNLISTED_CAMPUS_SCORE,
    }
}

pub(crate) fn round_score(predicted_round: Option<u8>) -> f64 {
    match predicted_round {
        Some(round) => {
            (100.0 - ROUND_STEP * f64::from(round.saturating_sub(1))).max(ROUND_FLOOR)
        }
        None => NO_ROUND_SCORE,
    }
}

pub(crate) fn combined_score(factors: &FactorScores) -> f64 {
    round2(
        factors.chance * FactorWeights::CHANCE
            + factors.interest * FactorWeights::INTEREST
            + factors.campus * FactorWeights::CAMPUS
            + factors.round * FactorWeights::ROUND,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> PreferenceProfile {
        PreferenceProfile {
            interests: [("Computing".to_string(), 5), ("Civil".to_string(), 9)]
                .into_iter()
                .collect(),
            preferred_campuses: vec!["Main Campus".to_string(), "North Campus".to_string()],
            ..PreferenceProfile::default()
        }
    }

    #[test]
    fn risk_buckets_follow_cutoffs() {
        assert_eq!(classify_risk(70), RiskCategory::Safe);
        assert_eq!(classify_risk(69), RiskCategory::Moderate);
        assert_eq!(classify_risk(40), RiskCategory::Moderate);
        assert_eq!(classify_risk(39), RiskCategory::Ambitious);
    }

    #[test]
    fn interest_defaults_to_neutral_and_clamps() {
        let profile = profile();

        assert_eq!(interest_rating(&profile, "computing"), 5);
        assert_eq!(interest_rating(&profile, "Civil"), 5);
        assert_eq!(interest_rating(&profile, "Architecture"), 3);
        assert_eq!(interest_score(1), 20.0);
        assert_eq!(interest_score(3), 60.0);
        assert_eq!(interest_score(5), 100.0);
    }

    #[test]
    fn campus_score_decreases_by_rank() {
        let profile = profile();

        assert_eq!(campus_score(campus_position(&profile, "main campus")), 100.0);
        assert_eq!(campus_score(campus_position(&profile, "North Campus")), 85.0);
        assert_eq!(campus_score(campus_position(&profile, "Riverside")), 50.0);
        assert_eq!(campus_score(Some(12)), 10.0);
    }

    #[test]
    fn round_score_decreases_by_round() {
        assert_eq!(round_score(Some(1)), 100.0);
        assert_eq!(round_score(Some(3)), 76.0);
        assert_eq!(round_score(Some(8)), 16.0);
        assert_eq!(round_score(None), 20.0);
    }

    #[test]
    fn combined_score_applies_weights() {
        let factors = FactorScores {
            chance: 83.0,
            interest: 100.0,
            campus: 100.0,
            round: 76.0,
        };

        assert_eq!(combined_score(&factors), 90.8);
    }
}
