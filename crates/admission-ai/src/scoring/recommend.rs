use super::aggregate::{aggregate_from_net, school_terms, AggregateWeights};
use super::chance::{category_for_difference, ChanceCategory};
use super::domain::{round2, Curriculum};
use serde::{Deserialize, Serialize};

/// Margins over the closing aggregate for each recommendation tier.
const MINIMUM_MARGIN: f64 = -1.0;
const RECOMMENDED_MARGIN: f64 = 1.0;
const HIGH_CONFIDENCE_MARGIN: f64 = 3.0;

/// Upper NET-score bound (inclusive) for each achievability band.
const ACHIEVABILITY_CUTOFFS: [(u16, Achievability); 3] = [
    (120, Achievability::Easy),
    (150, Achievability::Moderate),
    (175, Achievability::Challenging),
];

const SCENARIO_OFFSETS: [i32; 5] = [-20, -10, 0, 10, 20];

/// Absorbs float noise so exact solutions are not pushed to the next integer.
const CEILING_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetScoreRecommendation {
    pub target_aggregate: f64,
    pub required_net_score: u16,
    /// Solved NET percentage before clamping, rounded to 2 decimals.
    pub required_net_percentage: f64,
    pub achievable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievability {
    Easy,
    Moderate,
    Challenging,
    VeryChallenging,
    NotAchievable,
}

impl Achievability {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Challenging => "Challenging",
            Self::VeryChallenging => "Very Challenging",
            Self::NotAchievable => "Not Achievable",
        }
    }

    fn classify(recommendation: &NetScoreRecommendation) -> Self {
        if !recommendation.achievable && recommendation.required_net_percentage > 100.0 {
            return Self::NotAchievable;
        }

        ACHIEVABILITY_CUTOFFS
            .iter()
            .find(|(limit, _)| recommendation.required_net_score <= *limit)
            .map(|(_, band)| *band)
            .unwrap_or(Self::VeryChallenging)
    }
}

/// One illustrative NET score and the aggregate it would produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetScoreScenario {
    pub net_score: u16,
    pub aggregate: f64,
    pub difference: f64,
    pub chance_category: ChanceCategory,
    pub chance_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetScorePlan {
    pub closing_aggregate: f64,
    pub minimum: NetScoreRecommendation,
    pub recommended: NetScoreRecommendation,
    pub high_confidence: NetScoreRecommendation,
    pub achievability: Achievability,
    pub achievability_label: String,
    pub scenarios: Vec<NetScoreScenario>,
}

/// Solves the aggregate formula for the NET score that reaches `target_aggregate`
/// given the fixed school results in `curriculum`.
pub fn recommend_net_score(target_aggregate: f64, curriculum: &Curriculum) -> NetScoreRecommendation {
    let fixed = school_terms(curriculum).total();
    let net_percentage = (target_aggregate - fixed) / AggregateWeights::NET;
    let raw_score = (net_percentage / 100.0 * AggregateWeights::NET_MAX - CEILING_TOLERANCE).ceil();

    let achievable = (0.0..=AggregateWeights::NET_MAX).contains(&raw_score);
    let required_net_score = raw_score.clamp(0.0, AggregateWeights::NET_MAX) as u16;

    NetScoreRecommendation {
        target_aggregate,
        required_net_score,
        required_net_percentage: round2(net_percentage),
        achievable,
    }
}

/// Builds the three-tier NET plan for a known closing aggregate.
pub fn plan_net_score(closing_aggregate: f64, curriculum: &Curriculum) -> NetScorePlan {
    let minimum = recommend_net_score(closing_aggregate + MINIMUM_MARGIN, curriculum);
    let recommended = recommend_net_score(closing_aggregate + RECOMMENDED_MARGIN, curriculum);
    let high_confidence = recommend_net_score(closing_aggregate + HIGH_CONFIDENCE_MARGIN, curriculum);
    let achievability = Achievability::classify(&recommended);

    NetScorePlan {
        closing_aggregate,
        minimum,
        recommended,
        high_confidence,
        achievability,
        achievability_label: achievability.label().to_string(),
        scenarios: scenarios_around(recommended.required_net_score, closing_aggregate, curriculum),
    }
}

fn scenarios_around(
    center: u16,
    closing_aggregate: f64,
    curriculum: &Curriculum,
) -> Vec<NetScoreScenario> {
    let max = AggregateWeights::NET_MAX as i32;
    let mut scores: Vec<u16> = Vec::with_capacity(SCENARIO_OFFSETS.len());
    for offset in SCENARIO_OFFSETS {
        let score = (i32::from(center) + offset).clamp(0, max) as u16;
        if !scores.contains(&score) {
            scores.push(score);
        }
    }

    scores
        .into_iter()
        .map(|net_score| {
            let aggregate = aggregate_from_net(f64::from(net_score), curriculum);
            let difference = aggregate - closing_aggregate;
            let chance_category = category_for_difference(difference);
            NetScoreScenario {
                net_score,
                aggregate: round2(aggregate),
                difference: round2(difference),
                chance_category,
                chance_label: chance_category.label().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverts_the_reference_breakdown_exactly() {
        let recommendation = recommend_net_score(78.0, &Curriculum::local(85.0, 90.0));

        assert_eq!(recommendation.required_net_score, 150);
        assert_eq!(recommendation.required_net_percentage, 75.0);
        assert!(recommendation.achievable);
    }

    #[test]
    fn rounds_required_score_up() {
        let curriculum = Curriculum::equivalence(80.0);
        let recommendation = recommend_net_score(70.1, &curriculum);

        assert_eq!(recommendation.required_net_score, 134);
        assert!(aggregate_from_net(134.0, &curriculum) >= 70.1 - 0.01);
        assert!(aggregate_from_net(133.0, &curriculum) < 70.1);
    }

    #[test]
    fn round_trip_never_undershoots() {
        let curricula = [
            Curriculum::local(72.5, 88.0),
            Curriculum::local(91.0, 64.0),
            Curriculum::equivalence(77.7),
        ];

        for curriculum in &curricula {
            for step in 0..200 {
                let target = 40.0 + step as f64 * 0.3;
                let recommendation = recommend_net_score(target, curriculum);
                if recommendation.achievable {
                    let reached =
                        aggregate_from_net(f64::from(recommendation.required_net_score), curriculum);
                    assert!(reached >= target - 0.01, "{reached} < {target}");
                }
            }
        }
    }

    #[test]
    fn unreachable_target_is_clamped_and_flagged() {
        let recommendation = recommend_net_score(95.0, &Curriculum::local(60.0, 60.0));

        assert_eq!(recommendation.required_net_score, 200);
        assert!(!recommendation.achievable);
        assert!(recommendation.required_net_percentage > 100.0);
    }

    #[test]
    fn already_exceeded_target_is_flagged() {
        let recommendation = recommend_net_score(10.0, &Curriculum::local(90.0, 90.0));

        assert_eq!(recommendation.required_net_score, 0);
        assert!(!recommendation.achievable);
    }

    #[test]
    fn plan_builds_three_tiers_and_scenarios() {
        let plan = plan_net_score(75.0, &Curriculum::local(85.0, 90.0));

        assert!(plan.minimum.required_net_score < plan.recommended.required_net_score);
        assert!(plan.recommended.required_net_score < plan.high_confidence.required_net_score);
        assert_eq!(plan.recommended.target_aggregate, 76.0);
        assert_eq!(plan.recommended.required_net_score, 145);
        assert_eq!(plan.achievability, Achievability::Moderate);
        assert_eq!(plan.achievability_label, "Moderate");

        let scores: Vec<u16> = plan.scenarios.iter().map(|row| row.net_score).collect();
        assert_eq!(scores, vec![125, 135, 145, 155, 165]);
        assert!(plan
            .scenarios
            .windows(2)
            .all(|pair| pair[0].aggregate < pair[1].aggregate));
        assert_eq!(plan.scenarios[4].chance_category, ChanceCategory::High);
    }

    #[test]
    fn scenarios_are_clamped_and_deduplicated() {
        let plan = plan_net_score(92.0, &Curriculum::local(60.0, 60.0));

        assert_eq!(plan.achievability, Achievability::NotAchievable);
        let scores: Vec<u16> = plan.scenarios.iter().map(|row| row.net_score).collect();
        assert_eq!(scores, vec![180, 190, 200]);
    }
}
