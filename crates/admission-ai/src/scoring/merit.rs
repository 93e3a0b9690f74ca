use super::domain::ClosingThreshold;
use serde::{Deserialize, Serialize};

pub const MAX_ROUNDS: u8 = 8;
const MAX_ALTERNATIVES: usize = 2;
const NEAR_MISS_WINDOW: f64 = 3.0;
const HIGH_CONFIDENCE_MARGIN: f64 = 2.0;

/// Aggregate-only buckets used when no closing thresholds are known.
const MERIT_FALLBACK_BUCKETS: [(f64, u8, MeritConfidence); 4] = [
    (80.0, 1, MeritConfidence::Medium),
    (75.0, 2, MeritConfidence::Medium),
    (70.0, 4, MeritConfidence::Low),
    (65.0, 6, MeritConfidence::Low),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeritConfidence {
    High,
    Medium,
    Low,
}

impl MeritConfidence {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    fn from_margin(margin: f64) -> Self {
        if margin >= HIGH_CONFIDENCE_MARGIN {
            Self::High
        } else if margin >= 0.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeritListPrediction {
    pub predicted_round: Option<u8>,
    pub confidence: MeritConfidence,
    pub alternative_rounds: Vec<u8>,
    pub is_estimate: bool,
    /// Clearing margin of the predicted round; absent for estimates.
    pub margin: Option<f64>,
    pub explanation: String,
}

/// Finds the merit-list round the user is most likely to be selected in.
pub fn predict_merit_list(
    user_aggregate: f64,
    thresholds: &[ClosingThreshold],
) -> MeritListPrediction {
    let mut rounds: Vec<(u8, f64)> = thresholds
        .iter()
        .filter_map(|threshold| {
            threshold
                .closing_aggregate
                .map(|closing| (threshold.round, closing))
        })
        .collect();

    if rounds.is_empty() {
        return estimate_from_aggregate(user_aggregate);
    }

    rounds.sort_by_key(|(round, _)| *round);

    let mut best: Option<(u8, f64)> = None;
    let mut alternatives: Vec<u8> = Vec::new();

    for (round, closing) in rounds {
        let margin = user_aggregate - closing;

        if margin >= 0.0 {
            match best {
                Some((_, best_margin)) if margin >= best_margin => {
                    push_alternative(&mut alternatives, round);
                }
                Some((previous, _)) => {
                    push_alternative(&mut alternatives, previous);
                    best = Some((round, margin));
                }
                None => best = Some((round, margin)),
            }
        } else if margin >= -NEAR_MISS_WINDOW {
            push_alternative(&mut alternatives, round);
        }
    }

    let predicted_round = best.map(|(round, _)| round);
    alternatives.retain(|round| Some(*round) != predicted_round);
    alternatives.truncate(MAX_ALTERNATIVES);

    match best {
        Some((round, margin)) => MeritListPrediction {
            predicted_round: Some(round),
            confidence: MeritConfidence::from_margin(margin),
            alternative_rounds: alternatives,
            is_estimate: false,
            margin: Some(margin),
            explanation: format!(
                "Your aggregate of {user_aggregate:.2}% clears the round {round} closing aggregate \
                 by {margin:.2} points, making round {round} your most likely merit list."
            ),
        },
        None => MeritListPrediction {
            predicted_round: None,
            confidence: MeritConfidence::Low,
            alternative_rounds: alternatives,
            is_estimate: false,
            margin: None,
            explanation: format!(
                "Your aggregate of {user_aggregate:.2}% is below the closing aggregate of every \
                 recorded round; admission is unlikely this cycle."
            ),
        },
    }
}

fn push_alternative(alternatives: &mut Vec<u8>, round: u8) {
    if !alternatives.contains(&round) {
        alternatives.push(round);
    }
}

fn estimate_from_aggregate(user_aggregate: f64) -> MeritListPrediction {
    let bucket = MERIT_FALLBACK_BUCKETS
        .iter()
        .find(|(minimum, _, _)| user_aggregate >= *minimum);

    match bucket {
        Some(&(_, round, confidence)) => MeritListPrediction {
            predicted_round: Some(round),
            confidence,
            alternative_rounds: (1..=2)
                .map(|offset| round + offset)
                .filter(|candidate| *candidate <= MAX_ROUNDS)
                .collect(),
            is_estimate: true,
            margin: None,
            explanation: format!(
                "No closing data is available; based on your aggregate of {user_aggregate:.2}% \
                 alone you might expect an offer around merit list {round}."
            ),
        },
        None => MeritListPrediction {
            predicted_round: None,
            confidence: MeritConfidence::Low,
            alternative_rounds: Vec::new(),
            is_estimate: true,
            margin: None,
            explanation: format!(
                "No closing data is available and an aggregate of {user_aggregate:.2}% is \
                 unlikely to reach a merit list."
            ),
        },
    }
}
