//! Pure scoring functions: aggregate calculation, admission chance, merit-list
//! timing, NET-score recommendations, and preference-list ranking.
//!
//! Every function here is synchronous and side-effect free; results are created
//! fresh per call and never cached.

pub mod aggregate;
pub mod chance;
pub mod domain;
pub mod merit;
pub mod preference;
pub mod recommend;
pub mod validation;

#[cfg(test)]
mod tests;

pub use aggregate::{
    aggregate_from_net, calculate_aggregate, AggregateBreakdown, AggregateWeights,
    CurriculumContribution,
};
pub use chance::{category_for_difference, predict_chance, ChanceCategory, ChancePrediction};
pub use domain::{
    CandidateProgram, ClosingThreshold, Curriculum, Program, SchoolResult, ScoreInput,
};
pub use merit::{predict_merit_list, MeritConfidence, MeritListPrediction, MAX_ROUNDS};
pub use preference::{
    LinearDecayLadder, PreferenceItem, PreferenceList, PreferenceListGenerator,
    PreferenceProfile, PreferenceSummary, RiskCategory, RiskTolerance, ThresholdLadder,
};
pub use recommend::{
    plan_net_score, recommend_net_score, Achievability, NetScorePlan, NetScoreRecommendation,
    NetScoreScenario,
};
pub use validation::{validate_curriculum, validate_input, ValidationReport};
