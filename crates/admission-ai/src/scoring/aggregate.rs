use super::domain::{round2, Curriculum, ScoreInput};
use serde::{Deserialize, Serialize};

/// Weights shared by the forward aggregate formula and its inverse.
pub struct AggregateWeights;

impl AggregateWeights {
    pub const NET_MAX: f64 = 200.0;
    pub const NET: f64 = 0.75;
    pub const HSSC: f64 = 0.15;
    pub const SSC: f64 = 0.10;
    pub const EQUIVALENCE: f64 = 0.25;
}

/// Weighted contribution of the school results, tagged by curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurriculumContribution {
    Local {
        hssc_percentage: f64,
        hssc_contribution: f64,
        ssc_percentage: f64,
        ssc_contribution: f64,
    },
    Equivalence {
        equivalence_percentage: f64,
        equivalence_contribution: f64,
    },
}

/// Result of one aggregate calculation, rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateBreakdown {
    pub net_score: f64,
    pub net_percentage: f64,
    pub net_contribution: f64,
    pub curriculum: CurriculumContribution,
    pub total_aggregate: f64,
}

impl AggregateBreakdown {
    pub const fn is_equivalence(&self) -> bool {
        matches!(
            self.curriculum,
            CurriculumContribution::Equivalence { .. }
        )
    }
}

/// Unrounded weighted terms; the single arithmetic source for every aggregate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WeightedTerms {
    pub net_percentage: f64,
    pub net: f64,
    pub school: SchoolTerms,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SchoolTerms {
    Local {
        hssc_percentage: f64,
        hssc: f64,
        ssc_percentage: f64,
        ssc: f64,
    },
    Equivalence {
        percentage: f64,
        equivalence: f64,
    },
}

impl SchoolTerms {
    pub(crate) fn total(&self) -> f64 {
        match *self {
            SchoolTerms::Local { hssc, ssc, .. } => hssc + ssc,
            SchoolTerms::Equivalence { equivalence, .. } => equivalence,
        }
    }
}

impl WeightedTerms {
    pub(crate) fn total(&self) -> f64 {
        self.net + self.school.total()
    }
}

pub(crate) fn school_terms(curriculum: &Curriculum) -> SchoolTerms {
    match curriculum {
        Curriculum::Local { hssc, ssc } => {
            let hssc_percentage = hssc.percentage();
            let ssc_percentage = ssc.percentage();
            SchoolTerms::Local {
                hssc_percentage,
                hssc: hssc_percentage * AggregateWeights::HSSC,
                ssc_percentage,
                ssc: ssc_percentage * AggregateWeights::SSC,
            }
        }
        Curriculum::Equivalence { percentage } => {
            let percentage = percentage.unwrap_or(0.0);
            SchoolTerms::Equivalence {
                percentage,
                equivalence: percentage * AggregateWeights::EQUIVALENCE,
            }
        }
    }
}

pub(crate) fn weighted_terms(net_score: f64, curriculum: &Curriculum) -> WeightedTerms {
    let net_percentage = net_score / AggregateWeights::NET_MAX * 100.0;
    WeightedTerms {
        net_percentage,
        net: net_percentage * AggregateWeights::NET,
        school: school_terms(curriculum),
    }
}

/// Converts raw exam results into the weighted aggregate percentage.
///
/// Inputs are assumed to have passed [`validate_input`](super::validate_input);
/// out-of-range values are still computed rather than rejected.
pub fn calculate_aggregate(input: &ScoreInput) -> AggregateBreakdown {
    let terms = weighted_terms(input.net_score, &input.curriculum);

    let curriculum = match terms.school {
        SchoolTerms::Local {
            hssc_percentage,
            hssc,
            ssc_percentage,
            ssc,
        } => CurriculumContribution::Local {
            hssc_percentage: round2(hssc_percentage),
            hssc_contribution: round2(hssc),
            ssc_percentage: round2(ssc_percentage),
            ssc_contribution: round2(ssc),
        },
        SchoolTerms::Equivalence {
            percentage,
            equivalence,
        } => CurriculumContribution::Equivalence {
            equivalence_percentage: round2(percentage),
            equivalence_contribution: round2(equivalence),
        },
    };

    AggregateBreakdown {
        net_score: input.net_score,
        net_percentage: round2(terms.net_percentage),
        net_contribution: round2(terms.net),
        curriculum,
        total_aggregate: round2(terms.total()),
    }
}

/// Forward formula for a hypothetical NET score, unrounded.
pub fn aggregate_from_net(net_score: f64, curriculum: &Curriculum) -> f64 {
    weighted_terms(net_score, curriculum).total()
}
