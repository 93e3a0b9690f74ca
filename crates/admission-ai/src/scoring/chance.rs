use serde::{Deserialize, Serialize};

/// Qualitative admission likelihood reported alongside the numeric chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanceCategory {
    VeryLow,
    Low,
    Medium,
    High,
}

impl ChanceCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Chance",
            Self::Medium => "Medium Chance",
            Self::Low => "Low Chance",
            Self::VeryLow => "Very Low Chance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChancePrediction {
    pub chance_percentage: u8,
    pub category: ChanceCategory,
    pub category_label: String,
    /// Signed `user - reference` gap; absent when no reference was available.
    pub difference: Option<f64>,
    pub data_available: bool,
    pub explanation: String,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
enum BandShape {
    /// Linear interpolation across `[lower, upper)` onto `[min_chance, max_chance]`.
    Interpolate,
    /// Grows from `min_chance` at `lower`, capped at `max_chance`.
    ExtrapolateUp { slope: f64 },
    /// Falls from `max_chance` at `upper`, floored at `min_chance`.
    ExtrapolateDown { slope: f64 },
}

#[derive(Debug, Clone, Copy)]
struct ChanceBand {
    lower: f64,
    upper: f64,
    min_chance: f64,
    max_chance: f64,
    category: ChanceCategory,
    shape: BandShape,
}

impl ChanceBand {
    fn contains(&self, difference: f64) -> bool {
        difference >= self.lower && difference < self.upper
    }

    fn chance(&self, difference: f64) -> f64 {
        match self.shape {
            BandShape::Interpolate => {
                let position = (difference - self.lower) / (self.upper - self.lower);
                self.min_chance + position * (self.max_chance - self.min_chance)
            }
            BandShape::ExtrapolateUp { slope } => {
                (self.min_chance + (difference - self.lower) * slope).min(self.max_chance)
            }
            BandShape::ExtrapolateDown { slope } => {
                (self.max_chance + (difference - self.upper) * slope).max(self.min_chance)
            }
        }
    }
}

/// Contiguous bands over `user - reference`, highest first.
const CHANCE_BANDS: [ChanceBand; 5] = [
    ChanceBand {
        lower: 2.0,
        upper: f64::INFINITY,
        min_chance: 80.0,
        max_chance: 95.0,
        category: ChanceCategory::High,
        shape: BandShape::ExtrapolateUp { slope: 3.0 },
    },
    ChanceBand {
        lower: 0.0,
        upper: 2.0,
        min_chance: 60.0,
        max_chance: 79.0,
        category: ChanceCategory::Medium,
        shape: BandShape::Interpolate,
    },
    ChanceBand {
        lower: -1.0,
        upper: 0.0,
        min_chance: 40.0,
        max_chance: 59.0,
        category: ChanceCategory::Medium,
        shape: BandShape::Interpolate,
    },
    ChanceBand {
        lower: -3.0,
        upper: -1.0,
        min_chance: 15.0,
        max_chance: 39.0,
        category: ChanceCategory::Low,
        shape: BandShape::Interpolate,
    },
    ChanceBand {
        lower: f64::NEG_INFINITY,
        upper: -3.0,
        min_chance: 5.0,
        max_chance: 14.0,
        category: ChanceCategory::VeryLow,
        shape: BandShape::ExtrapolateDown { slope: 2.0 },
    },
];

const NEUTRAL_CHANCE: u8 = 50;
const LOW_AGGREGATE_TIP_THRESHOLD: f64 = 60.0;

fn band_for(difference: f64) -> &'static ChanceBand {
    CHANCE_BANDS
        .iter()
        .find(|band| band.contains(difference))
        .unwrap_or(&CHANCE_BANDS[CHANCE_BANDS.len() - 1])
}

/// Category of the band `difference` falls into.
pub fn category_for_difference(difference: f64) -> ChanceCategory {
    band_for(difference).category
}

/// Numeric chance for a signed difference, before rounding.
pub(crate) fn chance_for_difference(difference: f64) -> f64 {
    band_for(difference).chance(difference)
}

/// Maps the gap between the user's aggregate and a reference closing aggregate to a
/// 0-100 chance. Without a reference a neutral estimate is returned.
pub fn predict_chance(user_aggregate: f64, reference_closing: Option<f64>) -> ChancePrediction {
    let Some(reference) = reference_closing else {
        return ChancePrediction {
            chance_percentage: NEUTRAL_CHANCE,
            category: ChanceCategory::Medium,
            category_label: ChanceCategory::Medium.label().to_string(),
            difference: None,
            data_available: false,
            explanation: format!(
                "No historical closing aggregate is available for this program, so your \
                 aggregate of {user_aggregate:.2}% could not be compared. The estimate shown is \
                 a neutral placeholder."
            ),
            tips: vec![
                "Check the latest merit lists published by the admissions office".to_string(),
                "Compare against closely related programs that do have closing data".to_string(),
                "Keep a mix of safe and ambitious choices in your preference list".to_string(),
            ],
        };
    };

    let difference = user_aggregate - reference;
    let band = band_for(difference);
    let chance_percentage = band.chance(difference).round().clamp(0.0, 100.0) as u8;
    let category = band.category;

    let mut tips = category_tips(category);
    if user_aggregate < LOW_AGGREGATE_TIP_THRESHOLD {
        tips.push(
            "Your aggregate is below 60%; a higher NET score is the most direct way to improve it"
                .to_string(),
        );
    }

    ChancePrediction {
        chance_percentage,
        category,
        category_label: category.label().to_string(),
        difference: Some(difference),
        data_available: true,
        explanation: format!(
            "Your aggregate of {user_aggregate:.2}% compared with last year's closing aggregate \
             of {reference:.2}% gives a difference of {difference:+.2} points. {}",
            category_narrative(category, difference)
        ),
        tips,
    }
}

fn category_narrative(category: ChanceCategory, difference: f64) -> &'static str {
    match category {
        ChanceCategory::High => {
            "You are comfortably above the previous cutoff and are very likely to be selected."
        }
        ChanceCategory::Medium if difference >= 0.0 => {
            "You are just above the previous cutoff; small shifts in competition could still matter."
        }
        ChanceCategory::Medium => {
            "You are marginally below the previous cutoff; later merit lists may still reach you."
        }
        ChanceCategory::Low => {
            "You are below the previous cutoff and would need the closing aggregate to drop."
        }
        ChanceCategory::VeryLow => {
            "You are well below the previous cutoff; admission to this program is unlikely."
        }
    }
}

fn category_tips(category: ChanceCategory) -> Vec<String> {
    let tips: &[&str] = match category {
        ChanceCategory::High => &[
            "Place this program near the top of your preference list",
            "Keep your documents ready for the first merit list",
        ],
        ChanceCategory::Medium => &[
            "Keep this program in your list but add safer alternatives",
            "Track each merit list closely as cutoffs move between rounds",
        ],
        ChanceCategory::Low => &[
            "Treat this program as an ambitious choice",
            "Add several programs where your aggregate clears the cutoff",
            "Consider retaking the NET to raise your aggregate",
        ],
        ChanceCategory::VeryLow => &[
            "Prioritise programs with lower closing aggregates",
            "Consider retaking the NET to raise your aggregate",
            "Explore other campuses offering the same discipline",
        ],
    };
    tips.iter().map(|tip| tip.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comfortable_margin_extrapolates_from_high_anchor() {
        let prediction = predict_chance(78.0, Some(75.0));

        assert_eq!(prediction.chance_percentage, 83);
        assert_eq!(prediction.category, ChanceCategory::High);
        assert_eq!(prediction.category_label, "High Chance");
        assert!(prediction.data_available);
        assert!(prediction.explanation.contains("78.00%"));
        assert!(prediction.explanation.contains("75.00%"));
        assert!(prediction.explanation.contains("+3.00"));
    }

    #[test]
    fn high_band_is_capped() {
        assert_eq!(predict_chance(99.0, Some(60.0)).chance_percentage, 95);
    }

    #[test]
    fn very_low_band_is_floored() {
        let prediction = predict_chance(50.0, Some(80.0));
        assert_eq!(prediction.chance_percentage, 5);
        assert_eq!(prediction.category, ChanceCategory::VeryLow);
    }

    #[test]
    fn band_edges_map_to_anchors() {
        assert_eq!(chance_for_difference(2.0), 80.0);
        assert_eq!(chance_for_difference(0.0), 60.0);
        assert_eq!(chance_for_difference(-1.0), 40.0);
        assert_eq!(chance_for_difference(-3.0), 15.0);
        assert_eq!(chance_for_difference(-3.5), 13.0);
        assert_eq!(chance_for_difference(1.0), 69.5);
    }

    #[test]
    fn both_middle_bands_report_medium() {
        assert_eq!(category_for_difference(1.5), ChanceCategory::Medium);
        assert_eq!(category_for_difference(-0.5), ChanceCategory::Medium);
        assert_eq!(category_for_difference(-2.0), ChanceCategory::Low);
    }

    #[test]
    fn chance_never_decreases_as_aggregate_rises() {
        let reference = 75.0;
        let mut previous = 0;
        for step in 0..=400 {
            let aggregate = 65.0 + step as f64 * 0.05;
            let chance = predict_chance(aggregate, Some(reference)).chance_percentage;
            assert!(
                chance >= previous,
                "chance dropped from {previous} to {chance} at {aggregate}"
            );
            previous = chance;
        }
    }

    #[test]
    fn missing_reference_returns_neutral_estimate() {
        let prediction = predict_chance(72.0, None);

        assert_eq!(prediction.chance_percentage, 50);
        assert_eq!(prediction.category, ChanceCategory::Medium);
        assert!(!prediction.data_available);
        assert!(prediction.difference.is_none());
        assert!(prediction.explanation.contains("No historical closing aggregate"));
        assert!(!prediction.tips.is_empty());
    }

    #[test]
    fn low_aggregate_appends_extra_tip() {
        let low = predict_chance(55.0, Some(56.0));
        let high = predict_chance(75.0, Some(76.0));

        assert_eq!(low.tips.len(), high.tips.len() + 1);
        assert!(low.tips.last().is_some_and(|tip| tip.contains("below 60%")));
    }
}
