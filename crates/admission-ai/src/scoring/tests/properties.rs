use super::common::*;
use crate::scoring::aggregate::{weighted_terms, SchoolTerms};
use crate::scoring::{
    calculate_aggregate, predict_merit_list, CandidateProgram, Curriculum,
    PreferenceListGenerator, PreferenceProfile, ScoreInput,
};

fn sample_inputs() -> Vec<ScoreInput> {
    let mut inputs = Vec::new();
    for net in [0.0, 37.0, 99.5, 150.0, 173.0, 200.0] {
        for (hssc, ssc) in [(0.0, 0.0), (61.4, 72.9), (85.0, 90.0), (100.0, 100.0)] {
            inputs.push(ScoreInput {
                net_score: net,
                curriculum: Curriculum::local(hssc, ssc),
            });
        }
        for equivalence in [0.0, 58.3, 100.0] {
            inputs.push(ScoreInput {
                net_score: net,
                curriculum: Curriculum::equivalence(equivalence),
            });
        }
    }
    inputs
}

#[test]
fn weighted_terms_sum_to_total() {
    for input in sample_inputs() {
        let terms = weighted_terms(input.net_score, &input.curriculum);
        let sum = match terms.school {
            SchoolTerms::Local { hssc, ssc, .. } => terms.net + hssc + ssc,
            SchoolTerms::Equivalence { equivalence, .. } => terms.net + equivalence,
        };
        assert!((sum - terms.total()).abs() < 1e-9);

        let breakdown = calculate_aggregate(&input);
        assert!((0.0..=100.0).contains(&breakdown.total_aggregate));
    }
}

#[test]
fn ranked_list_is_sorted_and_counts_balance() {
    let generator = PreferenceListGenerator::new();
    let mut candidates = candidates();
    candidates.extend((0..12).map(|index| {
        CandidateProgram::new(program(
            &format!("extra-{index}"),
            if index % 2 == 0 { "Main Campus" } else { "Hill Campus" },
            "Computing",
        ))
        .with_closing(60.0 + index as f64 * 2.1)
    }));

    for aggregate in [55.0, 66.6, 72.0, 78.0, 84.3, 93.0] {
        let list = generator.generate(aggregate, &candidates, &PreferenceProfile::default());

        assert!(list
            .ranked
            .windows(2)
            .all(|pair| pair[0].combined_score >= pair[1].combined_score));
        let summary = &list.summary;
        assert_eq!(
            summary.safe_count + summary.moderate_count + summary.ambitious_count,
            summary.total_programs
        );
        assert_eq!(summary.total_programs, candidates.len());
        assert!(list
            .recommendations
            .iter()
            .any(|message| message.contains("narrowing")));
    }
}

#[test]
fn merit_prediction_never_names_an_uncleared_round() {
    let ladders = [
        thresholds(&[82.0, 80.0, 78.0, 76.0]),
        thresholds(&[75.0, 77.0, 74.0, 79.0]),
        thresholds(&[90.0]),
    ];

    for ladder in &ladders {
        for step in 0..=100 {
            let aggregate = 70.0 + step as f64 * 0.2;
            let prediction = predict_merit_list(aggregate, ladder);
            if let Some(round) = prediction.predicted_round {
                let threshold = ladder
                    .iter()
                    .find(|threshold| threshold.round == round)
                    .expect("predicted round exists");
                assert!(threshold.closing_aggregate.unwrap_or(f64::MAX) <= aggregate);
            }
        }
    }
}
