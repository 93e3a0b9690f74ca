//! End-to-end scenarios through the public scoring API: raw marks to a ranked
//! preference list.

use admission_ai::catalog::ProgramCatalog;
use admission_ai::scoring::{
    calculate_aggregate, plan_net_score, predict_chance, predict_merit_list, validate_input,
    Achievability, ChanceCategory, ClosingThreshold, Curriculum, CurriculumContribution,
    MeritConfidence, PreferenceListGenerator, PreferenceProfile, RiskTolerance, ScoreInput,
};

fn student_input() -> ScoreInput {
    ScoreInput {
        net_score: 150.0,
        curriculum: Curriculum::local(85.0, 90.0),
    }
}

#[test]
fn reference_student_scores_seventy_eight() {
    let input = student_input();
    let report = validate_input(&input);
    assert!(report.is_valid, "unexpected errors: {:?}", report.errors);

    let breakdown = calculate_aggregate(&input);
    assert_eq!(breakdown.net_contribution, 56.25);
    assert_eq!(
        breakdown.curriculum,
        CurriculumContribution::Local {
            hssc_percentage: 85.0,
            hssc_contribution: 12.75,
            ssc_percentage: 90.0,
            ssc_contribution: 9.0,
        }
    );
    assert_eq!(breakdown.total_aggregate, 78.0);
}

#[test]
fn reference_student_has_high_chance_against_seventy_five() {
    let prediction = predict_chance(78.0, Some(75.0));

    assert_eq!(prediction.chance_percentage, 83);
    assert_eq!(prediction.category, ChanceCategory::High);
    assert_eq!(prediction.category_label, "High Chance");
}

#[test]
fn reference_student_lands_in_round_three() {
    let thresholds = vec![
        ClosingThreshold::new(1, 80.0),
        ClosingThreshold::new(2, 77.0),
        ClosingThreshold::new(3, 74.0),
    ];

    let prediction = predict_merit_list(76.0, &thresholds);

    assert_eq!(prediction.predicted_round, Some(3));
    assert_eq!(prediction.confidence, MeritConfidence::High);
    assert!(!prediction.is_estimate);
}

#[test]
fn empty_selection_yields_placeholder_list() {
    let list = PreferenceListGenerator::new().generate(78.0, &[], &PreferenceProfile::default());

    assert!(list.ranked.is_empty());
    assert_eq!(list.summary.total_programs, 0);
    assert_eq!(
        list.recommendations,
        vec!["Please select some programs to generate a preference list.".to_string()]
    );
}

#[test]
fn sample_catalog_ranks_every_program() {
    let catalog = ProgramCatalog::sample();
    let ids: Vec<&str> = catalog
        .programs()
        .iter()
        .map(|program| program.id.as_str())
        .collect();
    let candidates = catalog.candidates(ids).expect("sample programs resolve");

    let profile = PreferenceProfile {
        interests: [("Computing".to_string(), 5), ("Electrical".to_string(), 4)]
            .into_iter()
            .collect(),
        preferred_campuses: vec!["Main Campus".to_string()],
        risk_tolerance: RiskTolerance::Conservative,
    };
    let aggregate = calculate_aggregate(&student_input()).total_aggregate;
    let list = PreferenceListGenerator::new().generate(aggregate, &candidates, &profile);

    assert_eq!(list.ranked.len(), catalog.programs().len());
    assert!(list
        .ranked
        .windows(2)
        .all(|pair| pair[0].combined_score >= pair[1].combined_score));
    assert_eq!(
        list.groups.safe.len() + list.groups.moderate.len() + list.groups.ambitious.len(),
        list.summary.total_programs
    );
    assert!(!list.recommendations.is_empty());
    assert!(list.summary.data_available);
}

#[test]
fn net_plan_for_sample_program_is_consistent() {
    let catalog = ProgramCatalog::sample();
    let candidate = catalog.candidate("ee-main").expect("program exists");
    let closing = candidate.reference_closing().expect("closing available");

    let curriculum = Curriculum::equivalence(82.0);
    let plan = plan_net_score(closing, &curriculum);

    assert!(plan.recommended.achievable);
    assert_ne!(plan.achievability, Achievability::NotAchievable);
    assert!((3..=5).contains(&plan.scenarios.len()));

    let reached = calculate_aggregate(&ScoreInput {
        net_score: f64::from(plan.recommended.required_net_score),
        curriculum,
    });
    assert!(reached.total_aggregate >= closing + 1.0 - 0.01);
}
