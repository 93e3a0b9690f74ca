use super::aggregate::AggregateWeights;
use super::domain::{Curriculum, ScoreInput, SchoolResult};
use serde::{Deserialize, Serialize};

/// Outcome of the input pre-check; callers decide whether to proceed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Collects every range violation in `input` instead of stopping at the first.
pub fn validate_input(input: &ScoreInput) -> ValidationReport {
    let mut errors = Vec::new();

    if !in_range(input.net_score, AggregateWeights::NET_MAX) {
        errors.push(format!(
            "NET score must be between 0 and {}",
            AggregateWeights::NET_MAX
        ));
    }

    check_curriculum(&input.curriculum, &mut errors);
    ValidationReport::from_errors(errors)
}

/// Checks only the school results; used where the NET score is solved for rather
/// than supplied.
pub fn validate_curriculum(curriculum: &Curriculum) -> ValidationReport {
    let mut errors = Vec::new();
    check_curriculum(curriculum, &mut errors);
    ValidationReport::from_errors(errors)
}

fn check_curriculum(curriculum: &Curriculum, errors: &mut Vec<String>) {
    match curriculum {
        Curriculum::Local { hssc, ssc } => {
            check_school_result("HSSC", hssc, errors);
            check_school_result("SSC", ssc, errors);
        }
        Curriculum::Equivalence { percentage } => match percentage {
            Some(value) if in_range(*value, 100.0) => {}
            Some(_) => errors.push("Equivalence percentage must be between 0 and 100".to_string()),
            None => errors.push("Equivalence percentage is required".to_string()),
        },
    }
}

fn check_school_result(label: &str, result: &SchoolResult, errors: &mut Vec<String>) {
    match *result {
        SchoolResult::Percentage(value) => {
            if !in_range(value, 100.0) {
                errors.push(format!("{label} percentage must be between 0 and 100"));
            }
        }
        SchoolResult::Marks { obtained, total } => {
            if !(total.is_finite() && total > 0.0) {
                errors.push(format!("{label} total marks must be greater than 0"));
            } else if !in_range(obtained, total) {
                errors.push(format!(
                    "{label} obtained marks must be between 0 and {total}"
                ));
            }
        }
    }
}

fn in_range(value: f64, max: f64) -> bool {
    value.is_finite() && (0.0..=max).contains(&value)
}
