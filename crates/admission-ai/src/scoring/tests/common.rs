use crate::scoring::domain::{CandidateProgram, ClosingThreshold, Program};

pub(super) fn program(id: &str, campus: &str, discipline: &str) -> Program {
    Program {
        id: id.to_string(),
        name: format!("BS {discipline}"),
        campus: campus.to_string(),
        school: "School of Engineering".to_string(),
        discipline: discipline.to_string(),
        seats: Some(60),
    }
}

pub(super) fn thresholds(closings: &[f64]) -> Vec<ClosingThreshold> {
    closings
        .iter()
        .enumerate()
        .map(|(index, closing)| ClosingThreshold::new(index as u8 + 1, *closing))
        .collect()
}

/// A spread of candidates across campuses, disciplines, and difficulty.
pub(super) fn candidates() -> Vec<CandidateProgram> {
    vec![
        CandidateProgram::new(program("se-main", "Main Campus", "Software")).with_closing(79.5),
        CandidateProgram::new(program("cs-main", "Main Campus", "Computing"))
            .with_thresholds(thresholds(&[81.0, 79.8, 78.6, 77.9])),
        CandidateProgram::new(program("ee-north", "North Campus", "Electrical")).with_closing(74.0),
        CandidateProgram::new(program("me-north", "North Campus", "Mechanical")).with_closing(72.5),
        CandidateProgram::new(program("ce-river", "Riverside Campus", "Civil")).with_closing(70.0),
        CandidateProgram::new(program("arch-main", "Main Campus", "Architecture")),
    ]
}
