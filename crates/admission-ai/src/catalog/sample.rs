use super::parser::ClosingRecord;
use crate::scoring::Program;

/// (id, name, campus, school, discipline, seats)
const SAMPLE_PROGRAMS: [(&str, &str, &str, &str, &str, Option<u32>); 10] = [
    ("se-main", "BS Software Engineering", "Main Campus", "School of Computing", "Software", Some(60)),
    ("cs-main", "BS Computer Science", "Main Campus", "School of Computing", "Computing", Some(120)),
    ("ee-main", "BS Electrical Engineering", "Main Campus", "School of Electrical Engineering", "Electrical", Some(180)),
    ("me-main", "BS Mechanical Engineering", "Main Campus", "School of Mechanical Engineering", "Mechanical", Some(120)),
    ("ce-main", "BS Civil Engineering", "Main Campus", "School of Civil Engineering", "Civil", Some(90)),
    ("ee-north", "BS Electrical Engineering", "North Campus", "College of Engineering", "Electrical", Some(120)),
    ("me-north", "BS Mechanical Engineering", "North Campus", "College of Engineering", "Mechanical", Some(60)),
    ("cs-north", "BS Computer Science", "North Campus", "College of Engineering", "Computing", Some(60)),
    ("arch-main", "Bachelor of Architecture", "Main Campus", "School of Art and Design", "Architecture", Some(40)),
    ("chem-river", "BS Chemical Engineering", "Riverside Campus", "School of Chemical Engineering", "Chemical", None),
];

/// (program id, year, closing aggregate per round starting at round 1)
const SAMPLE_CLOSINGS: [(&str, u16, &[f64]); 17] = [
    ("se-main", 2023, &[80.92, 79.85, 79.12, 78.60, 78.21]),
    ("se-main", 2024, &[81.40, 80.36, 79.71, 79.05, 78.66, 78.30]),
    ("cs-main", 2023, &[79.80, 78.74, 78.02, 77.51]),
    ("cs-main", 2024, &[80.35, 79.30, 78.62, 78.05, 77.70]),
    ("ee-main", 2023, &[77.15, 75.92, 75.04, 74.41, 73.86, 73.40]),
    ("ee-main", 2024, &[77.60, 76.38, 75.55, 74.90, 74.32, 73.95, 73.60]),
    ("me-main", 2023, &[75.90, 74.71, 73.86, 73.20]),
    ("me-main", 2024, &[76.24, 75.05, 74.22, 73.61, 73.10]),
    ("ce-main", 2023, &[73.10, 71.88, 71.02, 70.35]),
    ("ce-main", 2024, &[73.55, 72.34, 71.50, 70.86, 70.31]),
    ("ee-north", 2024, &[74.20, 72.95, 72.10, 71.42, 70.90]),
    ("me-north", 2024, &[72.05, 70.80, 69.96, 69.31]),
    ("cs-north", 2023, &[75.60, 74.35, 73.52]),
    ("cs-north", 2024, &[76.10, 74.88, 74.02, 73.40]),
    ("arch-main", 2023, &[71.30, 70.12]),
    ("arch-main", 2024, &[71.85, 70.64, 69.90]),
    ("chem-river", 2022, &[70.40, 69.15, 68.32]),
];

pub(crate) fn programs() -> Vec<Program> {
    SAMPLE_PROGRAMS
        .iter()
        .map(|(id, name, campus, school, discipline, seats)| Program {
            id: id.to_string(),
            name: name.to_string(),
            campus: campus.to_string(),
            school: school.to_string(),
            discipline: discipline.to_string(),
            seats: *seats,
        })
        .collect()
}

pub(crate) fn closings() -> Vec<ClosingRecord> {
    SAMPLE_CLOSINGS
        .iter()
        .flat_map(|(program_id, year, rounds)| {
            rounds
                .iter()
                .enumerate()
                .map(move |(index, closing)| ClosingRecord {
                    program_id: program_id.to_string(),
                    year: *year,
                    round: index as u8 + 1,
                    closing_aggregate: Some(*closing),
                    closing_position: None,
                })
        })
        .collect()
}
