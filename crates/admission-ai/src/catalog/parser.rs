use super::normalizer::{normalize_key, normalize_text};
use crate::scoring::Program;
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One historical closing row: a program's result for a given year and round.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ClosingRecord {
    pub(crate) program_id: String,
    pub(crate) year: u16,
    pub(crate) round: u8,
    pub(crate) closing_aggregate: Option<f64>,
    pub(crate) closing_position: Option<u32>,
}

pub(crate) fn parse_programs<R: Read>(reader: R) -> Result<Vec<Program>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut programs = Vec::new();

    for record in csv_reader.deserialize::<ProgramRow>() {
        let row = record?;
        programs.push(Program {
            id: normalize_key(&row.id),
            name: normalize_text(&row.name),
            campus: normalize_text(&row.campus),
            school: normalize_text(&row.school),
            discipline: normalize_text(&row.discipline),
            seats: row.seats,
        });
    }

    Ok(programs)
}

pub(crate) fn parse_closings<R: Read>(reader: R) -> Result<Vec<ClosingRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut closings = Vec::new();

    for record in csv_reader.deserialize::<ClosingRow>() {
        let row = record?;
        closings.push(ClosingRecord {
            program_id: normalize_key(&row.program_id),
            year: row.year,
            round: row.round,
            closing_aggregate: row.closing_aggregate,
            closing_position: row.closing_position,
        });
    }

    Ok(closings)
}

#[derive(Debug, Deserialize)]
struct ProgramRow {
    id: String,
    name: String,
    campus: String,
    school: String,
    discipline: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    seats: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ClosingRow {
    program_id: String,
    year: u16,
    round: u8,
    #[serde(default, deserialize_with = "empty_as_none")]
    closing_aggregate: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    closing_position: Option<u32>,
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn programs_accept_blank_seats() {
        let csv = "id,name,campus,school,discipline,seats\n\
CS-Main, BS  Computer Science ,Main Campus,School of Computing,Computing,\n\
EE-North,BS Electrical Engineering,North Campus,School of Engineering,Electrical,120\n";

        let programs = parse_programs(csv.as_bytes()).expect("programs parse");

        assert_eq!(programs.len(), 2);
        assert_eq!(programs[0].id, "cs-main");
        assert_eq!(programs[0].name, "BS Computer Science");
        assert_eq!(programs[0].seats, None);
        assert_eq!(programs[1].seats, Some(120));
    }

    #[test]
    fn closings_accept_blank_values() {
        let csv = "program_id,year,round,closing_aggregate,closing_position\n\
cs-main,2024,1,81.25,310\n\
cs-main,2024,2,,\n";

        let closings = parse_closings(csv.as_bytes()).expect("closings parse");

        assert_eq!(closings[0].closing_aggregate, Some(81.25));
        assert_eq!(closings[0].closing_position, Some(310));
        assert_eq!(closings[1].closing_aggregate, None);
        assert_eq!(closings[1].closing_position, None);
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let csv = "program_id,year,round,closing_aggregate,closing_position\n\
cs-main,2024,1,eighty,\n";

        assert!(parse_closings(csv.as_bytes()).is_err());
    }
}
