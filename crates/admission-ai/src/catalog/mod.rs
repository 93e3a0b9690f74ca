//! Program catalog and historical closing data, loaded from CSV exports or the
//! bundled sample dataset.

mod normalizer;
mod parser;
mod sample;

use crate::config::CatalogConfig;
use crate::scoring::{CandidateProgram, ClosingThreshold, Program};
use normalizer::normalize_key;
use parser::ClosingRecord;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownProgram(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read catalog data: {}", err),
            CatalogError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
            CatalogError::UnknownProgram(id) => write!(f, "unknown program '{}'", id),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Csv(err) => Some(err),
            CatalogError::UnknownProgram(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Where the loaded catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    Sample,
    Imported,
}

/// Read-only program reference data plus per-year, per-round closing history.
#[derive(Debug, Clone)]
pub struct ProgramCatalog {
    source: CatalogSource,
    programs: Vec<Program>,
    closings: Vec<ClosingRecord>,
}

impl ProgramCatalog {
    /// The bundled static dataset.
    pub fn sample() -> Self {
        Self {
            source: CatalogSource::Sample,
            programs: sample::programs(),
            closings: sample::closings(),
        }
    }

    pub fn from_readers<P: Read, C: Read>(programs: P, closings: C) -> Result<Self, CatalogError> {
        let programs = parser::parse_programs(programs)?;
        let closings = parser::parse_closings(closings)?;

        Ok(Self {
            source: CatalogSource::Imported,
            programs,
            closings,
        })
    }

    pub fn from_paths<P: AsRef<Path>, C: AsRef<Path>>(
        programs: P,
        closings: C,
    ) -> Result<Self, CatalogError> {
        Self::from_readers(File::open(programs)?, File::open(closings)?)
    }

    /// Loads the configured CSV exports, falling back to the sample dataset when no
    /// exports are configured or the import contains no programs.
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let (Some(programs), Some(closings)) = (&config.programs_csv, &config.closings_csv) else {
            debug!("no catalog exports configured; using sample dataset");
            return Ok(Self::sample());
        };

        let catalog = Self::from_paths(programs, closings)?;
        if catalog.programs.is_empty() {
            warn!(
                path = %programs.display(),
                "catalog export contained no programs; using sample dataset"
            );
            return Ok(Self::sample());
        }

        debug!(
            programs = catalog.programs.len(),
            closings = catalog.closings.len(),
            "loaded catalog exports"
        );
        Ok(catalog)
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn program(&self, id: &str) -> Option<&Program> {
        let key = normalize_key(id);
        self.programs.iter().find(|program| program.id == key)
    }

    /// Most recent year with closing data for `program_id`.
    pub fn latest_year(&self, program_id: &str) -> Option<u16> {
        let key = normalize_key(program_id);
        self.closings
            .iter()
            .filter(|record| record.program_id == key)
            .map(|record| record.year)
            .max()
    }

    /// Per-round thresholds for `year`, or for the latest recorded year when `None`.
    pub fn thresholds_for(&self, program_id: &str, year: Option<u16>) -> Vec<ClosingThreshold> {
        let Some(year) = year.or_else(|| self.latest_year(program_id)) else {
            return Vec::new();
        };

        let key = normalize_key(program_id);
        let mut thresholds: Vec<ClosingThreshold> = self
            .closings
            .iter()
            .filter(|record| record.program_id == key && record.year == year)
            .map(|record| ClosingThreshold {
                round: record.round,
                closing_aggregate: record.closing_aggregate,
                closing_position: record.closing_position,
            })
            .collect();
        thresholds.sort_by_key(|threshold| threshold.round);
        thresholds
    }

    /// Builds a scoring candidate from the latest recorded year.
    pub fn candidate(&self, program_id: &str) -> Result<CandidateProgram, CatalogError> {
        let program = self
            .program(program_id)
            .ok_or_else(|| CatalogError::UnknownProgram(program_id.to_string()))?;

        Ok(CandidateProgram::new(program.clone())
            .with_thresholds(self.thresholds_for(&program.id, None)))
    }

    pub fn candidates<'a, I>(&self, program_ids: I) -> Result<Vec<CandidateProgram>, CatalogError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        program_ids
            .into_iter()
            .map(|id| self.candidate(id))
            .collect()
    }

    pub fn campuses(&self) -> BTreeSet<&str> {
        self.programs
            .iter()
            .map(|program| program.campus.as_str())
            .collect()
    }

    pub fn disciplines(&self) -> BTreeSet<&str> {
        self.programs
            .iter()
            .map(|program| program.discipline.as_str())
            .collect()
    }
}
