use serde::{Deserialize, Serialize};

/// Raw exam results submitted for an aggregate calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreInput {
    pub net_score: f64,
    pub curriculum: Curriculum,
}

/// Secondary-education scheme that supplies the non-entrance portion of the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Curriculum {
    /// Local board results: higher secondary (HSSC) and secondary (SSC).
    Local {
        hssc: SchoolResult,
        ssc: SchoolResult,
    },
    /// Equivalence certificate issued for foreign qualifications.
    Equivalence {
        #[serde(default)]
        percentage: Option<f64>,
    },
}

impl Curriculum {
    pub fn local(hssc_percentage: f64, ssc_percentage: f64) -> Self {
        Self::Local {
            hssc: SchoolResult::Percentage(hssc_percentage),
            ssc: SchoolResult::Percentage(ssc_percentage),
        }
    }

    pub fn equivalence(percentage: f64) -> Self {
        Self::Equivalence {
            percentage: Some(percentage),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Curriculum::Local { .. } => "HSSC/SSC",
            Curriculum::Equivalence { .. } => "Equivalence",
        }
    }
}

/// A board result expressed either as a percentage or as obtained/total marks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolResult {
    Percentage(f64),
    Marks { obtained: f64, total: f64 },
}

impl SchoolResult {
    pub fn percentage(&self) -> f64 {
        match *self {
            SchoolResult::Percentage(value) => value,
            SchoolResult::Marks { obtained, total } => {
                if total > 0.0 {
                    obtained / total * 100.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// Historical closing aggregate for one merit-list round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosingThreshold {
    pub round: u8,
    #[serde(default)]
    pub closing_aggregate: Option<f64>,
    #[serde(default)]
    pub closing_position: Option<u32>,
}

impl ClosingThreshold {
    pub fn new(round: u8, closing_aggregate: f64) -> Self {
        Self {
            round,
            closing_aggregate: Some(closing_aggregate),
            closing_position: None,
        }
    }
}

/// Reference data describing an offered program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub name: String,
    pub campus: String,
    pub school: String,
    pub discipline: String,
    #[serde(default)]
    pub seats: Option<u32>,
}

/// A program under consideration together with whatever closing history is known for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProgram {
    pub program: Program,
    #[serde(default)]
    pub closing_aggregate: Option<f64>,
    #[serde(default)]
    pub thresholds: Vec<ClosingThreshold>,
}

impl CandidateProgram {
    pub fn new(program: Program) -> Self {
        Self {
            program,
            closing_aggregate: None,
            thresholds: Vec::new(),
        }
    }

    pub fn with_closing(mut self, closing_aggregate: f64) -> Self {
        self.closing_aggregate = Some(closing_aggregate);
        self
    }

    pub fn with_thresholds(mut self, thresholds: Vec<ClosingThreshold>) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Closing aggregate used for chance prediction: the explicit value, else the
    /// earliest recorded round.
    pub fn reference_closing(&self) -> Option<f64> {
        self.closing_aggregate.or_else(|| {
            self.thresholds
                .iter()
                .filter(|threshold| threshold.closing_aggregate.is_some())
                .min_by_key(|threshold| threshold.round)
                .and_then(|threshold| threshold.closing_aggregate)
        })
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
