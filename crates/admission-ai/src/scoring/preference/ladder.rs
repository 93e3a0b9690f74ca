use crate::scoring::domain::{round2, ClosingThreshold};
use crate::scoring::merit::MAX_ROUNDS;

/// Derives per-round thresholds when only a single closing aggregate is known.
pub trait ThresholdLadder {
    fn thresholds(&self, closing_aggregate: f64) -> Vec<ClosingThreshold>;
}

/// Starts at the known closing aggregate and steps down by a fixed amount per round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearDecayLadder {
    pub rounds: u8,
    pub step: f64,
    pub floor: f64,
}

impl Default for LinearDecayLadder {
    fn default() -> Self {
        Self {
            rounds: MAX_ROUNDS,
            step: 1.5,
            floor: 50.0,
        }
    }
}

impl ThresholdLadder for LinearDecayLadder {
    fn thresholds(&self, closing_aggregate: f64) -> Vec<ClosingThreshold> {
        (0..self.rounds)
            .map(|index| {
                let closing = (closing_aggregate - f64::from(index) * self.step).max(self.floor);
                ClosingThreshold::new(index + 1, round2(closing))
            })
            .collect()
    }
}
