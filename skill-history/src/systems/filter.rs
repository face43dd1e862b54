use crate::data_processing::{NUM_SKILLSETS, ScoreRecord, year_2000};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Bounds that decide whether a score is usable at all.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    /// Scores dated before this day are discarded.
    pub lower_limit: NaiveDate,
    pub max_overall: f64,
    pub min_wifescore: f64,
    pub max_wifescore: f64,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            lower_limit: year_2000(),
            max_overall: 40.,
            min_wifescore: 0.,
            max_wifescore: 100.,
        }
    }
}

/// Why a score was kept out of the skillset matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// `overall` is the invalid sentinel 0, or otherwise not a positive number.
    InvalidOverall,
    DateOutOfRange,
    OverallTooHigh,
    WifescoreOutOfRange,
    NonFiniteValue,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionCounts {
    pub invalid_overall: usize,
    pub date_out_of_range: usize,
    pub overall_too_high: usize,
    pub wifescore_out_of_range: usize,
    pub non_finite_value: usize,
}

impl RejectionCounts {
    pub fn record(&mut self, rejection: Rejection) {
        let counter = match rejection {
            Rejection::InvalidOverall => &mut self.invalid_overall,
            Rejection::DateOutOfRange => &mut self.date_out_of_range,
            Rejection::OverallTooHigh => &mut self.overall_too_high,
            Rejection::WifescoreOutOfRange => &mut self.wifescore_out_of_range,
            Rejection::NonFiniteValue => &mut self.non_finite_value,
        };
        *counter += 1;
    }

    pub fn total(&self) -> usize {
        self.invalid_overall
            + self.date_out_of_range
            + self.overall_too_high
            + self.wifescore_out_of_range
            + self.non_finite_value
    }
}

impl AddAssign for RejectionCounts {
    fn add_assign(&mut self, other: Self) {
        self.invalid_overall += other.invalid_overall;
        self.date_out_of_range += other.date_out_of_range;
        self.overall_too_high += other.overall_too_high;
        self.wifescore_out_of_range += other.wifescore_out_of_range;
        self.non_finite_value += other.non_finite_value;
    }
}

/// Checks a score against `params` and, if it's usable, scales its skillset values by
/// `nerf / overall`. `today` is the upper bound on the score's date.
pub fn normalize_score(
    score: &ScoreRecord,
    date: NaiveDate,
    today: NaiveDate,
    params: &FilterParams,
) -> Result<[f64; NUM_SKILLSETS], Rejection> {
    // NaN fails the comparison, so it lands here too
    if !(score.overall > 0.) {
        return Err(Rejection::InvalidOverall);
    }
    if date < params.lower_limit || date > today {
        return Err(Rejection::DateOutOfRange);
    }
    if score.overall > params.max_overall {
        return Err(Rejection::OverallTooHigh);
    }
    if !(score.wifescore >= params.min_wifescore && score.wifescore <= params.max_wifescore) {
        return Err(Rejection::WifescoreOutOfRange);
    }

    let nerf_multiplier = score.nerf / score.overall;
    let values = score.skillsets.map(|value| value * nerf_multiplier);
    // Checked after scaling, since finite inputs can still overflow
    if values.iter().any(|v| !v.is_finite()) {
        return Err(Rejection::NonFiniteValue);
    }
    Ok(values)
}
