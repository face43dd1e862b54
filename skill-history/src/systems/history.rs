use super::{FilterParams, Rejection, RejectionCounts, SkillsetMatrix, find_ratings, normalize_score};
use crate::data_processing::{NUM_SKILLSETS, User, UserName, parse_date, year_2000};
use crate::error::PipelineError;
use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

const DAYS_PER_YEAR: f64 = 365.;

/// A snapshot of a player's overall rating, taken at the end of a day they played on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingPoint {
    pub date: NaiveDate,
    pub overall_rating: f64,
}

impl RatingPoint {
    /// Fractional-year form of the date, for plotting: 2000.0 is 2000-01-01.
    pub fn year_fraction(&self) -> f64 {
        2000. + (self.date - year_2000()).num_days() as f64 / DAYS_PER_YEAR
    }
}

/// Rating points in strictly ascending date order, with no two consecutive points sharing
/// an overall rating.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RatingHistory {
    points: Vec<RatingPoint>,
}

impl RatingHistory {
    /// Appends a point unless the rating is unchanged since the last one.
    /// Returns whether the point was kept.
    pub fn push(&mut self, date: NaiveDate, overall_rating: f64) -> bool {
        if let Some(last) = self.points.last() {
            debug_assert!(last.date < date, "rating points must be pushed in date order");
            if last.overall_rating == overall_rating {
                return false;
            }
        }
        self.points.push(RatingPoint {
            date,
            overall_rating,
        });
        true
    }

    pub fn points(&self) -> &[RatingPoint] {
        &self.points
    }

    pub fn latest(&self) -> Option<&RatingPoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Everything the pipeline learns about one user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserHistory {
    pub history: RatingHistory,
    pub rejected: RejectionCounts,
}

/// Runs the full pipeline for one user: filter and normalize their scores, then rate the
/// growing skillset matrix after each day they played on.
pub fn compute_history(
    user: &User,
    params: &FilterParams,
    today: NaiveDate,
) -> Result<UserHistory, PipelineError> {
    UserName::parse(user.username.as_str()).map_err(PipelineError::InvalidUserName)?;

    let mut rejected = RejectionCounts::default();
    let mut valid: Vec<(NaiveDate, [f64; NUM_SKILLSETS])> = Vec::with_capacity(user.scores.len());
    for (index, score) in user.scores.iter().enumerate() {
        // Sentinel scores are discarded before their dates are even looked at
        if score.overall == 0. {
            rejected.record(Rejection::InvalidOverall);
            continue;
        }
        let date = parse_date(&score.date).map_err(|source| PipelineError::InvalidDate {
            index,
            date: score.date.clone(),
            source,
        })?;
        match normalize_score(score, date, today, params) {
            Ok(values) => valid.push((date, values)),
            Err(rejection) => rejected.record(rejection),
        }
    }
    // Stable, so scores from the same day keep their log order
    valid.sort_by_key(|&(date, _)| date);

    let mut matrix = SkillsetMatrix::with_capacity(valid.len());
    let mut history = RatingHistory::default();
    let days = valid.iter().chunk_by(|&&(date, _)| date);
    for (date, day_scores) in &days {
        for (_, values) in day_scores {
            matrix.push_column(values);
        }
        let ratings = find_ratings(&matrix.prefix());
        history.push(date, ratings.overall());
    }

    tracing::debug!(
        "{}: {} rating points from {} scores ({} rejected)",
        user.username,
        history.len(),
        matrix.num_columns(),
        rejected.total()
    );
    Ok(UserHistory { history, rejected })
}
