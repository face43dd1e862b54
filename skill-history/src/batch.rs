use crate::data_processing::{User, UserRatings};
use crate::error::PipelineError;
use crate::systems::{FilterParams, RatingHistory, RejectionCounts, UserHistory, compute_history};
use chrono::NaiveDate;
use rayon::prelude::*;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// A successfully rated user.
#[derive(Clone, Debug, PartialEq)]
pub struct RatedUser {
    pub username: String,
    pub history: RatingHistory,
}

#[derive(Debug)]
pub struct UserFailure {
    pub username: String,
    pub error: PipelineError,
}

pub struct BatchResults {
    /// Rated users, in the same relative order as the input.
    pub entries: Vec<RatedUser>,
    pub failures: Vec<UserFailure>,
    /// Scores rejected by the filter, summed over every rated user.
    pub rejected: RejectionCounts,
    pub secs_elapsed: f64,
}

impl BatchResults {
    pub fn to_output(&self, emit_years: bool) -> Vec<UserRatings> {
        self.entries
            .iter()
            .map(|entry| UserRatings::new(entry.username.as_str(), &entry.history, emit_years))
            .collect()
    }
}

/// Runs one user's pipeline, turning a panic into a failure of that user alone.
// The closure only reads shared input, so nothing is left half-updated after a panic
fn isolate(
    pipeline: impl FnOnce() -> Result<UserHistory, PipelineError>,
) -> Result<UserHistory, PipelineError> {
    catch_unwind(AssertUnwindSafe(pipeline)).unwrap_or_else(|payload| {
        let msg = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(PipelineError::Panicked(msg))
    })
}

/// Computes every user's rating history in parallel on the current rayon pool.
/// Each worker handles at least `min_users_per_task` consecutive users at a time.
pub fn compute_all_histories(
    users: &[User],
    params: &FilterParams,
    today: NaiveDate,
    min_users_per_task: usize,
) -> BatchResults {
    let now = std::time::Instant::now();

    // An indexed parallel collect keeps the input order
    let outcomes: Vec<_> = users
        .par_iter()
        .with_min_len(min_users_per_task.max(1))
        .map(|user| isolate(|| compute_history(user, params, today)))
        .collect();

    let mut entries = Vec::with_capacity(users.len());
    let mut failures = vec![];
    let mut rejected = RejectionCounts::default();
    for (user, outcome) in users.iter().zip(outcomes) {
        match outcome {
            Ok(result) => {
                rejected += result.rejected;
                entries.push(RatedUser {
                    username: user.username.clone(),
                    history: result.history,
                });
            }
            Err(error) => {
                tracing::warn!("Skipping user {}: {}", user.username, error);
                failures.push(UserFailure {
                    username: user.username.clone(),
                    error,
                });
            }
        }
    }
    let secs_elapsed = now.elapsed().as_nanos() as f64 * 1e-9;

    BatchResults {
        entries,
        failures,
        rejected,
        secs_elapsed,
    }
}
