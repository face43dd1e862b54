mod combiner;
mod filter;
mod history;
mod matrix;
mod skillset;
mod solver;

pub use combiner::{RatingVector, find_ratings};
pub use filter::{FilterParams, Rejection, RejectionCounts, normalize_score};
pub use history::{RatingHistory, RatingPoint, UserHistory, compute_history};
pub use matrix::{SkillsetMatrix, SkillsetView};
pub use skillset::Skillset;
pub use solver::{
    INITIAL_RESOLUTION, MIN_RESOLUTION, RATING_SCALE, find_skillset_rating, is_rating_okay,
    power, power_sum,
};
