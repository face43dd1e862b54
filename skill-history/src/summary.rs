use crate::data_processing::{UserName, UserRatings};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub rank: usize,
    pub username: String,
    pub latest_rating: f64,
    pub max_rating: f64,
    pub num_points: usize,
    pub last_change_date: NaiveDate,
}

/// Computed histories ranked by latest rating, for looking players up after a run.
/// Players without a single rating point are left out.
pub struct RatingBoard {
    players: Vec<PlayerSummary>,
    // lowercased username -> index into players
    by_key: HashMap<String, usize>,
}

impl RatingBoard {
    pub fn new(entries: &[UserRatings]) -> Self {
        let mut players: Vec<PlayerSummary> = entries
            .iter()
            .filter_map(|entry| {
                let latest_rating = entry.latest_rating()?;
                let last_change_date = *entry.dates.last()?;
                let max_rating = entry.ratings.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                Some(PlayerSummary {
                    rank: 0,
                    username: entry.username.clone(),
                    latest_rating,
                    max_rating,
                    num_points: entry.ratings.len(),
                    last_change_date,
                })
            })
            .collect();
        players.sort_by(|a, b| {
            b.latest_rating
                .total_cmp(&a.latest_rating)
                .then_with(|| a.username.cmp(&b.username))
        });
        let mut by_key = HashMap::with_capacity(players.len());
        for (i, player) in players.iter_mut().enumerate() {
            player.rank = i + 1;
            by_key.entry(player.username.to_lowercase()).or_insert(i);
        }
        Self { players, by_key }
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn mean_rating(&self) -> Option<f64> {
        if self.players.is_empty() {
            return None;
        }
        let sum: f64 = self.players.iter().map(|player| player.latest_rating).sum();
        Some(sum / self.players.len() as f64)
    }

    /// Case-insensitive lookup by username.
    pub fn find(&self, name: &UserName) -> Option<&PlayerSummary> {
        self.by_key.get(&name.key()).map(|&i| &self.players[i])
    }

    pub fn top(&self, count: usize) -> &[PlayerSummary] {
        &self.players[..count.min(self.players.len())]
    }

    /// Up to `count` other players whose latest rating is nearest to `name`'s, nearest first.
    pub fn closest_to(&self, name: &UserName, count: usize) -> Vec<&PlayerSummary> {
        let Some(me) = self.find(name) else {
            return vec![];
        };
        let mut others: Vec<&PlayerSummary> = self
            .players
            .iter()
            .filter(|player| player.rank != me.rank)
            .collect();
        others.sort_by(|a, b| {
            let delta_a = (a.latest_rating - me.latest_rating).abs();
            let delta_b = (b.latest_rating - me.latest_rating).abs();
            delta_a.total_cmp(&delta_b).then_with(|| a.rank.cmp(&b.rank))
        });
        others.truncate(count);
        others
    }
}
