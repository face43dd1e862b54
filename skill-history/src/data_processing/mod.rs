mod user_name;

pub use user_name::UserName;

use crate::error::RunError;
use crate::systems::RatingHistory;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub const NUM_SKILLSETS: usize = 7;

/// Date format used by score logs and by the rating output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One score, as it appears in a user's score log.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Calendar day of the score; parsed lazily so that a bad date only fails its own user.
    #[serde(alias = "datetime")]
    pub date: String,
    /// Difficulty proxy of the score, where 0 marks an invalid score.
    pub overall: f64,
    /// The overall value after retroactive difficulty corrections.
    pub nerf: f64,
    /// Accuracy percentage.
    pub wifescore: f64,
    /// Raw difficulty of the score in each skillset.
    pub skillsets: [f64; NUM_SKILLSETS],
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub scores: Vec<ScoreRecord>,
}

/// A user's rating history flattened into parallel arrays, as written to disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRatings {
    pub username: String,
    pub dates: Vec<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<Vec<f64>>,
    pub ratings: Vec<f64>,
}

impl UserRatings {
    pub fn new(username: impl Into<String>, history: &RatingHistory, emit_years: bool) -> Self {
        let points = history.points();
        Self {
            username: username.into(),
            dates: points.iter().map(|point| point.date).collect(),
            years: emit_years.then(|| points.iter().map(|point| point.year_fraction()).collect()),
            ratings: points.iter().map(|point| point.overall_rating).collect(),
        }
    }

    pub fn latest_rating(&self) -> Option<f64> {
        self.ratings.last().copied()
    }
}

/// 2000-01-01: the earliest day scores are accepted from, and year 2000.0 on a timeline.
pub fn year_2000() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("2000-01-01 is a valid date")
}

pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
}

pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, RunError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| RunError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| RunError::Json {
        path: path.to_owned(),
        source,
    })
}

pub fn write_json<T: Serialize + ?Sized>(value: &T, path: impl AsRef<Path>) -> Result<(), RunError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| RunError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), value).map_err(|source| RunError::Json {
        path: path.to_owned(),
        source,
    })?;
    tracing::info!("Successfully wrote to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn test_parse_date() {
        let date = assert_ok!(parse_date("2019-03-07"));
        assert_eq!(date, NaiveDate::from_ymd_opt(2019, 3, 7).unwrap());
        assert_err!(parse_date("07/03/2019"));
        assert_err!(parse_date("2019-02-30"));
    }

    #[test]
    fn test_score_record_accepts_datetime_key() {
        let json = r#"{
            "datetime": "2018-11-02",
            "overall": 24.5,
            "nerf": 23.0,
            "wifescore": 93.2,
            "skillsets": [20.1, 22.0, 19.5, 21.0, 18.2, 17.9, 23.4]
        }"#;
        let score: ScoreRecord = serde_json::from_str(json).unwrap();
        assert_eq!(score.date, "2018-11-02");
        assert_eq!(score.skillsets[6], 23.4);
    }

    #[test]
    fn test_score_record_needs_seven_skillsets() {
        let json = r#"{"date": "2018-11-02", "overall": 24.5, "nerf": 23.0,
            "wifescore": 93.2, "skillsets": [20.1, 22.0]}"#;
        assert_err!(serde_json::from_str::<ScoreRecord>(json));
    }

    #[test]
    fn test_user_ratings_layout() {
        let mut history = RatingHistory::default();
        history.push(NaiveDate::from_ymd_opt(2001, 1, 1).unwrap(), 12.5);
        history.push(NaiveDate::from_ymd_opt(2001, 6, 1).unwrap(), 14.25);

        let ratings = UserRatings::new("kangalioo", &history, false);
        let json = serde_json::to_value(&ratings).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": "kangalioo",
                "dates": ["2001-01-01", "2001-06-01"],
                "ratings": [12.5, 14.25],
            })
        );
        assert_eq!(ratings.latest_rating(), Some(14.25));

        let with_years = UserRatings::new("kangalioo", &history, true);
        let years = with_years.years.unwrap();
        assert_eq!(years.len(), 2);
        assert!(years[0] > 2001. && years[0] < years[1]);
    }
}
