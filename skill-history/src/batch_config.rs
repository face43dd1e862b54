use crate::batch::{BatchResults, compute_all_histories};
use crate::data_processing::{User, read_json, write_json};
use crate::error::RunError;
use crate::systems::FilterParams;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_input() -> PathBuf {
    PathBuf::from("scores.json")
}

fn default_output() -> PathBuf {
    PathBuf::from("ratings.json")
}

fn default_min_users_per_task() -> usize {
    5
}

#[derive(Deserialize, Debug, Clone)]
pub struct BatchConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Size of the worker pool; defaults to the available parallelism.
    #[serde(default)]
    pub num_threads: Option<usize>,
    #[serde(default = "default_min_users_per_task")]
    pub min_users_per_task: usize,
    /// Also write each rating point's fractional year.
    #[serde(default)]
    pub emit_years: bool,
    #[serde(default)]
    pub filter: FilterParams,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            num_threads: None,
            min_users_per_task: default_min_users_per_task(),
            emit_years: false,
            filter: FilterParams::default(),
        }
    }
}

impl BatchConfig {
    pub fn from_file(source: impl AsRef<Path>) -> Result<Self, RunError> {
        let source = source.as_ref();
        let config_json = std::fs::read_to_string(source).map_err(|source_err| RunError::Io {
            path: source.to_owned(),
            source: source_err,
        })?;
        Self::from_json5(&config_json).map_err(|err| RunError::Config {
            path: source.to_owned(),
            source: err,
        })
    }

    // json5 rather than serde_json, so that config files may carry comments
    pub fn from_json5(config_json: &str) -> Result<Self, json5::Error> {
        json5::from_str(config_json)
    }
}

/// A configured run whose input has been fully loaded.
#[derive(Debug)]
pub struct Batch {
    pub config: BatchConfig,
    pub users: Vec<User>,
}

impl Batch {
    /// Reads every user up front; a malformed input file aborts before any rating work.
    pub fn from_config(config: BatchConfig) -> Result<Self, RunError> {
        tracing::info!("Loading batch:\n{:?}", config);
        let users: Vec<User> = read_json(&config.input)?;
        tracing::info!("Loaded {} users from {:?}", users.len(), config.input);
        Ok(Self { config, users })
    }

    /// Rates every user, counting `today` as the latest acceptable score date.
    pub fn eval(&self, today: NaiveDate) -> Result<BatchResults, RunError> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(num_threads) = self.config.num_threads {
            builder = builder.num_threads(num_threads);
        }
        let pool = builder.build()?;
        tracing::info!(
            "Calculating ratings for {} users on {} threads",
            self.users.len(),
            pool.current_num_threads()
        );

        Ok(pool.install(|| {
            compute_all_histories(
                &self.users,
                &self.config.filter,
                today,
                self.config.min_users_per_task,
            )
        }))
    }

    pub fn save(&self, results: &BatchResults) -> Result<(), RunError> {
        let output = results.to_output(self.config.emit_years);
        write_json(&output, &self.config.output)
    }
}
