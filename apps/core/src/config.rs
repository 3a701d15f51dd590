use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use validator::Validate;

use crate::error::{LabError, Result};

/// Prefix shared by every environment variable the lab reads.
pub const ENV_PREFIX: &str = "LINGUISTIC_LAB_";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(LabError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Settings for the lab's caller layer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LabConfig {
    /// Directory holding the key-value store.
    pub data_dir: PathBuf,
    /// Maximum number of concepts kept in the community feed.
    #[validate(range(min = 1, max = 500))]
    pub community_feed_limit: usize,
    /// Concept creation target used for progress percentages.
    #[validate(range(min = 1))]
    pub target_concepts_per_month: u32,
    /// Problem-solving improvement target, in percent.
    #[validate(range(min = 0.0, max = 1000.0))]
    pub target_problem_solving_improvement: f64,
    /// Metric windows, in days.
    #[validate(length(min = 1))]
    pub analysis_windows: Vec<u32>,
    pub log_format: LogFormat,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            community_feed_limit: 50,
            target_concepts_per_month: 47,
            target_problem_solving_improvement: 83.0,
            analysis_windows: vec![7, 30, 90],
            log_format: LogFormat::Text,
        }
    }
}

impl LabConfig {
    /// Loads the configuration from `LINGUISTIC_LAB_*` environment variables
    /// (after reading a `.env` file when one exists), falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_vars(|name| env::var(format!("{}{}", ENV_PREFIX, name)).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(dir) = lookup("DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(limit) = lookup("COMMUNITY_FEED_LIMIT") {
            config.community_feed_limit = parse_var("COMMUNITY_FEED_LIMIT", &limit)?;
        }
        if let Some(target) = lookup("TARGET_CONCEPTS_PER_MONTH") {
            config.target_concepts_per_month = parse_var("TARGET_CONCEPTS_PER_MONTH", &target)?;
        }
        if let Some(target) = lookup("TARGET_IMPROVEMENT") {
            config.target_problem_solving_improvement = parse_var("TARGET_IMPROVEMENT", &target)?;
        }
        if let Some(windows) = lookup("ANALYSIS_WINDOWS") {
            config.analysis_windows = windows
                .split(',')
                .filter(|w| !w.trim().is_empty())
                .map(|w| parse_var("ANALYSIS_WINDOWS", w))
                .collect::<Result<Vec<u32>>>()?;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            config.log_format = format.parse()?;
        }

        config.validate()?;
        if config.analysis_windows.contains(&0) {
            return Err(LabError::Config(
                "Analysis windows must be at least one day".to_string(),
            ));
        }

        Ok(config)
    }
}

fn parse_var<T: FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| LabError::Config(format!("{}{} has an invalid value: {}", ENV_PREFIX, name, raw)))
}
