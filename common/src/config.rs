use std::{env, error, fmt, str::FromStr};

use dotenvy;
use strum::{Display, EnumIter, EnumString};

use crate::input::DEFAULT_SWIPE_MIN;

pub const DIFFICULTY_KEY: &str = "MAZE_DIFFICULTY";
pub const SEED_KEY: &str = "MAZE_SEED";
pub const SWIPE_MIN_KEY: &str = "MAZE_SWIPE_MIN";

/// Square maze sizes offered to the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    pub fn size(self) -> usize {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 15,
            Difficulty::Hard => 25,
            Difficulty::Extreme => 38,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value for {}: '{}'", key, value)
            }
        }
    }
}

impl error::Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
    pub swipe_min: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: None,
            swipe_min: DEFAULT_SWIPE_MIN,
        }
    }
}

impl GameConfig {
    /// Reads the process environment, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            difficulty: parse(&lookup, DIFFICULTY_KEY)?.unwrap_or(defaults.difficulty),
            seed: parse(&lookup, SEED_KEY)?,
            swipe_min: parse(&lookup, SWIPE_MIN_KEY)?.unwrap_or(defaults.swipe_min),
        })
    }
}

// Blank values count as unset.
fn parse<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    let value = raw.trim().trim_matches('"').trim_matches('\'');
    if value.is_empty() {
        return Ok(None);
    }

    value
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        })
}
