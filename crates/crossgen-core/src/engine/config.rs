use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(60);
pub const DEFAULT_ATTEMPTS: usize = 1;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Wall-clock budget for a single attempt.
    pub time_budget: Duration,
    /// Seed for the run's random generator; drawn from entropy when `None`.
    pub seed: Option<u64>,
    pub attempts: usize,
    /// Shuffle the word list before each attempt.
    pub shuffle: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
            seed: None,
            attempts: DEFAULT_ATTEMPTS,
            shuffle: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub grid: GridConfig,
    pub search: SearchConfig,
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "width",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.grid.height == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "height",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.search.attempts == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "attempts",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct GenerationConfigBuilder {
    width: Option<usize>,
    height: Option<usize>,
    time_budget: Option<Duration>,
    seed: Option<u64>,
    attempts: Option<usize>,
    shuffle: Option<bool>,
}

impl GenerationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
    pub fn height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }
    pub fn time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
    pub fn attempts(mut self, attempts: usize) -> Self {
        self.attempts = Some(attempts);
        self
    }
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = Some(shuffle);
        self
    }

    pub fn build(self) -> Result<GenerationConfig, ConfigError> {
        let defaults = SearchConfig::default();
        let config = GenerationConfig {
            grid: GridConfig {
                width: self.width.ok_or(ConfigError::MissingParameter("width"))?,
                height: self.height.ok_or(ConfigError::MissingParameter("height"))?,
            },
            search: SearchConfig {
                time_budget: self.time_budget.unwrap_or(defaults.time_budget),
                seed: self.seed,
                attempts: self.attempts.unwrap_or(defaults.attempts),
                shuffle: self.shuffle.unwrap_or(defaults.shuffle),
            },
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_search_defaults() {
        let config = GenerationConfigBuilder::new()
            .width(15)
            .height(10)
            .build()
            .unwrap();

        assert_eq!(config.grid, GridConfig { width: 15, height: 10 });
        assert_eq!(config.search, SearchConfig::default());
        assert_eq!(config.search.time_budget, Duration::from_secs(60));
    }

    #[test]
    fn builder_requires_dimensions() {
        let result = GenerationConfigBuilder::new().width(5).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("height")));

        let result = GenerationConfigBuilder::new().height(5).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("width")));
    }

    #[test]
    fn builder_rejects_zero_sized_grids_and_attempts() {
        let result = GenerationConfigBuilder::new().width(0).height(5).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "width", .. })
        ));

        let result = GenerationConfigBuilder::new()
            .width(5)
            .height(5)
            .attempts(0)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "attempts",
                ..
            })
        ));
    }

    #[test]
    fn builder_keeps_explicit_values() {
        let config = GenerationConfigBuilder::new()
            .width(7)
            .height(9)
            .time_budget(Duration::from_millis(250))
            .seed(Some(42))
            .attempts(4)
            .shuffle(false)
            .build()
            .unwrap();

        assert_eq!(config.search.time_budget, Duration::from_millis(250));
        assert_eq!(config.search.seed, Some(42));
        assert_eq!(config.search.attempts, 4);
        assert!(!config.search.shuffle);
    }
}
