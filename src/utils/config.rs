use std::time::Duration;

use crate::ConfigError;

/// Parameters of one simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Share of cells seeded alive, `0..=100`.
    pub population_percentage: u32,
    pub fps: f64,
    /// Random seed (if `None`, then random seed is generated)
    pub seed: Option<u64>,
    /// Stop after this many generations even if cells are still alive.
    pub max_generations: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            population_percentage: Self::DEFAULT_POPULATION_PERCENTAGE,
            fps: Self::DEFAULT_FPS,
            seed: None,
            max_generations: None,
        }
    }
}

impl Config {
    pub const DEFAULT_WIDTH: usize = 50;
    pub const DEFAULT_HEIGHT: usize = 30;
    pub const DEFAULT_POPULATION_PERCENTAGE: u32 = 25;
    pub const DEFAULT_FPS: f64 = 5.;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::InvalidWidth(self.width));
        }
        if self.height == 0 {
            return Err(ConfigError::InvalidHeight(self.height));
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.population_percentage > 100 {
            return Err(ConfigError::PopulationPercentage(
                self.population_percentage,
            ));
        }
        if !self.fps.is_finite()
            || self.fps <= 0.
            || Duration::try_from_secs_f64(1. / self.fps).is_err()
        {
            return Err(ConfigError::FramesPerSecond(self.fps));
        }
        Ok(())
    }
}
