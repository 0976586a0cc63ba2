//! Configuration management for simulation parameters.
//!
//! The fixed constants below describe the classic setup: a 400x400 plane
//! centred on the origin, twenty cells and a ninety tick recovery period.
//! [`SimulationConfig`] carries the same values as defaults and can be
//! overridden from a `config.toml` file.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! max_ticks = 10000
//!
//! [world]
//! min_x = -200.0
//! max_x = 200.0
//! min_y = -200.0
//! max_y = 200.0
//!
//! [population]
//! cells = 20
//! speed = 5.0
//! initial_infections = 1
//! initial_immune = 0
//! seed = 42
//!
//! [disease]
//! contact_radius = 15.0
//! recovery_period = 90
//! ```

use crate::error::{Result, SimulationError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use contagion_data::{IMMUNE, INFECTED, VULNERABLE};

pub const BOUNDS_WIDTH: f64 = 400.0;
pub const BOUNDS_HEIGHT: f64 = 400.0;
pub const MAX_X: f64 = BOUNDS_WIDTH / 2.0;
pub const MIN_X: f64 = -MAX_X;
pub const MAX_Y: f64 = BOUNDS_HEIGHT / 2.0;
pub const MIN_Y: f64 = -MAX_Y;

pub const CELL_COUNT: usize = 20;
pub const CELL_SPEED: f64 = 5.0;
/// Centre-to-centre distance below which two cells are in contact.
pub const CELL_RADIUS: f64 = 15.0;

/// Ticks a cell stays infected before it becomes immune.
pub const RECOVERY_PERIOD: i32 = 90;

/// Driver safety cap used by the headless runner.
pub const DEFAULT_MAX_TICKS: u64 = 10_000;

/// Spatial extent of the plane.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            min_x: MIN_X,
            max_x: MAX_X,
            min_y: MIN_Y,
            max_y: MAX_Y,
        }
    }
}

impl WorldConfig {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Initial population.
///
/// Counts are signed so that a negative request reaches validation instead of
/// failing at parse time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PopulationConfig {
    pub cells: usize,
    pub speed: f64,
    pub initial_infections: i64,
    pub initial_immune: i64,
    pub seed: Option<u64>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            cells: CELL_COUNT,
            speed: CELL_SPEED,
            initial_infections: 1,
            initial_immune: 0,
            seed: None,
        }
    }
}

/// Contagion model thresholds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct DiseaseConfig {
    pub contact_radius: f64,
    pub recovery_period: i32,
}

impl Default for DiseaseConfig {
    fn default() -> Self {
        Self {
            contact_radius: CELL_RADIUS,
            recovery_period: RECOVERY_PERIOD,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub world: WorldConfig,
    pub population: PopulationConfig,
    pub disease: DiseaseConfig,
    pub max_ticks: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            population: PopulationConfig::default(),
            disease: DiseaseConfig::default(),
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }
}

impl SimulationConfig {
    /// Default configuration with the given population counts.
    #[must_use]
    pub fn with_population(
        cells: usize,
        speed: f64,
        initial_infections: i64,
        initial_immune: i64,
    ) -> Self {
        Self {
            population: PopulationConfig {
                cells,
                speed,
                initial_infections,
                initial_immune,
                seed: None,
            },
            ..Default::default()
        }
    }

    /// Checks the infected and immune counts against the population size.
    pub fn check_population(&self) -> Result<()> {
        let cells = i64::try_from(self.population.cells).unwrap_or(i64::MAX);
        let infections = self.population.initial_infections;
        let immune = self.population.initial_immune;

        if infections <= 0 {
            return Err(SimulationError::invalid_configuration(
                "Some cells must be initially infected",
            ));
        }
        if infections >= cells {
            return Err(SimulationError::invalid_configuration(format!(
                "Number of infected cells ({infections}) must be less than total number of cells ({cells})"
            )));
        }
        if immune >= cells {
            return Err(SimulationError::invalid_configuration(format!(
                "Number of immune cells ({immune}) must be less than total number of cells ({cells})"
            )));
        }
        if immune < 0 {
            return Err(SimulationError::invalid_configuration(
                "Number of immune cells must be zero or more",
            ));
        }
        Ok(())
    }

    /// Checks geometry, speed and disease thresholds.
    pub fn check_parameters(&self) -> Result<()> {
        let w = &self.world;
        let finite = [w.min_x, w.max_x, w.min_y, w.max_y]
            .iter()
            .all(|v| v.is_finite());
        if !finite || w.width() <= 0.0 || w.height() <= 0.0 {
            return Err(SimulationError::invalid_parameter(
                "World bounds must be finite with max greater than min",
            ));
        }
        if !self.population.speed.is_finite() {
            return Err(SimulationError::invalid_parameter("Speed must be finite"));
        }
        let radius = self.disease.contact_radius;
        if !radius.is_finite() || radius < 0.0 {
            return Err(SimulationError::invalid_parameter(
                "Contact radius must be finite and non-negative",
            ));
        }
        if self.disease.recovery_period < INFECTED {
            return Err(SimulationError::invalid_parameter(format!(
                "Recovery period must be at least {INFECTED}"
            )));
        }
        Ok(())
    }

    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if everything is usable, or `Err` describing the first
    /// failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.check_parameters()?;
        self.check_population()?;
        anyhow::ensure!(self.max_ticks > 0, "Max ticks must be positive");
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file is absent or unusable.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config");
                return Self::default();
            }
        };
        match Self::from_toml(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Invalid config, using defaults");
                Self::default()
            }
        }
    }
}
