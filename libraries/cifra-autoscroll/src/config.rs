//! Auto-scroll tuning
//!
//! Field defaults match the web client. [`AutoScrollConfig::mobile`] gives the
//! mobile client's coarser range and slower base rate.

use crate::error::{AutoScrollError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// Environment prefix for overrides (`CIFRA_AUTOSCROLL_MAX_SPEED=4.0`)
pub const ENV_PREFIX: &str = "CIFRA_AUTOSCROLL";

/// Speed range and tick-rate tuning for one client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoScrollConfig {
    /// Lowest accepted speed multiplier
    #[serde(default = "default_min_speed")]
    pub min_speed: f64,

    /// Highest accepted speed multiplier
    #[serde(default = "default_max_speed")]
    pub max_speed: f64,

    /// Increment used by the speed up/down controls
    #[serde(default = "default_speed_step")]
    pub speed_step: f64,

    /// Distance advanced per tick at speed 1.0
    #[serde(default = "default_base_advance")]
    pub base_advance_per_tick: f64,

    /// Tick interval at speed 1.0, in milliseconds
    #[serde(default = "default_base_interval_ms")]
    pub base_interval_ms: f64,

    /// Shortest tick interval ever scheduled, in milliseconds
    #[serde(default = "default_floor_interval_ms")]
    pub floor_interval_ms: f64,

    /// Speed used when nothing else is known (no stored song speed)
    #[serde(default = "default_initial_speed")]
    pub initial_speed: f64,
}

fn default_min_speed() -> f64 {
    0.1
}

fn default_max_speed() -> f64 {
    3.0
}

fn default_speed_step() -> f64 {
    0.1
}

fn default_base_advance() -> f64 {
    1.0
}

fn default_base_interval_ms() -> f64 {
    50.0
}

fn default_floor_interval_ms() -> f64 {
    10.0
}

fn default_initial_speed() -> f64 {
    1.0
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self::web()
    }
}

impl AutoScrollConfig {
    /// Web client tuning: 0.1-3.0 in steps of 0.1, 50 ms base, 10 ms floor
    pub fn web() -> Self {
        Self {
            min_speed: default_min_speed(),
            max_speed: default_max_speed(),
            speed_step: default_speed_step(),
            base_advance_per_tick: default_base_advance(),
            base_interval_ms: default_base_interval_ms(),
            floor_interval_ms: default_floor_interval_ms(),
            initial_speed: default_initial_speed(),
        }
    }

    /// Mobile client tuning: 0.5-5.0 in steps of 0.5, 100 ms base, 16 ms floor
    pub fn mobile() -> Self {
        Self {
            min_speed: 0.5,
            max_speed: 5.0,
            speed_step: 0.5,
            base_advance_per_tick: 1.0,
            base_interval_ms: 100.0,
            floor_interval_ms: 16.0,
            initial_speed: 1.0,
        }
    }

    /// Load configuration from an optional TOML file and the environment
    ///
    /// Missing fields take the web defaults. The result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            if path.exists() {
                debug!(path = %path.display(), "Loading auto-scroll config file");
                settings = settings.add_source(config::File::from(path));
            } else {
                warn!(path = %path.display(), "Auto-scroll config file not found, using defaults");
            }
        }

        settings = settings.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let config: Self = settings
            .build()
            .map_err(|e| AutoScrollError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AutoScrollError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text, without environment overrides
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .map_err(|e| AutoScrollError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AutoScrollError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Check that the values describe a usable speed range and tick rate
    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.min_speed,
            self.max_speed,
            self.speed_step,
            self.base_advance_per_tick,
            self.base_interval_ms,
            self.floor_interval_ms,
            self.initial_speed,
        ]
        .iter()
        .all(|v| v.is_finite());

        let problem = if !finite {
            Some("all values must be finite numbers".to_string())
        } else if self.min_speed <= 0.0 {
            Some(format!("min_speed must be positive, got {}", self.min_speed))
        } else if self.min_speed > self.max_speed {
            Some(format!(
                "min_speed {} exceeds max_speed {}",
                self.min_speed, self.max_speed
            ))
        } else if self.speed_step <= 0.0 {
            Some(format!("speed_step must be positive, got {}", self.speed_step))
        } else if self.base_advance_per_tick <= 0.0 {
            Some(format!(
                "base_advance_per_tick must be positive, got {}",
                self.base_advance_per_tick
            ))
        } else if self.base_interval_ms <= 0.0 || self.floor_interval_ms <= 0.0 {
            Some("tick intervals must be positive".to_string())
        } else if !(self.min_speed..=self.max_speed).contains(&self.initial_speed) {
            Some(format!(
                "initial_speed {} outside {}..={}",
                self.initial_speed, self.min_speed, self.max_speed
            ))
        } else {
            None
        };

        match problem {
            Some(msg) => {
                warn!(reason = %msg, "Rejected auto-scroll configuration");
                Err(AutoScrollError::InvalidConfig(msg))
            }
            None => Ok(()),
        }
    }

    /// Clamp `speed` into `min_speed..=max_speed`
    ///
    /// Infinities clamp to the nearest bound. NaN is the caller's problem.
    pub fn clamp_speed(&self, speed: f64) -> f64 {
        speed.max(self.min_speed).min(self.max_speed)
    }

    /// Distance advanced per tick at `speed`
    pub fn tick_step(&self, speed: f64) -> f64 {
        self.base_advance_per_tick * speed
    }

    /// Tick interval at `speed`, in milliseconds, never below the floor
    pub fn tick_interval_ms(&self, speed: f64) -> f64 {
        (self.base_interval_ms / speed).max(self.floor_interval_ms)
    }

    /// Tick interval at `speed`
    pub fn tick_interval(&self, speed: f64) -> Duration {
        Duration::from_nanos((self.tick_interval_ms(speed) * 1_000_000.0).round() as u64)
    }

    /// Next speed up from `speed`, on the step grid
    pub fn step_up(&self, speed: f64) -> f64 {
        self.clamp_speed(round_speed(speed + self.speed_step))
    }

    /// Next speed down from `speed`, on the step grid
    pub fn step_down(&self, speed: f64) -> f64 {
        self.clamp_speed(round_speed(speed - self.speed_step))
    }
}

/// Round to one decimal, like the mobile speed control
fn round_speed(speed: f64) -> f64 {
    (speed * 10.0).round() / 10.0
}
