//! Particle system configuration.
//!
//! Configs can be built in code with the `with_*` methods or loaded from
//! JSON. Missing JSON fields take their defaults:
//!
//! ```json
//! {
//!   "max_particles": 1000,
//!   "cull_margin": 50.0,
//!   "color_jitter": 20
//! }
//! ```

use crate::error::ConfigError;
use crate::particle::DEFAULT_CULL_MARGIN;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables for a [`ParticleSystem`](crate::ParticleSystem).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Capacity. Oldest particles are evicted when a spawn exceeds it.
    pub max_particles: usize,
    /// Pixels beyond each canvas edge inside which particles are still drawn.
    pub cull_margin: f32,
    /// Largest per-channel color offset applied at spawn.
    pub color_jitter: u8,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            max_particles: 1000,
            cull_margin: DEFAULT_CULL_MARGIN,
            color_jitter: 20,
        }
    }
}

impl SystemConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_particles(mut self, max_particles: usize) -> Self {
        self.max_particles = max_particles;
        self
    }

    pub fn with_cull_margin(mut self, margin: f32) -> Self {
        self.cull_margin = margin;
        self
    }

    pub fn with_color_jitter(mut self, jitter: u8) -> Self {
        self.color_jitter = jitter;
        self
    }

    /// Reject values the system cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_particles == 0 {
            return Err(ConfigError::Invalid("max_particles must be at least 1".into()));
        }
        if !self.cull_margin.is_finite() || self.cull_margin < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "cull_margin must be a non-negative number, got {}",
                self.cull_margin
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("loaded particle config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
