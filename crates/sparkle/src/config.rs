//! # Effect Configuration
//!
//! One TOML file for the whole effect:
//!
//! ```toml
//! seed = 42              # optional; OS entropy when absent
//!
//! [trail]
//! capacity = 100
//! spawn_probability = 0.7
//!
//! [frame]
//! target_fps = 60
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use sparkle_trail::{SeededRandom, TrailConfig, TrailError, TrailResult};

use crate::frame_loop::FrameLoopConfig;

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EffectConfig {
    /// Fixed seed for reproducible sparkles.
    pub seed: Option<u64>,
    /// Particle tunables.
    pub trail: TrailConfig,
    /// Frame pacing.
    pub frame: FrameLoopConfig,
}

impl EffectConfig {
    /// Parses and validates a config from TOML text.
    pub fn from_toml_str(text: &str) -> TrailResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    pub fn from_file(path: impl AsRef<Path>) -> TrailResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| TrailError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), seed = ?config.seed, "loaded effect config");
        Ok(config)
    }

    /// Checks every section.
    pub fn validate(&self) -> TrailResult<()> {
        self.trail.validate()?;
        if self.frame.target_fps == 0 {
            return Err(TrailError::InvalidConfig("frame.target_fps must be at least 1".into()));
        }
        Ok(())
    }

    /// The random source this config asks for.
    #[must_use]
    pub fn random(&self) -> SeededRandom {
        self.seed.map_or_else(SeededRandom::from_entropy, SeededRandom::new)
    }
}
