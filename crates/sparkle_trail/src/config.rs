//! # Trail Configuration
//!
//! Spawn distribution and physics tunables, loaded once at startup from TOML.
//! Every field is optional; missing fields fall back to the stock sparkle
//! look (100 particles, 70% spawn chance, gentle gravity).
//!
//! ```toml
//! capacity = 100
//! spawn_probability = 0.7
//! size = { min = 2.0, max = 6.0 }
//! decay = { min = 0.01, max = 0.03 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{TrailError, TrailResult};

/// Inclusive-exclusive range sampled uniformly as `min + r * (max - min)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Maps a uniform sample in `[0, 1)` onto this span.
    #[inline]
    #[must_use]
    pub fn sample(self, r: f64) -> f64 {
        self.min + r * (self.max - self.min)
    }

    fn validate(self, name: &str) -> TrailResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(TrailError::InvalidConfig(format!("{name} must be finite")));
        }
        if self.min > self.max {
            return Err(TrailError::InvalidConfig(format!(
                "{name}.min ({}) exceeds {name}.max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Tunables for a [`ParticleTrail`](crate::ParticleTrail).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrailConfig {
    /// Maximum number of live particles. Oldest are evicted beyond this.
    pub capacity: usize,
    /// Chance that a single pointer move spawns a particle.
    pub spawn_probability: f64,
    /// Full width of the square spawn area centred on the pointer.
    pub jitter: f64,
    /// Maximum initial speed per axis, in pixels per frame.
    pub speed: f64,
    /// Maximum angular speed, in radians per frame.
    pub spin: f64,
    /// Added to vertical velocity every frame.
    pub gravity: f64,
    /// Star outer radius.
    pub size: Span,
    /// Life lost per frame.
    pub decay: Span,
}

impl TrailConfig {
    /// Default particle cap.
    pub const DEFAULT_CAPACITY: usize = 100;
    /// Default spawn chance per pointer move.
    pub const DEFAULT_SPAWN_PROBABILITY: f64 = 0.7;
    /// Default downward acceleration per frame.
    pub const DEFAULT_GRAVITY: f64 = 0.05;
    /// Largest accepted particle cap.
    pub const MAX_CAPACITY: usize = 1 << 20;

    /// Parses a config from TOML text and validates it.
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
        tracing::debug!(path = %path.display(), capacity = config.capacity, "loaded trail config");
        Ok(config)
    }

    /// Checks every value is in range.
    ///
    /// Decay must be strictly positive so that life strictly decreases each
    /// frame and every particle eventually expires.
    pub fn validate(&self) -> TrailResult<()> {
        if self.capacity == 0 {
            return Err(TrailError::InvalidConfig("capacity must be at least 1".into()));
        }
        if self.capacity > Self::MAX_CAPACITY {
            return Err(TrailError::InvalidConfig(format!(
                "capacity must be at most {}, got {}",
                Self::MAX_CAPACITY,
                self.capacity
            )));
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(TrailError::InvalidConfig(format!(
                "spawn_probability must be within [0, 1], got {}",
                self.spawn_probability
            )));
        }
        for (name, value) in [
            ("jitter", self.jitter),
            ("speed", self.speed),
            ("spin", self.spin),
            ("gravity", self.gravity),
        ] {
            if !value.is_finite() {
                return Err(TrailError::InvalidConfig(format!("{name} must be finite")));
            }
        }
        self.size.validate("size")?;
        self.decay.validate("decay")?;
        if self.size.min < 0.0 {
            return Err(TrailError::InvalidConfig("size.min must not be negative".into()));
        }
        if self.decay.min <= 0.0 {
            return Err(TrailError::InvalidConfig(format!(
                "decay.min must be positive, got {}",
                self.decay.min
            )));
        }
        Ok(())
    }
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            spawn_probability: Self::DEFAULT_SPAWN_PROBABILITY,
            jitter: 10.0,
            speed: 1.0,
            spin: 0.1,
            gravity: Self::DEFAULT_GRAVITY,
            size: Span::new(2.0, 6.0),
            decay: Span::new(0.01, 0.03),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(TrailConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TrailConfig::from_toml_str("").unwrap();
        assert_eq!(config, TrailConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = TrailConfig::from_toml_str(
            r#"
            capacity = 25
            decay = { min = 0.05, max = 0.05 }
            "#,
        )
        .unwrap();
        assert_eq!(config.capacity, 25);
        assert_eq!(config.decay, Span::new(0.05, 0.05));
        assert!((config.spawn_probability - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = TrailConfig::from_toml_str("capacity = 0").unwrap_err();
        assert!(matches!(err, TrailError::InvalidConfig(_)));
    }

    #[test]
    fn test_capacity_upper_bound() {
        let err = TrailConfig::from_toml_str("capacity = 9223372036854775807").unwrap_err();
        assert!(matches!(err, TrailError::InvalidConfig(_)));

        let at_limit = TrailConfig {
            capacity: TrailConfig::MAX_CAPACITY,
            ..TrailConfig::default()
        };
        assert!(at_limit.validate().is_ok());
        let over = TrailConfig {
            capacity: TrailConfig::MAX_CAPACITY + 1,
            ..TrailConfig::default()
        };
        assert!(over.validate().is_err());
    }

    #[test]
    fn test_rejects_probability_out_of_range() {
        let err = TrailConfig::from_toml_str("spawn_probability = 1.5").unwrap_err();
        assert!(matches!(err, TrailError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_non_positive_decay() {
        let err = TrailConfig::from_toml_str("decay = { min = 0.0, max = 0.02 }").unwrap_err();
        assert!(err.to_string().contains("decay.min"));
    }

    #[test]
    fn test_rejects_inverted_span() {
        let err = TrailConfig::from_toml_str("size = { min = 6.0, max = 2.0 }").unwrap_err();
        assert!(matches!(err, TrailError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_unknown_field() {
        let err = TrailConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, TrailError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = TrailConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, TrailError::Io { .. }));
    }
}
