//! A single sparkle.

use std::f64::consts::TAU;

use crate::config::TrailConfig;
use crate::math::Vec2;
use crate::palette::PaletteColor;
use crate::random::RandomSource;

/// A short-lived decorative star.
///
/// Plain value record: no identity beyond its slot in the trail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Screen position in pixels.
    pub position: Vec2,
    /// Per-frame position delta.
    pub velocity: Vec2,
    /// Outer star radius; the glow spans twice this.
    pub size: f64,
    /// Remaining visibility in `(0, 1]`. Doubles as opacity.
    pub life: f64,
    /// Life lost per frame.
    pub decay: f64,
    /// Palette entry.
    pub color: PaletteColor,
    /// Current angle in radians.
    pub rotation: f64,
    /// Angle added per frame.
    pub rotation_speed: f64,
}

impl Particle {
    /// Builds a particle near `origin`.
    ///
    /// Draws exactly nine samples, in this order: jitter x, jitter y, size,
    /// velocity x, velocity y, decay, colour, rotation, rotation speed.
    #[must_use]
    pub fn spawn<R: RandomSource + ?Sized>(origin: Vec2, config: &TrailConfig, rng: &mut R) -> Self {
        let position = Vec2::new(
            origin.x + centred(rng) * config.jitter,
            origin.y + centred(rng) * config.jitter,
        );
        let size = config.size.sample(rng.next_unit());
        let velocity = Vec2::new(
            centred(rng) * 2.0 * config.speed,
            centred(rng) * 2.0 * config.speed,
        );
        let decay = config.decay.sample(rng.next_unit());
        let color = PaletteColor::from_unit(rng.next_unit());
        let rotation = rng.next_unit() * TAU;
        let rotation_speed = centred(rng) * 2.0 * config.spin;

        Self {
            position,
            velocity,
            size,
            life: 1.0,
            decay,
            color,
            rotation,
            rotation_speed,
        }
    }

    /// Advances one frame. Returns `true` while the particle is still alive.
    ///
    /// Position moves by the velocity from *before* gravity is applied.
    #[inline]
    pub fn step(&mut self, gravity: f64) -> bool {
        self.position += self.velocity;
        self.life -= self.decay;
        self.rotation += self.rotation_speed;
        self.velocity.y += gravity;
        self.is_alive()
    }

    /// Alive until life reaches zero.
    #[inline]
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Rendered opacity, clamped to `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.life.clamp(0.0, 1.0) as f32
    }
}

/// Uniform sample in `[-0.5, 0.5)`.
#[inline]
fn centred<R: RandomSource + ?Sized>(rng: &mut R) -> f64 {
    rng.next_unit() - 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn test_spawn_midpoint_samples() {
        // 0.5 everywhere: no jitter, no velocity, no spin.
        let mut rng = ScriptedRandom::constant(0.5);
        let p = Particle::spawn(Vec2::new(40.0, 60.0), &TrailConfig::default(), &mut rng);

        assert_eq!(p.position, Vec2::new(40.0, 60.0));
        assert_eq!(p.velocity, Vec2::ZERO);
        assert!((p.size - 4.0).abs() < 1e-12);
        assert!((p.decay - 0.02).abs() < 1e-12);
        assert_eq!(p.color, PaletteColor::Accent);
        assert!((p.rotation - std::f64::consts::PI).abs() < 1e-12);
        assert!(p.rotation_speed.abs() < 1e-12);
        assert!((p.life - 1.0).abs() < f64::EPSILON);
        assert_eq!(rng.draws(), 9);
    }

    #[test]
    fn test_spawn_extremes() {
        let mut rng = ScriptedRandom::constant(0.0);
        let p = Particle::spawn(Vec2::ZERO, &TrailConfig::default(), &mut rng);

        assert!((p.position.x + 5.0).abs() < 1e-12);
        assert!((p.velocity.y + 1.0).abs() < 1e-12);
        assert!((p.size - 2.0).abs() < 1e-12);
        assert!((p.decay - 0.01).abs() < 1e-12);
        assert!((p.rotation_speed + 0.1).abs() < 1e-12);
        assert_eq!(p.color, PaletteColor::Primary);
    }

    #[test]
    fn test_step_integrates() {
        let mut p = Particle {
            position: Vec2::new(10.0, 10.0),
            velocity: Vec2::new(1.0, -2.0),
            size: 3.0,
            life: 1.0,
            decay: 0.25,
            color: PaletteColor::Gold,
            rotation: 0.0,
            rotation_speed: 0.5,
        };

        assert!(p.step(0.05));
        assert_eq!(p.position, Vec2::new(11.0, 8.0));
        assert!((p.velocity.y + 1.95).abs() < 1e-12);
        assert!((p.life - 0.75).abs() < 1e-12);
        assert!((p.rotation - 0.5).abs() < 1e-12);

        assert!(p.step(0.05));
        assert!(p.step(0.05));
        assert!(!p.step(0.05));
    }
}
