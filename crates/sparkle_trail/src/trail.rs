//! The particle trail.
//!
//! Architecture:
//! 1. Host reports pointer moves; each one rolls the spawn chance
//! 2. New particles go to the back of a ring; the front is evicted past the cap
//! 3. Once per frame, `advance` integrates and drops expired particles
//! 4. `render` clears the surface and draws glow + star per particle
//!
//! Everything runs on the caller's thread. Nothing here blocks or fails.

use std::collections::VecDeque;

use crate::config::TrailConfig;
use crate::error::TrailResult;
use crate::math::Vec2;
use crate::particle::Particle;
use crate::random::{RandomSource, SeededRandom};
use crate::render::{ParticleInstance, RadialGlow, Star, Surface, Viewport};

/// Lifetime counters for a trail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrailStats {
    /// Currently alive particles.
    pub alive: usize,
    /// Particles created since construction.
    pub spawned: u64,
    /// Particles dropped by the cap before expiring.
    pub evicted: u64,
    /// Particles whose life ran out.
    pub expired: u64,
    /// Particles dropped by [`ParticleTrail::clear`].
    pub cleared: u64,
    /// Frames advanced.
    pub frames: u64,
}

/// Slots reserved up front; larger caps grow on demand.
const PREALLOCATED_PARTICLES: usize = 1024;

/// A bounded, self-expiring collection of sparkles.
pub struct ParticleTrail<R = SeededRandom> {
    /// Live particles, oldest first.
    particles: VecDeque<Particle>,
    /// Tunables.
    config: TrailConfig,
    /// Injected randomness.
    rng: R,
    /// Last reported pointer position.
    pointer: Option<Vec2>,
    /// Area cleared by `render`.
    viewport: Viewport,
    /// Counters.
    stats: TrailStats,
}

impl<R: RandomSource> ParticleTrail<R> {
    /// Creates a trail from a config, validating it first.
    pub fn new(config: TrailConfig, rng: R) -> TrailResult<Self> {
        config.validate()?;
        Ok(Self::from_valid(config, rng))
    }

    /// Creates a trail with the stock tunables.
    #[must_use]
    pub fn with_defaults(rng: R) -> Self {
        Self::from_valid(TrailConfig::default(), rng)
    }

    fn from_valid(config: TrailConfig, rng: R) -> Self {
        Self {
            particles: VecDeque::with_capacity(config.capacity.min(PREALLOCATED_PARTICLES) + 1),
            config,
            rng,
            pointer: None,
            viewport: Viewport::default(),
            stats: TrailStats::default(),
        }
    }

    /// Records the pointer position and, with the configured probability,
    /// spawns one particle near it.
    ///
    /// Returns `true` if a particle was spawned.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
        let origin = Vec2::new(x, y);
        self.pointer = Some(origin);

        if self.rng.next_unit() >= self.config.spawn_probability {
            return false;
        }

        let particle = Particle::spawn(origin, &self.config, &mut self.rng);
        self.push(particle);
        true
    }

    /// Appends a particle, evicting the oldest ones past the cap.
    pub fn push(&mut self, particle: Particle) {
        self.particles.push_back(particle);
        self.stats.spawned += 1;

        while self.particles.len() > self.config.capacity {
            self.particles.pop_front();
            self.stats.evicted += 1;
            tracing::trace!(capacity = self.config.capacity, "evicted oldest particle");
        }
        self.stats.alive = self.particles.len();
    }

    /// Advances every particle by one frame and drops the expired ones.
    pub fn advance(&mut self) {
        let gravity = self.config.gravity;
        let before = self.particles.len();

        self.particles.retain_mut(|p| p.step(gravity));

        let expired = before - self.particles.len();
        self.stats.expired += expired as u64;
        self.stats.alive = self.particles.len();
        self.stats.frames += 1;
    }

    /// Clears the surface, then draws a glow and a star for every particle,
    /// oldest first.
    ///
    /// Before the first [`resize`](Self::resize) the surface's own extent is
    /// cleared instead.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let viewport = if self.viewport.is_empty() {
            surface.extent().unwrap_or(self.viewport)
        } else {
            self.viewport
        };
        surface.clear(viewport);

        for particle in &self.particles {
            surface.fill_glow(&RadialGlow::for_particle(particle));
            surface.fill_star(&Star::for_particle(particle));
        }
    }

    /// Packs every live particle for instanced drawing, replacing `out`.
    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        out.extend(self.particles.iter().map(ParticleInstance::from_particle));
    }

    /// Updates the area cleared by `render`.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
        tracing::debug!(width, height, "trail viewport resized");
    }

    /// Drops every live particle.
    pub fn clear(&mut self) {
        self.stats.cleared += self.particles.len() as u64;
        self.particles.clear();
        self.stats.alive = 0;
    }

    /// Live particles, oldest first.
    pub fn particles(&self) -> impl ExactSizeIterator<Item = &Particle> + '_ {
        self.particles.iter()
    }

    /// Number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Returns true if no particles are alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Maximum number of live particles.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Last reported pointer position.
    #[must_use]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Active tunables.
    #[must_use]
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Lifetime counters.
    #[must_use]
    pub fn stats(&self) -> TrailStats {
        self.stats
    }

    /// The injected random source.
    #[must_use]
    pub fn random(&self) -> &R {
        &self.rng
    }
}
