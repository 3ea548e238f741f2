//! The cursor sparkle effect.

use crossbeam_channel::{bounded, Receiver};
use sparkle_trail::{
    ParticleTrail, RandomSource, SeededRandom, Surface, TrailResult, TrailStats,
};

use crate::config::EffectConfig;
use crate::glow::CursorGlow;
use crate::host::{HostEvent, HostEventSender, PointerCapability};

/// What one frame did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Host events drained from the queue.
    pub events: usize,
    /// Particles spawned from those events.
    pub spawned: usize,
    /// Live particles after the frame.
    pub particles: usize,
}

/// A particle trail plus cursor glow, fed by host events.
pub struct CursorEffect<R = SeededRandom> {
    trail: ParticleTrail<R>,
    glow: CursorGlow,
    events: Receiver<HostEvent>,
    sender: HostEventSender,
}

impl<R: RandomSource> CursorEffect<R> {
    /// Host events buffered between two frames.
    pub const EVENT_QUEUE_CAPACITY: usize = 1024;

    /// Starts the effect if the host has a precise pointer.
    ///
    /// Returns `None` on touch-only or pointerless hosts.
    #[must_use]
    pub fn init(capability: PointerCapability, trail: ParticleTrail<R>) -> Option<Self> {
        if !capability.supports_trail() {
            tracing::info!(?capability, "cursor effect disabled: no fine pointer");
            return None;
        }

        let (tx, rx) = bounded(Self::EVENT_QUEUE_CAPACITY);
        tracing::info!(capacity = trail.capacity(), "cursor effect initialized");

        Some(Self {
            trail,
            glow: CursorGlow::new(),
            events: rx,
            sender: HostEventSender::new(tx),
        })
    }

    /// Handle for queuing host events from anywhere.
    #[must_use]
    pub fn sender(&self) -> HostEventSender {
        self.sender.clone()
    }

    /// Applies one event immediately, bypassing the queue.
    ///
    /// Returns `true` if it spawned a particle.
    pub fn handle(&mut self, event: HostEvent) -> bool {
        match event {
            HostEvent::PointerMove { x, y } => {
                self.glow.move_to(x, y);
                self.trail.on_pointer_move(x, y)
            }
            HostEvent::PointerEnter => {
                self.glow.enter();
                false
            }
            HostEvent::PointerLeave => {
                self.glow.leave();
                false
            }
            HostEvent::Resize { width, height } => {
                self.trail.resize(width, height);
                false
            }
        }
    }

    /// Runs one display frame: drain queued events, advance, render.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameReport {
        let mut report = FrameReport::default();

        while let Ok(event) = self.events.try_recv() {
            report.events += 1;
            if self.handle(event) {
                report.spawned += 1;
            }
        }

        self.trail.advance();
        self.render(surface);

        report.particles = self.trail.len();
        report
    }

    /// Draws the trail, then the cursor glow on top.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.trail.render(surface);
        if let Some(glow) = self.glow.radial() {
            surface.fill_glow(&glow);
        }
    }

    /// The underlying trail.
    #[must_use]
    pub fn trail(&self) -> &ParticleTrail<R> {
        &self.trail
    }

    /// The cursor glow.
    #[must_use]
    pub fn glow(&self) -> &CursorGlow {
        &self.glow
    }

    /// Trail counters.
    #[must_use]
    pub fn stats(&self) -> TrailStats {
        self.trail.stats()
    }
}

impl CursorEffect<SeededRandom> {
    /// Builds the trail from a config and starts the effect if the pointer
    /// allows it.
    pub fn from_config(
        capability: PointerCapability,
        config: &EffectConfig,
    ) -> TrailResult<Option<Self>> {
        config.validate()?;
        let trail = ParticleTrail::new(config.trail.clone(), config.random())?;
        Ok(Self::init(capability, trail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparkle_trail::{CommandRecorder, RenderCommand, ScriptedRandom};

    fn effect(roll: f64) -> CursorEffect<ScriptedRandom> {
        let trail = ParticleTrail::with_defaults(ScriptedRandom::constant(roll));
        CursorEffect::init(PointerCapability::Fine, trail).unwrap()
    }

    #[test]
    fn test_coarse_pointer_disables_effect() {
        let trail = ParticleTrail::with_defaults(ScriptedRandom::constant(0.0));
        assert!(CursorEffect::init(PointerCapability::Coarse, trail).is_none());
    }

    #[test]
    fn test_frame_drains_queue() {
        let mut effect = effect(0.0);
        let sender = effect.sender();
        sender.resize(800.0, 600.0).unwrap();
        sender.pointer_move(10.0, 10.0).unwrap();
        sender.pointer_move(12.0, 11.0).unwrap();

        let mut surface = CommandRecorder::new();
        let report = effect.frame(&mut surface);

        assert_eq!(report.events, 3);
        assert_eq!(report.spawned, 2);
        assert_eq!(report.particles, 2);
        assert_eq!(sender.pending(), 0);
        assert_eq!(effect.trail().viewport().width, 800.0);
    }

    #[test]
    fn test_glow_drawn_last_while_inside() {
        let mut effect = effect(0.9);
        effect.handle(HostEvent::PointerMove { x: 40.0, y: 50.0 });

        let mut surface = CommandRecorder::new();
        effect.frame(&mut surface);
        // Roll 0.9 never spawns: clear + cursor glow only.
        assert_eq!(surface.command_count(), 2);
        assert!(matches!(surface.commands()[1], RenderCommand::Glow(g) if g.radius == 10.0));

        effect.handle(HostEvent::PointerLeave);
        surface.begin_frame();
        effect.frame(&mut surface);
        assert_eq!(surface.command_count(), 1);
    }

    #[test]
    fn test_sender_outlives_effect() {
        let effect = effect(0.0);
        let sender = effect.sender();
        drop(effect);
        assert!(sender.send(HostEvent::PointerEnter).is_err());
    }
}
