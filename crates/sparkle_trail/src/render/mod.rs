//! Backend-agnostic rendering.
//!
//! The trail describes each frame as three primitives (clear, radial glow,
//! filled star) and hands them to a [`Surface`]. Backends translate those
//! into canvas calls, GPU instances, or anything else.

mod glow;
mod instance;
mod recorder;
mod star;

pub use glow::{GradientStop, RadialGlow};
pub use instance::ParticleInstance;
pub use recorder::CommandRecorder;
pub use star::Star;

/// Drawable area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport, clamping negative sizes to zero.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Returns true if nothing can be drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A 2D drawing target.
pub trait Surface {
    /// Erases everything inside `viewport`.
    fn clear(&mut self, viewport: Viewport);

    /// The surface's own drawable size, if it knows one.
    ///
    /// Used in place of an empty viewport so a surface is cleared before the
    /// host reports its first resize.
    fn extent(&self) -> Option<Viewport> {
        None
    }

    /// Fills a circle with a radial gradient.
    fn fill_glow(&mut self, glow: &RadialGlow);

    /// Fills a star polygon.
    fn fill_star(&mut self, star: &Star);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self, viewport: Viewport) {
        (**self).clear(viewport);
    }

    fn extent(&self) -> Option<Viewport> {
        (**self).extent()
    }

    fn fill_glow(&mut self, glow: &RadialGlow) {
        (**self).fill_glow(glow);
    }

    fn fill_star(&mut self, star: &Star) {
        (**self).fill_star(star);
    }
}

/// A recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Clear the whole viewport.
    Clear {
        /// Area cleared.
        viewport: Viewport,
    },
    /// Radial glow.
    Glow(RadialGlow),
    /// Filled star.
    Star(Star),
}

impl RenderCommand {
    /// Replays this command onto a surface.
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            Self::Clear { viewport } => surface.clear(*viewport),
            Self::Glow(glow) => surface.fill_glow(glow),
            Self::Star(star) => surface.fill_star(star),
        }
    }
}
