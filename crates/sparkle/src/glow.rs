//! The soft glow that sits under the pointer.

use sparkle_trail::{Color, GradientStop, RadialGlow, Vec2};

/// A small indigo-to-pink halo that follows the pointer.
///
/// Hidden until the first pointer move, hidden again when the pointer
/// leaves the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorGlow {
    position: Option<Vec2>,
    inside: bool,
}

impl CursorGlow {
    /// Glow diameter in pixels.
    pub const DIAMETER: f64 = 20.0;

    /// Creates a hidden glow.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Follows the pointer and makes the glow visible.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.position = Some(Vec2::new(x, y));
        self.inside = true;
    }

    /// Pointer entered the viewport. Stays hidden until it moves.
    pub fn enter(&mut self) {
        self.inside = true;
    }

    /// Pointer left the viewport. Hides the glow until the pointer enters
    /// or moves again, instead of leaving it lit at the last position.
    pub fn leave(&mut self) {
        self.inside = false;
    }

    /// Returns true if the glow should be drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.inside && self.position.is_some()
    }

    /// Last pointer position, if the pointer has moved at all.
    #[must_use]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// The gradient to draw, or `None` while hidden.
    #[must_use]
    pub fn radial(&self) -> Option<RadialGlow> {
        if !self.inside {
            return None;
        }
        let center = self.position?;
        Some(RadialGlow {
            center,
            radius: Self::DIAMETER / 2.0,
            stops: [
                GradientStop::new(0.0, Color::from_rgb8(99, 102, 241).with_alpha(0.8)),
                GradientStop::new(0.5, Color::from_rgb8(236, 72, 153).with_alpha(0.4)),
                GradientStop::new(1.0, Color::TRANSPARENT),
            ],
            opacity: 1.0,
        })
    }
}
