use crate::math::Vec2;
use crate::palette::Color;
use crate::particle::Particle;

/// One colour stop of a radial gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the radius, `0.0` (centre) to `1.0` (edge).
    pub offset: f32,
    /// Colour at this stop, alpha included.
    pub color: Color,
}

impl GradientStop {
    /// Creates a new stop.
    #[must_use]
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// A circle filled with a three-stop radial gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGlow {
    /// Centre in screen pixels.
    pub center: Vec2,
    /// Outer radius.
    pub radius: f64,
    /// Gradient stops, centre outward.
    pub stops: [GradientStop; 3],
    /// Layer opacity applied on top of the stop alphas.
    pub opacity: f32,
}

impl RadialGlow {
    /// The halo drawn behind a particle: twice its size, fading from
    /// `life` alpha at the centre through `life / 2` to nothing at the edge.
    #[must_use]
    pub fn for_particle(particle: &Particle) -> Self {
        let life = particle.opacity();
        let color = particle.color.color();
        Self {
            center: particle.position,
            radius: particle.size * 2.0,
            stops: [
                GradientStop::new(0.0, color.with_alpha(life)),
                GradientStop::new(0.5, color.with_alpha(life * 0.5)),
                GradientStop::new(1.0, color.with_alpha(0.0)),
            ],
            opacity: life,
        }
    }
}
