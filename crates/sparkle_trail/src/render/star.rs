use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::math::Vec2;
use crate::palette::Color;
use crate::particle::Particle;

/// A filled five-pointed star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Centre in screen pixels.
    pub center: Vec2,
    /// Distance from centre to each tip.
    pub outer_radius: f64,
    /// Distance from centre to each notch between tips.
    pub inner_radius: f64,
    /// Clockwise rotation in radians (screen space, y down).
    pub rotation: f64,
    /// Fill colour, alpha included.
    pub color: Color,
    /// Layer opacity applied on top of the fill alpha.
    pub opacity: f32,
}

impl Star {
    /// Number of tips.
    pub const POINTS: usize = 5;
    /// Polygon vertex count (tips plus notches).
    pub const VERTICES: usize = Self::POINTS * 2;

    /// The star drawn for a particle: tips at `size`, notches at half that.
    #[must_use]
    pub fn for_particle(particle: &Particle) -> Self {
        let life = particle.opacity();
        Self {
            center: particle.position,
            outer_radius: particle.size,
            inner_radius: particle.size * 0.5,
            rotation: particle.rotation,
            color: particle.color.color().with_alpha(life),
            opacity: life,
        }
    }

    /// Vertices relative to the centre, before rotation.
    ///
    /// Tip `i` sits at `2πi/5 - π/2` (the first tip points straight up), and
    /// each notch sits `π/5` past its tip.
    #[must_use]
    pub fn local_vertices(&self) -> [Vec2; Self::VERTICES] {
        let mut vertices = [Vec2::ZERO; Self::VERTICES];
        for i in 0..Self::POINTS {
            let angle = TAU * i as f64 / Self::POINTS as f64 - FRAC_PI_2;
            vertices[i * 2] = Vec2::from_angle(angle) * self.outer_radius;
            vertices[i * 2 + 1] =
                Vec2::from_angle(angle + PI / Self::POINTS as f64) * self.inner_radius;
        }
        vertices
    }

    /// Vertices in screen space: rotated, then moved to the centre.
    #[must_use]
    pub fn vertices(&self) -> [Vec2; Self::VERTICES] {
        let mut vertices = self.local_vertices();
        for v in &mut vertices {
            *v = v.rotated(self.rotation) + self.center;
        }
        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteColor;

    fn particle(rotation: f64) -> Particle {
        Particle {
            position: Vec2::new(100.0, 50.0),
            velocity: Vec2::ZERO,
            size: 4.0,
            life: 0.5,
            decay: 0.01,
            color: PaletteColor::White,
            rotation,
            rotation_speed: 0.0,
        }
    }

    #[test]
    fn test_first_tip_points_up() {
        let star = Star::for_particle(&particle(0.0));
        let v = star.vertices();
        assert!((v[0].x - 100.0).abs() < 1e-9);
        assert!((v[0].y - 46.0).abs() < 1e-9);
    }

    #[test]
    fn test_alternating_radii() {
        let star = Star::for_particle(&particle(1.234));
        for (i, v) in star.local_vertices().iter().enumerate() {
            let expected = if i % 2 == 0 { 4.0 } else { 2.0 };
            assert!((v.length() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rotation_preserves_distance_from_center() {
        let star = Star::for_particle(&particle(0.7));
        for (i, v) in star.vertices().iter().enumerate() {
            let expected = if i % 2 == 0 { 4.0 } else { 2.0 };
            let d = Vec2::new(v.x - 100.0, v.y - 50.0).length();
            assert!((d - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_opacity_follows_life() {
        let star = Star::for_particle(&particle(0.0));
        assert!((star.opacity - 0.5).abs() < f32::EPSILON);
        assert!((star.color.a - 0.5).abs() < f32::EPSILON);
    }
}
