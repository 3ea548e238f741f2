use bytemuck::{Pod, Zeroable};

use crate::particle::Particle;

/// Per-particle instance data for GPU backends.
///
/// One instance draws both the glow quad and the star; the shader derives
/// radii from `size` and opacity from `color[3]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// Position (xy), size (z), rotation (w).
    pub position_size_rotation: [f32; 4],
    /// Colour (rgb) with life as alpha.
    pub color: [f32; 4],
}

impl ParticleInstance {
    /// Size of an instance in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Packs a particle.
    #[must_use]
    pub fn from_particle(particle: &Particle) -> Self {
        Self {
            position_size_rotation: [
                particle.position.x as f32,
                particle.position.y as f32,
                particle.size as f32,
                particle.rotation as f32,
            ],
            color: particle.color.color().with_alpha(particle.opacity()).to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_size() {
        // Must be aligned for GPU
        assert_eq!(ParticleInstance::SIZE, 32);
        assert_eq!(ParticleInstance::SIZE % 16, 0);
    }
}
