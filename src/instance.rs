//! GPU instance export.
//!
//! Hosts that render particles with their own GPU pipeline (instanced quads)
//! can pack the live set into [`ParticleInstance`]s and upload the bytes
//! directly. The layout is `#[repr(C)]`, 16-byte aligned, and matches
//! [`ParticleInstance::WGSL_STRUCT`].

use crate::particle::Particle;
use bytemuck::{Pod, Zeroable};

/// One particle as per-instance vertex data.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// World position.
    pub position: [f32; 2],
    /// World-space radius.
    pub size: f32,
    /// World-space glow radius (0 for non-glow kinds).
    pub glow_radius: f32,
    /// Current RGBA, normalized to `0.0..=1.0`.
    pub color: [f32; 4],
    /// [`ParticleKind`](crate::ParticleKind) tag.
    pub kind: u32,
    pub _pad: [u32; 3],
}

impl ParticleInstance {
    /// WGSL declaration matching this layout.
    pub const WGSL_STRUCT: &'static str = r#"struct ParticleInstance {
    position: vec2<f32>,
    size: f32,
    glow_radius: f32,
    color: vec4<f32>,
    kind: u32,
    _pad0: u32,
    _pad1: u32,
    _pad2: u32,
};"#;
}

impl From<&Particle> for ParticleInstance {
    fn from(p: &Particle) -> Self {
        Self {
            position: p.position().to_array(),
            size: p.size(),
            glow_radius: p.glow_radius(),
            color: p.color().with_alpha(p.alpha()).to_f32_array(),
            kind: p.kind().into(),
            _pad: [0; 3],
        }
    }
}

/// View a slice of instances as raw bytes for a vertex buffer upload.
pub fn as_bytes(instances: &[ParticleInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, ParticleKind};
    use glam::Vec2;

    #[test]
    fn test_layout_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 48);
        assert_eq!(std::mem::size_of::<ParticleInstance>() % 16, 0);
    }

    #[test]
    fn test_from_particle() {
        let p = Particle::new(
            ParticleKind::Glow,
            Vec2::new(3.0, 4.0),
            Vec2::ZERO,
            10,
            2.0,
            Color::new(255, 0, 51),
            0.0,
        );
        let instance = ParticleInstance::from(&p);
        assert_eq!(instance.position, [3.0, 4.0]);
        assert_eq!(instance.glow_radius, 6.0);
        assert_eq!(instance.kind, 5);
        assert_eq!(instance.color[0], 1.0);
        assert!((instance.color[2] - 0.2).abs() < 1e-6);
        assert!((instance.color[3] - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_as_bytes_length() {
        let instances = vec![ParticleInstance::zeroed(); 3];
        assert_eq!(as_bytes(&instances).len(), 3 * 48);
    }
}
