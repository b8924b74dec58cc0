//! Particle kinds.
//!
//! Every particle belongs to exactly one [`ParticleKind`]. The kind selects
//! its gravity and friction constants, the physics rule applied each tick,
//! the fade curve, and the draw routine.
//!
//! | Kind | Gravity | Friction | Alpha at life ratio `r` |
//! |------|---------|----------|-------------------------|
//! | [`ParticleKind::Spark`] | 0.1 | 0.95 | `255 * r` |
//! | [`ParticleKind::Explosion`] | 0.05 | 0.95 | `255 * r²` |
//! | [`ParticleKind::Smoke`] | 0.05 | 0.98 | `255 * r * 0.7` |
//! | [`ParticleKind::Energy`] | 0.05 | 0.95 | `255 * r` |
//! | [`ParticleKind::Debris`] | 0.1 | 0.95 | `255 * r` |
//! | [`ParticleKind::Glow`] | 0.05 | 0.95 | `255 * r * 0.6` |
//! | [`ParticleKind::Trail`] | 0.05 | 0.95 | `255 * r` |

use serde::{Deserialize, Serialize};

/// The closed set of particle categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Small bright points that keep their velocity.
    #[default]
    Spark,

    /// Fast-dimming fireball fragments that slow down and sag.
    Explosion,

    /// Rising, expanding, translucent puffs.
    Smoke,

    /// Pulsing orbs with a soft halo.
    Energy,

    /// Heavy fragments pulled down by gravity.
    Debris,

    /// Large soft light sources drawn as radial gradients.
    Glow,

    /// Short-lived exhaust dots left behind moving emitters.
    Trail,
}

impl ParticleKind {
    /// Number of kinds.
    pub const COUNT: usize = 7;

    /// Every kind, in tag order.
    pub const ALL: [ParticleKind; Self::COUNT] = [
        ParticleKind::Spark,
        ParticleKind::Explosion,
        ParticleKind::Smoke,
        ParticleKind::Energy,
        ParticleKind::Debris,
        ParticleKind::Glow,
        ParticleKind::Trail,
    ];

    /// Downward acceleration fed into the kind's physics rule.
    pub fn gravity(self) -> f32 {
        match self {
            ParticleKind::Debris | ParticleKind::Spark => 0.1,
            _ => 0.05,
        }
    }

    /// Velocity damping factor used by smoke and debris.
    pub fn friction(self) -> f32 {
        match self {
            ParticleKind::Smoke => 0.98,
            _ => 0.95,
        }
    }

    /// Alpha for a given life ratio, truncated to `0..=255`.
    pub fn alpha(self, life_ratio: f32) -> u8 {
        let r = life_ratio.clamp(0.0, 1.0);
        let alpha = match self {
            ParticleKind::Explosion => 255.0 * r * r,
            ParticleKind::Smoke => 255.0 * r * 0.7,
            ParticleKind::Glow => 255.0 * r * 0.6,
            ParticleKind::Energy
            | ParticleKind::Spark
            | ParticleKind::Debris
            | ParticleKind::Trail => 255.0 * r,
        };
        alpha as u8
    }

    /// Position of this kind in [`ParticleKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            ParticleKind::Spark => 0,
            ParticleKind::Explosion => 1,
            ParticleKind::Smoke => 2,
            ParticleKind::Energy => 3,
            ParticleKind::Debris => 4,
            ParticleKind::Glow => 5,
            ParticleKind::Trail => 6,
        }
    }

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            ParticleKind::Spark => "spark",
            ParticleKind::Explosion => "explosion",
            ParticleKind::Smoke => "smoke",
            ParticleKind::Energy => "energy",
            ParticleKind::Debris => "debris",
            ParticleKind::Glow => "glow",
            ParticleKind::Trail => "trail",
        }
    }
}

impl From<ParticleKind> for u32 {
    fn from(kind: ParticleKind) -> u32 {
        kind.index() as u32
    }
}

/// Unknown tags fall back to [`ParticleKind::Spark`].
impl From<u32> for ParticleKind {
    fn from(tag: u32) -> Self {
        ParticleKind::ALL
            .get(tag as usize)
            .copied()
            .unwrap_or_default()
    }
}

impl std::fmt::Display for ParticleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_and_friction() {
        assert_eq!(ParticleKind::Debris.gravity(), 0.1);
        assert_eq!(ParticleKind::Spark.gravity(), 0.1);
        assert_eq!(ParticleKind::Smoke.gravity(), 0.05);
        assert_eq!(ParticleKind::Smoke.friction(), 0.98);
        assert_eq!(ParticleKind::Debris.friction(), 0.95);
    }

    #[test]
    fn test_alpha_curves() {
        assert_eq!(ParticleKind::Spark.alpha(1.0), 255);
        assert_eq!(ParticleKind::Explosion.alpha(0.5), 63);
        assert_eq!(ParticleKind::Smoke.alpha(1.0), 178);
        assert_eq!(ParticleKind::Glow.alpha(1.0), 153);
        for kind in ParticleKind::ALL {
            assert_eq!(kind.alpha(0.0), 0);
        }
    }

    #[test]
    fn test_tag_round_trip() {
        for kind in ParticleKind::ALL {
            let tag: u32 = kind.into();
            assert_eq!(ParticleKind::from(tag), kind);
        }
    }

    #[test]
    fn test_unknown_tag_defaults_to_spark() {
        assert_eq!(ParticleKind::from(99), ParticleKind::Spark);
    }
}
