//! Gameplay effect presets.
//!
//! Each [`Effect`] expands into a fixed list of [`SpawnRequest`]s with
//! literal tunings. The typed helpers on
//! [`ParticleSystem`](crate::ParticleSystem) (`add_explosion`,
//! `add_laser_impact`, ...) are thin wrappers over
//! [`ParticleSystem::emit`](crate::ParticleSystem::emit).
//!
//! # Effects
//!
//! | Effect | Particles |
//! |--------|-----------|
//! | [`Effect::Explosion`] | explosion core, sparks, debris, smoke, 3 glows |
//! | [`Effect::LaserImpact`] | 8 sparks, 2 energy |
//! | [`Effect::Construction`] | 15 energy, 3 glows |
//! | [`Effect::EngineTrail`] | 3 trail dots behind the emitter |
//! | [`Effect::PowerPulse`] | 5 energy |

use crate::color::Color;
use crate::kind::ParticleKind;
use crate::spawn::SpawnRequest;
use glam::Vec2;
use rand::Rng;

pub const EXPLOSION_CORE: Color = Color::new(255, 200, 80);
pub const EXPLOSION_SPARK: Color = Color::new(255, 140, 0);
pub const DEBRIS_GRAY: Color = Color::new(128, 128, 128);
pub const SMOKE_GRAY: Color = Color::new(60, 60, 60);
pub const FLASH_WHITE_YELLOW: Color = Color::new(255, 255, 200);
pub const CONSTRUCTION_BLUE: Color = Color::new(80, 150, 255);
pub const CONSTRUCTION_GLOW: Color = Color::new(170, 210, 255);
pub const POWER_GREEN: Color = Color::new(60, 255, 120);

/// Dots spawned per engine trail call.
const TRAIL_DOTS: usize = 3;

/// Distance between trail dots along the emitter's heading.
const TRAIL_SPACING: f32 = 5.0;

/// Positional jitter applied to each trail dot on both axes.
const TRAIL_JITTER: f32 = 2.0;

/// A gameplay event that produces particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Multi-layer blast. `intensity` scales particle count and speed.
    Explosion {
        position: Vec2,
        intensity: f32,
    },

    /// Sparks and a brief energy flash where a laser hits.
    LaserImpact {
        position: Vec2,
        color: Color,
    },

    /// Blue energy swirl while a building is placed.
    Construction {
        position: Vec2,
    },

    /// Exhaust dots left behind a ship moving along `direction`.
    EngineTrail {
        position: Vec2,
        direction: Vec2,
        color: Color,
    },

    /// Green energy blip travelling along the power network.
    PowerPulse {
        position: Vec2,
    },
}

impl Effect {
    pub fn name(&self) -> &'static str {
        match self {
            Effect::Explosion { .. } => "explosion",
            Effect::LaserImpact { .. } => "laser_impact",
            Effect::Construction { .. } => "construction",
            Effect::EngineTrail { .. } => "engine_trail",
            Effect::PowerPulse { .. } => "power_pulse",
        }
    }

    /// Expand into spawn requests, in spawn order.
    ///
    /// The rng is only consumed by effects with positional jitter.
    pub fn requests<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<SpawnRequest> {
        match *self {
            Effect::Explosion { position, intensity } => {
                let i = intensity;
                let core = (20.0 * i) as usize;
                let Vec2 { x, y } = position;
                vec![
                    SpawnRequest::new(ParticleKind::Explosion, x, y)
                        .count(core)
                        .color(EXPLOSION_CORE)
                        .speed(3.0 * i..=8.0 * i)
                        .lifetime(15..=30)
                        .size(2.0..=5.0),
                    SpawnRequest::new(ParticleKind::Spark, x, y)
                        .count(core / 2)
                        .color(EXPLOSION_SPARK)
                        .speed(1.0 * i..=5.0 * i)
                        .lifetime(20..=40)
                        .size(1.0..=3.0),
                    SpawnRequest::new(ParticleKind::Debris, x, y)
                        .count(core / 3)
                        .color(DEBRIS_GRAY)
                        .speed(0.5 * i..=3.0 * i)
                        .lifetime(30..=80)
                        .size(1.0..=2.0),
                    SpawnRequest::new(ParticleKind::Smoke, x, y)
                        .count(core / 4)
                        .color(SMOKE_GRAY)
                        .speed(0.2 * i..=i)
                        .lifetime(60..=120)
                        .size(3.0..=8.0),
                    SpawnRequest::new(ParticleKind::Glow, x, y)
                        .count(3)
                        .color(FLASH_WHITE_YELLOW)
                        .speed(0.1..=0.5)
                        .lifetime(20..=40)
                        .size(10.0..=20.0),
                ]
            }

            Effect::LaserImpact { position, color } => vec![
                SpawnRequest::new(ParticleKind::Spark, position.x, position.y)
                    .count(8)
                    .color(color)
                    .speed(1.0..=4.0)
                    .lifetime(10..=25)
                    .size(1.0..=2.0),
                SpawnRequest::new(ParticleKind::Energy, position.x, position.y)
                    .count(2)
                    .color(color)
                    .speed(0.1..=0.5)
                    .lifetime(15..=30)
                    .size(5.0..=10.0),
            ],

            Effect::Construction { position } => vec![
                SpawnRequest::new(ParticleKind::Energy, position.x, position.y)
                    .count(15)
                    .color(CONSTRUCTION_BLUE)
                    .speed(0.5..=2.0)
                    .lifetime(20..=40)
                    .size(1.0..=3.0),
                SpawnRequest::new(ParticleKind::Glow, position.x, position.y)
                    .count(3)
                    .color(CONSTRUCTION_GLOW)
                    .speed(0.1..=0.3)
                    .lifetime(30..=50)
                    .size(8.0..=15.0),
            ],

            Effect::EngineTrail { position, direction, color } => (0..TRAIL_DOTS)
                .map(|i| {
                    let behind = position - direction * (i + 1) as f32 * TRAIL_SPACING;
                    let jitter = Vec2::new(
                        rng.gen_range(-TRAIL_JITTER..=TRAIL_JITTER),
                        rng.gen_range(-TRAIL_JITTER..=TRAIL_JITTER),
                    );
                    let at = behind + jitter;
                    SpawnRequest::new(ParticleKind::Trail, at.x, at.y)
                        .count(1)
                        .color(color)
                        .speed(0.1..=0.5)
                        .lifetime(10..=20)
                        .size(1.0..=2.0)
                })
                .collect(),

            Effect::PowerPulse { position } => vec![SpawnRequest::new(
                ParticleKind::Energy,
                position.x,
                position.y,
            )
            .count(5)
            .color(POWER_GREEN)
            .speed(0.2..=1.0)
            .lifetime(15..=30)
            .size(2.0..=4.0)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn total(effect: Effect) -> usize {
        let mut rng = SmallRng::seed_from_u64(0);
        effect.requests(&mut rng).iter().map(|r| r.count).sum()
    }

    #[test]
    fn test_explosion_layer_counts() {
        let mut rng = SmallRng::seed_from_u64(0);
        let effect = Effect::Explosion {
            position: Vec2::ZERO,
            intensity: 1.0,
        };
        let counts: Vec<(ParticleKind, usize)> = effect
            .requests(&mut rng)
            .iter()
            .map(|r| (r.kind, r.count))
            .collect();
        assert_eq!(
            counts,
            vec![
                (ParticleKind::Explosion, 20),
                (ParticleKind::Spark, 10),
                (ParticleKind::Debris, 6),
                (ParticleKind::Smoke, 5),
                (ParticleKind::Glow, 3),
            ]
        );
    }

    #[test]
    fn test_explosion_intensity_truncates() {
        let half = Effect::Explosion {
            position: Vec2::ZERO,
            intensity: 0.55,
        };
        // core 11 -> 5 + 3 + 2, plus 3 glows
        assert_eq!(total(half), 11 + 5 + 3 + 2 + 3);
    }

    #[test]
    fn test_explosion_speed_scales_with_intensity() {
        let mut rng = SmallRng::seed_from_u64(0);
        let effect = Effect::Explosion {
            position: Vec2::ZERO,
            intensity: 2.0,
        };
        let requests = effect.requests(&mut rng);
        assert_eq!(requests[0].speed, 6.0..=16.0);
        assert_eq!(requests[3].speed, 0.4..=2.0);
        assert_eq!(requests[4].speed, 0.1..=0.5);
    }

    #[test]
    fn test_fixed_preset_totals() {
        let p = Vec2::new(5.0, 5.0);
        assert_eq!(total(Effect::LaserImpact { position: p, color: Color::WHITE }), 10);
        assert_eq!(total(Effect::Construction { position: p }), 18);
        assert_eq!(total(Effect::PowerPulse { position: p }), 5);
        assert_eq!(
            total(Effect::EngineTrail {
                position: p,
                direction: Vec2::X,
                color: Color::WHITE,
            }),
            3
        );
    }

    #[test]
    fn test_engine_trail_is_behind_emitter() {
        let mut rng = SmallRng::seed_from_u64(11);
        let effect = Effect::EngineTrail {
            position: Vec2::new(100.0, 50.0),
            direction: Vec2::X,
            color: Color::WHITE,
        };
        for (i, req) in effect.requests(&mut rng).iter().enumerate() {
            let expected_x = 100.0 - (i + 1) as f32 * 5.0;
            assert!((req.position.x - expected_x).abs() <= 2.0);
            assert!((req.position.y - 50.0).abs() <= 2.0);
            assert_eq!(req.kind, ParticleKind::Trail);
        }
    }
}
