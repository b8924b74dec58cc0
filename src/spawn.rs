//! Spawn requests and particle sampling.
//!
//! A [`SpawnRequest`] describes one burst: where, how many, which kind and
//! color, and the ranges speed, lifetime and size are drawn from.

use crate::color::Color;
use crate::kind::ParticleKind;
use crate::particle::Particle;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;
use std::ops::RangeInclusive;

/// A burst of particles of one kind, emitted from a single point.
///
/// Defaults mirror the plain gameplay bursts: one particle, speed `1..=3`,
/// lifetime `30..=60` ticks, size `1..=3`.
///
/// ```ignore
/// let sparks = SpawnRequest::new(ParticleKind::Spark, x, y)
///     .count(5)
///     .color(Color::new(255, 255, 100))
///     .speed(2.0..=4.0)
///     .lifetime(20..=30);
/// system.add_particles(&sparks);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnRequest {
    pub position: Vec2,
    pub count: usize,
    pub color: Color,
    pub kind: ParticleKind,
    /// Initial speed, in world units per tick.
    pub speed: RangeInclusive<f32>,
    /// Lifetime in ticks.
    pub lifetime: RangeInclusive<u32>,
    pub size: RangeInclusive<f32>,
}

impl SpawnRequest {
    pub fn new(kind: ParticleKind, x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            count: 1,
            color: Color::WHITE,
            kind,
            speed: 1.0..=3.0,
            lifetime: 30..=60,
            size: 1.0..=3.0,
        }
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn speed(mut self, range: RangeInclusive<f32>) -> Self {
        self.speed = range;
        self
    }

    pub fn lifetime(mut self, range: RangeInclusive<u32>) -> Self {
        self.lifetime = range;
        self
    }

    pub fn size(mut self, range: RangeInclusive<f32>) -> Self {
        self.size = range;
        self
    }

    /// Draw one particle for this request.
    ///
    /// Direction is uniform over the full circle; color channels are
    /// jittered by up to `color_jitter`.
    pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R, color_jitter: u8) -> Particle {
        let angle = rng.gen_range(0.0..TAU);
        let speed = sample_f32(rng, &self.speed);
        let velocity = Vec2::new(angle.cos(), angle.sin()) * speed;
        let lifetime = sample_u32(rng, &self.lifetime);
        let size = sample_f32(rng, &self.size);
        let color = self.color.jittered(rng, color_jitter);
        let pulse_phase = rng.gen_range(0.0..TAU);

        Particle::new(
            self.kind,
            self.position,
            velocity,
            lifetime,
            size,
            color,
            pulse_phase,
        )
    }
}

/// Uniform sample from an inclusive range. Reversed bounds are swapped.
fn sample_f32<R: Rng + ?Sized>(rng: &mut R, range: &RangeInclusive<f32>) -> f32 {
    let (lo, hi) = (range.start().min(*range.end()), range.start().max(*range.end()));
    rng.gen_range(lo..=hi)
}

fn sample_u32<R: Rng + ?Sized>(rng: &mut R, range: &RangeInclusive<u32>) -> u32 {
    let (lo, hi) = (
        (*range.start()).min(*range.end()),
        (*range.start()).max(*range.end()),
    );
    rng.gen_range(lo..=hi)
}
