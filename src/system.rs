//! The particle system: spawning, advancing, pruning and drawing.

use crate::camera::Camera2D;
use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::SystemConfig;
use crate::effects::Effect;
use crate::instance::ParticleInstance;
use crate::kind::ParticleKind;
use crate::particle::{DrawOutcome, Particle};
use crate::spawn::SpawnRequest;
use crate::time::Clock;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::ops::Index;

/// Owns every live particle of a game session.
///
/// Call [`update`](Self::update) once per tick and [`draw`](Self::draw)
/// once per render pass. Spawns append in order; when a spawn pushes the
/// count past [`SystemConfig::max_particles`], the oldest particles are
/// evicted first, whichever spawn they came from.
///
/// The random source is injected so spawns can be reproduced:
///
/// ```ignore
/// let mut particles = ParticleSystem::with_seed(42);
/// particles.add_explosion(400.0, 300.0, 1.0);
///
/// // Game loop
/// time.tick();
/// particles.update(&time);
/// particles.draw(&mut canvas, &camera);
/// ```
pub struct ParticleSystem<R = SmallRng> {
    particles: VecDeque<Particle>,
    config: SystemConfig,
    rng: R,
}

impl ParticleSystem<SmallRng> {
    /// Default capacity, entropy-seeded.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    pub fn with_config(config: SystemConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// Default capacity with a deterministic random source.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SystemConfig::default(), SmallRng::seed_from_u64(seed))
    }
}

impl Default for ParticleSystem<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ParticleSystem<R> {
    pub fn with_rng(config: SystemConfig, rng: R) -> Self {
        Self {
            particles: VecDeque::with_capacity(config.max_particles),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    // =========================================================================
    // SPAWNING
    // =========================================================================

    /// Spawn `request.count` particles, then evict the oldest if over capacity.
    pub fn add_particles(&mut self, request: &SpawnRequest) {
        for _ in 0..request.count {
            let particle = request.sample(&mut self.rng, self.config.color_jitter);
            self.particles.push_back(particle);
        }

        let excess = self.particles.len().saturating_sub(self.config.max_particles);
        if excess > 0 {
            self.particles.drain(..excess);
            log::debug!(
                "particle cap {} reached by {} {} spawn, evicted {} oldest",
                self.config.max_particles,
                request.count,
                request.kind,
                excess
            );
        }
    }

    /// Spawn every layer of a preset effect.
    pub fn emit(&mut self, effect: Effect) {
        for request in effect.requests(&mut self.rng) {
            self.add_particles(&request);
        }
    }

    /// Multi-layer explosion; `intensity` 1.0 spawns 44 particles.
    pub fn add_explosion(&mut self, x: f32, y: f32, intensity: f32) {
        self.emit(Effect::Explosion {
            position: Vec2::new(x, y),
            intensity,
        });
    }

    pub fn add_laser_impact(&mut self, x: f32, y: f32, color: impl Into<Color>) {
        self.emit(Effect::LaserImpact {
            position: Vec2::new(x, y),
            color: color.into(),
        });
    }

    pub fn add_building_construction(&mut self, x: f32, y: f32) {
        self.emit(Effect::Construction {
            position: Vec2::new(x, y),
        });
    }

    /// Three trail dots behind an emitter heading along `(dir_x, dir_y)`.
    pub fn add_engine_trail(
        &mut self,
        x: f32,
        y: f32,
        dir_x: f32,
        dir_y: f32,
        color: impl Into<Color>,
    ) {
        self.emit(Effect::EngineTrail {
            position: Vec2::new(x, y),
            direction: Vec2::new(dir_x, dir_y),
            color: color.into(),
        });
    }

    pub fn add_power_pulse(&mut self, x: f32, y: f32) {
        self.emit(Effect::PowerPulse {
            position: Vec2::new(x, y),
        });
    }
}

impl<R> ParticleSystem<R> {
    // =========================================================================
    // FRAME LOOP
    // =========================================================================

    /// Advance every particle one tick and drop the dead ones.
    ///
    /// Survivors keep their relative order.
    pub fn update<C: Clock + ?Sized>(&mut self, clock: &C) {
        let now = clock.now_ms();
        self.particles.retain_mut(|p| p.update(now));
    }

    /// Draw all particles in collection order. No depth sorting is done.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, camera: &Camera2D) -> DrawStats {
        let mut stats = DrawStats::default();
        for particle in &self.particles {
            stats.record(particle.draw_with_margin(canvas, camera, self.config.cull_margin));
        }
        if stats.fallbacks > 0 {
            log::debug!("{} particle draws fell back this frame", stats.fallbacks);
        }
        stats
    }

    /// Drop every particle immediately.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    // =========================================================================
    // INSPECTION
    // =========================================================================

    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Maximum number of live particles.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.max_particles
    }

    /// Live particles, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.particles.iter()
    }

    pub fn count_by_kind(&self) -> KindCounts {
        let mut counts = KindCounts::default();
        for particle in &self.particles {
            counts.0[particle.kind().index()] += 1;
        }
        counts
    }

    /// Replace the contents of `out` with GPU instances of the live set.
    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        out.extend(self.particles.iter().map(ParticleInstance::from));
    }
}

/// Per-kind particle counts, indexable by [`ParticleKind`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindCounts([usize; ParticleKind::COUNT]);

impl KindCounts {
    pub fn get(&self, kind: ParticleKind) -> usize {
        self.0[kind.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

impl Index<ParticleKind> for KindCounts {
    type Output = usize;

    fn index(&self, kind: ParticleKind) -> &usize {
        &self.0[kind.index()]
    }
}

/// Summary of one [`ParticleSystem::draw`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub drawn: usize,
    pub culled: usize,
    /// Particles whose backend draw failed and used the fallback circle.
    pub fallbacks: usize,
}

impl DrawStats {
    fn record(&mut self, outcome: DrawOutcome) {
        match outcome {
            DrawOutcome::Drawn => self.drawn += 1,
            DrawOutcome::Culled => self.culled += 1,
            DrawOutcome::Fallback => self.fallbacks += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.drawn + self.culled + self.fallbacks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;

    #[test]
    fn test_new_system_is_empty() {
        let system = ParticleSystem::new();
        assert_eq!(system.particle_count(), 0);
        assert_eq!(system.capacity(), 1000);
    }

    #[test]
    fn test_eviction_drops_oldest() {
        let config = SystemConfig::new().with_max_particles(10);
        let mut system = ParticleSystem::with_rng(config, SmallRng::seed_from_u64(1));

        system.add_particles(&SpawnRequest::new(ParticleKind::Spark, 1.0, 0.0).count(6));
        system.add_particles(&SpawnRequest::new(ParticleKind::Smoke, 2.0, 0.0).count(6));

        assert_eq!(system.particle_count(), 10);
        let counts = system.count_by_kind();
        assert_eq!(counts[ParticleKind::Spark], 4);
        assert_eq!(counts[ParticleKind::Smoke], 6);
        // Survivors of the first batch stay in front
        assert_eq!(system.iter().next().map(|p| p.kind()), Some(ParticleKind::Spark));
    }

    #[test]
    fn test_update_preserves_order() {
        let mut system = ParticleSystem::with_seed(5);
        system.add_particles(&SpawnRequest::new(ParticleKind::Spark, 0.0, 0.0).lifetime(1..=1));
        system.add_particles(&SpawnRequest::new(ParticleKind::Trail, 0.0, 0.0).lifetime(5..=5));
        system.add_particles(&SpawnRequest::new(ParticleKind::Spark, 0.0, 0.0).lifetime(1..=1));
        system.add_particles(&SpawnRequest::new(ParticleKind::Debris, 0.0, 0.0).lifetime(5..=5));

        system.update(&FixedClock(0.0));

        let kinds: Vec<ParticleKind> = system.iter().map(|p| p.kind()).collect();
        assert_eq!(kinds, vec![ParticleKind::Trail, ParticleKind::Debris]);
    }

    #[test]
    fn test_draw_stats() {
        let mut system = ParticleSystem::with_seed(2);
        system.add_particles(
            &SpawnRequest::new(ParticleKind::Spark, 10.0, 10.0)
                .count(3)
                .speed(0.0..=0.0),
        );
        system.add_particles(
            &SpawnRequest::new(ParticleKind::Spark, 5000.0, 10.0)
                .count(2)
                .speed(0.0..=0.0),
        );

        let mut canvas = crate::ImageCanvas::new(64, 64);
        let stats = system.draw(&mut canvas, &Camera2D::default());
        assert_eq!(stats.drawn, 3);
        assert_eq!(stats.culled, 2);
        assert_eq!(stats.total(), 5);
    }

    #[test]
    fn test_write_instances_replaces_buffer() {
        let mut system = ParticleSystem::with_seed(8);
        system.add_power_pulse(0.0, 0.0);
        let mut out = vec![ParticleInstance::from(system.iter().next().unwrap()); 20];
        system.write_instances(&mut out);
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|i| i.kind == u32::from(ParticleKind::Energy)));
    }
}
