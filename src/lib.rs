//! # Sparkfield - 2D particle effects for base-defense games
//!
//! Transient visual effects (sparks, explosions, smoke, energy, debris,
//! glow, trails) driven by gameplay events, simulated on the CPU one tick
//! at a time and drawn through a small [`Canvas`] trait.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sparkfield::prelude::*;
//!
//! let mut particles = ParticleSystem::new();
//! let mut canvas = ImageCanvas::new(800, 600);
//! let camera = Camera2D::new(0.0, 0.0, 1.0);
//! let mut time = Time::new();
//!
//! particles.add_explosion(400.0, 300.0, 1.0);
//! particles.add_laser_impact(200.0, 150.0, Color::new(0, 255, 255));
//!
//! loop {
//!     time.tick();
//!     particles.update(&time);
//!     particles.draw(&mut canvas, &camera);
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Particles
//!
//! A [`Particle`] carries position, velocity, remaining lifetime and its
//! visual state. Its [`ParticleKind`] picks the physics rule, fade curve and
//! draw routine. Lifetime is counted in ticks: one [`ParticleSystem::update`]
//! call is one tick, with no delta time.
//!
//! ### Spawning
//!
//! [`ParticleSystem::add_particles`] spawns a [`SpawnRequest`]: random
//! direction, speed, lifetime and size drawn from the request's ranges, and
//! a jittered color. Gameplay code usually calls the presets instead:
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`ParticleSystem::add_explosion`] | core, sparks, debris, smoke and glow |
//! | [`ParticleSystem::add_laser_impact`] | sparks and energy in the beam color |
//! | [`ParticleSystem::add_building_construction`] | blue energy and glow |
//! | [`ParticleSystem::add_engine_trail`] | three trail dots behind a ship |
//! | [`ParticleSystem::add_power_pulse`] | green energy |
//!
//! ### Capacity
//!
//! The system holds at most [`SystemConfig::max_particles`] particles
//! (1000 by default). A spawn that overflows evicts the oldest particles.
//!
//! ### Rendering
//!
//! [`ParticleSystem::draw`] projects each particle with a [`Camera2D`],
//! skips those outside the canvas plus a margin, and draws the rest. A
//! failing backend call never aborts the frame; the particle is drawn as a
//! plain circle instead. GPU hosts can use
//! [`ParticleSystem::write_instances`] and skip the canvas entirely.

pub mod camera;
pub mod canvas;
pub mod color;
pub mod config;
pub mod effects;
mod error;
pub mod instance;
mod kind;
mod particle;
mod spawn;
mod system;
pub mod time;

pub use bytemuck;
pub use camera::Camera2D;
pub use canvas::{Canvas, ImageCanvas};
pub use color::{Color, Rgba};
pub use config::SystemConfig;
pub use effects::Effect;
pub use error::{ConfigError, DrawError};
pub use glam::{IVec2, Vec2};
pub use instance::ParticleInstance;
pub use kind::ParticleKind;
pub use particle::{DrawOutcome, Particle, DEFAULT_CULL_MARGIN};
pub use spawn::SpawnRequest;
pub use system::{DrawStats, KindCounts, ParticleSystem};
pub use time::{Clock, FixedClock, Time};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use sparkfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::camera::Camera2D;
    pub use crate::canvas::{Canvas, ImageCanvas};
    pub use crate::color::{Color, Rgba};
    pub use crate::config::SystemConfig;
    pub use crate::effects::Effect;
    pub use crate::kind::ParticleKind;
    pub use crate::particle::Particle;
    pub use crate::spawn::SpawnRequest;
    pub use crate::system::{DrawStats, ParticleSystem};
    pub use crate::time::{Clock, FixedClock, Time};
    pub use crate::{IVec2, Vec2};
}
