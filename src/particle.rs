//! A single transient particle.
//!
//! A particle owns its full kinematic and visual state. It advances one
//! tick per [`Particle::update`] call and draws itself through a
//! [`Canvas`] given a [`Camera2D`].
//!
//! Particles are only created by [`ParticleSystem`](crate::ParticleSystem)
//! spawns and are read-only from outside the crate.

use crate::camera::Camera2D;
use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::DrawError;
use crate::kind::ParticleKind;
use glam::{IVec2, Vec2};

/// Projected particles outside the canvas by more than this many pixels
/// are not drawn.
pub const DEFAULT_CULL_MARGIN: f32 = 50.0;

/// Channel offset added to explosion cores.
const EXPLOSION_CORE_BOOST: u8 = 50;

/// Upward drift applied to smoke each tick.
const SMOKE_BUOYANCY: f32 = 0.02;

/// Size gained by smoke each tick.
const SMOKE_EXPANSION: f32 = 0.05;

/// What happened when a particle was asked to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Drawn with the kind's routine.
    Drawn,
    /// Projected outside the canvas margin; nothing was sent to the backend.
    Culled,
    /// The backend failed and a single fallback circle was attempted.
    Fallback,
}

/// One visual effect instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    /// Remaining ticks.
    lifetime: u32,
    max_lifetime: u32,
    life_ratio: f32,
    size: f32,
    original_size: f32,
    color: Color,
    original_color: Color,
    alpha: u8,
    /// Only meaningful for glow particles.
    glow_radius: f32,
    pulse_phase: f32,
    kind: ParticleKind,
    gravity: f32,
    friction: f32,
}

impl Particle {
    pub(crate) fn new(
        kind: ParticleKind,
        position: Vec2,
        velocity: Vec2,
        lifetime: u32,
        size: f32,
        color: Color,
        pulse_phase: f32,
    ) -> Self {
        let glow_radius = match kind {
            ParticleKind::Glow => size * 3.0,
            _ => 0.0,
        };
        Self {
            position,
            velocity,
            lifetime,
            max_lifetime: lifetime.max(1),
            life_ratio: if lifetime > 0 { 1.0 } else { 0.0 },
            size,
            original_size: size,
            color,
            original_color: color,
            alpha: kind.alpha(if lifetime > 0 { 1.0 } else { 0.0 }),
            glow_radius,
            pulse_phase,
            kind,
            gravity: kind.gravity(),
            friction: kind.friction(),
        }
    }

    /// Advance one tick.
    ///
    /// `now_ms` drives the pulse animation of energy and glow particles.
    /// Returns `true` while the particle is still alive.
    pub fn update(&mut self, now_ms: f64) -> bool {
        self.position += self.velocity;

        match self.kind {
            ParticleKind::Smoke => {
                self.velocity.y -= SMOKE_BUOYANCY;
                self.velocity *= self.friction;
                self.size += SMOKE_EXPANSION;
            }
            ParticleKind::Explosion => {
                self.velocity *= 0.9;
                self.velocity.y += self.gravity * 0.5;
            }
            ParticleKind::Debris => {
                self.velocity.y += self.gravity;
                self.velocity.x *= self.friction;
            }
            ParticleKind::Energy => {
                let pulse = (self.pulse_phase as f64 + now_ms * 0.01).sin() as f32;
                self.size = self.original_size * (pulse * 0.2 + 0.8);
                self.velocity *= 0.96;
            }
            ParticleKind::Glow => {
                let pulse = (self.pulse_phase as f64 + now_ms * 0.005).sin() as f32;
                self.glow_radius = self.original_size * 3.0 * (pulse * 0.3 + 0.7);
                self.velocity *= 0.98;
            }
            ParticleKind::Trail => {
                self.velocity *= 0.95;
            }
            ParticleKind::Spark => {}
        }

        self.lifetime = self.lifetime.saturating_sub(1);
        self.life_ratio = self.lifetime as f32 / self.max_lifetime as f32;
        self.alpha = self.kind.alpha(self.life_ratio);
        self.color = self.original_color.scaled(self.life_ratio);

        self.lifetime > 0
    }

    /// Draw with the default cull margin.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, camera: &Camera2D) -> DrawOutcome {
        self.draw_with_margin(canvas, camera, DEFAULT_CULL_MARGIN)
    }

    /// Project and draw this particle.
    ///
    /// Backend failures never escape: the particle falls back to a single
    /// opaque circle, and a failure of that is ignored too.
    pub fn draw_with_margin<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        camera: &Camera2D,
        cull_margin: f32,
    ) -> DrawOutcome {
        let (width, height) = canvas.size();
        if !camera.is_visible(self.position, cull_margin, (width, height)) {
            return DrawOutcome::Culled;
        }

        // Nothing wider than the margin-grown canvas can be seen
        let max_radius = width as f32 + height as f32 + cull_margin;
        let center = camera.world_to_screen(self.position).as_ivec2();
        let radius = screen_radius(self.size * camera.zoom, max_radius);

        match self.try_draw(canvas, center, radius, camera.zoom, max_radius) {
            Ok(()) => DrawOutcome::Drawn,
            Err(err) => {
                log::trace!("{} particle at {center} fell back: {err}", self.kind);
                if let Err(err) = canvas.fill_circle(center, radius, self.color.opaque()) {
                    log::trace!("fallback draw failed: {err}");
                }
                DrawOutcome::Fallback
            }
        }
    }

    fn try_draw<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        center: IVec2,
        radius: i32,
        zoom: f32,
        max_radius: f32,
    ) -> Result<(), DrawError> {
        match self.kind {
            ParticleKind::Glow => {
                // Radial gradient: fainter toward the rim
                let outer = (self.glow_radius * zoom).min(max_radius) as i32;
                for r in (1..=outer).rev().step_by(2) {
                    let falloff = 1.0 - r as f32 / outer as f32;
                    let alpha = (self.alpha as f32 * falloff * 0.3) as u8;
                    canvas.fill_circle(center, r, self.color.with_alpha(alpha))?;
                }
            }
            ParticleKind::Energy => {
                canvas.fill_circle(
                    center,
                    radius.saturating_mul(2),
                    self.color.with_alpha(self.alpha / 4),
                )?;
                canvas.fill_circle(center, radius, self.color.opaque())?;
            }
            ParticleKind::Smoke => {
                canvas.fill_circle(center, radius, self.color.with_alpha(self.alpha))?;
            }
            ParticleKind::Explosion => {
                if radius > 2 {
                    canvas.fill_circle(
                        center,
                        radius.saturating_add(radius / 2),
                        self.color.with_alpha(self.alpha / 3),
                    )?;
                }
                let core = self.color.brightened(EXPLOSION_CORE_BOOST);
                canvas.fill_circle(center, radius, core.opaque())?;
            }
            ParticleKind::Spark | ParticleKind::Debris | ParticleKind::Trail => {
                if radius >= 2 {
                    canvas.fill_circle(center, radius, self.color.opaque())?;
                } else {
                    canvas.set_pixel(center, self.color.opaque())?;
                }
            }
        }
        Ok(())
    }

    #[inline]
    pub fn kind(&self) -> ParticleKind {
        self.kind
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Remaining ticks.
    #[inline]
    pub fn lifetime(&self) -> u32 {
        self.lifetime
    }

    #[inline]
    pub fn max_lifetime(&self) -> u32 {
        self.max_lifetime
    }

    /// `lifetime / max_lifetime`, in `0.0..=1.0`.
    #[inline]
    pub fn life_ratio(&self) -> f32 {
        self.life_ratio
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.lifetime > 0
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn original_size(&self) -> f32 {
        self.original_size
    }

    /// Current color, darkened by age.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn original_color(&self) -> Color {
        self.original_color
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    #[inline]
    pub fn glow_radius(&self) -> f32 {
        self.glow_radius
    }

    #[inline]
    pub fn pulse_phase(&self) -> f32 {
        self.pulse_phase
    }

    #[inline]
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    #[inline]
    pub fn friction(&self) -> f32 {
        self.friction
    }
}

/// On-screen radius in whole pixels, at least 1 and at most `max_radius`.
///
/// Halves round to even.
fn screen_radius(scaled_size: f32, max_radius: f32) -> i32 {
    let radius = scaled_size.round_ties_even().min(max_radius) as i32;
    radius.max(1)
}
