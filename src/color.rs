//! 8-bit colors.
//!
//! Particle colors are stored as integer channels; fading and jitter
//! truncate and clamp per channel.

use bytemuck::{Pod, Zeroable};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An opaque RGB color with 8-bit channels.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply each channel by `ratio`, truncating.
    ///
    /// Used to darken a particle toward black as it ages.
    pub fn scaled(self, ratio: f32) -> Self {
        let ratio = ratio.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * ratio) as u8,
            g: (self.g as f32 * ratio) as u8,
            b: (self.b as f32 * ratio) as u8,
        }
    }

    /// Push each channel toward white by `amount`, saturating at 255.
    pub fn brightened(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
        }
    }

    /// Offset each channel independently by a uniform integer in
    /// `[-spread, spread]`, clamped to `0..=255`.
    pub fn jittered<R: Rng + ?Sized>(self, rng: &mut R, spread: u8) -> Self {
        let spread = spread as i16;
        let mut channel = |c: u8| (c as i16 + rng.gen_range(-spread..=spread)).clamp(0, 255) as u8;
        Self {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }

    /// This color with the given alpha.
    pub fn with_alpha(self, a: u8) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }

    /// This color, fully opaque.
    pub fn opaque(self) -> Rgba {
        self.with_alpha(255)
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// A color with straight (non-premultiplied) alpha.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Normalized `[r, g, b, a]` in `0.0..=1.0`, as GPU vertex data expects.
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl From<Rgba> for image::Rgba<u8> {
    fn from(c: Rgba) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_scaled_truncates() {
        let c = Color::new(255, 101, 3).scaled(0.5);
        assert_eq!(c, Color::new(127, 50, 1));
        assert_eq!(Color::WHITE.scaled(0.0), Color::BLACK);
    }

    #[test]
    fn test_brightened_saturates() {
        let c = Color::new(230, 100, 0).brightened(50);
        assert_eq!(c, Color::new(255, 150, 50));
    }

    #[test]
    fn test_jitter_stays_in_spread() {
        let mut rng = SmallRng::seed_from_u64(7);
        let base = Color::new(128, 5, 250);
        for _ in 0..500 {
            let c = base.jittered(&mut rng, 20);
            assert!((108..=148).contains(&c.r));
            assert!(c.g <= 25);
            assert!(c.b >= 230);
        }
    }

    #[test]
    fn test_zero_jitter_is_identity() {
        let mut rng = SmallRng::seed_from_u64(1);
        let base = Color::new(10, 20, 30);
        assert_eq!(base.jittered(&mut rng, 0), base);
    }
}
