//! Drawing surfaces.
//!
//! Particles draw through the [`Canvas`] trait, which is the only thing a
//! rendering backend has to provide: filled circles, single pixels, and
//! alpha-blended compositing of translucent colors.
//!
//! [`ImageCanvas`] is a software implementation over an
//! [`image::RgbaImage`], used by the demo binary and by tests.

use crate::color::Rgba;
use crate::error::DrawError;
use glam::IVec2;
use image::{ImageFormat, RgbaImage};
use std::path::Path;

/// A 2D drawing target.
///
/// Colors with `a < 255` must be composited over the existing contents
/// (source-over). Opaque colors replace them.
pub trait Canvas {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    /// Fill a circle centered at `center`. Parts outside the canvas are clipped.
    fn fill_circle(&mut self, center: IVec2, radius: i32, color: Rgba) -> Result<(), DrawError>;

    /// Write a single pixel.
    fn set_pixel(&mut self, position: IVec2, color: Rgba) -> Result<(), DrawError>;
}

/// Software canvas backed by an RGBA image.
#[derive(Debug, Clone)]
pub struct ImageCanvas {
    image: RgbaImage,
}

impl ImageCanvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Color at a pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Rgba::new(p[0], p[1], p[2], p[3]))
    }

    /// Overwrite every pixel with `color`.
    pub fn clear(&mut self, color: Rgba) {
        let fill: image::Rgba<u8> = color.into();
        for pixel in self.image.pixels_mut() {
            *pixel = fill;
        }
    }

    /// Write the canvas to a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        self.image.save_with_format(path, ImageFormat::Png)
    }

    fn blend(&mut self, x: u32, y: u32, color: Rgba) {
        let dst = self.image.get_pixel_mut(x, y);
        if color.is_opaque() {
            *dst = color.into();
            return;
        }
        if color.a == 0 {
            return;
        }

        let a = color.a as u32;
        let inv = 255 - a;
        for (d, s) in dst.0[..3].iter_mut().zip([color.r, color.g, color.b]) {
            *d = ((s as u32 * a + *d as u32 * inv + 127) / 255) as u8;
        }
        dst.0[3] = (a + dst.0[3] as u32 * inv / 255) as u8;
    }
}

impl Canvas for ImageCanvas {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill_circle(&mut self, center: IVec2, radius: i32, color: Rgba) -> Result<(), DrawError> {
        if radius < 0 {
            return Err(DrawError::InvalidRadius(radius));
        }

        let (width, height) = self.size();
        let (cx, cy, r) = (center.x as i64, center.y as i64, radius as i64);
        let x0 = (cx - r).max(0);
        let x1 = (cx + r).min(width as i64 - 1);
        let y0 = (cy - r).max(0);
        let y1 = (cy + r).min(height as i64 - 1);
        let r2 = r * r;

        for y in y0..=y1 {
            let dy = y - cy;
            for x in x0..=x1 {
                let dx = x - cx;
                if (dx * dx).saturating_add(dy * dy) <= r2 {
                    self.blend(x as u32, y as u32, color);
                }
            }
        }
        Ok(())
    }

    fn set_pixel(&mut self, position: IVec2, color: Rgba) -> Result<(), DrawError> {
        let (width, height) = self.size();
        if position.x < 0
            || position.y < 0
            || position.x >= width as i32
            || position.y >= height as i32
        {
            return Err(DrawError::OutOfBounds {
                x: position.x,
                y: position.y,
            });
        }
        self.blend(position.x as u32, position.y as u32, color);
        Ok(())
    }
}
