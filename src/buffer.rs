use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::{error::RenderError, material::Color};

/// Convert a channel value to 8 bits. Values are scaled by 255 and truncated;
/// anything above 1 wraps around rather than saturating.
pub fn to_channel(v: f64) -> u8 {
    (v * 255.) as i64 as u8
}

/// Square per-channel grids of floating point values, indexed by
/// (column, row) with row 0 at the top.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    size: u32,
    r: Vec<f64>,
    g: Vec<f64>,
    b: Vec<f64>,
    a: Vec<f64>,
}

impl PixelBuffer {
    /// A buffer with every color and alpha value at zero.
    pub fn new(size: u32) -> Self {
        let len = size as usize * size as usize;
        Self {
            size,
            r: vec![0.; len],
            g: vec![0.; len],
            b: vec![0.; len],
            a: vec![0.; len],
        }
    }

    /// Build a buffer from one entry per pixel in row-major order. `None`
    /// leaves the pixel transparent black.
    pub fn from_pixels(size: u32, pixels: Vec<Option<Color>>) -> Self {
        debug_assert_eq!(pixels.len(), size as usize * size as usize);

        let mut buffer = Self::new(size);
        let width = size.max(1) as usize;
        for (idx, pixel) in pixels.into_iter().enumerate() {
            if let Some(color) = pixel {
                buffer.set((idx % width) as u32, (idx / width) as u32, color);
            }
        }
        buffer
    }

    fn index(&self, i: u32, j: u32) -> usize {
        assert!(
            i < self.size && j < self.size,
            "pixel ({}, {}) outside a {}x{} buffer",
            i,
            j,
            self.size,
            self.size
        );
        j as usize * self.size as usize + i as usize
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Mark pixel (i, j) as hit with the given color.
    pub fn set(&mut self, i: u32, j: u32, color: Color) {
        let idx = self.index(i, j);
        self.r[idx] = color.r;
        self.g[idx] = color.g;
        self.b[idx] = color.b;
        self.a[idx] = 1.;
    }

    pub fn color(&self, i: u32, j: u32) -> Color {
        let idx = self.index(i, j);
        Color::new(self.r[idx], self.g[idx], self.b[idx])
    }

    pub fn alpha(&self, i: u32, j: u32) -> f64 {
        self.a[self.index(i, j)]
    }

    /// Number of pixels with alpha 1.
    pub fn hits(&self) -> usize {
        self.a.iter().filter(|&&a| a == 1.).count()
    }

    /// Encode as an 8-bit RGBA image.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.size, self.size, |x, y| {
            let idx = self.index(x, y);
            Rgba([
                to_channel(self.r[idx]),
                to_channel(self.g[idx]),
                to_channel(self.b[idx]),
                to_channel(self.a[idx]),
            ])
        })
    }

    /// Write the buffer out as a PNG file.
    pub fn save(&self, path: &Path) -> Result<(), RenderError> {
        self.to_image().save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{to_channel, PixelBuffer};
    use crate::material::Color;

    #[test]
    fn channel_conversion_truncates_and_wraps() {
        assert_eq!(to_channel(0.), 0);
        assert_eq!(to_channel(1.), 255);
        assert_eq!(to_channel(0.5), 127);
        // 1.1 * 255 = 280.5, 280 mod 256 = 24
        assert_eq!(to_channel(1.1), 24);
    }

    #[test]
    fn set_marks_alpha_and_color() {
        let mut buffer = PixelBuffer::new(4);
        buffer.set(3, 1, Color::new(0.25, 0.5, 1.));

        assert_eq!(buffer.alpha(3, 1), 1.);
        assert_eq!(buffer.color(3, 1), Color::new(0.25, 0.5, 1.));
        assert_eq!(buffer.alpha(1, 3), 0.);
        assert_eq!(buffer.hits(), 1);
    }

    #[test]
    fn image_is_indexed_by_column_then_row() {
        let mut pixels = vec![None; 9];
        // row 0, column 2
        pixels[2] = Some(Color::gray(1.));
        let buffer = PixelBuffer::from_pixels(3, pixels);

        let image = buffer.to_image();
        assert_eq!(image.dimensions(), (3, 3));
        assert_eq!(image.get_pixel(2, 0).0, [255, 255, 255, 255]);
        assert_eq!(image.get_pixel(0, 2).0, [0, 0, 0, 0]);
    }
}
