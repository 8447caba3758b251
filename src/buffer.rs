// The raster being painted: a flat row-major Vec of colors, index = y * width + x.
// Width and height are fixed for the life of the buffer.

use crate::error::{Error, Result};
use crate::types::Color;
use image::RgbImage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    colors: Vec<Color>,
}

impl PixelBuffer {
    /// Allocate a `width` x `height` buffer filled with `fill`.
    /// Zero-sized canvases are rejected here so painting never has to check.
    pub fn new(width: u32, height: u32, fill: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            colors: vec![fill; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn pixels(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Color at (x,y), or `None` outside the raster.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index_of(x, y).map(|i| self.colors[i])
    }

    /// Overwrite (x,y). Out-of-range writes are silently dropped.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index_of(x, y) {
            self.colors[i] = color;
        }
    }

    #[inline]
    pub fn get_index(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    #[inline]
    pub fn set_index(&mut self, index: usize, color: Color) {
        if let Some(c) = self.colors.get_mut(index) {
            *c = color;
        }
    }

    /// Bulk overwrite with a full frame of colors.
    pub fn replace_all(&mut self, colors: &[Color]) -> Result<()> {
        if colors.len() != self.colors.len() {
            return Err(Error::BufferLength {
                expected: self.colors.len(),
                actual: colors.len(),
            });
        }
        self.colors.copy_from_slice(colors);
        Ok(())
    }

    pub fn fill(&mut self, color: Color) {
        self.colors.fill(color);
    }

    /// Map every pixel through `f` in place.
    pub fn apply(&mut self, mut f: impl FnMut(Color) -> Color) {
        for c in &mut self.colors {
            *c = f(*c);
        }
    }

    /// Pack into a minifb frame (0x00RRGGBB per pixel), reusing `out`'s allocation.
    pub fn to_u32_frame(&self, out: &mut Vec<u32>) {
        out.clear();
        out.extend(self.colors.iter().map(|c| c.to_u32()));
    }

    /// Copy out as an `image` RGB buffer for backends that speak `image`.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            self.colors[y as usize * self.width as usize + x as usize].into()
        })
    }
}
