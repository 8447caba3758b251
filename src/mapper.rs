// Device (screen) position -> integer canvas pixel.
// Pure math: no clamping, out-of-canvas pixels are returned as-is and the
// stroke session decides what to ignore.

use crate::types::{Pixel, Point};

/// How the canvas sits on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMapper {
    /// Device-space position of the canvas center.
    pub anchor: Point,
    /// Device pixels per world unit (the camera's zoom).
    pub device_per_unit: f32,
    /// Canvas width in world units at scale 1.
    pub world_width: f32,
    /// Canvas scale factor in world space.
    pub scale: f32,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

impl CanvasMapper {
    /// Canvas shown with its top-left corner at the device origin, each canvas
    /// pixel covering `zoom` x `zoom` device pixels.
    pub fn fit(pixel_width: u32, pixel_height: u32, zoom: f32) -> Self {
        Self {
            anchor: Point::new(
                pixel_width as f32 * zoom / 2.0,
                pixel_height as f32 * zoom / 2.0,
            ),
            device_per_unit: zoom,
            world_width: pixel_width as f32,
            scale: 1.0,
            pixel_width,
            pixel_height,
        }
    }

    /// Map a device position to the nearest pixel (ties to even).
    pub fn map(&self, device: Point) -> Pixel {
        let local = Point::new(
            (device.x - self.anchor.x) / self.device_per_unit / self.scale,
            (device.y - self.anchor.y) / self.device_per_unit / self.scale,
        );
        let units_to_pixels = self.pixel_width as f32 / self.world_width * self.scale;

        let centered_x = local.x * units_to_pixels + self.pixel_width as f32 / 2.0;
        let centered_y = local.y * units_to_pixels + self.pixel_height as f32 / 2.0;

        Pixel::new(
            centered_x.round_ties_even() as i32,
            centered_y.round_ties_even() as i32,
        )
    }
}
