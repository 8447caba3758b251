// Line interpolation between two sampled pointer positions.
// One brush stamp per pixel of travel, so fast drags leave no gaps.

use crate::brush;
use crate::buffer::PixelBuffer;
use crate::types::{Color, Point};

/// Points along `start -> end`, one per unit of distance, both ends included.
///
/// A segment of length `d > 0` yields `ceil(d) + 1` points with
/// `t_k = min(k / d, 1)`; a zero-length segment yields `start` once.
pub fn samples(start: Point, end: Point) -> impl Iterator<Item = Point> {
    let distance = start.distance(end);
    let steps = if distance > 0.0 { distance.ceil() as u32 } else { 0 };

    (0..=steps).map(move |k| {
        if steps == 0 {
            start
        } else {
            start.lerp(end, (k as f32 / distance).min(1.0))
        }
    })
}

/// Stamp the brush at every interpolated point between `start` and `end`.
pub fn interpolate_and_paint(
    buf: &mut PixelBuffer,
    start: Point,
    end: Point,
    half_width: u32,
    color: Color,
    mask_color: Color,
) {
    for p in samples(start, end) {
        brush::dab(buf, p, half_width, color, mask_color);
    }
}
