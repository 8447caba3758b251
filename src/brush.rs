// Square brush stamp.
// The stamp covers offsets [-half_width, half_width) on both axes, so a
// half-width of 1 paints a 2x2 block up-left of the center and a half-width
// of 0 paints nothing.

use crate::buffer::PixelBuffer;
use crate::types::{Color, Point};
use serde::{Deserialize, Serialize};

/// What the UI controls: size, color, and mirroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub half_width: u32,
    pub color: Color,
    pub mirror: bool,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            half_width: 3,
            color: Color::rgb(220, 40, 40),
            mirror: false,
        }
    }
}

/// Largest half-width a config file may ask for.
pub const MAX_HALF_WIDTH: u32 = 4096;

/// Offsets in `[-hw, hw)` that can land inside `[0, extent]` from `c`.
fn offset_range(c: f32, extent: u32, hw: i64) -> std::ops::Range<i64> {
    let lo = (-hw).max(((-c).floor() as i64).saturating_sub(1));
    let hi = hw.min(((extent as f32 - c).ceil() as i64).saturating_add(1));
    lo..hi
}

/// Stamp the brush at `center` in `color`.
///
/// The bounds check is inclusive of `width`/`height`; those edge columns fall
/// through to the buffer, which drops them. Pixels already equal to
/// `mask_color` are never overwritten. Any `half_width` is accepted; the
/// stamp never walks further than the canvas.
pub fn dab(
    buf: &mut PixelBuffer,
    center: Point,
    half_width: u32,
    color: Color,
    mask_color: Color,
) {
    let hw = i64::from(half_width);
    let w = buf.width() as f32;
    let h = buf.height() as f32;

    for i in offset_range(center.x, buf.width(), hw) {
        let x = center.x + i as f32;
        if x > w || x < 0.0 {
            continue;
        }
        for j in offset_range(center.y, buf.height(), hw) {
            let y = center.y + j as f32;
            if y > h || y < 0.0 {
                continue;
            }

            let (px, py) = (x as i32, y as i32); // truncate; both are >= 0 here
            match buf.get(px, py) {
                Some(existing) if existing != mask_color => buf.set(px, py, color),
                _ => {} // masked or past the last column/row
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    fn painted(buf: &PixelBuffer, color: Color) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..buf.height() as i32 {
            for x in 0..buf.width() as i32 {
                if buf.get(x, y) == Some(color) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn half_width_one_paints_two_by_two() {
        let mut buf = PixelBuffer::new(10, 10, Color::WHITE).unwrap();
        dab(&mut buf, Point::new(5.0, 5.0), 1, RED, Color::BLACK);
        assert_eq!(painted(&buf, RED), vec![(4, 4), (5, 4), (4, 5), (5, 5)]);
    }

    #[test]
    fn half_width_zero_paints_nothing() {
        let mut buf = PixelBuffer::new(10, 10, Color::WHITE).unwrap();
        dab(&mut buf, Point::new(5.0, 5.0), 0, RED, Color::BLACK);
        assert!(painted(&buf, RED).is_empty());
    }

    #[test]
    fn masked_pixels_survive() {
        let mut buf = PixelBuffer::new(10, 10, Color::WHITE).unwrap();
        buf.set(4, 4, Color::BLACK);
        dab(&mut buf, Point::new(5.0, 5.0), 2, RED, Color::BLACK);
        assert_eq!(buf.get(4, 4), Some(Color::BLACK));
        assert_eq!(painted(&buf, RED).len(), 15);
    }

    #[test]
    fn clipped_at_edges() {
        let mut buf = PixelBuffer::new(10, 10, Color::WHITE).unwrap();
        dab(&mut buf, Point::new(0.0, 0.0), 2, RED, Color::BLACK);
        assert_eq!(painted(&buf, RED), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);

        // x == width passes the bounds check but lands nowhere, not on the next row
        let mut buf = PixelBuffer::new(10, 10, Color::WHITE).unwrap();
        dab(&mut buf, Point::new(11.0, 5.0), 1, RED, Color::BLACK);
        assert!(painted(&buf, RED).is_empty());
    }

    #[test]
    fn huge_half_width_covers_canvas() {
        for hw in [1u32 << 31, u32::MAX] {
            let mut buf = PixelBuffer::new(10, 10, Color::WHITE).unwrap();
            buf.set(2, 7, Color::BLACK);
            dab(&mut buf, Point::new(5.0, 5.0), hw, RED, Color::BLACK);
            assert_eq!(painted(&buf, RED).len(), 99);
            assert_eq!(buf.get(2, 7), Some(Color::BLACK));
        }
    }

    #[test]
    fn clamped_range_matches_full_range() {
        // a stamp wider than the canvas but small enough to walk in full
        let mut clamped = PixelBuffer::new(6, 4, Color::WHITE).unwrap();
        dab(&mut clamped, Point::new(1.5, 3.0), 40, RED, Color::BLACK);
        assert_eq!(painted(&clamped, RED).len(), 24);

        let mut edge = PixelBuffer::new(6, 4, Color::WHITE).unwrap();
        dab(&mut edge, Point::new(6.0, 4.0), 2, RED, Color::BLACK);
        assert_eq!(painted(&edge, RED), vec![(4, 2), (5, 2), (4, 3), (5, 3)]);
    }

    #[test]
    fn far_off_center_is_a_noop() {
        let mut buf = PixelBuffer::new(10, 10, Color::WHITE).unwrap();
        dab(&mut buf, Point::new(1e30, -1e30), u32::MAX, RED, Color::BLACK);
        dab(&mut buf, Point::new(-1e30, 1e30), u32::MAX, RED, Color::BLACK);
        assert!(painted(&buf, RED).is_empty());
    }

    #[test]
    fn fractional_center_truncates() {
        let mut buf = PixelBuffer::new(10, 10, Color::WHITE).unwrap();
        dab(&mut buf, Point::new(5.7, 5.2), 1, RED, Color::BLACK);
        assert_eq!(painted(&buf, RED), vec![(4, 4), (5, 4), (4, 5), (5, 5)]);
    }
}
