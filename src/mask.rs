// Guide lines drawn in the mask color when the canvas is reset.
// Both diagonals plus the two centerlines: an X laid over a +.
// Once a pixel holds the mask color the brush will never touch it again.
// The guides are stamped with whatever brush size is current at reset time.

use crate::buffer::PixelBuffer;
use crate::stroke;
use crate::types::{Color, Point};

/// The four guide segments for a `width` x `height` canvas.
pub fn guide_segments(width: u32, height: u32) -> [(Point, Point); 4] {
    let (w, h) = (width as f32, height as f32);
    [
        (Point::new(0.0, 0.0), Point::new(w, h)),
        (Point::new(w, 0.0), Point::new(0.0, h)),
        (Point::new(w / 2.0, 0.0), Point::new(w / 2.0, h)),
        (Point::new(0.0, h / 2.0), Point::new(w, h / 2.0)),
    ]
}

/// Paint the guides into `buf`.
pub fn paint(buf: &mut PixelBuffer, half_width: u32, mask_color: Color) {
    for (start, end) in guide_segments(buf.width(), buf.height()) {
        stroke::interpolate_and_paint(buf, start, end, half_width, mask_color, mask_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_x_and_cross_not_a_border() {
        let mut buf = PixelBuffer::new(20, 20, Color::WHITE).unwrap();
        paint(&mut buf, 1, Color::BLACK);

        // centerlines
        assert_eq!(buf.get(9, 3), Some(Color::BLACK));
        assert_eq!(buf.get(3, 9), Some(Color::BLACK));
        // diagonals
        assert_eq!(buf.get(5, 5), Some(Color::BLACK));
        assert_eq!(buf.get(14, 5), Some(Color::BLACK));
        // edge midway between guides stays clear
        assert_eq!(buf.get(5, 0), Some(Color::WHITE));
        assert_eq!(buf.get(19, 14), Some(Color::WHITE));
    }
}
