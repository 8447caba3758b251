// Property tests for the painting invariants.

use mandala_paint::{BrushConfig, Color, Pixel, PixelBuffer, Point, StrokeSession, mirror, stroke};
use proptest::prelude::*;

const PEN: Color = Color::rgb(10, 200, 30);

proptest! {
    #[test]
    fn prop_mask_pixels_never_change(
        half_width in 0u32..6,
        mirrored in any::<bool>(),
        path in prop::collection::vec((0i32..=48, 0i32..=48), 1..12),
    ) {
        let brush = BrushConfig { half_width, color: PEN, mirror: mirrored };
        let mut session = StrokeSession::new(48, 48, Color::WHITE, Color::BLACK, brush).unwrap();
        let masked: Vec<usize> = session
            .display_buffer()
            .pixels()
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == Color::BLACK)
            .map(|(i, _)| i)
            .collect();

        for (x, y) in path {
            session.on_pixel_sample(Pixel::new(x, y));
        }
        for i in masked {
            prop_assert_eq!(session.display_buffer().get_index(i), Some(Color::BLACK));
        }
    }

    #[test]
    fn prop_reflect_identity_first(
        x in -500.0f32..500.0,
        y in -500.0f32..500.0,
        w in 1u32..400,
        h in 1u32..400,
    ) {
        let center = mirror::canvas_center(w, h);
        let p = Point::new(x, y);
        let out = mirror::reflect(p, center);
        prop_assert!((out[0].x - p.x).abs() < 1e-3);
        prop_assert!((out[0].y - p.y).abs() < 1e-3);
    }

    #[test]
    fn prop_reflections_keep_distance_to_center(x in 0.0f32..200.0, y in 0.0f32..200.0) {
        let center = mirror::canvas_center(200, 200);
        let p = Point::new(x, y);
        let r = p.distance(center);
        for v in mirror::reflect(p, center) {
            prop_assert!((v.distance(center) - r).abs() < 1e-2);
        }
    }

    #[test]
    fn prop_sample_count_is_ceil_distance_plus_one(
        x0 in 0i32..100, y0 in 0i32..100, x1 in 0i32..100, y1 in 0i32..100,
    ) {
        let (a, b) = (Point::new(x0 as f32, y0 as f32), Point::new(x1 as f32, y1 as f32));
        let d = a.distance(b);
        let pts: Vec<Point> = stroke::samples(a, b).collect();
        prop_assert_eq!(pts.len(), d.ceil() as usize + 1);
        prop_assert_eq!(pts[0], a);
        prop_assert_eq!(*pts.last().unwrap(), b);
    }

    #[test]
    fn prop_stroke_paints_endpoints(
        x0 in 1i32..31, y0 in 1i32..31, x1 in 1i32..31, y1 in 1i32..31,
    ) {
        let mut buf = PixelBuffer::new(32, 32, Color::WHITE).unwrap();
        let (a, b) = (Point::new(x0 as f32, y0 as f32), Point::new(x1 as f32, y1 as f32));
        stroke::interpolate_and_paint(&mut buf, a, b, 1, PEN, Color::BLACK);
        prop_assert_eq!(buf.get(x0, y0), Some(PEN));
        prop_assert_eq!(buf.get(x1, y1), Some(PEN));
    }

    #[test]
    fn prop_out_of_canvas_samples_do_nothing(x in -100i32..-1, y in 0i32..40) {
        let brush = BrushConfig::default();
        let mut session = StrokeSession::new(40, 40, Color::WHITE, Color::BLACK, brush).unwrap();
        let before = session.snapshot();
        let generation = session.generation();
        prop_assert!(!session.on_pixel_sample(Pixel::new(x, y)));
        prop_assert!(!session.on_pixel_sample(Pixel::new(y, 41 - x)));
        prop_assert_eq!(session.display_buffer(), &before);
        prop_assert_eq!(session.generation(), generation);
    }
}
