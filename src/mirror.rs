// Eight-way kaleidoscope symmetry about the canvas center.
// Index i of the result is always the same symmetry operation, so the
// reflections of two points can be paired up by index into eight strokes.

use crate::types::Point;

pub const MIRROR_COUNT: usize = 8;

/// Center of a `width` x `height` canvas (may be a half pixel).
pub fn canvas_center(width: u32, height: u32) -> Point {
    Point::new(width as f32 / 2.0, height as f32 / 2.0)
}

/// The eight images of `point` under 4-fold rotation and reflection.
/// Element 0 is `point` itself.
pub fn reflect(point: Point, center: Point) -> [Point; MIRROR_COUNT] {
    let p = point - center;

    let x_flag = if p.x >= 0.0 { 1.0 } else { -1.0 };
    let y_flag = if p.y >= 0.0 { 1.0 } else { -1.0 };

    let v1 = Point::new(x_flag * p.y.abs(), y_flag * p.x.abs());
    let v2 = Point::new(p.x, -p.y);
    let v3 = Point::new(v1.x, -v1.y);
    let v4 = Point::new(-p.x, p.y);
    let v5 = Point::new(-v1.x, v1.y);
    let v6 = Point::new(-v2.x, v2.y);
    let v7 = Point::new(-v3.x, v3.y);

    [p, v1, v2, v3, v4, v5, v6, v7].map(|v| v + center)
}
