// Desktop window for the painter shell.
// The canvas itself never sees minifb: main.rs copies the committed buffer
// into a window frame here, adds the cursor overlay, and presents it.

use mandala_paint::{Error, PixelBuffer};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,
    width: usize,
    height: usize,
}

impl Drawer {
    /// Open a window of `width` x `height` screen pixels.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self {
            window,
            width,
            height,
        })
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Push a full window frame (0x00RRGGBB) to the screen.
    pub fn present(&mut self, frame: &[u32]) -> Result<(), Error> {
        self.window
            .update_with_buffer(frame, self.width, self.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    pub fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    /// Mouse position in window pixels, unclamped so drags can leave the canvas.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Pass)
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.window.is_key_down(key)
    }

    pub fn pressed_once(&self, key: Key) -> bool {
        self.window.is_key_pressed(key, KeyRepeat::No)
    }

    pub fn pressed_repeat(&self, key: Key) -> bool {
        self.window.is_key_pressed(key, KeyRepeat::Yes)
    }
}

/// Nearest-neighbour upscale of the canvas into a window frame.
pub fn blit_scaled(canvas: &PixelBuffer, scale: usize, frame: &mut Vec<u32>) {
    let (cw, ch) = (canvas.width() as usize, canvas.height() as usize);
    let fw = cw * scale;
    frame.clear();
    frame.resize(fw * ch * scale, 0);

    for (y, row) in canvas.pixels().chunks_exact(cw).enumerate() {
        for (x, color) in row.iter().enumerate() {
            let px = color.to_u32();
            for sy in 0..scale {
                let start = (y * scale + sy) * fw + x * scale;
                frame[start..start + scale].fill(px);
            }
        }
    }
}

#[inline]
fn put_pixel(frame: &mut [u32], width: usize, height: usize, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= width || y >= height {
        return;
    }
    frame[y * width + x] = color;
}

/// Bresenham line, 1 pixel wide.
fn draw_line(
    frame: &mut [u32],
    (width, height): (usize, usize),
    (mut x0, mut y0): (i32, i32),
    (x1, y1): (i32, i32),
    color: u32,
) {
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(frame, width, height, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Outline of the square the brush will cover, drawn over the window frame only.
/// Covers `[cx - half, cx + half)` on both axes, matching the stamp.
pub fn draw_brush_outline(
    frame: &mut [u32],
    size: (usize, usize),
    (cx, cy): (i32, i32),
    half: i32,
    color: u32,
) {
    let half = half.max(1);
    let (l, t, r, b) = (cx - half, cy - half, cx + half - 1, cy + half - 1);
    draw_line(frame, size, (l, t), (r, t), color);
    draw_line(frame, size, (r, t), (r, b), color);
    draw_line(frame, size, (r, b), (l, b), color);
    draw_line(frame, size, (l, b), (l, t), color);
}
