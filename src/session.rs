// The stroke state machine.
// Each pointer sample runs to completion: map -> (mirror) -> interpolate ->
// stamp -> commit. The display side only ever reads a committed buffer.

use crate::brush::{self, BrushConfig};
use crate::buffer::PixelBuffer;
use crate::config::PainterConfig;
use crate::error::Result;
use crate::mapper::CanvasMapper;
use crate::mask;
use crate::mirror;
use crate::stroke;
use crate::types::{Color, Pixel, Point};
use log::{debug, trace};

/// One pointer event as delivered by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    /// Device-space position.
    pub position: Point,
    /// Button is pressed or held this sample.
    pub down: bool,
    /// Button was released this sample.
    pub up: bool,
    /// A widget or overlay owns the pointer; the sample is dropped entirely.
    pub over_ui: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PointerState {
    first_sample: bool,
    previous: Pixel,
    current: Pixel,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            first_sample: true,
            previous: Pixel::default(),
            current: Pixel::default(),
        }
    }
}

pub struct StrokeSession {
    buffer: PixelBuffer,
    background: Color,
    mask_color: Color,
    brush: BrushConfig,
    pointer: PointerState,
    generation: u64,
}

impl StrokeSession {
    /// Create a canvas and paint its guides. Fails on a zero dimension.
    pub fn new(
        width: u32,
        height: u32,
        background: Color,
        mask_color: Color,
        brush: BrushConfig,
    ) -> Result<Self> {
        let buffer = PixelBuffer::new(width, height, background)?;
        let mut session = Self {
            buffer,
            background,
            mask_color,
            brush,
            pointer: PointerState::default(),
            generation: 0,
        };
        session.reset_canvas();
        Ok(session)
    }

    pub fn from_config(config: &PainterConfig) -> Result<Self> {
        config.validate()?;
        Self::new(
            config.canvas.width,
            config.canvas.height,
            config.canvas.background,
            config.canvas.mask_color,
            config.brush,
        )
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn mask_color(&self) -> Color {
        self.mask_color
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn brush(&self) -> BrushConfig {
        self.brush
    }

    pub fn is_dragging(&self) -> bool {
        !self.pointer.first_sample
    }

    pub fn set_brush_width(&mut self, half_width: u32) {
        debug!("brush half-width {} -> {}", self.brush.half_width, half_width);
        self.brush.half_width = half_width;
    }

    pub fn set_pen_color(&mut self, color: Color) {
        if color == self.mask_color {
            // Allowed, but everything painted with it becomes unpaintable.
            debug!("pen color {:?} equals the mask color", color);
        } else {
            debug!("pen color {:?}", color);
        }
        self.brush.color = color;
    }

    pub fn set_mirror_mode(&mut self, enabled: bool) {
        debug!("mirror mode {}", if enabled { "on" } else { "off" });
        self.brush.mirror = enabled;
    }

    /// Clear to the background, redraw the guides, and drop any stroke in progress.
    pub fn reset_canvas(&mut self) {
        debug!(
            "resetting {}x{} canvas",
            self.buffer.width(),
            self.buffer.height()
        );
        self.buffer.fill(self.background);
        mask::paint(&mut self.buffer, self.brush.half_width, self.mask_color);
        self.pointer = PointerState::default();
        self.commit();
    }

    /// Feed a raw pointer sample. Returns true if the buffer was committed.
    pub fn on_pointer_sample(&mut self, mapper: &CanvasMapper, sample: PointerSample) -> bool {
        if sample.over_ui {
            return false;
        }

        let mut committed = false;
        if sample.down {
            committed = self.on_pixel_sample(mapper.map(sample.position));
        }
        if sample.up {
            self.release();
        }
        committed
    }

    /// Feed a pressed/held sample already mapped to canvas pixels.
    /// Samples outside `[0,W]x[0,H]` are ignored without touching the stroke state.
    pub fn on_pixel_sample(&mut self, pixel: Pixel) -> bool {
        let (w, h) = (self.buffer.width() as i32, self.buffer.height() as i32);
        if pixel.x < 0 || pixel.y < 0 || pixel.x > w || pixel.y > h {
            return false;
        }

        if self.pointer.first_sample {
            debug!("stroke start at ({}, {})", pixel.x, pixel.y);
            self.pointer.previous = pixel;
            self.pointer.current = pixel;
            self.tap(pixel.to_point());
            self.commit();
            self.pointer.first_sample = false;
        } else {
            self.pointer.current = pixel;
            self.drag(self.pointer.previous.to_point(), pixel.to_point());
            self.commit();
            self.pointer.previous = pixel;
        }
        true
    }

    /// Pointer released: the next sample starts a fresh stroke.
    pub fn release(&mut self) {
        if !self.pointer.first_sample {
            debug!(
                "stroke end at ({}, {})",
                self.pointer.current.x, self.pointer.current.y
            );
        }
        self.pointer.first_sample = true;
    }

    fn tap(&mut self, at: Point) {
        let BrushConfig {
            half_width,
            color,
            mirror: mirrored,
        } = self.brush;

        if mirrored {
            let center = mirror::canvas_center(self.buffer.width(), self.buffer.height());
            for v in mirror::reflect(at, center) {
                brush::dab(&mut self.buffer, v, half_width, color, self.mask_color);
            }
        } else {
            brush::dab(&mut self.buffer, at, half_width, color, self.mask_color);
        }
    }

    fn drag(&mut self, from: Point, to: Point) {
        let BrushConfig {
            half_width,
            color,
            mirror: mirrored,
        } = self.brush;

        if mirrored {
            let center = mirror::canvas_center(self.buffer.width(), self.buffer.height());
            let starts = mirror::reflect(from, center);
            let ends = mirror::reflect(to, center);
            for (s, e) in starts.into_iter().zip(ends) {
                stroke::interpolate_and_paint(
                    &mut self.buffer,
                    s,
                    e,
                    half_width,
                    color,
                    self.mask_color,
                );
            }
        } else {
            stroke::interpolate_and_paint(
                &mut self.buffer,
                from,
                to,
                half_width,
                color,
                self.mask_color,
            );
        }
    }

    fn commit(&mut self) {
        self.generation += 1;
        trace!("commit generation {}", self.generation);
    }

    /// Bumped after every committed mutation; hosts can skip redraws when unchanged.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The committed buffer, for hosts that render synchronously.
    pub fn display_buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Owned copy for hosts that render on another thread.
    pub fn snapshot(&self) -> PixelBuffer {
        self.buffer.clone()
    }
}
