//! Mirror-symmetric pixel painting.
//!
//! The host feeds pointer samples into a [`StrokeSession`]; the session maps
//! them to canvas pixels, interpolates between samples, optionally replicates
//! the stroke across eight symmetry axes, and stamps a square brush into a
//! [`PixelBuffer`]. Guide lines painted in the mask color on reset can never
//! be painted over.

pub mod brush;
pub mod buffer;
pub mod config;
pub mod error;
pub mod mapper;
pub mod mask;
pub mod mirror;
pub mod session;
pub mod stroke;
pub mod types;

pub use crate::brush::BrushConfig;
pub use crate::buffer::PixelBuffer;
pub use crate::config::PainterConfig;
pub use crate::error::{Error, Result};
pub use crate::mapper::CanvasMapper;
pub use crate::session::{PointerSample, StrokeSession};
pub use crate::types::{Color, Pixel, Point};
