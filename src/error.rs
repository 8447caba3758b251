// One error type for the whole crate.
// Painting itself never fails; only setup (canvas size, config, window) does.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Canvas must be at least 1x1.
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Bulk replace given the wrong number of pixels.
    #[error("pixel count mismatch: expected {expected}, got {actual}")]
    BufferLength { expected: usize, actual: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("window init error: {0}")]
    WindowInit(String),

    #[error("window update error: {0}")]
    WindowUpdate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
