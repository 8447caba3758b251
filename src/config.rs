//! Configuration handling for mandala-paint
//!
//! Canvas size and colors, the starting brush, and desktop shell settings.
//! Stored as TOML under the user's config directory.

use crate::brush::{BrushConfig, MAX_HALF_WIDTH};
use crate::error::{Error, Result};
use crate::types::Color;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    /// Guide line color. Pixels holding it can never be painted over.
    pub mask_color: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            background: Color::WHITE,
            mask_color: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Screen pixels per canvas pixel.
    pub scale: u32,
    /// Colors bound to the number keys 1-9.
    pub palette: Vec<Color>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            scale: 1,
            palette: vec![
                Color::rgb(220, 40, 40),
                Color::rgb(240, 140, 30),
                Color::rgb(240, 210, 40),
                Color::rgb(60, 170, 70),
                Color::rgb(40, 120, 220),
                Color::rgb(120, 60, 200),
                Color::rgb(230, 90, 170),
                Color::rgb(120, 120, 120),
                Color::rgb(1, 1, 1), // near-black; true black is the mask color
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PainterConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,

    #[serde(default)]
    pub brush: BrushConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

impl PainterConfig {
    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        let config_dir = if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("mandala-paint")
        } else {
            PathBuf::from(".config/mandala-paint")
        };

        config_dir.join("config.toml")
    }

    /// Load from the default location, writing defaults there if it doesn't exist yet
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::get_config_path();

        match fs::read_to_string(&config_path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let default_config = Self::default();
                default_config.save_to_path(&config_path)?;
                Ok(default_config)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load from an explicit path; a missing file is an error here
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }

    /// Reject settings the painter can't start with.
    pub fn validate(&self) -> Result<()> {
        let CanvasConfig { width, height, .. } = self.canvas;
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        if self.window.scale == 0 {
            return Err(Error::InvalidConfig("window.scale must be at least 1".into()));
        }
        if self.brush.half_width > MAX_HALF_WIDTH {
            return Err(Error::InvalidConfig(format!(
                "brush.half_width {} exceeds {}",
                self.brush.half_width, MAX_HALF_WIDTH
            )));
        }
        if self.brush.color == self.canvas.mask_color {
            log::warn!("brush color equals the mask color; strokes will become unpaintable");
        }
        Ok(())
    }
}
