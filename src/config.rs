//! Startup configuration
//!
//! Settings are read once from a JSON file before the window opens. A
//! missing file falls back to [`GameConfig::default`], which reproduces the
//! stock game; a file that exists but fails to parse or validate stops
//! startup. Gameplay tuning (speeds, reward, cell size) is not configurable.

use crate::error::GameError;
use crate::scene::GameText;
use serde::{Deserialize, Serialize};
use sdl2::pixels::Color;
use std::path::Path;
use tracing::info;

/// Conventional location of the config file, relative to the working directory
pub const CONFIG_PATH: &str = "resources/config.json";

/// An opaque RGB colour as stored in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::RGB(rgb.r, rgb.g, rgb.b)
    }
}

// https://coolors.co/ffba49-ed254e-75b9be-a8c256-fffbbd
#[allow(dead_code)] // Part of the palette, no default card uses it
pub const ORANGE: Rgb = Rgb::new(255, 186, 73);
pub const RED: Rgb = Rgb::new(237, 37, 78);
pub const BLUE: Rgb = Rgb::new(117, 185, 190);
pub const GREEN: Rgb = Rgb::new(168, 194, 86);
pub const YELLOW: Rgb = Rgb::new(255, 251, 189);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Chikkin, for George".to_string(),
            width: 1024,
            height: 768,
            resizable: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub frames_per_second: u32,
    pub sprite_sheet: String,
    pub intro: Vec<GameText>,
    pub menu: GameText,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window: WindowConfig::default(),
            frames_per_second: 15,
            sprite_sheet: "resources/chick_24x24.png".to_string(),
            intro: vec![
                GameText::new("Chikkin", RED, BLUE),
                GameText::new("A game by Peter Mellett", YELLOW, RED),
                GameText::new("For G", BLUE, YELLOW),
            ],
            menu: GameText::new("Press the big red button", RED, GREEN),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Load the config file if present, otherwise use the built-in defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }

        let config = Self::load_from_file(path)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn validate(&self) -> Result<(), GameError> {
        if self.frames_per_second == 0 {
            return Err(GameError::Config("frames_per_second must be above zero".to_string()));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(GameError::Config(format!(
                "window size {}x{} is empty",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }
}
