use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::tools::Tool;

/// Largest grid the editor accepts from configuration or the size slider.
pub const MAX_GRID_SIZE: usize = 256;

/// Errors that can occur while loading editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Settings supplied to the editor by its host.
///
/// We derive Deserialize/Serialize so the settings can be loaded from a file
/// and persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorConfig {
    pub grid_size: usize,
    pub active_color: Color,
    pub active_tool: Tool,
    pub show_grid_lines: bool,
    /// Side length of the square drawing surface, in screen pixels
    pub surface_px: u32,
    /// Where the Save action writes the PNG
    pub export_path: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: 32,
            active_color: Color::BLACK,
            active_tool: Tool::Pencil,
            show_grid_lines: true,
            surface_px: 400,
            export_path: PathBuf::from("pixel-art.png"),
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::info!("Loading editor config from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::Invalid(format!(
                "grid_size {} must be between 1 and {}",
                self.grid_size, MAX_GRID_SIZE
            )));
        }
        if self.surface_px == 0 {
            return Err(ConfigError::Invalid("surface_px must be positive".to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let config = EditorConfig::default();
        assert_eq!(config.grid_size, 32);
        assert_eq!(config.active_color, Color::BLACK);
        assert_eq!(config.active_tool, Tool::Pencil);
        assert!(config.show_grid_lines);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = EditorConfig::from_json(r##"{"grid_size": 16, "active_color": "#ff0000", "active_tool": "circle"}"##).unwrap();
        assert_eq!(config.grid_size, 16);
        assert_eq!(config.active_color, Color::rgb(255, 0, 0));
        assert_eq!(config.active_tool, Tool::Circle);
        assert_eq!(config.surface_px, 400);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            EditorConfig::from_json(r#"{"grid_size": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{"surface_px": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{"active_color": "blue"}"#),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            EditorConfig::load("/definitely/not/here.json"),
            Err(ConfigError::ReadError(_))
        ));
    }
}
