//! Scene configuration
//!
//! Viewport size and grid layout come from the embedding host. The demo
//! binary reads overrides from a JSON file next to the working directory;
//! the simulation core itself never touches the filesystem.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Brick grid layout parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: u32,
    pub cols: u32,
    /// Distance from the top edge to the first row
    pub top_offset: f32,
    /// Distance from the left edge to the first column
    pub left_offset: f32,
    /// Horizontal gap between bricks
    pub h_gap: f32,
    /// Vertical gap between bricks
    pub v_gap: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            top_offset: GRID_TOP_OFFSET,
            left_offset: GRID_LEFT_OFFSET,
            h_gap: GRID_H_GAP,
            v_gap: GRID_V_GAP,
        }
    }
}

/// Scene settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
    /// Brick grid layout
    pub grid: GridConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            grid: GridConfig::default(),
        }
    }
}

impl Settings {
    /// Default settings file read by the demo binary
    pub const FILE_NAME: &'static str = "brickfall.json";

    /// Load settings from a JSON file, falling back to defaults
    ///
    /// A missing file is normal (first run). A malformed file is logged and
    /// ignored rather than aborting the scene.
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {path}");
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings file {path}: {err}");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_matches_scene_layout() {
        let grid = GridConfig::default();
        assert_eq!(grid.rows, 5);
        assert_eq!(grid.cols, 10);
        assert_eq!(grid.top_offset, 80.0);
        assert_eq!(grid.left_offset, 60.0);
        assert_eq!(grid.h_gap, 8.0);
        assert_eq!(grid.v_gap, 8.0);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let settings = Settings::load("does-not-exist.json");
        assert_eq!(settings, Settings::default());
    }
}
