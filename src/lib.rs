//! Brickfall - a classic Breakout scene
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `assets`: Logical asset manifest and sampled sprite sizes
//! - `settings`: Viewport and grid layout configuration

pub mod assets;
pub mod settings;
pub mod sim;

pub use assets::{AssetCatalog, SpriteKey};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default viewport size (pixels)
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    /// Paddle defaults - slides along the bottom edge, horizontal only
    pub const PADDLE_SPEED: f32 = 450.0;
    /// Paddle center sits this far above the bottom edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 40.0;
    /// Horizontal speed cap imparted by a paddle bounce
    pub const PADDLE_DEFLECT_SPEED: f32 = 300.0;

    /// Ball defaults
    pub const BALL_SPAWN_BOTTOM_OFFSET: f32 = 70.0;
    /// Serve velocity of the very first ball
    pub const BALL_START_VEL: (f32, f32) = (180.0, -220.0);
    /// Horizontal speed band drawn on ball reset (sign is random)
    pub const RESET_SPEED_X: (f32, f32) = (150.0, 220.0);
    /// Vertical speed band drawn on ball reset (always upward)
    pub const RESET_SPEED_Y: (f32, f32) = (200.0, 260.0);

    /// Brick grid defaults
    pub const GRID_ROWS: u32 = 5;
    pub const GRID_COLS: u32 = 10;
    pub const GRID_TOP_OFFSET: f32 = 80.0;
    pub const GRID_LEFT_OFFSET: f32 = 60.0;
    pub const GRID_H_GAP: f32 = 8.0;
    pub const GRID_V_GAP: f32 = 8.0;

    /// Ground sensor band below the bottom edge
    pub const GROUND_DROP: f32 = 10.0;
    pub const GROUND_THICKNESS: f32 = 20.0;
}
