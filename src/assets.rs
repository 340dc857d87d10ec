//! Logical asset manifest and sampled sprite sizes
//!
//! The scene refers to its art by logical key; decoding and upload belong to
//! the embedding host. The simulation only needs each sprite's display size,
//! sampled once before layout so body extents and grid spacing track the
//! rendered art instead of assumed dimensions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Logical keys for the three scene sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKey {
    Paddle,
    Ball,
    Brick,
}

impl SpriteKey {
    /// All keys, in load order
    pub const ALL: [SpriteKey; 3] = [SpriteKey::Paddle, SpriteKey::Ball, SpriteKey::Brick];

    /// Stable name used by loaders and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteKey::Paddle => "paddle",
            SpriteKey::Ball => "ball",
            SpriteKey::Brick => "brick",
        }
    }

    /// Load path relative to the asset root
    pub fn path(&self) -> &'static str {
        match self {
            SpriteKey::Paddle => "assets/paddle.png",
            SpriteKey::Ball => "assets/ball.png",
            SpriteKey::Brick => "assets/brick.png",
        }
    }
}

/// Sampled sprite sizes keyed by logical asset
///
/// Defaults match the shipped art. A host that decodes the real images can
/// override a size before the scene is built; grid spacing and body extents
/// follow whatever size is sampled here, never hard-coded dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetCatalog {
    paddle_size: Vec2,
    ball_size: Vec2,
    brick_size: Vec2,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self {
            paddle_size: Vec2::new(104.0, 24.0),
            ball_size: Vec2::new(16.0, 16.0),
            brick_size: Vec2::new(64.0, 32.0),
        }
    }
}

impl AssetCatalog {
    /// The preload manifest: (key, path) for every sprite the scene requests
    pub fn manifest() -> [(SpriteKey, &'static str); 3] {
        [
            (SpriteKey::Paddle, SpriteKey::Paddle.path()),
            (SpriteKey::Ball, SpriteKey::Ball.path()),
            (SpriteKey::Brick, SpriteKey::Brick.path()),
        ]
    }

    /// Sampled display size for a sprite
    pub fn measure(&self, key: SpriteKey) -> Vec2 {
        match key {
            SpriteKey::Paddle => self.paddle_size,
            SpriteKey::Ball => self.ball_size,
            SpriteKey::Brick => self.brick_size,
        }
    }

    /// Override a sampled size (host decoded the actual image)
    pub fn set_size(&mut self, key: SpriteKey, size: Vec2) {
        match key {
            SpriteKey::Paddle => self.paddle_size = size,
            SpriteKey::Ball => self.ball_size = size,
            SpriteKey::Brick => self.brick_size = size,
        }
    }
}
