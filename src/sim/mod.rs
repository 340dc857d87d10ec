//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, input device, or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{BoundsContact, CollisionResult, WorldBounds, aabb_collision, reflect_velocity};
pub use rect::Aabb;
pub use state::{Ball, Brick, GameEvent, GameState, Paddle, RngState};
pub use tick::{TickInput, build_brick_grid, reset_ball, tick};
