//! Collision detection and response for rectangular bodies
//!
//! The narrow phase is AABB overlap with a minimum-translation normal; the
//! broad phase is a brute-force sweep over at most fifty bricks per step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Aabb;

/// Result of a collision check
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Surface normal pointing from the obstacle toward the moving body
    pub normal: Vec2,
    /// Penetration depth along the normal (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check collision between a moving body and a static obstacle
///
/// The normal is taken along the axis of least penetration; a tie resolves
/// to the horizontal axis.
pub fn aabb_collision(body: &Aabb, obstacle: &Aabb) -> CollisionResult {
    let delta = body.center - obstacle.center;
    let overlap_x = body.half.x + obstacle.half.x - delta.x.abs();
    let overlap_y = body.half.y + obstacle.half.y - delta.y.abs();

    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return CollisionResult::miss();
    }

    if overlap_x <= overlap_y {
        CollisionResult {
            hit: true,
            normal: Vec2::new(delta.x.signum(), 0.0),
            penetration: overlap_x,
        }
    } else {
        CollisionResult {
            hit: true,
            normal: Vec2::new(0.0, delta.y.signum()),
            penetration: overlap_y,
        }
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Which world-bound edges a body struck during resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundsContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl BoundsContact {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// The rectangular play-area boundary
///
/// Collision can be enabled per edge. The scene leaves the bottom open so a
/// falling ball reaches the ground sensor instead of bouncing back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
    pub collide_left: bool,
    pub collide_right: bool,
    pub collide_top: bool,
    pub collide_bottom: bool,
}

impl WorldBounds {
    /// Bounds with all four edges solid
    pub fn closed(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            collide_left: true,
            collide_right: true,
            collide_top: true,
            collide_bottom: true,
        }
    }

    /// Enable or disable collision per edge
    pub fn set_collision(&mut self, left: bool, right: bool, top: bool, bottom: bool) {
        self.collide_left = left;
        self.collide_right = right;
        self.collide_top = top;
        self.collide_bottom = bottom;
    }

    /// Clamp a body inside the enabled edges, reflecting velocity elastically
    ///
    /// Disabled edges let the body pass through untouched.
    pub fn collide(&self, body: &mut Aabb, vel: &mut Vec2) -> BoundsContact {
        let mut contact = BoundsContact::default();

        if self.collide_left && body.left() < 0.0 {
            body.center.x = body.half.x;
            vel.x = vel.x.abs();
            contact.left = true;
        }
        if self.collide_right && body.right() > self.width {
            body.center.x = self.width - body.half.x;
            vel.x = -vel.x.abs();
            contact.right = true;
        }
        if self.collide_top && body.top() < 0.0 {
            body.center.y = body.half.y;
            vel.y = vel.y.abs();
            contact.top = true;
        }
        if self.collide_bottom && body.bottom() > self.height {
            body.center.y = self.height - body.half.y;
            vel.y = -vel.y.abs();
            contact.bottom = true;
        }

        contact
    }

    /// Clamp a body inside the horizontal extent without touching velocity
    ///
    /// Immovable bodies stop dead at the edge instead of bouncing.
    pub fn clamp_horizontal(&self, body: &mut Aabb) {
        body.center.x = body.center.x.clamp(body.half.x, self.width - body.half.x);
    }
}
