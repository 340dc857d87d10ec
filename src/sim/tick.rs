//! Fixed timestep simulation tick
//!
//! Core game loop that advances the scene deterministically: paddle control
//! from key state, ball integration against the world bounds, then the
//! collision reactions in order - ground sensor, paddle, bricks.

use glam::Vec2;
use rand::Rng;

use super::collision::{aabb_collision, reflect_velocity};
use super::rect::Aabb;
use super::state::{Brick, GameEvent, GameState};
use crate::assets::SpriteKey;
use crate::consts::*;

/// Polled key states for a single tick (deterministic)
///
/// All four directions are captured the way a cursor-key helper exposes
/// them; the paddle only consumes left/right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Advance the scene by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    // Paddle control: left checked first, right second, else stop.
    state.paddle.vel_x = if input.left {
        -PADDLE_SPEED
    } else if input.right {
        PADDLE_SPEED
    } else {
        0.0
    };
    state.paddle.body.center.x += state.paddle.vel_x * dt;
    state.bounds.clamp_horizontal(&mut state.paddle.body);

    // Integrate the ball and bounce it off the closed edges. The bottom is
    // open; the ground sensor below catches the fall.
    state.ball.body.center += state.ball.vel * dt;
    state.bounds.collide(&mut state.ball.body, &mut state.ball.vel);

    if state.ball.body.overlaps(&state.ground) {
        reset_ball(state);
        state.events.push(GameEvent::BallLost);
        return;
    }

    let contact = aabb_collision(&state.ball.body, &state.paddle.body);
    if contact.hit {
        state.ball.body.center += contact.normal * contact.penetration;
        bounce_off_paddle(state);
    }

    collide_bricks(state);
}

/// Paddle bounce reaction
///
/// The contact point relative to the paddle center sets the deflection:
/// `vx = 300 * relative` with relative clamped to [-1, 1], and the ball
/// always leaves upward (`vy = -|vy|`) so it can never slide along the
/// paddle face.
fn bounce_off_paddle(state: &mut GameState) {
    let relative =
        (state.ball.body.center.x - state.paddle.body.center.x) / state.paddle.half_width();

    state.ball.vel.y = -state.ball.vel.y.abs();
    state.ball.vel.x = PADDLE_DEFLECT_SPEED * relative.clamp(-1.0, 1.0);
    state.events.push(GameEvent::PaddleBounce);
}

/// Sweep the brick grid and resolve the first overlapping active brick
///
/// One contact per substep; at 120 Hz the ball cannot cross a brick within
/// a single step, so this matches the host-engine one-pair-per-step
/// behavior the scene was written against.
fn collide_bricks(state: &mut GameState) {
    for index in 0..state.bricks.len() {
        if !state.bricks[index].active {
            continue;
        }
        let contact = aabb_collision(&state.ball.body, &state.bricks[index].body);
        if !contact.hit {
            continue;
        }

        // Elastic reflection off the struck face, then consume the brick.
        state.ball.body.center += contact.normal * contact.penetration;
        state.ball.vel = reflect_velocity(state.ball.vel, contact.normal);
        hit_brick(state, index);
        break;
    }
}

/// Brick hit reaction
///
/// Deactivates exactly one brick - no cascading. Clearing the last one
/// resets the ball and rebuilds the whole grid with the same layout config.
fn hit_brick(state: &mut GameState, index: usize) {
    let brick_id = state.bricks[index].id;
    state.bricks[index].active = false;
    state.events.push(GameEvent::BrickDestroyed { brick_id });

    if state.active_bricks() == 0 {
        reset_ball(state);
        build_brick_grid(state);
        state.events.push(GameEvent::GridCleared);
    }
}

/// Ball reset
///
/// Shared by a lost ball and a cleared grid: back to the spawn point with a
/// fresh serve. Horizontal speed is drawn from [150, 220] with a random
/// sign and vertical from [200, 260], always upward, so serves never settle
/// into an exploitable pattern.
pub fn reset_ball(state: &mut GameState) {
    let mut rng = state.rng_state.next_stream();
    let vx = rng.random_range(RESET_SPEED_X.0..=RESET_SPEED_X.1);
    let vx = if rng.random_bool(0.5) { vx } else { -vx };
    let vy = -rng.random_range(RESET_SPEED_Y.0..=RESET_SPEED_Y.1);

    state.ball.body.center = state.ball_spawn();
    state.ball.vel = Vec2::new(vx, vy);
}

/// Build the brick grid from the scene's layout config
///
/// Samples the brick sprite size from the catalog first, so spacing always
/// follows the rendered size rather than a hard-coded one. Replaces
/// whatever grid was there before.
pub fn build_brick_grid(state: &mut GameState) {
    let size = state.catalog.measure(SpriteKey::Brick);
    let grid = state.grid;

    state.bricks.clear();
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let x = grid.left_offset + col as f32 * (size.x + grid.h_gap) + size.x / 2.0;
            let y = grid.top_offset + row as f32 * (size.y + grid.v_gap) + size.y / 2.0;
            let id = state.next_brick_id();
            state.bricks.push(Brick {
                id,
                body: Aabb::from_size(Vec2::new(x, y), size),
                active: true,
            });
        }
    }
}
