//! Game state and core simulation types
//!
//! Everything needed to replay a run deterministically lives here.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::WorldBounds;
use super::rect::Aabb;
use crate::assets::{AssetCatalog, SpriteKey};
use crate::consts::*;
use crate::settings::{GridConfig, Settings};

/// The player's paddle
///
/// Immovable: it takes part in collision response but is never displaced by
/// it. Velocity is horizontal only and comes straight from key state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub body: Aabb,
    pub vel_x: f32,
}

impl Paddle {
    /// Half the paddle face, the denominator of the deflection formula
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.body.half.x
    }
}

/// The ball
///
/// Elastic bounce coefficient 1 on both axes; collision reactions mutate
/// the velocity directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub body: Aabb,
    pub vel: Vec2,
}

/// A destructible brick
///
/// `active` doubles as the visibility flag: an inactive brick neither
/// collides nor draws, but keeps its slot until the grid is rebuilt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub body: Aabb,
    pub active: bool,
}

/// Events emitted by the simulation for the embedding host
///
/// Drained once per frame for sound or effects hooks. Transient, not part
/// of the serialized state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the paddle
    PaddleBounce,
    /// A brick was deactivated and hidden
    BrickDestroyed { brick_id: u32 },
    /// The last brick went down; the grid was rebuilt and the ball reset
    GridCleared,
    /// Ball fell into the ground sensor and was reset
    BallLost,
}

/// RNG state wrapper for serialization
///
/// Each ball reset draws from a fresh PCG stream, so a run replays
/// identically from `seed` no matter when the state was snapshotted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Generator for the next reset draw; bumps the stream counter
    pub fn next_stream(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// Complete scene state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Play-area boundary (bottom edge open)
    pub bounds: WorldBounds,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player paddle
    pub paddle: Paddle,
    /// The one ball in play
    pub ball: Ball,
    /// Brick grid, row-major
    pub bricks: Vec<Brick>,
    /// Invisible sensor band just below the bottom edge
    pub ground: Aabb,
    /// Grid layout used for the initial build and every rebuild
    pub grid: GridConfig,
    /// Sampled sprite sizes all layout was derived from
    pub catalog: AssetCatalog,
    /// Events since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next brick ID
    next_id: u32,
}

impl GameState {
    /// Create the scene: paddle, ball, brick grid and ground sensor
    ///
    /// Everything is built up front. The catalog carries the sampled sprite
    /// sizes; layout recomputes if the host overrides them before calling
    /// this.
    pub fn new(settings: &Settings, catalog: &AssetCatalog, seed: u64) -> Self {
        let (width, height) = (settings.width, settings.height);

        let mut bounds = WorldBounds::closed(width, height);
        // Bottom stays open so the ball only dies via the ground sensor.
        bounds.set_collision(true, true, true, false);

        let paddle = Paddle {
            body: Aabb::from_size(
                Vec2::new(width / 2.0, height - PADDLE_BOTTOM_OFFSET),
                catalog.measure(SpriteKey::Paddle),
            ),
            vel_x: 0.0,
        };

        let ball = Ball {
            body: Aabb::from_size(
                Vec2::new(width / 2.0, height - BALL_SPAWN_BOTTOM_OFFSET),
                catalog.measure(SpriteKey::Ball),
            ),
            vel: Vec2::from(BALL_START_VEL),
        };

        let ground = Aabb::from_size(
            Vec2::new(width / 2.0, height + GROUND_DROP),
            Vec2::new(width, GROUND_THICKNESS),
        );

        let mut state = Self {
            seed,
            rng_state: RngState::new(seed),
            bounds,
            time_ticks: 0,
            paddle,
            ball,
            bricks: Vec::new(),
            ground,
            grid: settings.grid,
            catalog: catalog.clone(),
            events: Vec::new(),
            next_id: 1,
        };

        super::tick::build_brick_grid(&mut state);
        state
    }

    /// Allocate a new brick ID
    pub fn next_brick_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Count bricks still participating in collisions
    pub fn active_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }

    /// Ball spawn point: centered horizontally, fixed offset above the bottom
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.bounds.width / 2.0,
            self.bounds.height - BALL_SPAWN_BOTTOM_OFFSET,
        )
    }

    /// Drain pending events for the host
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_places_entities() {
        let settings = Settings::default();
        let state = GameState::new(&settings, &AssetCatalog::default(), 42);

        assert_eq!(state.paddle.body.center, Vec2::new(400.0, 560.0));
        assert_eq!(state.paddle.vel_x, 0.0);
        assert_eq!(state.ball.body.center, Vec2::new(400.0, 530.0));
        assert_eq!(state.ball.vel, Vec2::new(180.0, -220.0));
        assert_eq!(state.active_bricks(), 50);

        // Ground sensor spans the play width just below the bottom edge
        assert_eq!(state.ground.center, Vec2::new(400.0, 610.0));
        assert_eq!(state.ground.half, Vec2::new(400.0, 10.0));

        // Bottom bound open, the other three closed
        assert!(state.bounds.collide_left);
        assert!(state.bounds.collide_right);
        assert!(state.bounds.collide_top);
        assert!(!state.bounds.collide_bottom);
    }

    #[test]
    fn test_rng_streams_are_independent() {
        use rand::Rng;

        let mut rng_state = RngState::new(7);
        let a: u64 = rng_state.next_stream().random();
        let b: u64 = rng_state.next_stream().random();
        assert_ne!(a, b);
        assert_eq!(rng_state.stream, 2);

        // Same seed replays the same streams
        let mut replay = RngState::new(7);
        let a2: u64 = replay.next_stream().random();
        assert_eq!(a, a2);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(&Settings::default(), &AssetCatalog::default(), 1);
        state.events.push(GameEvent::PaddleBounce);
        state.events.push(GameEvent::BallLost);

        let drained = state.drain_events();
        assert_eq!(drained, vec![GameEvent::PaddleBounce, GameEvent::BallLost]);
        assert!(state.events.is_empty());
    }
}
