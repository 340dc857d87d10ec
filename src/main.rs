//! Brickfall entry point
//!
//! Headless demo host: runs the frame loop with an autopilot holding the
//! arrow keys, and logs the events the scene emits. Embedders drive the
//! same `tick` from their own frame loop and renderer.

use brickfall::assets::AssetCatalog;
use brickfall::consts::*;
use brickfall::settings::Settings;
use brickfall::sim::{GameEvent, GameState, TickInput, tick};

/// Simulated run length in seconds
const DEMO_SECONDS: f32 = 30.0;
/// Nominal frame rate of the demo host
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    // Seed from argv, else the wall clock
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let settings = Settings::load(Settings::FILE_NAME);
    let catalog = AssetCatalog::default();
    for (key, path) in AssetCatalog::manifest() {
        log::debug!("asset {} -> {}", key.as_str(), path);
    }

    let mut state = GameState::new(&settings, &catalog, seed);
    log::info!(
        "Brickfall starting: seed {}, {}x{} viewport, {} bricks",
        seed,
        settings.width,
        settings.height,
        state.active_bricks()
    );

    let mut input = TickInput::default();
    let mut accumulator = 0.0f32;
    let mut bricks_destroyed = 0u32;
    let mut balls_lost = 0u32;
    let mut grids_cleared = 0u32;

    for _ in 0..(DEMO_SECONDS / FRAME_DT) as u32 {
        // Fixed substeps per frame, same shape an interactive host uses
        accumulator += FRAME_DT;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            // Autopilot: chase the ball with the key states a player has
            let offset = state.ball.body.center.x - state.paddle.body.center.x;
            input.left = offset < -4.0;
            input.right = offset > 4.0;

            tick(&mut state, &input, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;
        }

        for event in state.drain_events() {
            match event {
                GameEvent::PaddleBounce => log::debug!("paddle bounce"),
                GameEvent::BrickDestroyed { brick_id } => {
                    bricks_destroyed += 1;
                    log::debug!("brick {brick_id} destroyed, {} left", state.active_bricks());
                }
                GameEvent::GridCleared => {
                    grids_cleared += 1;
                    log::info!("grid cleared, rebuilt with {} bricks", state.active_bricks());
                }
                GameEvent::BallLost => {
                    balls_lost += 1;
                    log::info!("ball lost, serving again from {}", state.ball.body.center);
                }
            }
        }
    }

    log::info!(
        "Demo finished after {} ticks: {} bricks destroyed, {} grids cleared, {} balls lost",
        state.time_ticks,
        bricks_destroyed,
        grids_cleared,
        balls_lost
    );
}
