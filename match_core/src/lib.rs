pub mod arena;
pub mod components;
pub mod config;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the deterministic match simulation by one fixed tick.
///
/// Inputs queued since the previous call are applied first. While the
/// post-point settle delay is counting down the ball is frozen and only
/// paddle input is processed.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    inputs: &mut InputQueue,
    serve_pause: &mut ServePause,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest host inputs (apply to drag targets)
    ingest_inputs(world, inputs);

    // 2. Move paddles toward their drag targets
    move_paddles(world, arena, config);

    if serve_pause.is_waiting() {
        // Settle beat after a point; the ball stays centered
        serve_pause.tick();
    } else {
        // 3. Move ball
        move_ball(world);

        // 4. Bounce off paddles, then walls
        bounce_paddles(world, config, events);
        bounce_walls(world, arena, config, events);

        // 5. Score if the ball left the arena
        check_scoring(world, arena, config, score, events, serve_pause);
    }

    time.advance();
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), DragTarget::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
