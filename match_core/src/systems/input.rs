use hecs::World;

use crate::arena::Arena;
use crate::components::{DragTarget, Paddle};
use crate::config::Config;
use crate::resources::InputQueue;

/// Drain queued drag inputs into per-paddle drag targets. Inputs are applied
/// in arrival order, so the latest drag per side wins.
pub fn ingest_inputs(world: &mut World, inputs: &mut InputQueue) {
    for &(side, y) in &inputs.drags {
        for (_entity, (paddle, target)) in world.query_mut::<(&Paddle, &mut DragTarget)>() {
            if paddle.side == side {
                target.y = Some(y);
            }
        }
    }
    inputs.clear();
}

/// Apply drag targets to paddle centers, clamped so the whole paddle stays
/// inside the arena
pub fn move_paddles(world: &mut World, arena: &Arena, config: &Config) {
    for (_entity, (paddle, target)) in world.query_mut::<(&mut Paddle, &mut DragTarget)>() {
        if let Some(y) = target.y.take() {
            paddle.y = arena.clamp_paddle_y(y, config.paddle_height);
        }
    }
}
