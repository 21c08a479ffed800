use glam::Vec2;
use hecs::World;

use crate::arena::Arena;
use crate::components::{Ball, Side};
use crate::config::Config;
use crate::resources::{Events, Score, ServePause};

/// Score when the ball leaves the arena horizontally, then re-serve toward
/// the side that conceded and arm the settle delay
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    serve_pause: &mut ServePause,
) {
    let half_width = config.ball_width / 2.0;
    let spawn = arena.ball_spawn();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x - half_width < arena.bounds.min.x {
            score.increment(Side::Right);
            events.right_scored = true;
            ball.serve(spawn, Vec2::new(-config.point_serve_speed, 0.0));
            serve_pause.arm(config.serve_delay_ticks);
        } else if ball.pos.x + half_width > arena.bounds.max.x {
            score.increment(Side::Left);
            events.left_scored = true;
            ball.serve(spawn, Vec2::new(config.point_serve_speed, 0.0));
            serve_pause.arm(config.serve_delay_ticks);
        }
    }
}
