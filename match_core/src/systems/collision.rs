use glam::Vec2;
use hecs::World;

use crate::arena::{Aabb, Arena};
use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::resources::Events;

/// Bounce the ball off any overlapping paddle.
///
/// Both paddles are tested every tick regardless of which half of the arena
/// the ball is in, and there is no moving-toward gate. The vertical hit
/// offset is left unclamped: a deep overlap near a paddle edge can land
/// outside [-1, 1] and steepens the return accordingly.
pub fn bounce_paddles(world: &mut World, config: &Config, events: &mut Events) {
    let paddles: Vec<(f32, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (config.paddle_center_x(p.side), p.y))
        .collect();

    let paddle_size = Vec2::new(config.paddle_width, config.paddle_height);
    let ball_size = Vec2::new(config.ball_width, config.ball_height);
    let half_paddle_height = config.paddle_height / 2.0;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(paddle_x, paddle_y) in &paddles {
            let paddle_box =
                Aabb::from_center_size(Vec2::new(paddle_x, paddle_y), paddle_size);
            let ball_box = Aabb::from_center_size(ball.pos, ball_size);

            if ball_box.overlaps(&paddle_box) {
                let offset = (ball.pos.y - paddle_y) / half_paddle_height;
                ball.vel.x *= -config.bounce_gain;
                ball.vel.y = ball.vel.y * config.bounce_gain + offset;
                events.paddle_hit = true;
            }
        }
    }
}

/// Reflect the ball off the top and bottom arena walls
pub fn bounce_walls(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    let half_height = config.ball_height / 2.0;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let bottom = ball.pos.y - half_height;
        let top = ball.pos.y + half_height;

        if bottom < arena.bounds.min.y || top > arena.bounds.max.y {
            ball.vel.y = -ball.vel.y;
            events.wall_hit = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Side;
    use crate::{create_ball, create_paddle};

    fn setup() -> (hecs::World, Arena, Config, Events) {
        let world = hecs::World::new();
        let config = Config::new();
        let arena = Arena::new(config.arena_width, config.arena_height);
        let events = Events::new();
        (world, arena, config, events)
    }

    fn ball_vel(world: &hecs::World) -> Vec2 {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| b.vel)
            .expect("ball exists")
    }

    #[test]
    fn test_center_hit_reverses_and_speeds_up_x() {
        let (mut world, _arena, config, mut events) = setup();
        create_paddle(&mut world, Side::Left, 300.0);
        create_ball(&mut world, Vec2::new(30.0, 300.0), Vec2::new(-4.0, 0.0));

        bounce_paddles(&mut world, &config, &mut events);

        let vel = ball_vel(&world);
        assert!(
            (vel.x - 4.6).abs() < 1e-4,
            "X velocity should reverse and gain 15%, got {}",
            vel.x
        );
        assert!(
            vel.y.abs() < 1e-4,
            "Dead-center hit adds no vertical bias, got {}",
            vel.y
        );
        assert!(events.paddle_hit, "Should flag a paddle hit");
    }

    #[test]
    fn test_hit_offset_biases_return() {
        let (mut world, _arena, config, mut events) = setup();
        create_paddle(&mut world, Side::Left, 300.0);
        // Ball center 90 above the paddle center: offset 90 / 100 = 0.9
        create_ball(&mut world, Vec2::new(30.0, 390.0), Vec2::new(-4.0, 0.0));

        bounce_paddles(&mut world, &config, &mut events);

        let vel = ball_vel(&world);
        assert!(
            (vel.y - 0.9).abs() < 1e-4,
            "Offset should bias the vertical velocity, got {}",
            vel.y
        );
    }

    #[test]
    fn test_edge_overshoot_offset_is_not_clamped() {
        let (mut world, _arena, config, mut events) = setup();
        create_paddle(&mut world, Side::Left, 300.0);
        // Overlap past the paddle's top edge: offset 110 / 100 = 1.1
        create_ball(&mut world, Vec2::new(30.0, 410.0), Vec2::new(-4.0, 0.0));

        bounce_paddles(&mut world, &config, &mut events);

        let vel = ball_vel(&world);
        assert!(
            (vel.y - 1.1).abs() < 1e-4,
            "Edge overshoot keeps the raw offset, got {}",
            vel.y
        );
    }

    #[test]
    fn test_vertical_velocity_is_amplified_too() {
        let (mut world, _arena, config, mut events) = setup();
        create_paddle(&mut world, Side::Right, 300.0);
        create_ball(&mut world, Vec2::new(770.0, 300.0), Vec2::new(4.0, 2.0));

        bounce_paddles(&mut world, &config, &mut events);

        let vel = ball_vel(&world);
        assert!(
            (vel.x + 4.6).abs() < 1e-4,
            "Right paddle sends the ball back left, got {}",
            vel.x
        );
        assert!(
            (vel.y - 2.3).abs() < 1e-4,
            "Y velocity gains 15% plus a zero offset, got {}",
            vel.y
        );
    }

    #[test]
    fn test_bounce_has_no_direction_gate() {
        let (mut world, _arena, config, mut events) = setup();
        create_paddle(&mut world, Side::Left, 300.0);
        // Overlapping but already moving away from the paddle
        create_ball(&mut world, Vec2::new(30.0, 300.0), Vec2::new(8.0, 0.0));

        bounce_paddles(&mut world, &config, &mut events);

        let vel = ball_vel(&world);
        assert!(
            (vel.x + 9.2).abs() < 1e-4,
            "Overlap bounces regardless of travel direction, got {}",
            vel.x
        );
    }

    #[test]
    fn test_no_bounce_without_overlap() {
        let (mut world, _arena, config, mut events) = setup();
        create_paddle(&mut world, Side::Left, 300.0);
        create_paddle(&mut world, Side::Right, 300.0);
        create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(-4.0, 0.0));

        bounce_paddles(&mut world, &config, &mut events);

        assert_eq!(ball_vel(&world), Vec2::new(-4.0, 0.0));
        assert!(!events.paddle_hit, "No contact, no event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, arena, config, mut events) = setup();
        create_ball(&mut world, Vec2::new(400.0, 20.0), Vec2::new(4.0, -3.0));

        bounce_walls(&mut world, &arena, &config, &mut events);

        let vel = ball_vel(&world);
        assert_eq!(vel.y, 3.0, "Y velocity reflects off the bottom wall");
        assert_eq!(vel.x, 4.0, "X velocity is unchanged");
        assert!(events.wall_hit, "Should flag a wall hit");
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, arena, config, mut events) = setup();
        create_ball(&mut world, Vec2::new(400.0, 580.0), Vec2::new(4.0, 3.0));

        bounce_walls(&mut world, &arena, &config, &mut events);

        let vel = ball_vel(&world);
        assert_eq!(vel.y, -3.0, "Y velocity reflects off the top wall");
        assert!(events.wall_hit, "Should flag a wall hit");
    }

    #[test]
    fn test_no_wall_bounce_inside_arena() {
        let (mut world, arena, config, mut events) = setup();
        create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(4.0, 3.0));

        bounce_walls(&mut world, &arena, &config, &mut events);

        assert_eq!(ball_vel(&world), Vec2::new(4.0, 3.0));
        assert!(!events.wall_hit);
    }
}
