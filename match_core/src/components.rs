use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which player a paddle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component. Horizontal placement is fixed per side for the whole
/// match, so only the vertical center lives here.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Pending absolute drag position for a paddle, written by input ingest and
/// consumed by the paddle-move system within the same tick
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTarget {
    pub y: Option<f32>,
}

impl DragTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component. Velocity is in units per tick.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Re-center the ball and assign its post-point velocity
    pub fn serve(&mut self, center: Vec2, vel: Vec2) {
        self.pos = center;
        self.vel = vel;
    }
}
