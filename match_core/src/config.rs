use crate::components::Side;

/// Default tuning parameters for a match
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 200.0;

    // Ball
    pub const BALL_WIDTH: f32 = 50.0;
    pub const BALL_HEIGHT: f32 = 50.0;

    // Serve, units per tick
    pub const SERVE_SPEED: f32 = 4.0;
    pub const POINT_SERVE_SPEED: f32 = 3.0;
    pub const SERVE_DELAY_TICKS: u32 = 60;

    // Speed multiplier applied on every paddle hit; growth is unbounded over
    // a long rally
    pub const BOUNCE_GAIN: f32 = 1.15;

    // Score
    pub const WINNING_SCORE: u32 = 10;

    // Cadence
    pub const FIXED_DT: f32 = 1.0 / 60.0;
}

/// Match configuration. `winning_score` is the knob hosts are expected to
/// change; the geometry fields exist so tests can build small arenas.
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_width: f32,
    pub ball_height: f32,
    pub serve_speed: f32,
    pub point_serve_speed: f32,
    pub serve_delay_ticks: u32,
    pub bounce_gain: f32,
    pub winning_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_width: Params::BALL_WIDTH,
            ball_height: Params::BALL_HEIGHT,
            serve_speed: Params::SERVE_SPEED,
            point_serve_speed: Params::POINT_SERVE_SPEED,
            serve_delay_ticks: Params::SERVE_DELAY_TICKS,
            bounce_gain: Params::BOUNCE_GAIN,
            winning_score: Params::WINNING_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left-edge X of a paddle: the left paddle sits flush against the left
    /// wall, the right paddle flush against the right wall
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.arena_width - self.paddle_width,
        }
    }

    /// Horizontal center of a paddle
    pub fn paddle_center_x(&self, side: Side) -> f32 {
        self.paddle_x(side) + self.paddle_width / 2.0
    }
}
