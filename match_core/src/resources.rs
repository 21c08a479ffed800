use crate::components::Side;
use crate::config::Params;

/// Simulation clock. `dt` is fixed; the host owns the cadence.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,
    pub now: f32,
    pub tick: u64,
}

impl Time {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            now: 0.0,
            tick: 0,
        }
    }

    pub fn advance(&mut self) {
        self.now += self.dt;
        self.tick += 1;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new(Params::FIXED_DT)
    }
}

/// Match score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn reset(&mut self) {
        self.left = 0;
        self.right = 0;
    }

    pub fn has_winner(&self, winning_score: u32) -> Option<Side> {
        if self.left >= winning_score {
            Some(Side::Left)
        } else if self.right >= winning_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Flags for what happened during the current tick, cleared at the start of
/// every step
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub paddle_hit: bool,
    pub wall_hit: bool,
    pub left_scored: bool,
    pub right_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&self) -> Option<Side> {
        if self.left_scored {
            Some(Side::Left)
        } else if self.right_scored {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Post-point settle delay, counted in ticks so the host loop is never
/// blocked
#[derive(Debug, Clone, Copy, Default)]
pub struct ServePause {
    pub ticks_left: u32,
}

impl ServePause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, ticks: u32) {
        self.ticks_left = ticks;
    }

    pub fn tick(&mut self) {
        if self.ticks_left > 0 {
            self.ticks_left -= 1;
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.ticks_left > 0
    }

    pub fn clear(&mut self) {
        self.ticks_left = 0;
    }
}

/// Drag inputs pushed by the host between ticks, drained at the start of the
/// next step
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub drags: Vec<(Side, f32)>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_drag(&mut self, side: Side, y: f32) {
        self.drags.push((side, y));
    }

    pub fn clear(&mut self) {
        self.drags.clear();
    }
}
