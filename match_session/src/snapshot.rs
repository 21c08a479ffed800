use match_core::Side;
use serde::{Deserialize, Serialize};

use crate::session::Phase;

/// Read-only view of the match, rebuilt on demand for rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub tick: u64,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_vx: f32,
    pub ball_vy: f32,
    pub left_x: f32,
    pub left_y: f32,
    pub left_score: u32,
    pub right_x: f32,
    pub right_y: f32,
    pub right_score: u32,
    pub phase: Phase,
    pub winner: Option<Side>,
}
