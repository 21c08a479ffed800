use match_core::Side;
use serde::{Deserialize, Serialize};

/// Notifications the host consumes after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Ball struck a paddle; hosts map this to the bounce sound
    PaddleHit,
    /// Ball reflected off the top or bottom wall
    WallHit,
    /// A point was scored
    PointScored { side: Side },
    /// The match is over; no further ticks are processed until a restart
    GameEnded { winner: Side },
}
