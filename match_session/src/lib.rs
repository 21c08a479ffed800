//! Match lifecycle for two-player Pong
//!
//! Wraps the deterministic `match_core` simulation in the phase machine the
//! host drives: serve, rally, pause, game over. Hosts call
//! [`MatchSession::tick`] at 60 Hz, read [`MatchSnapshot`] to render, and
//! consume [`MatchEvent`]s for audio and UI.

pub mod events;
pub mod ports;
pub mod session;
pub mod snapshot;

pub use events::*;
pub use ports::*;
pub use session::*;
pub use snapshot::*;
