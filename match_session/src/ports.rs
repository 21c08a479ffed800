use match_core::Side;

use crate::events::MatchEvent;
use crate::session::MatchSession;
use crate::snapshot::MatchSnapshot;

/// Host-to-core input boundary. Presentation code pushes player intent
/// through this; nothing here can fail.
pub trait InputPort {
    fn handle_drag(&mut self, side: Side, touch_y: f32);
    fn pause(&mut self);
    fn resume(&mut self);
    fn start_game(&mut self);
}

/// Core-to-host read-only boundary for rendering and feedback
pub trait RenderPort {
    fn snapshot(&self) -> MatchSnapshot;
    fn events(&self) -> &[MatchEvent];
}

impl InputPort for MatchSession {
    fn handle_drag(&mut self, side: Side, touch_y: f32) {
        MatchSession::handle_drag(self, side, touch_y);
    }

    fn pause(&mut self) {
        MatchSession::pause(self);
    }

    fn resume(&mut self) {
        MatchSession::resume(self);
    }

    fn start_game(&mut self) {
        MatchSession::start_game(self);
    }
}

impl RenderPort for MatchSession {
    fn snapshot(&self) -> MatchSnapshot {
        MatchSession::snapshot(self)
    }

    fn events(&self) -> &[MatchEvent] {
        MatchSession::events(self)
    }
}
