use glam::Vec2;
use hecs::World;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use match_core::{
    create_ball, create_paddle, step, Arena, Ball, Config, Events, InputQueue, Paddle, Score,
    ServePause, Side, Time,
};

use crate::events::MatchEvent;
use crate::snapshot::MatchSnapshot;

/// Match lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Post-point settle beat; the ball sits centered and frozen
    Serving,
    /// Ball in play
    Rallying,
    /// Host froze the match
    Paused,
    /// A player reached the winning score
    Ended,
}

/// A complete two-player match, driven by the host at a fixed 60 Hz cadence.
///
/// All entity mutation happens inside [`tick`](MatchSession::tick). Drag
/// input lands in a queue and is applied at the start of the next processed
/// tick, so host threads never interleave with a tick in progress.
pub struct MatchSession {
    world: World,
    time: Time,
    arena: Arena,
    config: Config,
    score: Score,
    core_events: Events,
    inputs: InputQueue,
    serve_pause: ServePause,
    phase: Phase,
    winner: Option<Side>,
    events: Vec<MatchEvent>,
}

impl MatchSession {
    /// Create a session and serve the opening ball
    pub fn new(config: Config) -> Self {
        let arena = Arena::new(config.arena_width, config.arena_height);
        let mut session = Self {
            world: World::new(),
            time: Time::default(),
            arena,
            config,
            score: Score::new(),
            core_events: Events::new(),
            inputs: InputQueue::new(),
            serve_pause: ServePause::new(),
            phase: Phase::Rallying,
            winner: None,
            events: Vec::new(),
        };
        session.start_game();
        session
    }

    /// Reset paddles, scores and the ball, then serve. Callable from any
    /// phase, including Ended (rematch).
    pub fn start_game(&mut self) {
        self.world.clear();
        let spawn_y = self.arena.center().y;
        create_paddle(&mut self.world, Side::Left, spawn_y);
        create_paddle(&mut self.world, Side::Right, spawn_y);
        create_ball(
            &mut self.world,
            self.arena.ball_spawn(),
            Vec2::new(self.config.serve_speed, 0.0),
        );

        self.time = Time::default();
        self.score.reset();
        self.core_events.clear();
        self.inputs.clear();
        self.serve_pause.clear();
        self.winner = None;
        self.events.clear();
        // The opening serve is instantaneous
        self.phase = Phase::Rallying;

        info!(
            "match started, playing to {}",
            self.config.winning_score
        );
    }

    /// Advance the match by one fixed tick. A no-op while paused or after
    /// the match ended, so a host that keeps calling is safe.
    pub fn tick(&mut self) {
        match self.phase {
            Phase::Paused | Phase::Ended => return,
            Phase::Serving | Phase::Rallying => {}
        }

        self.events.clear();

        step(
            &mut self.world,
            &mut self.time,
            &self.arena,
            &self.config,
            &mut self.score,
            &mut self.core_events,
            &mut self.inputs,
            &mut self.serve_pause,
        );

        self.phase = if self.serve_pause.is_waiting() {
            Phase::Serving
        } else {
            Phase::Rallying
        };

        if self.core_events.paddle_hit {
            self.events.push(MatchEvent::PaddleHit);
        }
        if self.core_events.wall_hit {
            self.events.push(MatchEvent::WallHit);
        }
        if let Some(side) = self.core_events.scored() {
            debug!(
                "point for {:?}, score {}-{}",
                side, self.score.left, self.score.right
            );
            self.events.push(MatchEvent::PointScored { side });
        }

        if let Some(winner) = self.score.has_winner(self.config.winning_score) {
            self.phase = Phase::Ended;
            self.winner = Some(winner);
            self.events.push(MatchEvent::GameEnded { winner });
            info!(
                "game over, {:?} wins {}-{}",
                winner, self.score.left, self.score.right
            );
        }
    }

    /// Freeze the match. Redundant calls, or calls after the match ended,
    /// are no-ops.
    pub fn pause(&mut self) {
        match self.phase {
            Phase::Serving | Phase::Rallying => {
                self.phase = Phase::Paused;
                debug!("match paused");
            }
            Phase::Paused | Phase::Ended => {}
        }
    }

    /// Continue a paused match from the exact state it froze in
    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = if self.serve_pause.is_waiting() {
                Phase::Serving
            } else {
                Phase::Rallying
            };
            debug!("match resumed");
        }
    }

    /// Queue a drag for the named paddle. It is applied, clamped to the
    /// arena, at the start of the next processed tick; out-of-range values
    /// never fail.
    pub fn handle_drag(&mut self, side: Side, touch_y: f32) {
        self.inputs.push_drag(side, touch_y);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `Some` iff the match has ended
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Events from the most recent processed tick
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Build the read-only render view
    pub fn snapshot(&self) -> MatchSnapshot {
        let (ball_pos, ball_vel) = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| (b.pos, b.vel))
            .unwrap_or((self.arena.ball_spawn(), Vec2::ZERO));

        let mut left_y = self.arena.center().y;
        let mut right_y = self.arena.center().y;
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => left_y = paddle.y,
                Side::Right => right_y = paddle.y,
            }
        }

        MatchSnapshot {
            tick: self.time.tick,
            ball_x: ball_pos.x,
            ball_y: ball_pos.y,
            ball_vx: ball_vel.x,
            ball_vy: ball_vel.y,
            left_x: self.config.paddle_center_x(Side::Left),
            left_y,
            left_score: self.score.left,
            right_x: self.config.paddle_center_x(Side::Right),
            right_y,
            right_score: self.score.right,
            phase: self.phase,
            winner: self.winner,
        }
    }
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
