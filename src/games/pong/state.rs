//! Pong state and core types
//!
//! Everything needed to replay a rally deterministically lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::*;
use crate::approach;

/// Current phase of a pong session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PongPhase {
    /// Waiting for the player to start
    Idle,
    /// Active rally
    Running,
    /// Frozen mid-rally
    Paused,
    /// Match decided
    Over,
}

/// Which side of the court (doubles as the scorer identity)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Warden,
}

impl Side {
    /// Horizontal serve direction toward this side
    pub fn serve_dir(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Warden => 1.0,
        }
    }
}

/// The ball. `pos` is the top-left corner of its bounding square.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Ball at rest in the centre of the court
    pub fn centered() -> Self {
        Self {
            pos: Vec2::new(
                (COURT_WIDTH - BALL_SIZE) / 2.0,
                (COURT_HEIGHT - BALL_SIZE) / 2.0,
            ),
            vel: Vec2::ZERO,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(BALL_SIZE / 2.0)
    }
}

/// A vertical paddle. Only `y` (top edge) varies; x positions are fixed
/// per side by `PLAYER_X`/`WARDEN_X`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    pub y: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            y: (COURT_HEIGHT - PADDLE_HEIGHT) / 2.0,
        }
    }
}

impl Paddle {
    pub fn center_y(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }

    /// Nudge by a delta, clamped to the court
    pub fn move_by(&mut self, dy: f32) {
        self.y = (self.y + dy).clamp(0.0, COURT_HEIGHT - PADDLE_HEIGHT);
    }

    /// Chase a target top edge at a bounded speed
    pub fn move_toward(&mut self, target_y: f32, dt: f32, max_speed: f32) {
        let target = target_y.clamp(0.0, COURT_HEIGHT - PADDLE_HEIGHT);
        self.y = approach(self.y, target, max_speed * dt);
    }

    /// Place the paddle centre at `center_y` directly (pointer input)
    pub fn set_center(&mut self, center_y: f32) {
        self.y = (center_y - PADDLE_HEIGHT / 2.0).clamp(0.0, COURT_HEIGHT - PADDLE_HEIGHT);
    }
}

/// Complete pong state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PongState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: PongPhase,
    pub ball: Ball,
    pub player: Paddle,
    pub warden: Paddle,
    pub player_score: u8,
    pub warden_score: u8,
    /// The next serve travels toward this side (the last scorer)
    pub serving_toward: Side,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl PongState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let serving_toward = if rng.random_bool(0.5) {
            Side::Player
        } else {
            Side::Warden
        };
        Self {
            seed,
            rng,
            phase: PongPhase::Idle,
            ball: Ball::centered(),
            player: Paddle::default(),
            warden: Paddle::default(),
            player_score: 0,
            warden_score: 0,
            serving_toward,
            time_ticks: 0,
        }
    }

    /// Start (or restart after a finished match)
    pub fn start(&mut self) {
        match self.phase {
            PongPhase::Idle => {}
            PongPhase::Over => {
                self.player_score = 0;
                self.warden_score = 0;
            }
            _ => return,
        }
        self.serve();
        self.phase = PongPhase::Running;
    }

    /// Re-serve from the centre toward `serving_toward`, with a random
    /// vertical component
    pub fn serve(&mut self) {
        let dir = self.serving_toward.serve_dir();
        let vy_sign = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let vy = vy_sign * (self.rng.random::<f32>() * 120.0 + 180.0);
        self.ball = Ball::centered();
        self.ball.vel = Vec2::new(dir * BALL_START_SPEED, vy);
    }

    /// Record a point for `side`; ends the match at `MAX_SCORE`
    pub fn score_point(&mut self, side: Side) {
        match side {
            Side::Player => self.player_score += 1,
            Side::Warden => self.warden_score += 1,
        }
        if self.player_score >= MAX_SCORE || self.warden_score >= MAX_SCORE {
            self.phase = PongPhase::Over;
            self.ball = Ball::centered();
        } else {
            self.serving_toward = side;
            self.serve();
        }
    }

    pub fn winner(&self) -> Option<Side> {
        if self.player_score >= MAX_SCORE {
            Some(Side::Player)
        } else if self.warden_score >= MAX_SCORE {
            Some(Side::Warden)
        } else {
            None
        }
    }
}
