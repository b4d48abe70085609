//! Aether Pong - the reflex paddle game
//!
//! First to five points against the warden AI. The player defends the left
//! edge, the warden the right; the ball speeds up on every return and
//! deflects by where it strikes the paddle face.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{ball_hits_player, ball_hits_warden, ball_wall_collision, deflect};
pub use state::{Ball, Paddle, PongPhase, PongState, Side};
pub use tick::{TickInput, tick};

/// Court dimensions in logical units (the canvas scales to fit)
pub const COURT_WIDTH: f32 = 800.0;
pub const COURT_HEIGHT: f32 = 600.0;

/// Paddle and ball geometry
pub const PADDLE_WIDTH: f32 = 15.0;
pub const PADDLE_HEIGHT: f32 = 100.0;
pub const BALL_SIZE: f32 = 15.0;

/// Left edge of the player paddle; the warden mirrors it on the right
pub const PLAYER_X: f32 = PADDLE_WIDTH;
pub const WARDEN_X: f32 = COURT_WIDTH - 2.0 * PADDLE_WIDTH;

/// Speeds in units/second
pub const BALL_START_SPEED: f32 = 360.0;
pub const BALL_MAX_SPEED: f32 = 1200.0;
pub const PADDLE_SPEED: f32 = 480.0;
/// The warden tracks the ball at a fraction of the player's paddle speed
pub const AI_SPEED_FACTOR: f32 = 0.75;

/// Horizontal speed gain on each paddle return
pub const PADDLE_BOOST: f32 = 1.05;
/// Vertical deflection per unit of offset from the paddle centre (1/s)
pub const SPIN_FACTOR: f32 = 18.0;

/// Points needed to take the match
pub const MAX_SCORE: u8 = 5;
