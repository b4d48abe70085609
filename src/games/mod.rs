//! Deterministic game simulations
//!
//! All gameplay logic lives here. These modules must stay pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Each game is its own small state machine. There is deliberately no shared
//! engine between them beyond the crate-level timing constants; the games are
//! independent pages, not layers of one system.

pub mod memory;
pub mod pong;
pub mod tictactoe;
pub mod trivia;
