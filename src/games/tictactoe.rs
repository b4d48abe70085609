//! Squid Tic Tac Toe - the 3x3 grid duel
//!
//! Rounds of classic tic-tac-toe; the first mark to take two rounds wins
//! the match. Between rounds the result stays on screen for a short
//! interlude, then the board clears and Circle opens again.

use serde::{Deserialize, Serialize};

use crate::consts::TICKS_PER_SECOND;

/// Round wins needed to take the match
pub const ROUND_WINS_TARGET: u8 = 2;
/// Ticks the round result stays on screen before the next round begins
pub const INTERLUDE_TICKS: u32 = 2 * TICKS_PER_SECOND;

/// The 8 winning lines: rows, columns, diagonals
const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Circle,
    Triangle,
}

impl Mark {
    pub fn other(self) -> Self {
        match self {
            Mark::Circle => Mark::Triangle,
            Mark::Triangle => Mark::Circle,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Mark::Circle => "₩",
            Mark::Triangle => "🪙",
        }
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win(Mark),
    Draw,
}

/// Scan the board for a completed line, or a draw on a full board
pub fn check_round(board: &[Option<Mark>; 9]) -> Option<RoundOutcome> {
    for [a, b, c] in WIN_LINES {
        if let Some(mark) = board[a] {
            if board[b] == Some(mark) && board[c] == Some(mark) {
                return Some(RoundOutcome::Win(mark));
            }
        }
    }
    if board.iter().all(|cell| cell.is_some()) {
        return Some(RoundOutcome::Draw);
    }
    None
}

/// Complete duel state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelState {
    pub board: [Option<Mark>; 9],
    /// Whose turn it is
    pub current: Mark,
    /// Set while a finished round's result is on display
    pub outcome: Option<RoundOutcome>,
    pub circle_wins: u8,
    pub triangle_wins: u8,
    /// 1-based round counter
    pub round: u32,
    pub match_over: bool,
    interlude_ticks: u32,
}

impl Default for DuelState {
    fn default() -> Self {
        Self::new()
    }
}

impl DuelState {
    pub fn new() -> Self {
        Self {
            board: [None; 9],
            current: Mark::Circle,
            outcome: None,
            circle_wins: 0,
            triangle_wins: 0,
            round: 1,
            match_over: false,
            interlude_ticks: 0,
        }
    }

    pub fn wins(&self, mark: Mark) -> u8 {
        match mark {
            Mark::Circle => self.circle_wins,
            Mark::Triangle => self.triangle_wins,
        }
    }

    /// The match winner, once decided
    pub fn champion(&self) -> Option<Mark> {
        if self.circle_wins >= ROUND_WINS_TARGET {
            Some(Mark::Circle)
        } else if self.triangle_wins >= ROUND_WINS_TARGET {
            Some(Mark::Triangle)
        } else {
            None
        }
    }

    /// Place the current mark. A move on an occupied cell, after the round
    /// is decided, or once the match is over, is a no-op.
    pub fn play(&mut self, index: usize) {
        if index >= 9 || self.board[index].is_some() || self.outcome.is_some() || self.match_over {
            return;
        }
        self.board[index] = Some(self.current);

        match check_round(&self.board) {
            Some(RoundOutcome::Win(mark)) => {
                self.outcome = Some(RoundOutcome::Win(mark));
                match mark {
                    Mark::Circle => self.circle_wins += 1,
                    Mark::Triangle => self.triangle_wins += 1,
                }
                if self.wins(mark) >= ROUND_WINS_TARGET {
                    self.match_over = true;
                } else {
                    self.interlude_ticks = INTERLUDE_TICKS;
                }
            }
            Some(RoundOutcome::Draw) => {
                self.outcome = Some(RoundOutcome::Draw);
                self.interlude_ticks = INTERLUDE_TICKS;
            }
            None => self.current = self.current.other(),
        }
    }

    /// Advance one simulation tick (drives the between-round interlude)
    pub fn tick(&mut self) {
        if self.interlude_ticks > 0 {
            self.interlude_ticks -= 1;
            if self.interlude_ticks == 0 {
                self.next_round();
            }
        }
    }

    fn next_round(&mut self) {
        self.board = [None; 9];
        self.current = Mark::Circle;
        self.outcome = None;
        self.round += 1;
    }

    /// Fresh match
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
