//! Squid Memory - the card-matching memory trial
//!
//! Pairs of symbols hide in a shuffled deck. At most two cards may be
//! face-up at once; revealing a second card locks the board for the reveal
//! window, then mismatched cards hide again. Matching every pair wins.

pub mod deck;

pub use deck::{Difficulty, SYMBOLS, build_deck};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::TICKS_PER_SECOND;

/// Ticks a revealed pair stays on display before the board unlocks
pub const REVEAL_TICKS: u32 = TICKS_PER_SECOND;
/// Ceremonial countdown before play starts
pub const COUNTDOWN_STEPS: u32 = 3;
const COUNTDOWN_STEP_TICKS: u32 = TICKS_PER_SECOND;
/// Distraction overlay: roll cadence and on-screen duration
const OVERLAY_ROLL_TICKS: u32 = 2 * TICKS_PER_SECOND;
const OVERLAY_SHOW_TICKS: u32 = 3 * TICKS_PER_SECOND / 2;

/// Current phase of a memory session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryPhase {
    /// Difficulty select
    Lobby,
    /// 3-2-1 countdown
    Countdown,
    /// Board active
    Playing,
    /// All pairs matched
    Won,
}

/// Complete memory-trial state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryState {
    pub seed: u64,
    rng: Pcg32,
    pub difficulty: Difficulty,
    pub phase: MemoryPhase,
    /// Symbol index per card slot
    pub deck: Vec<u8>,
    /// Cards currently face-up (at most two)
    pub flipped: Vec<usize>,
    /// Matched flags, same length as `deck`
    pub matched: Vec<bool>,
    /// Completed flip pairs
    pub attempts: u32,
    /// Countdown value currently displayed (3..=1)
    pub countdown_value: u32,
    countdown_ticks: u32,
    /// Remaining reveal window; board is locked while nonzero
    lock_ticks: u32,
    /// Play clock in ticks
    pub elapsed_ticks: u64,
    /// Remaining on-screen time for the distraction overlay
    pub overlay_ticks: u32,
    overlay_roll_ticks: u32,
}

impl MemoryState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            difficulty: Difficulty::default(),
            phase: MemoryPhase::Lobby,
            deck: Vec::new(),
            flipped: Vec::new(),
            matched: Vec::new(),
            attempts: 0,
            countdown_value: COUNTDOWN_STEPS,
            countdown_ticks: 0,
            lock_ticks: 0,
            elapsed_ticks: 0,
            overlay_ticks: 0,
            overlay_roll_ticks: OVERLAY_ROLL_TICKS,
        }
    }

    /// Pick a difficulty while in the lobby
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if self.phase == MemoryPhase::Lobby {
            self.difficulty = difficulty;
        }
    }

    /// Leave the lobby and start the countdown
    pub fn begin(&mut self) {
        if self.phase != MemoryPhase::Lobby {
            return;
        }
        self.countdown_value = COUNTDOWN_STEPS;
        self.countdown_ticks = COUNTDOWN_STEP_TICKS;
        self.phase = MemoryPhase::Countdown;
    }

    pub fn is_locked(&self) -> bool {
        self.lock_ticks > 0
    }

    /// A card shows its symbol when face-up or matched
    pub fn is_face_up(&self, index: usize) -> bool {
        self.flipped.contains(&index) || self.matched.get(index).copied().unwrap_or(false)
    }

    pub fn matched_count(&self) -> usize {
        self.matched.iter().filter(|&&m| m).count()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_ticks / TICKS_PER_SECOND as u64
    }

    /// Flip a card. Ignored while the board is locked, on a card already
    /// showing, or when two cards are face-up.
    pub fn flip(&mut self, index: usize) {
        if self.phase != MemoryPhase::Playing
            || index >= self.deck.len()
            || self.is_locked()
            || self.flipped.contains(&index)
            || self.matched[index]
            || self.flipped.len() >= 2
        {
            return;
        }

        self.flipped.push(index);
        if self.flipped.len() < 2 {
            return;
        }

        // Second card: lock the board for the reveal window
        let (first, second) = (self.flipped[0], self.flipped[1]);
        self.lock_ticks = REVEAL_TICKS;
        self.attempts += 1;
        if self.deck[first] == self.deck[second] {
            self.matched[first] = true;
            self.matched[second] = true;
            if self.matched_count() == self.deck.len() {
                self.phase = MemoryPhase::Won;
            }
        }
    }

    /// Advance one simulation tick
    pub fn tick(&mut self) {
        match self.phase {
            MemoryPhase::Countdown => {
                self.countdown_ticks -= 1;
                if self.countdown_ticks == 0 {
                    if self.countdown_value > 1 {
                        self.countdown_value -= 1;
                        self.countdown_ticks = COUNTDOWN_STEP_TICKS;
                    } else {
                        self.deal();
                        self.phase = MemoryPhase::Playing;
                    }
                }
            }
            MemoryPhase::Playing => {
                self.elapsed_ticks += 1;

                if self.lock_ticks > 0 {
                    self.lock_ticks -= 1;
                    if self.lock_ticks == 0 {
                        // Mismatched cards hide; matched ones stay up
                        self.flipped.clear();
                    }
                }

                self.overlay_ticks = self.overlay_ticks.saturating_sub(1);
                self.overlay_roll_ticks -= 1;
                if self.overlay_roll_ticks == 0 {
                    self.overlay_roll_ticks = OVERLAY_ROLL_TICKS;
                    if self.rng.random_bool(0.5) {
                        self.overlay_ticks = OVERLAY_SHOW_TICKS;
                    }
                }
            }
            MemoryPhase::Lobby | MemoryPhase::Won => {}
        }
    }

    fn deal(&mut self) {
        self.deck = build_deck(self.difficulty, &mut self.rng);
        self.matched = vec![false; self.deck.len()];
        self.flipped.clear();
        self.attempts = 0;
        self.elapsed_ticks = 0;
        self.lock_ticks = 0;
        self.overlay_ticks = 0;
        self.overlay_roll_ticks = OVERLAY_ROLL_TICKS;
    }

    /// Back to the lobby, everything cleared
    pub fn reset(&mut self) {
        let difficulty = self.difficulty;
        *self = Self::new(self.seed.wrapping_add(1));
        self.difficulty = difficulty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_state(difficulty: Difficulty) -> MemoryState {
        let mut state = MemoryState::new(42);
        state.select_difficulty(difficulty);
        state.begin();
        for _ in 0..COUNTDOWN_STEPS * COUNTDOWN_STEP_TICKS {
            state.tick();
        }
        assert_eq!(state.phase, MemoryPhase::Playing);
        state
    }

    /// Card indices of one matching pair and one mismatched pair
    fn find_pair(state: &MemoryState) -> (usize, usize) {
        let first = 0;
        let twin = (1..state.deck.len())
            .find(|&i| state.deck[i] == state.deck[first])
            .unwrap();
        (first, twin)
    }

    fn find_mismatch(state: &MemoryState) -> (usize, usize) {
        let first = 0;
        let other = (1..state.deck.len())
            .find(|&i| state.deck[i] != state.deck[first])
            .unwrap();
        (first, other)
    }

    #[test]
    fn countdown_steps_through_three_seconds() {
        let mut state = MemoryState::new(1);
        state.begin();
        assert_eq!(state.phase, MemoryPhase::Countdown);
        assert_eq!(state.countdown_value, 3);
        for _ in 0..COUNTDOWN_STEP_TICKS {
            state.tick();
        }
        assert_eq!(state.countdown_value, 2);
        for _ in 0..2 * COUNTDOWN_STEP_TICKS {
            state.tick();
        }
        assert_eq!(state.phase, MemoryPhase::Playing);
        assert_eq!(state.deck.len(), state.difficulty.pool_size() * 2);
    }

    #[test]
    fn at_most_two_cards_face_up() {
        let mut state = playing_state(Difficulty::Easy);
        let (a, b) = find_mismatch(&state);
        state.flip(a);
        state.flip(b);
        // Third flip ignored: two cards up, board locked
        let c = (0..state.deck.len()).find(|&i| i != a && i != b).unwrap();
        state.flip(c);
        assert_eq!(state.flipped.len(), 2);
        assert!(!state.is_face_up(c));
    }

    #[test]
    fn mismatch_hides_after_reveal_window() {
        let mut state = playing_state(Difficulty::Easy);
        let (a, b) = find_mismatch(&state);
        state.flip(a);
        state.flip(b);
        assert_eq!(state.attempts, 1);
        assert!(state.is_locked());
        assert!(state.is_face_up(a) && state.is_face_up(b));

        for _ in 0..REVEAL_TICKS {
            state.tick();
        }
        assert!(!state.is_locked());
        assert!(!state.is_face_up(a) && !state.is_face_up(b));
    }

    #[test]
    fn match_stays_face_up() {
        let mut state = playing_state(Difficulty::Easy);
        let (a, b) = find_pair(&state);
        state.flip(a);
        state.flip(b);
        for _ in 0..REVEAL_TICKS {
            state.tick();
        }
        assert!(state.is_face_up(a) && state.is_face_up(b));
        assert_eq!(state.matched_count(), 2);
    }

    #[test]
    fn flips_ignored_while_locked() {
        let mut state = playing_state(Difficulty::Easy);
        let (a, b) = find_mismatch(&state);
        state.flip(a);
        state.flip(b);
        let c = (0..state.deck.len()).find(|&i| i != a && i != b).unwrap();
        state.tick();
        state.flip(c);
        assert!(!state.is_face_up(c));
        assert_eq!(state.attempts, 1);
    }

    #[test]
    fn double_flip_of_same_card_is_ignored() {
        let mut state = playing_state(Difficulty::Easy);
        state.flip(0);
        state.flip(0);
        assert_eq!(state.flipped.len(), 1);
        assert_eq!(state.attempts, 0);
    }

    #[test]
    fn matching_every_pair_wins() {
        let mut state = playing_state(Difficulty::Easy);
        // Resolve the whole board by symbol lookup
        while state.phase == MemoryPhase::Playing {
            let next = (0..state.deck.len()).find(|&i| !state.matched[i]).unwrap();
            let twin = (0..state.deck.len())
                .find(|&i| i != next && !state.matched[i] && state.deck[i] == state.deck[next])
                .unwrap();
            state.flip(next);
            state.flip(twin);
            for _ in 0..REVEAL_TICKS {
                state.tick();
            }
        }
        assert_eq!(state.phase, MemoryPhase::Won);
        assert_eq!(state.attempts, state.deck.len() as u32 / 2);
    }

    #[test]
    fn clock_counts_play_ticks() {
        let mut state = playing_state(Difficulty::Easy);
        for _ in 0..(3 * TICKS_PER_SECOND) {
            state.tick();
        }
        assert_eq!(state.elapsed_secs(), 3);
    }

    #[test]
    fn reset_returns_to_lobby_and_keeps_difficulty() {
        let mut state = playing_state(Difficulty::Easy);
        state.flip(0);
        state.reset();
        assert_eq!(state.phase, MemoryPhase::Lobby);
        assert_eq!(state.difficulty, Difficulty::Easy);
        assert!(state.deck.is_empty());
        assert_eq!(state.attempts, 0);
    }
}
