//! Deck construction for the memory trial

use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// The full symbol bank; a difficulty selects a prefix of it
pub const SYMBOLS: [&str; 12] = [
    "◯", "△", "□", "💀", "🎮", "🪙", "🔺", "🟥", "🟢", "👁️", "₩", "🧠",
];

/// Difficulty selects the symbol pool size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Number of distinct symbols in play (deck size is double this)
    pub fn pool_size(&self) -> usize {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Medium | Difficulty::Hard => SYMBOLS.len(),
        }
    }
}

/// Build a shuffled deck of symbol indices; each symbol appears exactly twice
pub fn build_deck(difficulty: Difficulty, rng: &mut Pcg32) -> Vec<u8> {
    let pool = difficulty.pool_size() as u8;
    let mut deck: Vec<u8> = (0..pool).chain(0..pool).collect();
    deck.shuffle(rng);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn deck_holds_every_symbol_twice() {
        let mut rng = Pcg32::seed_from_u64(1);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let deck = build_deck(difficulty, &mut rng);
            assert_eq!(deck.len(), difficulty.pool_size() * 2);
            for symbol in 0..difficulty.pool_size() as u8 {
                let count = deck.iter().filter(|&&s| s == symbol).count();
                assert_eq!(count, 2, "symbol {symbol} should appear twice");
            }
        }
    }

    #[test]
    fn shuffle_is_seeded() {
        let mut a = Pcg32::seed_from_u64(77);
        let mut b = Pcg32::seed_from_u64(77);
        assert_eq!(
            build_deck(Difficulty::Hard, &mut a),
            build_deck(Difficulty::Hard, &mut b)
        );
    }

    #[test]
    fn difficulty_round_trips() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }
}
