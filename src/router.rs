//! Page routes, one per game
//!
//! The shell navigates with URL hashes (`#/aether-pong`); each route maps to
//! a page section in the document.

use serde::{Deserialize, Serialize};

/// A page of the arcade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Route {
    #[default]
    Hub,
    Pong,
    Memory,
    TicTacToe,
    Trivia,
    NotFound,
}

impl Route {
    /// Every game page (the hub links these, in this order)
    pub const GAMES: [Route; 4] = [Route::Pong, Route::Memory, Route::TicTacToe, Route::Trivia];

    pub fn path(self) -> &'static str {
        match self {
            Route::Hub => "/",
            Route::Pong => "/aether-pong",
            Route::Memory => "/squid-memory",
            Route::TicTacToe => "/tic-tac-toe",
            Route::Trivia => "/trivia",
            Route::NotFound => "/404",
        }
    }

    /// Parse a location path or hash fragment. Unknown paths land on the
    /// not-found page.
    pub fn from_path(raw: &str) -> Self {
        let path = raw.trim_start_matches('#');
        let path = path.trim_end_matches('/');
        match path {
            "" | "/" => Route::Hub,
            "/aether-pong" => Route::Pong,
            "/squid-memory" => Route::Memory,
            "/tic-tac-toe" => Route::TicTacToe,
            "/trivia" => Route::Trivia,
            _ => Route::NotFound,
        }
    }

    /// DOM id of the page section this route shows
    pub fn section_id(self) -> &'static str {
        match self {
            Route::Hub => "page-hub",
            Route::Pong => "page-pong",
            Route::Memory => "page-memory",
            Route::TicTacToe => "page-tictactoe",
            Route::Trivia => "page-trivia",
            Route::NotFound => "page-not-found",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Hub => "MindRelic",
            Route::Pong => "Aether Pong",
            Route::Memory => "Squid Memory Match",
            Route::TicTacToe => "Squid Tic Tac Toe",
            Route::Trivia => "Crypto Trivia Challenge",
            Route::NotFound => "404 Corrupted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Hub,
            Route::Pong,
            Route::Memory,
            Route::TicTacToe,
            Route::Trivia,
        ] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn hash_prefix_and_trailing_slash_are_accepted() {
        assert_eq!(Route::from_path("#/aether-pong"), Route::Pong);
        assert_eq!(Route::from_path("/tic-tac-toe/"), Route::TicTacToe);
        assert_eq!(Route::from_path("#"), Route::Hub);
        assert_eq!(Route::from_path(""), Route::Hub);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/trivia-b"), Route::NotFound);
        assert_eq!(Route::from_path("/squid"), Route::NotFound);
    }

    #[test]
    fn section_ids_are_unique() {
        let all = [
            Route::Hub,
            Route::Pong,
            Route::Memory,
            Route::TicTacToe,
            Route::Trivia,
            Route::NotFound,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.section_id(), b.section_id());
            }
        }
    }
}
