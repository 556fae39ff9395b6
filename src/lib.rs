//! rummy-rs: deck lifecycle engine for a 108-card rummy game
//!
//! Goals:
//! - Exact, reproducible deck construction (every card has a unique id)
//! - Unbiased Fisher-Yates shuffling from a cryptographic source
//! - Round-robin dealing that never loses or duplicates a card
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: build, shuffle and deal
//! ```
//! use rummy_rs::deal::deal_hands;
//! use rummy_rs::deck::{generate_deck, shuffle};
//!
//! let deck = shuffle(generate_deck()).unwrap();
//! let deal = deal_hands(deck, 4).unwrap();
//! assert!(deal.hands.iter().all(|h| h.len() == 10));
//! assert_eq!(deal.remaining.len(), 68);
//! ```
//!
//! ## TUI
//! Run the deal viewer with:
//! ```sh
//! cargo run --bin rummy-rs
//! ```

pub mod cards;
pub mod deal;
pub mod deck;
pub mod table;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
