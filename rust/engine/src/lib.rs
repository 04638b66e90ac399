//! # headsup-engine: Heads-up Fixed-Limit Poker Core
//!
//! Hand ranking for five to seven cards and a two-seat fixed-limit betting
//! table that runs preflop, flop, turn and river through to showdown.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and two-character text form
//! - [`deck`] - 52-card deck built from an injectable [`deck::Shuffler`]
//! - [`hand`] - Hand classification, best-of-seven selection and ordering
//! - [`player`] - Seats and per-player betting state
//! - [`table`] - The betting state machine, pot accounting and showdown
//! - [`errors`] - Error types for evaluation and parsing
//!
//! ## Quick Start
//!
//! ```rust
//! use headsup_engine::cards::parse_cards;
//! use headsup_engine::hand::{evaluate, Ranking};
//!
//! let cards = parse_cards("Ah Ks Ac Tc 5s 9h 9s").unwrap();
//! let hand = evaluate(&cards).unwrap();
//! assert_eq!(hand.ranking(), Ranking::TwoPair);
//! assert_eq!(hand.description(), "two pair aces and nines");
//! ```
//!
//! ## Deterministic Tables
//!
//! Shuffling is injected, so the same seed always deals the same hands:
//!
//! ```rust
//! use headsup_engine::player::Seat;
//! use headsup_engine::table::{Table, TableConfig};
//!
//! let t1 = Table::with_seed(TableConfig::default(), 42);
//! let t2 = Table::with_seed(TableConfig::default(), 42);
//! assert_eq!(
//!     t1.player(Seat::One).hole_cards(),
//!     t2.player(Seat::One).hole_cards()
//! );
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod player;
pub mod table;
