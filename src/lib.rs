//! # stargrid
//!
//! Rule engine for a two-player 3×3 card-placement combo game.
//!
//! Players alternately place colored numeric cards (values 1, 4, 9, 16 in
//! red and blue) on a 3×3 board and claim "combos" — same-colored card sets
//! whose values sum to a Fibonacci number — racing to collect a shared pool
//! of 34 score stars.
//!
//! ## Design
//!
//! - **Pure, in-memory core**: no rendering, input handling, persistence or
//!   networking. A presentation layer, narration layer, and CPU driver call
//!   the public operations and read the outcome data.
//! - **Deterministic**: the only non-determinism is [`core::GameRng`],
//!   injected into the game factory and CPU strategy constructors; a seeded
//!   instance replays identically.
//! - **Invariant-carrying aggregate**: [`game::Game`] is built by a factory
//!   and mutated only through its own operations, which preserve the star
//!   (34) and card (64) conservation laws.
//!
//! ## Modules
//!
//! - `core`: cards, positions, errors, RNG
//! - `board`, `deck`, `hand`, `player`: the entities
//! - `combo`, `detector`: scoring patterns and the detection algorithm
//! - `game`: the orchestrating state machine
//! - `cpu`: automated-opponent strategies

#![forbid(unsafe_code)]

pub mod core;

pub mod board;
pub mod combo;
pub mod cpu;
pub mod deck;
pub mod detector;
pub mod game;
pub mod hand;
pub mod player;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Board;
pub use crate::combo::{Combo, ComboType};
pub use crate::core::{Card, CardColor, CardId, CardValue, GameError, GameRng, Position};
pub use crate::cpu::{
    strategy_for, CpuEasyStrategy, CpuNormalStrategy, CpuStrategy, CpuTurnResult, Difficulty,
};
pub use crate::deck::{Deck, DECK_SIZE};
pub use crate::detector::ComboDetector;
pub use crate::game::{Game, GameState, INITIAL_HAND_SIZE, INITIAL_STARS};
pub use crate::hand::Hand;
pub use crate::player::{Player, PlayerId};
