//! Core types: cards, positions, errors, RNG.
//!
//! These are the value objects the rest of the engine is built from. They
//! carry no game-flow logic of their own.

pub mod card;
pub mod error;
pub mod position;
pub mod rng;

pub use card::{Card, CardColor, CardId, CardValue};
pub use error::GameError;
pub use position::Position;
pub use rng::GameRng;
