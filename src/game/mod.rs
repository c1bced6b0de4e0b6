//! Core Connect Four logic: board representation, player types, and the
//! game engine that validates moves, detects wins, and encodes positions.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, COLS, ROWS};
pub use engine::{GameEngine, Outcome};
pub use player::Player;
