//! # Connect Four
//!
//! A Connect Four game for the terminal. The engine tracks the board,
//! enforces move legality, alternates turns, and detects wins along all
//! four axes in constant time per move. Positions are encoded as digit
//! strings and can be handed to an external solver for best-move
//! evaluation, shown in an optional panel.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, engine state machine
//! - [`eval`] — Evaluation boundary: solver capability trait + HTTP client
//! - [`ui`] — Terminal UI built with Ratatui
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod ui;
