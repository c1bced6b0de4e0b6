//! Terminal UI: the playable game view with an optional evaluation panel
//! fed by the external solver.

mod app;
pub mod board_widget;
mod game_view;

pub use app::{App, EvalDisplay};
