//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The engine composes them;
//! front-ends may call them directly for previews.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, any_winning_line, winning_line};
