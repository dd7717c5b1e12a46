//! Console front end for the N-in-a-row game
//!
//! The engine only needs two things from the outside world: a way to show
//! the board and a way to ask the human for a move. Both sit behind
//! [`Frontend`]; [`Console`] implements it over any line-based reader and
//! writer.

mod app;
mod board_view;
mod console;
mod game_state;

pub use app::{run, run_game, GameSettings};
pub use board_view::render_board;
pub use console::{parse_board_size, parse_move, Console, InputError};
pub use game_state::{Frontend, GameResult, GameState};
