//! Game rules for N-in-a-row
//!
//! Only one rule matters: a full row, column or diagonal of one mark wins.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winner, has_line_through, has_winning_line};
