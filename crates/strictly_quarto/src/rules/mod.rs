//! Game rules for Quarto.
//!
//! Pure functions over boards and games: line geometry and win
//! detection. Kept apart from state storage so the move processor and
//! the invariants can share them.

pub mod lines;
pub mod win;

pub use lines::{Line, LineKind, all_lines, lines_through};
pub use win::{
    WinningLine, check_lines_through, common_attribute, find_winning_line, has_winning_position,
    is_winning_line,
};
