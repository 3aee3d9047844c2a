//! Text rendering of the board grid
//!
//! The grid is presented as `size` rows of glyphs separated by single
//! spaces, one row per line, in internal row order: `●` Black, `○` White,
//! `+` empty.

use crate::board::{Board, Pos};

/// Render the full grid, trailing newline included
pub fn render(board: &Board) -> String {
    let size = board.size();
    // Glyphs are up to 3 bytes in UTF-8
    let mut out = String::with_capacity(size * (size * 4 + 1));
    for row in 0..size {
        for col in 0..size {
            if col > 0 {
                out.push(' ');
            }
            out.push_str(board.get(Pos::new(row, col)).glyph());
        }
        out.push('\n');
    }
    out
}
