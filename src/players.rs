//! Move sources
//!
//! A move source produces one candidate position per invocation and
//! retries internally until the position passes [`Board::is_legal`].
//! Sources only read the board; placement stays with the game.
//!
//! Faults that a retry cannot fix (malformed input, a closed stream, an
//! exhausted board) surface as [`PlayError`] and abort the match.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::board::{Board, Pos};
use crate::error::PlayError;

/// A provider of one candidate move per invocation
pub trait MoveSource {
    /// Produce the next move for the current player.
    ///
    /// The returned position is legal on `board` at the time of return.
    fn next_move(&mut self, board: &Board) -> Result<Pos, PlayError>;
}

/// Uniform-random move source, the computer opponent.
///
/// Draws in-bounds positions from a ChaCha8 stream and redraws until one
/// is legal. Seeded construction gives reproducible matches.
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Create a source seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create a deterministic source from an explicit seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomSource {
    fn next_move(&mut self, board: &Board) -> Result<Pos, PlayError> {
        // Rejection sampling on a full board would never return, so the
        // exhaustion check comes first.
        if !board.has_legal_move() {
            return Err(PlayError::BoardExhausted);
        }
        loop {
            let pos = Pos::new(
                self.rng.gen_range(0..board.size()),
                self.rng.gen_range(0..board.size()),
            );
            if board.is_legal(pos) {
                debug!(row = pos.row, col = pos.col, "random move drawn");
                return Ok(pos);
            }
        }
    }
}

/// Interactive move source reading `row col` pairs from a text stream.
///
/// The two integers may arrive on one line or across several. An illegal
/// position silently re-prompts; a token that is not an integer is a fatal
/// fault, as is a closed stream.
pub struct ConsoleSource<R, W> {
    input: R,
    output: W,
    tokens: VecDeque<String>,
}

impl<R: BufRead, W: Write> ConsoleSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            tokens: VecDeque::new(),
        }
    }

    /// Pull the next whitespace-separated integer from the stream
    fn next_int(&mut self) -> Result<i64, PlayError> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return token.parse().map_err(|_| PlayError::MalformedInput(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayError::InputClosed);
            }
            self.tokens
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleSource<R, W> {
    fn next_move(&mut self, board: &Board) -> Result<Pos, PlayError> {
        loop {
            write!(self.output, "Enter your move (row col): ")?;
            self.output.flush()?;
            let row = self.next_int()?;
            let col = self.next_int()?;
            // Negative coordinates are off-board, not malformed
            if row < 0 || col < 0 {
                continue;
            }
            let pos = Pos::new(row as usize, col as usize);
            if board.is_legal(pos) {
                return Ok(pos);
            }
        }
    }
}

/// Scripted move source playing a fixed sequence, for deterministic tests
pub struct ScriptedSource {
    moves: VecDeque<Pos>,
}

impl ScriptedSource {
    pub fn new<I: IntoIterator<Item = Pos>>(moves: I) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }
}

impl MoveSource for ScriptedSource {
    fn next_move(&mut self, board: &Board) -> Result<Pos, PlayError> {
        // Legality retry stays inside the source: skip illegal entries
        while let Some(pos) = self.moves.pop_front() {
            if board.is_legal(pos) {
                return Ok(pos);
            }
        }
        Err(PlayError::ScriptExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use std::io::Cursor;

    fn console(input: &str) -> ConsoleSource<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleSource::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_random_moves_are_legal() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Stone::Black).unwrap();
        board.place(Pos::new(7, 8), Stone::White).unwrap();

        let mut source = RandomSource::with_seed(42);
        for _ in 0..100 {
            let pos = source.next_move(&board).unwrap();
            assert!(board.is_legal(pos));
        }
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        let board = Board::new(15);
        let mut a = RandomSource::with_seed(7);
        let mut b = RandomSource::with_seed(7);
        for _ in 0..20 {
            assert_eq!(a.next_move(&board).unwrap(), b.next_move(&board).unwrap());
        }
    }

    #[test]
    fn test_random_redraws_until_legal() {
        // One free cell left: every draw must land on it
        let mut board = Board::new(2);
        board.place(Pos::new(0, 0), Stone::Black).unwrap();
        board.place(Pos::new(0, 1), Stone::White).unwrap();
        board.place(Pos::new(1, 0), Stone::Black).unwrap();

        let mut source = RandomSource::with_seed(0);
        assert_eq!(source.next_move(&board).unwrap(), Pos::new(1, 1));
    }

    #[test]
    fn test_random_errors_on_full_board() {
        let mut board = Board::new(2);
        let mut stone = Stone::Black;
        for pos in board.positions().collect::<Vec<_>>() {
            board.place(pos, stone).unwrap();
            stone = stone.opponent();
        }

        let mut source = RandomSource::with_seed(0);
        assert!(matches!(
            source.next_move(&board),
            Err(PlayError::BoardExhausted)
        ));
    }

    #[test]
    fn test_console_reads_one_line() {
        let board = Board::new(15);
        let mut source = console("3 4\n");
        assert_eq!(source.next_move(&board).unwrap(), Pos::new(3, 4));
    }

    #[test]
    fn test_console_reads_across_lines() {
        let board = Board::new(15);
        let mut source = console("3\n4\n");
        assert_eq!(source.next_move(&board).unwrap(), Pos::new(3, 4));
    }

    #[test]
    fn test_console_reprompts_on_illegal_input() {
        let mut board = Board::new(5);
        board.place(Pos::new(1, 1), Stone::White).unwrap();

        // Out of bounds, occupied, negative, then finally legal
        let mut source = console("7 7\n1 1\n-1 0\n2 2\n");
        assert_eq!(source.next_move(&board).unwrap(), Pos::new(2, 2));
    }

    #[test]
    fn test_console_prompts_each_attempt() {
        let board = Board::new(5);
        let mut source = console("9 9\n0 0\n");
        source.next_move(&board).unwrap();
        let output = String::from_utf8(source.output.clone()).unwrap();
        assert_eq!(output.matches("Enter your move").count(), 2);
    }

    #[test]
    fn test_console_malformed_input_is_fatal() {
        let board = Board::new(15);
        let mut source = console("three 4\n");
        assert!(matches!(
            source.next_move(&board),
            Err(PlayError::MalformedInput(token)) if token == "three"
        ));
    }

    #[test]
    fn test_console_eof_is_fatal() {
        let board = Board::new(15);
        let mut source = console("");
        assert!(matches!(
            source.next_move(&board),
            Err(PlayError::InputClosed)
        ));
    }

    #[test]
    fn test_scripted_plays_in_order() {
        let board = Board::new(15);
        let mut source = ScriptedSource::new([Pos::new(0, 0), Pos::new(1, 1)]);
        assert_eq!(source.next_move(&board).unwrap(), Pos::new(0, 0));
        assert_eq!(source.next_move(&board).unwrap(), Pos::new(1, 1));
        assert!(matches!(
            source.next_move(&board),
            Err(PlayError::ScriptExhausted)
        ));
    }

    #[test]
    fn test_scripted_skips_illegal_entries() {
        let mut board = Board::new(15);
        board.place(Pos::new(0, 0), Stone::Black).unwrap();

        let mut source = ScriptedSource::new([Pos::new(0, 0), Pos::new(20, 0), Pos::new(2, 2)]);
        assert_eq!(source.next_move(&board).unwrap(), Pos::new(2, 2));
    }
}
