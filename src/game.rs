//! Turn-alternation state machine
//!
//! [`Game`] owns the board for the lifetime of a match and drives it to a
//! terminal outcome: a win for one color or a draw on a full board. Moves
//! come from [`MoveSource`] implementations; the game itself never touches
//! input or randomness.

use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::error::PlayError;
use crate::players::MoveSource;
use crate::rules::{has_five_at, has_five_in_row};

/// Match status. `Won` and `Draw` are terminal: no further moves are
/// accepted once reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won(Stone),
    Draw,
}

impl Status {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// State of one match
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Stone,
    moves_played: usize,
    status: Status,
    last_move: Option<Pos>,
}

impl Game {
    /// Start a new match on an empty `size` x `size` board, Black to move
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            current: Stone::Black,
            moves_played: 0,
            status: Status::InProgress,
            last_move: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color to move next. Meaningless once the match is over.
    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Apply one move for the current player.
    ///
    /// Places the stone, checks the win condition, then the full board,
    /// and otherwise passes the turn. Legality retry belongs to the move
    /// source; an illegal position reaching this point is an error, as is
    /// a move after the match has ended.
    pub fn apply(&mut self, pos: Pos) -> Result<Status, PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        let stone = self.current;
        self.board.place(pos, stone)?;
        self.moves_played += 1;
        self.last_move = Some(pos);
        debug!(row = pos.row, col = pos.col, ?stone, "stone placed");

        let won = has_five_in_row(&self.board, stone);
        // A new run always passes through the move that completed it
        debug_assert_eq!(won, has_five_at(&self.board, pos, stone));

        if won {
            self.status = Status::Won(stone);
            info!(winner = ?stone, moves = self.moves_played, "five in a row");
        } else if self.moves_played == self.board.size() * self.board.size() {
            self.status = Status::Draw;
            info!(moves = self.moves_played, "board full, match drawn");
        } else {
            self.current = stone.opponent();
        }
        Ok(self.status)
    }

    /// Run one turn: obtain a move from `source` and apply it.
    ///
    /// Collaborator faults propagate unhandled.
    pub fn play_turn(&mut self, source: &mut dyn MoveSource) -> Result<Status, PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        let pos = source.next_move(&self.board)?;
        self.apply(pos)
    }
}
