use crate::board::Pos;

/// Errors from board mutation and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The position is out of bounds or already occupied. Move sources
    /// recover from this by retrying; it never aborts a match on its own.
    #[error("illegal move at {0}: out of bounds or occupied")]
    InvalidMove(Pos),

    /// A query addressed a cell outside the grid. Unreachable when
    /// legality is checked first.
    #[error("position {0} is outside the board")]
    OutOfBounds(Pos),
}

/// Errors from driving a match. Anything beyond `Board` is a fatal fault
/// of a collaborator and aborts the match unhandled.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("the match is already over")]
    GameOver,

    #[error(transparent)]
    Board(#[from] BoardError),

    /// The automatic source found no empty cell to draw. Surfaced instead
    /// of looping forever; a match that reaches the draw transition never
    /// sees it.
    #[error("no legal moves remain on the board")]
    BoardExhausted,

    #[error("scripted move source ran out of moves")]
    ScriptExhausted,

    #[error("malformed move input: {0:?}")]
    MalformedInput(String),

    #[error("input stream closed before a move was read")]
    InputClosed,

    #[error("failed to read move input: {0}")]
    Io(#[from] std::io::Error),
}
