use crate::error::{IllegalMove, ReplayError};

use super::board::COLS;
use super::{Board, Player};

/// How a game stands: still going, won, or drawn. Once `Win` or `Draw` is
/// reached no further moves are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

/// One game of Connect Four: the board, whose turn it is, the move history,
/// and the outcome. Mutated only through [`GameEngine::apply_move`] and
/// [`GameEngine::reset`], which keeps the pieces consistent with each other
/// (a winner can never coexist with an in-progress outcome, and every board
/// is reachable by replaying the move history).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    first_player: Player,
    moves: Vec<u8>,
    outcome: Outcome,
}

impl GameEngine {
    /// Fresh game with Red to move.
    pub fn new() -> Self {
        Self::with_first_player(Player::Red)
    }

    /// Fresh game with the given player to move.
    pub fn with_first_player(first: Player) -> Self {
        GameEngine {
            board: Board::new(),
            current_player: first,
            first_player: first,
            moves: Vec::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Rebuild a game from a position string: one digit per move, `'1'`
    /// through `'7'`, leftmost column first. Inverse of [`position`].
    ///
    /// [`position`]: GameEngine::position
    pub fn replay(position: &str) -> Result<Self, ReplayError> {
        let mut engine = Self::new();
        for ch in position.chars() {
            let col = match ch.to_digit(10) {
                Some(d @ 1..=7) => (d - 1) as usize,
                _ => return Err(ReplayError::BadDigit(ch)),
            };
            engine
                .apply_move(col)
                .map_err(|source| ReplayError::IllegalMove {
                    index: engine.moves.len(),
                    source,
                })?;
        }
        Ok(engine)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Columns applied so far, 0-based, oldest first.
    pub fn moves(&self) -> &[u8] {
        &self.moves
    }

    /// Columns that can still be played. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's disc in `col`, returning the landing row.
    ///
    /// On a winning move the outcome becomes `Win` for the mover and the
    /// turn does not pass; on a board-filling move it becomes `Draw`;
    /// otherwise the other player is up next. A rejected move leaves the
    /// engine exactly as it was.
    pub fn apply_move(&mut self, col: usize) -> Result<usize, IllegalMove> {
        if self.is_terminal() {
            return Err(IllegalMove::GameOver);
        }

        // drop_disc validates range and fullness before touching the board,
        // so an Err here means nothing has changed yet.
        let row = self.board.drop_disc(col, self.current_player.cell())?;
        self.moves.push(col as u8);

        if self.board.is_winning_cell(row, col) {
            self.outcome = Outcome::Win(self.current_player);
        } else if self.board.is_full() {
            self.outcome = Outcome::Draw;
        } else {
            self.current_player = self.current_player.other();
        }

        Ok(row)
    }

    /// Back to an empty board with the original first player to move.
    pub fn reset(&mut self) {
        *self = Self::with_first_player(self.first_player);
    }

    /// The move history as a digit string, column+1 per move — the form the
    /// external solver takes as its position parameter.
    pub fn position(&self) -> String {
        self.moves.iter().map(|&col| (col + b'1') as char).collect()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
