//! Board state with turn tracking and undo/redo history.

use crate::invariants::{BoardStateInvariants, InvariantSet};
use crate::rules::{check_winner, is_full};
use crate::{Board, Cell, InvalidMove, Mark, Move, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
    /// Game ended in a win.
    #[display("{_0} won!")]
    Won(Player),
    /// Game ended in a draw.
    #[display("Game is tied!")]
    Draw,
}

impl GameStatus {
    /// True once the game is won or drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// The grid, whose turn it is, and both history stacks.
///
/// `BoardState` is the single owner of the game position. Queries hand out
/// copies or shared slices of `Copy` moves; every mutation goes through
/// [`apply_move`](Self::apply_move), [`undo`](Self::undo),
/// [`redo`](Self::redo) or [`reset`](Self::reset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    board: Board,
    current_turn: Player,
    /// Applied moves, most recent last.
    history: Vec<Move>,
    /// Undone moves, most recent last.
    redo: Vec<Move>,
}

impl BoardState {
    /// Creates an empty board with Cross to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Player::Cross,
            history: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Places the current player's mark at `cell`.
    ///
    /// Clears the redo buffer and passes the turn to the opponent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::OutOfRange`] for an off-board cell and
    /// [`InvalidMove::Occupied`] for a taken one. The state is unchanged on
    /// error.
    #[instrument(skip(self), fields(player = %self.current_turn))]
    pub fn apply_move(&mut self, cell: Cell) -> Result<(), InvalidMove> {
        if !cell.is_valid() {
            warn!(%cell, "Rejected off-board move");
            return Err(InvalidMove::OutOfRange(cell));
        }
        if let Some(by) = self.board.get(cell).player() {
            warn!(%cell, %by, "Rejected move on occupied cell");
            return Err(InvalidMove::Occupied { cell, by });
        }

        let mov = Move::new(cell, self.current_turn);
        self.board.place(cell, self.current_turn);
        self.history.push(mov);
        self.redo.clear();
        self.current_turn = self.current_turn.opponent();

        debug!(%mov, plies = self.history.len(), "Move applied");
        self.debug_check_invariants();
        Ok(())
    }

    /// Takes back the most recent move. No-op on an empty history.
    ///
    /// Returns the move that was undone so a front end can clear its cell.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Option<Move> {
        let mov = self.history.pop()?;
        self.board.set(mov.cell(), Mark::Empty);
        self.current_turn = mov.player();
        self.redo.push(mov);

        debug!(%mov, redo_depth = self.redo.len(), "Move undone");
        self.debug_check_invariants();
        Some(mov)
    }

    /// Re-applies the most recently undone move. No-op on an empty buffer.
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> Option<Move> {
        let mov = self.redo.pop()?;
        self.board.place(mov.cell(), mov.player());
        self.current_turn = mov.player().opponent();
        self.history.push(mov);

        debug!(%mov, redo_depth = self.redo.len(), "Move redone");
        self.debug_check_invariants();
        Some(mov)
    }

    /// Clears the board and both stacks; Cross moves first.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(plies = self.history.len(), "Resetting board");
        *self = Self::new();
    }

    /// Mark at `cell`; empty if unoccupied or off the board.
    pub fn occupant(&self, cell: Cell) -> Mark {
        self.board.get(cell)
    }

    /// True if `cell` holds a mark.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        !self.occupant(cell).is_empty()
    }

    /// True if no cell is empty.
    pub fn is_full(&self) -> bool {
        is_full(&self.board)
    }

    /// The player owning a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(&self.board)
    }

    /// True once someone has won or the board is full.
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Won, drawn, or still in progress.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None if self.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// The player whose mark the next move places.
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// A copy of the grid.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Number of empty cells.
    pub fn count_empty(&self) -> usize {
        self.board.count_empty()
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Undone moves, the next one to redo last.
    pub fn redo_buffer(&self) -> &[Move] {
        &self.redo
    }

    /// The most recently applied move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// True if there is a move to undo.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// True if there is a move to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// The move [`undo`](Self::undo) would take back.
    pub fn peek_undo(&self) -> Option<Move> {
        self.last_move()
    }

    /// The move [`redo`](Self::redo) would re-apply.
    pub fn peek_redo(&self) -> Option<Move> {
        self.redo.last().copied()
    }

    /// A serializable view of the position.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rows: std::array::from_fn(|r| {
                std::array::from_fn(|c| self.board.get(Cell::new(r as i8, c as i8)))
            }),
            current_turn: self.current_turn,
            status: self.status(),
            history: self.history.clone(),
            redo: self.redo.clone(),
        }
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = BoardStateInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(%violation, "Board state invariant violated");
            }
            panic!("Board state invariants violated: {violations:?}");
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_current_turn(&mut self, player: Player) {
        self.current_turn = player;
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable copy of a [`BoardState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Marks by row, then column.
    pub rows: [[Mark; 3]; 3],
    /// Player to move next.
    pub current_turn: Player,
    /// Outcome so far.
    pub status: GameStatus,
    /// Applied moves, oldest first.
    pub history: Vec<Move>,
    /// Undone moves, next to redo last.
    pub redo: Vec<Move>,
}
