//! Human-versus-engine game sessions.
//!
//! A session drives the ply pairs a front end needs: the human moves, the
//! engine answers, and undo/redo step back and forth a whole exchange at a
//! time.

use crate::engine::{Decision, DecisionEngine};
use crate::{BoardState, Cell, GameStatus, InvalidMove, Move, Player};
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

/// What happened during one call to [`GameSession::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// The human's move.
    pub human: Move,
    /// The engine's answer, absent if the human's move ended the game.
    pub reply: Option<Decision>,
    /// Status after both plies.
    pub status: GameStatus,
}

/// A game between a human and the engine.
///
/// The human plays [`Player::HUMAN`] and always moves first.
#[derive(Debug, Clone)]
pub struct GameSession<R = StdRng> {
    state: BoardState,
    engine: DecisionEngine<R>,
}

impl GameSession<StdRng> {
    /// Session whose engine draws tie-breaks from the operating system.
    pub fn new() -> Self {
        Self::with_engine(DecisionEngine::from_os_rng())
    }

    /// Session with reproducible engine tie-breaks.
    pub fn seeded(seed: u64) -> Self {
        Self::with_engine(DecisionEngine::seeded(seed))
    }
}

impl Default for GameSession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameSession<R> {
    /// Session around an existing engine.
    #[instrument(skip(engine))]
    pub fn with_engine(engine: DecisionEngine<R>) -> Self {
        info!("Starting new game session");
        Self {
            state: BoardState::new(),
            engine,
        }
    }

    /// The side the human plays.
    pub fn human(&self) -> Player {
        Player::HUMAN
    }

    /// The side the engine plays.
    pub fn ai(&self) -> Player {
        Player::AI
    }

    /// Read access to the board state.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Won, drawn, or in progress.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Plays the human's move at `cell` and, if the game goes on, the
    /// engine's reply.
    ///
    /// # Errors
    ///
    /// [`InvalidMove::GameOver`] once the game has ended, otherwise whatever
    /// [`BoardState::apply_move`] rejects. Nothing changes on error.
    #[instrument(skip(self))]
    pub fn play(&mut self, cell: Cell) -> Result<Turn, InvalidMove> {
        if self.state.is_game_over() {
            return Err(InvalidMove::GameOver);
        }

        self.state.apply_move(cell)?;
        let human = Move::new(cell, self.human());

        let reply = if self.state.is_game_over() {
            None
        } else {
            let decision = self.engine.decide(&self.state, self.ai());
            if let Some(decision) = decision {
                self.state.apply_move(decision.cell)?;
            }
            decision
        };

        let status = self.state.status();
        if status.is_over() {
            info!(%status, "Game finished");
        }
        Ok(Turn {
            human,
            reply,
            status,
        })
    }

    /// Steps back to the human's previous turn.
    ///
    /// Usually reverts two plies (engine reply and human move). Returns the
    /// reverted moves, most recent first.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Vec<Move> {
        let mut undone = Vec::with_capacity(2);
        if let Some(mov) = self.state.undo() {
            undone.push(mov);
        }
        if self.state.current_turn() != self.human()
            && let Some(mov) = self.state.undo()
        {
            undone.push(mov);
        }
        debug!(count = undone.len(), "Undo");
        undone
    }

    /// Replays what [`undo`](Self::undo) took back.
    ///
    /// Returns the re-applied moves in play order.
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> Vec<Move> {
        let mut redone = Vec::with_capacity(2);
        if let Some(mov) = self.state.redo() {
            redone.push(mov);
        }
        if self.state.current_turn() != self.human()
            && let Some(mov) = self.state.redo()
        {
            redone.push(mov);
        }
        debug!(count = redone.len(), "Redo");
        redone
    }

    /// Starts over on an empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game session");
        self.state.reset();
    }
}
