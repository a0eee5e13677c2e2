//! Selection-driven game session.
//!
//! `BoardEngine` is what a UI talks to. A click picks a marble with
//! [`BoardEngine::select_marble`]; a key press pushes it with
//! [`BoardEngine::attempt_move`]; the redraw reads
//! [`BoardEngine::query_status`].

use crate::core::{Cell, Direction, GameConfig, GameState, GameStatus, Move, MoveOutcome, Phase, Player, Pos};
use crate::error::MoveError;
use crate::rules::push::check_origin;
use crate::rules::{GameResult, RulesEngine};

use super::game::KubaRules;

/// A Kuba game plus the current marble selection.
#[derive(Clone, Debug)]
pub struct BoardEngine {
    rules: KubaRules,
    state: GameState,
    selection: Option<Pos>,
}

impl BoardEngine {
    /// Standard game, PlayerA to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    #[must_use]
    pub fn with_config(config: &GameConfig) -> Self {
        Self::from_state(GameState::new(config))
    }

    /// Resume from an existing state.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self {
            rules: KubaRules::new(),
            state,
            selection: None,
        }
    }

    // === Session Flow ===

    /// Pick the marble at `(row, col)` for the player to move.
    ///
    /// On failure the selection is cleared and the error explains why.
    pub fn select_marble(&mut self, row: usize, col: usize) -> Result<Pos, MoveError> {
        self.selection = None;

        if let Some(winner) = self.state.winner() {
            return Err(self.reject(MoveError::GameOver { winner }));
        }

        let pos = Pos::new(row, col);
        match check_origin(&self.state.board, self.state.turn, pos) {
            Ok(()) => {
                log::debug!("{} selected {pos}", self.state.turn);
                self.selection = Some(pos);
                Ok(pos)
            }
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Push the selected marble in `direction`.
    ///
    /// The selection is consumed whatever the outcome.
    pub fn attempt_move(&mut self, direction: Direction) -> Result<MoveOutcome, MoveError> {
        let selection = self.selection.take();

        if let Some(winner) = self.state.winner() {
            return Err(self.reject(MoveError::GameOver { winner }));
        }
        let Some(origin) = selection else {
            return Err(self.reject(MoveError::NoSelection));
        };

        self.make_move(self.state.turn, origin, direction)
    }

    /// Push the marble at `origin` for `player` without going through the
    /// selection step. Clears any pending selection.
    pub fn make_move(
        &mut self,
        player: Player,
        origin: impl Into<Pos>,
        direction: Direction,
    ) -> Result<MoveOutcome, MoveError> {
        self.selection = None;
        let mv = Move::new(origin, direction);
        self.rules
            .apply_move(&mut self.state, player, &mv)
            .map_err(|err| self.reject(err))
    }

    /// Snapshot for rendering and score display.
    #[must_use]
    pub fn query_status(&self) -> GameStatus {
        GameStatus::capture(&self.state, self.selection)
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn selection(&self) -> Option<Pos> {
        self.selection
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.query_status().phase
    }

    #[must_use]
    pub fn current_turn(&self) -> Player {
        self.state.turn
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Winner and how they won, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    /// Neutral marbles captured by `player`.
    #[must_use]
    pub fn captured(&self, player: Player) -> u32 {
        self.state.captured(player)
    }

    /// Cell contents at `(row, col)`, or `None` off-board.
    #[must_use]
    pub fn marble_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.state.board.get(Pos::new(row, col))
    }

    /// Marbles on the board as `(white, black, red)`.
    #[must_use]
    pub fn marble_counts(&self) -> (usize, usize, usize) {
        self.state.board.marble_counts()
    }

    /// Legal moves for the player to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.rules.legal_moves(&self.state, self.state.turn)
    }

    fn reject(&self, err: MoveError) -> MoveError {
        log::debug!("{} rejected: {err}", self.state.turn);
        err
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new()
    }
}
