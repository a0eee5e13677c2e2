//! Kuba rules implementation.

use crate::core::{Cell, GameState, Move, MoveOutcome, Player};
use crate::error::MoveError;
use crate::rules::push::{apply_push, plan_push, PushPlan};
use crate::rules::win::check_winner;
use crate::rules::{GameResult, RulesEngine};

/// The Kuba rule set. Stateless; all game data lives in `GameState`.
#[derive(Clone, Copy, Debug, Default)]
pub struct KubaRules;

impl KubaRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RulesEngine for KubaRules {
    fn validate_move(&self, state: &GameState, player: Player, mv: &Move) -> Result<PushPlan, MoveError> {
        if let Some(winner) = state.winner() {
            return Err(MoveError::GameOver { winner });
        }
        if !mv.origin.is_on_board() {
            return Err(MoveError::OutOfBounds {
                row: mv.origin.row,
                col: mv.origin.col,
            });
        }
        if player != state.turn {
            return Err(MoveError::NotYourTurn {
                expected: state.turn,
                actual: player,
            });
        }

        plan_push(&state.board, player, mv.origin, mv.direction)
    }

    fn apply_move(&self, state: &mut GameState, player: Player, mv: &Move) -> Result<MoveOutcome, MoveError> {
        let plan = self.validate_move(state, player, mv)?;
        let removed = apply_push(&mut state.board, &plan);

        log::debug!("{player} pushed {mv}, {} marble(s) shifted", plan.shifted());

        match removed {
            Some(Cell::Red) => {
                state.captures[player] += 1;
                log::info!(
                    "{player} captured a neutral marble ({} total)",
                    state.captures[player]
                );
            }
            Some(cell) => {
                if let Some(owner) = cell.owner() {
                    state.eliminated[owner] += 1;
                    log::info!(
                        "{player} pushed off a {owner} marble ({} left)",
                        state.marbles_on_board(owner)
                    );
                }
            }
            None => {}
        }

        let winner = check_winner(state, player).map(|reason| {
            log::info!("{player} has won the game: {reason}");
            state.result = Some(GameResult {
                winner: player,
                reason,
            });
            player
        });

        state.turn = player.opponent();

        Ok(MoveOutcome {
            player,
            mv: *mv,
            shifted: plan.shifted(),
            removed,
            winner,
        })
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.result
    }
}
