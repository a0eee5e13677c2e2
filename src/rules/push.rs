//! The push algorithm.
//!
//! A push is planned and applied in two steps so that every check runs
//! before the board is touched:
//!
//! 1. [`plan_push`] validates the origin, the trailing cell and the
//!    self-block rule, and collects the run of cells the push affects.
//! 2. [`apply_push`] rotates that run by one slot.
//!
//! All four directions go through the same code; only the unit step
//! differs.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Cell, Direction, Player, Pos, BOARD_SIZE};
use crate::error::{MoveError, OwnershipIssue};

/// Cells touched by a push, in the direction of travel.
///
/// Starts at the origin. Ends either at the first empty cell (nothing leaves
/// the board) or at the last cell before the edge (its marble is pushed off).
pub type Run = SmallVec<[Pos; BOARD_SIZE]>;

/// A validated push, ready to apply.
///
/// Produced by [`plan_push`] and consumed by [`apply_push`]. Holding one
/// does not lock the board; apply it to the board it was planned on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushPlan {
    /// Direction of travel.
    pub direction: Direction,

    /// Affected cells, origin first.
    pub run: Run,

    /// Marble that leaves the board, if the run reaches the edge.
    pub removed: Option<Cell>,
}

impl PushPlan {
    #[must_use]
    pub fn origin(&self) -> Pos {
        self.run[0]
    }

    /// Number of marbles that advance one slot, the pushed-off one included.
    #[must_use]
    pub fn shifted(&self) -> usize {
        match self.removed {
            Some(_) => self.run.len(),
            None => self.run.len() - 1,
        }
    }
}

/// Check that `player` may push the marble at `pos`.
pub fn check_origin(board: &Board, player: Player, pos: Pos) -> Result<(), MoveError> {
    let cell = board.get(pos).ok_or(MoveError::OutOfBounds {
        row: pos.row,
        col: pos.col,
    })?;

    match cell.owner() {
        Some(owner) if owner == player => Ok(()),
        Some(_) => Err(MoveError::InvalidOwnership(OwnershipIssue::OpponentMarble)),
        None if cell == Cell::Red => Err(MoveError::InvalidOwnership(OwnershipIssue::NeutralMarble)),
        None => Err(MoveError::InvalidOwnership(OwnershipIssue::EmptyCell)),
    }
}

/// Validate a push by `player` of the marble at `origin` and work out what
/// it affects.
///
/// ```
/// use kuba::{Board, Direction, Player, Pos};
/// use kuba::rules::push::plan_push;
///
/// let board = Board::standard();
/// let plan = plan_push(&board, Player::A, Pos::new(1, 0), Direction::Right).unwrap();
///
/// // (1,0) and (1,1) slide into the gap at (1,2)
/// assert_eq!(plan.run.len(), 3);
/// assert_eq!(plan.removed, None);
/// ```
pub fn plan_push(
    board: &Board,
    player: Player,
    origin: Pos,
    direction: Direction,
) -> Result<PushPlan, MoveError> {
    check_origin(board, player, origin)?;

    // A line can only be pushed from its trailing end.
    if let Some(trailing) = origin.step(direction.opposite()) {
        if board[trailing].is_marble() {
            return Err(MoveError::Blocked { trailing });
        }
    }

    let mut run = Run::new();
    run.push(origin);
    let mut cursor = origin;

    loop {
        match cursor.step(direction) {
            Some(next) if board[next].is_empty() => {
                run.push(next);
                return Ok(PushPlan {
                    direction,
                    run,
                    removed: None,
                });
            }
            Some(next) => {
                run.push(next);
                cursor = next;
            }
            None => {
                let terminal = board[cursor];
                if terminal.owner() == Some(player) {
                    return Err(MoveError::CannotPushOwnMarble { at: cursor });
                }
                return Ok(PushPlan {
                    direction,
                    run,
                    removed: Some(terminal),
                });
            }
        }
    }
}

/// Advance every marble in the run by one slot and empty the origin.
///
/// Returns the marble pushed off the board, if any.
pub fn apply_push(board: &mut Board, plan: &PushPlan) -> Option<Cell> {
    let mut cells: SmallVec<[Cell; BOARD_SIZE]> = plan.run.iter().map(|&pos| board[pos]).collect();
    cells.rotate_right(1);
    cells[0] = Cell::Empty;

    for (&pos, &cell) in plan.run.iter().zip(cells.iter()) {
        board.set(pos, cell);
    }

    plan.removed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    fn push(board: &mut Board, player: Player, origin: Pos, dir: Direction) -> Result<Option<Cell>, MoveError> {
        let plan = plan_push(board, player, origin, dir)?;
        Ok(apply_push(board, &plan))
    }

    #[test]
    fn test_check_origin() {
        let b = Board::standard();
        assert_eq!(check_origin(&b, Player::A, Pos::new(0, 0)), Ok(()));
        assert_eq!(
            check_origin(&b, Player::A, Pos::new(0, 6)),
            Err(MoveError::InvalidOwnership(OwnershipIssue::OpponentMarble))
        );
        assert_eq!(
            check_origin(&b, Player::A, Pos::new(3, 3)),
            Err(MoveError::InvalidOwnership(OwnershipIssue::NeutralMarble))
        );
        assert_eq!(
            check_origin(&b, Player::A, Pos::new(0, 3)),
            Err(MoveError::InvalidOwnership(OwnershipIssue::EmptyCell))
        );
        assert_eq!(
            check_origin(&b, Player::A, Pos::new(9, 0)),
            Err(MoveError::OutOfBounds { row: 9, col: 0 })
        );
    }

    #[test]
    fn test_shift_into_gap() {
        let mut b = Board::standard();
        let removed = push(&mut b, Player::A, Pos::new(1, 0), Direction::Right).unwrap();

        assert_eq!(removed, None);
        assert_eq!(b.to_string().lines().nth(1), Some(". W W R . B B"));
    }

    #[test]
    fn test_blocked_from_middle() {
        let b = Board::standard();
        // (0,1) has (0,0) behind it when pushed right
        assert_eq!(
            plan_push(&b, Player::A, Pos::new(0, 1), Direction::Right),
            Err(MoveError::Blocked { trailing: Pos::new(0, 0) })
        );
    }

    #[test]
    fn test_edge_origin_has_no_trailing_cell() {
        let b = Board::standard();
        let plan = plan_push(&b, Player::A, Pos::new(0, 0), Direction::Backward).unwrap();
        assert_eq!(plan.run.as_slice(), &[Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)]);
        assert_eq!(plan.removed, None);
        assert_eq!(plan.shifted(), 2);
    }

    #[test]
    fn test_push_off_opponent() {
        let mut b = board(
            "
            . W W W W W B
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            ",
        );
        let removed = push(&mut b, Player::A, Pos::new(0, 1), Direction::Right).unwrap();

        assert_eq!(removed, Some(Cell::Black));
        assert_eq!(b.to_string().lines().next(), Some(". . W W W W W"));
        assert_eq!(b.count(Cell::Black), 0);
    }

    #[test]
    fn test_cannot_push_own_marble_off() {
        let b = board(
            "
            . W B W W W W
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            ",
        );
        assert_eq!(
            plan_push(&b, Player::A, Pos::new(0, 1), Direction::Right),
            Err(MoveError::CannotPushOwnMarble { at: Pos::new(0, 6) })
        );
    }

    #[test]
    fn test_lone_edge_marble_pushed_outward() {
        let b = Board::empty().with(Pos::new(3, 6), Cell::White);
        assert_eq!(
            plan_push(&b, Player::A, Pos::new(3, 6), Direction::Right),
            Err(MoveError::CannotPushOwnMarble { at: Pos::new(3, 6) })
        );

        // Inward it just slides
        let mut b = b;
        assert_eq!(push(&mut b, Player::A, Pos::new(3, 6), Direction::Left), Ok(None));
        assert_eq!(b[Pos::new(3, 5)], Cell::White);
        assert_eq!(b[Pos::new(3, 6)], Cell::Empty);
    }

    #[test]
    fn test_push_off_red_column() {
        let mut b = Board::empty()
            .with(Pos::new(6, 2), Cell::Black)
            .with(Pos::new(5, 2), Cell::Red)
            .with(Pos::new(4, 2), Cell::Red)
            .with(Pos::new(3, 2), Cell::White)
            .with(Pos::new(2, 2), Cell::Red)
            .with(Pos::new(1, 2), Cell::White)
            .with(Pos::new(0, 2), Cell::Red);

        let plan = plan_push(&b, Player::B, Pos::new(6, 2), Direction::Forward).unwrap();
        assert_eq!(plan.shifted(), 7);

        let removed = apply_push(&mut b, &plan);
        assert_eq!(removed, Some(Cell::Red));
        assert_eq!(b[Pos::new(6, 2)], Cell::Empty);
        assert_eq!(b[Pos::new(5, 2)], Cell::Black);
        assert_eq!(b[Pos::new(0, 2)], Cell::White);
        assert_eq!(b.marble_counts(), (2, 1, 3));
    }

    #[test]
    fn test_each_direction_from_center() {
        for dir in Direction::ALL {
            let mut b = Board::empty().with(Pos::new(3, 3), Cell::Black);
            push(&mut b, Player::B, Pos::new(3, 3), dir).unwrap();
            let target = Pos::new(3, 3).step(dir).unwrap();
            assert_eq!(b[target], Cell::Black, "direction {dir}");
            assert_eq!(b[Pos::new(3, 3)], Cell::Empty);
        }
    }

    #[test]
    fn test_failed_plan_leaves_board() {
        let b = Board::standard();
        let before = b;
        let _ = plan_push(&b, Player::B, Pos::new(0, 5), Direction::Right);
        assert_eq!(b, before);
    }
}
