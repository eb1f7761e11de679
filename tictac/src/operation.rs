
use super::cell::Cell;
use super::placement::Placement;
use super::player::Player;
use super::point::Point;
use super::state::State;

use utils::*;

///
/// An atomic change that can apply itself to a target and exactly undo itself.
///
/// The target is passed in on every call rather than held by the operation, 
/// so operations stay plain values that a history can own without keeping 
/// the target alive.
///
pub trait Reversible 
{
    type Target;

    ///
    /// Performs the change.
    ///
    fn apply (& self, target: & mut Self::Target);

    ///
    /// Restores the target to exactly how it was before `apply`.
    ///
    fn reverse (& self, target: & mut Self::Target);
}

///
/// A reversible placement of a mark.
///
/// Each variant records the literal cell value and turn that were in place 
/// when it was built, and `reverse` writes those back verbatim instead of 
/// assuming the cell was empty. Operations do not check legality; the game 
/// validates before building one.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation 
{
    PlaceX { point: Point, previous: Cell, previous_turn: Player },
    PlaceO { point: Point, previous: Cell, previous_turn: Player }
}

impl std::fmt::Display for Operation 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        write!(f, "{}", self.placement())
    }
}

impl Reversible for Operation 
{
    type Target = State;

    fn apply (& self, state: & mut State)
    {
        match * self 
        {
            Operation::PlaceX { point, .. } => 
            {
                state.board.set(point, Cell::X);
                state.to_move = Player::O;
            },
            Operation::PlaceO { point, .. } => 
            {
                state.board.set(point, Cell::O);
                state.to_move = Player::X;
            }
        }
    }

    fn reverse (& self, state: & mut State)
    {
        state.board.set(self.point(), self.previous());
        state.to_move = self.previous_turn();
    }
}

impl Operation 
{
    ///
    /// Builds the operation that places the player's mark on the point, 
    /// capturing what the state holds there now.
    ///
    pub fn place (player: Player, point: Point, state: & State) -> Operation 
    {
        let previous = state.board().get(point);
        let previous_turn = state.to_move();

        match player 
        {
            Player::X => Operation::PlaceX { point, previous, previous_turn },
            Player::O => Operation::PlaceO { point, previous, previous_turn }
        }
    }

    ///
    /// Returns the player whose mark this operation writes.
    ///
    pub fn player (& self) -> Player 
    {
        match self 
        {
            Operation::PlaceX { .. } => Player::X,
            Operation::PlaceO { .. } => Player::O
        }
    }

    /// Returns the move this operation performs, without its captured state.
    pub fn placement (& self) -> Placement 
    {
        Placement::new(self.player(), self.point())
    }

    pub fn point (& self) -> Point 
    {
        match * self 
        {
            Operation::PlaceX { point, .. } | Operation::PlaceO { point, .. } => point
        }
    }

    pub fn previous (& self) -> Cell 
    {
        match * self 
        {
            Operation::PlaceX { previous, .. } | Operation::PlaceO { previous, .. } => previous
        }
    }

    pub fn previous_turn (& self) -> Player 
    {
        match * self 
        {
            Operation::PlaceX { previous_turn, .. } | Operation::PlaceO { previous_turn, .. } => previous_turn
        }
    }
}

#[cfg(test)]
mod tests 
{
    use super::*;

    #[test]
    fn apply_writes_mark_and_passes_turn ()
    {
        let mut state = State::new();
        let op = Operation::place(Player::X, Point::new(2, 1), & state);

        op.apply(& mut state);

        assert_eq!(state.board().get(Point::new(2, 1)), Cell::X);
        assert_eq!(state.to_move(), Player::O);
    }

    #[test]
    fn reverse_restores_the_captured_values_verbatim ()
    {
        // A rule variant that allows overwriting: the reversal must bring back 
        // the O, not an empty cell, and the turn that was captured.

        let mut state = State::new();
        state.board.set(Point::new(1, 1), Cell::O);
        let before = state.clone();

        let op = Operation::place(Player::X, Point::new(1, 1), & state);
        assert_eq!(op.previous(), Cell::O);

        op.apply(& mut state);
        assert_eq!(state.board().get(Point::new(1, 1)), Cell::X);

        op.reverse(& mut state);
        assert_eq!(state, before);
    }

    #[test]
    fn place_o_returns_turn_to_x ()
    {
        let mut state = State::new();
        state.to_move = Player::O;

        let op = Operation::place(Player::O, Point::new(0, 0), & state);
        assert_eq!(op.previous_turn(), Player::O);

        op.apply(& mut state);
        assert_eq!(state.to_move(), Player::X);

        op.reverse(& mut state);
        assert_eq!(state.to_move(), Player::O);
        assert!(state.board().get(Point::new(0, 0)).is_empty());
    }
}
