
use super::board::Board;
use super::player::Player;

use utils::*;

///
/// Everything an operation mutates: the grid and whose turn it is.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State 
{
    pub(crate) board: Board,
    pub(crate) to_move: Player
}

impl Default for State 
{
    fn default () -> State 
    {
        State::new()
    }
}

impl State 
{
    ///
    /// Returns the board.
    ///
    pub fn board (& self) -> & Board 
    {
        & self.board
    }

    ///
    /// Returns an empty board with X to move.
    ///
    pub fn new () -> State 
    {
        State { board: Board::blank(), to_move: Player::X }
    }

    ///
    /// Returns the player to move.
    ///
    pub fn to_move (& self) -> Player 
    {
        self.to_move
    }
}
