
use super::cell::Cell;

use utils::*;

///
/// A player in tic-tac-toe.
///
/// There are two players, X and O, and X always moves first. Unlike a cell, 
/// a player is never "none": exactly one of the two is to move at any time.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player 
{
    X,
    O
}

impl std::fmt::Display for Player 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self 
        {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O")
        }
    }
}

impl notate::Notate for Player 
{
    fn notate (& self) -> String 
    {
        self.to_string()
    }

    fn parse (s: & str) -> Result<Player>
    {
        match s 
        {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            _         => Err(error::error!("Invalid notation '{}' for player.", s))
        }
    }
}

impl Player 
{
    ///
    /// Returns the mark this player writes into a cell.
    ///
    pub fn mark (& self) -> Cell 
    {
        match self 
        {
            Player::X => Cell::X,
            Player::O => Cell::O
        }
    }

    ///
    /// Returns the player opposite this one.
    ///
    pub fn next (& self) -> Player 
    {
        match self 
        {
            Player::X => Player::O,
            Player::O => Player::X
        }
    }
}
