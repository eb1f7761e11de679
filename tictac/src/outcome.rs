
use utils::*;

///
/// An enum that represents the outcome of a game. It is always derived from 
/// the board as it stands, never stored.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome 
{
    X,
    O,
    Draw,
    InProgress
}

impl std::fmt::Display for Outcome 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        match self 
        {
            Outcome::X          => write!(f, "The X player won."),
            Outcome::O          => write!(f, "The O player won."),
            Outcome::Draw       => write!(f, "Cat's game."),
            Outcome::InProgress => write!(f, "The game is in progress.")
        }
    }
}

impl Outcome 
{
    ///
    /// Determines whether the game has ended, by a win or a full board.
    ///
    pub fn is_over (& self) -> bool 
    {
        * self != Outcome::InProgress
    }
}
