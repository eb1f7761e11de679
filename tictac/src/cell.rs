
use utils::*;

///
/// A single space of the grid: empty, or holding one player's mark.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell 
{
    Empty,
    X,
    O
}

impl Default for Cell 
{
    fn default () -> Cell 
    {
        Cell::Empty
    }
}

impl std::fmt::Display for Cell 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        let token = match self 
        {
            Cell::Empty => " ",
            Cell::X     => "X",
            Cell::O     => "O"
        };
        write!(f, "{}", token)
    }
}

impl notate::Notate for Cell 
{
    fn notate (& self) -> String 
    {
        match self 
        {
            Cell::Empty => "-".to_string(),
            Cell::X     => "X".to_string(),
            Cell::O     => "O".to_string()
        }
    }

    fn parse (s: & str) -> Result<Cell>
    {
        match s 
        {
            "X" | "x"             => Ok(Cell::X),
            "O" | "o"             => Ok(Cell::O),
            "_" | "-" | "." | "," => Ok(Cell::Empty),
            _                     => Err(error::error!("Invalid notation '{}' for cell.", s))
        }
    }
}

impl Cell 
{
    ///
    /// Determines whether no player has marked this cell.
    ///
    pub fn is_empty (& self) -> bool 
    {
        * self == Cell::Empty
    }
}
