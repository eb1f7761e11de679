
use super::cell::Cell;
use super::outcome::Outcome;
use super::player::Player;
use super::point::{Point, SIZE};

use utils::error::Context;
use utils::notate::Notate;
use utils::*;

///
/// The eight winning lines: three rows, three columns, and both diagonals.
///
pub const LINES: [[Point; 3]; 8] = 
[
    [Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)],
    [Point::new(1, 0), Point::new(1, 1), Point::new(1, 2)],
    [Point::new(2, 0), Point::new(2, 1), Point::new(2, 2)],

    [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)],
    [Point::new(0, 1), Point::new(1, 1), Point::new(2, 1)],
    [Point::new(0, 2), Point::new(1, 2), Point::new(2, 2)],

    [Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)],
    [Point::new(0, 2), Point::new(1, 1), Point::new(2, 0)]
];

///
/// Represents a tic-tac-toe board: a 3x3 grid of cells, addressed in row-major 
/// order. The board knows nothing about turns or history; it answers rule 
/// queries over whatever marks it currently holds.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Board 
{
    cells: [[Cell; SIZE]; SIZE]
}

impl notate::Notate for Board 
{
    fn notate (& self) -> String 
    {
        Point::all().map(|p| self.get(p).notate()).collect::<String>()
    }

    fn parse (s: & str) -> Result<Board>
    {
        let context = format!("Invalid notation '{}' for board.", s);

        let tokens = s.chars().collect::<Vec<char>>();
        let _ = tokens.len() == SIZE * SIZE
            || return Err(error::error!("Expected {} cells, found {}.", SIZE * SIZE, tokens.len())).context(context.clone());

        let mut board = Board::blank();
        for (point, token) in Point::all().zip(tokens)
        {
            let cell = Cell::parse(& token.to_string()).context(context.clone())?;
            board.set(point, cell);
        }

        Ok(board)
    }
}

impl std::fmt::Display for Board 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        for (i, row) in self.cells.iter().enumerate()
        {
            if i > 0 
            {
                writeln!(f, "-----------")?;
            }
            writeln!(f, " {} | {} | {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

impl Board 
{
    ///
    /// Returns an empty board.
    ///
    pub fn blank () -> Board 
    {
        Board { cells: [[Cell::Empty; SIZE]; SIZE] }
    }

    ///
    /// Returns the points that no player has marked yet, in row-major order.
    ///
    pub fn empty_points (& self) -> Vec<Point>
    {
        Point::all().filter(|& p| self.get(p).is_empty()).collect()
    }

    ///
    /// Returns the cell at the given point. Panics if the point is off the board.
    ///
    pub fn get (& self, point: Point) -> Cell 
    {
        self.cells[point.row()][point.col()]
    }

    ///
    /// Determines whether the player has completed any of the eight lines.
    ///
    pub fn has_won (& self, player: Player) -> bool 
    {
        let mark = player.mark();
        LINES.iter().any(|line| line.iter().all(|& p| self.get(p) == mark))
    }

    ///
    /// Determines whether every cell holds a mark.
    ///
    pub fn is_full (& self) -> bool 
    {
        Point::all().all(|p| ! self.get(p).is_empty())
    }

    ///
    /// Gets the result of the game on this board. A completed line takes 
    /// precedence over a full board.
    ///
    pub fn outcome (& self) -> Outcome 
    {
        match self.winner()
        {
            Some(Player::X) => Outcome::X,
            Some(Player::O) => Outcome::O,
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress
        }
    }

    ///
    /// Writes a cell. Only operations and notation parsing write to a board; 
    /// everything else goes through the game's history.
    ///
    pub(crate) fn set (& mut self, point: Point, cell: Cell)
    {
        self.cells[point.row()][point.col()] = cell;
    }

    ///
    /// Returns the player who has completed a line, if any. X is checked first; 
    /// under alternating play both can never hold at once.
    ///
    pub fn winner (& self) -> Option<Player>
    {
        [Player::X, Player::O].into_iter().find(|& p| self.has_won(p))
    }
}
