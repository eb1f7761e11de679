
use utils::error::Context;
use utils::*;

///
/// The side length of the grid.
///
pub const SIZE: usize = 3;

///
/// Addresses one cell of the grid in row-major order: `row` selects the line 
/// from top to bottom and `col` the cell from left to right. Every public API 
/// and the text interface take coordinates in this (row, col) order.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point 
{
    row: usize,
    col: usize
}

impl std::fmt::Display for Point 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl notate::Notate for Point 
{
    fn notate (& self) -> String 
    {
        format!("{}{}", self.row, self.col)
    }

    fn parse (s: & str) -> Result<Point>
    {
        let context = format!("Invalid notation '{}' for point.", s);

        let digits = s.chars()
            .map(|c| c.to_digit(10).map(|d| d as usize))
            .collect::<Option<Vec<usize>>>()
            .ok_or_else(|| error::error!("Expected only digits."))
            .context(context.clone())?;

        if digits.len() != 2
        {
            return Err(error::error!("Invalid length {}, expected 2.", digits.len())).context(context.clone());
        }

        let (row, col) = (digits[0], digits[1]);

        let point = Point::new(row, col);
        let _ = point.in_bounds()
            || return Err(error::error!("Point {} is off the board.", point)).context(context.clone());

        Ok(point)
    }
}

impl Point 
{
    ///
    /// Returns all nine points of the grid in row-major order.
    ///
    pub fn all () -> impl Iterator<Item = Point>
    {
        (0 .. SIZE).flat_map(|row| (0 .. SIZE).map(move |col| Point::new(row, col)))
    }

    ///
    /// Returns the column.
    ///
    pub fn col (& self) -> usize
    {
        self.col
    }

    ///
    /// Determines whether this point is on the board.
    ///
    pub fn in_bounds (& self) -> bool
    {
        self.row < SIZE && self.col < SIZE
    }

    ///
    /// Returns a new point; bounds are not checked here.
    ///
    pub const fn new (row: usize, col: usize) -> Point
    {
        Point { row, col }
    }

    ///
    /// Returns the row.
    ///
    pub fn row (& self) -> usize
    {
        self.row
    }
}
