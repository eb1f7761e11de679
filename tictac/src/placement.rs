
use lazy_static::lazy_static;
use regex::Regex;

use super::player::Player;
use super::point::Point;

use utils::error::Context;
use utils::notate::Notate;
use utils::*;

///
/// A request to put a player's mark on a point, as written in game notation: 
/// the player followed by the row and column digits, e.g. `X02`.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Placement 
{
    player: Player,
    point: Point
}

impl std::fmt::Display for Placement 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        write!(f, "{}{}", self.player, self.point)
    }
}

impl notate::Notate for Placement 
{
    fn notate (& self) -> String 
    {
        notate!("{}{}", self.player, self.point)
    }

    fn parse (s: & str) -> Result<Placement>
    {
        lazy_static!
        {
            static ref PLACEMENT_RE : Regex = Regex::new(r"^([XxOo])(\d{2})$").unwrap();
        }

        let context = format!("Invalid notation '{}' for placement.", s);

        match PLACEMENT_RE.captures(s)
        {
            Some(capture) => 
            {
                let player = Player::parse(& capture[1]).context(context.clone())?;
                let point = Point::parse(& capture[2]).context(context.clone())?;
                Ok(Placement { player, point })
            },
            None => Err(error::error!("Expected a player followed by two digits.")).context(context.clone())
        }
    }
}

impl Placement 
{
    ///
    /// Returns a new placement.
    ///
    pub fn new (player: Player, point: Point) -> Placement 
    {
        Placement { player, point }
    }

    ///
    /// Returns the player placing the mark.
    ///
    pub fn player (& self) -> Player 
    {
        self.player
    }

    ///
    /// Returns the target point.
    ///
    pub fn point (& self) -> Point 
    {
        self.point
    }
}
