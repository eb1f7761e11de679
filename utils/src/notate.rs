
use super::error::*;

#[macro_export]
///
/// A format! enhancement for building notational strings where all subcomponents 
/// are implementors of the Notate trait.
///
macro_rules! notate 
{
    ($fmt:expr, $($args:expr),*) => 
    {
        format!($fmt, $($args.notate()),*)
    };
}

///
/// A trait representing the concept of canonical notation.
///
/// An implementor provides a canonical notation by way of notate(),
/// and recognizes potentially non-canonical notation by way of parse().
/// Notation is a line-oriented, human-typeable form; it is what the text
/// interface reads and what the logs print.
///
pub trait Notate 
    where Self: Sized
{
    ///
    /// Returns the canonical notational string for this object.
    ///
    fn notate (& self) -> String;

    ///
    /// Constructs a new object from the given notational string, provided
    /// that the notation is valid.
    ///
    fn parse (s: & str) -> Result<Self>;
}

///
/// Notates each item and joins the results with single spaces.
///
pub fn notate_all<T: Notate> (items: & [T]) -> String 
{
    items.iter().map(|item| item.notate()).collect::<Vec<String>>().join(" ")
}

///
/// Parses each whitespace-separated token of the string.
///
pub fn parse_all<T: Notate> (s: & str) -> Result<Vec<T>>
{
    s.split_whitespace()
        .enumerate()
        .map(|(i, token)| T::parse(token).context(format!("Invalid notation in token {}.", i + 1)))
        .collect()
}
