
use super::operation::Reversible;

///
/// The error raised when the history has nothing to undo or redo.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError 
{
    #[error("There is no operation available to {0}.")]
    NoOperationAvailable(Direction)
}

///
/// The direction of travel through a history.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction 
{
    Undo,
    Redo
}

impl std::fmt::Display for Direction 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        match self 
        {
            Direction::Undo => write!(f, "undo"),
            Direction::Redo => write!(f, "redo")
        }
    }
}

///
/// A linear undo/redo history of reversible operations.
///
/// The history is a single list with a cursor:
/// - operations before the cursor have been applied, the most recent last; 
/// - operations at or after the cursor have been undone and can be redone, 
///   in the order they were originally executed.
///
/// Executing a new operation drops everything at or after the cursor first, 
/// so the history never branches: once a new move is made after an undo, the 
/// undone future is gone.
///
/// The history owns its operations but never the target they act on; every 
/// call that mutates takes the target explicitly.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History<O>
{
    operations: Vec<O>,
    cursor: usize
}

impl<O> Default for History<O>
{
    fn default () -> History<O>
    {
        History::new()
    }
}

impl<O: Reversible> History<O>
{
    ///
    /// Returns the operations that are currently applied, oldest first.
    ///
    pub fn applied (& self) -> & [O]
    {
        & self.operations[.. self.cursor]
    }

    pub fn can_redo (& self) -> bool 
    {
        self.cursor < self.operations.len()
    }

    pub fn can_undo (& self) -> bool 
    {
        self.cursor > 0
    }

    pub fn cursor (& self) -> usize 
    {
        self.cursor
    }

    ///
    /// Applies the operation and records it as the most recent, discarding 
    /// any operations that were waiting to be redone.
    ///
    pub fn execute (& mut self, operation: O, target: & mut O::Target)
    {
        operation.apply(target);
        self.operations.truncate(self.cursor);
        self.operations.push(operation);
        self.cursor += 1;
    }

    ///
    /// Returns the operations that can be redone; the next one to be redone 
    /// is first.
    ///
    pub fn future (& self) -> & [O]
    {
        & self.operations[self.cursor ..]
    }

    pub fn is_empty (& self) -> bool 
    {
        self.operations.is_empty()
    }

    ///
    /// Returns the number of stored operations, applied or not.
    ///
    pub fn len (& self) -> usize 
    {
        self.operations.len()
    }

    ///
    /// Re-applies the earliest undone operation.
    ///
    pub fn redo (& mut self, target: & mut O::Target) -> Result<(), HistoryError>
    {
        let operation = self.operations.get(self.cursor)
            .ok_or(HistoryError::NoOperationAvailable(Direction::Redo))?;

        operation.apply(target);
        self.cursor += 1;
        Ok(())
    }

    ///
    /// Reverses the most recently applied operation.
    ///
    pub fn undo (& mut self, target: & mut O::Target) -> Result<(), HistoryError>
    {
        let _ = self.can_undo() 
            || return Err(HistoryError::NoOperationAvailable(Direction::Undo));

        self.cursor -= 1;
        self.operations[self.cursor].reverse(target);
        Ok(())
    }
}

impl<O> History<O>
{
    ///
    /// Returns an empty history.
    ///
    pub fn new () -> History<O>
    {
        History { operations: Vec::new(), cursor: 0 }
    }
}
