
pub mod board;
pub mod cell;
pub mod game;
pub mod history;
pub mod operation;
pub mod outcome;
pub mod placement;
pub mod player;
pub mod point;
pub mod state;

pub use board::Board;
pub use cell::Cell;
pub use game::{Game, Snapshot};
pub use history::{Direction, History, HistoryError};
pub use operation::{Operation, Reversible};
pub use outcome::Outcome;
pub use placement::Placement;
pub use player::Player;
pub use point::Point;
pub use state::State;
