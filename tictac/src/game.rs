
use super::board::Board;
use super::cell::Cell;
use super::history::History;
use super::operation::Operation;
use super::outcome::Outcome;
use super::placement::Placement;
use super::player::Player;
use super::point::Point;
use super::state::State;

use utils::error::Context;
use utils::notate::{self, Notate};
use utils::*;

///
/// A session of tic-tac-toe: the board, whose turn it is, and a linear 
/// history of every placement, which can be undone and redone to any depth.
///
/// There are two ways to place a mark:
/// - `place_x` / `place_o` assume the caller has already checked the turn and 
///   the cell through the query methods, and panic when that contract is broken; 
/// - `play` performs those checks itself and returns an error instead, for 
///   callers that relay untrusted input.
///
/// The game never caches whether it is over. Every status query is computed 
/// from the board as it stands, so undoing a winning move reopens the game.
///
/// Restarting is done by replacing the value with `Game::new()`, which 
/// brings a fresh, empty history along with the fresh board.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Game 
{
    state: State,
    history: History<Operation>
}

///
/// A read-only view of a game for collaborators that render it elsewhere.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot 
{
    pub board: Board,
    pub to_move: Player,
    pub outcome: Outcome,
    pub can_undo: bool,
    pub can_redo: bool,
    pub history: String
}

impl notate::Notate for Game 
{
    ///
    /// The applied moves in order, then a `|` and the moves that could be 
    /// redone, if there are any; e.g. `X00 O11 | X22`.
    ///
    fn notate (& self) -> String 
    {
        let applied = self.history.applied().iter().map(|op| op.placement()).collect::<Vec<Placement>>();
        let future = self.history.future().iter().map(|op| op.placement()).collect::<Vec<Placement>>();

        let mut result = notate::notate_all(& applied);
        if ! future.is_empty()
        {
            if ! result.is_empty()
            {
                result += " ";
            }
            result += "| ";
            result += & notate::notate_all(& future);
        }
        result
    }

    ///
    /// Replays the moves under the same contract as `place_x` / `place_o` 
    /// (turn, bounds, empty cell) but not the game-over check, so any game 
    /// built through either entry point reads back as it was written.
    ///
    fn parse (s: & str) -> Result<Game>
    {
        let context = format!("Invalid notation '{}' for game.", s);

        let (applied, future) = match s.split_once('|')
        {
            Some((applied, future)) => (applied, future),
            None                    => (s, "")
        };

        let applied = notate::parse_all::<Placement>(applied).context(context.clone())?;
        let future = notate::parse_all::<Placement>(future).context(context.clone())?;

        let mut game = Game::new();
        for (i, placement) in applied.iter().chain(future.iter()).enumerate()
        {
            game.check_placement(placement.player(), placement.point())
                .context(format!("Invalid placement in move {}.", i + 1))
                .context(context.clone())?;
            game.place(placement.player(), placement.point());
        }
        for _ in 0 .. future.len()
        {
            game.undo().context(context.clone())?;
        }

        Ok(game)
    }
}

impl Game 
{
    ///
    /// Returns the current board.
    ///
    pub fn board (& self) -> & Board 
    {
        self.state.board()
    }

    pub fn can_redo (& self) -> bool 
    {
        self.history.can_redo()
    }

    pub fn can_undo (& self) -> bool 
    {
        self.history.can_undo()
    }

    pub fn has_player_o_won (& self) -> bool 
    {
        self.board().has_won(Player::O)
    }

    pub fn has_player_x_won (& self) -> bool 
    {
        self.board().has_won(Player::X)
    }

    ///
    /// Returns the history of this game.
    ///
    pub fn history (& self) -> & History<Operation>
    {
        & self.history
    }

    ///
    /// Determines whether a player has won or the board is full.
    ///
    pub fn is_game_over (& self) -> bool 
    {
        self.has_player_x_won() || self.has_player_o_won() || self.board().is_full()
    }

    pub fn is_player_o_turn (& self) -> bool 
    {
        self.state.to_move() == Player::O
    }

    pub fn is_player_x_turn (& self) -> bool 
    {
        self.state.to_move() == Player::X
    }

    pub fn is_space_empty (& self, point: Point) -> bool 
    {
        self.board().get(point) == Cell::Empty
    }

    pub fn is_space_o (& self, point: Point) -> bool 
    {
        self.board().get(point) == Cell::O
    }

    pub fn is_space_x (& self, point: Point) -> bool 
    {
        self.board().get(point) == Cell::X
    }

    ///
    /// Returns a blank game with X to move and no history.
    ///
    pub fn new () -> Game 
    {
        Game { state: State::new(), history: History::new() }
    }

    ///
    /// Gets the result of this game.
    ///
    pub fn outcome (& self) -> Outcome 
    {
        self.board().outcome()
    }

    ///
    /// Places the player's mark if the move is legal in this position, and 
    /// explains why not otherwise. Nothing is changed on failure.
    ///
    pub fn play (& mut self, player: Player, point: Point) -> Result<()>
    {
        let placement = Placement::new(player, point);
        let context = notate!("Failed to play '{}' in this game.", placement);

        let result = self.validate(player, point);
        if let Err(err) = & result 
        {
            log::warn!("Refused '{}': {}", placement.notate(), err);
        }
        result.context(context)?;

        match player 
        {
            Player::X => self.place_x(point),
            Player::O => self.place_o(point)
        };
        Ok(())
    }

    ///
    /// Places an O.
    ///
    /// Preconditions: it is O's turn and the point is an empty cell on the board.
    ///
    pub fn place_o (& mut self, point: Point)
    {
        self.place(Player::O, point);
    }

    ///
    /// Places an X.
    ///
    /// Preconditions: it is X's turn and the point is an empty cell on the board.
    ///
    pub fn place_x (& mut self, point: Point)
    {
        self.place(Player::X, point);
    }

    ///
    /// Re-applies the most recently undone move.
    ///
    pub fn redo (& mut self) -> Result<()>
    {
        self.history.redo(& mut self.state).context("Failed to redo a move in this game.")?;
        log::debug!("Redid move {}.", self.history.cursor());
        Ok(())
    }

    ///
    /// Returns a serializable view of the game as it stands.
    ///
    pub fn snapshot (& self) -> Snapshot 
    {
        Snapshot 
        {
            board: self.board().clone(),
            to_move: self.to_move(),
            outcome: self.outcome(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            history: self.notate()
        }
    }

    ///
    /// Determines the next player to move in this game.
    ///
    pub fn to_move (& self) -> Player 
    {
        self.state.to_move()
    }

    ///
    /// Undoes the last move played.
    ///
    pub fn undo (& mut self) -> Result<()>
    {
        self.history.undo(& mut self.state).context("Failed to undo the last move in this game.")?;
        log::debug!("Undid move {}.", self.history.cursor() + 1);
        Ok(())
    }

    ///
    /// Determines whether the player may place a mark on the point.
    ///
    pub fn validate (& self, player: Player, point: Point) -> Result<()>
    {
        let _ = ! self.is_game_over()
            || return Err(error::error!("The game is over."));

        self.check_placement(player, point)
    }

    ///
    /// Determines whether the player may move at all, before any point is known.
    ///
    pub fn validate_turn (& self, player: Player) -> Result<()>
    {
        let _ = ! self.is_game_over()
            || return Err(error::error!("The game is over."));

        let _ = self.to_move() == player 
            || return Err(error::error!("It isn't the {} player's turn.", player));

        Ok(())
    }

    ///
    /// The placement contract of `place_x` / `place_o`, reported as an error.
    ///
    fn check_placement (& self, player: Player, point: Point) -> Result<()>
    {
        let _ = self.to_move() == player 
            || return Err(error::error!("It isn't the {} player's turn.", player));

        let _ = point.in_bounds()
            || return Err(error::error!("Point {} is off the board.", point));

        let _ = self.is_space_empty(point)
            || return Err(error::error!("That space is already filled."));

        Ok(())
    }

    fn place (& mut self, player: Player, point: Point)
    {
        assert!(self.to_move() == player, "It isn't the {} player's turn.", player);
        assert!(point.in_bounds(), "Point {} is off the board.", point);
        assert!(self.is_space_empty(point), "Point {} is already filled.", point);

        let operation = Operation::place(player, point, & self.state);
        self.history.execute(operation, & mut self.state);

        log::debug!("Placed {} at {}; {} to move.", player, point, self.to_move());
    }
}
