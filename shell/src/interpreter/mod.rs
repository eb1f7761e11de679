
pub mod command;

use std::io::{BufRead, Write};

use tictac::{Game, Player, Point};

use crate::config::Config;

use command::{Command, CommandError};

use utils::error::*;
use utils::log;
use utils::notate::Notate;
use utils::serialize::to_json;

///
/// Whether the main loop should keep reading input.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow 
{
    Continue,
    Exit
}

///
/// Runs the main loop of the text interface: reads one command per line, 
/// applies it to the game it owns, and prints the board.
///
/// Refused moves and an exhausted history are reported to the player and 
/// the loop carries on; only failures to write output end it.
///
pub struct Interpreter<W: Write>
{
    config: Config,
    game: Game,
    out: W
}

impl<W: Write> Interpreter<W>
{
    ///
    /// Prints the banner, the command list if configured, and the empty grid.
    ///
    pub fn introduction (& mut self) -> Result<()>
    {
        writeln!(self.out, "Tic-Tac-Toe Command-Line Game")?;
        writeln!(self.out, "-----------------------------")?;
        writeln!(self.out, "Enter '?' to repeat the following list of commands.")?;
        writeln!(self.out)?;

        if self.config.show_help 
        {
            self.list_commands()?;
            writeln!(self.out)?;
        }

        self.show_grid()
    }

    ///
    /// Creates a new interpreter over a fresh game.
    ///
    pub fn new (config: & Config, out: W) -> Interpreter<W>
    {
        Interpreter { config: config.clone(), game: Game::new(), out }
    }

    ///
    /// Handles a single line of input.
    ///
    pub fn parse_command (& mut self, line: & str) -> Result<Flow>
    {
        let command = match Command::parse(line)
        {
            Ok(command) => command,
            Err(e) => 
            {
                log::warn!("Rejected input '{}': {}", line.trim(), e);

                // A placement out of turn is refused for that before its coordinates are judged.

                let reason = match & e 
                {
                    CommandError::Malformed(player, _) => match self.game.validate_turn(* player)
                    {
                        Ok(()) => e.to_string(),
                        Err(refusal) => refusal.root_cause().to_string()
                    },
                    CommandError::Unknown(_) => e.to_string()
                };
                self.message(& reason)?;
                return Ok(Flow::Continue);
            }
        };

        match command 
        {
            Command::Blank => {},

            Command::Help => self.list_commands()?,

            Command::Place(player, point) => return self.place(player, point),

            Command::Undo => 
            {
                match self.game.undo()
                {
                    Ok(()) => 
                    {
                        self.message("The most recent move has been undone.")?;
                        self.show_grid()?;
                    },
                    Err(_) => self.message("You can't undo any more moves.")?
                };
            },

            Command::Redo => 
            {
                match self.game.redo()
                {
                    Ok(()) => 
                    {
                        self.message("The most recent undo has been redone.")?;
                        return self.show_position();
                    },
                    Err(_) => self.message("You can't redo any more moves.")?
                };
            },

            Command::NewGame => 
            {
                log::info!("New game after '{}'.", self.game.notate());
                self.game = Game::new();
                self.message("A new game has started.")?;
                self.show_grid()?;
            },

            Command::Setup(notation) => 
            {
                match Game::parse(& notation)
                {
                    Ok(game) => 
                    {
                        log::info!("Setup position '{}'.", game.notate());
                        self.game = game;
                        return self.show_position();
                    },
                    Err(e) => 
                    {
                        log::warn!("{:#}", e);
                        self.message(& format!("That position can't be set up: {}", e.root_cause()))?;
                    }
                };
            },

            Command::ShowHistory => 
            {
                let notation = self.game.notate();
                match notation.is_empty()
                {
                    true  => self.message("No moves have been played.")?,
                    false => self.message(& notation)?
                };
            },

            Command::ShowSnapshot => 
            {
                let json = to_json(& self.game.snapshot())?;
                self.message(& json)?;
            }
        };

        Ok(Flow::Continue)
    }

    ///
    /// Handles input lines until the input ends or a finished game ends the loop.
    ///
    pub fn run_loop<R: BufRead> (& mut self, input: R) -> Result<()>
    {
        for line in input.lines()
        {
            let line = line.context("Failed to read a command.")?;
            if self.parse_command(& line)? == Flow::Exit
            {
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn list_commands (& mut self) -> Result<()>
    {
        for command in Command::listing()
        {
            writeln!(self.out, "{}", command.usage())?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn message (& mut self, text: & str) -> Result<()>
    {
        writeln!(self.out, "{}", text)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn place (& mut self, player: Player, point: Point) -> Result<Flow>
    {
        if let Err(e) = self.game.play(player, point)
        {
            // The root cause is the player-facing reason; the context chain is for the log.

            self.message(& e.root_cause().to_string())?;
            return Ok(Flow::Continue);
        }

        self.show_position()
    }

    ///
    /// Prints the grid, then either whose turn it is or, if the game has ended, 
    /// the result; a finished game ends the loop when so configured.
    ///
    fn show_position (& mut self) -> Result<Flow>
    {
        let outcome = self.game.outcome();
        if ! outcome.is_over()
        {
            self.show_grid()?;
            return Ok(Flow::Continue);
        }

        log::info!("Game over: {} '{}'", outcome, self.game.notate());

        write!(self.out, "{}", self.game.board())?;
        writeln!(self.out)?;

        match self.config.exit_on_game_over 
        {
            true => 
            {
                self.message(& format!("{} Restart the program to play again.", outcome))?;
                Ok(Flow::Exit)
            },
            false => 
            {
                self.message(& format!("{} Enter 'n' to start a new game or 'u' to take back the last move.", outcome))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn show_grid (& mut self) -> Result<()>
    {
        write!(self.out, "{}", self.game.board())?;
        writeln!(self.out)?;

        let prompt = format!("It is currently the {} player's turn. Enter a command:", self.game.to_move());
        self.message(& prompt)
    }
}

#[cfg(test)]
mod tests 
{
    use super::*;

    fn config (exit_on_game_over: bool) -> Config 
    {
        Config { exit_on_game_over, show_help: false, ..Config::default() }
    }

    /// Feeds the lines to a fresh interpreter and returns everything it printed.
    fn transcript (config: & Config, lines: & [& str]) -> (String, Game)
    {
        let mut interpreter = Interpreter::new(config, Vec::new());
        let input = lines.join("\n");
        interpreter.run_loop(input.as_bytes()).unwrap();
        (String::from_utf8(interpreter.out).unwrap(), interpreter.game)
    }

    #[test]
    fn introduction_shows_commands_and_empty_grid ()
    {
        let config = Config { show_help: true, ..Config::default() };
        let mut interpreter = Interpreter::new(& config, Vec::new());
        interpreter.introduction().unwrap();

        let output = String::from_utf8(interpreter.out).unwrap();
        assert!(output.contains("x row col - Put an X on the grid at the specified row and column"));
        assert!(output.contains("   |   |  \n-----------\n"));
        assert!(output.ends_with("It is currently the X player's turn. Enter a command:\n\n"));
    }

    #[test]
    fn placement_prints_grid_and_next_turn ()
    {
        let (output, game) = transcript(& config(true), & ["x 0 2"]);
        assert!(output.starts_with("   |   | X\n"));
        assert!(output.contains("It is currently the O player's turn."));
        assert!(game.is_space_x(Point::new(0, 2)));
    }

    #[test]
    fn refusals_explain_themselves ()
    {
        let (output, game) = transcript(& config(true), & ["o 0 0", "x 1 1", "o 1 1", "o 9 9", "jump"]);
        assert!(output.contains("It isn't the O player's turn.\n"));
        assert!(output.contains("That space is already filled.\n"));
        assert!(output.contains("Invalid command input.\n"));
        assert!(output.contains("Invalid command. Enter '?' to see the possible commands.\n"));
        assert_eq!(game.notate(), "X11");
    }

    #[test]
    fn undo_and_redo_report_exhaustion ()
    {
        let (output, game) = transcript(& config(true), & ["u", "x 0 0", "u", "r", "r"]);
        assert!(output.contains("You can't undo any more moves."));
        assert!(output.contains("The most recent move has been undone."));
        assert!(output.contains("The most recent undo has been redone."));
        assert!(output.contains("You can't redo any more moves."));
        assert_eq!(game.notate(), "X00");
    }

    #[test]
    fn win_ends_the_loop_when_configured ()
    {
        let (output, game) = transcript(& config(true), & ["x 0 0", "o 1 1", "x 0 1", "o 2 2", "x 0 2", "u"]);
        assert!(output.contains("The X player won. Restart the program to play again."));
        assert!(! output.contains("undone"));
        assert!(game.has_player_x_won());
    }

    #[test]
    fn finished_game_can_be_taken_back_when_not_exiting ()
    {
        let lines = ["x 0 0", "o 1 1", "x 0 1", "o 2 2", "x 0 2", "o 2 0", "u", "x 1 0"];
        let (output, game) = transcript(& config(false), & lines);

        assert!(output.contains("The X player won. Enter 'n'"));
        assert!(output.contains("The game is over.\n"));
        assert!(output.contains("The most recent move has been undone."));
        assert_eq!(game.notate(), "X00 O11 X01 O22 X10");
    }

    #[test]
    fn redoing_the_winning_move_reports_the_result ()
    {
        let lines = ["x 0 0", "o 1 1", "x 0 1", "o 2 2", "x 0 2", "u", "r", "o 2 0"];
        let (output, game) = transcript(& config(false), & lines);

        assert_eq!(output.matches("The X player won. Enter 'n'").count(), 2);
        assert!(output.contains("The game is over.\n"));
        assert!(game.has_player_x_won());
    }

    #[test]
    fn redoing_into_a_win_ends_the_loop_when_configured ()
    {
        let (output, game) = transcript(& config(true), & ["s X00 O11 X01 O22 | X02", "r", "h"]);

        assert!(output.contains("The X player won. Restart the program to play again."));
        assert!(! output.contains("X00 O11 X01 O22 X02\n"));
        assert!(game.has_player_x_won());
    }

    #[test]
    fn turn_is_checked_before_coordinates ()
    {
        let (output, game) = transcript(& config(true), & ["x 1 1", "x 9 9", "o 9 9"]);

        assert_eq!(output.matches("It isn't the X player's turn.\n").count(), 1);
        assert_eq!(output.matches("Invalid command input.\n").count(), 1);
        assert_eq!(game.notate(), "X11");
    }

    #[test]
    fn draw_is_reported ()
    {
        let lines = ["x 0 0", "o 0 1", "x 0 2", "o 1 1", "x 1 0", "o 1 2", "x 2 1", "o 2 0", "x 2 2"];
        let (output, _) = transcript(& config(true), & lines);
        assert!(output.contains("Cat's game. Restart the program to play again."));
    }

    #[test]
    fn new_game_and_reports ()
    {
        let (output, game) = transcript(& config(true), & ["h", "x 1 1", "o 0 0", "u", "h", "j", "n", "h"]);
        assert!(output.contains("No moves have been played."));
        assert!(output.contains("X11 | O00\n"));
        assert!(output.contains(r#""can_redo":true"#));
        assert!(output.contains("A new game has started."));
        assert!(! game.can_undo());
    }

    #[test]
    fn setup_replays_notation_with_redo_tail ()
    {
        let (output, game) = transcript(& config(true), & ["s X00 O11 | X22", "s X00 X01", "r"]);
        assert!(output.contains("That position can't be set up: It isn't the X player's turn."));
        assert!(output.contains("The most recent undo has been redone."));
        assert_eq!(game.notate(), "X00 O11 X22");
    }
}
