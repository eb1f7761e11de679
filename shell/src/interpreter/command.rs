
use tictac::{Player, Point};

///
/// The reasons a line of input is not a command.
///
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError 
{
    #[error("Invalid command. Enter '?' to see the possible commands.")]
    Unknown(String),

    #[error("Invalid command input.")]
    Malformed(Player, String)
}

///
/// The available commands in the text interface.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command 
{
    Blank,                      // Nothing was entered.
    Help,                       // Lists the commands.

    // State commands.

    Place(Player, Point),       // Places a mark, provided it is legal.
    Undo,                       // Undoes the last move, provided one exists.
    Redo,                       // Redoes the last undone move, provided one exists.
    NewGame,                    // Starts a new game, erasing the history.
    Setup(String),              // Replaces the game with one replayed from game notation.

    // Reporting commands.

    ShowHistory,                // Prints the game notation, including the redo tail.
    ShowSnapshot                // Prints the game as a JSON object.
}

impl Command 
{
    ///
    /// Maps this command to its literal command string.
    ///
    pub fn command (& self) -> String 
    {
        match self 
        {
            Command::Blank                    => "".to_owned(),
            Command::Help                     => "?".to_owned(),

            Command::Place(Player::X, _)      => "x".to_owned(),
            Command::Place(Player::O, _)      => "o".to_owned(),
            Command::Undo                     => "u".to_owned(),
            Command::Redo                     => "r".to_owned(),
            Command::NewGame                  => "n".to_owned(),
            Command::Setup(_)                 => "s".to_owned(),

            Command::ShowHistory              => "h".to_owned(),
            Command::ShowSnapshot             => "j".to_owned()
        }
    }

    ///
    /// Returns the usage line shown in the command list.
    ///
    pub fn usage (& self) -> String 
    {
        let description = match self 
        {
            Command::Blank                    => "",
            Command::Help                     => "List these commands",
            Command::Place(Player::X, _)      => "row col - Put an X on the grid at the specified row and column",
            Command::Place(Player::O, _)      => "row col - Put an O on the grid at the specified row and column",
            Command::Undo                     => "Undo the last move",
            Command::Redo                     => "Redo the last undone move",
            Command::NewGame                  => "Start a new game",
            Command::Setup(_)                 => "moves - Replay moves such as 'X00 O11 | X22'; moves after '|' can be redone",
            Command::ShowHistory              => "Show the moves played so far",
            Command::ShowSnapshot             => "Show the game as JSON"
        };

        match self 
        {
            Command::Place(..) | Command::Setup(_) => format!("{} {}", self.command(), description),
            _                                      => format!("{} - {}", self.command(), description)
        }
    }

    ///
    /// Returns one instance of each listed command, in display order.
    ///
    pub fn listing () -> Vec<Command>
    {
        let origin = Point::new(0, 0);
        vec! 
        [
            Command::Place(Player::X, origin),
            Command::Place(Player::O, origin),
            Command::Undo,
            Command::Redo,
            Command::NewGame,
            Command::Setup(String::new()),
            Command::ShowHistory,
            Command::ShowSnapshot,
            Command::Help
        ]
    }

    ///
    /// Recognizes a line of input. The first token names the command, in either 
    /// case; placements take a row and a column in 0 ..= 2.
    ///
    pub fn parse (line: & str) -> Result<Command, CommandError>
    {
        let args : Vec<& str> = line.split_whitespace().collect();
        let cmd = match args.first()
        {
            Some(cmd) => cmd.to_lowercase(),
            None      => return Ok(Command::Blank)
        };

        let command = match cmd.as_str()
        {
            "x" => Command::Place(Player::X, Command::parse_point(Player::X, line, & args[1 ..])?),
            "o" => Command::Place(Player::O, Command::parse_point(Player::O, line, & args[1 ..])?),
            "u" => Command::Undo,
            "r" => Command::Redo,
            "n" => Command::NewGame,
            "s" => Command::Setup(args[1 ..].join(" ")),
            "h" => Command::ShowHistory,
            "j" => Command::ShowSnapshot,
            "?" => Command::Help,
            _   => return Err(CommandError::Unknown(line.to_owned()))
        };

        Ok(command)
    }

    fn parse_point (player: Player, line: & str, args: & [& str]) -> Result<Point, CommandError>
    {
        let malformed = || CommandError::Malformed(player, line.to_owned());

        if args.len() != 2 
        {
            return Err(malformed());
        }

        let row = args[0].parse::<usize>().map_err(|_| malformed())?;
        let col = args[1].parse::<usize>().map_err(|_| malformed())?;

        let point = Point::new(row, col);
        match point.in_bounds()
        {
            true  => Ok(point),
            false => Err(malformed())
        }
    }
}

#[cfg(test)]
mod tests 
{
    use super::*;

    #[test]
    fn placements_take_row_then_col ()
    {
        assert_eq!(Command::parse("x 0 2"), Ok(Command::Place(Player::X, Point::new(0, 2))));
        assert_eq!(Command::parse("  O 2 1 "), Ok(Command::Place(Player::O, Point::new(2, 1))));
    }

    #[test]
    fn malformed_placements_are_distinguished_from_unknown_commands ()
    {
        assert!(matches!(Command::parse("x 1"), Err(CommandError::Malformed(Player::X, _))));
        assert!(matches!(Command::parse("x 1 3"), Err(CommandError::Malformed(Player::X, _))));
        assert!(matches!(Command::parse("o a b"), Err(CommandError::Malformed(Player::O, _))));
        assert!(matches!(Command::parse("x 1 1 1"), Err(CommandError::Malformed(Player::X, _))));
        assert!(matches!(Command::parse("quit"), Err(CommandError::Unknown(_))));
    }

    #[test]
    fn single_letter_commands ()
    {
        assert_eq!(Command::parse(""), Ok(Command::Blank));
        assert_eq!(Command::parse("u"), Ok(Command::Undo));
        assert_eq!(Command::parse("R"), Ok(Command::Redo));
        assert_eq!(Command::parse("?"), Ok(Command::Help));
        assert_eq!(Command::parse("n"), Ok(Command::NewGame));
        assert_eq!(Command::parse("s X00  O11 | X22"), Ok(Command::Setup("X00 O11 | X22".to_owned())));
    }

    #[test]
    fn every_listed_command_parses_back ()
    {
        for command in Command::listing()
        {
            let line = match command 
            {
                Command::Place(..) => format!("{} 0 0", command.command()),
                _                  => command.command()
            };
            assert_eq!(Command::parse(& line), Ok(command));
        }
    }
}
