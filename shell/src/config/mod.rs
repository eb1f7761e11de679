
use std::path::Path;

use utils::error::Context;
use utils::*;

///
/// Represents a full configuration for the text interface.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config 
{
    #[serde(default = "log_path")]
    pub log_path: String,

    #[serde(default = "log_level")]
    pub log_level: String,

    #[serde(default = "exit_on_game_over")]
    pub exit_on_game_over: bool,

    #[serde(default = "show_help")]
    pub show_help: bool
}

impl Default for Config 
{
    fn default () -> Config 
    {
        Config 
        {
            log_path: log_path(),
            log_level: log_level(),
            exit_on_game_over: exit_on_game_over(),
            show_help: show_help()
        }
    }
}

impl Config 
{
    ///
    /// Loads the configuration at the given path, or the defaults if there is 
    /// no file there.
    ///
    pub fn load (path: & Path) -> Result<Config>
    {
        if ! path.exists()
        {
            return Ok(Config::default());
        }

        from_toml_file(path).context(format!("Invalid configuration in '{}'.", path.display()))
    }
}

///
/// Returns the default log path.
///
fn log_path () -> String 
{
    "logs".to_owned()
}

fn log_level () -> String 
{
    "info".to_owned()
}

fn exit_on_game_over () -> bool 
{
    true
}

fn show_help () -> bool 
{
    true
}

#[cfg(test)]
mod tests 
{
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults ()
    {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(& dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults ()
    {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "exit_on_game_over = false").unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(! config.exit_on_game_over);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_path, "logs");
        assert!(config.show_help);
    }

    #[test]
    fn malformed_file_is_an_error ()
    {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_help = \"sometimes\"").unwrap();

        assert!(Config::load(file.path()).is_err());
    }
}
