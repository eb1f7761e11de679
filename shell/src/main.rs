
mod config;
mod interpreter;

use std::path::Path;

use clap::Parser;

use interpreter::Interpreter;

use utils::*;

///
/// A structure representing command line arguments.
///
#[derive(Parser)]
struct CLIArgs 
{
    #[clap(short, long, default_value = "config/config.toml")]
    config: String
}

fn main () -> Result<()>
{
    let args = CLIArgs::parse();
    let config = config::Config::load(Path::new(& args.config))?;

    // A game without a log file is still playable.

    let _logger = match log::start(& config.log_path, "shell", & config.log_level)
    {
        Ok(handle) => Some(handle),
        Err(e) => 
        {
            eprintln!("{:#}", e);
            None
        }
    };
    log::info!("Shell startup with {:?}", config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let mut interpreter = Interpreter::new(& config, stdout.lock());
    interpreter.introduction()?;
    interpreter.run_loop(stdin.lock())?;

    log::info!("Shell shutdown");
    Ok(())
}
