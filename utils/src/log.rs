
use flexi_logger::{FileSpec, Logger, LoggerHandle, with_thread, WriteMode};
use super::error::*;

///
/// Macros to write to the backing file logger.
///
pub use log::{trace as trace, debug as debug, info as info, warn as warn, error as error};

///
/// Initializes the logstream to write to the given file, at the level given by
/// the flexi_logger spec string (e.g. "info" or "tictac=debug,warn").
///
pub fn initialize (path: & str, filename: & str, spec: & str) -> Result<Logger>
{
    let file_spec = FileSpec::default()
        .directory(path)
        .basename(filename)
        .use_timestamp(true)
        .suffix("log");

    let logger = Logger::try_with_str(spec)?
        .log_to_file(file_spec)
        .write_mode(WriteMode::BufferAndFlush)
        .format_for_files(with_thread);

    Ok(logger)
}

///
/// Builds and starts the file logger; the handle must be held for as long as 
/// logging should continue, since dropping it flushes and shuts the logger down.
///
pub fn start (path: & str, filename: & str, spec: & str) -> Result<LoggerHandle>
{
    let context = format!("Failed to start the logger in '{}'.", path);
    let handle = initialize(path, filename, spec).context(context.clone())?
        .start()
        .context(context)?;
    Ok(handle)
}
