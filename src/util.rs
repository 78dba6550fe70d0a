pub mod args;

use flexi_logger::{Duplicate, FileSpec, FlexiLoggerError, Logger, LoggerHandle};
use log::LevelFilter;

/// Starts the global logger. Logs go to stdout unless `log_directory` is set,
/// in which case they go to a file there and optionally to stdout as well.
///
/// The returned handle must be kept alive for as long as logging is needed.
pub fn setup(
    log_level: &LevelFilter,
    log_directory: Option<&str>,
    duplicate_to_stdout: bool,
) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_str(log_level.as_str().to_lowercase())?;

    let logger_configured = match log_directory {
        Some(log_directory_val) => {
            let file_spec = FileSpec::default()
                .directory(log_directory_val)
                .suppress_timestamp();
            if duplicate_to_stdout {
                logger
                    .log_to_file(file_spec)
                    .duplicate_to_stdout(Duplicate::All)
            } else {
                logger.log_to_file(file_spec)
            }
        }
        None => logger.log_to_stdout(),
    };

    logger_configured.start()
}
