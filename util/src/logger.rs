//! Logger initialisation
//!
//! Every line is stamped with the seconds elapsed since the session started and a short coloured
//! level tag. Debug and trace lines also carry the target (module path) they were logged from.
//! Lines go both to stdout and to the session's log file.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External imports
use colored::{ColoredString, Colorize};
use log::{info, Level};
use std::fmt::Display;
use thiserror::Error;

// Internal imports
use crate::session::{self, Session};

// Re-exports
pub use log::LevelFilter;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Targets which are too chatty below `Info`, whatever the minimum level.
const QUIET_TARGETS: [&str; 1] = ["zmq"];

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors associated with initialising the logger.
#[derive(Debug, Error)]
pub enum LoggerInitError {
    #[error("The minimum log level must include `INFO`, found `{0}`")]
    InvalidMinLogLevel(LevelFilter),

    #[error("Error opening the log file: {0}")]
    LogFileInitError(std::io::Error),

    #[error("A logger has already been set: {0}")]
    FernInitError(log::SetLoggerError)
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Initialise the logger for this execution.
///
/// `min_level` must be `Info` or more verbose, so that the startup and shutdown messages of the
/// executable are never lost. Only one logger can be set per process, a second call returns
/// `LoggerInitError::FernInitError`.
pub fn logger_init(
    min_level: LevelFilter,
    session: &Session
) -> Result<(), LoggerInitError> {

    if min_level < Level::Info {
        return Err(LoggerInitError::InvalidMinLogLevel(min_level))
    }

    let log_file = fern::log_file(&session.log_file_path)
        .map_err(LoggerInitError::LogFileInitError)?;

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!(
            "{}",
            format_record(
                session::get_elapsed_seconds(),
                record.level(),
                record.target(),
                message
            )
        )))
        .level(min_level);

    for target in QUIET_TARGETS.iter() {
        dispatch = dispatch.level_for(*target, min_level.min(LevelFilter::Info));
    }

    dispatch
        .chain(std::io::stdout())
        .chain(log_file)
        .apply()
        .map_err(LoggerInitError::FernInitError)?;

    info!("Logging initialised");
    if let Some(epoch) = session::get_epoch() {
        info!("    Session epoch: {}", epoch);
    }
    info!("    Log level: {:?}", min_level);
    info!("    Log file path: {:?}", session.log_file_path);

    Ok(())
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Build a single log line.
fn format_record(
    elapsed_s: f64,
    level: Level,
    target: &str,
    message: &dyn Display
) -> String {
    if level > Level::Info {
        format!("[{:10.6} {}] {}: {}", elapsed_s, level_tag(level), target, message)
    }
    else {
        format!("[{:10.6} {}] {}", elapsed_s, level_tag(level), message)
    }
}

/// Three letter tag for a log level
fn level_tag(level: Level) -> ColoredString {
    match level {
        Level::Trace => "TRC".dimmed().italic(),
        Level::Debug => "DBG".dimmed(),
        Level::Info  => "INF".normal(),
        Level::Warn  => "WRN".yellow(),
        Level::Error => "ERR".red().bold()
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_record() {
        colored::control::set_override(false);

        assert_eq!(
            format_record(1.5, Level::Info, "steer_lib::ctrl_loop", &"Control active"),
            "[  1.500000 INF] Control active"
        );
        assert_eq!(
            format_record(12.25, Level::Trace, "steer_lib::ctrl_loop", &"Tick 3"),
            "[ 12.250000 TRC] steer_lib::ctrl_loop: Tick 3"
        );
        assert_eq!(
            format_record(0.0, Level::Warn, "steer_lib", &"Lost connection"),
            "[  0.000000 WRN] Lost connection"
        );
    }

    #[test]
    fn test_min_level_must_include_info() {
        let session = Session {
            session_root: std::env::temp_dir(),
            log_file_path: std::env::temp_dir().join("steer_logger_test.log")
        };

        assert!(matches!(
            logger_init(LevelFilter::Warn, &session),
            Err(LoggerInitError::InvalidMinLogLevel(LevelFilter::Warn))
        ));
    }
}
