use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{debug, Level, LevelFilter};
use std::str::FromStr;
use std::sync::Once;

const RUST_LOG_ENV: &str = "RUST_LOG";
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

static INIT: Once = Once::new();

fn color_from_level(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red(),
        Level::Warn => "WARN".yellow(),
        Level::Info => "INFO".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".white(),
    }
}

fn dispatch(log_level: LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let time = Local::now().format("%H:%M:%S%.3f");
            let color = color_from_level(record.level());
            out.finish(format_args!("{time} {color} > {message}"));
        })
        .level(log_level)
        .chain(std::io::stdout())
}

/// # Panics
/// Panics if a global logger is already installed.
fn init_logging_with_level(log_level: LevelFilter) {
    dispatch(log_level)
        .apply()
        .inspect_err(|e| println!("Failed to initialize logging with level `{log_level}`: {e}"))
        .unwrap();

    debug!("Logging initialized with level: {log_level}");
}

/// # Panics
/// Panics if `log_level` is not a valid log level.
fn parse_log_level(source: &str, log_level: &str) -> LevelFilter {
    LevelFilter::from_str(log_level.trim()).unwrap_or_else(|_| {
        panic!(
            "Invalid log level set with `{}`, got: {}",
            source, log_level
        )
    })
}

/// Picks the level from `level_override`, then `RUST_LOG`, then `info`.
fn resolve_log_level(level_override: Option<&str>, rust_log: Option<&str>) -> LevelFilter {
    match (level_override, rust_log) {
        (Some(level), _) => parse_log_level("--traffic-generator.log-level", level),
        (None, Some(level)) => parse_log_level(RUST_LOG_ENV, level),
        (None, None) => DEFAULT_LEVEL,
    }
}

/// Installs the global logger on first call, later calls are ignored.
///
/// # Panics
/// Panics if the chosen level is not a valid log level.
pub fn init_logging(level_override: Option<&str>) {
    INIT.call_once(|| {
        let rust_log = std::env::var(RUST_LOG_ENV).ok();
        init_logging_with_level(resolve_log_level(level_override, rust_log.as_deref()));
    });
}
