use crate::error::{Result as ServerErrorResult, ServerError};

use cc_config::LogLevel;

use std::fmt::{Arguments, Display};
use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, Record, info};

/// Where log lines go
#[derive(Debug, Clone)]
pub enum LogSink {
    /// Standard output; `colored` tints the level for terminals
    Stdout { colored: bool },
    /// Append to a file, never colored
    File(PathBuf),
}

impl LogSink {
    pub fn describe(&self) -> String {
        match self {
            Self::Stdout { .. } => "stdout".to_string(),
            Self::File(path) => format!("file={}", path.display()),
        }
    }
}

/// Install the global `log` logger; fails if one is already set
pub fn initialize(level: LogLevel, sink: LogSink) -> ServerErrorResult<()> {
    let level_filter = level.0;

    let output = match &sink {
        LogSink::File(path) => {
            let file = fern::log_file(path).map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", path.display(), e),
            })?;
            Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!("{}", line(record.level(), message, record)))
                })
                .chain(file)
        }
        LogSink::Stdout { colored: true } => {
            let colors = level_colors();
            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "{}",
                        line(colors.color(record.level()), message, record)
                    ))
                })
                .chain(std::io::stdout())
        }
        LogSink::Stdout { colored: false } => Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("{}", line(record.level(), message, record)))
            })
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    info!("Logger initialized: level={:?}, {}", level_filter, sink.describe());

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn line(level: impl Display, message: &Arguments, record: &Record) -> String {
    format!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339_seconds(SystemTime::now()),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    )
}
