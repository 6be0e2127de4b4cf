use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Minimal stderr logger behind the `log` facade.
pub struct Logger {
    severity: Level,
    enable_colors: bool,
}

impl Logger {
    /// Initialize logger with environment variables: `QUIRE_LOG` or
    /// `RUST_LOG` select the level (default info), `NO_COLOR` disables ANSI.
    pub fn init() -> Result<(), log::SetLoggerError> {
        let severity = std::env::var("QUIRE_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string())
            .parse::<Level>()
            .unwrap_or(Level::Info);
        let enable_colors = std::env::var("NO_COLOR").is_err();

        let logger = Logger { severity, enable_colors };
        log::set_max_level(LevelFilter::Trace);
        log::set_logger(Box::leak(Box::new(logger)))?;
        Ok(())
    }

    /// Get current timestamp as string
    fn timestamp() -> String {
        OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default()
    }

    /// Get color code for log level
    fn color(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1b[31m", // Red
            Level::Warn => "\x1b[33m",  // Yellow
            Level::Info => "\x1b[36m",  // Cyan
            Level::Debug => "\x1b[35m", // Magenta
            Level::Trace => "\x1b[37m", // White
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.severity
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Self::timestamp();
        let level_str = record.level().as_str();
        let args = record.args();

        let formatted_message = if self.enable_colors {
            let color = Self::color(record.level());
            format!("{color}[{timestamp}] {level_str}\x1b[0m {args}\n")
        } else {
            format!("[{timestamp}] {level_str} {args}\n")
        };

        let _ = std::io::stderr().write_all(formatted_message.as_bytes());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
