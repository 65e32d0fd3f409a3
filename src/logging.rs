use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

// Custom logger structure
#[derive(Debug)]
struct DuelLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

impl DuelLogger {
    fn new(level: LevelFilter, debug_filter: Option<String>) -> Self {
        let debug_filters = debug_filter.map(|filter_str| {
            filter_str
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<HashSet<String>>()
        });
        DuelLogger {
            level,
            debug_filters,
        }
    }
}

impl log::Log for DuelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Debug and trace records only pass when their topic is selected
        if let Some(filters) = &self.debug_filters {
            if metadata.level() >= log::Level::Debug {
                return filters.contains(metadata.target())
                    || filters.iter().any(|f| metadata.target().starts_with(f.as_str()));
            }
        }
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level_color = match record.level() {
            log::Level::Error => "\x1B[31m", // Red
            log::Level::Warn => "\x1B[33m",  // Yellow
            log::Level::Info => "\x1B[32m",  // Green
            log::Level::Debug => "\x1B[36m", // Cyan
            log::Level::Trace => "\x1B[35m", // Magenta
        };
        let reset = "\x1B[0m";
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        let message = record.args().to_string();
        let context = context_prefix(&message);

        let mut output = format!(
            "{timestamp} {level_color}{level:5}{reset} {context}{target}: {message}",
            level = record.level(),
            target = record.target(),
        );

        if let Some(module_path) = record.module_path() {
            if module_path != record.target() {
                output.push_str(&format!(" [{}]", module_path));
            }
        }

        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", output);
        let _ = stdout.flush();
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

/// Pulls the integer following `label` out of a log message ("Level 3" -> 3).
fn extract_number(message: &str, label: &str) -> Option<u32> {
    let start = message.find(label)? + label.len();
    let rest = &message[start..];
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    rest[..end].parse().ok()
}

// Builds the "[L01][T003] " prefix from whatever context the message carries
fn context_prefix(message: &str) -> String {
    let mut context = String::new();
    if let Some(level) = extract_number(message, "Level ") {
        context.push_str(&format!("[L{:02}]", level));
    }
    if let Some(turn) = extract_number(message, "Turn ") {
        context.push_str(&format!("[T{:03}]", turn));
    }
    if !context.is_empty() {
        context.push(' ');
    }
    context
}

static LOGGER: OnceLock<DuelLogger> = OnceLock::new();

// Initialize the logger with optional debug topic filters
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| DuelLogger::new(level, debug_filter));
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

// Helper macros for specific debug topics
#[macro_export]
macro_rules! debug_trajectory {
    ($($arg:tt)*) => {
        log::debug!(target: "trajectory", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_collision {
    ($($arg:tt)*) => {
        log::debug!(target: "collision", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_terrain {
    ($($arg:tt)*) => {
        log::debug!(target: "terrain", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_level {
    ($($arg:tt)*) => {
        log::debug!(target: "level", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_opponent {
    ($($arg:tt)*) => {
        log::debug!(target: "opponent", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_shot {
    ($($arg:tt)*) => {
        log::debug!(target: "shot", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_match {
    ($($arg:tt)*) => {
        log::debug!(target: "match", $($arg)*)
    };
}
