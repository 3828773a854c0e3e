// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "led_log.txt";

/// Where the logs go, and how much of them.
///
/// Logging is **disabled** by default: the default level filter is
/// [`LevelFilter::OFF`], and [`crate::try_initialize_logging_global()`] does nothing
/// with it.
///
/// ```
/// use r3bl_line_editor::{DisplayPreference, TracingConfig, WriterConfig};
/// use tracing_core::LevelFilter;
///
/// let config = TracingConfig {
///     writer_config: WriterConfig::Display(DisplayPreference::Stderr),
///     level_filter: LevelFilter::DEBUG,
/// };
/// assert_eq!(config.get_level_filter(), LevelFilter::DEBUG);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }
}

/// The `String` is the log file path, eg: `/tmp/led_log.txt` or `led_log.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    /// Debug level logs written to `maybe_file_path`, or [`DEFAULT_LOG_FILE_NAME`].
    #[must_use]
    pub fn new_file(maybe_file_path: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                maybe_file_path.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self {
        Self {
            level_filter: level.into(),
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}
