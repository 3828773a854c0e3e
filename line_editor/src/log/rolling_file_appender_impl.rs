// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use crate::LineEditorError;

/// A file appender that never rolls over, for `path_str`.
///
/// # Errors
///
/// Returns [`LineEditorError::LogFile`] if the path has no parent folder or no file name.
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let log_file_error = || LineEditorError::LogFile {
        path: path_str.to_string(),
    };

    let parent = path.parent().ok_or_else(log_file_error)?;
    let file_name = path.file_name().ok_or_else(log_file_error)?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_without_file_name_is_rejected() {
        let message = try_create("/").err().map(|report| report.to_string());
        assert_eq!(message.as_deref(), Some("📑 Can't use '/' as a log file"));
    }
}
