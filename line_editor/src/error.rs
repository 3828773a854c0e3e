// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors for this crate. The buffer core itself is infallible for every input it
//! accepts: out of range requests are no-ops, malformed metadata parses as zero, and a
//! missing language profile simply means "no highlighting". The only core API that
//! reports a failure is the explicit capacity check on the marker collection. The rest
//! of the variants belong to the I/O surfaces (the `led` launcher and logging setup).

use std::path::PathBuf;

/// | Variant                   | Raised by                                   | Recoverable? |
/// | :------------------------ | :------------------------------------------ | :----------- |
/// | [`MarkerCapacityReached`] | [`MarkerTracker::try_add_marker()`]         | Yes          |
/// | [`RegionCapacityReached`] | [`MarkerTracker::try_add_region()`]         | Yes          |
/// | [`ReadFile`]              | `led` launcher, loading a document/metadata | No           |
/// | [`WriteFile`]             | `led` launcher, saving a document/metadata  | No           |
/// | [`LogFile`]               | logging setup, bad log file path            | No           |
///
/// [`MarkerCapacityReached`]: Self::MarkerCapacityReached
/// [`RegionCapacityReached`]: Self::RegionCapacityReached
/// [`ReadFile`]: Self::ReadFile
/// [`WriteFile`]: Self::WriteFile
/// [`LogFile`]: Self::LogFile
/// [`MarkerTracker::try_add_marker()`]: crate::MarkerTracker::try_add_marker
/// [`MarkerTracker::try_add_region()`]: crate::MarkerTracker::try_add_region
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum LineEditorError {
    #[error("🔖 Marker collection is full ({capacity} markers)")]
    #[diagnostic(
        code(r3bl_line_editor::markers::capacity),
        help("Remove an existing marker, or raise `SessionConfig::marker_capacity`.")
    )]
    MarkerCapacityReached { capacity: usize },

    #[error("🔖 Region collection is full ({capacity} regions)")]
    #[diagnostic(
        code(r3bl_line_editor::regions::capacity),
        help("Remove an existing region, or raise `SessionConfig::region_capacity`.")
    )]
    RegionCapacityReached { capacity: usize },

    #[error("🔼 Could not read '{}'", path.display())]
    #[diagnostic(code(r3bl_line_editor::io::read))]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("🔽 Could not write '{}'", path.display())]
    #[diagnostic(
        code(r3bl_line_editor::io::write),
        help("Check that the folder exists and that you have write permissions.")
    )]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("📑 Can't use '{path}' as a log file")]
    #[diagnostic(
        code(r3bl_line_editor::log::file_path),
        help("The path needs a parent folder and a file name.")
    )]
    LogFile { path: String },
}
