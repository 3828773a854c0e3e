// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod caret;
pub mod document_stats;
pub mod editor_event;
pub mod editor_session;
pub mod incremental_search;
pub mod session_config;

// Re-export.
pub use caret::*;
pub use document_stats::*;
pub use editor_event::*;
pub use editor_session::*;
pub use incremental_search::*;
pub use session_config::*;
