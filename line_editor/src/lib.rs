// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_line_editor
//!
//! A byte oriented text buffer for terminal line editors. It holds the document as an
//! ordered sequence of lines and keeps everything derived from those lines correct while
//! they are edited:
//!
//! 1. **Line store** ([`Document`], [`Line`]): raw bytes of each line, the rendered
//!    (tab expanded) form, and a highlight tag per rendered byte.
//! 2. **Render mapper** ([`logical_to_rendered()`], [`rendered_to_logical()`]): moves
//!    columns between the raw and the rendered form of a line.
//! 3. **Incremental highlighter** ([`classify_line()`],
//!    [`Document::rehighlight_from()`]): classifies every rendered byte, and carries an
//!    open block comment down the document only as far as it changes anything.
//! 4. **Marker tracker** ([`MarkerTracker`]): bookmarks that follow their text through
//!    every insert, delete, split and join.
//!
//! [`EditorSession`] ties these together with a caret and applies [`EditorEvent`]s.
//!
//! ```
//! use r3bl_line_editor::{C_PROFILE, EditorEvent, EditorSession, tags_to_string};
//!
//! let mut session = EditorSession::default();
//! session.set_profile(Some(&C_PROFILE));
//! EditorEvent::apply_editor_events(
//!     &mut session,
//!     [EditorEvent::InsertString("if (x > 10) // done".into())],
//! );
//!
//! let line = &session.document().lines()[0];
//! assert_eq!(tags_to_string(line.tags()), "kk......nn..ccccccc");
//! ```
//!
//! The `led` binary in this crate loads a file into a session and prints what the buffer
//! computed for it.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

/// Enable or disable debug logging for the buffer internals.
pub const DEBUG_LINE_EDITOR_MOD: bool = true;

// Attach.
pub mod decl_macros;
pub mod error;
pub mod led;
pub mod line_store;
pub mod log;
pub mod markers;
pub mod session;
pub mod syntax_highlighting;
pub mod units;

// Re-export.
pub use error::*;
pub use led::*;
pub use line_store::*;
pub use log::*;
pub use markers::*;
pub use session::*;
pub use syntax_highlighting::*;
pub use units::*;
