// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod document;
pub mod line;
pub mod render_mapper;

// Re-export.
pub use document::*;
pub use line::*;
pub use render_mapper::*;
