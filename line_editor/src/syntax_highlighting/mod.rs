// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod highlight_category;
pub mod highlighter;
pub mod language_profile;
pub mod search_overlay;

// Re-export.
pub use highlight_category::*;
pub use highlighter::*;
pub use language_profile::*;
pub use search_overlay::*;
