// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod marker;
pub mod marker_codec;
pub mod marker_tracker;

// Re-export.
pub use marker::*;
pub use marker_codec::*;
pub use marker_tracker::*;
