// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEFAULT_MARKER_CAPACITY, DEFAULT_TAB_STOP};

/// Knobs for an [`crate::EditorSession`]. Use the `with_*` methods to override the
/// defaults.
///
/// ```
/// use r3bl_line_editor::SessionConfig;
/// let config = SessionConfig::default().with_tab_stop(4);
/// assert_eq!(config.tab_stop, 4);
/// assert_eq!(config.marker_capacity, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub tab_stop: usize,
    pub marker_capacity: usize,
    pub region_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tab_stop: DEFAULT_TAB_STOP,
            marker_capacity: DEFAULT_MARKER_CAPACITY,
            region_capacity: DEFAULT_MARKER_CAPACITY,
        }
    }
}

impl SessionConfig {
    /// A tab stop of 0 is treated as 1.
    #[must_use]
    pub fn with_tab_stop(mut self, tab_stop: usize) -> Self {
        self.tab_stop = tab_stop.max(1);
        self
    }

    #[must_use]
    pub fn with_marker_capacity(mut self, capacity: usize) -> Self {
        self.marker_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_region_capacity(mut self, capacity: usize) -> Self {
        self.region_capacity = capacity;
        self
    }
}
