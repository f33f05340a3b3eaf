//! Jump engine settings
//! A read-only snapshot passed into every entry point; the engine never
//! reads configuration from ambient state.

use crate::constants::markers;

/// User-facing settings for the jump engine.
#[derive(Debug, Clone)]
pub struct JumpSettings {
    /// Global kill-switch; when false every entry point is a pass-through
    pub enabled: bool,
    /// Marker key alphabet, in priority order
    pub marker_keys: String,
    /// Keys withheld from the alphabet (e.g. reserved by pending host triggers)
    pub reserved_keys: String,
    /// Case-insensitive literal search
    pub ignore_case: bool,
    /// Override ignore_case off when the search text contains an uppercase letter
    pub smart_case: bool,
}

impl JumpSettings {
    /// Create default settings
    #[must_use]
    pub fn new() -> Self {
        JumpSettings {
            enabled: true,
            marker_keys: markers::DEFAULT_MARKER_KEYS.to_string(),
            reserved_keys: String::new(),
            ignore_case: false,
            smart_case: false,
        }
    }

    /// Marker alphabet as an ordered key list.
    #[must_use]
    pub fn alphabet(&self) -> Vec<char> {
        self.marker_keys.chars().collect()
    }

    /// Keys excluded from allocation.
    #[must_use]
    pub fn excluded(&self) -> Vec<char> {
        self.reserved_keys.chars().collect()
    }
}

impl Default for JumpSettings {
    fn default() -> Self {
        Self::new()
    }
}
