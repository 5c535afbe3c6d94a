//! Selection configuration.
//!
//! Per-source inclusion flags and repeat counts. Defaults are permissive:
//! a source with no explicit entry is enabled with one pass. Repeat
//! counts are clamped to `[1, 3]` on both write and read, so an
//! out-of-range value can never reach the queue builder.
//!
//! The selection is the only state that survives across generations;
//! the caller mutates it freely between calls to the planner.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::Catalogue;

/// Minimum passes through a source.
pub const MIN_REPEATS: u32 = 1;
/// Maximum passes through a source.
pub const MAX_REPEATS: u32 = 3;

/// Per-source enabled flags and repeat counts.
///
/// Sparse: only deviations from the defaults (enabled, one pass) are stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Sources excluded from scheduling.
    disabled: HashSet<String>,
    /// Repeat counts differing from the default of 1.
    repeats: HashMap<String, u32>,
}

impl Selection {
    /// Creates a selection with every source enabled at one pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables a source.
    pub fn with_disabled(mut self, name: impl Into<String>) -> Self {
        self.disabled.insert(name.into());
        self
    }

    /// Sets a repeat count (clamped to `[1, 3]`).
    pub fn with_repeats(mut self, name: impl Into<String>, repeats: u32) -> Self {
        self.set_repeats(name, repeats);
        self
    }

    /// Enables or disables a source.
    pub fn set_enabled(&mut self, name: impl Into<String>, enabled: bool) {
        let name = name.into();
        if enabled {
            self.disabled.remove(&name);
        } else {
            self.disabled.insert(name);
        }
    }

    /// Sets a repeat count (clamped to `[1, 3]`).
    pub fn set_repeats(&mut self, name: impl Into<String>, repeats: u32) {
        self.repeats
            .insert(name.into(), repeats.clamp(MIN_REPEATS, MAX_REPEATS));
    }

    /// Whether a source is enabled. Unknown names default to enabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        !self.disabled.contains(name)
    }

    /// Repeat count for a source. Unknown names default to 1.
    pub fn repeats(&self, name: &str) -> u32 {
        self.repeats
            .get(name)
            .copied()
            .unwrap_or(MIN_REPEATS)
            .clamp(MIN_REPEATS, MAX_REPEATS)
    }

    /// Names of all explicitly disabled sources.
    pub fn disabled_names(&self) -> impl Iterator<Item = &str> {
        self.disabled.iter().map(String::as_str)
    }

    /// Names with an explicit repeat count.
    pub fn repeat_names(&self) -> impl Iterator<Item = &str> {
        self.repeats.keys().map(String::as_str)
    }

    /// Total schedulable units for this selection: units × repeats over
    /// every enabled source in the catalogue.
    pub fn total_units(&self, catalogue: &Catalogue) -> usize {
        catalogue
            .sources()
            .iter()
            .filter(|s| self.is_enabled(&s.name))
            .map(|s| s.unit_count() * self.repeats(&s.name) as usize)
            .sum()
    }

    /// Days needed to consume `total_units(catalogue)` at the given quota.
    ///
    /// Returns 0 when the quota is 0.
    pub fn estimated_days(&self, catalogue: &Catalogue, units_per_day: usize) -> usize {
        if units_per_day == 0 {
            return 0;
        }
        self.total_units(catalogue).div_ceil(units_per_day)
    }
}
