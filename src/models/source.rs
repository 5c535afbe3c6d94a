//! Source and unit models.
//!
//! A source is a named text with a fixed total extent, pre-segmented
//! into consecutive units of at most ten positions each. Units are the
//! atomic schedulable items; a source is always included or excluded
//! as a whole.
//!
//! # Segmentation
//! The first admissible position of any source is `2`, never `1` —
//! position 1 is a title/opening page and is deliberately outside every
//! unit. Unit boundaries align to multiples of ten (`2-10`, `11-20`,
//! ...), with the final unit absorbing the remainder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive positional range `[start, end]` within one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    /// First position covered (inclusive).
    pub start: u32,
    /// Last position covered (inclusive).
    pub end: u32,
}

impl Unit {
    /// Creates a new unit.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Number of positions covered.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Whether the range is degenerate (never produced by segmentation).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Display label, e.g. `"2-10"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A named source with a fixed extent and its derived unit sequence.
///
/// Units are computed once at construction and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    /// Source name (unique within a catalogue).
    pub name: String,
    /// Total extent length in positions.
    pub total: u32,
    /// Derived unit sequence covering `[2, total]`.
    pub units: Vec<Unit>,
}

impl Source {
    /// Creates a source, deriving its units from the total extent.
    pub fn new(name: impl Into<String>, total: u32) -> Self {
        Self {
            name: name.into(),
            total,
            units: unitize(total),
        }
    }

    /// Number of units.
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Scheduling weight: the total extent length.
    #[inline]
    pub fn weight(&self) -> u32 {
        self.total
    }
}

/// Segments `[2, total]` into units aligned to multiples of ten.
///
/// `total < 2` yields an empty sequence.
fn unitize(total: u32) -> Vec<Unit> {
    let mut units = Vec::new();
    let mut start = 2;
    while start <= total {
        let end = total.min((start - 1) / 10 * 10 + 10);
        units.push(Unit::new(start, end));
        start = end + 1;
    }
    units
}
