//! Difficulty tier model.
//!
//! Sources are banded into three difficulty tiers. The canonical cycle
//! order `[Light, Moderate, Heavy]` drives both the daily mix pattern
//! and the allocator's fallback rotation, so it is fixed here rather
//! than left to callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty band assigned to a whole source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Lightest third of the catalogue by cumulative weight.
    Light,
    /// Middle third.
    Moderate,
    /// Heaviest third (absorbs any overshoot).
    Heavy,
}

impl Tier {
    /// Canonical cycle order used for daily mix patterns and fallback scans.
    pub const CYCLE: [Tier; 3] = [Tier::Light, Tier::Moderate, Tier::Heavy];

    /// The cycle rotated left by `shift` positions.
    pub fn rotated_cycle(shift: usize) -> [Tier; 3] {
        let mut cycle = Self::CYCLE;
        let len = cycle.len();
        cycle.rotate_left(shift % len);
        cycle
    }

    /// The tier after this one in cycle order. `Heavy` is terminal.
    pub fn next(self) -> Tier {
        match self {
            Tier::Light => Tier::Moderate,
            Tier::Moderate => Tier::Heavy,
            Tier::Heavy => Tier::Heavy,
        }
    }

    /// Stable index into per-tier arrays (cycle order).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::Light => "Light",
            Tier::Moderate => "Moderate",
            Tier::Heavy => "Heavy",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_rotation() {
        assert_eq!(Tier::rotated_cycle(0), [Tier::Light, Tier::Moderate, Tier::Heavy]);
        assert_eq!(Tier::rotated_cycle(1), [Tier::Moderate, Tier::Heavy, Tier::Light]);
        assert_eq!(Tier::rotated_cycle(2), [Tier::Heavy, Tier::Light, Tier::Moderate]);
        // Rotation wraps mod 3
        assert_eq!(Tier::rotated_cycle(3), Tier::rotated_cycle(0));
        assert_eq!(Tier::rotated_cycle(4), Tier::rotated_cycle(1));
    }

    #[test]
    fn test_next_is_terminal_at_heavy() {
        assert_eq!(Tier::Light.next(), Tier::Moderate);
        assert_eq!(Tier::Moderate.next(), Tier::Heavy);
        assert_eq!(Tier::Heavy.next(), Tier::Heavy);
    }

    #[test]
    fn test_index_matches_cycle_position() {
        for (i, tier) in Tier::CYCLE.iter().enumerate() {
            assert_eq!(tier.index(), i);
        }
    }
}
