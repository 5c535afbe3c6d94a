//! Catalogue model.
//!
//! The catalogue is the read-only reference data for one scheduling
//! domain: an ordered list of sources (canonical order is significant —
//! tier partitioning walks it left to right) plus a tier-override map
//! applied after the greedy partition.
//!
//! Build one once and pass it by reference into the partitioner and
//! planner; it is never mutated by a generation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Source, Tier};

/// Canonical Daf Yomi catalogue: 38 tractates with approximate daf
/// counts, in Daf Yomi order. Midos is excluded.
const DAF_YOMI: [(&str, u32); 38] = [
    ("Brachos", 64),
    ("Shabbos", 157),
    ("Eruvin", 105),
    ("Pesachim", 121),
    ("Shekalim", 22),
    ("Yoma", 88),
    ("Sukkah", 56),
    ("Beitza", 40),
    ("Rosh Hashana", 34),
    ("Taanis", 31),
    ("Megillah", 32),
    ("Moed Katan", 29),
    ("Chagigah", 27),
    ("Yevamos", 122),
    ("Kesubos", 112),
    ("Nedarim", 91),
    ("Nazir", 66),
    ("Sotah", 49),
    ("Gittin", 90),
    ("Kiddushin", 82),
    ("Bava Kama", 119),
    ("Bava Metziah", 119),
    ("Bava Basra", 176),
    ("Sanhedrin", 113),
    ("Makos", 24),
    ("Shevuos", 49),
    ("Avodah Zara", 76),
    ("Horayos", 14),
    ("Zevachim", 120),
    ("Menachos", 110),
    ("Chullin", 142),
    ("Bechoros", 61),
    ("Arachin", 34),
    ("Temurah", 34),
    ("Kerisus", 28),
    ("Meilah", 22),
    ("Tamid", 10),
    ("Niddah", 73),
];

/// An ordered source catalogue with tier overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalogue {
    /// Sources in canonical order.
    sources: Vec<Source>,
    /// Tier forced for specific sources, applied after the greedy partition.
    overrides: HashMap<String, Tier>,
}

impl Catalogue {
    /// Creates an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical Daf Yomi catalogue.
    ///
    /// Sanhedrin, Eruvin, and Nedarim are pinned to `Moderate` regardless
    /// of where the greedy partition places them.
    pub fn daf_yomi() -> Self {
        let mut catalogue = Self::new();
        for (name, total) in DAF_YOMI {
            catalogue = catalogue.with_source(Source::new(name, total));
        }
        catalogue
            .with_override("Sanhedrin", Tier::Moderate)
            .with_override("Eruvin", Tier::Moderate)
            .with_override("Nedarim", Tier::Moderate)
    }

    /// Appends a source in canonical order.
    pub fn with_source(mut self, source: Source) -> Self {
        self.sources.push(source);
        self
    }

    /// Pins a source to a tier, overriding the greedy partition.
    pub fn with_override(mut self, name: impl Into<String>, tier: Tier) -> Self {
        self.overrides.insert(name.into(), tier);
        self
    }

    /// Sources in canonical order.
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Tier overrides (name → pinned tier).
    pub fn overrides(&self) -> &HashMap<String, Tier> {
        &self.overrides
    }

    /// Looks up a source by name.
    pub fn get(&self, name: &str) -> Option<&Source> {
        self.sources.iter().find(|s| s.name == name)
    }

    /// Whether a source with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Sum of all source weights.
    pub fn total_weight(&self) -> u64 {
        self.sources.iter().map(|s| s.weight() as u64).sum()
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the catalogue has no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
