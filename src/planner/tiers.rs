//! Tier partitioner.
//!
//! Splits the catalogue into three difficulty tiers of approximately
//! equal cumulative weight with a single left-to-right greedy pass.
//! The partition is order-sensitive: reordering the catalogue changes
//! tier membership. Pinned overrides from the catalogue are applied
//! after the pass, never inside it.

use std::collections::HashMap;

use crate::models::{Catalogue, Tier};

/// The result of partitioning a catalogue into tiers.
#[derive(Debug, Clone, Default)]
pub struct TierAssignment {
    map: HashMap<String, Tier>,
    members: [Vec<String>; 3],
}

impl TierAssignment {
    /// Tier for a source. Names absent from the partitioned catalogue
    /// fall back to `Moderate`.
    pub fn tier_of(&self, name: &str) -> Tier {
        self.map.get(name).copied().unwrap_or(Tier::Moderate)
    }

    /// Member names of one tier, in catalogue order.
    pub fn members(&self, tier: Tier) -> &[String] {
        &self.members[tier.index()]
    }

    /// Total sources assigned.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no sources were assigned.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Partitions the catalogue into three tiers by cumulative weight.
///
/// Target per tier is `round(total_weight / 3)`. Walking the catalogue
/// in canonical order, a source whose weight would push the running
/// total past the target starts the next tier (resetting the running
/// total); once in `Heavy`, everything remaining stays there regardless
/// of overshoot. No backtracking, no rebalancing. Overrides are applied
/// afterwards. Deterministic and idempotent.
pub fn partition_tiers(catalogue: &Catalogue) -> TierAssignment {
    let target = (catalogue.total_weight() as f64 / 3.0).round() as u64;

    let mut map = HashMap::with_capacity(catalogue.len());
    let mut tier = Tier::Light;
    let mut running = 0u64;

    for source in catalogue.sources() {
        let weight = source.weight() as u64;
        if tier != Tier::Heavy && running + weight > target {
            tier = tier.next();
            running = 0;
        }
        map.insert(source.name.clone(), tier);
        running += weight;
    }

    for (name, &pinned) in catalogue.overrides() {
        if let Some(assigned) = map.get_mut(name) {
            *assigned = pinned;
        }
    }

    // Member lists in catalogue order, override-adjusted
    let mut members: [Vec<String>; 3] = Default::default();
    for source in catalogue.sources() {
        let tier = map[&source.name];
        members[tier.index()].push(source.name.clone());
    }

    TierAssignment { map, members }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;

    #[test]
    fn test_equal_thirds() {
        let cat = Catalogue::new()
            .with_source(Source::new("A", 20))
            .with_source(Source::new("B", 20))
            .with_source(Source::new("C", 20));

        let tiers = partition_tiers(&cat);
        assert_eq!(tiers.tier_of("A"), Tier::Light);
        assert_eq!(tiers.tier_of("B"), Tier::Moderate);
        assert_eq!(tiers.tier_of("C"), Tier::Heavy);
    }

    #[test]
    fn test_heavy_absorbs_overshoot() {
        // Target = round(90/3) = 30; the trailing run of small sources
        // all land in Heavy once it is reached.
        let cat = Catalogue::new()
            .with_source(Source::new("A", 30))
            .with_source(Source::new("B", 30))
            .with_source(Source::new("C", 10))
            .with_source(Source::new("D", 10))
            .with_source(Source::new("E", 10));

        let tiers = partition_tiers(&cat);
        assert_eq!(tiers.tier_of("A"), Tier::Light);
        assert_eq!(tiers.tier_of("B"), Tier::Moderate);
        assert_eq!(tiers.tier_of("C"), Tier::Heavy);
        assert_eq!(tiers.tier_of("D"), Tier::Heavy);
        assert_eq!(tiers.tier_of("E"), Tier::Heavy);
    }

    #[test]
    fn test_order_sensitivity() {
        let forward = Catalogue::new()
            .with_source(Source::new("big", 50))
            .with_source(Source::new("small", 10));
        let reversed = Catalogue::new()
            .with_source(Source::new("small", 10))
            .with_source(Source::new("big", 50));

        let a = partition_tiers(&forward);
        let b = partition_tiers(&reversed);
        // "small" lands in Heavy after "big", but in Light before it
        assert_eq!(a.tier_of("small"), Tier::Heavy);
        assert_eq!(b.tier_of("small"), Tier::Light);
    }

    #[test]
    fn test_overrides_applied_after_pass() {
        let cat = Catalogue::new()
            .with_source(Source::new("A", 20))
            .with_source(Source::new("B", 20))
            .with_source(Source::new("C", 20))
            .with_override("A", Tier::Heavy);

        let tiers = partition_tiers(&cat);
        assert_eq!(tiers.tier_of("A"), Tier::Heavy);
        // The greedy pass itself is unaffected by the override
        assert_eq!(tiers.tier_of("B"), Tier::Moderate);
        assert_eq!(tiers.tier_of("C"), Tier::Heavy);
        assert_eq!(tiers.members(Tier::Light).len(), 0);
        assert_eq!(tiers.members(Tier::Heavy), &["A".to_string(), "C".to_string()]);
    }

    #[test]
    fn test_idempotent() {
        let cat = Catalogue::daf_yomi();
        let a = partition_tiers(&cat);
        let b = partition_tiers(&cat);
        for source in cat.sources() {
            assert_eq!(a.tier_of(&source.name), b.tier_of(&source.name));
        }
    }

    #[test]
    fn test_daf_yomi_partition() {
        let tiers = partition_tiers(&Catalogue::daf_yomi());
        assert_eq!(tiers.len(), 38);
        // Boundary sources of the greedy pass
        assert_eq!(tiers.tier_of("Chagigah"), Tier::Light);
        assert_eq!(tiers.tier_of("Yevamos"), Tier::Moderate);
        assert_eq!(tiers.tier_of("Bava Metziah"), Tier::Moderate);
        assert_eq!(tiers.tier_of("Bava Basra"), Tier::Heavy);
        // Pinned overrides win over the pass
        assert_eq!(tiers.tier_of("Eruvin"), Tier::Moderate);
        assert_eq!(tiers.tier_of("Sanhedrin"), Tier::Moderate);
        assert_eq!(tiers.tier_of("Nedarim"), Tier::Moderate);
    }

    #[test]
    fn test_unknown_name_defaults_moderate() {
        let tiers = partition_tiers(&Catalogue::new());
        assert!(tiers.is_empty());
        assert_eq!(tiers.tier_of("ghost"), Tier::Moderate);
    }
}
