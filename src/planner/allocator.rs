//! Day-by-day allocator.
//!
//! # Algorithm
//!
//! 1. Expand every enabled source into a shuffled repeat-aware queue
//!    and group the non-empty queues into three tier pools.
//! 2. Shuffle each pool's order once per generation.
//! 3. Fill days one at a time against the daily tier pattern, drawing
//!    from the preferred tier's pool round-robin, cascading to the
//!    other tiers, and only as a last resort allowing the same source
//!    twice in one day.
//! 4. Stop when every queue is empty (the last day may be short).
//!
//! Duplicate avoidance is best-effort, not a hard guarantee: when the
//! only non-empty queues belong to sources already used today, the
//! terminal fallback draws from them anyway rather than leave the day
//! under quota. The skew this allows near exhaustion is intentional.
//!
//! One generation owns all of its state (queues, pools, cursors);
//! nothing is shared across calls.

use std::collections::{HashSet, VecDeque};

use chrono::{Days, Local, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Assignment, Catalogue, Day, Schedule, Selection, Tier, Unit};

use super::queue::build_queue;
use super::tiers::partition_tiers;

/// One source's queue inside a tier pool.
#[derive(Debug)]
struct PoolEntry {
    source: String,
    tier: Tier,
    queue: VecDeque<Unit>,
}

/// The working set of source queues for one tier, with its round-robin
/// cursor. The cursor advances past each successful pick so that no
/// single source is favored across days.
#[derive(Debug, Default)]
struct TierPool {
    entries: Vec<PoolEntry>,
    cursor: usize,
}

impl TierPool {
    fn remaining(&self) -> usize {
        self.entries.iter().map(|e| e.queue.len()).sum()
    }

    /// Scans at most one full cycle from the cursor for a queue whose
    /// front can be drawn. `seen` (when present) rejects sources
    /// already used today.
    fn try_pick(&mut self, seen: Option<&HashSet<String>>) -> Option<Assignment> {
        if self.entries.is_empty() {
            return None;
        }
        for tries in 0..self.entries.len() {
            let idx = (self.cursor + tries) % self.entries.len();
            let entry = &self.entries[idx];
            if entry.queue.is_empty() {
                continue;
            }
            if let Some(seen) = seen {
                if seen.contains(&entry.source) {
                    continue;
                }
            }
            let len = self.entries.len();
            let entry = &mut self.entries[idx];
            let unit = entry.queue.pop_front()?;
            self.cursor = (idx + 1) % len;
            return Some(Assignment::new(entry.source.clone(), unit, entry.tier));
        }
        None
    }
}

/// The daily tier pattern for day `d` (0-based).
///
/// A quota of 3 always yields `[Light, Moderate, Heavy]`; any other
/// quota tiles the cycle rotated left by `d mod 3`.
fn day_pattern(units_per_day: usize, day: usize) -> Vec<Tier> {
    if units_per_day == 3 {
        return Tier::CYCLE.to_vec();
    }
    let rotated = Tier::rotated_cycle(day % 3);
    (0..units_per_day).map(|i| rotated[i % rotated.len()]).collect()
}

fn default_start() -> NaiveDate {
    Local::now().date_naive() + Days::new(1)
}

/// Tier-aware day-by-day schedule allocator.
///
/// Construct with the daily quota, optionally pin a start date, then
/// call [`Planner::generate`] with any [`rand::Rng`]. A seeded RNG
/// reproduces an identical schedule.
///
/// # Example
///
/// ```
/// use study_schedule::models::{Catalogue, Selection, Source};
/// use study_schedule::planner::Planner;
/// use chrono::NaiveDate;
/// use rand::SeedableRng;
///
/// let catalogue = Catalogue::new()
///     .with_source(Source::new("A", 20))
///     .with_source(Source::new("B", 20))
///     .with_source(Source::new("C", 20));
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let schedule = Planner::new(3)
///     .with_start_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
///     .generate(&catalogue, &Selection::new(), &mut rng);
///
/// assert_eq!(schedule.day_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    units_per_day: usize,
    start_date: Option<NaiveDate>,
}

impl Planner {
    /// Creates a planner with the given daily unit quota.
    pub fn new(units_per_day: usize) -> Self {
        Self {
            units_per_day,
            start_date: None,
        }
    }

    /// Pins the first scheduled date. Defaults to tomorrow.
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Generates a schedule for the selection.
    ///
    /// Returns an empty schedule (not an error) when the quota is zero,
    /// no sources are enabled, or every enabled source has no units.
    pub fn generate<R: Rng>(
        &self,
        catalogue: &Catalogue,
        selection: &Selection,
        rng: &mut R,
    ) -> Schedule {
        let units_per_day = self.units_per_day;
        if units_per_day == 0 {
            return Schedule::new();
        }

        let tiers = partition_tiers(catalogue);

        let mut pools: [TierPool; 3] = Default::default();
        for source in catalogue.sources() {
            if !selection.is_enabled(&source.name) {
                continue;
            }
            let queue = build_queue(&source.units, selection.repeats(&source.name), rng);
            if queue.is_empty() {
                continue;
            }
            let tier = tiers.tier_of(&source.name);
            pools[tier.index()].entries.push(PoolEntry {
                source: source.name.clone(),
                tier,
                queue,
            });
        }
        for pool in &mut pools {
            pool.entries.shuffle(rng);
        }

        let total_units: usize = pools.iter().map(TierPool::remaining).sum();
        if total_units == 0 {
            return Schedule::new();
        }

        let estimated_days = total_units.div_ceil(units_per_day);
        let start = self.start_date.unwrap_or_else(default_start);

        let mut days = Vec::with_capacity(estimated_days);
        for d in 0..estimated_days {
            let pattern = day_pattern(units_per_day, d);
            let mut assignments: Vec<Assignment> = Vec::with_capacity(units_per_day);
            let mut seen_today: HashSet<String> = HashSet::new();

            while assignments.len() < units_per_day {
                let preferred = pattern[assignments.len() % pattern.len()];

                // Preferred tier first, avoiding same-source-twice
                if let Some(a) = pools[preferred.index()].try_pick(Some(&seen_today)) {
                    seen_today.insert(a.source.clone());
                    assignments.push(a);
                    continue;
                }

                // Cascade to the other tiers, rotated by day so no
                // fallback tier is always favored
                let order = Tier::rotated_cycle(d % 3);
                let mut picked = None;
                for tier in order {
                    if tier == preferred {
                        continue;
                    }
                    if let Some(a) = pools[tier.index()].try_pick(Some(&seen_today)) {
                        picked = Some(a);
                        break;
                    }
                }

                // Terminal fallback: allow a duplicate source today
                if picked.is_none() {
                    for tier in order {
                        if let Some(a) = pools[tier.index()].try_pick(None) {
                            picked = Some(a);
                            break;
                        }
                    }
                }

                match picked {
                    Some(a) => {
                        seen_today.insert(a.source.clone());
                        assignments.push(a);
                    }
                    // Every queue everywhere is empty
                    None => break,
                }
            }

            days.push(Day {
                index: d,
                date: start + Days::new(d as u64),
                assignments,
            });

            let remaining: usize = pools.iter().map(TierPool::remaining).sum();
            if remaining == 0 {
                break;
            }
        }

        Schedule { days }
    }
}

/// Generates a schedule with a thread-local RNG, starting tomorrow.
///
/// Convenience wrapper over [`Planner`] for callers that don't need a
/// pinned date or a seeded RNG.
pub fn generate_schedule(
    catalogue: &Catalogue,
    selection: &Selection,
    units_per_day: usize,
) -> Schedule {
    Planner::new(units_per_day).generate(catalogue, selection, &mut rand::rng())
}
