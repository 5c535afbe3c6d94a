//! Schedule (output) model.
//!
//! A schedule is the fully materialized result of one generation: an
//! ordered sequence of days, each holding the assignments drawn for
//! that calendar date. Days are consecutive with no gaps — the engine
//! makes no weekday, weekend, or holiday distinctions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Tier, Unit};

/// One unit placed on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Source name.
    pub source: String,
    /// The unit drawn from that source's queue.
    pub unit: Unit,
    /// The source's tier at generation time.
    pub tier: Tier,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(source: impl Into<String>, unit: Unit, tier: Tier) -> Self {
        Self {
            source: source.into(),
            unit,
            tier,
        }
    }
}

/// One calendar day of the schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Day {
    /// 0-based position in the schedule.
    pub index: usize,
    /// Calendar date (start date + index days).
    pub date: NaiveDate,
    /// Assignments in fill order.
    pub assignments: Vec<Assignment>,
}

impl Day {
    /// Number of assignments on this day.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Assignments drawn from the given tier.
    pub fn assignments_for_tier(&self, tier: Tier) -> Vec<&Assignment> {
        self.assignments.iter().filter(|a| a.tier == tier).collect()
    }
}

/// The complete ordered day sequence produced by one generation.
///
/// An empty schedule is a valid result (nothing enabled, nothing to
/// schedule, or a zero quota), not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Days in calendar order.
    pub days: Vec<Day>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of days.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Whether the schedule has no days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total assignments across all days.
    pub fn total_assignments(&self) -> usize {
        self.days.iter().map(Day::assignment_count).sum()
    }

    /// All assignments for one source, in schedule order.
    pub fn assignments_for_source(&self, name: &str) -> Vec<&Assignment> {
        self.days
            .iter()
            .flat_map(|d| d.assignments.iter())
            .filter(|a| a.source == name)
            .collect()
    }

    /// First scheduled date, if any.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    /// Last scheduled date, if any.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.days.last().map(|d| d.date)
    }
}
