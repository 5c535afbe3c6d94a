//! Tiered review scheduling.
//!
//! Distributes a fixed catalogue of study sources, each pre-segmented
//! into units of at most ten positions, across consecutive calendar
//! days: a per-day unit quota, a three-tier difficulty classification
//! by cumulative weight, per-source repeat counts, and best-effort
//! duplicate avoidance within a day.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Source`, `Unit`, `Tier`, `Catalogue`,
//!   `Selection`, `Schedule`, `Day`, `Assignment`
//! - **`planner`**: The allocation engine — tier partitioner, source
//!   queue builder, day-by-day allocator
//! - **`validation`**: Input integrity checks (duplicate names, dangling
//!   references)
//!
//! # Example
//!
//! ```
//! use study_schedule::models::{Catalogue, Selection};
//! use study_schedule::planner::Planner;
//! use chrono::NaiveDate;
//! use rand::SeedableRng;
//!
//! let catalogue = Catalogue::daf_yomi();
//! let selection = Selection::new().with_repeats("Brachos", 2);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let schedule = Planner::new(3)
//!     .with_start_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
//!     .generate(&catalogue, &selection, &mut rng);
//!
//! assert_eq!(schedule.total_assignments(), selection.total_units(&catalogue));
//! ```
//!
//! Rendering, persistence, and date formatting are the caller's
//! concern: the crate emits day indices and `chrono::NaiveDate` values
//! and makes no assumption about locale or output medium.

pub mod models;
pub mod planner;
pub mod validation;
