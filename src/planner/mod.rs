//! The allocation engine.
//!
//! Data flows one way: catalogue → tiers → per-source queues → day
//! sequence. The partitioner and queue builder are pure functions; the
//! allocator in [`allocator`] is the only stateful component, and all
//! of its state lives within a single generation.
//!
//! Randomness is injected: every shuffling entry point takes a
//! `rand::Rng`, so a seeded `StdRng` makes whole schedules reproducible.

mod allocator;
mod queue;
mod tiers;

pub use allocator::{generate_schedule, Planner};
pub use queue::build_queue;
pub use tiers::{partition_tiers, TierAssignment};
