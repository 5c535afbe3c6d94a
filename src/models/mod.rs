//! Scheduling domain models.
//!
//! Core data types for tiered review scheduling: the immutable source
//! catalogue, the caller-owned selection configuration, and the
//! schedule output types.
//!
//! # Lifecycle
//!
//! | Type | Owner | Mutability |
//! |------|-------|------------|
//! | `Catalogue`, `Source`, `Unit` | loaded once | immutable |
//! | `Selection` | caller | mutated between generations |
//! | `Schedule`, `Day`, `Assignment` | one generation | rebuilt each call |

mod catalogue;
mod schedule;
mod selection;
mod source;
mod tier;

pub use catalogue::Catalogue;
pub use schedule::{Assignment, Day, Schedule};
pub use selection::{Selection, MAX_REPEATS, MIN_REPEATS};
pub use source::{Source, Unit};
pub use tier::Tier;
