//! Domain Layer
//!
//! Activity kinds, records, fixture data and summary statistics.

pub mod fixtures;
pub mod kind;
pub mod record;
pub mod stats;

pub use kind::ActivityKind;
pub use record::{ActivityInput, ActivityRecord, EditableActivity};
pub use stats::ActivityStats;
