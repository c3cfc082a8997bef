//! Activity Log Module
//!
//! Lists a signed-in user's logged activities and accepts create, edit and
//! delete submissions. Two kinds exist, contributions and times, which
//! differ only in their labels.
//!
//! Records are fixture data for now: submissions are logged and redirected
//! back to the list without being stored.
//!
//! Every route sits behind [`auth::require_session`].

pub mod domain;
pub mod error;
pub mod presentation;


pub use domain::ActivityKind;
pub use error::{ActivityError, ActivityResult};
pub use presentation::router::activity_router;
