//! User ID
//!
//! Store-assigned integer id, shared with other crates through `kernel`.

pub use kernel::id::UserId;
