//! Session-local social state shared by every view.
//!
//! The post list is the single source of truth for engagement counters;
//! views hold only presentation state and refer to posts by id.

mod follows;
mod posts;

pub use follows::FollowSet;
pub use posts::PostStore;
