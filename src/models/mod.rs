//! Domain types shared by the stores, view states and renderers.
//!
//! Everything here is plain data: serde-friendly structs and enums with a few
//! lookup helpers. Mutation lives in [`crate::store`] and [`crate::state`].

mod catalog;
mod message;
mod post;
mod user;

pub use catalog::{Community, Opportunity};
pub use message::{format_timestamp, Conversation, DirectMessage, MessageMedia};
pub use post::{Comment, Media, MediaKind, Post, PostDraft, PostType, JUST_NOW, LIVE_NOW};
pub use user::{ProfileUpdate, User};
