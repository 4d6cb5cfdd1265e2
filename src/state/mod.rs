//! Per-view state containers.
//!
//! Each view keeps only UI concerns here (cursors, draft buffers, in-flight
//! flags). Canonical social data lives in [`crate::store`]; the shell in
//! [`crate::app`] wires the two together.

pub mod composer;
pub mod conversations;
pub mod live;
pub mod network;
pub mod post_card;
pub mod profile;
pub mod search;

pub use composer::{Composer, VideoUpload};
pub use conversations::Conversations;
pub use live::{Broadcast, ChatLine, LiveSetup};
pub use network::{CommunitySort, NetworkState, NetworkTab};
pub use post_card::{CardState, MediaLayout, TranslateAction};
pub use profile::{ProfileDraft, ProfileField, ProfileState, ProfileStats, ProfileTab};
pub use search::{SearchResults, SearchSection, SearchState};
