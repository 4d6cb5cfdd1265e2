use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::User;

/// Label shown on posts created during this session.
pub const JUST_NOW: &str = "Just now";

/// Label shown on a freshly started live broadcast.
pub const LIVE_NOW: &str = "Now";

/// Kind of feed item. Decides how media is laid out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    #[default]
    Text,
    Image,
    Video,
    Live,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Media {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
}

impl Media {
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            url: url.into(),
        }
    }

    pub fn video(url: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            url: url.into(),
        }
    }
}

/// A comment under a post.
///
/// `translation` and `original_text` are filled together when a translation
/// lands and cleared together by "show original".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user: User,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    #[serde(default)]
    pub is_translating: bool,
}

impl Comment {
    pub fn new(user: User, text: impl Into<String>) -> Self {
        Self {
            id: format!("c{}", Uuid::new_v4().simple()),
            user,
            text: text.into(),
            translation: None,
            original_text: None,
            is_translating: false,
        }
    }

    /// The text a reader sees right now.
    pub fn display_text(&self) -> &str {
        self.translation.as_deref().unwrap_or(&self.text)
    }
}

/// A user-authored feed item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub user: User,
    pub content: String,
    #[serde(rename = "type")]
    pub post_type: PostType,
    #[serde(default)]
    pub media: Vec<Media>,
    pub likes: u32,
    pub shares: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: String,
    /// Present only while the post is broadcasting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewers: Option<u32>,
    #[serde(default)]
    pub was_live: bool,
    /// Whether the signed-in viewer has liked this post.
    #[serde(default)]
    pub liked: bool,
}

impl Post {
    /// Mint a fresh post id.
    pub fn new_id() -> String {
        format!("p{}", Uuid::new_v4().simple())
    }

    pub fn is_live(&self) -> bool {
        self.post_type == PostType::Live && self.viewers.is_some()
    }

    /// Posts shown under a profile's media tab.
    pub fn is_media_post(&self) -> bool {
        matches!(self.post_type, PostType::Video | PostType::Live) || self.was_live
    }

    pub fn comment(&self, comment_id: &str) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    pub fn comment_mut(&mut self, comment_id: &str) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| c.id == comment_id)
    }
}

/// What the composer (or live flow) hands to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub content: String,
    pub post_type: PostType,
    pub media: Vec<Media>,
}

impl PostDraft {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            post_type: PostType::Text,
            media: Vec::new(),
        }
    }
}
