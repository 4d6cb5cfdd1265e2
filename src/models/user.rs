use serde::{Deserialize, Serialize};

/// A member of the network.
///
/// `id` never changes after creation; everything else is editable by the
/// owner through the profile editor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub handle: String,
    pub name: String,
    pub avatar: String,
    pub cover_image: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub follower_count: u32,
    #[serde(default)]
    pub following_count: u32,
}

impl User {
    /// True if this user shares at least one tag with `tags`.
    pub fn shares_tag_with(&self, tags: &[String]) -> bool {
        self.tags.iter().any(|tag| tags.contains(tag))
    }

    /// Merge a partial update into this user. The id is never touched.
    pub fn apply(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            name,
            handle,
            title,
            location,
            bio,
            avatar,
            cover_image,
            tags,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(handle) = handle {
            self.handle = handle;
        }
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(bio) = bio {
            self.bio = bio;
        }
        if let Some(avatar) = avatar {
            self.avatar = avatar;
        }
        if let Some(cover_image) = cover_image {
            self.cover_image = cover_image;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
    }
}

/// Partial profile change produced by the profile editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub handle: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ProfileUpdate::default()
    }
}
