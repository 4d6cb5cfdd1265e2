use serde::{Deserialize, Serialize};

use super::User;

/// A read-only community listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: String,
    pub name: String,
    pub description: String,
    pub member_count: u32,
    /// A few members shown as avatars on the card.
    #[serde(default)]
    pub members: Vec<User>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub latest_post_preview: Option<String>,
}

/// A read-only job/collaboration listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub kind: String,
    pub tags: Vec<String>,
}

fn overlaps(a: &[String], b: &[String]) -> bool {
    a.iter().any(|tag| b.contains(tag))
}

impl Community {
    pub fn matches_tags(&self, tags: &[String]) -> bool {
        overlaps(&self.tags, tags)
    }
}

impl Opportunity {
    pub fn matches_tags(&self, tags: &[String]) -> bool {
        overlaps(&self.tags, tags)
    }
}
