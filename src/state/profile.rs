//! Profile page: display, owner-only editing, post tabs.

use crate::media::MediaHandle;
use crate::models::{Post, ProfileUpdate, User};
use crate::store::PostStore;
use crate::widgets::InputBox;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Posts,
    /// Video, live and replayed posts.
    Media,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileField {
    #[default]
    Name,
    Handle,
    Title,
    Location,
    Bio,
}

impl ProfileField {
    pub const ALL: [ProfileField; 5] = [
        ProfileField::Name,
        ProfileField::Handle,
        ProfileField::Title,
        ProfileField::Location,
        ProfileField::Bio,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            ProfileField::Name => "profile.name",
            ProfileField::Handle => "profile.handle",
            ProfileField::Title => "profile.job_title",
            ProfileField::Location => "profile.location",
            ProfileField::Bio => "profile.bio",
        }
    }

    pub fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

/// Edit buffer. Replacement images are held as scoped handles until save.
#[derive(Debug, Default)]
pub struct ProfileDraft {
    pub name: InputBox,
    pub handle: InputBox,
    pub title: InputBox,
    pub location: InputBox,
    pub bio: InputBox,
    pub focus: ProfileField,
    avatar: Option<MediaHandle>,
    cover: Option<MediaHandle>,
}

impl ProfileDraft {
    fn from_user(user: &User) -> Self {
        Self {
            name: InputBox::with_content(user.name.clone()),
            handle: InputBox::with_content(user.handle.clone()),
            title: InputBox::with_content(user.title.clone()),
            location: InputBox::with_content(user.location.clone()),
            bio: InputBox::with_content(user.bio.clone()),
            ..Self::default()
        }
    }

    pub fn field(&self, field: ProfileField) -> &InputBox {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Handle => &self.handle,
            ProfileField::Title => &self.title,
            ProfileField::Location => &self.location,
            ProfileField::Bio => &self.bio,
        }
    }

    pub fn focused_mut(&mut self) -> &mut InputBox {
        match self.focus {
            ProfileField::Name => &mut self.name,
            ProfileField::Handle => &mut self.handle,
            ProfileField::Title => &mut self.title,
            ProfileField::Location => &mut self.location,
            ProfileField::Bio => &mut self.bio,
        }
    }

    pub fn avatar(&self) -> Option<&MediaHandle> {
        self.avatar.as_ref()
    }

    pub fn cover(&self) -> Option<&MediaHandle> {
        self.cover.as_ref()
    }

    /// Swap in a new avatar; the previous replacement is released.
    pub fn replace_avatar(&mut self, handle: MediaHandle) {
        self.avatar = Some(handle);
    }

    pub fn replace_cover(&mut self, handle: MediaHandle) {
        self.cover = Some(handle);
    }

    /// Changed fields only. Replacement images are committed.
    fn into_update(self, user: &User) -> ProfileUpdate {
        let changed = |input: &InputBox, current: &str| {
            let value = input.content().trim();
            (value != current).then(|| value.to_string())
        };
        ProfileUpdate {
            name: changed(&self.name, &user.name),
            handle: changed(&self.handle, &user.handle),
            title: changed(&self.title, &user.title),
            location: changed(&self.location, &user.location),
            bio: changed(&self.bio, &user.bio),
            avatar: self.avatar.map(MediaHandle::commit),
            cover_image: self.cover.map(MediaHandle::commit),
            tags: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStats {
    pub posts: usize,
    pub followers: u32,
    pub following: u32,
}

#[derive(Debug, Default)]
pub struct ProfileState {
    user_id: Option<String>,
    pub tab: ProfileTab,
    pub cursor: usize,
    draft: Option<ProfileDraft>,
}

impl ProfileState {
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Point the page at `user_id`. Viewing someone else drops any edit in
    /// progress.
    pub fn show(&mut self, user_id: &str, viewer_id: &str) {
        if self.user_id.as_deref() != Some(user_id) {
            self.tab = ProfileTab::Posts;
            self.cursor = 0;
        }
        self.user_id = Some(user_id.to_string());
        if user_id != viewer_id {
            self.draft = None;
        }
    }

    pub fn clear(&mut self) {
        self.user_id = None;
        self.draft = None;
        self.cursor = 0;
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn begin_edit(&mut self, user: &User, viewer_id: &str) -> bool {
        if user.id != viewer_id || self.user_id.as_deref() != Some(viewer_id) {
            return false;
        }
        self.draft = Some(ProfileDraft::from_user(user));
        true
    }

    pub fn draft(&self) -> Option<&ProfileDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut ProfileDraft> {
        self.draft.as_mut()
    }

    /// Discard the draft and release its images.
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    pub fn save(&mut self, user: &User) -> Option<ProfileUpdate> {
        self.draft.take().map(|draft| draft.into_update(user))
    }

    pub fn toggle_tab(&mut self) {
        self.tab = match self.tab {
            ProfileTab::Posts => ProfileTab::Media,
            ProfileTab::Media => ProfileTab::Posts,
        };
        self.cursor = 0;
    }

    pub fn posts<'a>(&self, store: &'a PostStore, user_id: &'a str) -> Vec<&'a Post> {
        let tab = self.tab;
        store
            .by_user(user_id)
            .filter(|p| tab == ProfileTab::Posts || p.is_media_post())
            .collect()
    }
}

pub fn stats(store: &PostStore, user: &User) -> ProfileStats {
    ProfileStats {
        posts: store.by_user(&user.id).count(),
        followers: user.follower_count,
        following: user.following_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaRegistry;
    use crate::models::MediaKind;
    use crate::seed;

    #[test]
    fn test_only_owner_can_edit() {
        let me = seed::user("u2").unwrap();
        let other = seed::user("u1").unwrap();
        let mut state = ProfileState::default();

        state.show("u1", "u2");
        assert!(!state.begin_edit(&other, "u2"));

        state.show("u2", "u2");
        assert!(state.begin_edit(&me, "u2"));
        assert!(state.is_editing());

        state.show("u1", "u2");
        assert!(!state.is_editing());
    }

    #[test]
    fn test_save_reports_changed_fields() {
        let me = seed::user("u2").unwrap();
        let mut state = ProfileState::default();
        state.show("u2", "u2");
        state.begin_edit(&me, "u2");

        let draft = state.draft_mut().unwrap();
        draft.bio.set_content("  新しい自己紹介 ");
        draft.focus = ProfileField::Location;
        draft.focused_mut().set_content("Tokyo");

        let update = state.save(&me).unwrap();
        assert_eq!(update.bio.as_deref(), Some("新しい自己紹介"));
        assert_eq!(update.location.as_deref(), Some("Tokyo"));
        assert!(update.name.is_none());
        assert!(update.avatar.is_none());
        assert!(!state.is_editing());
    }

    #[test]
    fn test_image_handles_released_or_committed() {
        let registry = MediaRegistry::new();
        let me = seed::user("u2").unwrap();
        let mut state = ProfileState::default();
        state.show("u2", "u2");

        state.begin_edit(&me, "u2");
        let draft = state.draft_mut().unwrap();
        draft.replace_avatar(registry.acquire("/tmp/a.png", MediaKind::Image));
        draft.replace_avatar(registry.acquire("/tmp/b.png", MediaKind::Image));
        draft.replace_cover(registry.acquire("/tmp/c.png", MediaKind::Image));
        assert_eq!(registry.live_count(), 2);
        state.cancel();
        assert_eq!(registry.live_count(), 0);

        state.begin_edit(&me, "u2");
        state
            .draft_mut()
            .unwrap()
            .replace_avatar(registry.acquire("/tmp/d.png", MediaKind::Image));
        let update = state.save(&me).unwrap();
        let url = update.avatar.unwrap();
        assert!(registry.is_live(&url));
    }

    #[test]
    fn test_media_tab_filters() {
        let store = PostStore::seeded();
        let mut state = ProfileState::default();
        state.show("u1", "u2");
        let all = state.posts(&store, "u1").len();
        state.toggle_tab();
        let media = state.posts(&store, "u1");
        assert!(media.len() <= all);
        assert!(media.iter().all(|p| p.is_media_post()));
        assert!(!media.is_empty());
    }

    #[test]
    fn test_stats() {
        let store = PostStore::seeded();
        let user = seed::user("u1").unwrap();
        let s = stats(&store, &user);
        assert_eq!(s.posts, store.by_user("u1").count());
        assert_eq!(s.followers, user.follower_count);
    }

    #[test]
    fn test_field_cycle() {
        let mut f = ProfileField::Name;
        for _ in 0..ProfileField::ALL.len() {
            f = f.next();
        }
        assert_eq!(f, ProfileField::Name);
    }
}
