//! Profile editing and the session hand-off.

use std::path::Path;

use tracing::{error, info};

use crate::error::MediaError;
use crate::media::probe_image;
use crate::models::{MediaKind, ProfileUpdate};

use super::{App, Focus, PathTarget, View};

impl App {
    /// Owner-only. Opens the edit form on the current user's profile.
    pub fn begin_profile_edit(&mut self) -> bool {
        if self.view != View::Profile {
            return false;
        }
        let me = self.current_user.clone();
        let started = self.profile.begin_edit(&me, &me.id);
        if started {
            self.focus = Focus::ProfileForm;
        }
        started
    }

    /// Discard the form; replacement images are released.
    pub fn cancel_profile_edit(&mut self) {
        self.profile.cancel();
        self.focus = Focus::Browse;
    }

    pub fn save_profile_edit(&mut self) -> bool {
        let me = self.current_user.clone();
        self.focus = Focus::Browse;
        match self.profile.save(&me) {
            Some(update) => {
                self.update_profile(update);
                true
            }
            None => false,
        }
    }

    /// Swap the avatar or cover in the open form.
    pub fn pick_profile_image(&mut self, target: PathTarget, path: &Path) -> Result<(), MediaError> {
        probe_image(path)?;
        let handle = self.media.acquire(path, MediaKind::Image);
        if let Some(draft) = self.profile.draft_mut() {
            match target {
                PathTarget::Cover => draft.replace_cover(handle),
                _ => draft.replace_avatar(handle),
            }
        }
        Ok(())
    }

    /// Merge a partial update into the current user and hand the result to
    /// the session collaborator. Storage failures are logged only.
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        if update.is_empty() {
            return;
        }
        let superseded = [
            update.avatar.as_ref().map(|_| self.current_user.avatar.clone()),
            update
                .cover_image
                .as_ref()
                .map(|_| self.current_user.cover_image.clone()),
        ];
        self.current_user.apply(update);
        for old in superseded.into_iter().flatten() {
            if old != self.current_user.avatar && old != self.current_user.cover_image {
                self.media.release(&old);
            }
        }
        self.store.refresh_author(&self.current_user);
        info!(user = %self.current_user.id, "profile updated");

        let session = self.session.clone();
        let user = self.current_user.clone();
        tokio::spawn(async move {
            if let Err(e) = session.update_user(&user).await {
                error!(error = %e, code = e.error_code(), "could not store profile update");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::adapters::{InMemorySession, MockTranslator};
    use crate::app::NavTarget;
    use crate::config::KizunaConfig;

    fn app_with(session: InMemorySession) -> App {
        App::new(
            KizunaConfig::default(),
            Arc::new(MockTranslator::new()),
            Arc::new(session),
        )
    }

    #[tokio::test]
    async fn test_update_profile_merges_and_persists() {
        let session = InMemorySession::new();
        let mut app = app_with(session.clone());
        let handle = app.current_user.handle.clone();
        app.update_profile(ProfileUpdate {
            bio: Some("東京在住".into()),
            ..ProfileUpdate::default()
        });
        assert_eq!(app.current_user.bio, "東京在住");
        assert_eq!(app.current_user.handle, handle);
        let own_post = app
            .store
            .posts()
            .iter()
            .find(|p| p.user.id == app.current_user.id)
            .unwrap();
        assert_eq!(own_post.user.bio, "東京在住");

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(session.updates().len(), 1);
        assert_eq!(session.updates()[0].bio, "東京在住");
    }

    #[tokio::test]
    async fn test_session_failure_is_not_fatal() {
        let session = InMemorySession::new();
        session.set_fail_writes(true);
        let mut app = app_with(session.clone());
        app.update_profile(ProfileUpdate {
            name: Some("Wei".into()),
            ..ProfileUpdate::default()
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(app.current_user.name, "Wei");
        assert!(session.updates().is_empty());
    }

    #[tokio::test]
    async fn test_edit_flow_only_on_own_profile() {
        let mut app = app_with(InMemorySession::new());
        app.view_profile("u1");
        assert!(!app.begin_profile_edit());

        app.navigate(NavTarget::Me);
        assert!(app.begin_profile_edit());
        assert_eq!(app.focus, Focus::ProfileForm);
        app.pick_profile_image(PathTarget::Avatar, Path::new("/tmp/me.png"))
            .unwrap();
        assert!(app
            .pick_profile_image(PathTarget::Cover, Path::new("/tmp/cover.mov"))
            .is_err());
        app.profile.draft_mut().unwrap().title.set_content("Staff Engineer");
        assert!(app.save_profile_edit());
        assert_eq!(app.current_user.title, "Staff Engineer");
        assert!(app.current_user.avatar.starts_with("blob:kizuna/"));
        assert!(app.media.is_live(&app.current_user.avatar));
    }

    fn save_with(app: &mut App, target: PathTarget, path: &str) -> String {
        assert!(app.begin_profile_edit());
        app.pick_profile_image(target, Path::new(path)).unwrap();
        assert!(app.save_profile_edit());
        match target {
            PathTarget::Cover => app.current_user.cover_image.clone(),
            _ => app.current_user.avatar.clone(),
        }
    }

    #[tokio::test]
    async fn test_replaced_profile_images_are_released() {
        let mut app = app_with(InMemorySession::new());
        app.navigate(NavTarget::Me);

        let first = save_with(&mut app, PathTarget::Avatar, "/tmp/a.png");
        let cover = save_with(&mut app, PathTarget::Cover, "/tmp/cover.png");
        assert!(app.media.is_live(&first));
        assert!(app.media.is_live(&cover));

        let second = save_with(&mut app, PathTarget::Avatar, "/tmp/b.png");
        assert_ne!(first, second);
        assert!(!app.media.is_live(&first));
        assert!(app.media.is_live(&second));
        assert!(app.media.is_live(&cover));
        assert_eq!(app.media.live_count(), 2);
    }

    #[test]
    fn test_cancel_releases_images() {
        let mut app = app_with(InMemorySession::new());
        app.navigate(NavTarget::Me);
        app.begin_profile_edit();
        app.pick_profile_image(PathTarget::Cover, Path::new("/tmp/c.png"))
            .unwrap();
        assert_eq!(app.media.live_count(), 1);
        app.cancel_profile_edit();
        assert_eq!(app.media.live_count(), 0);
        assert!(!app.profile.is_editing());
    }
}
