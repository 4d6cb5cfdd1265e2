use tracing::debug;

use crate::models::{Comment, Media, Post, PostDraft, PostType, User, JUST_NOW, LIVE_NOW};
use crate::seed;

/// Ordered post list, newest first.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn seeded() -> Self {
        Self::new(seed::posts())
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.posts.iter().position(|p| p.id == id)
    }

    pub fn by_user<'a>(&'a self, user_id: &'a str) -> impl Iterator<Item = &'a Post> + 'a {
        self.posts.iter().filter(move |p| p.user.id == user_id)
    }

    /// Prepend a post authored by `author`; returns its id.
    pub fn add(&mut self, author: &User, draft: PostDraft) -> String {
        let post = Post {
            id: Post::new_id(),
            user: author.clone(),
            content: draft.content,
            post_type: draft.post_type,
            media: draft.media,
            likes: 0,
            shares: 0,
            comments: Vec::new(),
            created_at: JUST_NOW.to_string(),
            viewers: None,
            was_live: false,
            liked: false,
        };
        let id = post.id.clone();
        debug!(post = %id, kind = ?post.post_type, "post added");
        self.posts.insert(0, post);
        id
    }

    /// Prepend a broadcasting post with one viewer and a placeholder frame.
    pub fn add_live(&mut self, author: &User, description: &str) -> String {
        let id = Post::new_id();
        let post = Post {
            id: id.clone(),
            user: author.clone(),
            content: description.to_string(),
            post_type: PostType::Live,
            media: vec![Media::image(format!(
                "https://picsum.photos/seed/live{}/800/450",
                chrono::Utc::now().timestamp_millis()
            ))],
            likes: 0,
            shares: 0,
            comments: Vec::new(),
            created_at: LIVE_NOW.to_string(),
            viewers: Some(1),
            was_live: false,
            liked: false,
        };
        self.posts.insert(0, post);
        id
    }

    pub fn update_content(&mut self, id: &str, content: &str) -> bool {
        match self.get_mut(id) {
            Some(post) => {
                post.content = content.to_string();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Post> {
        let index = self.position(id)?;
        Some(self.posts.remove(index))
    }

    /// Flip the viewer's like; returns the new (liked, likes) pair.
    pub fn toggle_like(&mut self, id: &str) -> Option<(bool, u32)> {
        let post = self.get_mut(id)?;
        post.liked = !post.liked;
        post.likes = if post.liked {
            post.likes.saturating_add(1)
        } else {
            post.likes.saturating_sub(1)
        };
        Some((post.liked, post.likes))
    }

    /// Withdraw every like the previous viewer left. Returns how many.
    pub fn clear_likes(&mut self) -> usize {
        let mut cleared = 0;
        for post in self.posts.iter_mut().filter(|p| p.liked) {
            post.liked = false;
            post.likes = post.likes.saturating_sub(1);
            cleared += 1;
        }
        cleared
    }

    pub fn share(&mut self, id: &str) -> Option<u32> {
        let post = self.get_mut(id)?;
        post.shares = post.shares.saturating_add(1);
        Some(post.shares)
    }

    /// Append a comment; blank text is refused. Returns the comment id.
    pub fn add_comment(&mut self, id: &str, author: &User, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let post = self.get_mut(id)?;
        let comment = Comment::new(author.clone(), text);
        let comment_id = comment.id.clone();
        post.comments.push(comment);
        Some(comment_id)
    }

    /// Mark a comment as translating. Refused when the comment is missing,
    /// already translating or already translated.
    pub fn begin_comment_translation(&mut self, post_id: &str, comment_id: &str) -> Option<String> {
        let comment = self.get_mut(post_id)?.comment_mut(comment_id)?;
        if comment.is_translating || comment.translation.is_some() {
            return None;
        }
        comment.is_translating = true;
        Some(comment.text.clone())
    }

    pub fn finish_comment_translation(
        &mut self,
        post_id: &str,
        comment_id: &str,
        translated: Option<String>,
    ) -> bool {
        let Some(comment) = self
            .get_mut(post_id)
            .and_then(|p| p.comment_mut(comment_id))
        else {
            return false;
        };
        comment.is_translating = false;
        if let Some(translated) = translated {
            comment.original_text = Some(comment.text.clone());
            comment.translation = Some(translated);
        }
        true
    }

    pub fn show_comment_original(&mut self, post_id: &str, comment_id: &str) -> bool {
        let Some(comment) = self
            .get_mut(post_id)
            .and_then(|p| p.comment_mut(comment_id))
        else {
            return false;
        };
        if let Some(original) = comment.original_text.take() {
            comment.text = original;
        }
        comment.translation = None;
        true
    }

    /// Finalize a live post into a replay. Other posts are untouched.
    pub fn end_live(&mut self, id: &str) -> bool {
        match self.get_mut(id) {
            Some(post) => {
                post.post_type = PostType::Video;
                post.was_live = true;
                post.viewers = None;
                true
            }
            None => false,
        }
    }

    /// Refresh the embedded author on posts and comments after a profile
    /// edit.
    pub fn refresh_author(&mut self, user: &User) {
        for post in &mut self.posts {
            if post.user.id == user.id {
                post.user = user.clone();
            }
            for comment in post.comments.iter_mut().filter(|c| c.user.id == user.id) {
                comment.user = user.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn me() -> User {
        seed::user("u2").unwrap()
    }

    #[test]
    fn test_add_prepends_with_fresh_id() {
        let mut store = PostStore::seeded();
        let before = store.len();
        let ids: Vec<String> = store.posts().iter().map(|p| p.id.clone()).collect();

        let id = store.add(&me(), PostDraft::text("hello"));
        assert_eq!(store.len(), before + 1);
        assert_eq!(store.posts()[0].id, id);
        assert_eq!(store.posts()[0].created_at, JUST_NOW);
        assert!(!ids.contains(&id));
    }

    #[test]
    fn test_like_twice_restores() {
        let mut store = PostStore::seeded();
        let original = store.get("p1").unwrap().clone();

        assert_eq!(store.toggle_like("p1"), Some((true, original.likes + 1)));
        assert_eq!(store.toggle_like("p1"), Some((false, original.likes)));
        assert_eq!(store.get("p1").unwrap(), &original);
        assert_eq!(store.toggle_like("nope"), None);
    }

    #[test]
    fn test_clear_likes_restores_counts() {
        let mut store = PostStore::seeded();
        let original: Vec<Post> = store.posts().to_vec();
        let first = original[0].id.clone();
        let last = original[original.len() - 1].id.clone();
        store.toggle_like(&first);
        store.toggle_like(&last);

        assert_eq!(store.clear_likes(), 2);
        assert_eq!(store.posts(), original.as_slice());
        assert_eq!(store.clear_likes(), 0);
    }

    #[test]
    fn test_unlike_at_zero_saturates() {
        let mut store = PostStore::seeded();
        let post = store.get_mut("p4").unwrap();
        post.liked = true;
        post.likes = 0;
        assert_eq!(store.toggle_like("p4"), Some((false, 0)));
    }

    #[test]
    fn test_blank_comment_rejected() {
        let mut store = PostStore::seeded();
        let count = store.get("p4").unwrap().comments.len();
        assert!(store.add_comment("p4", &me(), "   ").is_none());
        let id = store.add_comment("p4", &me(), "  nice  ").unwrap();
        let post = store.get("p4").unwrap();
        assert_eq!(post.comments.len(), count + 1);
        assert_eq!(post.comment(&id).unwrap().text, "nice");
    }

    #[test]
    fn test_comment_translation_cycle() {
        let mut store = PostStore::seeded();
        let text = store.begin_comment_translation("p1", "c1").unwrap();
        assert!(store.begin_comment_translation("p1", "c1").is_none());

        assert!(store.finish_comment_translation("p1", "c1", Some("translated".into())));
        let comment = store.get("p1").unwrap().comment("c1").unwrap().clone();
        assert_eq!(comment.display_text(), "translated");
        assert_eq!(comment.original_text.as_deref(), Some(text.as_str()));
        assert!(!comment.is_translating);

        assert!(store.show_comment_original("p1", "c1"));
        let comment = store.get("p1").unwrap().comment("c1").unwrap();
        assert_eq!(comment.display_text(), text);
        assert!(comment.original_text.is_none());
    }

    #[test]
    fn test_failed_comment_translation_clears_flag() {
        let mut store = PostStore::seeded();
        store.begin_comment_translation("p1", "c2").unwrap();
        store.finish_comment_translation("p1", "c2", None);
        let comment = store.get("p1").unwrap().comment("c2").unwrap();
        assert!(!comment.is_translating);
        assert!(comment.translation.is_none());
        assert!(!store.finish_comment_translation("gone", "c2", None));
    }

    #[test]
    fn test_end_live_only_touches_target() {
        let mut store = PostStore::seeded();
        let id = store.add_live(&me(), "launch");
        let others: Vec<Post> = store.posts().iter().filter(|p| p.id != id).cloned().collect();

        let live = store.get(&id).unwrap();
        assert!(live.is_live());
        assert_eq!(live.viewers, Some(1));
        assert_eq!(live.created_at, LIVE_NOW);

        assert!(store.end_live(&id));
        let ended = store.get(&id).unwrap();
        assert_eq!(ended.post_type, PostType::Video);
        assert!(ended.was_live);
        assert!(ended.viewers.is_none());

        let after: Vec<Post> = store.posts().iter().filter(|p| p.id != id).cloned().collect();
        assert_eq!(others, after);
    }

    #[test]
    fn test_refresh_author() {
        let mut store = PostStore::seeded();
        let mut user = me();
        user.name = "Wei".to_string();
        store.refresh_author(&user);
        assert!(store.by_user("u2").all(|p| p.user.name == "Wei"));
        assert!(store.by_user("u1").all(|p| p.user.name != "Wei"));
    }
}
