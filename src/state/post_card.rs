//! Presentation state for one post card.
//!
//! Engagement numbers are read from the post itself; this struct only
//! holds what the card needs to draw itself: the edit buffer, the comment
//! draft, the menu and playback flags, and the post translation.

use crate::models::{Post, PostType};
use crate::widgets::InputBox;

/// Stream shown when a video is played.
pub const SAMPLE_PLAYBACK_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaLayout {
    None,
    VideoThumbnail { url: String, replay: bool },
    VideoPlayback { url: String },
    Live { url: String, viewers: u32 },
    Single(String),
    Pair(String, String),
    /// One tall image on the left, two stacked on the right.
    FeaturePlusTwo(String, String, String),
    Grid { columns: u8, urls: Vec<String> },
}

impl MediaLayout {
    pub fn for_post(post: &Post, playing: bool) -> Self {
        let Some(first) = post.media.first() else {
            return MediaLayout::None;
        };

        if post.post_type == PostType::Video || post.was_live {
            return if playing {
                MediaLayout::VideoPlayback {
                    url: SAMPLE_PLAYBACK_URL.to_string(),
                }
            } else {
                MediaLayout::VideoThumbnail {
                    url: first.url.clone(),
                    replay: post.was_live,
                }
            };
        }

        if post.post_type == PostType::Live {
            return match post.viewers {
                Some(viewers) if viewers > 0 => MediaLayout::Live {
                    url: first.url.clone(),
                    viewers,
                },
                _ => MediaLayout::None,
            };
        }

        if post.post_type != PostType::Image {
            return MediaLayout::None;
        }

        let urls: Vec<String> = post.media.iter().map(|m| m.url.clone()).collect();
        match urls.as_slice() {
            [one] => MediaLayout::Single(one.clone()),
            [a, b] => MediaLayout::Pair(a.clone(), b.clone()),
            [a, b, c] => MediaLayout::FeaturePlusTwo(a.clone(), b.clone(), c.clone()),
            [_, _, _, _] => MediaLayout::Grid { columns: 2, urls },
            _ => MediaLayout::Grid { columns: 3, urls },
        }
    }
}

/// What a "translate post" press should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateAction {
    /// A translation is cached; visibility was flipped.
    Toggled,
    /// Send the content to the translator.
    Start,
    /// A request is already in flight.
    Busy,
}

#[derive(Debug, Clone, Default)]
pub struct CardState {
    pub editing: bool,
    pub edit_buffer: InputBox,
    pub comment_draft: InputBox,
    pub menu_open: bool,
    pub playing: bool,
    pub translated: Option<String>,
    pub show_translation: bool,
    pub translating: bool,
}

impl CardState {
    pub fn new(post: &Post) -> Self {
        Self {
            edit_buffer: InputBox::with_content(post.content.clone()),
            ..Self::default()
        }
    }

    pub fn toggle_menu(&mut self, post: &Post, viewer_id: &str) {
        if post.user.id == viewer_id {
            self.menu_open = !self.menu_open;
        }
    }

    /// Enter edit mode. Only the author may edit.
    pub fn begin_edit(&mut self, post: &Post, viewer_id: &str) -> bool {
        if post.user.id != viewer_id {
            return false;
        }
        self.edit_buffer.set_content(post.content.clone());
        self.editing = true;
        self.menu_open = false;
        true
    }

    /// Leave edit mode. Returns the trimmed text when it differs from the
    /// stored content.
    pub fn save_edit(&mut self, post: &Post) -> Option<String> {
        if !self.editing {
            return None;
        }
        self.editing = false;
        let trimmed = self.edit_buffer.content().trim().to_string();
        self.edit_buffer.set_content(trimmed.clone());
        (trimmed != post.content).then_some(trimmed)
    }

    pub fn cancel_edit(&mut self, post: &Post) {
        self.edit_buffer.set_content(post.content.clone());
        self.editing = false;
    }

    pub fn request_translation(&mut self) -> TranslateAction {
        if self.translating {
            return TranslateAction::Busy;
        }
        if self.translated.is_some() {
            self.show_translation = !self.show_translation;
            return TranslateAction::Toggled;
        }
        self.translating = true;
        TranslateAction::Start
    }

    /// Apply a finished request; `None` means it failed.
    pub fn finish_translation(&mut self, result: Option<String>) {
        self.translating = false;
        if let Some(text) = result {
            self.translated = Some(text);
            self.show_translation = true;
        }
    }

    /// Translation to draw under the content, if visible.
    pub fn visible_translation(&self) -> Option<&str> {
        if self.show_translation {
            self.translated.as_deref()
        } else {
            None
        }
    }

    /// Content edits invalidate any cached translation.
    pub fn content_changed(&mut self) {
        self.translated = None;
        self.show_translation = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Media;
    use crate::seed;

    fn post_with(post_type: PostType, images: usize) -> Post {
        let mut post = seed::posts().remove(0);
        post.post_type = post_type;
        post.was_live = false;
        post.viewers = None;
        post.media = (0..images).map(|i| Media::image(format!("img{}", i))).collect();
        post
    }

    #[test]
    fn test_image_layouts_by_count() {
        assert_eq!(
            MediaLayout::for_post(&post_with(PostType::Image, 1), false),
            MediaLayout::Single("img0".into())
        );
        assert!(matches!(
            MediaLayout::for_post(&post_with(PostType::Image, 2), false),
            MediaLayout::Pair(..)
        ));
        assert!(matches!(
            MediaLayout::for_post(&post_with(PostType::Image, 3), false),
            MediaLayout::FeaturePlusTwo(..)
        ));
        assert!(matches!(
            MediaLayout::for_post(&post_with(PostType::Image, 4), false),
            MediaLayout::Grid { columns: 2, .. }
        ));
        for n in [5, 9] {
            match MediaLayout::for_post(&post_with(PostType::Image, n), false) {
                MediaLayout::Grid { columns, urls } => {
                    assert_eq!(columns, 3);
                    assert_eq!(urls.len(), n);
                }
                other => panic!("unexpected layout {:?}", other),
            }
        }
        assert_eq!(
            MediaLayout::for_post(&post_with(PostType::Image, 0), false),
            MediaLayout::None
        );
    }

    #[test]
    fn test_video_and_replay() {
        let mut post = post_with(PostType::Video, 1);
        assert_eq!(
            MediaLayout::for_post(&post, false),
            MediaLayout::VideoThumbnail {
                url: "img0".into(),
                replay: false
            }
        );
        assert!(matches!(
            MediaLayout::for_post(&post, true),
            MediaLayout::VideoPlayback { .. }
        ));

        post.post_type = PostType::Image;
        post.was_live = true;
        assert!(matches!(
            MediaLayout::for_post(&post, false),
            MediaLayout::VideoThumbnail { replay: true, .. }
        ));
    }

    #[test]
    fn test_live_needs_viewers() {
        let mut post = post_with(PostType::Live, 1);
        assert_eq!(MediaLayout::for_post(&post, false), MediaLayout::None);
        post.viewers = Some(12);
        assert_eq!(
            MediaLayout::for_post(&post, false),
            MediaLayout::Live {
                url: "img0".into(),
                viewers: 12
            }
        );
    }

    #[test]
    fn test_edit_is_author_only_and_trims() {
        let post = seed::posts().into_iter().find(|p| p.user.id == "u2").unwrap();
        let mut card = CardState::new(&post);

        assert!(!card.begin_edit(&post, "u1"));
        assert!(card.begin_edit(&post, "u2"));

        card.edit_buffer.set_content(format!("  {}  ", post.content));
        assert_eq!(card.save_edit(&post), None);
        assert!(!card.editing);

        card.begin_edit(&post, "u2");
        card.edit_buffer.set_content("  new words ");
        assert_eq!(card.save_edit(&post).as_deref(), Some("new words"));
    }

    #[test]
    fn test_cancel_restores_buffer() {
        let post = seed::posts().remove(0);
        let mut card = CardState::new(&post);
        card.begin_edit(&post, &post.user.id);
        card.edit_buffer.set_content("scratch");
        card.cancel_edit(&post);
        assert_eq!(card.edit_buffer.content(), post.content);
        assert!(!card.editing);
    }

    #[test]
    fn test_translation_flow() {
        let mut card = CardState::default();
        assert_eq!(card.request_translation(), TranslateAction::Start);
        assert_eq!(card.request_translation(), TranslateAction::Busy);

        card.finish_translation(Some("訳".into()));
        assert_eq!(card.visible_translation(), Some("訳"));

        assert_eq!(card.request_translation(), TranslateAction::Toggled);
        assert_eq!(card.visible_translation(), None);
        assert_eq!(card.request_translation(), TranslateAction::Toggled);
        assert_eq!(card.visible_translation(), Some("訳"));
    }

    #[test]
    fn test_failed_translation_can_retry() {
        let mut card = CardState::default();
        card.request_translation();
        card.finish_translation(None);
        assert!(!card.translating);
        assert!(card.translated.is_none());
        assert_eq!(card.request_translation(), TranslateAction::Start);
    }
}
