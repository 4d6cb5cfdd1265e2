//! Post composer draft.
//!
//! A draft holds text plus either images or one video, never both. Video
//! uploads are simulated: once a file passes validation a ticker reports
//! progress in steps of [`UPLOAD_STEP`] until 100, then the draft gets a
//! placeholder thumbnail.

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::MediaError;
use crate::media::{MediaHandle, VideoInfo, MAX_VIDEO_SECS};
use crate::models::{Media, PostDraft, PostType};
use crate::tasks::TaskGuard;
use crate::widgets::InputBox;

pub const UPLOAD_STEP: u8 = 10;
pub const UPLOAD_DONE: u8 = 100;

pub fn next_progress(progress: u8) -> u8 {
    progress.saturating_add(UPLOAD_STEP).min(UPLOAD_DONE)
}

#[derive(Debug)]
pub struct VideoUpload {
    id: String,
    handle: MediaHandle,
    progress: u8,
    thumbnail: Option<String>,
    ticker: Option<TaskGuard>,
}

impl VideoUpload {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn file_name(&self) -> String {
        self.handle.file_name()
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= UPLOAD_DONE
    }
}

#[derive(Debug, Default)]
pub struct Composer {
    pub text: InputBox,
    images: Vec<MediaHandle>,
    video: Option<VideoUpload>,
    error: Option<String>,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images(&self) -> &[MediaHandle] {
        &self.images
    }

    pub fn video(&self) -> Option<&VideoUpload> {
        self.video.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_uploading(&self) -> bool {
        self.video.as_ref().is_some_and(|v| !v.is_complete())
    }

    fn reset_video(&mut self) {
        // Dropping the upload aborts its ticker and releases the file.
        self.video = None;
        self.error = None;
    }

    fn reset_images(&mut self) {
        self.images.clear();
    }

    /// Attach images, replacing any video. Refused mid-upload.
    pub fn add_images(&mut self, handles: Vec<MediaHandle>) -> Result<(), MediaError> {
        if self.is_uploading() {
            return Err(MediaError::UploadInProgress);
        }
        self.reset_video();
        self.images.extend(handles);
        Ok(())
    }

    pub fn remove_image(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.images.remove(index);
            true
        } else {
            false
        }
    }

    /// Record an image that could not be attached. The draft is untouched.
    pub fn reject_image(&mut self, err: &MediaError) {
        self.error = Some(err.to_string());
    }

    /// Record a file that failed probing. Clears images and any video.
    pub fn reject_video(&mut self, err: &MediaError) {
        self.reset_images();
        self.reset_video();
        self.error = Some(err.to_string());
    }

    /// Validate a probed video and open an upload slot for it. The caller
    /// starts the ticker and hands it over with [`Composer::attach_ticker`].
    pub fn begin_video(&mut self, info: &VideoInfo, handle: MediaHandle) -> Result<String, MediaError> {
        if self.is_uploading() {
            return Err(MediaError::UploadInProgress);
        }
        self.reset_images();
        self.reset_video();

        if info.duration_secs > MAX_VIDEO_SECS {
            let err = MediaError::TooLong {
                duration_secs: info.duration_secs,
                max_secs: MAX_VIDEO_SECS,
            };
            self.error = Some(err.to_string());
            return Err(err);
        }

        let id = format!("up{}", Uuid::new_v4().simple());
        info!(upload = %id, file = %handle.file_name(), secs = info.duration_secs, "video upload started");
        self.video = Some(VideoUpload {
            id: id.clone(),
            handle,
            progress: 0,
            thumbnail: None,
            ticker: None,
        });
        Ok(id)
    }

    pub fn attach_ticker(&mut self, upload_id: &str, ticker: TaskGuard) {
        if let Some(video) = self.video.as_mut().filter(|v| v.id == upload_id) {
            video.ticker = Some(ticker);
        }
    }

    /// Apply a ticker report. Stale ids and non-increasing values are
    /// ignored.
    pub fn apply_progress(&mut self, upload_id: &str, progress: u8) -> bool {
        let Some(video) = self.video.as_mut().filter(|v| v.id == upload_id) else {
            return false;
        };
        let progress = progress.min(UPLOAD_DONE);
        if progress <= video.progress {
            return false;
        }
        video.progress = progress;
        if video.is_complete() {
            video.ticker = None;
            video.thumbnail = Some(format!(
                "https://picsum.photos/seed/vid{}/800/450",
                chrono::Utc::now().timestamp_millis()
            ));
            debug!(upload = %upload_id, "video upload complete");
        }
        true
    }

    pub fn can_submit(&self) -> bool {
        if self.is_uploading() {
            return false;
        }
        !self.text.is_blank() || !self.images.is_empty() || self.video.is_some()
    }

    pub fn can_go_live(&self) -> bool {
        self.video.is_none() && self.images.is_empty()
    }

    /// Turn the draft into a post and clear it.
    pub fn submit(&mut self) -> Option<PostDraft> {
        if !self.can_submit() {
            return None;
        }
        let content = self.text.take().trim().to_string();

        let draft = if !self.images.is_empty() {
            PostDraft {
                content,
                post_type: PostType::Image,
                media: self
                    .images
                    .drain(..)
                    .map(|h| Media::image(h.commit()))
                    .collect(),
            }
        } else if let Some(thumbnail) = self.video.take().and_then(|v| v.thumbnail) {
            PostDraft {
                content,
                post_type: PostType::Video,
                media: vec![Media::video(thumbnail)],
            }
        } else {
            PostDraft::text(content)
        };

        self.clear();
        Some(draft)
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.reset_images();
        self.reset_video();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaRegistry;
    use crate::models::MediaKind;

    fn video(secs: f64) -> VideoInfo {
        VideoInfo {
            path: "/tmp/clip.mp4".into(),
            mime: "video/mp4",
            duration_secs: secs,
        }
    }

    #[test]
    fn test_next_progress_saturates() {
        assert_eq!(next_progress(0), 10);
        assert_eq!(next_progress(95), 100);
        assert_eq!(next_progress(100), 100);
    }

    #[test]
    fn test_too_long_rejected_and_released() {
        let registry = MediaRegistry::new();
        let mut composer = Composer::new();
        let err = composer
            .begin_video(&video(301.0), registry.acquire("/tmp/clip.mp4", MediaKind::Video))
            .unwrap_err();
        assert!(matches!(err, MediaError::TooLong { .. }));
        assert!(composer.video().is_none());
        assert_eq!(
            composer.error(),
            Some("Video is too long. Please select a video under 5 minutes.")
        );
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn test_exactly_five_minutes_accepted() {
        let registry = MediaRegistry::new();
        let mut composer = Composer::new();
        assert!(composer
            .begin_video(&video(300.0), registry.acquire("/tmp/a.mp4", MediaKind::Video))
            .is_ok());
    }

    #[test]
    fn test_progress_is_monotonic_and_completes() {
        let registry = MediaRegistry::new();
        let mut composer = Composer::new();
        let id = composer
            .begin_video(&video(299.0), registry.acquire("/tmp/a.mp4", MediaKind::Video))
            .unwrap();
        assert!(composer.is_uploading());
        assert!(!composer.can_submit());
        assert!(!composer.can_go_live());

        assert!(composer.apply_progress(&id, 30));
        assert!(!composer.apply_progress(&id, 20));
        assert!(!composer.apply_progress("other", 90));
        assert_eq!(composer.video().unwrap().progress(), 30);

        assert!(composer.apply_progress(&id, 100));
        let upload = composer.video().unwrap();
        assert!(upload.is_complete());
        assert!(upload.thumbnail().is_some());
        assert!(composer.can_submit());

        let draft = composer.submit().unwrap();
        assert_eq!(draft.post_type, PostType::Video);
        assert_eq!(draft.media.len(), 1);
        assert!(composer.video().is_none());
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn test_images_and_video_are_exclusive() {
        let registry = MediaRegistry::new();
        let mut composer = Composer::new();
        let id = composer
            .begin_video(&video(10.0), registry.acquire("/tmp/a.mp4", MediaKind::Video))
            .unwrap();
        assert!(matches!(
            composer.add_images(vec![registry.acquire("/tmp/a.png", MediaKind::Image)]),
            Err(MediaError::UploadInProgress)
        ));

        composer.apply_progress(&id, 100);
        composer
            .add_images(vec![registry.acquire("/tmp/a.png", MediaKind::Image)])
            .unwrap();
        assert!(composer.video().is_none());
        assert_eq!(composer.images().len(), 1);

        composer
            .begin_video(&video(10.0), registry.acquire("/tmp/b.mp4", MediaKind::Video))
            .unwrap();
        assert!(composer.images().is_empty());
        assert_eq!(registry.live_count(), 1);
    }

    #[test]
    fn test_remove_image_releases() {
        let registry = MediaRegistry::new();
        let mut composer = Composer::new();
        composer
            .add_images(vec![
                registry.acquire("/tmp/1.png", MediaKind::Image),
                registry.acquire("/tmp/2.png", MediaKind::Image),
            ])
            .unwrap();
        assert!(!composer.can_go_live());
        assert!(composer.remove_image(0));
        assert!(!composer.remove_image(5));
        assert_eq!(registry.live_count(), 1);
        assert_eq!(composer.images()[0].path().to_str(), Some("/tmp/2.png"));
    }

    #[test]
    fn test_submission_rules() {
        let registry = MediaRegistry::new();
        let mut composer = Composer::new();
        assert!(composer.submit().is_none());

        composer.text.set_content("   ");
        assert!(composer.submit().is_none());

        composer.text.set_content("  hello ");
        let draft = composer.submit().unwrap();
        assert_eq!(draft, PostDraft::text("hello"));
        assert!(composer.text.is_empty());

        composer
            .add_images(vec![registry.acquire("/tmp/1.png", MediaKind::Image)])
            .unwrap();
        let draft = composer.submit().unwrap();
        assert_eq!(draft.post_type, PostType::Image);
        assert_eq!(draft.content, "");
        // Committed images outlive the draft.
        assert!(registry.is_live(&draft.media[0].url));
    }

    #[test]
    fn test_reject_video_sets_message() {
        let mut composer = Composer::new();
        composer.reject_video(&MediaError::NotAVideo {
            mime: "image/png".into(),
        });
        assert_eq!(composer.error(), Some("Please select a valid video file."));
        composer.clear();
        assert!(composer.error().is_none());
    }
}
