//! Composer actions: picking media, the simulated upload, posting.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::MediaError;
use crate::media::{probe_image, probe_video, VideoInfo};
use crate::models::MediaKind;
use crate::state::composer::{next_progress, UPLOAD_DONE};
use crate::tasks::TaskGuard;

use super::{App, AppMessage, Focus};

/// Report upload progress for `upload_id` every `tick` until it reaches
/// 100. Stops early if the receiver is gone.
pub fn spawn_upload_ticker(
    tx: mpsc::UnboundedSender<AppMessage>,
    upload_id: String,
    tick: Duration,
) -> TaskGuard {
    TaskGuard::spawn(async move {
        let mut interval = tokio::time::interval(tick);
        // The first tick fires immediately.
        interval.tick().await;
        let mut progress = 0;
        while progress < UPLOAD_DONE {
            interval.tick().await;
            progress = next_progress(progress);
            let msg = AppMessage::UploadProgress {
                upload_id: upload_id.clone(),
                progress,
            };
            if tx.send(msg).is_err() {
                break;
            }
        }
    })
}

impl App {
    /// Attach one image to the draft.
    pub fn attach_image(&mut self, path: &Path) -> Result<(), MediaError> {
        if let Err(e) = probe_image(path) {
            self.composer.reject_image(&e);
            return Err(e);
        }
        self.pending_probe = None;
        let handle = self.media.acquire(path, MediaKind::Image);
        self.composer.add_images(vec![handle]).inspect_err(|e| {
            self.composer.reject_image(e);
        })
    }

    /// Probe a video in the background; the upload starts when
    /// [`AppMessage::VideoProbed`] comes back clean.
    pub fn pick_video(&mut self, path: PathBuf) -> bool {
        if self.composer.is_uploading() {
            self.composer.reject_image(&MediaError::UploadInProgress);
            return false;
        }
        let probe_id = Uuid::new_v4().simple().to_string();
        let tx = self.message_tx.clone();
        let id = probe_id.clone();
        let guard = TaskGuard::spawn(async move {
            let result = probe_video(&path).await;
            let _ = tx.send(AppMessage::VideoProbed {
                probe_id: id,
                path,
                result,
            });
        });
        self.pending_probe = Some((probe_id, guard));
        true
    }

    pub fn is_probing(&self) -> bool {
        self.pending_probe.is_some()
    }

    pub(super) fn apply_video_probe(
        &mut self,
        probe_id: &str,
        path: PathBuf,
        result: Result<VideoInfo, MediaError>,
    ) {
        match &self.pending_probe {
            Some((pending, _)) if pending == probe_id => {}
            _ => {
                debug!(probe = %probe_id, "stale video probe ignored");
                return;
            }
        }
        self.pending_probe = None;

        let info = match result {
            Ok(info) => info,
            Err(e) => {
                warn!(path = %path.display(), code = e.error_code(), "video rejected: {}", e);
                self.composer.reject_video(&e);
                return;
            }
        };

        let handle = self.media.acquire(&info.path, MediaKind::Video);
        match self.composer.begin_video(&info, handle) {
            Ok(upload_id) => {
                let ticker = spawn_upload_ticker(
                    self.message_tx.clone(),
                    upload_id.clone(),
                    self.config.upload_tick,
                );
                self.composer.attach_ticker(&upload_id, ticker);
            }
            Err(e) => warn!(path = %path.display(), code = e.error_code(), "video rejected: {}", e),
        }
    }

    /// Post the draft. Returns the new post id.
    pub fn submit_composer(&mut self) -> Option<String> {
        let draft = self.composer.submit()?;
        self.focus = Focus::Browse;
        Some(self.add_post(draft))
    }

    pub fn remove_composer_image(&mut self, index: usize) -> bool {
        self.composer.remove_image(index)
    }

    /// Drop the draft. Aborts an upload and any pending probe.
    pub fn discard_composer(&mut self) {
        self.pending_probe = None;
        self.composer.clear();
        self.focus = Focus::Browse;
    }
}
