//! Locally picked media files.
//!
//! A picked file becomes a [`MediaHandle`]: a `blob:` URL registered in the
//! shared [`MediaRegistry`]. Dropping the handle releases the URL unless it
//! was committed into a post, message or profile first.

pub mod probe;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::trace;
use uuid::Uuid;

use crate::models::MediaKind;

pub use probe::{mime_for_path, probe_image, probe_video, VideoInfo, MAX_VIDEO_SECS};

#[derive(Debug, Default)]
struct RegistryInner {
    live: HashMap<String, PathBuf>,
    released: usize,
}

/// Shared table of live `blob:` URLs.
#[derive(Debug, Clone, Default)]
pub struct MediaRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl MediaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Register a picked file and hand back its scoped handle.
    pub fn acquire(&self, path: impl Into<PathBuf>, kind: MediaKind) -> MediaHandle {
        let path = path.into();
        let url = format!("blob:kizuna/{}", Uuid::new_v4().simple());
        self.lock().live.insert(url.clone(), path.clone());
        trace!(%url, path = %path.display(), "media acquired");
        MediaHandle {
            url,
            path,
            kind,
            registry: self.clone(),
            committed: false,
        }
    }

    pub fn is_live(&self, url: &str) -> bool {
        self.lock().live.contains_key(url)
    }

    pub fn live_count(&self) -> usize {
        self.lock().live.len()
    }

    /// Number of handles released so far.
    pub fn released_count(&self) -> usize {
        self.lock().released
    }

    /// Local file behind a live URL.
    pub fn resolve(&self, url: &str) -> Option<PathBuf> {
        self.lock().live.get(url).cloned()
    }

    /// Drop a URL from the table, committed or not. Unknown URLs are ignored.
    pub fn release(&self, url: &str) {
        let mut inner = self.lock();
        if inner.live.remove(url).is_some() {
            inner.released += 1;
            trace!(%url, "media released");
        }
    }
}

/// Scoped reference to a picked file.
#[derive(Debug)]
pub struct MediaHandle {
    url: String,
    path: PathBuf,
    kind: MediaKind,
    registry: MediaRegistry,
    committed: bool,
}

impl MediaHandle {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.url.clone())
    }

    /// Keep the URL alive past the handle and return it.
    pub fn commit(mut self) -> String {
        self.committed = true;
        std::mem::take(&mut self.url)
    }
}

impl Drop for MediaHandle {
    fn drop(&mut self) {
        if !self.committed {
            self.registry.release(&self.url);
        }
    }
}
