//! Common test utilities for integration tests.
//!
//! Fixtures for building a signed-in [`App`], pumping its async message
//! channel, and writing small MP4 files with a chosen duration.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kizuna::adapters::{InMemorySession, MockTranslator};
use kizuna::app::{App, AppMessage, AuthStatus};
use kizuna::config::KizunaConfig;
use kizuna::input::CommandRegistry;
use kizuna::seed;
use tokio::sync::mpsc::UnboundedReceiver;

/// Builder for test [`App`] instances.
pub struct TestAppBuilder {
    translator: MockTranslator,
    config: KizunaConfig,
    signed_in: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            translator: MockTranslator::new(),
            config: KizunaConfig::default().with_upload_tick(Duration::from_millis(5)),
            signed_in: true,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_translator(mut self, translator: MockTranslator) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_config(mut self, config: KizunaConfig) -> Self {
        self.config = config;
        self
    }

    pub fn signed_out(mut self) -> Self {
        self.signed_in = false;
        self
    }

    /// The app plus its message receiver, taken so the test can pump it.
    pub fn build(self) -> (App, UnboundedReceiver<AppMessage>) {
        let mut app = App::new(
            self.config,
            Arc::new(self.translator),
            Arc::new(InMemorySession::new()),
        );
        let rx = app.message_rx.take().expect("fresh app owns its receiver");
        let user = self.signed_in.then(|| seed::user(seed::DEFAULT_USER_ID)).flatten();
        app.handle_message(AppMessage::SessionChecked { user });
        if self.signed_in {
            assert_eq!(app.auth, AuthStatus::Authenticated);
        }
        (app, rx)
    }
}

/// Signed-in app over seed data with a [`MockTranslator`].
pub fn signed_in_app() -> (App, UnboundedReceiver<AppMessage>) {
    TestAppBuilder::new().build()
}

/// Feed messages into the app until `done` holds or `timeout` passes.
/// Returns whether `done` was reached.
pub async fn pump_until<F>(
    app: &mut App,
    rx: &mut UnboundedReceiver<AppMessage>,
    timeout: Duration,
    mut done: F,
) -> bool
where
    F: FnMut(&App) -> bool,
{
    let deadline = tokio::time::Instant::now() + timeout;
    while !done(app) {
        match tokio::time::timeout_at(deadline, rx.recv()).await {
            Ok(Some(msg)) => app.handle_message(msg),
            Ok(None) | Err(_) => return done(app),
        }
    }
    true
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Press each key in order through the default bindings.
pub fn press(app: &mut App, keys: &[KeyEvent]) {
    let registry = CommandRegistry::new();
    for k in keys {
        app.handle_key(&registry, *k);
    }
}

/// Type a string one character at a time.
pub fn type_text(app: &mut App, text: &str) {
    let keys: Vec<KeyEvent> = text.chars().map(|c| key(KeyCode::Char(c))).collect();
    press(app, &keys);
}

/// Minimal ISO-BMFF file whose `mvhd` reports `secs` seconds.
pub fn mp4_bytes(secs: u32) -> Vec<u8> {
    let timescale: u32 = 1000;
    let duration = secs * timescale;

    let mut mvhd = Vec::new();
    mvhd.extend_from_slice(&(8u32 + 4 + 16 + 80).to_be_bytes());
    mvhd.extend_from_slice(b"mvhd");
    mvhd.extend_from_slice(&[0, 0, 0, 0]);
    mvhd.extend_from_slice(&0u32.to_be_bytes());
    mvhd.extend_from_slice(&0u32.to_be_bytes());
    mvhd.extend_from_slice(&timescale.to_be_bytes());
    mvhd.extend_from_slice(&duration.to_be_bytes());
    mvhd.extend_from_slice(&[0u8; 80]);

    let mut out = Vec::new();
    out.extend_from_slice(&16u32.to_be_bytes());
    out.extend_from_slice(b"ftypisom");
    out.extend_from_slice(&[0, 0, 2, 0]);
    out.extend_from_slice(&((8 + mvhd.len()) as u32).to_be_bytes());
    out.extend_from_slice(b"moov");
    out.extend_from_slice(&mvhd);
    out
}

pub fn write_mp4(dir: &Path, name: &str, secs: u32) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, mp4_bytes(secs)).expect("write test video");
    path
}
