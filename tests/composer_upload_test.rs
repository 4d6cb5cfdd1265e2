//! Composer video uploads driven from the keyboard: pick a file through
//! the path prompt, let the simulated ticker run, then post.

mod common;

use std::time::Duration;

use common::{key, press, pump_until, signed_in_app, type_text, write_mp4};
use crossterm::event::KeyCode;
use kizuna::app::AppMessage;
use kizuna::models::PostType;
use tempfile::TempDir;

const WAIT: Duration = Duration::from_secs(5);

fn pick_video(app: &mut kizuna::app::App, path: &std::path::Path) {
    press(app, &[key(KeyCode::Char('v'))]);
    assert!(app.path_prompt.is_some(), "v should open the path prompt");
    type_text(app, &path.display().to_string());
    press(app, &[key(KeyCode::Enter)]);
    assert!(app.path_prompt.is_none());
}

#[tokio::test]
async fn test_short_video_uploads_to_completion() {
    let dir = TempDir::new().unwrap();
    let path = write_mp4(dir.path(), "clip.mp4", 299);
    let (mut app, mut rx) = signed_in_app();

    pick_video(&mut app, &path);
    assert!(app.is_probing());

    let mut seen = Vec::new();
    let deadline = tokio::time::Instant::now() + WAIT;
    loop {
        let msg = tokio::time::timeout_at(deadline, rx.recv())
            .await
            .expect("upload should finish in time")
            .expect("channel open");
        app.handle_message(msg);
        if let Some(video) = app.composer.video() {
            if seen.last() != Some(&video.progress()) {
                seen.push(video.progress());
            }
            if video.is_complete() {
                break;
            }
        }
    }

    assert!(seen.windows(2).all(|w| w[0] < w[1]), "progress went backwards: {:?}", seen);
    assert_eq!(seen.last(), Some(&100));
    let video = app.composer.video().unwrap();
    assert!(video.thumbnail().is_some());
    assert_eq!(video.file_name(), "clip.mp4");
    assert!(app.composer.error().is_none());

    let before = app.store.len();
    let post_id = app.submit_composer().expect("completed upload can be posted");
    assert_eq!(app.store.len(), before + 1);
    let post = app.store.get(&post_id).unwrap();
    assert_eq!(post.post_type, PostType::Video);
    assert_eq!(post.media.len(), 1);
    assert!(app.composer.video().is_none());
}

#[tokio::test]
async fn test_long_video_is_rejected_without_ticker() {
    let dir = TempDir::new().unwrap();
    let path = write_mp4(dir.path(), "long.mp4", 301);
    let (mut app, mut rx) = signed_in_app();

    pick_video(&mut app, &path);
    let rejected = pump_until(&mut app, &mut rx, WAIT, |app| {
        !app.is_probing() && app.composer.error().is_some()
    })
    .await;
    assert!(rejected);
    assert!(app.composer.video().is_none());
    assert!(!app.composer.is_uploading());

    // No ticker was started, so nothing else arrives.
    let late = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
    assert!(
        !matches!(late, Ok(Some(AppMessage::UploadProgress { .. }))),
        "rejected video should not report progress"
    );
}

#[tokio::test]
async fn test_wrong_file_type_sets_inline_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"hello").unwrap();
    let (mut app, mut rx) = signed_in_app();

    pick_video(&mut app, &path);
    assert!(pump_until(&mut app, &mut rx, WAIT, |app| app.composer.error().is_some()).await);
    assert!(app.composer.video().is_none());
}

#[tokio::test]
async fn test_text_post_from_keyboard() {
    let (mut app, _rx) = signed_in_app();
    let before = app.store.len();

    press(&mut app, &[key(KeyCode::Char('n'))]);
    type_text(&mut app, "Hello from the terminal");
    press(&mut app, &[key(KeyCode::Enter)]);

    assert_eq!(app.store.len(), before + 1);
    let newest = &app.store.posts()[0];
    assert_eq!(newest.content, "Hello from the terminal");
    assert_eq!(newest.post_type, PostType::Text);
    assert_eq!(newest.user.id, app.current_user.id);
    assert!(app.composer.text.is_blank());
}

#[tokio::test]
async fn test_blank_draft_is_not_posted() {
    let (mut app, _rx) = signed_in_app();
    let before = app.store.len();

    press(&mut app, &[key(KeyCode::Char('n'))]);
    type_text(&mut app, "   ");
    press(&mut app, &[key(KeyCode::Enter)]);

    assert_eq!(app.store.len(), before);
}
