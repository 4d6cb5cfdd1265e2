//! Rendering against ratatui's TestBackend.

mod common;

use std::time::Duration;

use common::{ctrl, key, press, pump_until, signed_in_app, type_text, write_mp4, TestAppBuilder};
use crossterm::event::KeyCode;
use kizuna::app::{App, NavTarget};
use kizuna::i18n::Locale;
use kizuna::seed;
use kizuna::ui;
use ratatui::{backend::TestBackend, Terminal};
use tempfile::TempDir;
use unicode_width::UnicodeWidthStr;

/// Screen contents, one line per row. Cells covered by a wide character
/// are skipped so CJK text reads as written.
fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();

    let mut out = String::new();
    for y in 0..buffer.area.height {
        let mut x = 0;
        while x < buffer.area.width {
            let symbol = buffer[(x, y)].symbol();
            out.push_str(symbol);
            x += symbol.width().max(1) as u16;
        }
        out.push('\n');
    }
    out
}

#[tokio::test]
async fn test_feed_shows_nav_and_authors() {
    let (app, _rx) = signed_in_app();
    let screen = render_to_string(&app, 120, 50);

    assert!(screen.contains("Kizuna"));
    for label in ["Feed", "Network", "Messages", "Search", "Me"] {
        assert!(screen.contains(label), "missing nav label {}", label);
    }
    let author = seed::user("u1").unwrap();
    assert!(screen.contains(&author.name));
}

#[tokio::test]
async fn test_japanese_locale_relabels_navigation() {
    let (mut app, _rx) = signed_in_app();
    app.i18n.set_locale(Locale::Ja);
    let screen = render_to_string(&app, 120, 50);
    assert!(screen.contains("フィード"));
    assert!(screen.contains("検索"));
}

#[tokio::test]
async fn test_locale_cycle_reaches_screen() {
    let (mut app, _rx) = signed_in_app();
    let before = render_to_string(&app, 120, 50);
    press(&mut app, &[ctrl('l')]);
    let after = render_to_string(&app, 120, 50);
    assert_ne!(before, after);
    assert!(after.contains(&format!(" {} ", app.i18n.locale().code())));
}

#[tokio::test]
async fn test_sign_in_screen_lists_accounts() {
    let (app, _rx) = TestAppBuilder::new().signed_out().build();
    let screen = render_to_string(&app, 100, 40);
    assert!(screen.contains("Choose an account"));
    let first = &seed::users()[0];
    assert!(screen.contains(&first.name));
}

#[tokio::test]
async fn test_tiny_terminal_does_not_panic() {
    let (mut app, _rx) = signed_in_app();
    for target in NavTarget::ALL {
        app.navigate(target);
        render_to_string(&app, 20, 6);
        render_to_string(&app, 1, 1);
    }
    let (app, _rx) = TestAppBuilder::new().signed_out().build();
    render_to_string(&app, 10, 3);
}

#[tokio::test]
async fn test_upload_completion_message() {
    let dir = TempDir::new().unwrap();
    let path = write_mp4(dir.path(), "clip.mp4", 30);
    let (mut app, mut rx) = signed_in_app();

    press(&mut app, &[key(KeyCode::Char('v'))]);
    type_text(&mut app, &path.display().to_string());
    press(&mut app, &[key(KeyCode::Enter)]);
    let done = pump_until(&mut app, &mut rx, Duration::from_secs(5), |app| {
        app.composer.video().is_some_and(|v| v.is_complete())
    })
    .await;
    assert!(done);

    let screen = render_to_string(&app, 120, 50);
    assert!(screen.contains("Video uploaded successfully!"));
}

#[tokio::test]
async fn test_path_prompt_is_drawn_over_view() {
    let (mut app, _rx) = signed_in_app();
    press(&mut app, &[key(KeyCode::Char('i'))]);
    type_text(&mut app, "~/pic.png");
    let screen = render_to_string(&app, 100, 40);
    assert!(screen.contains("~/pic.png"));
}

#[tokio::test]
async fn test_notice_replaces_help_line() {
    let (mut app, _rx) = signed_in_app();
    app.set_notice("Something went sideways");
    let screen = render_to_string(&app, 120, 40);
    assert!(screen.contains("Something went sideways"));
}
