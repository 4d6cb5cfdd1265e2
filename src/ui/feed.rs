//! Feed view: composer on top, post cards below.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use crate::models::Post;
use crate::widgets::InputBoxWidget;

use super::helpers::{progress_bar, spinner, truncate_to_width};
use super::post_card::{list_lines, scroll_for};
use super::theme::{COLOR_ACTIVE, COLOR_DIM, COLOR_ERROR, COLOR_TEXT};

pub fn render_feed(frame: &mut Frame, area: Rect, app: &App) {
    let composer = composer_lines(app, area.width);
    let editor_height = if matches!(app.focus, Focus::Comment | Focus::EditPost) { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3 + composer.len() as u16),
            Constraint::Min(1),
            Constraint::Length(editor_height),
        ])
        .split(area);

    render_composer(frame, chunks[0], app, composer);

    let posts: Vec<&Post> = app.store.posts().iter().collect();
    render_post_list(frame, chunks[1], app, &posts, Some(app.feed_cursor));

    if editor_height > 0 {
        render_card_editor(frame, chunks[2], app);
    }
}

fn render_composer(frame: &mut Frame, area: Rect, app: &App, extra: Vec<Line<'static>>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let input = InputBoxWidget::new(
        &app.composer.text,
        app.t("composer.post"),
        app.focus == Focus::Composer,
    )
    .placeholder(app.t("composer.placeholder"));
    frame.render_widget(input, chunks[0]);
    frame.render_widget(Paragraph::new(extra), chunks[1]);
}

/// Attachment, upload and error lines under the composer input.
fn composer_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = Vec::new();
    let composer = &app.composer;

    if !composer.images().is_empty() {
        let names: Vec<String> = composer.images().iter().map(|h| h.file_name()).collect();
        lines.push(Line::from(Span::styled(
            truncate_to_width(&format!(" 🖼 {}", names.join(", ")), width),
            Style::default().fg(COLOR_TEXT),
        )));
    }

    if app.is_probing() {
        lines.push(Line::from(Span::styled(
            format!(" {} {}", spinner(app.tick_count), app.t("video")),
            Style::default().fg(COLOR_DIM),
        )));
    }

    if let Some(video) = composer.video() {
        if video.is_complete() {
            lines.push(Line::from(Span::styled(
                format!(" ✓ {}", app.t("composer.uploaded")),
                Style::default().fg(COLOR_ACTIVE),
            )));
        } else {
            let label = format!(" {} {} ", app.t("composer.uploading"), video.file_name());
            let mut line = progress_bar(video.progress(), 20);
            line.spans.insert(0, Span::styled(label, Style::default().fg(COLOR_DIM)));
            lines.push(line);
        }
    }

    if let Some(error) = composer.error() {
        lines.push(Line::from(Span::styled(
            format!(" ✗ {}", error),
            Style::default().fg(COLOR_ERROR),
        )));
    }

    lines.push(Line::from(Span::styled(
        format!(
            " [i] {}  [v] {}  [g] {}",
            app.t("composer.image"),
            app.t("video"),
            app.t("composer.live")
        ),
        Style::default().fg(COLOR_DIM),
    )));
    lines
}

/// Scrollable list of cards keeping the selection in view.
pub fn render_post_list(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    posts: &[&Post],
    selected: Option<usize>,
) {
    let (lines, selected_start) = list_lines(app, posts, selected, area.width);
    let scroll = scroll_for(selected_start, area.height);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

/// Comment or edit input for the selected card.
pub fn render_card_editor(frame: &mut Frame, area: Rect, app: &App) {
    let Some(card) = app.selected_post_id().and_then(|id| app.card(&id)) else {
        return;
    };
    let (input, title) = match app.focus {
        Focus::EditPost => (&card.edit_buffer, app.t("post.edit")),
        _ => (&card.comment_draft, app.t("post.comment")),
    };
    let widget = InputBoxWidget::new(input, title, true).placeholder(app.t("post.comment_placeholder"));
    frame.render_widget(widget, area);
}
