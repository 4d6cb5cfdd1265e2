//! Messages view: conversation list on the left, open thread on the right.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::models::{format_timestamp, Conversation, DirectMessage, MediaKind};
use crate::widgets::InputBoxWidget;

use super::helpers::{marker, truncate_to_width, wrap_text};
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};

pub fn render_messages(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    render_conversation_list(frame, chunks[0], app);
    match app.conversations.selected() {
        Some(conversation) => render_thread(frame, chunks[1], app, conversation),
        None => {
            let empty = Paragraph::new(Span::styled(
                app.t("messages.empty"),
                Style::default().fg(COLOR_DIM),
            ))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(COLOR_BORDER)));
            frame.render_widget(empty, chunks[1]);
        }
    }
}

fn preview(app: &App, message: &DirectMessage) -> String {
    match message.media.as_ref().map(|m| m.kind) {
        Some(MediaKind::Image) => app.t("messages.photo").to_string(),
        Some(MediaKind::Video) => app.t("messages.video").to_string(),
        None => message.text.clone(),
    }
}

fn render_conversation_list(frame: &mut Frame, area: Rect, app: &App) {
    let me = app.conversations.me();
    let width = area.width.saturating_sub(4) as usize;
    let now = Local::now();
    let mut lines = Vec::new();

    for (i, conversation) in app.conversations.list().iter().enumerate() {
        let selected = i == app.conversations.cursor();
        let open = app.conversations.selected_id() == Some(conversation.id.as_str());
        let other = conversation.other_participant(me);
        let name_style = if selected {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_HEADER)
        };
        let mut header = vec![
            Span::styled(marker(selected), Style::default().fg(COLOR_ACCENT)),
            Span::styled(other.name.clone(), name_style),
        ];
        if open {
            header.push(Span::styled(" ●", Style::default().fg(COLOR_ACTIVE)));
        }
        if conversation.unread_count > 0 {
            header.push(Span::styled(
                format!(" ({})", conversation.unread_count),
                Style::default().fg(COLOR_ACCENT),
            ));
        }
        if let Some(last) = conversation.last_message() {
            header.push(Span::styled(
                format!("  {}", format_timestamp(last.timestamp, now)),
                Style::default().fg(COLOR_DIM),
            ));
        }
        lines.push(Line::from(header));
        let last = conversation
            .last_message()
            .map(|m| preview(app, m))
            .unwrap_or_default();
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate_to_width(&last, width)),
            Style::default().fg(COLOR_DIM),
        )));
    }

    let title = match app.conversations.total_unread() {
        0 => app.t("messages.title").to_string(),
        n => format!("{} ({})", app.t("messages.title"), n),
    };
    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(title),
    );
    frame.render_widget(list, area);
}

fn render_thread(frame: &mut Frame, area: Rect, app: &App, conversation: &Conversation) {
    let attachment = app.conversations.draft_media().is_some();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(if attachment { 1 } else { 0 }),
            Constraint::Length(3),
        ])
        .split(area);

    let me = app.conversations.me();
    let other = conversation.other_participant(me);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!("{} @{}", other.name, other.handle));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let width = inner.width.saturating_sub(2) as usize;
    let now = Local::now();
    let mut lines = Vec::new();
    for message in &conversation.messages {
        let mine = message.sender_id == me;
        let sender = if mine { app.t("messages.you").to_string() } else { other.name.clone() };
        lines.push(Line::from(vec![
            Span::styled(
                sender,
                Style::default().fg(if mine { COLOR_ACCENT } else { COLOR_HEADER }),
            ),
            Span::styled(
                format!("  {}", format_timestamp(message.timestamp, now)),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
        if let Some(media) = &message.media {
            let label = match media.kind {
                MediaKind::Image => app.t("messages.photo"),
                MediaKind::Video => app.t("messages.video"),
            };
            lines.push(Line::from(Span::styled(
                format!("  [{}] {}", label, truncate_to_width(&media.url, width.saturating_sub(12))),
                Style::default().fg(COLOR_DIM),
            )));
        }
        if !message.text.is_empty() {
            for text in wrap_text(&message.text, width) {
                lines.push(Line::from(Span::styled(format!("  {}", text), Style::default().fg(COLOR_TEXT))));
            }
        }
    }
    // Newest messages stay at the bottom
    let scroll = lines.len().saturating_sub(inner.height as usize) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);

    if let Some(handle) = app.conversations.draft_media() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" 📎 {}: {}", app.t("messages.attached"), handle.file_name()),
                Style::default().fg(COLOR_ACTIVE),
            )),
            chunks[1],
        );
    }

    let input = InputBoxWidget::new(
        &app.conversations.draft,
        app.t("messages.title"),
        app.focus == Focus::Chat,
    )
    .placeholder(app.t("messages.placeholder"));
    frame.render_widget(input, chunks[2]);
}
