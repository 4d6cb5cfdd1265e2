//! Broadcaster view: stream preview, clock and interpreted chat.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::state::{Broadcast, MediaLayout};
use crate::widgets::InputBoxWidget;

use super::helpers::{spinner, truncate_to_width, wrap_text};
use super::post_card::media_lines;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_LIVE, COLOR_TEXT, COLOR_TRANSLATION};

pub fn render_live(frame: &mut Frame, area: Rect, app: &App) {
    let Some(broadcast) = app.broadcast.as_ref() else {
        return;
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_stream(frame, chunks[0], app, broadcast);
    render_chat(frame, chunks[1], app, broadcast);
}

fn render_stream(frame: &mut Frame, area: Rect, app: &App, broadcast: &Broadcast) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_LIVE))
        .title(Span::styled(
            format!(" ● {} ", app.t("post.live")),
            Style::default().fg(COLOR_LIVE).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{}: ", app.t("live.elapsed")), Style::default().fg(COLOR_DIM)),
        Span::styled(
            broadcast.elapsed_label(),
            Style::default().fg(COLOR_LIVE).add_modifier(Modifier::BOLD),
        ),
    ])];

    if let Some(post) = app.store.get(broadcast.post_id()) {
        lines.push(Line::default());
        for text in wrap_text(&post.content, width) {
            lines.push(Line::from(Span::styled(text, Style::default().fg(COLOR_TEXT))));
        }
        if let Some(translated) = app.card(&post.id).and_then(|c| c.visible_translation()) {
            for text in wrap_text(translated, width.saturating_sub(2)) {
                lines.push(Line::from(Span::styled(
                    format!("┆ {}", text),
                    Style::default().fg(COLOR_TRANSLATION),
                )));
            }
        }
        lines.push(Line::default());
        lines.extend(media_lines(app, &MediaLayout::for_post(post, false), width));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("[E] {}", app.t("live.end")),
        Style::default().fg(COLOR_ACCENT),
    )));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_chat(frame: &mut Frame, area: Rect, app: &App, broadcast: &Broadcast) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(app.t("live.chat"));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let width = inner.width.saturating_sub(2) as usize;
    let mut lines = Vec::new();
    for line in broadcast.chat() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", line.author), Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                truncate_to_width(&line.text, width.saturating_sub(line.author.len() + 2)),
                Style::default().fg(COLOR_TEXT),
            ),
        ]));
        match &line.interpretation {
            None => lines.push(Line::from(Span::styled(
                format!("  {}", spinner(app.tick_count)),
                Style::default().fg(COLOR_DIM),
            ))),
            Some(text) => {
                for wrapped in wrap_text(text, width) {
                    lines.push(Line::from(Span::styled(
                        format!("  ↳ {}", wrapped),
                        Style::default().fg(COLOR_TRANSLATION),
                    )));
                }
            }
        }
    }
    let scroll = lines.len().saturating_sub(inner.height as usize) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);

    let input = InputBoxWidget::new(
        &broadcast.chat_input,
        app.t("live.chat"),
        app.focus == Focus::LiveChat,
    )
    .placeholder(app.t("live.chat_placeholder"));
    frame.render_widget(input, chunks[1]);
}
