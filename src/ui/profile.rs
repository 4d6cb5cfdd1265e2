//! Profile view: header, stats, posts/media tabs and the owner's edit form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::models::User;
use crate::state::profile::stats;
use crate::state::{ProfileDraft, ProfileField, ProfileTab};
use crate::widgets::InputBoxWidget;

use super::feed::render_post_list;
use super::helpers::{tab_line, truncate_to_width};
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};

pub fn render_profile(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(draft) = app.profile.draft() {
        render_edit_form(frame, area, app, draft);
        return;
    }

    let user = app.profile_user();
    let header = header_lines(app, &user, area.width as usize);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header.len() as u16),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(header), chunks[0]);

    let labels = [app.t("profile.posts"), app.t("profile.media")];
    let selected = match app.profile.tab {
        ProfileTab::Posts => 0,
        ProfileTab::Media => 1,
    };
    frame.render_widget(Paragraph::new(tab_line(&labels, selected)), chunks[1]);

    let posts = app.profile.posts(&app.store, &user.id);
    render_post_list(frame, chunks[2], app, &posts, Some(app.profile.cursor));
}

fn header_lines(app: &App, user: &User, width: usize) -> Vec<Line<'static>> {
    let dim = Style::default().fg(COLOR_DIM);
    let mut lines = vec![Line::from(Span::styled(
        truncate_to_width(&format!("▒ {}", user.cover_image), width),
        dim,
    ))];

    let mut name = vec![
        Span::styled(
            user.name.clone(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  @{}", user.handle), dim),
    ];
    if user.id == app.current_user.id {
        name.push(Span::styled(format!("  [E] {}", app.t("profile.edit")), dim));
    } else {
        let (key, color) = if app.follows.contains(&user.id) {
            ("post.following", COLOR_ACTIVE)
        } else {
            ("post.follow", COLOR_DIM)
        };
        name.push(Span::styled(format!("  [{}]", app.t(key)), Style::default().fg(color)));
    }
    lines.push(Line::from(name));

    lines.push(Line::from(Span::styled(
        truncate_to_width(&format!("{} · {}", user.title, user.location), width),
        Style::default().fg(COLOR_TEXT),
    )));
    if !user.bio.is_empty() {
        lines.push(Line::from(Span::styled(truncate_to_width(&user.bio, width), Style::default().fg(COLOR_TEXT))));
    }

    let s = stats(&app.store, user);
    lines.push(Line::from(vec![
        Span::styled(format!("{} ", s.posts), Style::default().fg(COLOR_ACCENT)),
        Span::styled(app.t("profile.posts").to_string(), dim),
        Span::styled(format!("   {} ", s.followers), Style::default().fg(COLOR_ACCENT)),
        Span::styled(app.t("profile.followers").to_string(), dim),
        Span::styled(format!("   {} ", s.following), Style::default().fg(COLOR_ACCENT)),
        Span::styled(app.t("profile.following").to_string(), dim),
    ]));
    lines
}

fn render_edit_form(frame: &mut Frame, area: Rect, app: &App, draft: &ProfileDraft) {
    let mut constraints: Vec<Constraint> = ProfileField::ALL.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in ProfileField::ALL.iter().enumerate() {
        let widget = InputBoxWidget::new(
            draft.field(*field),
            app.t(field.label_key()),
            draft.focus == *field,
        );
        frame.render_widget(widget, chunks[i]);
    }

    let image = |label: &str, name: Option<String>, current: &str| {
        Line::from(vec![
            Span::styled(format!("{}: ", label), Style::default().fg(COLOR_DIM)),
            match name {
                Some(name) => Span::styled(name, Style::default().fg(COLOR_ACTIVE)),
                None => Span::styled(current.to_string(), Style::default().fg(COLOR_TEXT)),
            },
        ])
    };
    let user = &app.current_user;
    let images = vec![
        image(
            app.t("profile.avatar"),
            draft.avatar().map(|h| h.file_name()),
            &user.avatar,
        ),
        image(
            app.t("profile.cover"),
            draft.cover().map(|h| h.file_name()),
            &user.cover_image,
        ),
    ];
    frame.render_widget(Paragraph::new(images), chunks[ProfileField::ALL.len()]);
}
