//! Search view: query input and sectioned results.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use crate::models::Post;
use crate::state::SearchSection;
use crate::widgets::InputBoxWidget;

use super::feed::render_post_list;
use super::helpers::{marker, tab_line, truncate_to_width};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

pub fn render_search(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let input = InputBoxWidget::new(
        &app.search.query,
        app.t("nav.search"),
        app.focus == Focus::SearchQuery,
    )
    .placeholder(app.t("search.placeholder"));
    frame.render_widget(input, chunks[0]);

    let results = app.search.results();
    let counts = [
        results.posts.len(),
        results.users.len(),
        results.communities.len(),
        results.opportunities.len(),
    ];
    let labels: Vec<String> = SearchSection::ALL
        .iter()
        .zip(counts)
        .map(|(section, n)| format!("{} ({})", app.t(section.label_key()), n))
        .collect();
    let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
    let selected = SearchSection::ALL
        .iter()
        .position(|s| *s == app.search.section)
        .unwrap_or(0);
    frame.render_widget(Paragraph::new(tab_line(&label_refs, selected)), chunks[1]);

    if results.is_empty() {
        if !app.search.query.is_blank() {
            frame.render_widget(
                Paragraph::new(Span::styled(app.t("search.no_results"), Style::default().fg(COLOR_DIM))),
                chunks[2],
            );
        }
        return;
    }

    let width = chunks[2].width.saturating_sub(4) as usize;
    let cursor = app.search.cursor;
    let row = |i: usize, title: String, detail: String| {
        let selected = i == cursor;
        let style = if selected {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_HEADER)
        };
        Line::from(vec![
            Span::styled(marker(selected), Style::default().fg(COLOR_ACCENT)),
            Span::styled(title, style),
            Span::styled(format!("  {}", truncate_to_width(&detail, width)), Style::default().fg(COLOR_DIM)),
        ])
    };

    let lines: Vec<Line> = match app.search.section {
        SearchSection::Posts => {
            let posts: Vec<&Post> = results.posts.iter().filter_map(|id| app.store.get(id)).collect();
            render_post_list(frame, chunks[2], app, &posts, Some(cursor));
            return;
        }
        SearchSection::People => results
            .users
            .iter()
            .enumerate()
            .map(|(i, u)| row(i, u.name.clone(), format!("@{} · {}", u.handle, u.title)))
            .collect(),
        SearchSection::Communities => results
            .communities
            .iter()
            .enumerate()
            .map(|(i, c)| row(i, c.name.clone(), c.description.clone()))
            .collect(),
        SearchSection::Opportunities => results
            .opportunities
            .iter()
            .enumerate()
            .map(|(i, o)| row(i, o.title.clone(), format!("{} · {}", o.organization, o.location)))
            .collect(),
    };
    frame.render_widget(Paragraph::new(lines), chunks[2]);
}
