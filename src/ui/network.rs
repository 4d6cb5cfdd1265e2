//! Network view: connections, communities and opportunities tabs.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::state::{CommunitySort, NetworkTab};

use super::helpers::{marker, tab_line, truncate_to_width};
use super::post_card::scroll_for;
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_AI, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};

pub fn render_network(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let labels: Vec<&str> = NetworkTab::ALL.iter().map(|t| app.t(t.label_key())).collect();
    let selected = NetworkTab::ALL
        .iter()
        .position(|t| *t == app.network.tab)
        .unwrap_or(0);
    frame.render_widget(Paragraph::new(tab_line(&labels, selected)), chunks[0]);

    let width = chunks[1].width.saturating_sub(2) as usize;
    let (lines, selected_start) = match app.network.tab {
        NetworkTab::Connections => connection_lines(app, width),
        NetworkTab::Communities => community_lines(app, width),
        NetworkTab::Opportunities => opportunity_lines(app, width),
    };
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);
    let scroll = scroll_for(selected_start, inner.height);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_HEADER)
    }
}

fn connection_lines(app: &App, width: usize) -> (Vec<Line<'static>>, usize) {
    let people = app.network.connections(&app.current_user.id, &app.follows);
    let mut lines = Vec::new();
    let mut selected_start = 0;
    for (i, user) in people.iter().enumerate() {
        let selected = i == app.network.cursor;
        if selected {
            selected_start = lines.len();
        }
        lines.push(Line::from(vec![
            Span::styled(marker(selected), Style::default().fg(COLOR_ACCENT)),
            Span::styled(user.name.clone(), row_style(selected)),
            Span::styled(format!("  @{}", user.handle), Style::default().fg(COLOR_DIM)),
            Span::styled(format!("  [{}]", app.t("network.follow")), Style::default().fg(COLOR_DIM)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate_to_width(&format!("{} · {}", user.title, user.location), width)),
            Style::default().fg(COLOR_DIM),
        )));
    }
    (lines, selected_start)
}

fn community_lines(app: &App, width: usize) -> (Vec<Line<'static>>, usize) {
    let tags = &app.current_user.tags;
    let mut lines = Vec::new();

    let sorts: Vec<&str> = CommunitySort::ALL.iter().map(|s| app.t(s.label_key())).collect();
    let sort_index = CommunitySort::ALL
        .iter()
        .position(|s| *s == app.network.sort)
        .unwrap_or(0);
    let mut sort_line = tab_line(&sorts, sort_index);
    sort_line
        .spans
        .insert(0, Span::styled(format!("{}: ", app.t("network.sort")), Style::default().fg(COLOR_DIM)));
    lines.push(sort_line);

    if app.network.sort == CommunitySort::Recommended {
        let names: Vec<String> = app
            .network
            .ai_recommended(tags)
            .into_iter()
            .map(|c| c.name)
            .collect();
        if !names.is_empty() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("✦ {}: ", app.t("network.ai_recommended")),
                    Style::default().fg(COLOR_AI),
                ),
                Span::styled(
                    truncate_to_width(&names.join(", "), width.saturating_sub(24)),
                    Style::default().fg(COLOR_TEXT),
                ),
            ]));
        }
    }
    lines.push(Line::default());

    let mut selected_start = 0;
    for (i, community) in app.network.sorted_communities(tags).iter().enumerate() {
        let selected = i == app.network.cursor;
        if selected {
            selected_start = lines.len();
        }
        let (label, color) = if app.network.is_joined(&community.id) {
            (app.t("network.joined"), COLOR_ACTIVE)
        } else {
            (app.t("network.join"), COLOR_DIM)
        };
        lines.push(Line::from(vec![
            Span::styled(marker(selected), Style::default().fg(COLOR_ACCENT)),
            Span::styled(community.name.clone(), row_style(selected)),
            Span::styled(
                format!("  {} {}", community.member_count, app.t("network.members")),
                Style::default().fg(COLOR_DIM),
            ),
            Span::styled(format!("  [{}]", label), Style::default().fg(color)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate_to_width(&community.description, width)),
            Style::default().fg(COLOR_TEXT),
        )));
        if let Some(preview) = &community.latest_post_preview {
            lines.push(Line::from(Span::styled(
                format!("  “{}”", truncate_to_width(preview, width.saturating_sub(4))),
                Style::default().fg(COLOR_DIM),
            )));
        }
        if selected {
            let related = app.network.related_opportunities(community);
            if !related.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {}:", app.t("network.related")),
                    Style::default().fg(COLOR_DIM),
                )));
                for opp in related {
                    lines.push(Line::from(Span::styled(
                        format!("    • {} · {}", opp.title, opp.organization),
                        Style::default().fg(COLOR_TEXT),
                    )));
                }
            }
        }
    }
    (lines, selected_start)
}

fn opportunity_lines(app: &App, width: usize) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut selected_start = 0;
    for (i, opp) in app.network.opportunities().iter().enumerate() {
        let selected = i == app.network.cursor;
        if selected {
            selected_start = lines.len();
        }
        lines.push(Line::from(vec![
            Span::styled(marker(selected), Style::default().fg(COLOR_ACCENT)),
            Span::styled(opp.title.clone(), row_style(selected)),
            Span::styled(format!("  [{}]", opp.kind), Style::default().fg(COLOR_DIM)),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "  {}",
                truncate_to_width(&format!("{} · {}", opp.organization, opp.location), width)
            ),
            Style::default().fg(COLOR_DIM),
        )));
    }
    (lines, selected_start)
}
