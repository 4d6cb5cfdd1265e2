//! Post card rendering shared by the feed, profile and search views.
//!
//! Cards are built as plain lines so the caller can scroll a list of them
//! and keep the selected card in view.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::models::{Comment, Post};
use crate::state::MediaLayout;

use super::helpers::{spinner, truncate_to_width, wrap_text};
use super::theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_LIVE, COLOR_TEXT,
    COLOR_TRANSLATION,
};

/// Lines for one post card, separator included.
pub fn card_lines(app: &App, post: &Post, selected: bool, width: u16) -> Vec<Line<'static>> {
    let width = width.max(10) as usize;
    let body_width = width.saturating_sub(2);
    let card = app.card(&post.id);
    let mut lines = Vec::new();

    // Header: author, handle, time, follow state
    let name_style = if selected {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_HEADER)
    };
    let mut header = vec![
        Span::styled(if selected { "▌ " } else { "  " }, Style::default().fg(COLOR_ACCENT)),
        Span::styled(post.user.name.clone(), name_style),
        Span::styled(
            format!("  @{} · {}", post.user.handle, post.created_at),
            Style::default().fg(COLOR_DIM),
        ),
    ];
    if post.user.id != app.current_user.id {
        let following = app.follows.contains(&post.user.id);
        let (key, color) = if following {
            ("post.following", COLOR_ACTIVE)
        } else {
            ("post.follow", COLOR_DIM)
        };
        header.push(Span::styled(format!("  [{}]", app.t(key)), Style::default().fg(color)));
    }
    lines.push(Line::from(header));
    if !post.user.title.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate_to_width(&post.user.title, body_width)),
            Style::default().fg(COLOR_DIM),
        )));
    }

    // Content, or the edit notice while the author is editing
    let editing = card.is_some_and(|c| c.editing);
    if editing {
        lines.push(Line::from(Span::styled(
            format!("  ✎ {}", app.t("post.edit")),
            Style::default().fg(COLOR_ACCENT),
        )));
    } else {
        for text in wrap_text(&post.content, body_width) {
            lines.push(Line::from(Span::styled(format!("  {}", text), Style::default().fg(COLOR_TEXT))));
        }
    }

    // Translation sits directly under the content
    if let Some(card) = card {
        if card.translating {
            lines.push(Line::from(Span::styled(
                format!("  {} {}", spinner(app.tick_count), app.t("post.translating")),
                Style::default().fg(COLOR_DIM),
            )));
        } else if let Some(translated) = card.visible_translation() {
            for text in wrap_text(translated, body_width.saturating_sub(2)) {
                lines.push(Line::from(Span::styled(
                    format!("  ┆ {}", text),
                    Style::default().fg(COLOR_TRANSLATION),
                )));
            }
            lines.push(Line::from(Span::styled(
                format!("  t: {}", app.t("post.hide_translation")),
                Style::default().fg(COLOR_DIM),
            )));
        }
    }

    let playing = card.is_some_and(|c| c.playing);
    lines.extend(media_lines(app, &MediaLayout::for_post(post, playing), body_width));

    // Counters
    let like_style = if post.liked {
        Style::default().fg(COLOR_ACTIVE)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("♥ {} {}", post.likes, app.t("post.like")), like_style),
        Span::styled(
            format!(
                "   💬 {} {}   ↻ {} {}",
                post.comments.len(),
                app.t("post.comments"),
                post.shares,
                app.t("post.share")
            ),
            Style::default().fg(COLOR_DIM),
        ),
    ]));

    if card.is_some_and(|c| c.menu_open) {
        lines.push(Line::from(Span::styled(
            format!("  [e] {}  [d] {}", app.t("post.edit"), app.t("post.delete")),
            Style::default().fg(COLOR_ACCENT),
        )));
    }

    let comment_cursor = if selected { app.comment_cursor } else { None };
    for (i, comment) in post.comments.iter().enumerate() {
        lines.push(comment_line(app, comment, comment_cursor == Some(i), body_width));
    }

    lines.push(Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(COLOR_BORDER),
    )));
    lines
}

fn comment_line(app: &App, comment: &Comment, selected: bool, width: usize) -> Line<'static> {
    let prefix = if selected { "  ▸ " } else { "    " };
    let mut spans = vec![
        Span::styled(prefix, Style::default().fg(COLOR_ACCENT)),
        Span::styled(
            format!("{}: ", comment.user.name),
            Style::default().fg(COLOR_HEADER),
        ),
    ];
    let text_width = width.saturating_sub(comment.user.name.len() + 6);
    if comment.is_translating {
        spans.push(Span::styled(
            truncate_to_width(&comment.text, text_width),
            Style::default().fg(COLOR_TEXT),
        ));
        spans.push(Span::styled(
            format!("  {}", spinner(app.tick_count)),
            Style::default().fg(COLOR_DIM),
        ));
    } else if comment.translation.is_some() {
        spans.push(Span::styled(
            truncate_to_width(comment.display_text(), text_width),
            Style::default().fg(COLOR_TRANSLATION),
        ));
        if selected {
            spans.push(Span::styled(
                format!("  o: {}", app.t("post.show_original")),
                Style::default().fg(COLOR_DIM),
            ));
        }
    } else {
        spans.push(Span::styled(
            truncate_to_width(&comment.text, text_width),
            Style::default().fg(COLOR_TEXT),
        ));
    }
    Line::from(spans)
}

fn image_tile(url: &str, width: usize) -> String {
    format!("[🖼 {}]", truncate_to_width(url, width.saturating_sub(5)))
}

/// Media placeholders. A terminal cannot show the pictures, so each tile
/// shows its source URL in the arrangement the layout calls for.
pub fn media_lines(app: &App, layout: &MediaLayout, width: usize) -> Vec<Line<'static>> {
    let dim = Style::default().fg(COLOR_DIM);
    let text = Style::default().fg(COLOR_TEXT);
    match layout {
        MediaLayout::None => Vec::new(),
        MediaLayout::Single(url) => vec![Line::from(Span::styled(format!("  {}", image_tile(url, width)), text))],
        MediaLayout::Pair(a, b) => {
            let half = width / 2;
            vec![Line::from(Span::styled(
                format!("  {} {}", image_tile(a, half), image_tile(b, half)),
                text,
            ))]
        }
        MediaLayout::FeaturePlusTwo(a, b, c) => {
            let half = width / 2;
            let feature = image_tile(a, half);
            let pad = " ".repeat(feature.width());
            vec![
                Line::from(Span::styled(format!("  {} {}", feature, image_tile(b, half)), text)),
                Line::from(Span::styled(format!("  {} {}", pad, image_tile(c, half)), text)),
            ]
        }
        MediaLayout::Grid { columns, urls } => {
            let columns = (*columns).max(1) as usize;
            let tile = width / columns;
            urls.chunks(columns)
                .map(|row| {
                    let tiles: Vec<String> = row.iter().map(|u| image_tile(u, tile)).collect();
                    Line::from(Span::styled(format!("  {}", tiles.join(" ")), text))
                })
                .collect()
        }
        MediaLayout::VideoThumbnail { url, replay } => {
            let mut spans = vec![Span::styled("  ▶ ", Style::default().fg(COLOR_ACCENT))];
            if *replay {
                spans.push(Span::styled(
                    format!("{} ", app.t("post.replay")),
                    Style::default().fg(COLOR_LIVE).add_modifier(Modifier::BOLD),
                ));
            }
            spans.push(Span::styled(truncate_to_width(url, width.saturating_sub(12)), dim));
            vec![Line::from(spans)]
        }
        MediaLayout::VideoPlayback { url } => vec![Line::from(vec![
            Span::styled("  ⏸ ", Style::default().fg(COLOR_ACTIVE)),
            Span::styled(truncate_to_width(url, width.saturating_sub(6)), text),
        ])],
        MediaLayout::Live { url, viewers } => vec![
            Line::from(vec![
                Span::styled(
                    format!("  ● {}", app.t("post.live")),
                    Style::default().fg(COLOR_LIVE).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {} {}", viewers, app.t("post.viewers")), dim),
            ]),
            Line::from(Span::styled(format!("  {}", image_tile(url, width)), text)),
        ],
    }
}

/// Cards for `posts`, plus the line index where the selected card starts.
pub fn list_lines(
    app: &App,
    posts: &[&Post],
    selected: Option<usize>,
    width: u16,
) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut selected_start = 0;
    for (i, post) in posts.iter().enumerate() {
        if selected == Some(i) {
            selected_start = lines.len();
        }
        lines.extend(card_lines(app, post, selected == Some(i), width));
    }
    (lines, selected_start)
}

/// Scroll offset that keeps `selected_start` on screen.
pub fn scroll_for(selected_start: usize, height: u16) -> u16 {
    let height = height as usize;
    if selected_start < height / 3 {
        0
    } else {
        (selected_start - height / 3) as u16
    }
}
