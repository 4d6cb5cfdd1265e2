//! UI rendering for Kizuna
//!
//! Layout of a signed-in frame:
//! - Top: navigation bar (Feed, Network, Messages, Search, Me)
//! - Middle: the current view
//! - Bottom: notice or key hints for the focused element
//!
//! Modals draw on top. While signed out or still checking the session only
//! the sign-in screen is shown.

mod feed;
mod helpers;
mod live;
mod login;
mod messages;
mod modal;
mod network;
mod post_card;
mod profile;
mod search;
pub mod theme;

pub use helpers::{truncate_to_width, wrap_text};
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CURSOR, COLOR_DIM, COLOR_TEXT};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, AuthStatus, Focus, NavTarget, View};
use theme::{COLOR_ERROR, COLOR_HEADER, COLOR_LIVE};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on session state and current view
pub fn render(frame: &mut Frame, app: &App) {
    if app.auth != AuthStatus::Authenticated {
        login::render_login_screen(frame, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_nav_bar(frame, chunks[0], app);

    let content = chunks[1];
    match app.view {
        View::Feed => feed::render_feed(frame, content, app),
        View::Network => network::render_network(frame, content, app),
        View::Messages => messages::render_messages(frame, content, app),
        View::Search => search::render_search(frame, content, app),
        View::Profile => profile::render_profile(frame, content, app),
        View::LiveBroadcaster => live::render_live(frame, content, app),
    }

    render_footer(frame, chunks[2], app);
    modal::render_modals(frame, app);
}

// ============================================================================
// Chrome
// ============================================================================

fn render_nav_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.t("app.title")),
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];

    for (i, target) in NavTarget::ALL.iter().enumerate() {
        let active = target.is_active(app.view);
        let mut label = format!(" {} {} ", i + 1, app.t(target.label_key()));
        if *target == NavTarget::Messages {
            let unread = app.conversations.total_unread();
            if unread > 0 {
                label = format!(" {} {} ({}) ", i + 1, app.t(target.label_key()), unread);
            }
        }
        let style = if active {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(label, style));
    }

    if app.is_live() {
        spans.push(Span::styled(
            format!("  ● {}", app.t("post.live")),
            Style::default().fg(COLOR_LIVE).add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(
        format!("  {} ", app.i18n.locale().code()),
        Style::default().fg(COLOR_DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Key hints for the focused element.
pub fn help_key(app: &App) -> &'static str {
    match app.focus {
        Focus::Composer => "help.composer",
        Focus::Chat => "help.chat",
        Focus::ProfileForm => "help.profile_form",
        Focus::Comment | Focus::EditPost | Focus::SearchQuery | Focus::LiveChat => "help.input",
        Focus::Browse => match app.view {
            View::Feed => "help.feed",
            View::Network => "help.network",
            View::Messages => "help.messages",
            View::Search => "help.search",
            View::Profile => "help.profile",
            View::LiveBroadcaster => "help.live",
        },
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width.saturating_sub(1) as usize;
    let line = match &app.notice {
        Some(notice) => Line::from(Span::styled(
            truncate_to_width(&format!(" ✗ {}", notice), width),
            Style::default().fg(COLOR_ERROR),
        )),
        None => Line::from(Span::styled(
            truncate_to_width(&format!(" {}", app.t(help_key(app))), width),
            Style::default().fg(COLOR_DIM),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
